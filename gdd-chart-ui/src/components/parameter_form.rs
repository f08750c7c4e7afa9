//! Inputs for location, base temperature and planting date.

use crate::state::AppState;
use dioxus::prelude::*;
use gdd_core::dates::format_date;

/// The three query inputs. Every change goes straight to the controller,
/// which decides whether a new request is due.
#[component]
pub fn ParameterForm() -> Element {
    let mut state = use_context::<AppState>();
    let params = state.controller.read().params().clone();

    let location = params.location.clone();
    let base_temp = if params.base_temperature.is_nan() {
        String::new()
    } else {
        params.base_temperature.to_string()
    };
    let planting_date = params
        .planting_date
        .as_ref()
        .map(format_date)
        .unwrap_or_default();

    let on_location = move |evt: Event<FormData>| {
        let pending = state.controller.write().set_location(evt.value());
        state.dispatch(pending);
    };

    let on_base_temp = move |evt: Event<FormData>| {
        let pending = state.controller.write().set_base_temperature_input(&evt.value());
        state.dispatch(pending);
    };

    let on_planting_date = move |evt: Event<FormData>| {
        let pending = state.controller.write().set_planting_date_input(&evt.value());
        state.dispatch(pending);
    };

    rsx! {
        div {
            style: "margin: 8px 0 20px 0; display: flex; flex-wrap: wrap; gap: 20px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Location: "
                input {
                    r#type: "text",
                    value: "{location}",
                    style: "margin-left: 8px;",
                    oninput: on_location,
                }
            }
            label {
                style: "font-weight: bold;",
                "Base Temperature (°C): "
                input {
                    r#type: "number",
                    value: "{base_temp}",
                    style: "margin-left: 8px; width: 80px;",
                    oninput: on_base_temp,
                }
            }
            label {
                style: "font-weight: bold;",
                "Planting Date: "
                input {
                    r#type: "date",
                    value: "{planting_date}",
                    style: "margin-left: 8px;",
                    onchange: on_planting_date,
                }
            }
        }
    }
}
