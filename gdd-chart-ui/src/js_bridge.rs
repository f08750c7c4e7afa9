//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart lives in `assets/js/gdd-chart.js`, embedded at compile time
//! and evaluated as a global once D3 has loaded on the host page.

static GDD_CHART_JS: &str = include_str!("../assets/js/gdd-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GDD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The script is stored on `window` and evaluated at global scope (indirect
/// eval) once D3 is available, then `renderGddChart` is promoted to `window`.
pub fn init_charts() {
    let store_js = format!(
        "window.__gddChartScripts = {};",
        serde_json::to_string(GDD_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__gddChartsReady || window.__gddChartsPolling) return;
            window.__gddChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__gddChartScripts);
                    delete window.__gddChartScripts;
                    if (typeof renderGddChart !== 'undefined') window.renderGddChart = renderGddChart;
                    window.__gddChartsReady = true;
                    console.log('GDD chart initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the GDD/temperature chart: GDD on the left axis, the two
/// temperature series on the right. `null` values are drawn as gaps.
///
/// Polls until D3, the chart script and the container element are all ready.
pub fn render_gdd_chart(container_id: &str, data_json: &str, config_json: &str) {
    let data_literal = js_string_literal(data_json);
    let config_literal = js_string_literal(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gddChartsReady &&
                    typeof window.renderGddChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderGddChart('{container_id}', {data_literal}, {config_literal});
                    }} catch(e) {{ console.error('[GDD] renderGddChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Quote `text` as a double-quoted JS string literal.
///
/// JSON string syntax is valid JS, so quotes, backslashes and line breaks in
/// backend-supplied values survive into `JSON.parse` unchanged.
fn js_string_literal(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_literal_round_trips_awkward_payloads() {
        let payload = r#"[{"date":"2024-03-01 \"late\" frost","note":"C:\\temp\nit's"}]"#;
        let literal = js_string_literal(payload);

        assert!(literal.starts_with('"') && literal.ends_with('"'));
        assert!(!literal.contains('\n'));
        let decoded: String = serde_json::from_str(&literal).unwrap();
        assert_eq!(decoded, payload);
        let parsed: serde_json::Value = serde_json::from_str(&decoded).unwrap();
        assert_eq!(parsed[0]["date"], "2024-03-01 \"late\" frost");
    }
}
