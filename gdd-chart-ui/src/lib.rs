//! Shared Dioxus layer for the GDD dashboard.
//!
//! This crate provides:
//! - `fetch`: `GddSource` over the browser's `window.fetch`
//! - `js_bridge`: Rust wrappers for the D3.js chart via `js_sys::eval()`
//! - `state`: `AppState` holding the request controller in a Dioxus Signal
//! - `components`: RSX components for the form, summary, table and chart

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
