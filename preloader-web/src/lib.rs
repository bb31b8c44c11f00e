//! Browser binding for the shared preloader.
//!
//! This crate provides:
//! - `dom`: `ClassList` implementations over `web_sys::Element`, either
//!   injected once or looked up by id on every call
//! - `exports`: the `loadingStart()` / `loadingEnd()` JS API backed by one
//!   default indicator per thread
//! - `fetch`: helpers that keep the preloader up while a future or a
//!   `window.fetch` request is in flight
//! - `components`: the `Preloader` RSX element and `use_loading_indicator` hook

pub mod components;
pub mod dom;
pub mod exports;
pub mod fetch;

pub use dom::{
    dom_indicator, find_element, lookup_indicator, DomElement, DomIndicator, ElementLookup,
    LookupIndicator,
};
pub use exports::{configure_default, default_indicator, to_js_error};
pub use fetch::{fetch_json, with_loading};
