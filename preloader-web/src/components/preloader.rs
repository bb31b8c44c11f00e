//! Preloader element component.
//!
//! Renders the element the indicator drives, starting in the hidden state.
//! After mount Dioxus never rewrites its `class`, so the markers added by
//! the indicator survive re-renders of the parent.

use crate::dom::LookupIndicator;
use crate::exports::default_indicator;
use dioxus::prelude::*;
use preloader_core::config::{DEFAULT_ELEMENT_ID, DEFAULT_HIDDEN_CLASS, DEFAULT_VISIBLE_CLASS};

/// Scale transition keyed on the given visible / hidden markers.
pub fn preloader_css(visible_class: &str, hidden_class: &str) -> String {
    format!(
        ".preloader {{ transition: transform 0.2s ease-in-out; }}\n\
         .preloader.{visible_class} {{ transform: scale(1); }}\n\
         .preloader.{hidden_class} {{ transform: scale(0); }}\n"
    )
}

/// Props for Preloader
#[derive(Props, Clone, PartialEq)]
pub struct PreloaderProps {
    /// DOM id the indicator looks up
    #[props(default = DEFAULT_ELEMENT_ID.to_string())]
    pub id: String,
    /// Marker the indicator adds on show
    #[props(default = DEFAULT_VISIBLE_CLASS.to_string())]
    pub visible_class: String,
    /// Marker applied before the first `start()`
    #[props(default = DEFAULT_HIDDEN_CLASS.to_string())]
    pub hidden_class: String,
    /// Text shown inside the indicator
    #[props(default = "Loading...".to_string())]
    pub label: String,
}

/// Fixed-position loading badge, hidden until the indicator shows it.
#[component]
pub fn Preloader(props: PreloaderProps) -> Element {
    let css = preloader_css(&props.visible_class, &props.hidden_class);
    rsx! {
        style { "{css}" }
        div {
            id: "{props.id}",
            class: "preloader {props.hidden_class}",
            style: "position: fixed; top: 16px; right: 16px; padding: 8px 14px; background: #2196F3; color: white; border-radius: 4px; font-family: system-ui, -apple-system, sans-serif; box-shadow: 0 2px 6px rgba(0,0,0,0.2);",
            "{props.label}"
        }
    }
}

/// The page-wide indicator, shared with the `loadingStart()` /
/// `loadingEnd()` JS exports.
pub fn use_loading_indicator() -> LookupIndicator {
    use_hook(default_indicator)
}
