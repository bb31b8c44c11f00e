//! Preloader demo page
//!
//! Drives the shared `#preloader` element three ways:
//! 1. Start / End buttons call the indicator directly, so the level can be
//!    pushed up and down by hand (including unbalanced ends).
//! 2. "Run task" holds the indicator across a timer via `with_loading`.
//! 3. "Fetch" GETs a JSON document through `fetch_json`.
//!
//! Overlapping operations keep the badge up until the last one finishes.

use anyhow::anyhow;
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, Level};
use preloader_core::{PreloaderConfig, Visibility};
use preloader_web::components::{use_loading_indicator, Preloader};
use preloader_web::{configure_default, fetch_json, with_loading, LookupIndicator};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Marker config for this page's markup.
const PRELOADER_CONFIG: &str =
    r#"{"elementId": "preloader", "visibleClass": "scale-in", "hiddenClass": "scale-out"}"#;

/// How long the simulated task keeps the indicator up.
const TASK_MS: i32 = 2000;

const DEFAULT_URL: &str = "https://httpbin.org/json";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    if let Err(e) = PreloaderConfig::from_json(PRELOADER_CONFIG).and_then(configure_default) {
        error!("Preloader config rejected: {}", e);
    }
    info!("Starting preloader demo");
    launch(App);
}

fn js_err(err: JsValue) -> anyhow::Error {
    anyhow!("{:?}", err)
}

/// Resolve after `ms` milliseconds.
async fn sleep_ms(ms: i32) -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))?;
    // A failed setTimeout rejects, so the awaiting guard still drops.
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms) {
            if let Err(e) = reject.call1(&JsValue::NULL, &e) {
                error!("Failed to reject timer promise: {:?}", e);
            }
        }
    });
    JsFuture::from(promise).await.map_err(js_err)?;
    Ok(())
}

async fn run_task(indicator: LookupIndicator, mut level: Signal<usize>) -> anyhow::Result<()> {
    let task = async {
        level.set(indicator.level());
        sleep_ms(TASK_MS).await
    };
    with_loading(&indicator, task).await??;
    Ok(())
}

async fn run_fetch(indicator: LookupIndicator, url: String) -> anyhow::Result<String> {
    let value: serde_json::Value = fetch_json(&indicator, &url).await.map_err(js_err)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

#[component]
fn App() -> Element {
    let indicator = use_loading_indicator();
    let mut level = use_signal(|| indicator.level());
    let mut error_msg = use_signal(|| None::<String>);
    let mut payload = use_signal(|| None::<String>);
    let mut url = use_signal(|| DEFAULT_URL.to_string());

    let on_start = {
        let indicator = indicator.clone();
        move |_| {
            if let Err(e) = indicator.start() {
                error_msg.set(Some(e.to_string()));
            }
            level.set(indicator.level());
        }
    };

    let on_end = {
        let indicator = indicator.clone();
        move |_| {
            if let Err(e) = indicator.end() {
                error_msg.set(Some(e.to_string()));
            }
            level.set(indicator.level());
        }
    };

    let on_task = {
        let indicator = indicator.clone();
        move |_| {
            let indicator = indicator.clone();
            spawn(async move {
                if let Err(e) = run_task(indicator.clone(), level).await {
                    error_msg.set(Some(e.to_string()));
                }
                level.set(indicator.level());
            });
        }
    };

    let on_fetch = {
        let indicator = indicator.clone();
        move |_| {
            let indicator = indicator.clone();
            let target = url();
            info!("Fetching {}", target);
            spawn(async move {
                match run_fetch(indicator.clone(), target).await {
                    Ok(body) => {
                        error_msg.set(None);
                        payload.set(Some(body));
                    }
                    Err(e) => error_msg.set(Some(e.to_string())),
                }
                level.set(indicator.level());
            });
        }
    };

    let visibility = Visibility::from_level(level());
    let markers = indicator.target().config().clone();

    rsx! {
        Preloader {
            id: markers.element_id,
            visible_class: markers.visible_class,
            hidden_class: markers.hidden_class,
        }
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            h1 { style: "color: #2c3e50;", "Preloader" }
            p {
                style: "color: #666;",
                "Loading level: "
                strong { "{level}" }
                " ({visibility})"
            }

            if let Some(err) = error_msg() {
                div {
                    style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                    strong { "Error: " }
                    "{err}"
                }
            }

            div {
                style: "display: flex; gap: 8px; margin: 12px 0;",
                button { onclick: on_start, "Start" }
                button { onclick: on_end, "End" }
                button { onclick: on_task, "Run task ({TASK_MS} ms)" }
            }

            div {
                style: "display: flex; gap: 8px; margin: 12px 0;",
                input {
                    r#type: "url",
                    value: "{url}",
                    style: "flex: 1;",
                    oninput: move |evt: Event<FormData>| url.set(evt.value()),
                }
                button { onclick: on_fetch, "Fetch" }
            }

            if let Some(body) = payload() {
                pre {
                    style: "background: #f5f5f5; padding: 8px; border-radius: 4px; overflow-x: auto; font-size: 12px;",
                    "{body}"
                }
            }
        }
    }
}
