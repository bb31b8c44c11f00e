//! JS-facing API.
//!
//! Pages call `loadingStart()` before and `loadingEnd()` after any slow
//! operation. All calls on a thread share one default indicator, which looks
//! up `#preloader` on every transition. A missing element is thrown to the
//! JS caller as an `Error`.

use crate::dom::{new_lookup_indicator, LookupIndicator};
use preloader_core::{PreloaderConfig, PreloaderError, Result};
use wasm_bindgen::prelude::*;

thread_local! {
    static DEFAULT_INDICATOR: LookupIndicator = new_lookup_indicator(PreloaderConfig::default());
}

/// Convert an error into a thrown JS `Error`.
pub fn to_js_error(err: PreloaderError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Handle to this thread's default indicator. Every handle, including ones
/// taken before a reconfigure, drives the same counter.
pub fn default_indicator() -> LookupIndicator {
    DEFAULT_INDICATOR.with(LookupIndicator::clone)
}

/// Retarget the default indicator at a new element id and markers.
///
/// Refused while any operation is in flight, so a shown element is always
/// hidden with the markers it was shown with.
pub fn configure_default(config: PreloaderConfig) -> Result<()> {
    config.validate()?;
    DEFAULT_INDICATOR.with(|indicator| {
        let level = indicator.level();
        if level > 0 {
            return Err(PreloaderError::Busy { level });
        }
        let markers = indicator.target();
        markers.element().set_id(config.element_id.clone());
        log::info!("Preloader bound to #{}", config.element_id);
        markers.set_config(config)
    })
}

#[wasm_bindgen(js_name = loadingStart)]
pub fn loading_start() -> std::result::Result<(), JsValue> {
    default_indicator().start().map_err(to_js_error)
}

#[wasm_bindgen(js_name = loadingEnd)]
pub fn loading_end() -> std::result::Result<(), JsValue> {
    default_indicator().end().map_err(to_js_error)
}

#[wasm_bindgen(js_name = loadingLevel)]
pub fn loading_level() -> usize {
    default_indicator().level()
}

/// Takes a JSON object with optional `elementId`, `visibleClass` and
/// `hiddenClass` fields.
#[wasm_bindgen(js_name = loadingConfigure)]
pub fn loading_configure(config_json: &str) -> std::result::Result<(), JsValue> {
    PreloaderConfig::from_json(config_json)
        .and_then(configure_default)
        .map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_indicator_is_shared() {
        let a = default_indicator();
        let b = default_indicator();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.target().element().id(), "preloader");
    }

    #[test]
    fn configure_keeps_handles_taken_earlier() {
        let mounted = default_indicator();
        let config = PreloaderConfig {
            element_id: "busy-spinner".to_string(),
            visible_class: "fade-in".to_string(),
            hidden_class: "fade-out".to_string(),
        };

        configure_default(config).unwrap();

        let after = default_indicator();
        assert!(mounted.ptr_eq(&after));
        assert_eq!(mounted.target().element().id(), "busy-spinner");
        assert_eq!(mounted.target().config().hidden_class, "fade-out");
    }

    #[test]
    fn configure_rejects_invalid_config_and_keeps_current() {
        let before = default_indicator();
        let config = PreloaderConfig {
            visible_class: String::new(),
            ..PreloaderConfig::default()
        };

        assert!(matches!(
            configure_default(config),
            Err(PreloaderError::InvalidConfig(_))
        ));
        assert!(before.ptr_eq(&default_indicator()));
        assert_eq!(*before.target().config(), PreloaderConfig::default());
        assert_eq!(before.target().element().id(), "preloader");
    }
}
