//! `ClassList` implementations backed by the page DOM.
//!
//! Two binding modes:
//! - `DomElement` wraps an element found once, up front
//! - `ElementLookup` resolves `document.getElementById` on every mutation,
//!   so the markup may be swapped out between calls
//!
//! Either way a missing element is an error, never a silent no-op.

use preloader_core::{
    ClassList, ClassMarkers, LoadingIndicator, PreloaderConfig, PreloaderError, Result,
};
use std::cell::RefCell;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Indicator bound to an element resolved at construction.
pub type DomIndicator = LoadingIndicator<ClassMarkers<DomElement>>;
/// Indicator that looks its element up on every show/hide.
pub type LookupIndicator = LoadingIndicator<ClassMarkers<ElementLookup>>;

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(PreloaderError::NoDocument)
}

/// Render a thrown JS value for an error message.
pub(crate) fn describe_js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn dom_error(err: JsValue) -> PreloaderError {
    PreloaderError::Dom(describe_js_error(&err))
}

/// Look up an element by id in the current document.
pub fn find_element(id: &str) -> Result<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| PreloaderError::ElementNotFound { id: id.to_string() })
}

/// An element handle injected into the indicator.
#[derive(Debug, Clone)]
pub struct DomElement(Element);

impl DomElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    pub fn find(id: &str) -> Result<Self> {
        find_element(id).map(Self)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl ClassList for DomElement {
    fn add_class(&self, class: &str) -> Result<()> {
        self.0.class_list().add_1(class).map_err(dom_error)
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        self.0.class_list().remove_1(class).map_err(dom_error)
    }
}

/// Resolves the element by id each time a class is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementLookup {
    id: RefCell<String>,
}

impl ElementLookup {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: RefCell::new(id.into()),
        }
    }

    pub fn id(&self) -> String {
        self.id.borrow().clone()
    }

    /// Point later lookups at a different element.
    pub fn set_id(&self, id: impl Into<String>) {
        *self.id.borrow_mut() = id.into();
    }
}

impl ClassList for ElementLookup {
    fn add_class(&self, class: &str) -> Result<()> {
        DomElement::find(&self.id())?.add_class(class)
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        DomElement::find(&self.id())?.remove_class(class)
    }
}

/// Build an indicator bound to the element named by `config`, which must
/// already be in the page.
pub fn dom_indicator(config: PreloaderConfig) -> Result<DomIndicator> {
    config.validate()?;
    let element = DomElement::find(&config.element_id)?;
    Ok(LoadingIndicator::new(ClassMarkers::new(element, config)))
}

/// Build an indicator that finds its element lazily. The element only has
/// to exist by the time the first transition happens.
pub fn lookup_indicator(config: PreloaderConfig) -> Result<LookupIndicator> {
    config.validate()?;
    Ok(new_lookup_indicator(config))
}

pub(crate) fn new_lookup_indicator(config: PreloaderConfig) -> LookupIndicator {
    let lookup = ElementLookup::new(config.element_id.clone());
    LoadingIndicator::new(ClassMarkers::new(lookup, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_indicator_rejects_invalid_config() {
        let config = PreloaderConfig {
            hidden_class: "scale-in".to_string(),
            ..PreloaderConfig::default()
        };
        assert!(matches!(
            lookup_indicator(config),
            Err(PreloaderError::InvalidConfig(_))
        ));
    }

    #[test]
    fn lookup_indicator_binds_configured_id_without_touching_dom() {
        let config = PreloaderConfig {
            element_id: "spinner".to_string(),
            ..PreloaderConfig::default()
        };
        let indicator = lookup_indicator(config).unwrap();
        assert_eq!(indicator.target().element().id(), "spinner");
        assert_eq!(indicator.target().config().visible_class, "scale-in");
        assert_eq!(indicator.level(), 0);
    }

    #[test]
    fn dom_indicator_validates_before_touching_dom() {
        let config = PreloaderConfig {
            element_id: String::new(),
            ..PreloaderConfig::default()
        };
        assert!(matches!(
            dom_indicator(config),
            Err(PreloaderError::InvalidConfig(_))
        ));
    }

    #[test]
    fn element_lookup_can_be_retargeted() {
        let lookup = ElementLookup::new("preloader");
        lookup.set_id("spinner");
        assert_eq!(lookup.id(), "spinner");
        assert_eq!(lookup, ElementLookup::new("spinner"));
    }
}
