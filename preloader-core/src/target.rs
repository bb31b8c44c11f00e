//! What the indicator drives: a show/hide capability, and the class-marker
//! adapter that implements it on top of an element's class list.

use crate::config::PreloaderConfig;
use crate::error::Result;
use std::cell::{Ref, RefCell};

/// Something that can be made visible or hidden.
pub trait PresentationTarget {
    /// Enter the VISIBLE state.
    fn show(&self) -> Result<()>;
    /// Enter the HIDDEN state.
    fn hide(&self) -> Result<()>;
}

/// Minimal class-list mutation capability of an element.
pub trait ClassList {
    fn add_class(&self, class: &str) -> Result<()>;
    fn remove_class(&self, class: &str) -> Result<()>;
}

/// Drives a [`ClassList`] through the two mutually exclusive markers of a
/// [`PreloaderConfig`].
///
/// The config sits in a `RefCell` so it can be swapped on a live indicator
/// without replacing the counter that handles already point at.
#[derive(Debug, Clone)]
pub struct ClassMarkers<C> {
    element: C,
    config: RefCell<PreloaderConfig>,
}

impl<C: ClassList> ClassMarkers<C> {
    pub fn new(element: C, config: PreloaderConfig) -> Self {
        Self {
            element,
            config: RefCell::new(config),
        }
    }

    pub fn element(&self) -> &C {
        &self.element
    }

    pub fn config(&self) -> Ref<'_, PreloaderConfig> {
        self.config.borrow()
    }

    /// Replace the markers used by later transitions. Classes already on
    /// the element are left alone.
    pub fn set_config(&self, config: PreloaderConfig) -> Result<()> {
        config.validate()?;
        *self.config.borrow_mut() = config;
        Ok(())
    }
}

impl<C: ClassList> PresentationTarget for ClassMarkers<C> {
    fn show(&self) -> Result<()> {
        let config = self.config.borrow().clone();
        self.element.remove_class(&config.hidden_class)?;
        self.element.add_class(&config.visible_class)
    }

    fn hide(&self) -> Result<()> {
        let config = self.config.borrow().clone();
        self.element.remove_class(&config.visible_class)?;
        self.element.add_class(&config.hidden_class)
    }
}

/// In-memory class list that records every mutation, for tests.
#[cfg(test)]
pub(crate) mod recording {
    use super::ClassList;
    use crate::error::{PreloaderError, Result};
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeSet;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Mutation {
        Add(String),
        Remove(String),
    }

    /// Clones share the same log so a test can keep one after handing
    /// the other to an indicator.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingClassList {
        classes: Rc<RefCell<BTreeSet<String>>>,
        log: Rc<RefCell<Vec<Mutation>>>,
        missing: Rc<Cell<bool>>,
    }

    impl RecordingClassList {
        pub fn with_classes(classes: &[&str]) -> Self {
            let list = Self::default();
            list.classes
                .borrow_mut()
                .extend(classes.iter().map(|c| c.to_string()));
            list
        }

        /// Make every call fail as if the element had been removed.
        pub fn set_missing(&self, missing: bool) {
            self.missing.set(missing);
        }

        pub fn has(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }

        pub fn log(&self) -> Vec<Mutation> {
            self.log.borrow().clone()
        }

        pub fn count(&self, mutation: &Mutation) -> usize {
            self.log.borrow().iter().filter(|m| *m == mutation).count()
        }

        fn check(&self) -> Result<()> {
            if self.missing.get() {
                Err(PreloaderError::ElementNotFound {
                    id: "preloader".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    impl ClassList for RecordingClassList {
        fn add_class(&self, class: &str) -> Result<()> {
            self.check()?;
            self.classes.borrow_mut().insert(class.to_string());
            self.log.borrow_mut().push(Mutation::Add(class.to_string()));
            Ok(())
        }

        fn remove_class(&self, class: &str) -> Result<()> {
            self.check()?;
            self.classes.borrow_mut().remove(class);
            self.log
                .borrow_mut()
                .push(Mutation::Remove(class.to_string()));
            Ok(())
        }
    }
}
