//! Reference-counted show/hide gate.
//!
//! `LoadingIndicator` counts unmatched `start()` calls. The target is shown on
//! the 0 -> 1 transition and hidden whenever an `end()` leaves the count at 0.
//! Intermediate calls never touch the target.
//!
//! The counter lives in a `Cell` behind an `Rc` so the indicator is cheap to
//! clone and hand to event handlers and futures in single-threaded WASM;
//! every clone drives the same count.

use crate::error::Result;
use crate::target::PresentationTarget;
use log::{debug, error, trace};
use serde::Serialize;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Visibility of the target, derived from the loading level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Level is 0
    Hidden,
    /// Level is above 0
    Visible,
}

impl Visibility {
    pub fn from_level(level: usize) -> Self {
        if level > 0 {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Hidden => write!(f, "hidden"),
            Visibility::Visible => write!(f, "visible"),
        }
    }
}

struct Inner<T> {
    level: Cell<usize>,
    target: T,
}

/// Shared loading indicator.
///
/// # Example
///
/// ```rust
/// use preloader_core::{LoadingIndicator, PresentationTarget, Result, Visibility};
///
/// struct Noop;
///
/// impl PresentationTarget for Noop {
///     fn show(&self) -> Result<()> { Ok(()) }
///     fn hide(&self) -> Result<()> { Ok(()) }
/// }
///
/// let indicator = LoadingIndicator::new(Noop);
/// indicator.start().unwrap();
/// assert_eq!(indicator.visibility(), Visibility::Visible);
/// indicator.end().unwrap();
/// assert_eq!(indicator.level(), 0);
/// ```
pub struct LoadingIndicator<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for LoadingIndicator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for LoadingIndicator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingIndicator")
            .field("level", &self.inner.level.get())
            .finish_non_exhaustive()
    }
}

impl<T> LoadingIndicator<T> {
    /// Number of `start()` calls without a matching `end()`.
    pub fn level(&self) -> usize {
        self.inner.level.get()
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::from_level(self.level())
    }

    pub fn is_loading(&self) -> bool {
        self.level() > 0
    }

    pub fn target(&self) -> &T {
        &self.inner.target
    }

    /// Whether both handles drive the same counter.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: PresentationTarget> LoadingIndicator<T> {
    /// Create an indicator at level 0. The target is assumed to start hidden
    /// and is not touched.
    pub fn new(target: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                level: Cell::new(0),
                target,
            }),
        }
    }

    /// Begin a loading operation.
    ///
    /// Shows the target when the level is 0, then increments the level.
    /// If showing fails the level is left unchanged.
    pub fn start(&self) -> Result<()> {
        if self.inner.level.get() == 0 {
            self.inner.target.show()?;
            debug!("Preloader shown");
        }
        let level = self.inner.level.get() + 1;
        self.inner.level.set(level);
        trace!("Loading level raised to {}", level);
        Ok(())
    }

    /// Finish a loading operation.
    ///
    /// Decrements the level if it is above 0, then hides the target if the
    /// level is 0. An `end()` at level 0 is absorbed and re-applies the
    /// hidden state.
    pub fn end(&self) -> Result<()> {
        let level = self.inner.level.get();
        if level > 0 {
            self.inner.level.set(level - 1);
            trace!("Loading level lowered to {}", level - 1);
        } else {
            debug!("Unbalanced end() at loading level 0");
        }
        if self.inner.level.get() == 0 {
            self.inner.target.hide()?;
            if level > 0 {
                debug!("Preloader hidden");
            }
        }
        Ok(())
    }

    /// Start a loading operation that ends when the returned guard drops.
    pub fn lock(&self) -> Result<LoadingGuard<T>> {
        self.start()?;
        Ok(LoadingGuard {
            indicator: Some(self.clone()),
        })
    }
}

/// Ends its loading operation on drop.
///
/// Holds a clone of the indicator, so it can be moved into futures that
/// outlive the scope that created it.
#[must_use = "dropping the guard immediately ends the loading operation"]
pub struct LoadingGuard<T: PresentationTarget> {
    indicator: Option<LoadingIndicator<T>>,
}

impl<T: PresentationTarget> LoadingGuard<T> {
    /// End now and report any failure, instead of logging it on drop.
    pub fn release(mut self) -> Result<()> {
        match self.indicator.take() {
            Some(indicator) => indicator.end(),
            None => Ok(()),
        }
    }
}

impl<T: PresentationTarget> fmt::Debug for LoadingGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingGuard")
            .field("active", &self.indicator.is_some())
            .finish()
    }
}

impl<T: PresentationTarget> Drop for LoadingGuard<T> {
    fn drop(&mut self) {
        if let Some(indicator) = self.indicator.take() {
            if let Err(e) = indicator.end() {
                error!("Failed to hide preloader: {}", e);
            }
        }
    }
}
