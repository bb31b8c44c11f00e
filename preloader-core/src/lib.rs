//! Reference-counted show/hide gate for a shared loading indicator.
//!
//! This crate provides:
//! - `indicator`: `LoadingIndicator`, a cloneable counter that shows its target
//!   on the first `start()` and hides it when the last `end()` lands, plus the
//!   RAII `LoadingGuard`
//! - `target`: the `PresentationTarget` / `ClassList` seams and the
//!   `ClassMarkers` adapter that toggles the visible/hidden CSS classes
//! - `config`: `PreloaderConfig`, the element id and marker class names
//! - `error`: `PreloaderError` and the crate `Result` alias
//!
//! Nothing here depends on the browser; `preloader-web` supplies the DOM
//! implementations.

pub mod config;
pub mod error;
pub mod indicator;
pub mod target;

pub use config::PreloaderConfig;
pub use error::{PreloaderError, Result};
pub use indicator::{LoadingGuard, LoadingIndicator, Visibility};
pub use target::{ClassList, ClassMarkers, PresentationTarget};
