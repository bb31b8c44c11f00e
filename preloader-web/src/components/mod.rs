//! Dioxus RSX pieces for pages that host the preloader.

mod preloader;

pub use preloader::{preloader_css, use_loading_indicator, Preloader, PreloaderProps};
