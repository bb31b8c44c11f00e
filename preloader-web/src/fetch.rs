//! Keep the preloader up for the lifetime of async work.

use crate::exports::to_js_error;
use preloader_core::{LoadingIndicator, PresentationTarget, Result};
use serde::de::DeserializeOwned;
use std::future::Future;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Run `future` with the indicator held. The indicator is released when the
/// future completes or when the returned future is dropped.
pub async fn with_loading<T, F>(indicator: &LoadingIndicator<T>, future: F) -> Result<F::Output>
where
    T: PresentationTarget,
    F: Future,
{
    let _loading = indicator.lock()?;
    Ok(future.await)
}

fn js_error(message: String) -> JsValue {
    js_sys::Error::new(&message).into()
}

/// GET `url` and decode its JSON body, with the indicator held until the
/// body has been read.
pub async fn fetch_json<T, D>(
    indicator: &LoadingIndicator<T>,
    url: &str,
) -> std::result::Result<D, JsValue>
where
    T: PresentationTarget,
    D: DeserializeOwned,
{
    let _loading = indicator.lock().map_err(to_js_error)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| js_error("no global `window` exists".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    if !resp.ok() {
        return Err(js_error(format!(
            "GET {} failed with status {}",
            url,
            resp.status()
        )));
    }

    let body = JsFuture::from(resp.text()?).await?;
    let body = body
        .as_string()
        .ok_or_else(|| js_error(format!("GET {} returned a non-text body", url)))?;
    log::debug!("GET {} returned {} bytes", url, body.len());

    serde_json::from_str(&body)
        .map_err(|e| js_error(format!("GET {} returned invalid JSON: {}", url, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use preloader_core::Visibility;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Counting {
        shows: Rc<Cell<usize>>,
        hides: Rc<Cell<usize>>,
    }

    impl PresentationTarget for Counting {
        fn show(&self) -> Result<()> {
            self.shows.set(self.shows.get() + 1);
            Ok(())
        }

        fn hide(&self) -> Result<()> {
            self.hides.set(self.hides.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn with_loading_holds_indicator_while_running() {
        let target = Counting::default();
        let indicator = LoadingIndicator::new(target.clone());
        let observer = indicator.clone();

        let output = block_on(with_loading(&indicator, async move {
            assert_eq!(observer.visibility(), Visibility::Visible);
            42
        }))
        .unwrap();

        assert_eq!(output, 42);
        assert_eq!(indicator.level(), 0);
        assert_eq!(target.shows.get(), 1);
        assert_eq!(target.hides.get(), 1);
    }

    #[test]
    fn with_loading_nests_inside_outer_operation() {
        let target = Counting::default();
        let indicator = LoadingIndicator::new(target.clone());
        let outer = indicator.lock().unwrap();

        block_on(with_loading(&indicator, async {})).unwrap();
        assert_eq!(indicator.level(), 1);
        assert_eq!(target.hides.get(), 0);

        drop(outer);
        assert_eq!(target.shows.get(), 1);
        assert_eq!(target.hides.get(), 1);
    }
}
