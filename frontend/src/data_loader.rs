//! Fetches `creators.json` with cache bypass.

use shared::{Creator, GalleryConfig, LoadError, data_url, parse_creators};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

/// One GET against the configured data path, `no-store` and (optionally) `?ts=`.
pub async fn fetch_creators(config: &GalleryConfig) -> Result<Vec<Creator>, LoadError> {
    let cache_bust = config
        .data
        .cache_bust
        .then(|| js_sys::Date::now() as u64);
    let url = data_url(&config.data.path, cache_bust);
    zoon::println!("[LOADER] GET {}", url);

    let body = fetch_text(&url).await?;
    let creators = parse_creators(&body)?;
    zoon::println!("[LOADER] {} creators loaded", creators.len());
    Ok(creators)
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(url, &init).map_err(network_error)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?
        .dyn_into()
        .map_err(network_error)?;

    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
            status_text: response.status_text(),
            url: url.to_string(),
        });
    }

    let text = JsFuture::from(response.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    text.as_string()
        .ok_or_else(|| LoadError::Network("response body is not text".to_string()))
}

fn network_error(error: JsValue) -> LoadError {
    let message = error
        .as_string()
        .or_else(|| {
            error
                .dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{:?}", error));
    LoadError::Network(message)
}
