use crate::errors::ExportError;

/// How long an object URL outlives the click that starts its download.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const REVOKE_DELAY: std::time::Duration = std::time::Duration::from_secs(1);

/// Hands `contents` to the browser as a file download named `filename`.
#[cfg(feature = "hydrate")]
pub fn download_text(filename: &str, mime: &str, contents: &str) -> Result<(), ExportError> {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let browser_error = |err: JsValue| ExportError::Download(format!("{:?}", err));

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts).map_err(browser_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(browser_error)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Download("document unavailable".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(browser_error)?
        .dyn_into()
        .map_err(|_| ExportError::Download("anchor cast failed".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| ExportError::Download("document has no body".to_string()))?;
    body.append_child(&anchor).map_err(browser_error)?;
    anchor.click();
    anchor.remove();

    // The browser fetches the blob after this task ends.
    leptos::leptos_dom::helpers::set_timeout(
        move || {
            let _ = Url::revoke_object_url(&url);
        },
        REVOKE_DELAY,
    );
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
pub fn download_text(_filename: &str, _mime: &str, _contents: &str) -> Result<(), ExportError> {
    Err(ExportError::Download(
        "downloads are only available in the browser".to_string(),
    ))
}
