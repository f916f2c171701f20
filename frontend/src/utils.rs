use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use portfolio_shared::{Lang, ScrollEffect};
use wasm_bindgen::JsCast;
use web_sys::{window, Blob, HtmlAnchorElement, HtmlElement, ScrollBehavior, Storage, Url};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn read_storage(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn write_storage(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn html_element() -> Option<web_sys::Element> {
    window()?.document()?.document_element()
}

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

pub fn browser_prefers_chinese() -> bool {
    window()
        .and_then(|win| win.navigator().language())
        .map(|language| language.to_ascii_lowercase().starts_with("zh"))
        .unwrap_or(false)
}

pub fn set_document_lang(lang: Lang) {
    if let Some(html) = html_element() {
        let _ = html.set_attribute("lang", lang.as_str());
    }
}

pub fn has_dark_class() -> bool {
    html_element()
        .map(|html| html.class_list().contains("dark"))
        .unwrap_or(false)
}

pub fn set_dark_class(dark: bool) {
    if let Some(html) = html_element() {
        let classes = html.class_list();
        let _ = if dark { classes.add_1("dark") } else { classes.remove_1("dark") };
    }
}

/// Keeps the page behind a modal from scrolling.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "unset" });
    }
}

pub fn scroll_to_top() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn scroll_to_anchor(selector: &str) {
    let Some(element) = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Applies a router scroll effect once the new view has rendered.
pub fn apply_scroll(effect: &ScrollEffect) {
    match effect {
        ScrollEffect::Top => scroll_to_top(),
        ScrollEffect::Anchor {
            target,
            delay,
        } => {
            let target = target.clone();
            Timeout::new(delay.as_millis() as u32, move || scroll_to_anchor(&target)).forget();
        },
    }
}

/// Saves the image at `url` as `file_name`; when the image cannot be fetched
/// as a blob it is opened in a new tab instead.
pub async fn download_artwork(url: &str, file_name: &str) {
    if let Err(err) = download_blob(url, file_name).await {
        web_sys::console::error_1(&format!("Download failed: {err}").into());
        if let Some(win) = window() {
            let _ = win.open_with_url_and_target(url, "_blank");
        }
    }
}

async fn download_blob(url: &str, file_name: &str) -> Result<(), String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    let bytes = response
        .binary()
        .await
        .map_err(|e| format!("Read error: {:?}", e))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(|e| format!("{e:?}"))?;
    let blob_url = Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

    let document = window()
        .and_then(|win| win.document())
        .ok_or_else(|| "no document".to_string())?;
    let body = document.body().ok_or_else(|| "no body".to_string())?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into()
        .map_err(|_| "not an anchor".to_string())?;
    link.set_href(&blob_url);
    link.set_download(file_name);

    let _ = body.append_child(&link);
    link.click();
    let _ = body.remove_child(&link);
    let _ = Url::revoke_object_url(&blob_url);
    Ok(())
}
