//! Browser File I/O
//!
//! Downloads, reading a chosen file and shrinking photos before they are
//! stored as data URLs.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::{PlannerError, PlannerResult};

fn document() -> PlannerResult<web_sys::Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PlannerError::Browser("no document".into()))
}

/// Offer `contents` as a file download
pub fn download_text(filename: &str, mime: &str, contents: &str) -> PlannerResult<()> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(PlannerError::browser)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(PlannerError::browser)?;

    let doc = document()?;
    let anchor: web_sys::HtmlAnchorElement = doc
        .create_element("a")
        .map_err(PlannerError::browser)?
        .dyn_into()
        .map_err(|_| PlannerError::Browser("not an anchor".into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = doc.body().ok_or_else(|| PlannerError::Browser("no body".into()))?;
    body.append_child(&anchor).map_err(PlannerError::browser)?;
    anchor.click();
    anchor.remove();
    web_sys::Url::revoke_object_url(&url).map_err(PlannerError::browser)?;
    Ok(())
}

pub async fn read_file_text(file: &web_sys::File) -> PlannerResult<String> {
    let text = JsFuture::from(file.text()).await.map_err(PlannerError::browser)?;
    text.as_string().ok_or_else(|| PlannerError::Browser("file is not text".into()))
}

/// Size after fitting into `max_width`, keeping the aspect ratio.
/// Narrower images keep their size.
pub fn scaled_size(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width || width == 0 {
        return (width, height);
    }
    let scale = f64::from(max_width) / f64::from(width);
    (max_width, (f64::from(height) * scale).round() as u32)
}

async fn load_image(src: &str) -> PlannerResult<web_sys::HtmlImageElement> {
    let img = web_sys::HtmlImageElement::new().map_err(PlannerError::browser)?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(src);
    JsFuture::from(loaded)
        .await
        .map_err(|_| PlannerError::Browser("image failed to load".into()))?;
    img.set_onload(None);
    img.set_onerror(None);
    Ok(img)
}

/// Downscale a photo to `max_width` and re-encode it as a JPEG data URL
pub async fn downscale_image(file: &web_sys::File, max_width: u32, quality: f64) -> PlannerResult<String> {
    let url = web_sys::Url::create_object_url_with_blob(file).map_err(PlannerError::browser)?;
    let img = load_image(&url).await;
    let _ = web_sys::Url::revoke_object_url(&url);
    let img = img?;

    let (width, height) = scaled_size(img.natural_width(), img.natural_height(), max_width);
    let canvas: web_sys::HtmlCanvasElement = document()?
        .create_element("canvas")
        .map_err(PlannerError::browser)?
        .dyn_into()
        .map_err(|_| PlannerError::Browser("not a canvas".into()))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: web_sys::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(PlannerError::browser)?
        .ok_or_else(|| PlannerError::Browser("no 2d context".into()))?
        .dyn_into()
        .map_err(|_| PlannerError::Browser("unexpected context type".into()))?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, f64::from(width), f64::from(height))
        .map_err(PlannerError::browser)?;

    let data_url = canvas
        .to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(quality))
        .map_err(PlannerError::browser)?;
    log::debug!("[IMAGE] Encoded {}x{} photo, {} bytes", width, height, data_url.len());
    Ok(data_url)
}
