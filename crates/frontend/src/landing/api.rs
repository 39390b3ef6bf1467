//! Landing page - API functions

use crate::shared::api_utils::api_url;
use contracts::upload::BulkUploadResponse;

/// Upload all selected files in one multipart request.
///
/// One part per file under the "file" field. No retry and no explicit
/// timeout; a non-2xx status is a generic failure.
pub async fn bulk_upload(files: Vec<web_sys::File>) -> Result<BulkUploadResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    for file in &files {
        form_data
            .append_with_blob("file", file)
            .map_err(|e| format!("{e:?}"))?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url("/api/chat/bulkUpload");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: BulkUploadResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}
