//! Image text recognition
//!
//! Posts raw image bytes to a Computer Vision style OCR endpoint and turns the
//! JSON reply into the plain text shown in the copy target.

use gloo_net::http::Request;
use js_sys::Uint8Array;

use crate::stores::settings_store::CopySettings;
use crate::utils::ocr_text::{format_ocr_text, parse_ocr_json};

const OCR_PATH: &str = "vision/v3.0/ocr";

/// Let the service detect language and rotation itself
const OCR_QUERY: &str = "language=unk&detectOrientation=true";

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Full request URL for an OCR resource base URL
pub fn ocr_request_url(endpoint: &str) -> Result<String, String> {
    let base = endpoint.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err("OCR endpoint is not configured".to_string());
    }
    if !base.starts_with("https://") && !base.starts_with("http://") {
        return Err(format!("OCR endpoint must be an http(s) URL: {}", base));
    }
    Ok(format!("{}/{}?{}", base, OCR_PATH, OCR_QUERY))
}

/// Validate settings and image before any network traffic
fn prepare_request(settings: &CopySettings, image: &[u8]) -> Result<String, String> {
    let url = ocr_request_url(&settings.ocr_endpoint)?;
    if settings.ocr_key.is_empty() {
        return Err("OCR subscription key is not configured".to_string());
    }
    if image.is_empty() {
        return Err("Selected image is empty".to_string());
    }
    Ok(url)
}

/// Send an image to the OCR endpoint and return the recognised text
pub async fn recognize_text(settings: &CopySettings, image: &[u8]) -> Result<String, String> {
    let url = prepare_request(settings, image)?;
    log::info!("Sending {} byte image for text recognition", image.len());

    let response = Request::post(&url)
        .header(SUBSCRIPTION_KEY_HEADER, &settings.ocr_key)
        .header("Content-Type", "application/octet-stream")
        .body(Uint8Array::from(image))
        .map_err(|e| format!("Failed to build OCR request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("OCR request failed: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "OCR failed: {} {}",
            response.status(),
            response.status_text()
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read OCR response: {}", e))?;
    let parsed = parse_ocr_json(&body)?;

    Ok(format_ocr_text(&parsed))
}

/// Read the file chosen in the file input with `input_id`
pub async fn read_selected_file(input_id: &str) -> Result<Vec<u8>, String> {
    use js_sys::ArrayBuffer;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{window, HtmlInputElement};

    let window = window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let input = document
        .get_element_by_id(input_id)
        .ok_or("Input not found")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| "Not an input element")?;

    let file_list = input.files().ok_or("No files")?;
    let file = file_list.get(0).ok_or("No file selected")?;

    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Failed to read file")?;
    let array_buffer: ArrayBuffer = array_buffer.dyn_into().map_err(|_| "Not an ArrayBuffer")?;

    Ok(Uint8Array::new(&array_buffer).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> CopySettings {
        CopySettings {
            ocr_endpoint: "https://example.cognitiveservices.azure.com/".to_string(),
            ocr_key: "key".to_string(),
            ..CopySettings::default()
        }
    }

    #[test]
    fn test_request_url_appends_path_and_query() {
        let expected = "https://example.cognitiveservices.azure.com/vision/v3.0/ocr?language=unk&detectOrientation=true";
        assert_eq!(ocr_request_url("https://example.cognitiveservices.azure.com/").unwrap(), expected);
        assert_eq!(ocr_request_url("https://example.cognitiveservices.azure.com").unwrap(), expected);
    }

    #[test]
    fn test_request_url_rejects_bad_endpoints() {
        assert!(ocr_request_url("   ").is_err());
        assert!(ocr_request_url("example.com").is_err());
    }

    #[test]
    fn test_prepare_request_requires_key_and_image() {
        assert!(prepare_request(&configured(), b"\x89PNG").is_ok());

        let no_key = CopySettings { ocr_key: String::new(), ..configured() };
        assert_eq!(
            prepare_request(&no_key, b"\x89PNG").unwrap_err(),
            "OCR subscription key is not configured"
        );

        assert_eq!(prepare_request(&configured(), b"").unwrap_err(), "Selected image is empty");
        assert!(prepare_request(&CopySettings::default(), b"\x89PNG").is_err());
    }
}
