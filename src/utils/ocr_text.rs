//! OCR response formatting
//!
//! Turns the JSON returned by the image text-recognition API into the plain
//! text shown in the copy target.

use serde::Deserialize;

/// Shown when the response contained no recognised words
pub const NO_TEXT_FOUND: &str = "Could not read any text from the image";

/// Languages written without spaces between words
const UNSPACED_LANGUAGES: &[&str] = &["zh-Hans", "zh-Hant", "ja", "ko"];

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OcrResponse {
    pub language: String,
    pub regions: Vec<OcrRegion>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OcrRegion {
    #[serde(default)]
    pub lines: Vec<OcrLine>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OcrLine {
    #[serde(default)]
    pub words: Vec<OcrWord>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OcrWord {
    pub text: String,
}

pub fn parse_ocr_json(json: &str) -> Result<OcrResponse, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid OCR response: {}", e))
}

/// Join the words of the first region into lines of text
pub fn format_ocr_text(response: &OcrResponse) -> String {
    let separator = if UNSPACED_LANGUAGES.contains(&response.language.as_str()) {
        ""
    } else {
        " "
    };

    let mut result = String::new();
    if let Some(region) = response.regions.first() {
        for line in &region.lines {
            let words: Vec<&str> = line.words.iter().map(|w| w.text.as_str()).collect();
            result.push_str(&words.join(separator));
            // Trim the whole buffer, so a wordless line folds into the previous one
            let trimmed_len = result.trim_end().len();
            result.truncate(trimmed_len);
            result.push('\n');
        }
    }

    if result.is_empty() {
        NO_TEXT_FOUND.to_string()
    } else {
        result
    }
}

/// Text for the copy target: formatted OCR output, or the input as-is
pub fn copy_target_text(input: &str) -> String {
    match parse_ocr_json(input) {
        Ok(response) => format_ocr_text(&response),
        Err(_) => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH: &str = r#"{
        "language": "en",
        "textAngle": 0.0,
        "regions": [{
            "boundingBox": "21,16,304,451",
            "lines": [
                {"words": [{"text": "Hello,"}, {"text": "world!"}]},
                {"words": [{"text": "Second"}, {"text": "line"}]}
            ]
        }]
    }"#;

    #[test]
    fn test_english_words_are_spaced() {
        let response = parse_ocr_json(ENGLISH).unwrap();
        assert_eq!(format_ocr_text(&response), "Hello, world!\nSecond line\n");
    }

    #[test]
    fn test_japanese_words_are_joined() {
        let json = r#"{"language":"ja","regions":[{"lines":[{"words":[{"text":"日本"},{"text":"語"}]}]}]}"#;
        let response = parse_ocr_json(json).unwrap();
        assert_eq!(format_ocr_text(&response), "日本語\n");
    }

    #[test]
    fn test_only_first_region_is_used() {
        let json = r#"{"language":"en","regions":[
            {"lines":[{"words":[{"text":"first"}]}]},
            {"lines":[{"words":[{"text":"second"}]}]}
        ]}"#;
        let response = parse_ocr_json(json).unwrap();
        assert_eq!(format_ocr_text(&response), "first\n");
    }

    #[test]
    fn test_empty_response_gives_fallback() {
        let response = parse_ocr_json(r#"{"language":"en","regions":[]}"#).unwrap();
        assert_eq!(format_ocr_text(&response), NO_TEXT_FOUND);

        let response = parse_ocr_json(r#"{"language":"en","regions":[{"lines":[]}]}"#).unwrap();
        assert_eq!(format_ocr_text(&response), NO_TEXT_FOUND);
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        let json = r#"{"language":"en","regions":[{"lines":[{"words":[{"text":"tail  "}]}]}]}"#;
        let response = parse_ocr_json(json).unwrap();
        assert_eq!(format_ocr_text(&response), "tail\n");
    }

    #[test]
    fn test_wordless_line_folds_into_previous() {
        let json = r#"{"language":"en","regions":[{"lines":[
            {"words":[{"text":"A"}]},
            {"words":[]},
            {"words":[{"text":"B"}]}
        ]}]}"#;
        let response = parse_ocr_json(json).unwrap();
        assert_eq!(format_ocr_text(&response), "A\nB\n");
    }

    #[test]
    fn test_other_json_passes_through() {
        assert_eq!(copy_target_text(r#"{"note":"hi"}"#), r#"{"note":"hi"}"#);
        assert_eq!(copy_target_text("[]"), "[]");
        assert!(parse_ocr_json(r#"{"regions":[]}"#).is_err());
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(copy_target_text("Hello, world!"), "Hello, world!");
        assert_eq!(copy_target_text(ENGLISH), "Hello, world!\nSecond line\n");
    }
}
