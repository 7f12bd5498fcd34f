// Services
// Wrappers around browser capabilities

pub mod clipboard;
pub mod ocr;
