// Utility functions
// Helper functions for common operations

pub mod ocr_text;

pub use ocr_text::copy_target_text;
