//! Recognition service stand-in for the CLI.

use async_trait::async_trait;

use gastos_core::api::RecognitionService;
use gastos_core::error::{GastosError, Result};

/// Treats the "image" payload as an already-recognized UTF-8 text dump.
///
/// The real bot hands photos to an external OCR service; the CLI harness
/// works from text files, so recognition is just decoding.
pub struct PlainTextRecognizer;

#[async_trait]
impl RecognitionService for PlainTextRecognizer {
    async fn recognize(&self, image: &[u8]) -> Result<Option<String>> {
        let text = String::from_utf8(image.to_vec())
            .map_err(|e| GastosError::Recognition(e.to_string()))?;
        Ok((!text.trim().is_empty()).then_some(text))
    }
}
