//! Barcode generation for folio values.
//!
//! Two symbologies are supported, matching the two sheet variants:
//! EAN-13 (numeric folios, zero-padded, with check digit) and Code 128
//! (any printable ASCII folio). Encoded barcodes can be written as SVG,
//! with the human-readable text under the bars, or as PNG.

#![allow(clippy::cast_possible_truncation, reason = "Module counts are far below u32::MAX")]

mod code128;
mod ean13;
pub mod error;
mod render;

pub use error::BarcodeError;
use folio_lookup_core::{MAX_FOLIO_CHARS, Symbology};
pub use render::{OutputFormat, RenderOptions};

/// An encoded barcode: one entry per module, `true` for a dark bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    pub symbology: Symbology,
    /// Human-readable text printed under the bars.
    pub text: String,
    pub modules: Vec<bool>,
}

impl Barcode {
    /// Encodes a folio with the given symbology.
    ///
    /// # Errors
    /// Returns an error when the folio is not valid for the symbology, e.g.
    /// letters under EAN-13 or non-ASCII text under Code 128.
    pub fn encode(symbology: Symbology, folio: &str) -> Result<Self, BarcodeError> {
        let len = folio.chars().count();
        if len > MAX_FOLIO_CHARS {
            return Err(BarcodeError::FolioTooLong { len, max: MAX_FOLIO_CHARS });
        }
        let (text, modules) = match symbology {
            Symbology::Ean13 => ean13::encode(folio)?,
            Symbology::Code128 => code128::encode(folio)?,
        };
        Ok(Self { symbology, text, modules })
    }

    #[must_use]
    pub fn to_svg(&self, opts: &RenderOptions) -> String {
        render::to_svg(self, opts)
    }

    /// # Errors
    /// Returns an error if the PNG encoder fails.
    pub fn to_png(&self, opts: &RenderOptions) -> Result<Vec<u8>, BarcodeError> {
        render::to_png(self, opts)
    }

    /// Renders in the requested format.
    ///
    /// # Errors
    /// Returns an error if the PNG encoder fails.
    pub fn render(
        &self,
        format: OutputFormat,
        opts: &RenderOptions,
    ) -> Result<Vec<u8>, BarcodeError> {
        match format {
            OutputFormat::Png => self.to_png(opts),
            OutputFormat::Svg => Ok(self.to_svg(opts).into_bytes()),
        }
    }
}

/// Encodes and renders an SVG in one step, logging rejected folios.
pub fn generate_svg(
    symbology: Symbology,
    folio: &str,
    opts: &RenderOptions,
) -> Result<String, BarcodeError> {
    match Barcode::encode(symbology, folio) {
        Ok(barcode) => Ok(barcode.to_svg(opts)),
        Err(e) => {
            tracing::debug!(folio, %symbology, error = %e, "barcode generation rejected folio");
            Err(e)
        },
    }
}
