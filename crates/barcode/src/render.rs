//! SVG and PNG writers for encoded module patterns.

use std::fmt::Write as _;
use std::io::Cursor;
use std::str::FromStr;

use ab_glyph::{FontRef, PxScale};
use image::{GrayImage, ImageFormat, Luma};
use imageproc::drawing::{draw_text_mut, text_size};
use serde::{Deserialize, Serialize};

use crate::Barcode;
use crate::error::BarcodeError;

/// Monospace face for the text line under PNG bars.
static FONT: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

/// Writer settings shared by both output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width of one module in pixels.
    pub module_width: u32,
    /// Bar height in pixels.
    pub bar_height: u32,
    /// Blank modules on each side.
    pub quiet_zone: u32,
    /// Print the encoded text under the bars.
    pub write_text: bool,
    /// Font size in points for the text line.
    pub font_size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { module_width: 2, bar_height: 96, quiet_zone: 10, write_text: true, font_size: 10 }
    }
}

impl RenderOptions {
    fn text_height(&self) -> u32 {
        if self.write_text { self.font_size * 2 } else { 0 }
    }

    /// Font size in pixels at 96 dpi.
    fn text_scale(&self) -> PxScale {
        PxScale::from(self.font_size as f32 * 4.0 / 3.0)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match *self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }

    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match *self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            _ => Err(BarcodeError::UnknownFormat(s.to_owned())),
        }
    }
}

/// Runs of equal modules as `(start, len)` for the dark ones.
fn bar_runs(modules: &[bool]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < modules.len() {
        if modules[i] {
            let len = modules[i..].iter().take_while(|m| **m).count();
            runs.push((i, len));
            i += len;
        } else {
            i += 1;
        }
    }
    runs
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn to_svg(barcode: &Barcode, opts: &RenderOptions) -> String {
    let mw = opts.module_width.max(1) as usize;
    let quiet = opts.quiet_zone as usize * mw;
    let width = barcode.modules.len() * mw + 2 * quiet;
    let height = opts.bar_height + opts.text_height();

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = write!(svg, r##"<rect width="{width}" height="{height}" fill="#fff"/>"##);
    svg.push_str(r##"<g fill="#000">"##);
    for (start, len) in bar_runs(&barcode.modules) {
        let _ = write!(
            svg,
            r#"<rect x="{}" y="0" width="{}" height="{}"/>"#,
            quiet + start * mw,
            len * mw,
            opts.bar_height
        );
    }
    svg.push_str("</g>");
    if opts.write_text {
        let _ = write!(
            svg,
            r#"<text x="{}" y="{}" font-family="monospace" font-size="{}pt" text-anchor="middle">{}</text>"#,
            width / 2,
            opts.bar_height + opts.font_size * 3 / 2,
            opts.font_size,
            escape_xml(&barcode.text)
        );
    }
    svg.push_str("</svg>");
    svg
}

pub(crate) fn to_png(barcode: &Barcode, opts: &RenderOptions) -> Result<Vec<u8>, BarcodeError> {
    let mw = opts.module_width.max(1);
    let quiet = opts.quiet_zone;
    let total_modules = barcode.modules.len() as u32 + 2 * quiet;
    let width = total_modules * mw;
    let bar_height = opts.bar_height.max(1);
    let text_height = opts.text_height();

    let mut img = GrayImage::from_fn(width, bar_height + text_height, |x, y| {
        if y >= bar_height {
            return Luma([255u8]);
        }
        let module = (x / mw).checked_sub(quiet).map(|m| m as usize);
        let dark = module.and_then(|m| barcode.modules.get(m)).copied().unwrap_or(false);
        if dark { Luma([0u8]) } else { Luma([255u8]) }
    });

    if text_height > 0 {
        let font = FontRef::try_from_slice(FONT)?;
        let scale = opts.text_scale();
        let (text_w, text_h) = text_size(scale, &font, &barcode.text);
        let x = width.saturating_sub(text_w) / 2;
        let y = bar_height + text_height.saturating_sub(text_h) / 2;
        draw_text_mut(&mut img, Luma([0u8]), x as i32, y as i32, scale, &font, &barcode.text);
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
