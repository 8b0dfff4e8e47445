use std::sync::Arc;

use anyhow::Context;
use image::imageops::FilterType;

use crate::foundation::{core::Canvas, error::ScrollSeqResult};

/// Decoded frame, already sized for the canvas.
#[derive(Clone, Debug)]
pub struct PreparedFrame {
    pub width: u32,
    pub height: u32,
    /// Opaque RGBA8, row-major, tightly packed. Alpha is always 255.
    pub rgba8: Arc<Vec<u8>>,
}

/// Resampling quality used when a source frame does not match the canvas size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeQuality {
    Pixelated,
    Low,
    #[default]
    Medium,
    High,
}

impl ResizeQuality {
    fn filter(self) -> FilterType {
        match self {
            Self::Pixelated => FilterType::Nearest,
            Self::Low => FilterType::Triangle,
            Self::Medium => FilterType::CatmullRom,
            Self::High => FilterType::Lanczos3,
        }
    }
}

/// Decode an encoded image and normalize it to `canvas` dimensions.
///
/// Translucent pixels are flattened onto black, matching an opaque canvas.
pub fn decode_frame(
    bytes: &[u8],
    canvas: Canvas,
    quality: ResizeQuality,
) -> ScrollSeqResult<PreparedFrame> {
    let mut dyn_img = image::load_from_memory(bytes).context("decode frame from memory")?;
    if dyn_img.width() != canvas.width || dyn_img.height() != canvas.height {
        dyn_img = dyn_img.resize_exact(canvas.width, canvas.height, quality.filter());
    }
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8 = rgba.into_raw();
    flatten_onto_black_in_place(&mut rgba8);

    Ok(PreparedFrame {
        width,
        height,
        rgba8: Arc::new(rgba8),
    })
}

fn flatten_onto_black_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
        px[3] = 255;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
