use crate::{
    assets::decode::PreparedFrame,
    foundation::core::Canvas,
    foundation::error::{ScrollSeqError, ScrollSeqResult},
};

/// Drawing target for the render loop. Nothing else draws to it.
pub trait Surface {
    fn canvas(&self) -> Canvas;

    /// Draw `frame` scaled to fill the whole canvas.
    fn blit(&mut self, frame: &PreparedFrame) -> ScrollSeqResult<()>;
}

/// Opaque in-memory RGBA8 canvas. Scaling uses nearest-neighbour sampling.
#[derive(Clone, Debug)]
pub struct CanvasSurface {
    canvas: Canvas,
    data: Vec<u8>,
    blits: u64,
}

impl CanvasSurface {
    /// Black canvas of the given size.
    pub fn new(canvas: Canvas) -> Self {
        let mut data = vec![0u8; canvas.rgba8_len()];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self {
            canvas,
            data,
            blits: 0,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of successful blits so far.
    pub fn blits(&self) -> u64 {
        self.blits
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let i = ((y as usize) * (self.canvas.width as usize) + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Copy of the current contents as an image buffer.
    pub fn to_image(&self) -> ScrollSeqResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.canvas.width, self.canvas.height, self.data.clone())
            .ok_or_else(|| ScrollSeqError::render("canvas buffer does not match its dimensions"))
    }
}

impl Surface for CanvasSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn blit(&mut self, frame: &PreparedFrame) -> ScrollSeqResult<()> {
        let expected = (frame.width as usize) * (frame.height as usize) * 4;
        if frame.width == 0 || frame.height == 0 || frame.rgba8.len() != expected {
            return Err(ScrollSeqError::render(format!(
                "frame buffer is {} bytes, expected {expected} for {}x{}",
                frame.rgba8.len(),
                frame.width,
                frame.height
            )));
        }

        if frame.width == self.canvas.width && frame.height == self.canvas.height {
            self.data.copy_from_slice(&frame.rgba8);
        } else {
            let (dw, dh) = (self.canvas.width as usize, self.canvas.height as usize);
            let (sw, sh) = (frame.width as usize, frame.height as usize);
            for y in 0..dh {
                let sy = y * sh / dh;
                for x in 0..dw {
                    let sx = x * sw / dw;
                    let s = (sy * sw + sx) * 4;
                    let d = (y * dw + x) * 4;
                    self.data[d..d + 4].copy_from_slice(&frame.rgba8[s..s + 4]);
                }
            }
        }
        self.blits += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
