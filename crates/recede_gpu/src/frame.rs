//! CPU frame buffer
//!
//! RGBA8 pixels composited on the CPU: clear to a solid color, blend
//! tinted alpha masks, and blit masks scaled to arbitrary dimensions.
//! Scaling goes through `image::imageops::resize` so the shrink effect
//! gets proper filtering rather than nearest-neighbor stepping.

use image::imageops::{self, FilterType};
use image::GrayImage;

/// An RGBA8 frame composited on the CPU
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA pixels, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill the whole frame with an opaque color
    pub fn fill(&mut self, color: [u8; 3]) {
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel[0] = color[0];
            pixel[1] = color[1];
            pixel[2] = color[2];
            pixel[3] = 255;
        }
    }

    /// Alpha-blend a tinted coverage mask at `(x, y)`, clipping to the
    /// frame bounds
    pub fn blit_mask(
        &mut self,
        mask: &[u8],
        mask_width: u32,
        mask_height: u32,
        x: i32,
        y: i32,
        color: [u8; 3],
    ) {
        if mask_width == 0 || mask_height == 0 || mask.len() < (mask_width * mask_height) as usize
        {
            return;
        }

        for row in 0..mask_height as i32 {
            let dst_y = y + row;
            if dst_y < 0 || dst_y >= self.height as i32 {
                continue;
            }
            for col in 0..mask_width as i32 {
                let dst_x = x + col;
                if dst_x < 0 || dst_x >= self.width as i32 {
                    continue;
                }
                let coverage = mask[(row as u32 * mask_width + col as u32) as usize] as u32;
                if coverage == 0 {
                    continue;
                }
                let offset = ((dst_y as u32 * self.width + dst_x as u32) * 4) as usize;
                let pixel = &mut self.pixels[offset..offset + 4];
                for channel in 0..3 {
                    let src = color[channel] as u32;
                    let dst = pixel[channel] as u32;
                    pixel[channel] = ((src * coverage + dst * (255 - coverage)) / 255) as u8;
                }
                pixel[3] = 255;
            }
        }
    }

    /// Blit a coverage mask resized to `dst_width x dst_height`
    pub fn blit_mask_scaled(
        &mut self,
        mask: &[u8],
        mask_width: u32,
        mask_height: u32,
        dst_width: u32,
        dst_height: u32,
        x: i32,
        y: i32,
        color: [u8; 3],
    ) {
        if dst_width == 0 || dst_height == 0 {
            return;
        }
        if dst_width == mask_width && dst_height == mask_height {
            self.blit_mask(mask, mask_width, mask_height, x, y, color);
            return;
        }
        let Some(source) = GrayImage::from_raw(mask_width, mask_height, mask.to_vec()) else {
            return;
        };
        let scaled = imageops::resize(&source, dst_width, dst_height, FilterType::Triangle);
        self.blit_mask(scaled.as_raw(), dst_width, dst_height, x, y, color);
    }
}
