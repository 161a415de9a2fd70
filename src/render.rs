use image::{GrayImage, Luma};

use crate::builder::QR;
use crate::common::metadata::Color;

// Quiet zone width in modules
pub const QUIET_ZONE: u32 = 4;

// Render
//------------------------------------------------------------------------------

/// Draws a square module matrix, one solid `module_sz` block per module, black for dark and
/// white for light, surrounded by a light quiet zone.
pub fn render_matrix<const N: usize>(matrix: &[[bool; N]; N], module_sz: u32) -> GrayImage {
    debug_assert!(module_sz > 0, "Module size must be positive");

    let qz_sz = QUIET_ZONE * module_sz;
    let qr_sz = N as u32 * module_sz;
    let total_sz = qz_sz + qr_sz + qz_sz;

    GrayImage::from_fn(total_sz, total_sz, |x, y| {
        if x < qz_sz || x >= qz_sz + qr_sz || y < qz_sz || y >= qz_sz + qr_sz {
            return Luma([255]);
        }
        let r = ((y - qz_sz) / module_sz) as usize;
        let c = ((x - qz_sz) / module_sz) as usize;
        if matrix[r][c] {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}

impl QR {
    pub fn to_image(&self, module_sz: u32) -> GrayImage {
        render_matrix(&self.to_bool_matrix(), module_sz)
    }

    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = QUIET_ZONE as usize * module_sz;
        let qr_sz = self.width() * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::with_capacity(total_sz * (total_sz + 1) * 3);
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push('█');
                    continue;
                }
                let r = ((i - qz_sz) / module_sz) as i16;
                let c = ((j - qz_sz) / module_sz) as i16;
                // Blocks are light modules, readable on dark terminal backgrounds
                canvas.push(Color::select(*self.get(r, c), ' ', '█'));
            }
            canvas.push('\n');
        }

        canvas
    }
}
