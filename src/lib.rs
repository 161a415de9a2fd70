//! # qrstamp
//!
//! Encodes uppercase alphanumeric text into a version 1 QR code (21x21 modules) with error
//! correction level H.
//!
//! ## Pipeline
//!
//! - **Bit encoding**: alphanumeric mode header, 11 bits per character pair, terminator and
//!   `0xEC`/`0x11` padding up to 9 data codewords
//! - **Reed-Solomon**: 17 error correction codewords computed over GF(256) with primitive
//!   polynomial `0x11D`
//! - **Matrix**: finder, separator & timing patterns, zigzag data placement with masking, and
//!   the 15 bit format information
//! - **Render**: the finished boolean matrix as a grayscale image or a terminal string
//!
//! ## Quick Start
//!
//! ```rust
//! use qrstamp::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("ABCDE123").build()?;
//!
//! let matrix = qr.to_bool_matrix();
//! assert_eq!(matrix.len(), 21);
//!
//! let img = qr.to_image(4);
//! # let _ = img;
//! # Ok(())
//! # }
//! ```
//!
//! ### Mask selection
//!
//! The default mask is pattern 3, `(row + col) mod 3 == 0`. Any of the 8 patterns can be
//! chosen, or the one with the lowest penalty score:
//!
//! ```rust
//! use qrstamp::{MaskPattern, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fixed = QRBuilder::new("HELLO").mask(MaskPattern::new(5)).build()?;
//! let best = QRBuilder::new("HELLO").auto_mask().build()?;
//! # let _ = (fixed, best);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub mod common;
pub mod render;

pub use builder::{QRBuilder, QR};
pub use common::metadata;
pub use common::*;
pub use render::render_matrix;
