pub mod bitstream;
pub mod codec;
pub mod ec;
pub mod galois;
pub mod iter;
pub mod mask;
pub mod metadata;
pub mod utils;

pub use bitstream::BitStream;
pub use codec::{encode_alphanumeric, encode_alphanumeric_bits};
pub use ec::{generator_polynomial, ReedSolomonEncoder};
pub use galois::{GaloisField, GF256};
pub use mask::MaskPattern;
pub use utils::{PlacementViolation, QRError, QRResult};
