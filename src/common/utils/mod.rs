pub mod error;
pub mod macros;

pub use error::*;
pub(crate) use macros::*;
