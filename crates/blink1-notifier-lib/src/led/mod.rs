//! LED signalling — colors and the build outcome palette.

mod color;
mod resolve;

pub use color::Color;
pub use resolve::{SuccessColor, resolve_color};
