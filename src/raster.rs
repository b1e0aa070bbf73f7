mod buffer;
mod codec;
mod error;
mod stroke;

#[cfg(test)]
mod tests;

pub use buffer::{CompositeMode, RasterBuffer, Rgba};
pub use codec::{decode_image, detect_format, encode_image};
pub use error::{RasterError, Result};
pub use stroke::draw_lines;
