use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};
use ndarray::Array3;

use super::{RasterBuffer, RasterError, Result};

pub fn decode_image(bytes: &[u8]) -> Result<RasterBuffer> {
    let decoded = image::load_from_memory(bytes)?;
    from_rgba(decoded.to_rgba8())
}

pub fn detect_format(bytes: &[u8]) -> Result<ImageFormat> {
    Ok(image::guess_format(bytes)?)
}

pub fn encode_image(raster: &RasterBuffer, format: ImageFormat) -> Result<Vec<u8>> {
    let image = to_rgba(raster)?;
    let mut cursor = Cursor::new(Vec::new());
    match format {
        // JPEG has no alpha channel; flatten before encoding.
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(image)
            .to_rgb8()
            .write_to(&mut cursor, format)?,
        _ => image.write_to(&mut cursor, format)?,
    }
    Ok(cursor.into_inner())
}

fn from_rgba(image: RgbaImage) -> Result<RasterBuffer> {
    let (width, height) = image.dimensions();
    let data = Array3::from_shape_vec((height as usize, width as usize, 4), image.into_raw())
        .map_err(|error| RasterError::Layout(error.to_string()))?;
    RasterBuffer::from_data(data)
}

fn to_rgba(raster: &RasterBuffer) -> Result<RgbaImage> {
    let bytes: Vec<u8> = raster.data().iter().copied().collect();
    RgbaImage::from_raw(raster.width(), raster.height(), bytes)
        .ok_or_else(|| RasterError::Layout("raster does not match its dimensions".into()))
}
