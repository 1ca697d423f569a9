use std::io::Cursor;

use pixedit_image::{Image, ImageError, ImageSize, Pixel};

use crate::error::IoError;

pub use image::ImageFormat;

/// Decode an image in any binary format the `image` crate can guess from its content.
///
/// Images are converted to 8-bit RGB, any alpha channel is dropped.
///
/// # Arguments
///
/// * `bytes` - The encoded image data.
///
/// # Returns
///
/// The decoded image.
pub fn decode_image_bytes(bytes: &[u8]) -> Result<Image, IoError> {
    let img = image::load_from_memory(bytes).map_err(IoError::ImageDecodeError)?;
    let rgb = img.into_rgb8();

    let size = ImageSize {
        width: rgb.width() as usize,
        height: rgb.height() as usize,
    };

    let pixels = rgb
        .pixels()
        .map(|p| {
            let [r, g, b] = p.0.map(i32::from);
            Pixel::from_clamped(r, g, b)
        })
        .collect();

    Ok(Image::new(size, pixels)?)
}

/// Encode an image in the given binary format.
///
/// Channels above 255 are written as 255.
///
/// # Arguments
///
/// * `image` - The image to encode.
/// * `format` - The output format, e.g. [`ImageFormat::Png`].
///
/// # Returns
///
/// The encoded bytes.
///
/// # Example
///
/// ```
/// use pixedit_image::{Image, Pixel};
/// use pixedit_io::codec::{decode_image_bytes, encode_image, ImageFormat};
///
/// let image = Image::from_rows(vec![vec![Pixel::new(10, 20, 30).unwrap()]]).unwrap();
///
/// let png = encode_image(&image, ImageFormat::Png).unwrap();
/// assert_eq!(decode_image_bytes(&png).unwrap(), image);
/// ```
pub fn encode_image(image: &Image, format: ImageFormat) -> Result<Vec<u8>, IoError> {
    let raw: Vec<u8> = image
        .as_slice()
        .iter()
        .flat_map(|p| p.channels().map(|v| v.min(u8::MAX as u16) as u8))
        .collect();

    let (width, height) = (image.width() as u32, image.height() as u32);
    let buffer = image::RgbImage::from_raw(width, height, raw).ok_or(
        ImageError::InvalidChannelShape(image.size().num_pixels() * 3, image.size().num_pixels()),
    )?;

    let mut out = Cursor::new(Vec::new());
    buffer
        .write_to(&mut out, format)
        .map_err(IoError::ImageEncodeError)?;

    log::debug!("encoded {} as {format:?}", image.size());

    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use pixedit_image::{Image, Pixel};

    use super::*;

    fn gradient(width: usize, height: usize) -> Result<Image, IoError> {
        let pixels = (0..width * height)
            .map(|i| {
                let v = (i % 256) as i32;
                Pixel::from_clamped(v, 255 - v, v / 2)
            })
            .collect();
        Ok(Image::new(ImageSize { width, height }, pixels)?)
    }

    #[test]
    fn test_png_round_trip() -> Result<(), IoError> {
        let image = gradient(17, 9)?;
        let png = encode_image(&image, ImageFormat::Png)?;
        assert_eq!(&png[1..4], b"PNG");
        assert_eq!(decode_image_bytes(&png)?, image);
        Ok(())
    }

    #[test]
    fn test_bmp_round_trip() -> Result<(), IoError> {
        let image = gradient(5, 3)?;
        let bmp = encode_image(&image, ImageFormat::Bmp)?;
        assert_eq!(decode_image_bytes(&bmp)?, image);
        Ok(())
    }

    #[test]
    fn test_jpeg_keeps_size() -> Result<(), IoError> {
        let image = gradient(32, 16)?;
        let jpeg = encode_image(&image, ImageFormat::Jpeg)?;
        let decoded = decode_image_bytes(&jpeg)?;
        assert_eq!(decoded.size(), image.size());
        Ok(())
    }

    #[test]
    fn test_encode_saturates_wide_channels() -> Result<(), IoError> {
        let image = Image::from_rows(vec![vec![Pixel::with_max_value(1000, 3, 0, 1023)?]])?;
        let png = encode_image(&image, ImageFormat::Png)?;
        let decoded = decode_image_bytes(&png)?;
        assert_eq!(decoded.pixel_at(0, 0)?.channels(), [255, 3, 0]);
        Ok(())
    }

    #[test]
    fn test_decode_garbage() {
        let res = decode_image_bytes(b"definitely not an image");
        assert!(matches!(res, Err(IoError::ImageDecodeError(_))));
    }
}
