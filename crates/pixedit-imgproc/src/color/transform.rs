use std::str::FromStr;

use pixedit_image::{Image, ImageError, Pixel};

use crate::{error::OperationError, parallel};

/// A 3x3 linear color matrix.
///
/// Rows give the output red, green and blue channels; columns weight the input red, green and
/// blue channels.
pub type ColorMatrix = [[f64; 3]; 3];

const RED_MATRIX: ColorMatrix = [[1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
const GREEN_MATRIX: ColorMatrix = [[0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
const BLUE_MATRIX: ColorMatrix = [[0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0]];

/// Rec. 709 luma weights replicated on every output channel.
pub const LUMA_MATRIX: ColorMatrix = [
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722],
];

/// Unweighted channel average replicated on every output channel.
pub const INTENSITY_MATRIX: ColorMatrix = [
    [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
    [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
    [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
];

/// Sepia tone matrix.
pub const SEPIA_MATRIX: ColorMatrix = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// The color transforms supported by the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// Replicate the red channel.
    Red,
    /// Replicate the green channel.
    Green,
    /// Replicate the blue channel.
    Blue,
    /// Replicate the largest channel.
    MaxValue,
    /// Replicate the luma.
    Luma,
    /// Replicate the channel average.
    Intensity,
    /// Sepia tone.
    Sepia,
}

/// How a [`TransformKind`] maps a pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorTransform {
    /// Multiply the pixel by a color matrix, truncating and clamping each output channel.
    Matrix(ColorMatrix),
    /// Replicate the largest channel into all three channels.
    MaxValue,
}

impl TransformKind {
    /// All the transform kinds.
    pub const ALL: [TransformKind; 7] = [
        TransformKind::Red,
        TransformKind::Green,
        TransformKind::Blue,
        TransformKind::MaxValue,
        TransformKind::Luma,
        TransformKind::Intensity,
        TransformKind::Sepia,
    ];

    /// Get the transform applied by this kind.
    pub fn transform(&self) -> ColorTransform {
        match self {
            TransformKind::Red => ColorTransform::Matrix(RED_MATRIX),
            TransformKind::Green => ColorTransform::Matrix(GREEN_MATRIX),
            TransformKind::Blue => ColorTransform::Matrix(BLUE_MATRIX),
            TransformKind::MaxValue => ColorTransform::MaxValue,
            TransformKind::Luma => ColorTransform::Matrix(LUMA_MATRIX),
            TransformKind::Intensity => ColorTransform::Matrix(INTENSITY_MATRIX),
            TransformKind::Sepia => ColorTransform::Matrix(SEPIA_MATRIX),
        }
    }
}

impl FromStr for TransformKind {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "red" | "red-component" => TransformKind::Red,
            "green" | "green-component" => TransformKind::Green,
            "blue" | "blue-component" => TransformKind::Blue,
            "max-value" | "maxvalue" | "value" | "maxvalue-component" | "value-component" => {
                TransformKind::MaxValue
            }
            "luma" | "luma-component" => TransformKind::Luma,
            "intensity" | "intensity-component" => TransformKind::Intensity,
            "sepia" | "sepia-tone" => TransformKind::Sepia,
            _ => return Err(OperationError::UnknownTransform(s.to_string())),
        };
        Ok(kind)
    }
}

impl ColorTransform {
    /// Map a single pixel.
    ///
    /// Matrix outputs are computed in `f64`, truncated toward zero and clamped to `[0, 255]`.
    /// The max-value output is not clamped.
    pub fn apply(&self, pixel: &Pixel) -> Pixel {
        match *self {
            ColorTransform::MaxValue => pixel.max_gray(),
            ColorTransform::Matrix(m) => {
                let [r, g, b] = pixel.channels().map(f64::from);
                let out = m.map(|row| (r * row[0] + g * row[1] + b * row[2]) as i32);
                Pixel::from_clamped(out[0], out[1], out[2])
            }
        }
    }
}

/// Apply a color transform to every pixel of an image.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `kind` - The color transform to apply.
///
/// # Returns
///
/// A new image with the same size as the input.
///
/// # Example
///
/// ```
/// use pixedit_image::{Image, Pixel};
/// use pixedit_imgproc::color::{color_transform, TransformKind};
///
/// let image = Image::from_rows(vec![vec![Pixel::new(100, 5, 5).unwrap()]]).unwrap();
///
/// let red = color_transform(&image, TransformKind::Red).unwrap();
/// assert_eq!(red.pixel_at(0, 0).unwrap().channels(), [100, 100, 100]);
/// ```
pub fn color_transform(src: &Image, kind: TransformKind) -> Result<Image, ImageError> {
    log::debug!("applying {kind:?} color transform to {}", src.size());
    let transform = kind.transform();
    parallel::par_iter_rows(src, |pixel| transform.apply(pixel))
}

/// Apply a color transform selected by name.
///
/// An unrecognized name is not an error: the input image is returned unchanged.
///
/// ```
/// use pixedit_image::{Image, Pixel};
/// use pixedit_imgproc::color::transform_by_name;
///
/// let image = Image::from_rows(vec![vec![Pixel::new(1, 2, 3).unwrap()]]).unwrap();
///
/// let same = transform_by_name(&image, "posterize").unwrap();
/// assert_eq!(same, image);
/// ```
pub fn transform_by_name(src: &Image, name: &str) -> Result<Image, ImageError> {
    match name.parse::<TransformKind>() {
        Ok(kind) => color_transform(src, kind),
        Err(err) => {
            log::warn!("{err}, returning the image unchanged");
            Ok(src.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use pixedit_image::{Image, ImageError, Pixel};

    use super::*;

    fn sample_image() -> Result<Image, ImageError> {
        Image::from_rows(vec![
            vec![
                Pixel::new(0, 0, 0)?,
                Pixel::new(255, 255, 255)?,
                Pixel::new(122, 123, 122)?,
            ],
            vec![
                Pixel::new(100, 5, 5)?,
                Pixel::new(5, 100, 5)?,
                Pixel::new(5, 5, 100)?,
            ],
        ])
    }

    #[test]
    fn test_channel_isolation() -> Result<(), ImageError> {
        let image = sample_image()?;
        let red = color_transform(&image, TransformKind::Red)?;
        let green = color_transform(&image, TransformKind::Green)?;
        let blue = color_transform(&image, TransformKind::Blue)?;

        for (i, src) in image.as_slice().iter().enumerate() {
            let [r, g, b] = src.channels();
            assert_eq!(red.as_slice()[i].channels(), [r, r, r]);
            assert_eq!(green.as_slice()[i].channels(), [g, g, g]);
            assert_eq!(blue.as_slice()[i].channels(), [b, b, b]);
        }

        assert_eq!(red.pixel_at(1, 0)?.channels(), [100, 100, 100]);
        Ok(())
    }

    #[test]
    fn test_max_value() -> Result<(), ImageError> {
        let image = sample_image()?;
        let max = color_transform(&image, TransformKind::MaxValue)?;
        assert_eq!(max.pixel_at(0, 2)?.channels(), [123, 123, 123]);
        assert_eq!(max.pixel_at(1, 2)?.channels(), [100, 100, 100]);
        Ok(())
    }

    #[test]
    fn test_max_value_not_clamped() -> Result<(), ImageError> {
        let image = Image::from_rows(vec![vec![Pixel::with_max_value(300, 20, 1, 1023)?]])?;
        let max = color_transform(&image, TransformKind::MaxValue)?;
        assert_eq!(max.pixel_at(0, 0)?.channels(), [300, 300, 300]);
        Ok(())
    }

    #[test]
    fn test_luma_truncates() -> Result<(), ImageError> {
        let image = Image::from_rows(vec![vec![
            Pixel::new(255, 0, 0)?,
            Pixel::new(0, 255, 0)?,
            Pixel::new(0, 0, 255)?,
        ]])?;
        let luma = color_transform(&image, TransformKind::Luma)?;
        // 54.213, 182.376, 18.411
        assert_eq!(luma.pixel_at(0, 0)?.channels(), [54, 54, 54]);
        assert_eq!(luma.pixel_at(0, 1)?.channels(), [182, 182, 182]);
        assert_eq!(luma.pixel_at(0, 2)?.channels(), [18, 18, 18]);
        Ok(())
    }

    #[test]
    fn test_sepia_clamps() -> Result<(), ImageError> {
        let image = Image::from_rows(vec![vec![Pixel::new(255, 255, 255)?, Pixel::new(0, 0, 0)?]])?;
        let sepia = color_transform(&image, TransformKind::Sepia)?;
        // the blue row sums to 0.937, 238.935 before truncation
        assert_eq!(sepia.pixel_at(0, 0)?.channels(), [255, 255, 238]);
        assert_eq!(sepia.pixel_at(0, 1)?.channels(), [0, 0, 0]);
        Ok(())
    }

    #[test]
    fn test_intensity_matches_reference() -> Result<(), ImageError> {
        let image = sample_image()?;
        let intensity = color_transform(&image, TransformKind::Intensity)?;
        let third = 1.0 / 3.0;
        for (src, dst) in image.as_slice().iter().zip(intensity.as_slice()) {
            let [r, g, b] = src.channels().map(f64::from);
            let expected = (r * third + g * third + b * third) as u16;
            assert_eq!(dst.channels(), [expected; 3]);
        }
        Ok(())
    }

    #[test]
    fn test_transform_keeps_source() -> Result<(), ImageError> {
        let image = sample_image()?;
        let copy = image.clone();
        for kind in TransformKind::ALL {
            let out = color_transform(&image, kind)?;
            assert_eq!(out.size(), image.size());
        }
        assert_eq!(image, copy);
        Ok(())
    }

    #[test]
    fn test_transform_by_name() -> Result<(), ImageError> {
        let image = sample_image()?;
        assert_eq!(
            transform_by_name(&image, "sepia-tone")?,
            color_transform(&image, TransformKind::Sepia)?
        );
        assert_eq!(transform_by_name(&image, "not-a-transform")?, image);
        Ok(())
    }

    #[test]
    fn test_transform_kind_from_str() {
        assert_eq!(
            "luma-component".parse::<TransformKind>(),
            Ok(TransformKind::Luma)
        );
        assert_eq!(
            "maxvalue-component".parse::<TransformKind>(),
            Ok(TransformKind::MaxValue)
        );
        assert_eq!(
            "hue".parse::<TransformKind>(),
            Err(OperationError::UnknownTransform("hue".to_string()))
        );
    }
}
