use std::str::FromStr;

use pixedit_image::{Image, ImageError, Pixel};
use rayon::prelude::*;

use crate::error::OperationError;

/// The direction of a flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipDirection {
    /// Mirror left and right.
    Horizontal,
    /// Mirror top and bottom.
    Vertical,
}

impl FromStr for FlipDirection {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "horizontal-flip" => Ok(FlipDirection::Horizontal),
            "vertical" | "vertical-flip" => Ok(FlipDirection::Vertical),
            _ => Err(OperationError::UnknownFlip(s.to_string())),
        }
    }
}

/// Flip the input image horizontally.
///
/// The output pixel at `(row, col)` is the input pixel at `(row, width - 1 - col)`.
///
/// # Arguments
///
/// * `src` - The input image.
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use pixedit_image::{Image, Pixel};
/// use pixedit_imgproc::flip::horizontal_flip;
///
/// let a = Pixel::new(1, 1, 1).unwrap();
/// let b = Pixel::new(2, 2, 2).unwrap();
/// let image = Image::from_rows(vec![vec![a, b]]).unwrap();
///
/// let flipped = horizontal_flip(&image).unwrap();
///
/// assert_eq!(flipped.row(0).unwrap(), &[b, a]);
/// ```
pub fn horizontal_flip(src: &Image) -> Result<Image, ImageError> {
    let mut dst = vec![Pixel::default(); src.size().num_pixels()];

    dst.par_chunks_exact_mut(src.cols())
        .zip(src.as_slice().par_chunks_exact(src.cols()))
        .for_each(|(dst_row, src_row)| {
            dst_row
                .iter_mut()
                .zip(src_row.iter().rev())
                .for_each(|(dst_pixel, src_pixel)| *dst_pixel = *src_pixel);
        });

    Image::new(src.size(), dst)
}

/// Flip the input image vertically.
///
/// The output pixel at `(row, col)` is the input pixel at `(height - 1 - row, col)`.
///
/// # Arguments
///
/// * `src` - The input image.
///
/// # Returns
///
/// The flipped image.
pub fn vertical_flip(src: &Image) -> Result<Image, ImageError> {
    let mut dst = vec![Pixel::default(); src.size().num_pixels()];

    dst.par_chunks_exact_mut(src.cols())
        .zip(src.as_slice().par_chunks_exact(src.cols()).rev())
        .for_each(|(dst_row, src_row)| dst_row.copy_from_slice(src_row));

    Image::new(src.size(), dst)
}

/// Flip the input image in the given direction.
pub fn flip(src: &Image, direction: FlipDirection) -> Result<Image, ImageError> {
    log::debug!("applying {direction:?} flip to {}", src.size());
    match direction {
        FlipDirection::Horizontal => horizontal_flip(src),
        FlipDirection::Vertical => vertical_flip(src),
    }
}
