use std::str::FromStr;

use pixedit_image::{Image, ImageError, Pixel};

use super::kernels::Kernel;
use crate::{error::OperationError, parallel};

/// The fixed-shape filters supported by the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// 3x3 blur.
    Blur,
    /// 5x5 sharpen.
    Sharpen,
}

impl FilterKind {
    /// Get the kernel used by this filter.
    pub fn kernel(&self) -> Kernel {
        match self {
            FilterKind::Blur => Kernel::blur(),
            FilterKind::Sharpen => Kernel::sharpen(),
        }
    }
}

impl FromStr for FilterKind {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blur" | "blur-filter" => Ok(FilterKind::Blur),
            "sharpen" | "sharpen-filter" => Ok(FilterKind::Sharpen),
            _ => Err(OperationError::UnknownFilter(s.to_string())),
        }
    }
}

/// Convolve an image with one of the fixed kernels.
///
/// For each output pixel and channel the contributions `value / divisor` of every tap that
/// falls inside the image are summed and the sum is clamped to `[0, 255]`. Taps outside the
/// image are dropped and the remaining weights are not renormalized, so border pixels see a
/// smaller kernel.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `kernel` - The kernel to apply.
///
/// # Returns
///
/// The filtered image with the same size as the input.
pub fn convolve(src: &Image, kernel: &Kernel) -> Result<Image, ImageError> {
    let (rows, cols) = (src.rows() as isize, src.cols() as isize);
    let data = src.as_slice();
    let taps = kernel.taps();

    parallel::par_iter_rows_indexed(src.size(), |row, col| {
        let mut acc = [0i32; 3];

        for tap in taps {
            let y = row as isize + tap.dy;
            let x = col as isize + tap.dx;
            if y < 0 || y >= rows || x < 0 || x >= cols {
                continue;
            }

            let channels = data[(y * cols + x) as usize].channels();
            for (sum, &value) in acc.iter_mut().zip(channels.iter()) {
                // truncates toward zero, also for the negative divisors
                *sum += value as i32 / tap.divisor;
            }
        }

        Pixel::from_clamped(acc[0], acc[1], acc[2])
    })
}

/// Apply the given filter to an image.
///
/// # Example
///
/// ```
/// use pixedit_image::{Image, ImageSize, Pixel};
/// use pixedit_imgproc::filter::{filter, FilterKind};
///
/// let image = Image::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 3,
///     },
///     Pixel::new(160, 160, 160).unwrap(),
/// )
/// .unwrap();
///
/// let blurred = filter(&image, FilterKind::Blur).unwrap();
///
/// assert_eq!(blurred.size(), image.size());
/// // interior pixels of a uniform image keep their value
/// assert_eq!(blurred.pixel_at(1, 1).unwrap().channels(), [160, 160, 160]);
/// ```
pub fn filter(src: &Image, kind: FilterKind) -> Result<Image, ImageError> {
    log::debug!("applying {kind:?} filter to {}", src.size());
    convolve(src, &kind.kernel())
}

/// Blur an image with the 3x3 blur kernel.
pub fn blur(src: &Image) -> Result<Image, ImageError> {
    filter(src, FilterKind::Blur)
}

/// Sharpen an image with the 5x5 sharpen kernel.
pub fn sharpen(src: &Image) -> Result<Image, ImageError> {
    filter(src, FilterKind::Sharpen)
}
