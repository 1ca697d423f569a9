use pixedit_image::{Image, ImageError, Pixel};

use crate::parallel;

/// Adjust the brightness of an image.
///
/// dst(x,y,c) = clamp(src(x,y,c) + constant, 0, 255)
///
/// A single clamp covers both brightening and darkening.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `constant` - The value added to every channel, positive or negative.
///
/// # Returns
///
/// A new image with the shifted channels.
///
/// # Example
///
/// ```
/// use pixedit_image::{Image, Pixel};
/// use pixedit_imgproc::enhance::brighten;
///
/// let image = Image::from_rows(vec![vec![Pixel::new(0, 128, 250).unwrap()]]).unwrap();
///
/// let brighter = brighten(&image, 10).unwrap();
/// assert_eq!(brighter.pixel_at(0, 0).unwrap().channels(), [10, 138, 255]);
/// ```
pub fn brighten(src: &Image, constant: i32) -> Result<Image, ImageError> {
    log::debug!("shifting brightness of {} by {constant}", src.size());
    parallel::par_iter_rows(src, |pixel| {
        let [r, g, b] = pixel
            .channels()
            .map(|v| i32::from(v).saturating_add(constant));
        Pixel::from_clamped(r, g, b)
    })
}
