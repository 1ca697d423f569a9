use rayon::prelude::*;

use pixedit_image::{Image, ImageError, ImageSize, Pixel};

/// Apply a function to each pixel in the image in parallel, building a new image.
///
/// Rows are processed in parallel; the output has the same size as the input.
pub fn par_iter_rows(
    src: &Image,
    f: impl Fn(&Pixel) -> Pixel + Send + Sync,
) -> Result<Image, ImageError> {
    let mut dst = vec![Pixel::default(); src.size().num_pixels()];

    src.as_slice()
        .par_chunks_exact(src.cols())
        .zip(dst.par_chunks_exact_mut(src.cols()))
        .for_each(|(src_row, dst_row)| {
            src_row
                .iter()
                .zip(dst_row.iter_mut())
                .for_each(|(src_pixel, dst_pixel)| {
                    *dst_pixel = f(src_pixel);
                });
        });

    Image::new(src.size(), dst)
}

/// Build a new image of the given size in parallel from a function of `(row, col)`.
///
/// Each output row is filled by one task, so `f` must only read shared state.
pub fn par_iter_rows_indexed(
    size: ImageSize,
    f: impl Fn(usize, usize) -> Pixel + Send + Sync,
) -> Result<Image, ImageError> {
    if size.width == 0 || size.height == 0 {
        return Err(ImageError::InvalidImageSize(size.width, size.height));
    }

    let mut dst = vec![Pixel::default(); size.num_pixels()];

    dst.par_chunks_exact_mut(size.width)
        .enumerate()
        .for_each(|(row, dst_row)| {
            dst_row
                .iter_mut()
                .enumerate()
                .for_each(|(col, dst_pixel)| {
                    *dst_pixel = f(row, col);
                });
        });

    Image::new(size, dst)
}
