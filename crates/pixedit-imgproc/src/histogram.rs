use pixedit_image::{Image, Pixel};
use rayon::prelude::*;

/// Number of bins of a channel histogram.
pub const NUM_BINS: usize = 256;

/// The pixel component counted by [`compute_histogram`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HistogramChannel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
    /// The integer average `(r + g + b) / 3`.
    Intensity,
}

impl HistogramChannel {
    fn value(&self, pixel: &Pixel) -> usize {
        let [r, g, b] = pixel.channels().map(usize::from);
        let value = match self {
            HistogramChannel::Red => r,
            HistogramChannel::Green => g,
            HistogramChannel::Blue => b,
            HistogramChannel::Intensity => (r + g + b) / 3,
        };
        // channels decoded with a max value above 255 share the last bin
        value.min(NUM_BINS - 1)
    }
}

/// Compute the histogram of one pixel component of an image.
///
/// # Arguments
///
/// * `src` - The input image to compute the histogram.
/// * `channel` - The component to count.
///
/// # Returns
///
/// An array where entry `i` is the number of pixels whose component equals `i`.
///
/// # Example
///
/// ```
/// use pixedit_image::{Image, Pixel};
/// use pixedit_imgproc::histogram::{compute_histogram, HistogramChannel};
///
/// let image = Image::from_rows(vec![vec![
///     Pixel::new(0, 3, 6).unwrap(),
///     Pixel::new(0, 0, 255).unwrap(),
/// ]])
/// .unwrap();
///
/// let hist = compute_histogram(&image, HistogramChannel::Red);
/// assert_eq!(hist[0], 2);
///
/// let hist = compute_histogram(&image, HistogramChannel::Intensity);
/// assert_eq!(hist[3], 1);
/// assert_eq!(hist[85], 1);
/// ```
pub fn compute_histogram(src: &Image, channel: HistogramChannel) -> [usize; NUM_BINS] {
    src.as_slice()
        .par_chunks(4096)
        .fold(
            || [0usize; NUM_BINS],
            |mut local, chunk| {
                for pixel in chunk {
                    local[channel.value(pixel)] += 1;
                }
                local
            },
        )
        .reduce(
            || [0usize; NUM_BINS],
            |mut a, b| {
                for (i, val) in b.iter().enumerate() {
                    a[i] += val;
                }
                a
            },
        )
}
