use crate::{error::ImageError, pixel::Pixel};

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixedit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size.
    pub fn num_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<ImageSize> for [u32; 2] {
    fn from(size: ImageSize) -> Self {
        [size.width as u32, size.height as u32]
    }
}

/// Represents an image as an immutable, row-major grid of [`Pixel`]s.
///
/// Every editing operation builds and returns a new image; there is no way to change the
/// pixels of an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    size: ImageSize,
    data: Vec<Pixel>,
}

impl Image {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixels of the image in row-major order.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If any dimension is zero or the length of the pixel data does not match the image size,
    /// an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixedit_image::{Image, ImageSize, Pixel};
    ///
    /// let image = Image::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![Pixel::default(); 10 * 20],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.width(), 10);
    /// assert_eq!(image.height(), 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<Pixel>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::InvalidImageSize(size.width, size.height));
        }

        if data.len() != size.num_pixels() {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.num_pixels(),
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size where every pixel has the same value.
    pub fn from_size_val(size: ImageSize, val: Pixel) -> Result<Self, ImageError> {
        Image::new(size, vec![val; size.num_pixels()])
    }

    /// Create a new image from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, if the first row is empty or if the rows do not
    /// all have the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixedit_image::{Image, Pixel};
    ///
    /// let black = Pixel::new(0, 0, 0).unwrap();
    /// let white = Pixel::new(255, 255, 255).unwrap();
    ///
    /// let image = Image::from_rows(vec![vec![black, white], vec![white, black]]).unwrap();
    /// assert_eq!(image.pixel_at(0, 1).unwrap(), &white);
    ///
    /// assert!(Image::from_rows(vec![vec![black, white], vec![white]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, ImageError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(width * height);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ImageError::RaggedRows(i, row.len(), width));
            }
            data.extend(row);
        }

        Image::new(ImageSize { width, height }, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the pixel at the given row and column.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside of the image.
    pub fn pixel_at(&self, row: usize, col: usize) -> Result<&Pixel, ImageError> {
        if row >= self.height() || col >= self.width() {
            return Err(ImageError::PixelOutOfBounds(
                row,
                col,
                self.height(),
                self.width(),
            ));
        }

        Ok(&self.data[row * self.width() + col])
    }

    /// Get a full row of pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the row index is outside of the image.
    pub fn row(&self, row: usize) -> Result<&[Pixel], ImageError> {
        if row >= self.height() {
            return Err(ImageError::PixelOutOfBounds(
                row,
                0,
                self.height(),
                self.width(),
            ));
        }

        let start = row * self.width();
        Ok(&self.data[start..start + self.width()])
    }

    /// Iterate over the rows of the image from top to bottom.
    pub fn rows_iter(&self) -> std::slice::ChunksExact<'_, Pixel> {
        self.data.chunks_exact(self.width())
    }

    /// Get the pixel data of the image in row-major order.
    pub fn as_slice(&self) -> &[Pixel] {
        &self.data
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<Pixel> {
        self.data
    }
}
