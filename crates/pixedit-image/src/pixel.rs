use crate::error::ImageError;

/// The maximum channel value used when none is given.
pub const DEFAULT_MAX_VALUE: i32 = 255;

/// The largest max channel value a pixel can be validated against.
pub const MAX_CHANNEL_VALUE: i32 = u16::MAX as i32;

/// An RGB pixel.
///
/// The maximum channel value is only used to validate the channels at construction time and
/// it is not part of the pixel itself: two pixels are equal when their three channels match.
///
/// # Examples
///
/// ```
/// use pixedit_image::Pixel;
///
/// let pixel = Pixel::new(10, 20, 30).unwrap();
/// assert_eq!(pixel.channels(), [10, 20, 30]);
///
/// assert!(Pixel::new(256, 0, 0).is_err());
/// assert!(Pixel::with_max_value(1000, 0, 0, 1023).is_ok());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    red: u16,
    green: u16,
    blue: u16,
}

impl Pixel {
    /// Create a new pixel validated against the default max value of 255.
    ///
    /// # Errors
    ///
    /// Returns an error if any channel is outside of `[0, 255]`.
    pub fn new(red: i32, green: i32, blue: i32) -> Result<Self, ImageError> {
        Self::with_max_value(red, green, blue, DEFAULT_MAX_VALUE)
    }

    /// Create a new pixel validated against the given max value.
    ///
    /// # Arguments
    ///
    /// * `red`, `green`, `blue` - The channel values.
    /// * `max_value` - The largest valid channel value, in `[1, 65535]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the max value is not representable or if any channel is outside of
    /// `[0, max_value]`.
    pub fn with_max_value(
        red: i32,
        green: i32,
        blue: i32,
        max_value: i32,
    ) -> Result<Self, ImageError> {
        if !(1..=MAX_CHANNEL_VALUE).contains(&max_value) {
            return Err(ImageError::InvalidMaxValue(max_value));
        }

        let check = |value: i32| -> Result<u16, ImageError> {
            if (0..=max_value).contains(&value) {
                Ok(value as u16)
            } else {
                Err(ImageError::InvalidChannelValue(value, max_value))
            }
        };

        Ok(Self {
            red: check(red)?,
            green: check(green)?,
            blue: check(blue)?,
        })
    }

    /// Create a pixel by saturating each channel into `[0, 255]`.
    ///
    /// ```
    /// use pixedit_image::Pixel;
    ///
    /// let pixel = Pixel::from_clamped(-20, 128, 300);
    /// assert_eq!(pixel.channels(), [0, 128, 255]);
    /// ```
    pub fn from_clamped(red: i32, green: i32, blue: i32) -> Self {
        let clamp = |value: i32| value.clamp(0, DEFAULT_MAX_VALUE) as u16;
        Self {
            red: clamp(red),
            green: clamp(green),
            blue: clamp(blue),
        }
    }

    /// Get the red channel value.
    pub fn red(&self) -> u16 {
        self.red
    }

    /// Get the green channel value.
    pub fn green(&self) -> u16 {
        self.green
    }

    /// Get the blue channel value.
    pub fn blue(&self) -> u16 {
        self.blue
    }

    /// Get the channels as an `[r, g, b]` array.
    pub fn channels(&self) -> [u16; 3] {
        [self.red, self.green, self.blue]
    }

    /// Get the largest of the three channels.
    pub fn max_channel(&self) -> u16 {
        self.red.max(self.green).max(self.blue)
    }

    /// Create a gray pixel holding the largest channel of this pixel in all three channels.
    ///
    /// The value is copied as is, so it stays within whatever range this pixel was validated
    /// against.
    pub fn max_gray(&self) -> Self {
        let value = self.max_channel();
        Self {
            red: value,
            green: value,
            blue: value,
        }
    }
}

impl From<Pixel> for [u16; 3] {
    fn from(pixel: Pixel) -> Self {
        pixel.channels()
    }
}

impl TryFrom<[i32; 3]> for Pixel {
    type Error = ImageError;

    fn try_from(rgb: [i32; 3]) -> Result<Self, Self::Error> {
        Pixel::new(rgb[0], rgb[1], rgb[2])
    }
}
