use std::path::Path;

use pixedit_image::{Image, ImageError, ImageSize, Pixel, DEFAULT_MAX_VALUE, MAX_CHANNEL_VALUE};

use crate::error::IoError;

/// The magic token of a plain-text PPM file.
pub const PPM_MAGIC: &str = "P3";

const PPM_COMMENT: &str = "# Created by pixedit";

/// Whitespace separated tokens of the non-comment lines of a PPM file.
struct PpmTokens<'a> {
    lines: std::vec::IntoIter<&'a str>,
    current: std::str::SplitWhitespace<'a>,
}

impl<'a> PpmTokens<'a> {
    fn new(text: &'a str) -> Self {
        // lines end at "\r\n", "\n" or a bare "\r"; comments are whole lines starting with
        // '#', blank lines are kept
        let lines: Vec<&'a str> = text
            .split(|c: char| c == '\n' || c == '\r')
            .filter(|line| !line.starts_with('#'))
            .collect();
        Self {
            lines: lines.into_iter(),
            current: "".split_whitespace(),
        }
    }

    fn next_token(&mut self, what: &'static str) -> Result<&'a str, IoError> {
        loop {
            if let Some(token) = self.current.next() {
                return Ok(token);
            }
            match self.lines.next() {
                Some(line) => self.current = line.split_whitespace(),
                None => return Err(IoError::UnexpectedEof(what)),
            }
        }
    }

    fn next_int<T: std::str::FromStr>(&mut self, what: &'static str) -> Result<T, IoError> {
        let token = self.next_token(what)?;
        token
            .parse::<T>()
            .map_err(|_| IoError::InvalidToken(what, token.to_string()))
    }
}

/// Decode a plain-text PPM image.
///
/// Lines starting with `#` are skipped. The channels are validated against the max value
/// declared in the header and kept as they are, without rescaling. Any token after the pixel
/// data is ignored.
///
/// # Arguments
///
/// * `text` - The content of the PPM file.
///
/// # Returns
///
/// The decoded image.
///
/// # Errors
///
/// Returns a format error if the magic token is not `P3`, if a token is not an integer or if
/// the data ends early. Returns [`IoError::ImageCreationError`] for a zero dimension or a
/// channel above the max value.
///
/// # Example
///
/// ```
/// use pixedit_io::ppm::decode_ppm;
///
/// let image = decode_ppm("P3\n# tiny\n2 1\n255\n255 0 0\n0 0 255\n").unwrap();
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.height(), 1);
/// assert_eq!(image.pixel_at(0, 1).unwrap().channels(), [0, 0, 255]);
/// ```
pub fn decode_ppm(text: &str) -> Result<Image, IoError> {
    let mut tokens = PpmTokens::new(text);

    let magic = tokens.next_token("magic number")?;
    if magic != PPM_MAGIC {
        return Err(IoError::InvalidMagic(magic.to_string()));
    }

    let width = tokens.next_int::<usize>("width")?;
    let height = tokens.next_int::<usize>("height")?;
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidImageSize(width, height).into());
    }

    let max_value = tokens.next_int::<u64>("max value")?;
    if max_value == 0 || max_value > MAX_CHANNEL_VALUE as u64 {
        return Err(IoError::InvalidMaxValue(max_value));
    }
    let max_value = max_value as i32;

    let num_pixels = width
        .checked_mul(height)
        .ok_or(ImageError::InvalidImageSize(width, height))?;

    // the header alone does not prove the data is there
    let mut pixels = Vec::with_capacity(num_pixels.min(1 << 20));
    for _ in 0..num_pixels {
        let red = tokens.next_int::<i32>("pixel data")?;
        let green = tokens.next_int::<i32>("pixel data")?;
        let blue = tokens.next_int::<i32>("pixel data")?;
        pixels.push(Pixel::with_max_value(red, green, blue, max_value)?);
    }

    log::debug!("decoded {width}x{height} PPM image with max value {max_value}");

    Ok(Image::new(ImageSize { width, height }, pixels)?)
}

/// Decode a plain-text PPM image from raw bytes.
///
/// # Errors
///
/// Returns [`IoError::InvalidUtf8`] if the bytes are not text, otherwise the errors of
/// [`decode_ppm`].
pub fn decode_ppm_bytes(bytes: &[u8]) -> Result<Image, IoError> {
    decode_ppm(std::str::from_utf8(bytes)?)
}

/// Encode an image as plain-text PPM.
///
/// The output holds the `P3` magic, a comment line, the width and height, the max value 255
/// and then every channel on its own line in row-major order. Channels above 255 are written
/// as 255.
///
/// # Example
///
/// ```
/// use pixedit_image::{Image, Pixel};
/// use pixedit_io::ppm::encode_ppm;
///
/// let image = Image::from_rows(vec![vec![Pixel::new(1, 2, 3).unwrap()]]).unwrap();
/// let text = encode_ppm(&image);
///
/// assert!(text.starts_with("P3\n"));
/// assert!(text.ends_with("1 1\n255\n1\n2\n3\n"));
/// ```
pub fn encode_ppm(image: &Image) -> String {
    let mut out = String::with_capacity(32 + image.size().num_pixels() * 12);

    out.push_str(PPM_MAGIC);
    out.push('\n');
    out.push_str(PPM_COMMENT);
    out.push('\n');
    out.push_str(&format!("{} {}\n", image.width(), image.height()));
    out.push_str(&format!("{DEFAULT_MAX_VALUE}\n"));

    for pixel in image.as_slice() {
        for value in pixel.channels() {
            out.push_str(&value.min(DEFAULT_MAX_VALUE as u16).to_string());
            out.push('\n');
        }
    }

    out
}

/// Read a plain-text PPM image from the given file path.
///
/// # Arguments
///
/// * `file_path` - The path to the PPM file.
///
/// # Returns
///
/// The decoded image.
pub fn read_image_ppm(file_path: impl AsRef<Path>) -> Result<Image, IoError> {
    let file_path = file_path.as_ref().to_owned();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let bytes = std::fs::read(&file_path)?;
    let image = decode_ppm_bytes(&bytes)?;

    log::info!("read {} from {}", image.size(), file_path.display());

    Ok(image)
}

/// Write an image as plain-text PPM to the given file path.
///
/// The file is created or truncated.
///
/// # Arguments
///
/// * `file_path` - The path to the PPM file.
/// * `image` - The image to write.
pub fn write_image_ppm(file_path: impl AsRef<Path>, image: &Image) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    std::fs::write(file_path, encode_ppm(image))?;

    log::info!("wrote {} to {}", image.size(), file_path.display());

    Ok(())
}
