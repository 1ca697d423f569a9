use std::path::Path;

use pixedit_image::Image;

use crate::{
    codec::{self, ImageFormat},
    error::IoError,
    ppm,
};

/// The codec selected for a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    /// Plain-text PPM.
    Ppm,
    /// A binary format handled by the `image` crate.
    Binary(ImageFormat),
}

impl FileFormat {
    /// Select the codec from the case-insensitive extension of the path.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidFileExtension`] if the path has no known image extension.
    ///
    /// # Example
    ///
    /// ```
    /// use pixedit_io::codec::ImageFormat;
    /// use pixedit_io::functional::FileFormat;
    ///
    /// assert_eq!(FileFormat::from_path("a/b.PPM").unwrap(), FileFormat::Ppm);
    /// assert_eq!(
    ///     FileFormat::from_path("b.png").unwrap(),
    ///     FileFormat::Binary(ImageFormat::Png)
    /// );
    /// assert!(FileFormat::from_path("notes.txt").is_err());
    /// ```
    pub fn from_path(file_path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file_path = file_path.as_ref();
        let ext = file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .ok_or_else(|| IoError::InvalidFileExtension(file_path.to_path_buf()))?;

        if ext == "ppm" {
            return Ok(FileFormat::Ppm);
        }

        ImageFormat::from_extension(&ext)
            .map(FileFormat::Binary)
            .ok_or_else(|| IoError::InvalidFileExtension(file_path.to_path_buf()))
    }
}

/// Read an image from the given file path.
///
/// The codec is picked from the file extension: `.ppm` files are decoded as plain-text PPM,
/// any other extension known to the `image` crate goes through [`codec::decode_image_bytes`].
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// The decoded image.
pub fn read_image(file_path: impl AsRef<Path>) -> Result<Image, IoError> {
    let file_path = file_path.as_ref();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    match FileFormat::from_path(file_path)? {
        FileFormat::Ppm => ppm::read_image_ppm(file_path),
        FileFormat::Binary(format) => {
            let bytes = std::fs::read(file_path)?;
            let image = codec::decode_image_bytes(&bytes)?;
            log::info!(
                "read {} from {} as {format:?}",
                image.size(),
                file_path.display()
            );
            Ok(image)
        }
    }
}

/// Write an image to the given file path.
///
/// The codec is picked from the file extension as in [`read_image`]. The file is created or
/// truncated.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `image` - The image to write.
pub fn write_image(file_path: impl AsRef<Path>, image: &Image) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    match FileFormat::from_path(file_path)? {
        FileFormat::Ppm => ppm::write_image_ppm(file_path, image),
        FileFormat::Binary(format) => {
            let bytes = codec::encode_image(image, format)?;
            std::fs::write(file_path, bytes)?;
            log::info!(
                "wrote {} to {} as {format:?}",
                image.size(),
                file_path.display()
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use pixedit_image::{Image, Pixel};

    use super::*;

    fn sample_image() -> Result<Image, IoError> {
        Ok(Image::from_rows(vec![
            vec![Pixel::new(0, 0, 0)?, Pixel::new(255, 255, 255)?],
            vec![Pixel::new(100, 5, 5)?, Pixel::new(5, 100, 5)?],
        ])?)
    }

    #[test]
    fn test_file_format_from_path() -> Result<(), IoError> {
        assert_eq!(FileFormat::from_path("x.ppm")?, FileFormat::Ppm);
        assert_eq!(
            FileFormat::from_path("x.JPG")?,
            FileFormat::Binary(ImageFormat::Jpeg)
        );
        assert!(matches!(
            FileFormat::from_path("no_extension"),
            Err(IoError::InvalidFileExtension(_))
        ));
        assert!(matches!(
            FileFormat::from_path("x.doc"),
            Err(IoError::InvalidFileExtension(_))
        ));
        Ok(())
    }

    #[test]
    fn test_read_write_dispatch() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let image = sample_image()?;

        for name in ["image.ppm", "image.PNG", "image.bmp"] {
            let file_path = tmp_dir.path().join(name);
            write_image(&file_path, &image)?;
            assert_eq!(read_image(&file_path)?, image, "{name}");
        }

        // the text codec writes text
        let text = std::fs::read_to_string(tmp_dir.path().join("image.ppm"))?;
        assert!(text.starts_with("P3\n"));
        Ok(())
    }

    #[test]
    fn test_read_missing_file() {
        let res = read_image("missing.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn test_write_unknown_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.txt");
        let res = write_image(&file_path, &sample_image()?);
        assert!(res.is_err_and(|e| e.is_unsupported_format()));
        assert!(!file_path.exists());
        Ok(())
    }
}
