use std::fmt;

use pixedit_image::{Image, ImageError};

use crate::{
    color::{self, TransformKind},
    enhance,
    error::OperationError,
    filter::{self, FilterKind},
    flip::{self, FlipDirection},
};

/// An editing operation that maps one image to a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Convolve with a fixed kernel.
    Filter(FilterKind),
    /// Apply a per-pixel color transform.
    Transform(TransformKind),
    /// Mirror the image.
    Flip(FlipDirection),
    /// Add a constant to every channel.
    Brighten(i32),
}

impl Operation {
    /// Parse an operation from its command name and arguments.
    ///
    /// Accepted names are `blur`, `sharpen`, the color transform names (`red-component`,
    /// `luma-component`, `sepia-tone`, ...), `horizontal-flip`, `vertical-flip` and
    /// `brighten`, which takes the integer constant as its first argument.
    ///
    /// # Example
    ///
    /// ```
    /// use pixedit_imgproc::{filter::FilterKind, Operation};
    ///
    /// assert_eq!(Operation::parse("blur", &[]), Ok(Operation::Filter(FilterKind::Blur)));
    /// assert_eq!(Operation::parse("brighten", &["-20"]), Ok(Operation::Brighten(-20)));
    /// assert!(Operation::parse("brighten", &["a lot"]).is_err());
    /// ```
    pub fn parse(name: &str, args: &[&str]) -> Result<Self, OperationError> {
        if name.eq_ignore_ascii_case("brighten") {
            let arg = args
                .first()
                .ok_or_else(|| OperationError::MissingArgument(name.to_string()))?;
            let constant = arg
                .parse::<i32>()
                .map_err(|_| OperationError::InvalidConstant(arg.to_string()))?;
            return Ok(Operation::Brighten(constant));
        }

        if let Ok(kind) = name.parse::<FilterKind>() {
            return Ok(Operation::Filter(kind));
        }
        if let Ok(direction) = name.parse::<FlipDirection>() {
            return Ok(Operation::Flip(direction));
        }
        if let Ok(kind) = name.parse::<TransformKind>() {
            return Ok(Operation::Transform(kind));
        }

        Err(OperationError::UnknownOperation(name.to_string()))
    }

    /// Apply the operation, returning a new image and leaving `src` untouched.
    pub fn apply(&self, src: &Image) -> Result<Image, ImageError> {
        match *self {
            Operation::Filter(kind) => filter::filter(src, kind),
            Operation::Transform(kind) => color::color_transform(src, kind),
            Operation::Flip(direction) => flip::flip(src, direction),
            Operation::Brighten(constant) => enhance::brighten(src, constant),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Filter(FilterKind::Blur) => write!(f, "blur"),
            Operation::Filter(FilterKind::Sharpen) => write!(f, "sharpen"),
            Operation::Transform(TransformKind::Red) => write!(f, "red-component"),
            Operation::Transform(TransformKind::Green) => write!(f, "green-component"),
            Operation::Transform(TransformKind::Blue) => write!(f, "blue-component"),
            Operation::Transform(TransformKind::MaxValue) => write!(f, "maxvalue-component"),
            Operation::Transform(TransformKind::Luma) => write!(f, "luma-component"),
            Operation::Transform(TransformKind::Intensity) => write!(f, "intensity-component"),
            Operation::Transform(TransformKind::Sepia) => write!(f, "sepia-tone"),
            Operation::Flip(FlipDirection::Horizontal) => write!(f, "horizontal-flip"),
            Operation::Flip(FlipDirection::Vertical) => write!(f, "vertical-flip"),
            Operation::Brighten(constant) => write!(f, "brighten {constant}"),
        }
    }
}
