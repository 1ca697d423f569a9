mod transform;

pub use transform::{
    color_transform, transform_by_name, ColorMatrix, ColorTransform, TransformKind,
    INTENSITY_MATRIX, LUMA_MATRIX, SEPIA_MATRIX,
};
