#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pixedit_image as image;

#[doc(inline)]
pub use pixedit_imgproc as imgproc;

#[doc(inline)]
pub use pixedit_io as io;

#[doc(inline)]
pub use pixedit_store as store;
