#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use rasterblur_image as image;

#[doc(inline)]
pub use rasterblur_imgproc as imgproc;

#[doc(inline)]
pub use rasterblur_io as io;
