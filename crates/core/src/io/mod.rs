//! I/O operations for reading and writing images
//!
//! Gray and RGB TIFF files of any integer or float sample type are read
//! into an [`Image`](crate::Image); single-band rasters are written back in
//! their native width.

mod native;

pub use native::{read_image, read_image_from_buffer, write_raster, write_raster_to_buffer};
