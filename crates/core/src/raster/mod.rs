//! Raster data structures and operations

mod element;
mod grid;
mod image;
mod neighborhood;

pub use element::RasterElement;
pub use grid::{Padding, Raster, RasterStatistics};
pub use image::{Image, ToGray, LUMA_WEIGHTS};
pub use neighborhood::{Neighborhood, QUEEN_OFFSETS};
