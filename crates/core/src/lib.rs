//! # SusanEdge Core
//!
//! Core types, traits and I/O for the susanedge edge detection workspace.
//!
//! This crate provides:
//! - `Raster<T>`: Generic single-band image grid
//! - `Image`: Multi-band container with rank validation and grayscale reduction
//! - `Neighborhood`: Kernel shapes used by the window-based algorithms
//! - Algorithm traits for consistent API
//! - I/O for TIFF images

pub mod error;
pub mod io;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Image, Padding, Raster, RasterElement, ToGray};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::raster::{Image, Neighborhood, Padding, Raster, RasterElement, ToGray};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in susanedge.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
