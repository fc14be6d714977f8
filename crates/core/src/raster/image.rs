//! Multi-band images and reduction to a single brightness band

use crate::error::{Error, Result};
use crate::raster::{Raster, RasterElement};
use ndarray::{Array3, ArrayD, Axis, Ix2, Ix3};

/// Luminance weights applied to (R, G, B) when reducing a color image
/// (ITU-R BT.601).
pub const LUMA_WEIGHTS: [f64; 3] = [0.298_936_021_293_775, 0.587_043_074_451_121, 0.114_020_904_255_103];

/// Reduce an input to one real-valued brightness band.
///
/// Window algorithms accept anything implementing this trait, so the
/// image rank check happens once at the boundary before any pixel work.
pub trait ToGray {
    /// Return a single-band `f64` copy of the input
    fn to_gray(&self) -> Result<Raster<f64>>;
}

impl<T: RasterElement> ToGray for Raster<T> {
    fn to_gray(&self) -> Result<Raster<f64>> {
        Ok(self.map(|v| v.to_f64().unwrap_or(0.0)))
    }
}

/// An image stored as `(rows, cols, bands)`.
///
/// Only 1-band (gray) and 3-band (RGB) images reduce to gray; any other
/// band count is rejected by [`ToGray::to_gray`].
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    data: Array3<f64>,
}

impl Image {
    /// Wrap a `(rows, cols, bands)` array
    pub fn from_array(data: Array3<f64>) -> Self {
        Self { data }
    }

    /// Wrap an array of arbitrary rank.
    ///
    /// A 2-D array becomes a 1-band image; a 3-D array is taken as
    /// `(rows, cols, bands)`. Any other rank is an error.
    pub fn from_dyn(data: ArrayD<f64>) -> Result<Self> {
        match data.ndim() {
            2 => {
                let gray = data
                    .into_dimensionality::<Ix2>()
                    .map_err(|e| Error::Other(e.to_string()))?;
                Ok(Self {
                    data: gray.insert_axis(Axis(2)),
                })
            }
            3 => {
                let data = data
                    .into_dimensionality::<Ix3>()
                    .map_err(|e| Error::Other(e.to_string()))?;
                Ok(Self { data })
            }
            n => Err(Error::UnsupportedRank(n)),
        }
    }

    /// Create from interleaved row-major samples
    pub fn from_interleaved(data: Vec<f64>, rows: usize, cols: usize, bands: usize) -> Result<Self> {
        if bands == 0 || data.len() != rows * cols * bands {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }
        let data = Array3::from_shape_vec((rows, cols, bands), data)
            .map_err(|e| Error::Other(e.to_string()))?;
        Ok(Self { data })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.dim().1
    }

    /// Number of bands (channels)
    pub fn bands(&self) -> usize {
        self.data.dim().2
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array3<f64> {
        &self.data
    }
}

impl From<Raster<f64>> for Image {
    fn from(raster: Raster<f64>) -> Self {
        Self {
            data: raster.into_array().insert_axis(Axis(2)),
        }
    }
}

impl ToGray for Image {
    fn to_gray(&self) -> Result<Raster<f64>> {
        match self.bands() {
            1 => Ok(Raster::from_array(self.data.index_axis(Axis(2), 0).to_owned())),
            3 => {
                let gray = self.data.map_axis(Axis(2), |px| {
                    px[0] * LUMA_WEIGHTS[0] + px[1] * LUMA_WEIGHTS[1] + px[2] * LUMA_WEIGHTS[2]
                });
                Ok(Raster::from_array(gray))
            }
            n => Err(Error::UnsupportedBands(n)),
        }
    }
}
