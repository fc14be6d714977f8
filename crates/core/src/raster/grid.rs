//! Main Raster type

use crate::error::{Error, Result};
use crate::raster::RasterElement;
use ndarray::{s, Array2};

/// How to fill the border added by [`Raster::padded`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Padding<T> {
    /// Repeat the nearest edge cell outward
    Replicate,
    /// Fill the border with a fixed value
    Constant(T),
}

/// A single-band 2D raster grid.
///
/// `Raster<T>` stores values of type `T` in row-major order `(row, col)`.
///
/// # Type Parameters
///
/// - `T`: The cell value type, must implement [`RasterElement`]
///
/// # Example
///
/// ```
/// use susanedge_core::Raster;
///
/// let mut raster: Raster<f64> = Raster::new(100, 100);
/// raster.set(10, 20, 42.0).unwrap();
/// assert_eq!(raster.get(10, 20).unwrap(), 42.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T: RasterElement> {
    data: Array2<T>,
}

impl<T: RasterElement> Raster<T> {
    /// Create a new raster filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create a new raster filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
        }
    }

    /// Create a raster from existing row-major data
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data: array })
    }

    /// Create a raster from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    /// Create a raster of another type by applying `f` to every cell
    pub fn map<U, F>(&self, f: F) -> Raster<U>
    where
        U: RasterElement,
        F: Fn(T) -> U,
    {
        Raster {
            data: self.data.mapv(f),
        }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the raster is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Consume the raster and return the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    /// Copy the raster into a larger one with `radius` extra rows and
    /// columns on every side.
    ///
    /// The interior of the result at `(row + radius, col + radius)` equals
    /// the source cell `(row, col)`. An empty source yields a raster filled
    /// per `padding` (zeros for `Replicate`, since there is nothing to copy).
    pub fn padded(&self, radius: usize, padding: Padding<T>) -> Raster<T> {
        let (rows, cols) = self.shape();
        let fill = match padding {
            Padding::Constant(v) => v,
            Padding::Replicate => T::zero(),
        };
        let mut out = Array2::from_elem((rows + 2 * radius, cols + 2 * radius), fill);
        if rows == 0 || cols == 0 {
            return Raster { data: out };
        }

        out.slice_mut(s![radius..radius + rows, radius..radius + cols])
            .assign(&self.data);

        if matches!(padding, Padding::Replicate) {
            let (prows, pcols) = out.dim();
            for pr in 0..prows {
                let src_r = pr.saturating_sub(radius).min(rows - 1);
                for pc in 0..pcols {
                    let inside_r = pr >= radius && pr < radius + rows;
                    let inside_c = pc >= radius && pc < radius + cols;
                    if inside_r && inside_c {
                        continue;
                    }
                    let src_c = pc.saturating_sub(radius).min(cols - 1);
                    out[(pr, pc)] = self.data[(src_r, src_c)];
                }
            }
        }

        Raster { data: out }
    }

    // Statistics

    /// Calculate basic statistics (min, max, mean, count of finite cells)
    pub fn statistics(&self) -> RasterStatistics<T> {
        let mut min: Option<T> = None;
        let mut max: Option<T> = None;
        let mut sum: f64 = 0.0;
        let mut count: usize = 0;

        for &value in self.data.iter() {
            let Some(v) = value.to_f64() else { continue };
            if !v.is_finite() {
                continue;
            }

            if min.is_none_or(|m| value < m) {
                min = Some(value);
            }
            if max.is_none_or(|m| value > m) {
                max = Some(value);
            }

            sum += v;
            count += 1;
        }

        let mean = if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        };

        RasterStatistics {
            min,
            max,
            mean,
            valid_count: count,
        }
    }
}

/// Basic statistics for a raster
#[derive(Debug, Clone)]
pub struct RasterStatistics<T> {
    pub min: Option<T>,
    pub max: Option<T>,
    pub mean: Option<f64>,
    pub valid_count: usize,
}
