//! Circular sampling mask shared by the strength and orientation passes
//!
//! The mask is built once per radius. Besides the boolean cells it keeps a
//! tap table with each active cell's offsets and the moment terms the
//! orientation pass needs, so no per-pixel code recomputes geometry.

use ndarray::Array2;
use susanedge_core::raster::Neighborhood;
use susanedge_core::{Error, Result};

/// One active cell of a [`KernelMask`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelTap {
    /// Row offset from the nucleus
    pub dr: isize,
    /// Column offset from the nucleus
    pub dc: isize,
    /// Row of the cell inside the window (`dr + radius`)
    pub wrow: usize,
    /// Column of the cell inside the window (`dc + radius`)
    pub wcol: usize,
    /// Row-major index of the cell inside the `width × width` window
    pub index: usize,
    /// Horizontal coordinate (`dc`)
    pub dx: f64,
    /// Vertical coordinate (`dr`)
    pub dy: f64,
    /// `dx²`
    pub dx2: f64,
    /// `dy²`
    pub dy2: f64,
    /// `dx · dy`
    pub dxdy: f64,
}

/// Circular kernel of side `2 * radius + 1`.
///
/// A cell at offset `(i, j)` is active iff `round(sqrt(i² + j²)) <= radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelMask {
    radius: usize,
    cells: Array2<bool>,
    taps: Vec<KernelTap>,
}

impl KernelMask {
    /// Build the mask for `radius`.
    ///
    /// # Errors
    /// `InvalidParameter` when `radius` is zero.
    pub fn new(radius: usize) -> Result<Self> {
        if radius == 0 {
            return Err(Error::InvalidParameter {
                name: "radius",
                value: "0".to_string(),
                reason: "kernel radius must be at least 1".to_string(),
            });
        }

        let shape = Neighborhood::Disk(radius);
        let width = shape.size();
        let r = radius as isize;

        let cells = Array2::from_shape_fn((width, width), |(row, col)| {
            shape.contains(row as isize - r, col as isize - r)
        });

        let taps = shape
            .offsets()
            .into_iter()
            .map(|(dr, dc)| {
                let (dx, dy) = (dc as f64, dr as f64);
                let (wrow, wcol) = ((dr + r) as usize, (dc + r) as usize);
                KernelTap {
                    dr,
                    dc,
                    wrow,
                    wcol,
                    index: wrow * width + wcol,
                    dx,
                    dy,
                    dx2: dx * dx,
                    dy2: dy * dy,
                    dxdy: dx * dy,
                }
            })
            .collect();

        Ok(Self {
            radius,
            cells,
            taps,
        })
    }

    /// Kernel radius
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Window side length (`2 * radius + 1`)
    pub fn width(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of active cells (`KArea`)
    pub fn area(&self) -> usize {
        self.taps.len()
    }

    /// USAN area below which a nucleus counts as edge-like: `3 * area / 4`
    pub fn geometric_threshold(&self) -> f64 {
        3.0 * self.area() as f64 / 4.0
    }

    /// Minimum count of similar cells for a window to be treated as
    /// connected without running a flood fill (`area - radius`)
    pub fn connectivity_floor(&self) -> usize {
        self.area() - self.radius
    }

    /// Row-major index of the nucleus inside the window
    pub fn center_index(&self) -> usize {
        self.radius * self.width() + self.radius
    }

    /// Whether the cell at offset `(dr, dc)` is active
    pub fn contains(&self, dr: isize, dc: isize) -> bool {
        let r = self.radius as isize;
        if dr.abs() > r || dc.abs() > r {
            return false;
        }
        self.cells[((dr + r) as usize, (dc + r) as usize)]
    }

    /// The boolean mask as a `width × width` array
    pub fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Active cells in row-major order
    pub fn taps(&self) -> &[KernelTap] {
        &self.taps
    }
}
