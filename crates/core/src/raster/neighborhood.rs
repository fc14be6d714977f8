//! Neighborhood shapes for window-based raster analysis

/// The eight neighbours of a cell as `(row_offset, col_offset)`,
/// clockwise from north.
pub const QUEEN_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Defines a neighborhood pattern around a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// Disk of given radius: a cell belongs to it when its Euclidean
    /// distance from the center, rounded to the nearest integer, does not
    /// exceed the radius
    Disk(usize),
}

impl Neighborhood {
    /// Get the radius of the neighborhood
    pub fn radius(&self) -> usize {
        match self {
            Neighborhood::Disk(r) => *r,
        }
    }

    /// Get the size of the neighborhood (width and height)
    pub fn size(&self) -> usize {
        self.radius() * 2 + 1
    }

    /// Check if a relative position is within this neighborhood
    pub fn contains(&self, dr: isize, dc: isize) -> bool {
        match self {
            Neighborhood::Disk(r) => {
                let dist = ((dr * dr + dc * dc) as f64).sqrt();
                dist.round() <= *r as f64
            }
        }
    }

    /// Relative positions in this neighborhood, row-major from the top-left
    pub fn offsets(&self) -> Vec<(isize, isize)> {
        let r = self.radius() as isize;
        let mut offsets = Vec::new();

        for dr in -r..=r {
            for dc in -r..=r {
                if self.contains(dr, dc) {
                    offsets.push((dr, dc));
                }
            }
        }

        offsets
    }
}
