//! # SusanEdge Algorithms
//!
//! Nucleus-comparison (SUSAN-style) edge detection on raster images.
//!
//! ## Components
//!
//! - **edges::kernel**: circular sampling mask and its area
//! - **edges::connectivity**: 8-connected island around the nucleus
//! - **edges::strength**: per-pixel edge strength from the USAN area deficit
//! - **edges::orientation**: per-pixel edge tangent angle
//! - **edges::angle**: folding angles into `(0, π]`

pub mod edges;
pub(crate) mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::edges::{
        connected_component, edge_orientation, edge_strength, normalize_angle, BitDepth,
        EdgeDetector, EdgeOrientation, EdgeOrientationParams, EdgeStrength, EdgeStrengthParams,
        KernelMask, StrengthMap,
    };
    pub use susanedge_core::prelude::*;
}
