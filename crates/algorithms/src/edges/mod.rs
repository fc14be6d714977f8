//! SUSAN edge detection
//!
//! Edges are found by comparing each pixel (the nucleus) with a circular
//! neighbourhood instead of taking derivatives:
//!
//! - [`edge_strength`]: how far the area of similar brightness around the
//!   nucleus (the USAN) falls below three quarters of the kernel
//! - [`edge_orientation`]: tangent angle in `(0, π]` derived from the
//!   strength map, `0` where there is no edge
//! - [`EdgeDetector`]: both passes over one prebuilt [`KernelMask`]
//!
//! Both passes can restrict the neighbourhood to the cells 8-connected to
//! the nucleus (`connected`).

mod angle;
mod connectivity;
mod detector;
mod kernel;
mod orientation;
mod quantize;
mod strength;
mod window;

pub use angle::normalize_angle;
pub use connectivity::connected_component;
pub use detector::{EdgeDetector, EdgeMaps};
pub use kernel::{KernelMask, KernelTap};
pub use orientation::{edge_orientation, EdgeOrientation, EdgeOrientationParams};
pub use quantize::{quantize, BitDepth, StrengthMap};
pub use strength::{edge_strength, EdgeStrength, EdgeStrengthParams};

/// Offset added to brightness before windowing
pub const BRIGHTNESS_OFFSET: f64 = 255.0;
