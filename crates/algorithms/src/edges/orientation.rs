//! Edge orientation from the local strength distribution
//!
//! For every pixel with positive strength the strength map itself is used
//! as the USAN weights. When the weighted centroid sits within one pixel of
//! the nucleus the edge runs through it and the principal axis of the
//! second moments gives the tangent; otherwise the edge runs between pixels
//! and the tangent is perpendicular to the centroid offset.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::maybe_rayon::*;
use susanedge_core::raster::{Padding, Raster};
use susanedge_core::{Algorithm, Error, Result, ToGray};

use super::angle::normalize_angle;
use super::kernel::KernelMask;
use super::window::UsanWindow;
use super::BRIGHTNESS_OFFSET;

/// Parameters for edge orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeOrientationParams {
    /// Kernel radius (>= 1); should match the radius of the strength pass
    pub radius: usize,
    /// Only count strength cells 8-connected to the nucleus
    pub connected: bool,
}

impl Default for EdgeOrientationParams {
    fn default() -> Self {
        Self {
            radius: 3,
            connected: false,
        }
    }
}

/// Edge orientation algorithm
#[derive(Debug, Clone, Default)]
pub struct EdgeOrientation;

impl Algorithm for EdgeOrientation {
    type Input = Raster<f64>;
    type Output = Raster<f64>;
    type Params = EdgeOrientationParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "EdgeOrientation"
    }

    fn description(&self) -> &'static str {
        "SUSAN edge orientation (tangent angle in (0, π] from an edge strength map)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        edge_orientation(&input, params)
    }
}

/// Compute the edge orientation map from an edge strength map
///
/// The strength map may be raw or quantized; a map whose maximum exceeds 1
/// is divided by that maximum first. Cells outside the image contribute
/// zero weight.
///
/// # Arguments
/// * `strength` - Edge strength map (any [`ToGray`] source)
/// * `params` - Kernel radius and connectivity flag
///
/// # Returns
/// Tangent angles in `(0, π]` where strength is positive, `0` elsewhere
pub fn edge_orientation<I>(strength: &I, params: EdgeOrientationParams) -> Result<Raster<f64>>
where
    I: ToGray + ?Sized,
{
    let kernel = KernelMask::new(params.radius)?;
    let map = strength.to_gray()?;
    orientation_pass(&map, &kernel, params.connected)
}

pub(crate) fn orientation_pass(
    map: &Raster<f64>,
    kernel: &KernelMask,
    connected: bool,
) -> Result<Raster<f64>> {
    if map.data().iter().any(|v| !v.is_finite()) {
        return Err(Error::InvalidParameter {
            name: "strength",
            value: "non-finite sample".to_string(),
            reason: "strength values must be finite".to_string(),
        });
    }

    let (rows, cols) = map.shape();
    let radius = kernel.radius();

    let max = map.data().iter().copied().fold(0.0, f64::max);
    let unit = if max > 1.0 {
        tracing::debug!(max, "rescaling strength map to [0, 1]");
        map.map(|v| v / max)
    } else {
        map.clone()
    };

    let padded = unit
        .map(|v| v + BRIGHTNESS_OFFSET)
        .padded(radius, Padding::Constant(BRIGHTNESS_OFFSET));
    let src = padded.data();
    let strength = unit.data();

    let output_data: Vec<f64> = (0..rows)
        .into_par_iter()
        .map_init(
            || UsanWindow::new(kernel),
            |window, row| {
                let mut row_data = vec![0.0; cols];

                for (col, out) in row_data.iter_mut().enumerate() {
                    if strength[[row, col]] <= 0.0 {
                        continue;
                    }

                    window.load(kernel, |tap| {
                        src[[row + tap.wrow, col + tap.wcol]] - BRIGHTNESS_OFFSET
                    });
                    if connected {
                        window.restrict_to_nucleus(kernel);
                    }

                    if let Some(angle) = tangent_angle(window, kernel) {
                        *out = normalize_angle(angle);
                    }
                }

                row_data
            },
        )
        .flatten()
        .collect();

    Raster::from_vec(output_data, rows, cols)
}

/// Raw tangent angle of one loaded window, `None` if the window has no
/// positive weight
fn tangent_angle(window: &UsanWindow, kernel: &KernelMask) -> Option<f64> {
    let mut area = 0.0;
    let mut sx = 0.0;
    let mut sy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;

    for tap in kernel.taps() {
        let w = window.weight(tap);
        area += w;
        sx += tap.dx * w;
        sy += tap.dy * w;
        sxx += tap.dx2 * w;
        syy += tap.dy2 * w;
        sxy += tap.dxdy * w;
    }

    if area <= 0.0 {
        return None;
    }

    // Rows grow downwards; flip so angles run counter-clockwise
    let cdx = sx / area;
    let cdy = -sy / area;

    let angle = if cdx.hypot(cdy) < 1.0 {
        let dx = sxx;
        let dy = -syy;
        if dx > 0.0 {
            // Zero cross moment counts as positive, so a vertical ridge stays near π/2
            let sign = if sxy < 0.0 { -1.0 } else { 1.0 };
            sign * (dy / dx).atan()
        } else {
            FRAC_PI_2
        }
    } else if cdx != 0.0 {
        FRAC_PI_2 + (cdy / cdx).atan()
    } else {
        PI
    };

    Some(angle)
}
