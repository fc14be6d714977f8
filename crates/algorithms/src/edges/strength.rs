//! Edge strength from the USAN area deficit
//!
//! Every pixel (the nucleus) is compared with the cells of a circular
//! kernel around it. The smooth similarity `exp(-((v_q - v_p) / t)^6)` is
//! close to 1 for near-equal brightness and drops to 0 quickly past `t`.
//! The summed similarity is the USAN area; edge strength is how far that
//! area falls short of three quarters of the kernel area.

use crate::maybe_rayon::*;
use susanedge_core::raster::{Padding, Raster};
use susanedge_core::{Algorithm, Error, Result, ToGray};

use super::kernel::KernelMask;
use super::quantize::{quantize, StrengthMap};
use super::window::UsanWindow;
use super::BRIGHTNESS_OFFSET;

/// Parameters for edge strength
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStrengthParams {
    /// Brightness difference threshold `t` (> 0)
    pub threshold: f64,
    /// Kernel radius (>= 1)
    pub radius: usize,
    /// Output range: values are rescaled to `[0, range]`; 0 keeps raw values
    pub range: u64,
    /// Only count similar cells 8-connected to the nucleus
    pub connected: bool,
}

impl Default for EdgeStrengthParams {
    fn default() -> Self {
        Self {
            threshold: 27.0,
            radius: 3,
            range: 255,
            connected: false,
        }
    }
}

impl EdgeStrengthParams {
    /// Check the brightness threshold; the radius is checked when the
    /// kernel is built
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(Error::InvalidParameter {
                name: "threshold",
                value: self.threshold.to_string(),
                reason: "brightness threshold must be a positive finite number".to_string(),
            });
        }
        Ok(())
    }
}

/// Edge strength algorithm
#[derive(Debug, Clone, Default)]
pub struct EdgeStrength;

impl Algorithm for EdgeStrength {
    type Input = Raster<f64>;
    type Output = StrengthMap;
    type Params = EdgeStrengthParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "EdgeStrength"
    }

    fn description(&self) -> &'static str {
        "SUSAN edge strength (USAN area deficit below the geometric threshold)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        edge_strength(&input, params)
    }
}

/// Compute the edge strength map of an image
///
/// Multi-band input is reduced to gray first; only 1- and 3-band images are
/// accepted. Border pixels see an edge-replicated neighbourhood, so every
/// pixel is evaluated over a full kernel.
///
/// # Arguments
/// * `image` - Input image (any [`ToGray`] source)
/// * `params` - Threshold, radius, output range and connectivity flag
///
/// # Returns
/// A map of the same shape; zero where the pixel is not an edge. With
/// `range > 0` the values are integers in `[0, range]`.
pub fn edge_strength<I>(image: &I, params: EdgeStrengthParams) -> Result<StrengthMap>
where
    I: ToGray + ?Sized,
{
    params.validate()?;
    let kernel = KernelMask::new(params.radius)?;
    let gray = image.to_gray()?;
    let raw = usan_strength(&gray, &kernel, params.threshold, params.connected)?;
    Ok(quantize(raw, params.range))
}

/// Raw (unquantized) strength of every pixel of `gray`
pub(crate) fn usan_strength(
    gray: &Raster<f64>,
    kernel: &KernelMask,
    threshold: f64,
    connected: bool,
) -> Result<Raster<f64>> {
    if gray.data().iter().any(|v| !v.is_finite()) {
        return Err(Error::InvalidParameter {
            name: "image",
            value: "non-finite sample".to_string(),
            reason: "brightness values must be finite".to_string(),
        });
    }

    let (rows, cols) = gray.shape();
    let radius = kernel.radius();
    let geometric = kernel.geometric_threshold();
    tracing::debug!(
        rows,
        cols,
        radius,
        area = kernel.area(),
        geometric,
        connected,
        "computing edge strength"
    );

    let padded = gray
        .map(|v| v + BRIGHTNESS_OFFSET)
        .padded(radius, Padding::Replicate);
    let src = padded.data();

    let output_data: Vec<f64> = (0..rows)
        .into_par_iter()
        .map_init(
            || UsanWindow::new(kernel),
            |window, row| {
                let mut row_data = vec![0.0; cols];

                for (col, out) in row_data.iter_mut().enumerate() {
                    let nucleus = src[[row + radius, col + radius]];
                    window.load(kernel, |tap| {
                        similarity(src[[row + tap.wrow, col + tap.wcol]] - nucleus, threshold)
                    });
                    if connected {
                        window.restrict_to_nucleus(kernel);
                    }

                    let area = window.area(kernel);
                    if area < geometric {
                        *out = geometric - area;
                    }
                }

                row_data
            },
        )
        .flatten()
        .collect();

    Raster::from_vec(output_data, rows, cols)
}

/// Smooth brightness similarity, 1 for equal values
#[inline]
fn similarity(diff: f64, threshold: f64) -> f64 {
    (-(diff / threshold).powi(6)).exp()
}
