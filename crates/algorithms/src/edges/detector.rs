//! Strength and orientation sharing one kernel

use susanedge_core::{Raster, Result, ToGray};

use super::kernel::KernelMask;
use super::orientation::orientation_pass;
use super::quantize::{quantize, StrengthMap};
use super::strength::{usan_strength, EdgeStrengthParams};

/// Output of [`EdgeDetector::detect`]
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMaps {
    pub strength: StrengthMap,
    pub orientation: Raster<f64>,
}

/// Edge detector holding a prebuilt kernel.
///
/// Building the detector validates the parameters once; the kernel is then
/// reused by every call on every image.
///
/// # Example
///
/// ```
/// use susanedge_algorithms::prelude::*;
///
/// let mut image = Raster::filled(12, 12, 20.0);
/// for row in 0..12 {
///     for col in 6..12 {
///         image.set(row, col, 220.0).unwrap();
///     }
/// }
///
/// let detector = EdgeDetector::new(EdgeStrengthParams::default()).unwrap();
/// let maps = detector.detect(&image).unwrap();
/// assert_eq!(maps.strength.get(4, 5).unwrap(), 255.0);
/// assert!(maps.orientation.get(4, 5).unwrap() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct EdgeDetector {
    kernel: KernelMask,
    threshold: f64,
    range: u64,
    connected: bool,
}

impl EdgeDetector {
    /// Validate `params` and build the kernel
    pub fn new(params: EdgeStrengthParams) -> Result<Self> {
        params.validate()?;
        let kernel = KernelMask::new(params.radius)?;
        tracing::debug!(
            radius = kernel.radius(),
            area = kernel.area(),
            "built edge detector"
        );
        Ok(Self {
            kernel,
            threshold: params.threshold,
            range: params.range,
            connected: params.connected,
        })
    }

    /// The shared kernel
    pub fn kernel(&self) -> &KernelMask {
        &self.kernel
    }

    /// Edge strength of `image`, quantized to the configured range
    pub fn strength<I>(&self, image: &I) -> Result<StrengthMap>
    where
        I: ToGray + ?Sized,
    {
        let gray = image.to_gray()?;
        let raw = usan_strength(&gray, &self.kernel, self.threshold, self.connected)?;
        Ok(quantize(raw, self.range))
    }

    /// Edge orientation of a strength map produced with any range
    pub fn orientation<I>(&self, strength: &I) -> Result<Raster<f64>>
    where
        I: ToGray + ?Sized,
    {
        let map = strength.to_gray()?;
        orientation_pass(&map, &self.kernel, self.connected)
    }

    /// Both maps of `image`
    pub fn detect<I>(&self, image: &I) -> Result<EdgeMaps>
    where
        I: ToGray + ?Sized,
    {
        let strength = self.strength(image)?;
        let orientation = self.orientation(&strength)?;
        Ok(EdgeMaps {
            strength,
            orientation,
        })
    }
}
