//! Rescaling of a raw strength map into an integer range
//!
//! With a range `NR > 0` every strength value `v` becomes
//! `round(v * NR / max)` and the map is stored in the narrowest unsigned
//! width that can hold `NR`. `NR = 0` keeps the raw real-valued map.

use susanedge_core::{Raster, RasterElement, Result, ToGray};

/// Unsigned storage width of a quantized strength map
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BitDepth {
    U8,
    U16,
    U32,
    U64,
}

impl BitDepth {
    /// Narrowest width whose maximum is at least `range`
    pub fn for_range(range: u64) -> Self {
        if range <= u8::MAX as u64 {
            BitDepth::U8
        } else if range <= u16::MAX as u64 {
            BitDepth::U16
        } else if range <= u32::MAX as u64 {
            BitDepth::U32
        } else {
            BitDepth::U64
        }
    }

    /// Width in bits
    pub fn bits(self) -> u32 {
        match self {
            BitDepth::U8 => 8,
            BitDepth::U16 => 16,
            BitDepth::U32 => 32,
            BitDepth::U64 => 64,
        }
    }
}

/// Edge strength map, either raw or quantized
#[derive(Debug, Clone, PartialEq)]
pub enum StrengthMap {
    /// Unnormalized USAN area deficit
    Real(Raster<f64>),
    U8(Raster<u8>),
    U16(Raster<u16>),
    U32(Raster<u32>),
    U64(Raster<u64>),
}

macro_rules! each_map {
    ($map:expr, $r:ident => $body:expr) => {
        match $map {
            StrengthMap::Real($r) => $body,
            StrengthMap::U8($r) => $body,
            StrengthMap::U16($r) => $body,
            StrengthMap::U32($r) => $body,
            StrengthMap::U64($r) => $body,
        }
    };
}

impl StrengthMap {
    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        each_map!(self, r => r.shape())
    }

    /// Integer width, `None` for a raw map
    pub fn depth(&self) -> Option<BitDepth> {
        match self {
            StrengthMap::Real(_) => None,
            StrengthMap::U8(_) => Some(BitDepth::U8),
            StrengthMap::U16(_) => Some(BitDepth::U16),
            StrengthMap::U32(_) => Some(BitDepth::U32),
            StrengthMap::U64(_) => Some(BitDepth::U64),
        }
    }

    /// Value at (row, col) as f64
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        each_map!(self, r => r.get(row, col).map(|v| v.to_f64().unwrap_or(0.0)))
    }

    /// Largest value in the map, 0 for an empty map
    pub fn max_value(&self) -> f64 {
        each_map!(self, r => r
            .data()
            .iter()
            .filter_map(|&v| v.to_f64())
            .fold(0.0, f64::max))
    }

    /// Copy the map into an f64 raster
    pub fn to_f64(&self) -> Raster<f64> {
        each_map!(self, r => r.map(|v| v.to_f64().unwrap_or(0.0)))
    }

    /// The raw map, if this map was not quantized
    pub fn as_real(&self) -> Option<&Raster<f64>> {
        match self {
            StrengthMap::Real(r) => Some(r),
            _ => None,
        }
    }
}

impl ToGray for StrengthMap {
    fn to_gray(&self) -> Result<Raster<f64>> {
        Ok(self.to_f64())
    }
}

/// Rescale `raw` to `[0, range]` and store it in the narrowest width.
///
/// `range == 0` returns the raw map. A map whose maximum is zero (no edge
/// anywhere) quantizes to all zeros.
pub fn quantize(raw: Raster<f64>, range: u64) -> StrengthMap {
    if range == 0 {
        return StrengthMap::Real(raw);
    }

    let max = raw.data().iter().copied().fold(0.0, f64::max);
    let scale = if max > 0.0 {
        range as f64 / max
    } else {
        tracing::debug!("strength map has no positive value, quantizing to zeros");
        0.0
    };

    match BitDepth::for_range(range) {
        BitDepth::U8 => StrengthMap::U8(rescale(&raw, scale, range)),
        BitDepth::U16 => StrengthMap::U16(rescale(&raw, scale, range)),
        BitDepth::U32 => StrengthMap::U32(rescale(&raw, scale, range)),
        BitDepth::U64 => StrengthMap::U64(rescale(&raw, scale, range)),
    }
}

fn rescale<T: RasterElement>(raw: &Raster<f64>, scale: f64, range: u64) -> Raster<T> {
    let top = range as f64;
    raw.map(|v| {
        let q = (v * scale).round().clamp(0.0, top);
        T::from_f64(q).unwrap_or_else(T::max_value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_selection() {
        assert_eq!(BitDepth::for_range(1), BitDepth::U8);
        assert_eq!(BitDepth::for_range(255), BitDepth::U8);
        assert_eq!(BitDepth::for_range(256), BitDepth::U16);
        assert_eq!(BitDepth::for_range(65_535), BitDepth::U16);
        assert_eq!(BitDepth::for_range(65_536), BitDepth::U32);
        assert_eq!(BitDepth::for_range(u32::MAX as u64 + 1), BitDepth::U64);
        assert_eq!(BitDepth::for_range(u64::MAX).bits(), 64);
    }

    #[test]
    fn test_quantize_hits_range() {
        let raw = Raster::from_vec(vec![0.0, 1.5, 3.0, 6.0], 2, 2).unwrap();
        let map = quantize(raw, 255);
        assert_eq!(map.depth(), Some(BitDepth::U8));
        assert_eq!(map.get(1, 1).unwrap(), 255.0);
        assert_eq!(map.get(0, 1).unwrap(), 64.0); // round(63.75)
        assert_eq!(map.get(1, 0).unwrap(), 128.0); // round(127.5)
        assert_eq!(map.get(0, 0).unwrap(), 0.0);
        assert_eq!(map.max_value(), 255.0);
    }

    #[test]
    fn test_quantize_wide_range() {
        let raw = Raster::from_vec(vec![0.0, 2.0], 1, 2).unwrap();
        let map = quantize(raw, 1000);
        assert!(matches!(map, StrengthMap::U16(_)));
        assert_eq!(map.get(0, 1).unwrap(), 1000.0);

        let raw = Raster::from_vec(vec![0.5, 1.0], 1, 2).unwrap();
        let map = quantize(raw, u64::MAX);
        assert!(matches!(map, StrengthMap::U64(_)));
        assert_eq!(map.max_value(), u64::MAX as f64);
    }

    #[test]
    fn test_quantize_all_zero() {
        let raw = Raster::new(3, 3);
        let map = quantize(raw, 255);
        assert_eq!(map.depth(), Some(BitDepth::U8));
        assert_eq!(map.max_value(), 0.0);
    }

    #[test]
    fn test_zero_range_keeps_raw() {
        let raw = Raster::from_vec(vec![0.0, 1.25], 1, 2).unwrap();
        let map = quantize(raw.clone(), 0);
        assert_eq!(map.as_real(), Some(&raw));
        assert_eq!(map.depth(), None);
    }
}
