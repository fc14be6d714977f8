//! Raster element trait for generic cell values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a raster cell.
///
/// Covers the unsigned integer widths a quantized edge map may be stored in
/// plus the two float types used for real-valued maps.
pub trait RasterElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Maximum value representable by this type
    fn max_value() -> Self;

    /// Storage width in bits
    fn bit_depth() -> u32;

    /// Whether this type is a floating point type
    fn is_float() -> bool;

    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }

    /// Convert from f64, `None` when the value does not fit
    fn from_f64(value: f64) -> Option<Self> {
        NumCast::from(value)
    }
}

macro_rules! impl_raster_element {
    ($t:ty, $float:expr) => {
        impl RasterElement for $t {
            fn max_value() -> Self {
                <$t>::MAX
            }

            fn bit_depth() -> u32 {
                (std::mem::size_of::<$t>() * 8) as u32
            }

            fn is_float() -> bool {
                $float
            }
        }
    };
}

impl_raster_element!(u8, false);
impl_raster_element!(u16, false);
impl_raster_element!(u32, false);
impl_raster_element!(u64, false);
impl_raster_element!(f32, true);
impl_raster_element!(f64, true);
