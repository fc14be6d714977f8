//! TIFF reading/writing through the `tiff` crate

use crate::error::{Error, Result};
use crate::raster::{Image, Raster, RasterElement};
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::colortype::{Gray16, Gray32, Gray64, Gray64Float, Gray8};
use tiff::encoder::TiffEncoder;
use tiff::ColorType;

/// Read a gray or RGB TIFF file into an [`Image`]
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Image> {
    let file = File::open(path.as_ref())?;
    decode_tiff(BufReader::new(file))
}

/// Read a TIFF from an in-memory buffer into an [`Image`]
pub fn read_image_from_buffer(data: &[u8]) -> Result<Image> {
    decode_tiff(Cursor::new(data))
}

/// Internal: decode a TIFF from any `Read + Seek` source
fn decode_tiff<R>(reader: R) -> Result<Image>
where
    R: std::io::Read + std::io::Seek,
{
    let mut decoder =
        Decoder::new(reader).map_err(|e| Error::Other(format!("TIFF decode error: {}", e)))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| Error::Other(format!("Cannot read dimensions: {}", e)))?;

    let bands = match decoder
        .colortype()
        .map_err(|e| Error::Other(format!("Cannot read color type: {}", e)))?
    {
        ColorType::Gray(_) => 1,
        ColorType::RGB(_) => 3,
        other => {
            return Err(Error::UnsupportedDataType(format!(
                "TIFF color type {:?}",
                other
            )));
        }
    };

    let result = decoder
        .read_image()
        .map_err(|e| Error::Other(format!("Cannot read image data: {}", e)))?;

    macro_rules! widen {
        ($buf:expr) => {
            $buf.into_iter().map(|v| v as f64).collect::<Vec<f64>>()
        };
    }

    let samples = match result {
        DecodingResult::U8(buf) => widen!(buf),
        DecodingResult::U16(buf) => widen!(buf),
        DecodingResult::U32(buf) => widen!(buf),
        DecodingResult::U64(buf) => widen!(buf),
        DecodingResult::I8(buf) => widen!(buf),
        DecodingResult::I16(buf) => widen!(buf),
        DecodingResult::I32(buf) => widen!(buf),
        DecodingResult::I64(buf) => widen!(buf),
        DecodingResult::F32(buf) => widen!(buf),
        DecodingResult::F64(buf) => buf,
        #[allow(unreachable_patterns)]
        _ => {
            return Err(Error::UnsupportedDataType(
                "Unsupported TIFF sample format".to_string(),
            ));
        }
    };

    Image::from_interleaved(samples, height as usize, width as usize, bands)
}

/// Write a single-band raster to a TIFF file.
///
/// Unsigned integer rasters keep their width (8/16/32/64 bit); float
/// rasters are written as 64-bit float.
pub fn write_raster<T, P>(raster: &Raster<T>, path: P) -> Result<()>
where
    T: RasterElement,
    P: AsRef<Path>,
{
    let file = File::create(path.as_ref())?;
    encode_tiff(raster, BufWriter::new(file))
}

/// Write a single-band raster to an in-memory TIFF buffer
pub fn write_raster_to_buffer<T: RasterElement>(raster: &Raster<T>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode_tiff(raster, Cursor::new(&mut buf))?;
    Ok(buf)
}

/// Internal: encode a raster as TIFF into any `Write + Seek` sink
fn encode_tiff<T, W>(raster: &Raster<T>, writer: W) -> Result<()>
where
    T: RasterElement,
    W: std::io::Write + std::io::Seek,
{
    let mut encoder =
        TiffEncoder::new(writer).map_err(|e| Error::Other(format!("TIFF encoder error: {}", e)))?;

    let (rows, cols) = raster.shape();
    let (width, height) = (cols as u32, rows as u32);

    let written = if T::is_float() {
        encoder.write_image::<Gray64Float>(width, height, &samples::<T, f64>(raster)?)
    } else {
        match T::bit_depth() {
            8 => encoder.write_image::<Gray8>(width, height, &samples::<T, u8>(raster)?),
            16 => encoder.write_image::<Gray16>(width, height, &samples::<T, u16>(raster)?),
            32 => encoder.write_image::<Gray32>(width, height, &samples::<T, u32>(raster)?),
            _ => encoder.write_image::<Gray64>(width, height, &samples::<T, u64>(raster)?),
        }
    };

    written.map_err(|e| Error::Other(format!("Cannot write image data: {}", e)))
}

fn samples<T: RasterElement, U: RasterElement>(raster: &Raster<T>) -> Result<Vec<U>> {
    raster
        .data()
        .iter()
        .map(|&v| {
            num_traits::cast::<T, U>(v)
                .ok_or_else(|| Error::UnsupportedDataType(format!("cannot store {:?}", v)))
        })
        .collect()
}
