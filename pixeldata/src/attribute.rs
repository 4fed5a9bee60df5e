//! Utility module for fetching key attributes from a DICOM data set.

use dicom_extract_core::{AccessError, DataSet, Tag};
use dicom_extract_dictionary_std::tags;
use dicom_extract_encoding::FrameInfo;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use tracing::warn;

use crate::transform::{Rescale, VoiLutFunction, WindowLevel};

#[derive(Debug, Snafu)]
pub enum GetAttributeError {
    #[snafu(display("Missing required attribute `{}`", name))]
    MissingRequiredField {
        name: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not get attribute `{}`", name))]
    ConvertValue {
        name: &'static str,
        source: AccessError,
        backtrace: Backtrace,
    },

    #[snafu(display("Semantically invalid value `{}` for attribute `{}`", value, name))]
    InvalidValue {
        name: &'static str,
        value: String,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = GetAttributeError> = std::result::Result<T, E>;

/// An interpreted representation of the DICOM _Pixel Representation_ attribute.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum PixelRepresentation {
    /// unsigned pixel data sample values
    Unsigned,
    /// signed pixel data sample values
    Signed,
}

/// An interpreted representation of the
/// DICOM _Photometric Interpretation_ attribute.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum PhotometricInterpretation {
    /// Grayscale, minimum sample value is white
    Monochrome1,
    /// Grayscale, minimum sample value is black
    Monochrome2,
    PaletteColor,
    Rgb,
    YbrFull,
    /// YCbCr with horizontally subsampled chroma
    YbrFull422,
    YbrPartial420,
    YbrPartial422,
    /// Irreversible component transform of JPEG 2000
    YbrIct,
    /// Reversible component transform of JPEG 2000
    YbrRct,
    /// Any other value, kept verbatim
    Other(String),
}

impl PhotometricInterpretation {
    /// Whether the samples are in one of the YCbCr color spaces.
    pub fn is_ybr(&self) -> bool {
        use PhotometricInterpretation::*;
        matches!(
            self,
            YbrFull | YbrFull422 | YbrPartial420 | YbrPartial422 | YbrIct | YbrRct
        )
    }

    /// Whether luma and chroma values are restricted
    /// to the "studio" range (16..=235 for 8 bits).
    pub fn is_partial_range(&self) -> bool {
        matches!(
            self,
            PhotometricInterpretation::YbrPartial420 | PhotometricInterpretation::YbrPartial422
        )
    }

    pub fn as_str(&self) -> &str {
        use PhotometricInterpretation::*;
        match self {
            Monochrome1 => "MONOCHROME1",
            Monochrome2 => "MONOCHROME2",
            PaletteColor => "PALETTE COLOR",
            Rgb => "RGB",
            YbrFull => "YBR_FULL",
            YbrFull422 => "YBR_FULL_422",
            YbrPartial420 => "YBR_PARTIAL_420",
            YbrPartial422 => "YBR_PARTIAL_422",
            YbrIct => "YBR_ICT",
            YbrRct => "YBR_RCT",
            Other(s) => s,
        }
    }
}

impl From<&str> for PhotometricInterpretation {
    fn from(s: &str) -> Self {
        use PhotometricInterpretation::*;
        match s.trim() {
            "MONOCHROME1" => Monochrome1,
            "MONOCHROME2" => Monochrome2,
            "PALETTE COLOR" => PaletteColor,
            "RGB" => Rgb,
            "YBR_FULL" => YbrFull,
            "YBR_FULL_422" => YbrFull422,
            "YBR_PARTIAL_420" => YbrPartial420,
            "YBR_PARTIAL_422" => YbrPartial422,
            "YBR_ICT" => YbrIct,
            "YBR_RCT" => YbrRct,
            other => Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for PhotometricInterpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The image pixel properties of a data set,
/// collected and validated once before decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelDescriptor {
    pub rows: u16,
    pub columns: u16,
    pub samples_per_pixel: u16,
    pub bits_allocated: u16,
    pub bits_stored: u16,
    pub pixel_representation: PixelRepresentation,
    /// 0 for interleaved samples, 1 for separate color planes
    pub planar_configuration: u16,
    pub number_of_frames: u32,
    pub photometric_interpretation: PhotometricInterpretation,
}

impl PixelDescriptor {
    /// Collect the pixel descriptor from the image pixel module
    /// of the given data set.
    ///
    /// _Rows_, _Columns_ and _Bits Allocated_ are required.
    /// The other attributes fall back to the values of
    /// a single frame of unsigned grayscale samples
    /// using every allocated bit.
    pub fn from_data_set(dataset: &DataSet) -> Result<Self> {
        let rows = required_u16(dataset, tags::ROWS, "Rows")?;
        let columns = required_u16(dataset, tags::COLUMNS, "Columns")?;
        ensure!(
            rows > 0 && columns > 0,
            InvalidValueSnafu {
                name: "Rows/Columns",
                value: format!("{}x{}", columns, rows),
            }
        );
        let bits_allocated = required_u16(dataset, tags::BITS_ALLOCATED, "BitsAllocated")?;
        ensure!(
            matches!(bits_allocated, 8 | 16 | 32),
            InvalidValueSnafu {
                name: "BitsAllocated",
                value: bits_allocated.to_string(),
            }
        );

        let bits_stored =
            optional_u16(dataset, tags::BITS_STORED, "BitsStored")?.unwrap_or(bits_allocated);
        ensure!(
            bits_stored > 0 && bits_stored <= bits_allocated,
            InvalidValueSnafu {
                name: "BitsStored",
                value: bits_stored.to_string(),
            }
        );
        if let Some(high_bit) = optional_u16(dataset, tags::HIGH_BIT, "HighBit")? {
            if u32::from(high_bit) + 1 != u32::from(bits_stored) {
                warn!(
                    "High Bit is {} with {} bits stored, assuming the least significant bits",
                    high_bit, bits_stored
                );
            }
        }

        let samples_per_pixel =
            optional_u16(dataset, tags::SAMPLES_PER_PIXEL, "SamplesPerPixel")?.unwrap_or(1);
        ensure!(
            samples_per_pixel == 1 || samples_per_pixel == 3,
            InvalidValueSnafu {
                name: "SamplesPerPixel",
                value: samples_per_pixel.to_string(),
            }
        );

        let pixel_representation =
            match optional_u16(dataset, tags::PIXEL_REPRESENTATION, "PixelRepresentation")? {
                None | Some(0) => PixelRepresentation::Unsigned,
                Some(1) => PixelRepresentation::Signed,
                Some(p) => {
                    return InvalidValueSnafu {
                        name: "PixelRepresentation",
                        value: p.to_string(),
                    }
                    .fail()
                }
            };

        let planar_configuration = if samples_per_pixel > 1 {
            let p = optional_u16(dataset, tags::PLANAR_CONFIGURATION, "PlanarConfiguration")?
                .unwrap_or(0);
            ensure!(
                p <= 1,
                InvalidValueSnafu {
                    name: "PlanarConfiguration",
                    value: p.to_string(),
                }
            );
            p
        } else {
            0
        };

        let number_of_frames = match dataset
            .int::<i64>(tags::NUMBER_OF_FRAMES)
            .context(ConvertValueSnafu {
                name: "NumberOfFrames",
            })? {
            None => 1,
            Some(n) if n > 0 && n <= i64::from(u32::MAX) => n as u32,
            Some(n) => {
                return InvalidValueSnafu {
                    name: "NumberOfFrames",
                    value: n.to_string(),
                }
                .fail()
            }
        };

        let photometric_interpretation = match dataset
            .string(tags::PHOTOMETRIC_INTERPRETATION)
            .context(ConvertValueSnafu {
                name: "PhotometricInterpretation",
            })? {
            Some(pi) => PhotometricInterpretation::from(pi.as_str()),
            None if samples_per_pixel == 3 => {
                warn!("Photometric Interpretation is missing, assuming RGB");
                PhotometricInterpretation::Rgb
            }
            None => {
                warn!("Photometric Interpretation is missing, assuming MONOCHROME2");
                PhotometricInterpretation::Monochrome2
            }
        };

        Ok(PixelDescriptor {
            rows,
            columns,
            samples_per_pixel,
            bits_allocated,
            bits_stored,
            pixel_representation,
            planar_configuration,
            number_of_frames,
            photometric_interpretation,
        })
    }

    /// The properties of a single decoded frame.
    pub fn frame_info(&self) -> FrameInfo {
        FrameInfo {
            rows: self.rows,
            columns: self.columns,
            samples_per_pixel: self.samples_per_pixel,
            bits_allocated: self.bits_allocated,
        }
    }
}

/// Get the RescaleSlope and RescaleIntercept from the data set,
/// defaulting to the identity transform.
pub fn rescale(dataset: &DataSet) -> Result<Rescale> {
    let slope = first_f64(dataset, tags::RESCALE_SLOPE, "RescaleSlope")?.unwrap_or(1.);
    let intercept = first_f64(dataset, tags::RESCALE_INTERCEPT, "RescaleIntercept")?.unwrap_or(0.);
    Ok(Rescale::new(slope, intercept))
}

/// Retrieve the first WindowCenter/WindowWidth pair from the data set,
/// if both exist.
pub fn window(dataset: &DataSet) -> Result<Option<WindowLevel>> {
    let center = first_f64(dataset, tags::WINDOW_CENTER, "WindowCenter")?;
    let width = first_f64(dataset, tags::WINDOW_WIDTH, "WindowWidth")?;
    Ok(center
        .zip(width)
        .map(|(center, width)| WindowLevel { width, center }))
}

/// Get the VOILUTFunction from the data set, if it exists.
///
/// Unrecognized functions are reported with a warning and ignored.
pub fn voi_lut_function(dataset: &DataSet) -> Result<Option<VoiLutFunction>> {
    let Some(value) = dataset
        .string(tags::VOILUT_FUNCTION)
        .context(ConvertValueSnafu {
            name: "VOILUTFunction",
        })?
    else {
        return Ok(None);
    };
    match VoiLutFunction::try_from(value.trim()) {
        Ok(f) => Ok(Some(f)),
        Err(_) => {
            warn!("Ignoring unsupported VOI LUT function `{}`", value);
            Ok(None)
        }
    }
}

#[inline]
fn required_u16(dataset: &DataSet, tag: Tag, name: &'static str) -> Result<u16> {
    optional_u16(dataset, tag, name)?.context(MissingRequiredFieldSnafu { name })
}

#[inline]
fn optional_u16(dataset: &DataSet, tag: Tag, name: &'static str) -> Result<Option<u16>> {
    dataset.int::<u16>(tag).context(ConvertValueSnafu { name })
}

#[inline]
fn first_f64(dataset: &DataSet, tag: Tag, name: &'static str) -> Result<Option<f64>> {
    Ok(dataset
        .floats(tag)
        .context(ConvertValueSnafu { name })?
        .and_then(|values| values.first().copied()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_extract_core::{DataElement, PrimitiveValue, VR};

    fn us(tag: Tag, value: u16) -> DataElement {
        DataElement::new(tag, VR::US, PrimitiveValue::U16(vec![value].into()))
    }

    fn text(tag: Tag, vr: VR, values: &[&str]) -> DataElement {
        DataElement::new(
            tag,
            vr,
            PrimitiveValue::Strs(values.iter().map(|s| s.to_string()).collect()),
        )
    }

    fn minimal() -> Vec<DataElement> {
        vec![
            us(tags::ROWS, 4),
            us(tags::COLUMNS, 3),
            us(tags::BITS_ALLOCATED, 16),
        ]
    }

    #[test]
    fn descriptor_defaults() {
        let dataset: DataSet = minimal().into_iter().collect();
        let descriptor = PixelDescriptor::from_data_set(&dataset).unwrap();
        assert_eq!(
            descriptor,
            PixelDescriptor {
                rows: 4,
                columns: 3,
                samples_per_pixel: 1,
                bits_allocated: 16,
                bits_stored: 16,
                pixel_representation: PixelRepresentation::Unsigned,
                planar_configuration: 0,
                number_of_frames: 1,
                photometric_interpretation: PhotometricInterpretation::Monochrome2,
            }
        );
        assert_eq!(descriptor.frame_info().frame_len(), 4 * 3 * 2);
    }

    #[test]
    fn descriptor_reads_frames_from_integer_string() {
        let mut elements = minimal();
        elements.push(text(tags::NUMBER_OF_FRAMES, VR::IS, &["3 "]));
        elements.push(text(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, &["MONOCHROME1"]));
        let dataset: DataSet = elements.into_iter().collect();
        let descriptor = PixelDescriptor::from_data_set(&dataset).unwrap();
        assert_eq!(descriptor.number_of_frames, 3);
        assert_eq!(
            descriptor.photometric_interpretation,
            PhotometricInterpretation::Monochrome1
        );
    }

    #[test]
    fn bits_stored_beyond_bits_allocated_is_rejected() {
        let mut elements = minimal();
        elements.push(us(tags::BITS_STORED, 17));
        let dataset: DataSet = elements.into_iter().collect();
        assert!(matches!(
            PixelDescriptor::from_data_set(&dataset),
            Err(GetAttributeError::InvalidValue {
                name: "BitsStored",
                ..
            })
        ));
    }

    #[test]
    fn missing_rows_is_reported() {
        let dataset: DataSet = minimal()
            .into_iter()
            .filter(|e| e.tag() != tags::ROWS)
            .collect();
        assert!(matches!(
            PixelDescriptor::from_data_set(&dataset),
            Err(GetAttributeError::MissingRequiredField { name: "Rows", .. })
        ));
    }

    #[test]
    fn window_uses_the_first_values() {
        let dataset: DataSet = vec![
            text(tags::WINDOW_CENTER, VR::DS, &["40", "300"]),
            text(tags::WINDOW_WIDTH, VR::DS, &["400", "1500"]),
            text(tags::RESCALE_INTERCEPT, VR::DS, &["-1024"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            window(&dataset).unwrap(),
            Some(WindowLevel {
                width: 400.,
                center: 40.
            })
        );
        assert_eq!(rescale(&dataset).unwrap(), Rescale::new(1., -1024.));
        assert_eq!(voi_lut_function(&dataset).unwrap(), None);
    }

    #[test]
    fn window_requires_both_values() {
        let dataset: DataSet = vec![text(tags::WINDOW_CENTER, VR::DS, &["40"])]
            .into_iter()
            .collect();
        assert_eq!(window(&dataset).unwrap(), None);
    }

    #[test]
    fn photometric_interpretation_names() {
        assert_eq!(
            PhotometricInterpretation::from("YBR_FULL_422 "),
            PhotometricInterpretation::YbrFull422
        );
        assert!(PhotometricInterpretation::from("YBR_PARTIAL_420").is_partial_range());
        assert_eq!(
            PhotometricInterpretation::from("HSV").to_string(),
            "HSV".to_string()
        );
    }
}
