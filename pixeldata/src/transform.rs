//! Pixel sample value transformation functions:
//! the modality rescale and the VOI window.

use snafu::Snafu;

/// Description of a modality rescale function,
/// defined by a _rescale slope_ and _rescale intercept_.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rescale {
    /// the rescale slope
    pub slope: f64,
    /// the rescale intercept
    pub intercept: f64,
}

impl Rescale {
    /// Create a new rescale function.
    #[inline]
    pub fn new(slope: f64, intercept: f64) -> Self {
        Rescale { slope, intercept }
    }

    /// Whether this rescale leaves values unchanged.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.slope == 1. && self.intercept == 0.
    }

    /// Apply the rescale function to a value.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        self.slope * value + self.intercept
    }
}

impl Default for Rescale {
    fn default() -> Self {
        Rescale::new(1., 0.)
    }
}

/// A known DICOM Value of Interest (VOI) LUT function descriptor.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum VoiLutFunction {
    /// LINEAR
    Linear,
    /// LINEAR_EXACT
    LinearExact,
    /// SIGMOID
    Sigmoid,
}

/// Unrecognized VOI LUT function name
#[derive(Debug, Copy, Clone, PartialEq, Snafu)]
pub struct FromVoiLutFunctionError {
    _private: (),
}

impl TryFrom<&str> for VoiLutFunction {
    type Error = FromVoiLutFunctionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "LINEAR" => Ok(Self::Linear),
            "LINEAR_EXACT" => Ok(Self::LinearExact),
            "SIGMOID" => Ok(Self::Sigmoid),
            _ => Err(FromVoiLutFunctionError { _private: () }),
        }
    }
}

/// Windows are mapped exactly onto the output range
/// unless the data set asks otherwise.
impl Default for VoiLutFunction {
    fn default() -> Self {
        VoiLutFunction::LinearExact
    }
}

/// The parameters of a single window level
/// for a VOI LUT transformation,
/// comprising the window center and the window width.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WindowLevel {
    /// The _Window Width_.
    ///
    /// Should be greater than 0
    pub width: f64,
    /// The _Window Center_.
    pub center: f64,
}

impl WindowLevel {
    /// The window spanning exactly from `min` to `max`.
    pub fn from_range(min: f64, max: f64) -> Self {
        WindowLevel {
            width: max - min,
            center: (min + max) / 2.,
        }
    }
}

/// A full description of a VOI LUT function transformation
/// based on a window level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WindowLevelTransform {
    voi_lut_function: VoiLutFunction,
    window_level: WindowLevel,
}

impl WindowLevelTransform {
    /// Create a new window level transformation.
    ///
    /// The width of the given `window_level` is automatically clamped
    /// if it is incompatible with the given LUT function:
    /// it must be `>= 0` if the function is [`LinearExact`](VoiLutFunction::LinearExact),
    /// and `>= 1` in other functions.
    #[inline]
    pub fn new(voi_lut_function: VoiLutFunction, window_level: WindowLevel) -> Self {
        WindowLevelTransform {
            voi_lut_function,
            window_level: WindowLevel {
                center: window_level.center,
                width: match voi_lut_function {
                    VoiLutFunction::LinearExact => window_level.width.max(0.),
                    VoiLutFunction::Linear | VoiLutFunction::Sigmoid => window_level.width.max(1.),
                },
            },
        }
    }

    /// Create a new window level transformation
    /// with the `LINEAR_EXACT` function.
    #[inline]
    pub fn linear_exact(window_level: WindowLevel) -> Self {
        Self::new(VoiLutFunction::LinearExact, window_level)
    }

    /// Apply the window level transformation on a rescaled value,
    /// into a number between `0` and `y_max`.
    pub fn apply(&self, value: f64, y_max: f64) -> f64 {
        let WindowLevel { width, center } = self.window_level;
        match self.voi_lut_function {
            VoiLutFunction::Linear => window_level_linear(value, width, center, y_max),
            VoiLutFunction::LinearExact => window_level_linear_exact(value, width, center, y_max),
            VoiLutFunction::Sigmoid => window_level_sigmoid(value, width, center, y_max),
        }
    }

    /// Apply the transformation on a rescaled value
    /// and round it to the nearest display level.
    #[inline]
    pub fn apply_u8(&self, value: f64) -> u8 {
        self.apply(value, 255.).round().clamp(0., 255.) as u8
    }
}

fn window_level_linear(value: f64, width: f64, center: f64, y_max: f64) -> f64 {
    debug_assert!(width >= 1.);

    // C.11.2.1.2.1
    let min = center - 0.5 - (width - 1.) / 2.;
    let max = center - 0.5 + (width - 1.) / 2.;

    if value <= min {
        0.
    } else if value > max {
        y_max
    } else {
        ((value - (center - 0.5)) / (width - 1.) + 0.5) * y_max
    }
}

fn window_level_linear_exact(value: f64, width: f64, center: f64, y_max: f64) -> f64 {
    debug_assert!(width >= 0.);

    // C.11.2.1.3.2
    let min = center - width / 2.;
    let max = center + width / 2.;

    if value <= min {
        0.
    } else if value > max {
        y_max
    } else {
        ((value - center) / width + 0.5) * y_max
    }
}

fn window_level_sigmoid(value: f64, width: f64, center: f64, y_max: f64) -> f64 {
    debug_assert!(width >= 1.);

    // C.11.2.1.3.1
    y_max / (1. + f64::exp(-4. * (value - center) / width))
}
