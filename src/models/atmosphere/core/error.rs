use thiserror::Error;
use uom::si::f64::{Length, ThermodynamicTemperature};

use crate::support::constraint::ConstraintError;

/// Errors returned when an input falls outside a formula's domain.
///
/// Every variant carries the offending input so callers can report it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtmosphereError {
    /// The absolute temperature is not a finite positive number.
    #[error("invalid temperature {temperature:?}")]
    Temperature {
        temperature: ThermodynamicTemperature,
        source: ConstraintError,
    },

    /// The altitude is `NaN` or infinite.
    #[error("invalid altitude {altitude:?}")]
    Altitude { altitude: Length },

    /// The altitude lies above the point where the lapse-rate model reaches zero temperature.
    #[error("altitude {altitude:?} is above the lapse-rate ceiling {ceiling:?}")]
    AboveCeiling { altitude: Length, ceiling: Length },

    /// The Herman Wobus polynomial is not positive, so the vapour pressure is undefined.
    ///
    /// This happens far outside the approximation's intended range (roughly ±50 °C).
    #[error("vapour pressure polynomial is {value} at {temperature:?}")]
    VapourPolynomial {
        temperature: ThermodynamicTemperature,
        value: f64,
    },

    /// The air density is zero, so a quantity divided by it is undefined.
    #[error("air density is zero at altitude {altitude:?}")]
    ZeroDensity { altitude: Length },
}
