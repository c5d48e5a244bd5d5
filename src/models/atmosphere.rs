//! Standard-atmosphere models.
//!
//! The computational core is [`AtmosphericModel`], which exposes each
//! atmospheric property as its own operation. [`StandardAtmosphere`] is the
//! [`twine_core::Model`] adapter that evaluates all of them at once.
//!
//! # Example
//!
//! ```
//! use twine_atmosphere::models::atmosphere::{AtmosphereInput, StandardAtmosphere};
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Length, ThermodynamicTemperature},
//!     length::meter,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let atmosphere = StandardAtmosphere::default();
//! let properties = atmosphere
//!     .call(&AtmosphereInput {
//!         temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
//!         altitude: Length::new::<meter>(500.0),
//!     })
//!     .unwrap();
//!
//! assert!(properties.vapour_pressure < properties.absolute_pressure);
//! assert!(properties.kinematic_viscosity.value > 1.5e-5);
//! ```

mod core;

pub use self::core::{
    AtmosphereError, AtmosphereParameters, AtmosphericModel, ParametersError,
    SutherlandParameters, WobusCoefficients,
};

use twine_core::Model;
use uom::si::f64::{DynamicViscosity, Length, MassDensity, Pressure, ThermodynamicTemperature};

use crate::support::units::KinematicViscosity;

/// Conditions at which the atmosphere is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereInput {
    pub temperature: ThermodynamicTemperature,
    pub altitude: Length,
}

/// Every property computed by an [`AtmosphericModel`] at one set of conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereProperties {
    pub absolute_pressure: Pressure,
    pub vapour_pressure: Pressure,
    pub dry_density: MassDensity,
    pub humid_density: MassDensity,
    pub dynamic_viscosity: DynamicViscosity,
    pub kinematic_viscosity: KinematicViscosity,
}

/// [`Model`] adapter around an [`AtmosphericModel`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StandardAtmosphere {
    model: AtmosphericModel,
}

impl StandardAtmosphere {
    /// Wraps an existing atmospheric model.
    #[must_use]
    pub fn new(model: AtmosphericModel) -> Self {
        Self { model }
    }

    /// Returns the wrapped atmospheric model.
    #[must_use]
    pub fn model(&self) -> &AtmosphericModel {
        &self.model
    }
}

impl Model for StandardAtmosphere {
    type Input = AtmosphereInput;
    type Output = AtmosphereProperties;
    type Error = AtmosphereError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let AtmosphereInput {
            temperature,
            altitude,
        } = *input;
        let model = &self.model;

        Ok(AtmosphereProperties {
            absolute_pressure: model.absolute_air_pressure(temperature, altitude)?,
            vapour_pressure: model.water_vapour_pressure(temperature)?,
            dry_density: model.dry_air_density_at_altitude(temperature, altitude)?,
            humid_density: model.humid_air_density(temperature, altitude)?,
            dynamic_viscosity: model.dynamic_viscosity(temperature)?,
            kinematic_viscosity: model.kinematic_viscosity(temperature, altitude)?,
        })
    }
}
