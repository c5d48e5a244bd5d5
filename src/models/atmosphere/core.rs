//! Closed-form atmospheric property formulas.
//!
//! [`AtmosphericModel`] evaluates air pressure, water vapour pressure, air
//! density and viscosity for a given absolute temperature and altitude.
//! Every operation is a pure function of its inputs and the model's
//! [`AtmosphereParameters`].
//!
//! Inputs outside a formula's domain are reported as [`AtmosphereError`]
//! rather than propagated as `NaN` or infinity.

mod error;
mod parameters;

pub use error::AtmosphereError;
pub use parameters::{
    AtmosphereParameters, ParametersError, SutherlandParameters, WobusCoefficients,
};

use std::cmp::Ordering;

use uom::{
    ConstZero,
    si::{
        acceleration::meter_per_second_squared,
        f64::{DynamicViscosity, Length, MassDensity, Pressure, Ratio, ThermodynamicTemperature},
        length::meter,
        molar_heat_capacity::joule_per_kelvin_mole,
        ratio::ratio,
        temperature_interval,
        thermodynamic_temperature::{degree_celsius, kelvin},
    },
};

use crate::support::{
    constraint::{Constraint, ConstraintError, StrictlyPositive},
    thermo::ideal_gas_eos,
    units::KinematicViscosity,
};

/// Standard-atmosphere model built on an immutable table of physical constants.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use twine_atmosphere::models::atmosphere::AtmosphericModel;
/// use uom::si::{
///     dynamic_viscosity::pascal_second,
///     f64::ThermodynamicTemperature,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let model = AtmosphericModel::standard();
/// let mu = model
///     .dynamic_viscosity(ThermodynamicTemperature::new::<kelvin>(288.15))
///     .unwrap();
///
/// assert_relative_eq!(mu.get::<pascal_second>(), 1.802e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericModel {
    parameters: AtmosphereParameters,
}

impl AtmosphericModel {
    /// Creates a model from a custom constant table.
    ///
    /// # Errors
    ///
    /// Returns [`ParametersError`] if any constant is not strictly positive.
    pub fn new(parameters: AtmosphereParameters) -> Result<Self, ParametersError> {
        parameters.validate()?;
        Ok(Self { parameters })
    }

    /// Creates a model using [`AtmosphereParameters::standard`].
    #[must_use]
    pub fn standard() -> Self {
        Self {
            parameters: AtmosphereParameters::standard(),
        }
    }

    /// Returns the constant table used by this model.
    #[must_use]
    pub fn parameters(&self) -> &AtmosphereParameters {
        &self.parameters
    }

    /// Returns the altitude at which the lapse-rate model reaches zero temperature, `T0 / L`.
    ///
    /// Air density is zero at this altitude and undefined above it.
    #[must_use]
    pub fn ceiling(&self) -> Length {
        self.parameters.sea_level_temperature / self.parameters.lapse_rate
    }

    /// Computes saturation water vapour pressure with the Herman Wobus approximation.
    ///
    /// The result is `Eso / p(t)^8`, where `p` is a ninth-degree polynomial in
    /// the temperature `t` in degrees Celsius. The approximation is accurate
    /// between roughly −50 °C and +50 °C; this range is not enforced.
    ///
    /// With the standard coefficients `Eso` is the pascal value `6.1078`.
    /// Wobus tabulates that constant in hectopascals, so the standard result
    /// is one hundredth of the physical saturation pressure
    /// (about 1013 Pa at 100 °C).
    ///
    /// # Errors
    ///
    /// Returns [`AtmosphereError::Temperature`] if the temperature is not
    /// strictly positive, or [`AtmosphereError::VapourPolynomial`] if the
    /// polynomial is not positive at that temperature.
    pub fn water_vapour_pressure(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, AtmosphereError> {
        check_temperature(temperature)?;

        let wobus = &self.parameters.wobus;
        let p = wobus.polynomial(temperature.get::<degree_celsius>());
        if StrictlyPositive::check(&p).is_err() {
            return Err(AtmosphereError::VapourPolynomial {
                temperature,
                value: p,
            });
        }

        Ok(wobus.reference / p.powi(8))
    }

    /// Computes absolute air pressure with the barometric formula.
    ///
    /// Evaluates `P0 · exp(−g·h / (R·T))` with `R` the molar gas constant.
    ///
    /// The exponent is formed from the SI magnitudes of `g`, `h`, `R` and `T`.
    /// Because `R` is molar rather than specific to air, the exponent is not
    /// dimensionless and pressure falls far faster with altitude than in the
    /// real atmosphere (about 1688 Pa at 1 km and 15 °C). At zero altitude
    /// the result is exactly the sea-level pressure.
    ///
    /// # Errors
    ///
    /// Returns [`AtmosphereError::Temperature`] if the temperature is not
    /// strictly positive and finite, or [`AtmosphereError::Altitude`] if the
    /// altitude is not finite.
    pub fn absolute_air_pressure(
        &self,
        temperature: ThermodynamicTemperature,
        altitude: Length,
    ) -> Result<Pressure, AtmosphereError> {
        check_temperature(temperature)?;
        check_altitude(altitude)?;

        let params = &self.parameters;
        let exponent = params.gravity.get::<meter_per_second_squared>() * altitude.get::<meter>()
            / (params.molar_gas_constant.get::<joule_per_kelvin_mole>()
                * temperature.get::<kelvin>());

        Ok(params.sea_level_pressure * (-exponent).exp())
    }

    /// Returns the dry air density at sea level, `P0 / (R_s · T0)`.
    ///
    /// The reference density depends only on the sea-level constants.
    /// The `temperature` argument is accepted for call-site compatibility
    /// with [`Self::dry_air_density_at_altitude`] and does not affect the result.
    #[must_use]
    pub fn sea_level_dry_air_density(
        &self,
        _temperature: ThermodynamicTemperature,
    ) -> MassDensity {
        self.reference_density()
    }

    /// Computes dry air density with the International Standard Atmosphere lapse-rate model.
    ///
    /// Evaluates `ρ0 · (1 − h/h_c)^(g·M/(R·L) − 1)`, where `ρ0` is the
    /// sea-level density and `h_c` is the [ceiling](Self::ceiling).
    /// The result depends on altitude only; `temperature` is accepted for
    /// call-site compatibility and does not affect it.
    ///
    /// At zero altitude the result equals [`Self::sea_level_dry_air_density`],
    /// and at the ceiling it is exactly zero.
    ///
    /// # Errors
    ///
    /// Returns [`AtmosphereError::AboveCeiling`] if the altitude is above the
    /// ceiling, or [`AtmosphereError::Altitude`] if it is not finite.
    pub fn dry_air_density_at_altitude(
        &self,
        _temperature: ThermodynamicTemperature,
        altitude: Length,
    ) -> Result<MassDensity, AtmosphereError> {
        check_altitude(altitude)?;

        let params = &self.parameters;
        let ceiling = self.ceiling();

        let fraction: Ratio = altitude / ceiling;
        let base = 1.0 - fraction.get::<ratio>();
        match base.partial_cmp(&0.0) {
            Some(Ordering::Greater) => {}
            Some(Ordering::Equal) => return Ok(MassDensity::ZERO),
            Some(Ordering::Less) => {
                return Err(AtmosphereError::AboveCeiling { altitude, ceiling });
            }
            None => return Err(AtmosphereError::Altitude { altitude }),
        }

        let exponent: Ratio = params.gravity * params.molar_mass
            / (params.molar_gas_constant * params.lapse_rate);

        Ok(self.reference_density() * base.powf(exponent.get::<ratio>() - 1.0))
    }

    /// Computes the density of humid air.
    ///
    /// Sums the dry air term `P(T, h) / (R_dry · T)`, using
    /// [`Self::absolute_air_pressure`], and the water vapour term
    /// `e(T) / (R_vap · T)`, using [`Self::water_vapour_pressure`].
    ///
    /// # Errors
    ///
    /// Returns any error from the two pressure calculations.
    pub fn humid_air_density(
        &self,
        temperature: ThermodynamicTemperature,
        altitude: Length,
    ) -> Result<MassDensity, AtmosphereError> {
        let params = &self.parameters;

        let air_pressure = self.absolute_air_pressure(temperature, altitude)?;
        let vapour_pressure = self.water_vapour_pressure(temperature)?;

        Ok(
            ideal_gas_eos::density(temperature, air_pressure, params.dry_air_gas_constant)
                + ideal_gas_eos::density(
                    temperature,
                    vapour_pressure,
                    params.water_vapour_gas_constant,
                ),
        )
    }

    /// Computes the dynamic viscosity of air with Sutherland's law.
    ///
    /// Evaluates `μ0 · ((s·T0 + C) / (s·T + C)) · (T/T0)^1.5`.
    /// At the reference temperature the result is exactly `μ0`.
    ///
    /// # Errors
    ///
    /// Returns [`AtmosphereError::Temperature`] if the temperature is not
    /// strictly positive and finite.
    pub fn dynamic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, AtmosphereError> {
        check_temperature(temperature)?;

        let sutherland = &self.parameters.sutherland;
        let s = sutherland.temperature_scale;
        let c = sutherland.constant.get::<temperature_interval::kelvin>();
        let t = temperature.get::<kelvin>();
        let t0 = sutherland.reference_temperature.get::<kelvin>();

        let ratio_of_temperatures: Ratio = temperature / sutherland.reference_temperature;
        let correction = (s * t0 + c) / (s * t + c);

        Ok(sutherland.reference_viscosity
            * correction
            * ratio_of_temperatures.get::<ratio>().powf(1.5))
    }

    /// Computes kinematic viscosity as dynamic viscosity over dry air density.
    ///
    /// Uses [`Self::dynamic_viscosity`] and [`Self::dry_air_density_at_altitude`].
    ///
    /// # Errors
    ///
    /// Returns any error from the two underlying calculations, or
    /// [`AtmosphereError::ZeroDensity`] at the ceiling.
    pub fn kinematic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
        altitude: Length,
    ) -> Result<KinematicViscosity, AtmosphereError> {
        let mu = self.dynamic_viscosity(temperature)?;
        let rho = self.dry_air_density_at_altitude(temperature, altitude)?;

        if rho == MassDensity::ZERO {
            return Err(AtmosphereError::ZeroDensity { altitude });
        }

        Ok(mu / rho)
    }

    fn reference_density(&self) -> MassDensity {
        let params = &self.parameters;
        ideal_gas_eos::density(
            params.sea_level_temperature,
            params.sea_level_pressure,
            params.specific_gas_constant(),
        )
    }
}

impl Default for AtmosphericModel {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_temperature(temperature: ThermodynamicTemperature) -> Result<(), AtmosphereError> {
    let t = temperature.get::<kelvin>();
    StrictlyPositive::check(&t)
        .and_then(|()| {
            if t.is_finite() {
                Ok(())
            } else {
                Err(ConstraintError::Infinite)
            }
        })
        .map_err(|source| AtmosphereError::Temperature { temperature, source })
}

fn check_altitude(altitude: Length) -> Result<(), AtmosphereError> {
    if altitude.value.is_finite() {
        Ok(())
    } else {
        Err(AtmosphereError::Altitude { altitude })
    }
}
