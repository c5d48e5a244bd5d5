use thiserror::Error;
use uom::si::{
    acceleration::meter_per_second_squared,
    dynamic_viscosity::pascal_second,
    f64::{
        Acceleration, DynamicViscosity, Length, MolarHeatCapacity, MolarMass, Pressure,
        TemperatureInterval, ThermodynamicTemperature,
    },
    length::meter,
    molar_heat_capacity::joule_per_kelvin_mole,
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::fluid::{DryAir, IdealGasFluid, WaterVapour},
    units::{SpecificGasConstant, TemperatureLapseRate},
};

/// A physical constant that failed validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParametersError {
    #[error("invalid gravitational acceleration: {g:?}")]
    Gravity { g: Acceleration },
    #[error("invalid molar gas constant: {r:?}")]
    MolarGasConstant { r: MolarHeatCapacity },
    #[error("invalid dry air molar mass: {m:?}")]
    MolarMass { m: MolarMass },
    #[error("invalid sea-level temperature: {t:?}")]
    SeaLevelTemperature { t: ThermodynamicTemperature },
    #[error("invalid sea-level pressure: {p:?}")]
    SeaLevelPressure { p: Pressure },
    #[error("invalid lapse rate: {lapse_rate:?}")]
    LapseRate { lapse_rate: TemperatureLapseRate },
    #[error("invalid dry air gas constant: {r:?}")]
    DryAirGasConstant { r: SpecificGasConstant },
    #[error("invalid water vapour gas constant: {r:?}")]
    WaterVapourGasConstant { r: SpecificGasConstant },
    #[error("invalid Sutherland reference viscosity: {mu:?}")]
    ReferenceViscosity { mu: DynamicViscosity },
    #[error("invalid Sutherland reference temperature: {t:?}")]
    ReferenceTemperature { t: ThermodynamicTemperature },
    #[error("invalid Sutherland constant: {c:?}")]
    SutherlandConstant { c: TemperatureInterval },
    #[error("invalid Sutherland temperature scale: {scale}")]
    TemperatureScale { scale: f64 },
    #[error("invalid Wobus reference pressure: {p:?}")]
    WobusReferencePressure { p: Pressure },
}

/// Parameters of Sutherland's law for the dynamic viscosity of air.
///
/// The law is evaluated as `μ0 · ((s·T0 + C) / (s·T + C)) · (T/T0)^1.5`,
/// where `s` is the temperature scale applied to both temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SutherlandParameters {
    pub reference_viscosity: DynamicViscosity,
    pub reference_temperature: ThermodynamicTemperature,
    pub constant: TemperatureInterval,
    pub temperature_scale: f64,
}

impl SutherlandParameters {
    /// Returns the standard parameters: `μ0 = 1.802e-5 Pa·s` at 288.15 K, `C = 119.8 K`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            reference_viscosity: DynamicViscosity::new::<pascal_second>(1.802e-5),
            reference_temperature: ThermodynamicTemperature::new::<kelvin>(288.15),
            constant: TemperatureInterval::new::<temperature_interval::kelvin>(119.8),
            temperature_scale: 0.555,
        }
    }
}

/// Coefficients of the Herman Wobus saturation vapour pressure approximation.
///
/// The vapour pressure is `reference / p(t)^8`, where `p` is a ninth-degree
/// polynomial in the temperature `t` in degrees Celsius with coefficients
/// ordered from the constant term upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WobusCoefficients {
    pub reference: Pressure,
    pub coefficients: [f64; 10],
}

impl WobusCoefficients {
    /// Returns the published coefficients with `Eso = 6.1078 Pa`.
    ///
    /// Wobus gives `Eso` in hectopascals. It is stored here as the bare
    /// pascal value, so vapour pressures come out a factor of 100 below the
    /// physical saturation pressure.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            reference: Pressure::new::<pascal>(6.1078),
            coefficients: [
                0.999_996_83,
                -0.908_269_51e-2,
                0.787_361_69e-4,
                -0.611_179_58e-6,
                0.438_841_87e-8,
                -0.298_838_85e-10,
                0.218_744_25e-12,
                -0.178_923_21e-14,
                0.111_120_18e-16,
                -0.309_945_71e-19,
            ],
        }
    }

    /// Evaluates the polynomial at `celsius` in Horner form.
    #[must_use]
    pub fn polynomial(&self, celsius: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * celsius + c)
    }
}

/// The constant table of an [`AtmosphericModel`](super::AtmosphericModel).
///
/// Values are checked once by [`AtmosphericModel::new`](super::AtmosphericModel::new)
/// and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereParameters {
    pub gravity: Acceleration,
    pub molar_gas_constant: MolarHeatCapacity,
    pub molar_mass: MolarMass,
    pub sea_level_temperature: ThermodynamicTemperature,
    pub sea_level_pressure: Pressure,
    pub lapse_rate: TemperatureLapseRate,
    pub dry_air_gas_constant: SpecificGasConstant,
    pub water_vapour_gas_constant: SpecificGasConstant,
    pub sutherland: SutherlandParameters,
    pub wobus: WobusCoefficients,
}

impl AtmosphereParameters {
    /// Returns the standard sea-level atmosphere.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            molar_gas_constant: MolarHeatCapacity::new::<joule_per_kelvin_mole>(8.3143),
            molar_mass: MolarMass::new::<kilogram_per_mole>(0.028_965_2),
            sea_level_temperature: ThermodynamicTemperature::new::<kelvin>(288.15),
            sea_level_pressure: Pressure::new::<pascal>(101_325.0),
            lapse_rate: TemperatureInterval::new::<temperature_interval::kelvin>(0.0065)
                / Length::new::<meter>(1.0),
            dry_air_gas_constant: DryAir::gas_constant(),
            water_vapour_gas_constant: WaterVapour::gas_constant(),
            sutherland: SutherlandParameters::standard(),
            wobus: WobusCoefficients::standard(),
        }
    }

    /// Specific gas constant of dry air derived from the molar constants, `R / M`.
    #[must_use]
    pub fn specific_gas_constant(&self) -> SpecificGasConstant {
        self.molar_gas_constant / self.molar_mass
    }

    /// Checks that every constant is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns the first invalid constant found.
    pub(super) fn validate(&self) -> Result<(), ParametersError> {
        let positive = |value: f64| StrictlyPositive::check(&value).is_ok();

        if !positive(self.gravity.get::<meter_per_second_squared>()) {
            return Err(ParametersError::Gravity { g: self.gravity });
        }
        if !positive(self.molar_gas_constant.get::<joule_per_kelvin_mole>()) {
            return Err(ParametersError::MolarGasConstant {
                r: self.molar_gas_constant,
            });
        }
        if !positive(self.molar_mass.get::<kilogram_per_mole>()) {
            return Err(ParametersError::MolarMass { m: self.molar_mass });
        }
        if !positive(self.sea_level_temperature.get::<kelvin>()) {
            return Err(ParametersError::SeaLevelTemperature {
                t: self.sea_level_temperature,
            });
        }
        if !positive(self.sea_level_pressure.get::<pascal>()) {
            return Err(ParametersError::SeaLevelPressure {
                p: self.sea_level_pressure,
            });
        }
        if !positive(self.lapse_rate.value) {
            return Err(ParametersError::LapseRate {
                lapse_rate: self.lapse_rate,
            });
        }
        if !positive(self.dry_air_gas_constant.get::<joule_per_kilogram_kelvin>()) {
            return Err(ParametersError::DryAirGasConstant {
                r: self.dry_air_gas_constant,
            });
        }
        if !positive(
            self.water_vapour_gas_constant
                .get::<joule_per_kilogram_kelvin>(),
        ) {
            return Err(ParametersError::WaterVapourGasConstant {
                r: self.water_vapour_gas_constant,
            });
        }

        let sutherland = &self.sutherland;
        if !positive(sutherland.reference_viscosity.get::<pascal_second>()) {
            return Err(ParametersError::ReferenceViscosity {
                mu: sutherland.reference_viscosity,
            });
        }
        if !positive(sutherland.reference_temperature.get::<kelvin>()) {
            return Err(ParametersError::ReferenceTemperature {
                t: sutherland.reference_temperature,
            });
        }
        if !positive(sutherland.constant.get::<temperature_interval::kelvin>()) {
            return Err(ParametersError::SutherlandConstant {
                c: sutherland.constant,
            });
        }
        if !positive(sutherland.temperature_scale) {
            return Err(ParametersError::TemperatureScale {
                scale: sutherland.temperature_scale,
            });
        }

        if !positive(self.wobus.reference.get::<pascal>()) {
            return Err(ParametersError::WobusReferencePressure {
                p: self.wobus.reference,
            });
        }

        Ok(())
    }
}

impl Default for AtmosphereParameters {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn standard_parameters_are_valid() {
        assert_eq!(AtmosphereParameters::standard().validate(), Ok(()));
    }

    #[test]
    fn specific_gas_constant_of_dry_air() {
        let r = AtmosphereParameters::standard().specific_gas_constant();
        assert_relative_eq!(
            r.get::<joule_per_kilogram_kelvin>(),
            287.044_453_344,
            max_relative = 1e-10
        );
    }

    #[test]
    fn lapse_rate_in_kelvin_per_meter() {
        let lapse = AtmosphereParameters::standard().lapse_rate;
        assert_relative_eq!(lapse.value, 0.0065);
    }

    #[test]
    fn rejects_non_positive_constants() {
        let mut params = AtmosphereParameters::standard();
        params.gravity = Acceleration::new::<meter_per_second_squared>(0.0);
        assert!(matches!(
            params.validate(),
            Err(ParametersError::Gravity { .. })
        ));

        let mut params = AtmosphereParameters::standard();
        params.sea_level_pressure = Pressure::new::<pascal>(-1.0);
        assert!(matches!(
            params.validate(),
            Err(ParametersError::SeaLevelPressure { .. })
        ));

        let mut params = AtmosphereParameters::standard();
        params.sutherland.temperature_scale = f64::NAN;
        assert!(matches!(
            params.validate(),
            Err(ParametersError::TemperatureScale { .. })
        ));
    }

    #[test]
    fn wobus_polynomial_is_near_one_at_freezing() {
        let wobus = WobusCoefficients::standard();
        assert_eq!(wobus.reference.get::<pascal>(), 6.1078);
        assert_relative_eq!(wobus.polynomial(0.0), 0.999_996_83);
        assert!(wobus.polynomial(200.0) < 0.0);
    }
}
