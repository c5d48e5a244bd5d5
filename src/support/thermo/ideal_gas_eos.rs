//! Ideal gas equation of state helpers.
//!
//! Implements the ideal gas equation of state, `p = ρ·R·T`, solved for
//! density. Shared by the sea-level reference density and the humid-air
//! partial densities.

use uom::si::f64::{MassDensity, Pressure, ThermodynamicTemperature};

use crate::support::units::SpecificGasConstant;

/// Computes density using the ideal gas equation of state.
///
/// When `pressure` is a partial pressure, the result is the partial density
/// of that component of a mixture.
#[must_use]
pub(crate) fn density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> MassDensity {
    pressure / (gas_constant * temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter, pressure::pascal,
        specific_heat_capacity::joule_per_kilogram_kelvin, thermodynamic_temperature::kelvin,
    };

    #[test]
    fn sea_level_air() {
        let t = ThermodynamicTemperature::new::<kelvin>(288.15);
        let p = Pressure::new::<pascal>(101_325.0);
        let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.058);

        let rho = density(t, p, r);

        assert_relative_eq!(
            rho.get::<kilogram_per_cubic_meter>(),
            1.224_98,
            max_relative = 1e-5
        );
    }

    #[test]
    fn partial_density_of_water_vapour() {
        let t = ThermodynamicTemperature::new::<kelvin>(250.0);
        let p = Pressure::new::<pascal>(47.3);
        let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(461.495);

        assert_relative_eq!(
            density(t, p, r).get::<kilogram_per_cubic_meter>(),
            47.3 / (461.495 * 250.0),
            max_relative = 1e-14
        );
    }
}
