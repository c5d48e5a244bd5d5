use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;

use crate::support::units::SpecificGasConstant;

use super::IdealGasFluid;

/// Canonical identifier for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DryAir;

impl IdealGasFluid for DryAir {
    fn gas_constant() -> SpecificGasConstant {
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.058)
    }
}
