use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;

use crate::support::units::SpecificGasConstant;

use super::IdealGasFluid;

/// Canonical identifier for water vapour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WaterVapour;

impl IdealGasFluid for WaterVapour {
    fn gas_constant() -> SpecificGasConstant {
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(461.495)
    }
}
