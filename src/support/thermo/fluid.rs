//! Canonical fluid identifiers.
//!
//! A fluid type names a substance. Atmospheric models read the constants they
//! need from the fluid through trait implementations such as [`IdealGasFluid`].

mod dry_air;
mod water_vapour;

pub use dry_air::DryAir;
pub use water_vapour::WaterVapour;

use crate::support::units::SpecificGasConstant;

/// Fluid constants required to treat a substance as an ideal gas.
pub trait IdealGasFluid {
    /// Returns the specific gas constant `R / M` of the fluid.
    fn gas_constant() -> SpecificGasConstant;
}
