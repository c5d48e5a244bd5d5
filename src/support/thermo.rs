//! Ideal gas property support for atmospheric models.
//!
//! Air and water vapour are both treated as ideal gases, each described by a
//! specific gas constant provided through [`fluid::IdealGasFluid`].

pub mod fluid;
pub(crate) mod ideal_gas_eos;
