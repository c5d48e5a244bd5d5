//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, pressure, viscosity).
//! This module provides quantities that are useful for atmospheric modeling but
//! aren't included in [`uom`].
//!
//! ## Temperature lapse rate
//!
//! A [`TemperatureLapseRate`] is formed by dividing a temperature interval by a length:
//!
//! ```
//! use uom::si::f64::{Length, TemperatureInterval};
//! use uom::si::{length::kilometer, temperature_interval::kelvin};
//! use twine_atmosphere::support::units::TemperatureLapseRate;
//!
//! let lapse: TemperatureLapseRate =
//!     TemperatureInterval::new::<kelvin>(6.5) / Length::new::<kilometer>(1.0);
//! assert!((lapse.value - 0.0065).abs() < 1e-15);
//! ```
//!
//! ## Kinematic viscosity
//!
//! A [`KinematicViscosity`] is dynamic viscosity over density, measured with
//! the [`diffusion_coefficient`](uom::si::diffusion_coefficient) units:
//!
//! ```
//! use uom::si::f64::{DynamicViscosity, MassDensity};
//! use uom::si::{
//!     diffusion_coefficient::square_meter_per_second, dynamic_viscosity::pascal_second,
//!     mass_density::kilogram_per_cubic_meter,
//! };
//! use twine_atmosphere::support::units::KinematicViscosity;
//!
//! let nu: KinematicViscosity = DynamicViscosity::new::<pascal_second>(1.8e-5)
//!     / MassDensity::new::<kilogram_per_cubic_meter>(1.2);
//! assert!((nu.get::<square_meter_per_second>() - 1.5e-5).abs() < 1e-18);
//! ```

mod quantities;

pub use quantities::{KinematicViscosity, SpecificGasConstant, TemperatureLapseRate};
