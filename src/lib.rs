//! # Twine Atmosphere
//!
//! Standard-atmosphere and air property models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! All quantities are [`uom`] types, so temperatures, altitudes, pressures,
//! densities and viscosities cannot be mixed up at call sites.
//!
//! ## Crate layout
//!
//! - [`models`]: The atmospheric and flow models, with [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Example
//!
//! ```
//! use twine_atmosphere::models::atmosphere::AtmosphericModel;
//! use uom::si::{
//!     f64::{Length, ThermodynamicTemperature},
//!     length::meter,
//!     pressure::pascal,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let model = AtmosphericModel::standard();
//! let t = ThermodynamicTemperature::new::<kelvin>(288.15);
//! let h = Length::new::<meter>(0.0);
//!
//! let p = model.absolute_air_pressure(t, h).unwrap();
//! assert_eq!(p.get::<pascal>(), 101_325.0);
//! ```
//!
//! ## Support code lifecycle
//!
//! Modules in [`support`] are public because they're useful, but their APIs
//! are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
