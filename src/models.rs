//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The types of the core
//! API are re-exported from the model module, alongside a thin
//! [`twine_core::Model`] adapter that delegates to it.

pub mod atmosphere;
pub mod flow;
