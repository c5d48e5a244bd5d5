use thiserror::Error;

use crate::{models::atmosphere::AtmosphereError, support::constraint::ConstraintError};

/// Errors that can occur while building a flow from atmospheric conditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    /// The atmospheric model could not evaluate the viscosity.
    #[error("atmosphere evaluation failed")]
    Atmosphere(#[from] AtmosphereError),

    /// The viscosity failed validation.
    #[error("invalid viscosity")]
    Viscosity(#[from] ConstraintError),
}
