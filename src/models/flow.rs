//! Flow similarity models.
//!
//! The core types [`KinematicFlow`] and [`DynamicFlow`] compute the Reynolds
//! number from either viscosity form. [`ReynoldsNumber`] is the
//! [`twine_core::Model`] adapter over both.
//!
//! # Example
//!
//! ```
//! use twine_atmosphere::{
//!     models::flow::{Flow, KinematicFlow, ReynoldsNumber},
//!     support::units::KinematicViscosity,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     diffusion_coefficient::square_meter_per_second,
//!     f64::{Length, Ratio, Velocity},
//!     length::meter,
//!     ratio::ratio,
//!     velocity::meter_per_second,
//! };
//!
//! let flow = KinematicFlow::new(
//!     KinematicViscosity::new::<square_meter_per_second>(1.5e-5),
//!     Ratio::new::<ratio>(0.0),
//!     Velocity::new::<meter_per_second>(15.0),
//!     Length::new::<meter>(0.3),
//! )
//! .unwrap();
//!
//! let re = ReynoldsNumber.call(&Flow::Kinematic(flow)).unwrap();
//! assert!((re.get::<ratio>() - 300_000.0).abs() < 1e-6);
//! ```

mod core;

pub use self::core::{DynamicFlow, FlowError, KinematicFlow};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::Ratio;

/// A flow in either viscosity form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    Kinematic(KinematicFlow),
    Dynamic(DynamicFlow),
}

impl Flow {
    /// Returns the Reynolds number of the flow.
    #[must_use]
    pub fn reynolds_number(&self) -> Ratio {
        match self {
            Flow::Kinematic(flow) => flow.reynolds_number(),
            Flow::Dynamic(flow) => flow.reynolds_number(),
        }
    }
}

impl From<KinematicFlow> for Flow {
    fn from(flow: KinematicFlow) -> Self {
        Flow::Kinematic(flow)
    }
}

impl From<DynamicFlow> for Flow {
    fn from(flow: DynamicFlow) -> Self {
        Flow::Dynamic(flow)
    }
}

/// [`Model`] computing the Reynolds number of a [`Flow`].
///
/// Flows are validated at construction, so this model never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReynoldsNumber;

impl Model for ReynoldsNumber {
    type Input = Flow;
    type Output = Ratio;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.reynolds_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::pascal_second,
        f64::{DynamicViscosity, Length, MassDensity, Velocity},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        ratio::ratio,
        velocity::meter_per_second,
    };

    #[test]
    fn dynamic_flow_through_model() {
        let flow = DynamicFlow::new(
            DynamicViscosity::new::<pascal_second>(1.802e-5),
            Ratio::new::<ratio>(0.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1.225),
            Velocity::new::<meter_per_second>(25.0),
            Length::new::<meter>(1.2),
        )
        .unwrap();

        let re = ReynoldsNumber.call(&flow.into()).unwrap();

        assert_eq!(re, flow.reynolds_number());
        assert_relative_eq!(re.get::<ratio>(), 2_039_400.665_926_748, max_relative = 1e-9);
    }
}
