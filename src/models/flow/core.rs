//! Reynolds number of a flow over a body.
//!
//! A flow is described either by its kinematic viscosity ([`KinematicFlow`])
//! or by its dynamic viscosity and density ([`DynamicFlow`]). In both forms
//! the viscosity is validated to be non-zero at construction, so computing
//! the Reynolds number cannot fail.
//!
//! Both forms also carry a `humidity` ratio. It is stored and returned but
//! does not enter the Reynolds number yet; it is reserved for a humidity
//! correction and keeps the inputs stable once one is added.

mod error;

pub use error::FlowError;

use uom::si::f64::{
    DynamicViscosity, Length, MassDensity, Ratio, ThermodynamicTemperature, Velocity,
};

use crate::{
    models::atmosphere::AtmosphericModel,
    support::{
        constraint::{Constrained, ConstraintResult, NonZero},
        units::KinematicViscosity,
    },
};

/// A flow characterised by its kinematic viscosity, `Re = v·L / ν`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicFlow {
    kinematic_viscosity: KinematicViscosity,
    humidity: Ratio,
    flow_speed: Velocity,
    characteristic_length: Length,
}

impl KinematicFlow {
    /// Constructs a validated flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the kinematic viscosity is zero or `NaN`.
    pub fn new(
        kinematic_viscosity: KinematicViscosity,
        humidity: Ratio,
        flow_speed: Velocity,
        characteristic_length: Length,
    ) -> ConstraintResult<Self> {
        let kinematic_viscosity = NonZero::new(kinematic_viscosity)?;
        Ok(Self::from_constrained(
            kinematic_viscosity,
            humidity,
            flow_speed,
            characteristic_length,
        ))
    }

    /// Constructs a flow from a pre-validated viscosity.
    #[must_use]
    pub fn from_constrained(
        kinematic_viscosity: Constrained<KinematicViscosity, NonZero>,
        humidity: Ratio,
        flow_speed: Velocity,
        characteristic_length: Length,
    ) -> Self {
        Self {
            kinematic_viscosity: kinematic_viscosity.into_inner(),
            humidity,
            flow_speed,
            characteristic_length,
        }
    }

    /// Constructs a flow of air, taking the kinematic viscosity from an atmospheric model.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Atmosphere`] with any error from
    /// [`AtmosphericModel::kinematic_viscosity`], or [`FlowError::Viscosity`]
    /// if the resulting viscosity is zero or `NaN`.
    pub fn in_atmosphere(
        model: &AtmosphericModel,
        temperature: ThermodynamicTemperature,
        altitude: Length,
        humidity: Ratio,
        flow_speed: Velocity,
        characteristic_length: Length,
    ) -> Result<Self, FlowError> {
        let nu = model.kinematic_viscosity(temperature, altitude)?;
        let nu = NonZero::new(nu)?;

        Ok(Self::from_constrained(
            nu,
            humidity,
            flow_speed,
            characteristic_length,
        ))
    }

    /// Returns the Reynolds number `v·L / ν`.
    ///
    /// Zero flow speed or zero characteristic length gives exactly zero.
    #[must_use]
    pub fn reynolds_number(&self) -> Ratio {
        self.flow_speed * self.characteristic_length / self.kinematic_viscosity
    }

    #[must_use]
    pub fn kinematic_viscosity(&self) -> KinematicViscosity {
        self.kinematic_viscosity
    }

    /// Returns the humidity ratio, which does not affect the Reynolds number.
    #[must_use]
    pub fn humidity(&self) -> Ratio {
        self.humidity
    }

    #[must_use]
    pub fn flow_speed(&self) -> Velocity {
        self.flow_speed
    }

    #[must_use]
    pub fn characteristic_length(&self) -> Length {
        self.characteristic_length
    }
}

/// A flow characterised by its dynamic viscosity and density, `Re = ρ·v·L / μ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicFlow {
    dynamic_viscosity: DynamicViscosity,
    humidity: Ratio,
    fluid_density: MassDensity,
    flow_speed: Velocity,
    characteristic_length: Length,
}

impl DynamicFlow {
    /// Constructs a validated flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the dynamic viscosity is zero or `NaN`.
    pub fn new(
        dynamic_viscosity: DynamicViscosity,
        humidity: Ratio,
        fluid_density: MassDensity,
        flow_speed: Velocity,
        characteristic_length: Length,
    ) -> ConstraintResult<Self> {
        let dynamic_viscosity = NonZero::new(dynamic_viscosity)?;
        Ok(Self::from_constrained(
            dynamic_viscosity,
            humidity,
            fluid_density,
            flow_speed,
            characteristic_length,
        ))
    }

    /// Constructs a flow from a pre-validated viscosity.
    #[must_use]
    pub fn from_constrained(
        dynamic_viscosity: Constrained<DynamicViscosity, NonZero>,
        humidity: Ratio,
        fluid_density: MassDensity,
        flow_speed: Velocity,
        characteristic_length: Length,
    ) -> Self {
        Self {
            dynamic_viscosity: dynamic_viscosity.into_inner(),
            humidity,
            fluid_density,
            flow_speed,
            characteristic_length,
        }
    }

    /// Returns the Reynolds number `ρ·v·L / μ`.
    ///
    /// Zero flow speed or zero characteristic length gives exactly zero.
    #[must_use]
    pub fn reynolds_number(&self) -> Ratio {
        self.fluid_density * self.flow_speed * self.characteristic_length / self.dynamic_viscosity
    }

    #[must_use]
    pub fn dynamic_viscosity(&self) -> DynamicViscosity {
        self.dynamic_viscosity
    }

    /// Returns the humidity ratio, which does not affect the Reynolds number.
    #[must_use]
    pub fn humidity(&self) -> Ratio {
        self.humidity
    }

    #[must_use]
    pub fn fluid_density(&self) -> MassDensity {
        self.fluid_density
    }

    #[must_use]
    pub fn flow_speed(&self) -> Velocity {
        self.flow_speed
    }

    #[must_use]
    pub fn characteristic_length(&self) -> Length {
        self.characteristic_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::{
        ConstZero,
        si::{
            diffusion_coefficient::square_meter_per_second, dynamic_viscosity::pascal_second,
            length::meter, mass_density::kilogram_per_cubic_meter, ratio::ratio,
            thermodynamic_temperature::kelvin, velocity::meter_per_second,
        },
    };

    use crate::{models::atmosphere::AtmosphereError, support::constraint::ConstraintError};

    fn nu(value: f64) -> KinematicViscosity {
        KinematicViscosity::new::<square_meter_per_second>(value)
    }

    fn speed(value: f64) -> Velocity {
        Velocity::new::<meter_per_second>(value)
    }

    fn length(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn zero_speed_and_length_give_zero() -> ConstraintResult<()> {
        let flow = KinematicFlow::new(
            nu(1.467_346_938_775_510_2e-5),
            Ratio::ZERO,
            speed(0.0),
            length(0.0),
        )?;

        assert_eq!(flow.reynolds_number().get::<ratio>(), 0.0);
        Ok(())
    }

    #[test]
    fn kinematic_form() -> ConstraintResult<()> {
        let flow = KinematicFlow::new(nu(1.5e-5), Ratio::ZERO, speed(15.0), length(0.3))?;
        assert_relative_eq!(
            flow.reynolds_number().get::<ratio>(),
            300_000.0,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn humidity_does_not_change_the_result() -> ConstraintResult<()> {
        let dry = KinematicFlow::new(nu(1.5e-5), Ratio::ZERO, speed(20.0), length(0.25))?;
        let humid = KinematicFlow::new(
            nu(1.5e-5),
            Ratio::new::<ratio>(0.012),
            speed(20.0),
            length(0.25),
        )?;

        assert_eq!(humid.humidity().get::<ratio>(), 0.012);
        assert_eq!(dry.reynolds_number(), humid.reynolds_number());
        Ok(())
    }

    #[test]
    fn dynamic_form_matches_kinematic_form() -> ConstraintResult<()> {
        let mu = DynamicViscosity::new::<pascal_second>(1.802e-5);
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(1.225);

        let dynamic = DynamicFlow::new(mu, Ratio::ZERO, rho, speed(25.0), length(1.2))?;
        let kinematic = KinematicFlow::new(mu / rho, Ratio::ZERO, speed(25.0), length(1.2))?;

        assert_relative_eq!(
            dynamic.reynolds_number().get::<ratio>(),
            kinematic.reynolds_number().get::<ratio>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            dynamic.reynolds_number().get::<ratio>(),
            2_039_400.665_926_748,
            max_relative = 1e-9
        );
        Ok(())
    }

    #[test]
    fn zero_viscosity_is_rejected() {
        assert_eq!(
            KinematicFlow::new(nu(0.0), Ratio::ZERO, speed(1.0), length(1.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            DynamicFlow::new(
                DynamicViscosity::new::<pascal_second>(f64::NAN),
                Ratio::ZERO,
                MassDensity::new::<kilogram_per_cubic_meter>(1.2),
                speed(1.0),
                length(1.0),
            ),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn air_flow_at_sea_level() {
        let model = AtmosphericModel::standard();
        let flow = KinematicFlow::in_atmosphere(
            &model,
            ThermodynamicTemperature::new::<kelvin>(288.15),
            length(0.0),
            Ratio::ZERO,
            speed(15.0),
            length(0.3),
        )
        .unwrap();

        assert_relative_eq!(
            flow.reynolds_number().get::<ratio>(),
            305_919.074_245_622_85,
            max_relative = 1e-10
        );
    }

    #[test]
    fn air_flow_above_ceiling() {
        let model = AtmosphericModel::standard();
        let result = KinematicFlow::in_atmosphere(
            &model,
            ThermodynamicTemperature::new::<kelvin>(220.0),
            length(50_000.0),
            Ratio::ZERO,
            speed(15.0),
            length(0.3),
        );

        assert!(matches!(
            result,
            Err(FlowError::Atmosphere(AtmosphereError::AboveCeiling { .. }))
        ));
    }

    #[test]
    fn air_flow_matches_validated_viscosity() -> Result<(), FlowError> {
        let model = AtmosphericModel::standard();
        let t = ThermodynamicTemperature::new::<kelvin>(270.0);
        let h = length(2500.0);

        let from_model =
            KinematicFlow::in_atmosphere(&model, t, h, Ratio::ZERO, speed(30.0), length(0.5))?;
        let nu = NonZero::new(model.kinematic_viscosity(t, h)?)?;
        let from_constrained =
            KinematicFlow::from_constrained(nu, Ratio::ZERO, speed(30.0), length(0.5));

        assert_eq!(from_model, from_constrained);
        assert_eq!(from_model.kinematic_viscosity(), nu.into_inner());
        Ok(())
    }

    #[test]
    fn air_flow_at_ceiling_reports_zero_density() {
        let model = AtmosphericModel::standard();
        let ceiling = model.ceiling();
        let result = KinematicFlow::in_atmosphere(
            &model,
            ThermodynamicTemperature::new::<kelvin>(288.15),
            ceiling,
            Ratio::ZERO,
            speed(15.0),
            length(0.3),
        );

        assert_eq!(
            result,
            Err(FlowError::Atmosphere(AtmosphereError::ZeroDensity {
                altitude: ceiling
            }))
        );
    }

    #[test]
    fn dynamic_flow_from_constrained_viscosity() -> ConstraintResult<()> {
        let mu = DynamicViscosity::new::<pascal_second>(1.802e-5);
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(1.225);
        let humidity = Ratio::new::<ratio>(0.008);

        let validated = DynamicFlow::new(mu, humidity, rho, speed(25.0), length(1.2))?;
        let constrained = DynamicFlow::from_constrained(
            NonZero::new(mu)?,
            humidity,
            rho,
            speed(25.0),
            length(1.2),
        );

        assert_eq!(validated, constrained);
        assert_eq!(constrained.dynamic_viscosity(), mu);
        assert_eq!(constrained.fluid_density(), rho);
        assert_eq!(constrained.humidity(), humidity);
        Ok(())
    }
}
