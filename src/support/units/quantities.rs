use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Temperature change per unit of altitude, K/m in SI.
pub type TemperatureLapseRate = Quantity<ISQ<N1, Z0, Z0, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Kinematic viscosity, m²/s in SI.
///
/// Shares its dimension with [`uom::si::f64::DiffusionCoefficient`], so the
/// units in [`uom::si::diffusion_coefficient`] apply.
pub type KinematicViscosity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
