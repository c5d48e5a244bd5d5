use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Absolute temperatures, pressures and every physical constant of an
/// atmosphere model carry this constraint.
///
/// # Examples
///
/// ```
/// use twine_atmosphere::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Pressure, pressure::pascal};
///
/// let p = StrictlyPositive::new(Pressure::new::<pascal>(101_325.0)).unwrap();
/// assert_eq!(p.into_inner().get::<pascal>(), 101_325.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-273.15).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(288.15).is_ok());
        assert_eq!(StrictlyPositive::check(&0.0), Err(ConstraintError::Zero));
        assert_eq!(
            StrictlyPositive::check(&-1.0),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            StrictlyPositive::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn densities() {
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(1.225);
        assert_eq!(
            StrictlyPositive::new(rho).unwrap().as_ref(),
            &MassDensity::new::<kilogram_per_cubic_meter>(1.225)
        );

        let rho = MassDensity::new::<kilogram_per_cubic_meter>(0.0);
        assert!(StrictlyPositive::new(rho).is_err());
    }
}
