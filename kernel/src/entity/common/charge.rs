use std::fmt::Display;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Monetary amount owed for one or more rentals.
///
/// Rendered in its normalised form, so `2.0` prints as `2` and `6.50` as `6.5`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Fromln,
    AsRefln,
)]
pub struct Charge(Decimal);

impl Charge {
    pub const ZERO: Charge = Charge(Decimal::ZERO);

    pub fn new(amount: impl Into<Decimal>) -> Self {
        Self(amount.into())
    }
}

impl Display for Charge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Charge {
    type Output = Charge;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Charge {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Charge::ZERO, Add::add)
    }
}

#[cfg(test)]
mod test {
    use super::Charge;
    use rust_decimal_macros::dec;

    #[test]
    fn display_strips_trailing_zeros() {
        assert_eq!(Charge::new(dec!(2.0)).to_string(), "2");
        assert_eq!(Charge::new(dec!(6.50)).to_string(), "6.5");
        assert_eq!(Charge::new(dec!(7.5)).to_string(), "7.5");
        assert_eq!(Charge::ZERO.to_string(), "0");
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        let total: Charge = Vec::<Charge>::new().into_iter().sum();
        assert_eq!(total, Charge::ZERO);
    }

    #[test]
    fn sum_adds_amounts() {
        let total: Charge = [dec!(2.0), dec!(6.0), dec!(1.5)]
            .into_iter()
            .map(Charge::new)
            .sum();
        assert_eq!(total, Charge::new(dec!(9.5)));
    }
}
