use std::fmt::Debug;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::entity::{Charge, DaysRented, FrequentRenterPoints, PriceCategory};

/// Charge and loyalty rules for one price category.
///
/// Days rented are not validated; zero or negative durations go through the
/// arithmetic unchanged and guarding against them is up to the caller.
pub trait PriceStrategy: Debug + Sync + Send + 'static {
    fn category(&self) -> PriceCategory;

    fn charge(&self, days_rented: &DaysRented) -> Charge;

    /// One point per rental unless a category says otherwise.
    fn frequent_renter_points(&self, _days_rented: &DaysRented) -> FrequentRenterPoints {
        FrequentRenterPoints::new(1)
    }
}

/// Base price covering `included_days`, then `per_day` for each day past it.
fn tiered(base: Decimal, included_days: i32, per_day: Decimal, days_rented: i32) -> Charge {
    let mut amount = base;
    if days_rented > included_days {
        amount += Decimal::from(days_rented - included_days) * per_day;
    }
    Charge::new(amount)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegularPrice;

impl PriceStrategy for RegularPrice {
    fn category(&self) -> PriceCategory {
        PriceCategory::Regular
    }

    fn charge(&self, days_rented: &DaysRented) -> Charge {
        tiered(dec!(2.0), 2, dec!(1.5), *days_rented.as_ref())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewReleasePrice;

impl PriceStrategy for NewReleasePrice {
    fn category(&self) -> PriceCategory {
        PriceCategory::NewRelease
    }

    fn charge(&self, days_rented: &DaysRented) -> Charge {
        Charge::new(Decimal::from(*days_rented.as_ref()) * dec!(3.0))
    }

    fn frequent_renter_points(&self, days_rented: &DaysRented) -> FrequentRenterPoints {
        if *days_rented.as_ref() > 1 {
            FrequentRenterPoints::new(2)
        } else {
            FrequentRenterPoints::new(1)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChildrenPrice;

impl PriceStrategy for ChildrenPrice {
    fn category(&self) -> PriceCategory {
        PriceCategory::Children
    }

    fn charge(&self, days_rented: &DaysRented) -> Charge {
        tiered(dec!(1.5), 3, dec!(1.5), *days_rented.as_ref())
    }
}

#[cfg(test)]
mod test {
    use super::{ChildrenPrice, NewReleasePrice, PriceStrategy, RegularPrice};
    use crate::entity::{Charge, DaysRented, FrequentRenterPoints};
    use rust_decimal_macros::dec;

    fn charge(strategy: &dyn PriceStrategy, days: i32) -> Charge {
        strategy.charge(&DaysRented::new(days))
    }

    fn points(strategy: &dyn PriceStrategy, days: i32) -> FrequentRenterPoints {
        strategy.frequent_renter_points(&DaysRented::new(days))
    }

    #[test]
    fn regular_charges_flat_for_two_days() {
        for days in 0..=2 {
            assert_eq!(charge(&RegularPrice, days), Charge::new(dec!(2.0)));
        }
        assert_eq!(charge(&RegularPrice, 3), Charge::new(dec!(3.5)));
        assert_eq!(charge(&RegularPrice, 5), Charge::new(dec!(6.5)));
    }

    #[test]
    fn new_release_charges_per_day() {
        for days in 0..=10 {
            assert_eq!(
                charge(&NewReleasePrice, days),
                Charge::new(dec!(3.0) * rust_decimal::Decimal::from(days))
            );
        }
        assert_eq!(charge(&NewReleasePrice, 2), Charge::new(dec!(6.0)));
    }

    #[test]
    fn children_charges_flat_for_three_days() {
        for days in 0..=3 {
            assert_eq!(charge(&ChildrenPrice, days), Charge::new(dec!(1.5)));
        }
        assert_eq!(charge(&ChildrenPrice, 7), Charge::new(dec!(7.5)));
    }

    #[test]
    fn negative_days_flow_through() {
        assert_eq!(charge(&RegularPrice, -4), Charge::new(dec!(2.0)));
        assert_eq!(charge(&NewReleasePrice, -1), Charge::new(dec!(-3.0)));
        assert_eq!(points(&NewReleasePrice, -1), FrequentRenterPoints::new(1));
    }

    #[test]
    fn new_release_awards_bonus_after_one_day() {
        assert_eq!(points(&NewReleasePrice, 1), FrequentRenterPoints::new(1));
        assert_eq!(points(&NewReleasePrice, 2), FrequentRenterPoints::new(2));
        assert_eq!(points(&NewReleasePrice, 100), FrequentRenterPoints::new(2));
    }

    #[test]
    fn other_categories_award_one_point() {
        for days in [0, 1, 2, 5, 100] {
            assert_eq!(points(&RegularPrice, days), FrequentRenterPoints::new(1));
            assert_eq!(points(&ChildrenPrice, days), FrequentRenterPoints::new(1));
        }
    }
}
