use std::fmt::Display;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

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
pub struct FrequentRenterPoints(u32);

impl FrequentRenterPoints {
    pub fn new(points: u32) -> Self {
        Self(points)
    }
}

impl Display for FrequentRenterPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for FrequentRenterPoints {
    type Output = FrequentRenterPoints;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for FrequentRenterPoints {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(FrequentRenterPoints::default(), Add::add)
    }
}
