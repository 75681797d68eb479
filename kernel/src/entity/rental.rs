mod days;

pub use self::days::*;

use std::sync::Arc;

use destructure::Destructure;
use vodca::References;

use crate::entity::{Charge, FrequentRenterPoints, Movie};

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Rental {
    movie: Arc<Movie>,
    days_rented: DaysRented,
}

impl Rental {
    pub fn new(movie: Arc<Movie>, days_rented: DaysRented) -> Self {
        Self { movie, days_rented }
    }

    pub fn charge(&self) -> Charge {
        self.movie.charge(&self.days_rented)
    }

    pub fn frequent_renter_points(&self) -> FrequentRenterPoints {
        self.movie.frequent_renter_points(&self.days_rented)
    }
}
