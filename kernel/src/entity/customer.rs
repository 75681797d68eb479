mod name;

pub use self::name::*;

use destructure::Destructure;
use vodca::References;

use crate::entity::{Charge, FrequentRenterPoints, Rental};
use crate::render::{HtmlStatement, StatementRenderer, TextStatement};

/// A customer and the rentals they have taken out, in the order they were added.
///
/// Totals are computed from the current rentals on every call.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Customer {
    name: CustomerName,
    rentals: Vec<Rental>,
}

impl Customer {
    pub fn new(name: CustomerName) -> Self {
        Self {
            name,
            rentals: Vec::new(),
        }
    }

    pub fn add_rental(&mut self, rental: Rental) {
        self.rentals.push(rental);
    }

    pub fn total_charge(&self) -> Charge {
        self.rentals.iter().map(Rental::charge).sum()
    }

    pub fn total_frequent_renter_points(&self) -> FrequentRenterPoints {
        self.rentals
            .iter()
            .map(Rental::frequent_renter_points)
            .sum()
    }

    pub fn statement<R: StatementRenderer + ?Sized>(&self, renderer: &R) -> String {
        renderer.render(self)
    }

    pub fn statement_text(&self) -> String {
        self.statement(&TextStatement)
    }

    pub fn statement_html(&self) -> String {
        self.statement(&HtmlStatement)
    }
}
