use kernel::prelude::entity::{Customer, DestructCustomer, DestructRental, Rental};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementLineDto {
    pub title: String,
    pub days_rented: i32,
    pub charge: Decimal,
    pub frequent_renter_points: u32,
}

impl From<Rental> for StatementLineDto {
    fn from(value: Rental) -> Self {
        let charge = value.charge();
        let frequent_renter_points = value.frequent_renter_points();
        let DestructRental { movie, days_rented } = value.into_destruct();
        Self {
            title: movie.title().as_ref().clone(),
            days_rented: days_rented.into(),
            charge: Decimal::from(charge).normalize(),
            frequent_renter_points: frequent_renter_points.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementDto {
    pub name: String,
    pub lines: Vec<StatementLineDto>,
    pub total_charge: Decimal,
    pub total_frequent_renter_points: u32,
}

impl From<Customer> for StatementDto {
    fn from(value: Customer) -> Self {
        let total_charge = value.total_charge();
        let total_frequent_renter_points = value.total_frequent_renter_points();
        let DestructCustomer { name, rentals } = value.into_destruct();
        Self {
            name: name.into(),
            lines: rentals.into_iter().map(StatementLineDto::from).collect(),
            total_charge: Decimal::from(total_charge).normalize(),
            total_frequent_renter_points: total_frequent_renter_points.into(),
        }
    }
}
