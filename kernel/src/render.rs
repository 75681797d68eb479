use std::str::FromStr;

use error_stack::Report;

use crate::entity::{Charge, Customer, CustomerName, FrequentRenterPoints, MovieTitle};
use crate::KernelError;

/// Formats a customer's statement.
///
/// Implementations only decide the markup around each piece; the numbers all
/// come from the customer and its rentals through `render`.
pub trait StatementRenderer {
    fn header(&self, name: &CustomerName) -> String;

    fn line(&self, title: &MovieTitle, charge: &Charge) -> String;

    fn footer(&self, total: &Charge, points: &FrequentRenterPoints) -> String;

    fn render(&self, customer: &Customer) -> String {
        let mut statement = self.header(customer.name());
        for rental in customer.rentals() {
            statement.push('\n');
            statement.push_str(&self.line(rental.movie().title(), &rental.charge()));
        }
        statement.push('\n');
        statement.push_str(&self.footer(
            &customer.total_charge(),
            &customer.total_frequent_renter_points(),
        ));
        statement
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextStatement;

impl StatementRenderer for TextStatement {
    fn header(&self, name: &CustomerName) -> String {
        format!("Rental Record for {}", name.as_ref())
    }

    fn line(&self, title: &MovieTitle, charge: &Charge) -> String {
        format!("\t{}\t{}", title.as_ref(), charge)
    }

    fn footer(&self, total: &Charge, points: &FrequentRenterPoints) -> String {
        format!("Amount owed is {total}\nYou earned {points} frequent renter points")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlStatement;

impl StatementRenderer for HtmlStatement {
    fn header(&self, name: &CustomerName) -> String {
        format!("<h1>Rental Record for <em>{}</em></h1>", name.as_ref())
    }

    fn line(&self, title: &MovieTitle, charge: &Charge) -> String {
        format!("{} {}<br />", title.as_ref(), charge)
    }

    fn footer(&self, total: &Charge, points: &FrequentRenterPoints) -> String {
        format!(
            "<p>Amount owed is <em>{total}</em></p>\n\
             <p>You earned <em>{points}</em> frequent renter points</p>"
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementFormat {
    Text,
    Html,
}

impl StatementFormat {
    pub fn render(&self, customer: &Customer) -> String {
        match self {
            StatementFormat::Text => customer.statement(&TextStatement),
            StatementFormat::Html => customer.statement(&HtmlStatement),
        }
    }
}

impl FromStr for StatementFormat {
    type Err = Report<KernelError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(StatementFormat::Text),
            "html" => Ok(StatementFormat::Html),
            _ => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Unknown statement format: {s}"))),
        }
    }
}
