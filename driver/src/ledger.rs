use std::path::Path;

use application::transfer::{CategoryDto, CreateCustomerDto, CreateRentalDto};
use serde::Deserialize;

use crate::error::DriverError;

#[derive(Debug, Deserialize)]
struct LedgerDocument {
    customers: Vec<CustomerRecord>,
}

#[derive(Debug, Deserialize)]
struct CustomerRecord {
    name: String,
    #[serde(default)]
    rentals: Vec<RentalRecord>,
}

/// A rental names its category either by `price_code` or by `category`, never both.
#[derive(Debug, Deserialize)]
struct RentalRecord {
    title: String,
    price_code: Option<i32>,
    category: Option<String>,
    days_rented: i32,
}

impl TryFrom<RentalRecord> for CreateRentalDto {
    type Error = DriverError;

    fn try_from(value: RentalRecord) -> Result<Self, Self::Error> {
        let category = match (value.price_code, value.category) {
            (Some(code), None) => CategoryDto::Code(code),
            (None, Some(name)) => CategoryDto::Name(name),
            (Some(_), Some(_)) => {
                return Err(DriverError::InvalidRecord {
                    title: value.title,
                    reason: "both price_code and category given",
                })
            }
            (None, None) => {
                return Err(DriverError::InvalidRecord {
                    title: value.title,
                    reason: "missing price_code or category",
                })
            }
        };
        Ok(Self {
            title: value.title,
            category,
            days_rented: value.days_rented,
        })
    }
}

impl TryFrom<CustomerRecord> for CreateCustomerDto {
    type Error = DriverError;

    fn try_from(value: CustomerRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            rentals: value
                .rentals
                .into_iter()
                .map(CreateRentalDto::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

/// Parses a rental ledger. Category values are checked later, when an
/// account is opened from the returned records.
pub fn parse(json: &str) -> Result<Vec<CreateCustomerDto>, DriverError> {
    let document: LedgerDocument = serde_json::from_str(json)?;
    document
        .customers
        .into_iter()
        .map(CreateCustomerDto::try_from)
        .collect()
}

#[tracing::instrument]
pub fn load(path: &Path) -> Result<Vec<CreateCustomerDto>, DriverError> {
    let json = std::fs::read_to_string(path)?;
    let customers = parse(&json)?;
    tracing::debug!(customers = customers.len(), "Loaded rental ledger");
    Ok(customers)
}

#[cfg(test)]
mod test {
    use super::parse;
    use crate::error::DriverError;
    use application::transfer::CategoryDto;

    #[test]
    fn parses_codes_and_names() {
        let customers = parse(
            r#"{
                "customers": [
                    {
                        "name": "Adam Culp",
                        "rentals": [
                            { "title": "Gladiator", "price_code": 0, "days_rented": 1 },
                            { "title": "Spiderman", "category": "new_release", "days_rented": 2 }
                        ]
                    },
                    { "name": "Nobody" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(customers.len(), 2);
        let adam = &customers[0];
        assert_eq!(adam.name, "Adam Culp");
        assert_eq!(adam.rentals[0].title, "Gladiator");
        assert_eq!(adam.rentals[0].category, CategoryDto::Code(0));
        assert_eq!(
            adam.rentals[1].category,
            CategoryDto::Name("new_release".into())
        );
        assert_eq!(adam.rentals[1].days_rented, 2);
        assert!(customers[1].rentals.is_empty());
    }

    #[test]
    fn keeps_unknown_codes_for_the_kernel_to_reject() {
        let customers = parse(
            r#"{"customers": [{"name": "A", "rentals": [{"title": "T", "price_code": 5, "days_rented": 1}]}]}"#,
        )
        .unwrap();
        assert_eq!(customers[0].rentals[0].category, CategoryDto::Code(5));
    }

    #[test]
    fn rejects_rental_without_category() {
        let error = parse(
            r#"{"customers": [{"name": "A", "rentals": [{"title": "T", "days_rented": 1}]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(error, DriverError::InvalidRecord { title, .. } if title == "T"));
    }

    #[test]
    fn rejects_rental_with_both_code_and_name() {
        let error = parse(
            r#"{"customers": [{"name": "A", "rentals": [
                {"title": "Gladiator", "price_code": 0, "category": "children", "days_rented": 1}
            ]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            error,
            DriverError::InvalidRecord { title, .. } if title == "Gladiator"
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let error = parse(r#"{"customers": [{"rentals": []}]}"#).unwrap_err();
        assert!(matches!(error, DriverError::Serde(_)));
    }
}
