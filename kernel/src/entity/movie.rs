mod category;
mod title;

pub use self::{category::*, title::*};

use crate::entity::{Charge, DaysRented, FrequentRenterPoints};
use crate::pricing::PriceStrategy;
use crate::KernelError;

/// A film available for rent.
///
/// The pricing strategy is chosen once from the category at construction and
/// never replaced; a different category means a different `Movie`.
#[derive(Debug)]
pub struct Movie {
    title: MovieTitle,
    price: Box<dyn PriceStrategy>,
}

impl Movie {
    pub fn new(title: MovieTitle, category: PriceCategory) -> Self {
        Self {
            title,
            price: category.strategy(),
        }
    }

    pub fn with_price_code(
        title: MovieTitle,
        price_code: i32,
    ) -> error_stack::Result<Self, KernelError> {
        let category = PriceCategory::try_from(price_code)?;
        Ok(Self::new(title, category))
    }

    pub fn title(&self) -> &MovieTitle {
        &self.title
    }

    pub fn category(&self) -> PriceCategory {
        self.price.category()
    }

    pub fn price_code(&self) -> i32 {
        self.category().price_code()
    }

    pub fn charge(&self, days_rented: &DaysRented) -> Charge {
        self.price.charge(days_rented)
    }

    pub fn frequent_renter_points(&self, days_rented: &DaysRented) -> FrequentRenterPoints {
        self.price.frequent_renter_points(days_rented)
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.category() == other.category()
    }
}

impl Eq for Movie {}

#[cfg(test)]
mod test {
    use super::{Movie, MovieTitle, PriceCategory};
    use crate::entity::{Charge, DaysRented, FrequentRenterPoints};
    use crate::KernelError;
    use rust_decimal_macros::dec;

    #[test]
    fn delegates_to_category_pricing() {
        let movie = Movie::new(MovieTitle::new("Spiderman"), PriceCategory::NewRelease);
        let days = DaysRented::new(2);
        assert_eq!(movie.category(), PriceCategory::NewRelease);
        assert_eq!(movie.price_code(), 1);
        assert_eq!(movie.charge(&days), Charge::new(dec!(6.0)));
        assert_eq!(
            movie.frequent_renter_points(&days),
            FrequentRenterPoints::new(2)
        );
    }

    #[test]
    fn constructs_from_price_code() {
        let movie = Movie::with_price_code(MovieTitle::new("Gladiator"), 0).unwrap();
        assert_eq!(movie.title(), &MovieTitle::new("Gladiator"));
        assert_eq!(movie.category(), PriceCategory::Regular);
    }

    #[test]
    fn undefined_price_code_yields_no_movie() {
        let result = Movie::with_price_code(MovieTitle::new("Gladiator"), 7);
        let report = result.unwrap_err();
        assert_eq!(*report.current_context(), KernelError::InvalidCategory);
    }
}
