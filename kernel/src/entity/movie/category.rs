use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::pricing::{ChildrenPrice, NewReleasePrice, PriceStrategy, RegularPrice};
use crate::KernelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceCategory {
    Regular,
    NewRelease,
    Children,
}

impl PriceCategory {
    /// Numeric code used by legacy rental records.
    pub fn price_code(&self) -> i32 {
        match self {
            PriceCategory::Regular => 0,
            PriceCategory::NewRelease => 1,
            PriceCategory::Children => 2,
        }
    }

    /// The only place a category is turned into pricing behaviour.
    pub fn strategy(&self) -> Box<dyn PriceStrategy> {
        match self {
            PriceCategory::Regular => Box::new(RegularPrice),
            PriceCategory::NewRelease => Box::new(NewReleasePrice),
            PriceCategory::Children => Box::new(ChildrenPrice),
        }
    }
}

impl TryFrom<i32> for PriceCategory {
    type Error = Report<KernelError>;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PriceCategory::Regular),
            1 => Ok(PriceCategory::NewRelease),
            2 => Ok(PriceCategory::Children),
            _ => Err(Report::new(KernelError::InvalidCategory)
                .attach_printable(format!("Unknown price code: {code}"))),
        }
    }
}

impl FromStr for PriceCategory {
    type Err = Report<KernelError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "regular" => Ok(PriceCategory::Regular),
            "new_release" => Ok(PriceCategory::NewRelease),
            "children" => Ok(PriceCategory::Children),
            _ => Err(Report::new(KernelError::InvalidCategory)
                .attach_printable(format!("Unknown price category: {s}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::PriceCategory;
    use crate::pricing::PriceStrategy;
    use crate::KernelError;

    #[test]
    fn price_codes_map_both_ways() {
        for category in [
            PriceCategory::Regular,
            PriceCategory::NewRelease,
            PriceCategory::Children,
        ] {
            let code = category.price_code();
            assert_eq!(PriceCategory::try_from(code).unwrap(), category);
        }
    }

    #[test]
    fn unknown_price_code_is_rejected() {
        for code in [-1, 3, 42] {
            let report = PriceCategory::try_from(code).unwrap_err();
            assert_eq!(*report.current_context(), KernelError::InvalidCategory);
        }
    }

    #[test]
    fn parses_category_names() {
        assert_eq!(
            "regular".parse::<PriceCategory>().unwrap(),
            PriceCategory::Regular
        );
        assert_eq!(
            "New-Release".parse::<PriceCategory>().unwrap(),
            PriceCategory::NewRelease
        );
        assert_eq!(
            " children ".parse::<PriceCategory>().unwrap(),
            PriceCategory::Children
        );
        let report = "documentary".parse::<PriceCategory>().unwrap_err();
        assert_eq!(*report.current_context(), KernelError::InvalidCategory);
    }

    #[test]
    fn strategy_reports_its_category() {
        assert_eq!(
            PriceCategory::Children.strategy().category(),
            PriceCategory::Children
        );
    }
}
