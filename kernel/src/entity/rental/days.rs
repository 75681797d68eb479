use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Length of a rental in days. Not range-checked.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DaysRented(i32);

impl DaysRented {
    pub fn new(days: impl Into<i32>) -> Self {
        Self(days.into())
    }
}
