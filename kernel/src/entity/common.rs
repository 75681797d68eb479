mod charge;
mod points;

pub use self::{charge::*, points::*};
