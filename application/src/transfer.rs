mod customer;
mod statement;

pub use self::{customer::*, statement::*};
