mod statement;

pub use self::statement::*;
