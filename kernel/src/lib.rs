pub use crate::error::*;

mod entity;
mod error;
mod pricing;
mod render;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod pricing {
        pub use crate::pricing::*;
    }
    pub mod render {
        pub use crate::render::*;
    }
}
