pub mod aggregate;
pub mod list;

pub use aggregate::*;
pub use list::*;
