pub mod calculations;
pub mod models;
pub mod report;
pub mod tax_return;

pub use calculations::progressive_tax;
pub use models::*;
pub use tax_return::{ReturnConfig, TaxReturn, ValidationError};
