mod member_errors;
mod validation_errors;

pub use member_errors::*;
pub use validation_errors::*;
