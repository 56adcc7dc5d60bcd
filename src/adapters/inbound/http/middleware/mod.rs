#[allow(clippy::module_inception)]
mod middleware;

pub use middleware::{handle_panic, not_found};
