pub mod member_handlers;
pub mod sitemap_handlers;

pub use member_handlers::*;
pub use sitemap_handlers::*;
