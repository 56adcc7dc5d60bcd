mod family_service_impl;

pub use family_service_impl::{FamilyServiceBuilder, FamilyServiceImpl};
