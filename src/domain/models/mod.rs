pub mod family;
pub mod member;

pub use family::{FamilySnapshot, FamilyStore};
pub use member::{Member, NewMember};
