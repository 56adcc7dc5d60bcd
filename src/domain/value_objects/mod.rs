mod family_name;
mod member_id;

pub use family_name::FamilyName;
pub use member_id::MemberId;
