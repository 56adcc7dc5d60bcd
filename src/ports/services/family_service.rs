use crate::domain::{
    errors::MemberResult,
    models::{FamilySnapshot, Member, NewMember},
    value_objects::{FamilyName, MemberId},
};
use async_trait::async_trait;

/// Port for family member operations
/// Absent members surface as `MemberError::NotFound`
#[async_trait]
pub trait FamilyService: Send + Sync + 'static {
    /// Add a member to the family
    async fn add_member(&self, data: NewMember) -> MemberResult<Member>;

    /// List every member
    async fn get_all_members(&self) -> MemberResult<Vec<Member>>;

    /// Get one member
    async fn get_member(&self, id: MemberId) -> MemberResult<Member>;

    /// Delete an existing member
    async fn delete_member(&self, id: MemberId) -> MemberResult<Member>;

    /// Name of the family held by the store
    async fn family_name(&self) -> MemberResult<FamilyName>;

    /// Family name with its members
    async fn family(&self) -> MemberResult<FamilySnapshot>;
}
