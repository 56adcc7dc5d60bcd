use crate::domain::{
    errors::MemberResult,
    models::{FamilySnapshot, Member, NewMember},
    value_objects::{FamilyName, MemberId},
};
use async_trait::async_trait;

/// Repository holding the members of a single family
/// Absence is reported with `None`, never with an error
#[async_trait]
pub trait MemberRepository: Send + Sync + 'static {
    /// Name of the family this repository holds
    async fn family_name(&self) -> MemberResult<FamilyName>;

    /// Store a new member under a freshly assigned id
    async fn add_member(&self, data: NewMember) -> MemberResult<Member>;

    /// All members in insertion order
    async fn get_all_members(&self) -> MemberResult<Vec<Member>>;

    /// Look up a member by id
    async fn get_member(&self, id: MemberId) -> MemberResult<Option<Member>>;

    /// Remove a member, returning it if it was present
    async fn delete_member(&self, id: MemberId) -> MemberResult<Option<Member>>;

    /// Family name and members captured under one read
    async fn snapshot(&self) -> MemberResult<FamilySnapshot>;
}
