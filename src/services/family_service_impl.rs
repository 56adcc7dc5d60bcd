use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    domain::{
        errors::{MemberError, MemberResult},
        models::{FamilySnapshot, Member, NewMember},
        value_objects::{FamilyName, MemberId},
    },
    ports::{repositories::MemberRepository, services::FamilyService},
};

/// Implementation of FamilyService on top of a MemberRepository
#[derive(Clone)]
pub struct FamilyServiceImpl {
    repository: Arc<dyn MemberRepository>,
}

impl FamilyServiceImpl {
    /// Create a new FamilyServiceImpl instance
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FamilyService for FamilyServiceImpl {
    async fn add_member(&self, data: NewMember) -> MemberResult<Member> {
        let member = self.repository.add_member(data).await?;
        info!(member_id = %member.id, first_name = %member.first_name, "Member added");
        Ok(member)
    }

    async fn get_all_members(&self) -> MemberResult<Vec<Member>> {
        let members = self.repository.get_all_members().await?;
        debug!(count = members.len(), "Listed members");
        Ok(members)
    }

    async fn get_member(&self, id: MemberId) -> MemberResult<Member> {
        self.repository
            .get_member(id)
            .await?
            .ok_or(MemberError::NotFound { id })
    }

    /// Delete a member, failing with NotFound when it does not exist
    async fn delete_member(&self, id: MemberId) -> MemberResult<Member> {
        let removed = self
            .repository
            .delete_member(id)
            .await?
            .ok_or(MemberError::NotFound { id })?;

        info!(member_id = %id, "Member deleted");
        Ok(removed)
    }

    async fn family_name(&self) -> MemberResult<FamilyName> {
        self.repository.family_name().await
    }

    async fn family(&self) -> MemberResult<FamilySnapshot> {
        self.repository.snapshot().await
    }
}

/// Builder for FamilyServiceImpl
pub struct FamilyServiceBuilder {
    repository: Option<Arc<dyn MemberRepository>>,
}

impl FamilyServiceBuilder {
    pub fn new() -> Self {
        Self { repository: None }
    }

    pub fn repository(mut self, repository: Arc<dyn MemberRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn build(self) -> Result<FamilyServiceImpl, &'static str> {
        let repository = self.repository.ok_or("Repository is required")?;

        Ok(FamilyServiceImpl::new(repository))
    }
}

impl Default for FamilyServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
