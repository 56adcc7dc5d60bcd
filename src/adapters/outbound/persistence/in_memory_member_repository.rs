use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    domain::{
        errors::MemberResult,
        models::{FamilySnapshot, FamilyStore, Member, NewMember},
        value_objects::{FamilyName, MemberId},
    },
    ports::repositories::MemberRepository,
};

/// In-memory implementation of MemberRepository.
/// Contents live for the lifetime of the process only.
#[derive(Clone)]
pub struct InMemoryMemberRepository {
    store: Arc<RwLock<FamilyStore>>,
}

impl InMemoryMemberRepository {
    pub fn new(family_name: FamilyName) -> Self {
        Self::from_store(FamilyStore::new(family_name))
    }

    /// Wrap an already populated store
    pub fn from_store(store: FamilyStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

impl Default for InMemoryMemberRepository {
    fn default() -> Self {
        Self::new(FamilyName::default())
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn family_name(&self) -> MemberResult<FamilyName> {
        let store = self.store.read().await;
        Ok(store.family_name().clone())
    }

    async fn add_member(&self, data: NewMember) -> MemberResult<Member> {
        let mut store = self.store.write().await;
        store.add_member(data)
    }

    async fn get_all_members(&self) -> MemberResult<Vec<Member>> {
        let store = self.store.read().await;
        Ok(store.get_all_members().to_vec())
    }

    async fn get_member(&self, id: MemberId) -> MemberResult<Option<Member>> {
        let store = self.store.read().await;
        Ok(store.get_member(id).cloned())
    }

    async fn delete_member(&self, id: MemberId) -> MemberResult<Option<Member>> {
        let mut store = self.store.write().await;
        Ok(store.delete_member(id))
    }

    async fn snapshot(&self) -> MemberResult<FamilySnapshot> {
        let store = self.store.read().await;
        Ok(store.snapshot())
    }
}
