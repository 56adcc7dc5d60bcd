use serde::Serialize;

use crate::domain::{
    errors::{MemberError, MemberResult},
    models::member::{Member, NewMember},
    value_objects::{FamilyName, MemberId},
};

/// Family name together with its members in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilySnapshot {
    pub family_name: String,
    pub members: Vec<Member>,
}

/// In-memory holder of every member of one family.
///
/// Identifiers come from a monotonic counter: the first member gets id 1 and
/// an id is never handed out twice, even after the member holding it (or the
/// member with the highest id) has been deleted.
#[derive(Debug, Clone)]
pub struct FamilyStore {
    family_name: FamilyName,
    members: Vec<Member>,
    // None once u64::MAX has been handed out
    next_id: Option<MemberId>,
}

impl FamilyStore {
    pub fn new(family_name: FamilyName) -> Self {
        Self {
            family_name,
            members: Vec::new(),
            next_id: Some(MemberId::FIRST),
        }
    }

    pub fn family_name(&self) -> &FamilyName {
        &self.family_name
    }

    /// Assign the next id to `data`, append it and return the stored record.
    /// Fails only when the identifier space is exhausted.
    pub fn add_member(&mut self, data: NewMember) -> MemberResult<Member> {
        let id = self.next_id.ok_or_else(|| MemberError::Internal {
            message: "member ids exhausted".to_string(),
        })?;
        self.next_id = id.next();

        let member = data.into_member(id);
        self.members.push(member.clone());
        Ok(member)
    }

    pub fn get_all_members(&self) -> &[Member] {
        &self.members
    }

    /// Returns `None` when no member carries `id`
    pub fn get_member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Remove the member carrying `id`. Absent ids leave the store untouched.
    pub fn delete_member(&mut self, id: MemberId) -> Option<Member> {
        let index = self.members.iter().position(|m| m.id == id)?;
        Some(self.members.remove(index))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn snapshot(&self) -> FamilySnapshot {
        FamilySnapshot {
            family_name: self.family_name.as_str().to_string(),
            members: self.members.clone(),
        }
    }
}

impl Default for FamilyStore {
    fn default() -> Self {
        Self::new(FamilyName::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn bob() -> NewMember {
        NewMember::new("Bob", 5, vec![1, 13])
    }

    #[test]
    fn test_empty_store() {
        let store = FamilyStore::default();
        assert!(store.is_empty());
        assert!(store.get_all_members().is_empty());
        assert_eq!(store.family_name().as_str(), "Jackson");
    }

    #[test]
    fn test_member_lifecycle_scenario() {
        let mut store = FamilyStore::default();
        assert!(store.get_all_members().is_empty());

        let added = store.add_member(bob()).unwrap();
        assert_eq!(added.id, MemberId::new(1));

        let fetched = store.get_member(MemberId::new(1)).unwrap();
        assert_eq!(fetched, &added);
        assert_eq!(fetched.data(), bob());

        assert!(store.delete_member(MemberId::new(1)).is_some());
        assert!(store.get_member(MemberId::new(1)).is_none());
        assert!(store.get_all_members().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = FamilyStore::default();
        let ids: HashSet<MemberId> = (0..50)
            .map(|i| {
                store
                    .add_member(NewMember::new(format!("m{}", i), i, vec![]))
                    .unwrap()
                    .id
            })
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_ids_not_reused_after_deleting_highest() {
        let mut store = FamilyStore::default();
        store.add_member(bob()).unwrap();
        let second = store.add_member(bob()).unwrap();
        store.delete_member(second.id);

        let third = store.add_member(bob()).unwrap();
        assert_eq!(third.id, MemberId::new(3));
    }

    #[test]
    fn test_delete_missing_member_is_noop() {
        let mut store = FamilyStore::default();
        store.add_member(bob()).unwrap();
        store
            .add_member(NewMember::new("Jane", 35, vec![10, 14, 3]))
            .unwrap();
        let before = store.snapshot();

        assert!(store.delete_member(MemberId::new(99)).is_none());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_len_tracks_adds_and_deletes() {
        let mut store = FamilyStore::default();
        for age in 0..5 {
            store
                .add_member(NewMember::new("kid", age, vec![age as i64]))
                .unwrap();
        }
        store.delete_member(MemberId::new(2));
        store.delete_member(MemberId::new(4));
        store.delete_member(MemberId::new(4));

        assert_eq!(store.len(), 3);
        let ids: Vec<u64> = store.get_all_members().iter().map(|m| m.id.value()).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_exhausted_ids_are_reported() {
        let mut store = FamilyStore::default();
        store.next_id = Some(MemberId::new(u64::MAX));

        let last = store.add_member(bob()).unwrap();
        assert_eq!(last.id, MemberId::new(u64::MAX));

        let err = store.add_member(bob()).unwrap_err();
        assert!(matches!(err, MemberError::Internal { .. }));
        assert_eq!(store.len(), 1);
    }
}
