use serde::{Deserialize, Serialize};

use shoplite_core::{DomainError, DomainResult, Entity, Lifecycle, MemberId};

use crate::address::Address;

/// Entity: a registered member.
///
/// The address is an embedded value object. A member does not store its
/// orders: the order side owns that association, and a member's orders are a
/// derived view (see `shoplite-sales`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    lifecycle: Lifecycle<MemberId>,
    username: String,
    address: Address,
}

impl Member {
    /// Create a transient member. It holds no identity until first saved.
    pub fn new(username: impl Into<String>, address: Address) -> DomainResult<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(DomainError::validation("username cannot be empty"));
        }
        Ok(Self {
            lifecycle: Lifecycle::Transient,
            username,
            address,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Replace the embedded address (value-object swap, not mutation).
    pub fn relocate(&mut self, address: Address) {
        self.address = address;
    }
}

impl Entity for Member {
    type Id = MemberId;

    fn lifecycle(&self) -> Lifecycle<MemberId> {
        self.lifecycle
    }

    fn mark_persistent(&mut self, id: MemberId) {
        if self.lifecycle.is_transient() {
            self.lifecycle = Lifecycle::Persistent(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplite_core::EntityId;

    fn test_address() -> Address {
        Address::new("Seoul", "Teheran-ro 1", "06234")
    }

    #[test]
    fn new_member_is_transient() {
        let member = Member::new("alice", test_address()).unwrap();
        assert!(member.lifecycle().is_transient());
        assert_eq!(member.id(), None);
    }

    #[test]
    fn rejects_blank_username() {
        assert!(matches!(
            Member::new("  ", test_address()),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn identity_is_assigned_exactly_once() {
        let mut member = Member::new("alice", test_address()).unwrap();
        let id = MemberId::generate();
        member.mark_persistent(id);
        member.mark_persistent(MemberId::generate());
        assert_eq!(member.id(), Some(id));
    }

    #[test]
    fn relocation_swaps_the_embedded_value() {
        let mut member = Member::new("alice", test_address()).unwrap();
        let new_home = Address::new("Busan", "Haeundae-ro 2", "48094");
        member.relocate(new_home.clone());
        assert_eq!(member.address(), &new_home);
    }
}
