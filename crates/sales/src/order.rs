use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shoplite_core::{Entity, Lifecycle, MemberId, OrderId};

/// Entity: an order placed by a member.
///
/// Owning side of the member/order association: the member foreign key stored
/// here is the authoritative reference. Members hold no back-reference; a
/// member's orders are computed with [`orders_of`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    lifecycle: Lifecycle<OrderId>,
    member_id: MemberId,
    placed_at: DateTime<Utc>,
}

impl Order {
    /// Create a transient order for a member.
    pub fn place(member_id: MemberId, placed_at: DateTime<Utc>) -> Self {
        Self {
            lifecycle: Lifecycle::Transient,
            member_id,
            placed_at,
        }
    }

    pub fn member_id(&self) -> MemberId {
        self.member_id
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn lifecycle(&self) -> Lifecycle<OrderId> {
        self.lifecycle
    }

    fn mark_persistent(&mut self, id: OrderId) {
        if self.lifecycle.is_transient() {
            self.lifecycle = Lifecycle::Persistent(id);
        }
    }
}

/// Derived, read-only view of a member's orders, ordered by placement time.
///
/// Computed by query over the owning side; the member stores no back-reference.
pub fn orders_of(orders: &[Order], member: MemberId) -> Vec<&Order> {
    let mut view: Vec<&Order> = orders.iter().filter(|o| o.member_id() == member).collect();
    view.sort_by_key(|o| o.placed_at());
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shoplite_core::EntityId;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn placed_order_is_transient() {
        let order = Order::place(MemberId::generate(), at(9));
        assert!(order.lifecycle().is_transient());
        assert_eq!(order.id(), None);
    }

    #[test]
    fn member_view_is_derived_and_ordered_by_placement() {
        let alice = MemberId::generate();
        let bob = MemberId::generate();

        let orders = vec![
            Order::place(alice, at(12)),
            Order::place(bob, at(9)),
            Order::place(alice, at(8)),
            Order::place(alice, at(10)),
        ];

        let view = orders_of(&orders, alice);
        assert_eq!(view.len(), 3);
        assert_eq!(view[0].placed_at(), at(8));
        assert_eq!(view[1].placed_at(), at(10));
        assert_eq!(view[2].placed_at(), at(12));

        assert_eq!(orders_of(&orders, bob).len(), 1);
    }

    #[test]
    fn member_with_no_orders_has_empty_view() {
        let orders = vec![Order::place(MemberId::generate(), at(9))];
        assert!(orders_of(&orders, MemberId::generate()).is_empty());
    }
}
