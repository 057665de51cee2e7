//! Stock level: the entity-local invariant engine for item quantities.
//!
//! Pure in-memory logic, no IO. Guards a single invariant: the available
//! quantity never goes negative after any operation. Failed decrements are
//! all-or-nothing. No concurrency control lives here; callers needing
//! atomicity across concurrent decrements serialize access externally or use
//! the store-native decrement in `shoplite-store`.

use serde::{Deserialize, Serialize};

use shoplite_core::{DomainError, DomainResult};

/// Non-negative stock quantity.
///
/// Quantities are unsigned, so the "negative input quantity" contract
/// violation of the caller is unrepresentable rather than checked at runtime.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockLevel(u32);

impl StockLevel {
    pub fn new(quantity: u32) -> Self {
        Self(quantity)
    }

    pub fn quantity(&self) -> u32 {
        self.0
    }

    /// Add stock. Unbounded growth is permitted; there is no failure path.
    pub fn increase(&mut self, quantity: u32) {
        self.0 = self.0.saturating_add(quantity);
    }

    /// Remove stock, all-or-nothing.
    ///
    /// If the remaining quantity would be negative the level is left unchanged
    /// and `InsufficientStock` is returned. Decreasing by the exact level is
    /// legal and yields zero; decreasing by zero is a successful no-op.
    pub fn decrease(&mut self, quantity: u32) -> DomainResult<()> {
        let remaining = self
            .0
            .checked_sub(quantity)
            .ok_or_else(|| DomainError::insufficient_stock(quantity, self.0))?;
        self.0 = remaining;
        Ok(())
    }
}

impl From<u32> for StockLevel {
    fn from(quantity: u32) -> Self {
        Self(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increase_adds_to_the_level() {
        let mut stock = StockLevel::new(3);
        stock.increase(4);
        assert_eq!(stock.quantity(), 7);
    }

    #[test]
    fn decrease_within_level_succeeds() {
        let mut stock = StockLevel::new(10);
        assert!(stock.decrease(4).is_ok());
        assert_eq!(stock.quantity(), 6);
    }

    #[test]
    fn decrease_by_exact_level_yields_zero() {
        let mut stock = StockLevel::new(5);
        assert!(stock.decrease(5).is_ok());
        assert_eq!(stock.quantity(), 0);
    }

    #[test]
    fn decrease_by_zero_is_a_successful_noop() {
        let mut stock = StockLevel::new(5);
        assert!(stock.decrease(0).is_ok());
        assert_eq!(stock.quantity(), 5);

        let mut empty = StockLevel::new(0);
        assert!(empty.decrease(0).is_ok());
        assert_eq!(empty.quantity(), 0);
    }

    #[test]
    fn over_decrease_fails_and_leaves_level_unchanged() {
        let mut stock = StockLevel::new(6);
        let err = stock.decrease(10).unwrap_err();
        match err {
            DomainError::InsufficientStock {
                requested,
                available,
            } => {
                assert_eq!(requested, 10);
                assert_eq!(available, 6);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }
        assert_eq!(stock.quantity(), 6);
    }

    #[test]
    fn decrease_then_fail_then_increase_scenario() {
        let mut stock = StockLevel::new(10);

        assert!(stock.decrease(4).is_ok());
        assert_eq!(stock.quantity(), 6);

        assert!(stock.decrease(10).is_err());
        assert_eq!(stock.quantity(), 6);

        stock.increase(3);
        assert_eq!(stock.quantity(), 9);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: decrease(q) then increase(q) restores the original level.
            #[test]
            fn decrease_then_increase_restores_level(
                initial in 0u32..1_000_000,
                q in 0u32..1_000_000,
            ) {
                prop_assume!(q <= initial);

                let mut stock = StockLevel::new(initial);
                prop_assert!(stock.decrease(q).is_ok());
                stock.increase(q);
                prop_assert_eq!(stock.quantity(), initial);
            }

            /// Property: an over-decrease always fails and never mutates the level.
            #[test]
            fn over_decrease_never_mutates(
                initial in 0u32..1_000_000,
                extra in 1u32..1_000_000,
            ) {
                let mut stock = StockLevel::new(initial);
                let q = initial + extra;

                let err = stock.decrease(q).unwrap_err();
                prop_assert_eq!(
                    err,
                    DomainError::InsufficientStock { requested: q, available: initial }
                );
                prop_assert_eq!(stock.quantity(), initial);
            }

            /// Property: the level never goes negative (stays representable),
            /// whatever interleaving of operations runs.
            #[test]
            fn level_is_never_negative(
                initial in 0u32..10_000,
                ops in proptest::collection::vec((any::<bool>(), 0u32..10_000), 0..64),
            ) {
                let mut stock = StockLevel::new(initial);
                for (is_increase, q) in ops {
                    if is_increase {
                        stock.increase(q);
                    } else {
                        let before = stock.quantity();
                        if stock.decrease(q).is_err() {
                            prop_assert_eq!(stock.quantity(), before);
                        }
                    }
                }
            }
        }
    }
}
