//! Pruning Strategy
//!
//! Upper bounds on the size of an MSU whose lowest-ranked item is the
//! reference item `i` of a sub-table `T`:
//!
//! ```text
//! by_support    = support_T(i)
//!     An MSU M of size k needs its unique row plus one witness row per
//!     member x != i (containing M \ {x}, hence i). All are distinct rows
//!     of T containing i.
//! by_candidates = 1 + distinct columns among items ranked after i
//!     Two items of one column never share a row.
//! external      = caller's max key size at this level
//! ```
//!
//! The binding bound is the minimum. A branch is expanded only when it can
//! still reach a key of size 2 (reference + at least one item).

use serde::{Deserialize, Serialize};

/// Bounds for one branch at one recursion level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruningBound {
    pub by_support: usize,
    pub by_candidates: usize,
    pub external: usize,
}

impl PruningBound {
    #[inline]
    pub fn binding(&self) -> usize {
        self.by_support.min(self.by_candidates).min(self.external)
    }

    /// Key size budget left for the projected sub-table
    #[inline]
    pub fn child_max_key_size(&self) -> usize {
        self.binding().saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruningStrategy {
    enabled: bool,
}

impl PruningStrategy {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Only the external bound applies
    pub fn disabled() -> Self {
        Self::new(false)
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn bound(
        &self,
        reference_support: usize,
        columns_after: usize,
        external: usize,
    ) -> PruningBound {
        if !self.enabled {
            return PruningBound {
                by_support: usize::MAX,
                by_candidates: usize::MAX,
                external,
            };
        }
        PruningBound {
            by_support: reference_support,
            by_candidates: columns_after.saturating_add(1),
            external,
        }
    }

    #[inline]
    pub fn should_expand(&self, bound: &PruningBound) -> bool {
        bound.binding() >= 2
    }
}

impl Default for PruningStrategy {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_is_minimum() {
        let strategy = PruningStrategy::default();
        let bound = strategy.bound(4, 6, 5);
        assert_eq!(bound.by_candidates, 7);
        assert_eq!(bound.binding(), 4);
        assert_eq!(bound.child_max_key_size(), 3);

        assert_eq!(strategy.bound(10, 1, 5).binding(), 2);
        assert_eq!(strategy.bound(10, 8, 3).binding(), 3);
    }

    #[test]
    fn test_should_expand() {
        let strategy = PruningStrategy::default();
        assert!(strategy.should_expand(&strategy.bound(2, 1, 2)));
        // Nothing ranked after the reference item
        assert!(!strategy.should_expand(&strategy.bound(5, 0, 4)));
        assert!(!strategy.should_expand(&strategy.bound(5, 3, 1)));
    }

    #[test]
    fn test_disabled_keeps_external_only() {
        let strategy = PruningStrategy::disabled();
        let bound = strategy.bound(2, 0, 4);
        assert_eq!(bound.binding(), 4);
        assert!(strategy.should_expand(&bound));
    }
}
