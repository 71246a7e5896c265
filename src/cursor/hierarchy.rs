//! Breadth-first walk of a type's supertype graph.
//!
//! The superclass/superinterface relation is a DAG, not a tree: diamond
//! inheritance can re-reach the same interface over several paths, and the
//! cursor must yield it exactly once without mistaking the re-visit for a
//! cycle. The walk is level-respecting (the start type, then its direct
//! supertypes, then theirs) and honors an inclusion scope that decides
//! which visited nodes are yielded — a scope that wants only interfaces
//! still walks the entire superclass chain to discover the interfaces each
//! class declares, it just discards the classes themselves.

use std::collections::{HashSet, VecDeque};

use tracing::trace;

use crate::model::TypeModel;
use crate::observability::TraversalStats;
use crate::types::TypeId;

// ---------------------------------------------------------------------------
// TraversalScope
// ---------------------------------------------------------------------------

/// Which parts of the supertype graph a hierarchy walk yields.
///
/// Immutable once the cursor is constructed. Inclusion governs only what
/// is *yielded*; expansion always starts from the start type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalScope {
    pub include_self: bool,
    pub super_classes: bool,
    pub super_interfaces: bool,
}

impl TraversalScope {
    pub fn new(include_self: bool, super_classes: bool, super_interfaces: bool) -> Self {
        Self {
            include_self,
            super_classes,
            super_interfaces,
        }
    }

    /// True when no expansion beyond the start type is requested, which
    /// makes the remaining count exactly knowable.
    pub fn is_single_level(self) -> bool {
        !self.super_classes && !self.super_interfaces
    }
}

impl Default for TraversalScope {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

// ---------------------------------------------------------------------------
// HierarchyCursor
// ---------------------------------------------------------------------------

/// Single-pass cursor over a start type's supertype graph.
///
/// Not restartable; create a fresh cursor for a repeat traversal. The
/// borrowed model is assumed immutable while the cursor lives.
pub struct HierarchyCursor<'a, M: TypeModel + ?Sized> {
    model: &'a M,
    start: TypeId,
    scope: TraversalScope,
    frontier: VecDeque<TypeId>,
    /// Interfaces already scheduled, keyed by stable identity. Guards the
    /// diamond case: an interface reachable over two paths is enqueued once.
    visited_interfaces: HashSet<TypeId>,
    /// Classes already scheduled. A well-formed superclass chain is a
    /// simple path and never re-visits, so this set exists purely to
    /// terminate on a malformed model that reports a cyclic chain.
    visited_classes: HashSet<TypeId>,
    stats: TraversalStats,
}

impl<'a, M: TypeModel + ?Sized> HierarchyCursor<'a, M> {
    /// Start a walk from `start`. The caller (the query layer) has already
    /// validated that the model contains `start`.
    pub fn new(model: &'a M, start: TypeId, scope: TraversalScope) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(start);

        let mut visited_interfaces = HashSet::new();
        let mut visited_classes = HashSet::new();
        if model.is_interface(start) {
            visited_interfaces.insert(start);
        } else {
            visited_classes.insert(start);
        }

        Self {
            model,
            start,
            scope,
            frontier,
            visited_interfaces,
            visited_classes,
            stats: TraversalStats::default(),
        }
    }

    pub fn scope(&self) -> TraversalScope {
        self.scope
    }

    /// Counters accumulated so far by this walk.
    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    fn wants(&self, node: TypeId, is_interface: bool) -> bool {
        (is_interface && self.scope.super_interfaces)
            || (!is_interface && self.scope.super_classes)
            || (node == self.start && self.scope.include_self)
    }

    /// Append `node`'s supertypes to the frontier tail.
    ///
    /// Runs for discarded nodes too: that is what lets the walk pass
    /// through an excluded superclass chain to reach its interfaces. When
    /// the scope requests no supertypes at all, expansion is suppressed
    /// and the frontier empties after the start node.
    fn expand(&mut self, node: TypeId, is_interface: bool) {
        if self.scope.is_single_level() {
            return;
        }

        if !is_interface {
            if let Some(super_class) = self.model.super_class(node) {
                if self.visited_classes.insert(super_class) {
                    self.frontier.push_back(super_class);
                }
            }
        }

        if self.scope.super_interfaces {
            for &interface in self.model.super_interfaces(node) {
                if self.visited_interfaces.insert(interface) {
                    self.frontier.push_back(interface);
                } else {
                    self.stats.deduplicated += 1;
                    trace!(interface = %interface, "diamond path deduplicated");
                }
            }
        }
    }
}

impl<M: TypeModel + ?Sized> Iterator for HierarchyCursor<'_, M> {
    type Item = TypeId;

    fn next(&mut self) -> Option<TypeId> {
        while let Some(node) = self.frontier.pop_front() {
            let is_interface = self.model.is_interface(node);
            self.expand(node, is_interface);
            if self.wants(node, is_interface) {
                self.stats.yielded += 1;
                return Some(node);
            }
            self.stats.discarded += 1;
            trace!(node = %node, "discarded by scope");
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.scope.is_single_level() {
            let remaining = if self.scope.include_self {
                self.frontier.len()
            } else {
                0
            };
            (remaining, Some(remaining))
        } else {
            // Expansion can both add and discard nodes; any finite guess
            // could be wrong in either direction.
            (0, None)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeStore;
    use pretty_assertions::assert_eq;

    /// Diamond-shaped fixture:
    /// interfaces `I1`, `I2 extends I1`; class `A implements I1`;
    /// class `B extends A implements I2`. `I1` is reachable over two paths.
    fn diamond() -> (TypeStore, TypeId, TypeId, TypeId, TypeId) {
        let mut store = TypeStore::new();
        let i1 = store.insert_interface("I1");
        let i2 = store.insert_interface("I2");
        let a = store.insert_class("A");
        let b = store.insert_class("B");
        store.add_interface(i2, i1);
        store.add_interface(a, i1);
        store.set_super_class(b, a);
        store.add_interface(b, i2);
        (store, i1, i2, a, b)
    }

    fn walk(store: &TypeStore, start: TypeId, scope: TraversalScope) -> Vec<TypeId> {
        HierarchyCursor::new(store, start, scope).collect()
    }

    #[test]
    fn full_scope_yields_level_order_with_interfaces_once() {
        let (store, i1, i2, a, b) = diamond();
        let order = walk(&store, b, TraversalScope::default());
        assert_eq!(order, vec![b, a, i2, i1]);
    }

    #[test]
    fn interface_only_scope_walks_classes_without_yielding_them() {
        let (store, i1, i2, _a, b) = diamond();
        let order = walk(&store, b, TraversalScope::new(false, false, true));
        assert_eq!(order, vec![i2, i1]);
    }

    #[test]
    fn superclasses_only_scope_skips_interfaces() {
        let (store, _i1, _i2, a, b) = diamond();
        let order = walk(&store, b, TraversalScope::new(true, true, false));
        assert_eq!(order, vec![b, a]);
    }

    #[test]
    fn excluding_self_still_expands_from_start() {
        let (store, i1, i2, a, b) = diamond();
        let order = walk(&store, b, TraversalScope::new(false, true, true));
        assert_eq!(order, vec![a, i2, i1]);
    }

    #[test]
    fn self_only_scope_yields_start_and_stops() {
        let (store, _i1, _i2, _a, b) = diamond();
        let mut cursor = HierarchyCursor::new(&store, b, TraversalScope::new(true, false, false));
        assert_eq!(cursor.size_hint(), (1, Some(1)));
        assert_eq!(cursor.next(), Some(b));
        assert_eq!(cursor.size_hint(), (0, Some(0)));
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn empty_scope_yields_nothing() {
        let (store, _i1, _i2, _a, b) = diamond();
        let mut cursor = HierarchyCursor::new(&store, b, TraversalScope::new(false, false, false));
        assert_eq!(cursor.size_hint(), (0, Some(0)));
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn multi_level_scope_reports_indeterminate_size() {
        let (store, _i1, _i2, _a, b) = diamond();
        let cursor = HierarchyCursor::new(&store, b, TraversalScope::default());
        assert_eq!(cursor.size_hint(), (0, None));
    }

    #[test]
    fn interface_start_walks_its_extends_chain() {
        let (store, i1, i2, _a, _b) = diamond();
        let order = walk(&store, i2, TraversalScope::default());
        assert_eq!(order, vec![i2, i1]);
    }

    #[test]
    fn rootless_type_terminates_immediately_after_self() {
        let mut store = TypeStore::new();
        let lone = store.insert_class("Lone");
        let order = walk(&store, lone, TraversalScope::default());
        assert_eq!(order, vec![lone]);
    }

    #[test]
    fn deep_diamond_counts_deduplicated_paths() {
        // I1 reachable from I2, from A, and (transitively) from B: two of
        // the three enqueue attempts hit the visited set.
        let (store, _i1, _i2, _a, b) = diamond();
        let mut cursor = HierarchyCursor::new(&store, b, TraversalScope::default());
        let yielded = cursor.by_ref().count();
        let stats = cursor.stats();
        assert_eq!(yielded, 4);
        assert_eq!(stats.yielded, 4);
        assert_eq!(stats.discarded, 0);
        assert_eq!(stats.deduplicated, 1);
    }

    #[test]
    fn discarded_classes_are_counted() {
        let (store, _i1, _i2, _a, b) = diamond();
        let mut cursor = HierarchyCursor::new(&store, b, TraversalScope::new(false, false, true));
        cursor.by_ref().count();
        let stats = cursor.stats();
        assert_eq!(stats.yielded, 2); // I2, I1
        assert_eq!(stats.discarded, 2); // B, A
    }

    #[test]
    fn cyclic_superclass_chain_terminates() {
        // Malformed model: A extends B extends A. The defensive visited
        // set must turn the walk into a finite sequence instead of an
        // infinite loop.
        let mut store = TypeStore::new();
        let a = store.insert_class("A");
        let b = store.insert_class("B");
        store.set_super_class(a, b);
        store.set_super_class(b, a);

        let order = walk(&store, a, TraversalScope::default());
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn repeated_walks_are_deterministic() {
        let (store, _i1, _i2, _a, b) = diamond();
        let first = walk(&store, b, TraversalScope::default());
        let second = walk(&store, b, TraversalScope::default());
        assert_eq!(first, second);
    }

    #[test]
    fn wide_interface_fanout_preserves_declaration_order() {
        let mut store = TypeStore::new();
        let interfaces: Vec<TypeId> = (0..10)
            .map(|n| store.insert_interface(&format!("I{n}")))
            .collect();
        let c = store.insert_class("C");
        for &i in &interfaces {
            store.add_interface(c, i);
        }

        let order = walk(&store, c, TraversalScope::new(false, false, true));
        assert_eq!(order, interfaces);
    }
}
