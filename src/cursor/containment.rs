//! Breadth-first walk of a type's nested-type tree.
//!
//! Uses an explicit pending queue instead of call-stack recursion so the
//! walk's stack usage stays constant no matter how deeply types nest.

use std::collections::VecDeque;

use crate::cursor::IndexedCursor;
use crate::model::TypeModel;
use crate::types::TypeId;

// ---------------------------------------------------------------------------
// ContainmentCursor
// ---------------------------------------------------------------------------

/// Single-pass cursor over a start type's nested types.
///
/// Non-recursive mode yields the first nesting level only and knows its
/// exact remaining count; recursive mode continues level by level through
/// every further nesting depth.
pub struct ContainmentCursor<'a, M: TypeModel + ?Sized> {
    model: &'a M,
    recursive: bool,
    current: IndexedCursor<'a, TypeId>,
    pending: VecDeque<TypeId>,
}

impl<'a, M: TypeModel + ?Sized> ContainmentCursor<'a, M> {
    /// Start a walk over `start`'s inner types. The caller has already
    /// validated that the model contains `start`.
    pub fn new(model: &'a M, start: TypeId, recursive: bool) -> Self {
        Self {
            model,
            recursive,
            current: IndexedCursor::new(model.inner_types(start)),
            pending: VecDeque::new(),
        }
    }
}

impl<M: TypeModel + ?Sized> Iterator for ContainmentCursor<'_, M> {
    type Item = TypeId;

    fn next(&mut self) -> Option<TypeId> {
        loop {
            if let Some(&ty) = self.current.next() {
                if self.recursive {
                    self.pending.push_back(ty);
                }
                return Some(ty);
            }
            // Current level exhausted; re-source from the next pending
            // node. A node without inner types just loops to the next.
            let node = self.pending.pop_front()?;
            self.current = IndexedCursor::new(self.model.inner_types(node));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.recursive {
            (self.current.remaining(), None)
        } else {
            self.current.size_hint()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
