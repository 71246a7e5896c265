//! Cursor layer — single-pass, pull-based traversal primitives.
//!
//! Every cursor is forward-only and does all of its work inside `next()`;
//! abandoning a cursor mid-walk costs nothing. Cursors are created per
//! query invocation and hold no state usable across invocations. Only
//! [`IndexedCursor`] supports splitting for parallel consumption — the
//! graph walks are sequential by contract, since breadth-first expansion
//! order is not divisible without breaking ordering and dedup guarantees.

pub mod containment;
pub mod flatten;
pub mod hierarchy;
pub mod indexed;

pub use containment::ContainmentCursor;
pub use flatten::FlatteningCursor;
pub use hierarchy::{HierarchyCursor, TraversalScope};
pub use indexed::IndexedCursor;
