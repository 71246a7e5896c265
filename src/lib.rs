//! TypeGraph — lazy type-hierarchy traversal and query library.
//!
//! Walks a type's inheritance graph (superclasses, superinterfaces) and
//! containment tree (nested types) and exposes the results as single-pass,
//! composable, lazily-evaluated iterators. The supertype relation is a DAG,
//! not a tree — an interface reachable over several inheritance paths is
//! yielded exactly once — and no cursor does work it wasn't asked for:
//! pulling the first element of a query never materializes the rest of the
//! hierarchy.
//!
//! Type graph data is owned by an external collaborator behind the
//! [`model::TypeModel`] trait; [`model::TypeStore`] is the bundled in-memory
//! implementation. Queries start at [`query::hierarchy`] and
//! [`query::inner_types`].

pub mod cursor;
pub mod error;
pub mod model;
pub mod observability;
pub mod query;
pub mod types;
