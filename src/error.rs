//! Error types for TypeGraph.
//!
//! The engine has exactly one runtime failure class: a precondition
//! violation on query input (an unknown or unresolved start type). Missing
//! relations — no superclass, no superinterfaces, no inner types — are not
//! errors; they terminate the corresponding traversal branch silently.

use thiserror::Error;

use crate::types::TypeId;

/// Errors produced by the TypeGraph query engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeGraphError {
    /// A query was handed a start type the model does not contain.
    #[error("precondition failed: unknown type id {0} passed to query")]
    Precondition(TypeId),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TypeGraphError>;
