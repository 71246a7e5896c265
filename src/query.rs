//! Caller-facing query builders.
//!
//! A query is configured once, validated against the model, and turned
//! into a lazy iterator chain: a hierarchy or containment cursor for the
//! type dimension, flattened through per-type member lists where the
//! query asks for members. Nothing is cached — every terminal call is an
//! independent traversal over the borrowed model.
//!
//! ```
//! use typegraph::model::{TypeModel, TypeStore};
//! use typegraph::query;
//!
//! let mut store = TypeStore::new();
//! let base = store.insert_class("Base");
//! let sub = store.insert_class("Sub");
//! store.set_super_class(sub, base);
//!
//! let names: Vec<&str> = query::hierarchy(&store, sub)
//!     .types()
//!     .unwrap()
//!     .map(|ty| store.name(ty))
//!     .collect();
//! assert_eq!(names, ["Sub", "Base"]);
//! ```

use tracing::debug;

use crate::cursor::{
    ContainmentCursor, FlatteningCursor, HierarchyCursor, IndexedCursor, TraversalScope,
};
use crate::error::{Result, TypeGraphError};
use crate::model::TypeModel;
use crate::types::{Flags, MemberDecl, TypeId};

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Query the supertype hierarchy of `start`. Defaults to the full scope:
/// the start type itself, all superclasses, and all superinterfaces.
pub fn hierarchy<M: TypeModel + ?Sized>(model: &M, start: TypeId) -> HierarchyQuery<'_, M> {
    HierarchyQuery {
        model,
        start,
        scope: TraversalScope::default(),
        filter: Filter::default(),
    }
}

/// Query the nested types of `start`. Defaults to the first nesting level
/// only.
pub fn inner_types<M: TypeModel + ?Sized>(model: &M, start: TypeId) -> InnerTypeQuery<'_, M> {
    InnerTypeQuery {
        model,
        start,
        recursive: false,
        filter: Filter::default(),
    }
}

fn validate<M: TypeModel + ?Sized>(model: &M, start: TypeId) -> Result<()> {
    if model.contains(start) {
        Ok(())
    } else {
        Err(TypeGraphError::Precondition(start))
    }
}

// ---------------------------------------------------------------------------
// Post-hoc filter
// ---------------------------------------------------------------------------

/// Name/flags predicate applied after traversal, never during expansion —
/// a filtered-out class still contributes its supertypes to the walk.
#[derive(Debug, Clone, Default)]
struct Filter {
    name: Option<String>,
    flags: Flags,
}

impl Filter {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.flags.is_empty()
    }

    fn matches_member(&self, member: &MemberDecl) -> bool {
        self.name.as_deref().is_none_or(|n| member.name == n)
            && member.flags.contains(self.flags)
    }

    fn matches_type<M: TypeModel + ?Sized>(&self, model: &M, ty: TypeId) -> bool {
        self.name.as_deref().is_none_or(|n| model.name(ty) == n)
            && model.flags(ty).contains(self.flags)
    }
}

// ---------------------------------------------------------------------------
// HierarchyQuery
// ---------------------------------------------------------------------------

/// Configuration surface for supertype-hierarchy queries.
#[derive(Debug)]
pub struct HierarchyQuery<'a, M: TypeModel + ?Sized> {
    model: &'a M,
    start: TypeId,
    scope: TraversalScope,
    filter: Filter,
}

impl<'a, M: TypeModel + ?Sized> HierarchyQuery<'a, M> {
    /// Whether the start type itself is yielded. Default `true`.
    pub fn with_self(mut self, include: bool) -> Self {
        self.scope.include_self = include;
        self
    }

    /// Whether superclasses are yielded. Default `true`.
    pub fn with_super_classes(mut self, include: bool) -> Self {
        self.scope.super_classes = include;
        self
    }

    /// Whether superinterfaces are yielded. Default `true`. When `false`,
    /// interface edges are not followed at all.
    pub fn with_super_interfaces(mut self, include: bool) -> Self {
        self.scope.super_interfaces = include;
        self
    }

    /// Keep only results with this exact name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.filter.name = Some(name.into());
        self
    }

    /// Keep only results whose flags contain all of `flags`.
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.filter.flags = flags;
        self
    }

    /// The scoped hierarchy as a lazy sequence of types.
    pub fn types(self) -> Result<Types<'a, M, HierarchyCursor<'a, M>>> {
        validate(self.model, self.start)?;
        debug!(start = %self.start, scope = ?self.scope, "hierarchy type query");
        Ok(Types {
            model: self.model,
            cursor: HierarchyCursor::new(self.model, self.start, self.scope),
            filter: self.filter,
        })
    }

    /// Short-circuit convenience: the first type in the scoped hierarchy.
    pub fn first(self) -> Result<Option<TypeId>> {
        Ok(self.types()?.next())
    }

    /// All methods declared on each type in the scoped hierarchy.
    pub fn methods(
        self,
    ) -> Result<Members<'a, M, impl FnMut(TypeId) -> IndexedCursor<'a, MemberDecl>>> {
        self.members(M::methods)
    }

    /// All fields declared on each type in the scoped hierarchy.
    pub fn fields(
        self,
    ) -> Result<Members<'a, M, impl FnMut(TypeId) -> IndexedCursor<'a, MemberDecl>>> {
        self.members(M::fields)
    }

    /// All annotations declared on each type in the scoped hierarchy.
    pub fn annotations(
        self,
    ) -> Result<Members<'a, M, impl FnMut(TypeId) -> IndexedCursor<'a, MemberDecl>>> {
        self.members(M::annotations)
    }

    /// First-level inner types declared by each type in the scoped
    /// hierarchy, flattened into one sequence.
    pub fn inner_types(self) -> Result<Types<'a, M, impl Iterator<Item = TypeId> + 'a>> {
        validate(self.model, self.start)?;
        let model = self.model;
        let nodes = HierarchyCursor::new(model, self.start, self.scope);
        let flattened =
            FlatteningCursor::new(nodes, move |ty| IndexedCursor::new(model.inner_types(ty)))
                .copied();
        Ok(Types {
            model,
            cursor: flattened,
            filter: self.filter,
        })
    }

    fn members(
        self,
        accessor: fn(&'a M, TypeId) -> &'a [MemberDecl],
    ) -> Result<Members<'a, M, impl FnMut(TypeId) -> IndexedCursor<'a, MemberDecl>>> {
        validate(self.model, self.start)?;
        debug!(start = %self.start, scope = ?self.scope, "hierarchy member query");
        let model = self.model;
        let nodes = HierarchyCursor::new(model, self.start, self.scope);
        let flattened =
            FlatteningCursor::new(nodes, move |ty| IndexedCursor::new(accessor(model, ty)));
        Ok(Members {
            inner: flattened,
            filter: self.filter,
        })
    }
}

// ---------------------------------------------------------------------------
// InnerTypeQuery
// ---------------------------------------------------------------------------

/// Configuration surface for nested-type queries.
#[derive(Debug)]
pub struct InnerTypeQuery<'a, M: TypeModel + ?Sized> {
    model: &'a M,
    start: TypeId,
    recursive: bool,
    filter: Filter,
}

impl<'a, M: TypeModel + ?Sized> InnerTypeQuery<'a, M> {
    /// Recurse into further nesting levels. Default `false`.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Keep only results with this exact name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.filter.name = Some(name.into());
        self
    }

    /// Keep only results whose flags contain all of `flags`.
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.filter.flags = flags;
        self
    }

    /// The nested types as a lazy sequence.
    pub fn types(self) -> Result<Types<'a, M, ContainmentCursor<'a, M>>> {
        validate(self.model, self.start)?;
        debug!(start = %self.start, recursive = self.recursive, "inner type query");
        Ok(Types {
            model: self.model,
            cursor: ContainmentCursor::new(self.model, self.start, self.recursive),
            filter: self.filter,
        })
    }

    /// Short-circuit convenience: the first nested type.
    pub fn first(self) -> Result<Option<TypeId>> {
        Ok(self.types()?.next())
    }
}

// ---------------------------------------------------------------------------
// Result sequences
// ---------------------------------------------------------------------------

/// Lazy sequence of types produced by a query terminal.
///
/// Preserves the underlying cursor's exact size reporting when no filter
/// is configured; with a filter only the upper bound survives.
pub struct Types<'a, M: TypeModel + ?Sized, C> {
    model: &'a M,
    cursor: C,
    filter: Filter,
}

impl<M: TypeModel + ?Sized, C: Iterator<Item = TypeId>> Iterator for Types<'_, M, C> {
    type Item = TypeId;

    fn next(&mut self) -> Option<TypeId> {
        loop {
            let ty = self.cursor.next()?;
            if self.filter.matches_type(self.model, ty) {
                return Some(ty);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.filter.is_empty() {
            self.cursor.size_hint()
        } else {
            (0, self.cursor.size_hint().1)
        }
    }
}

/// Lazy sequence of member declarations flattened across a hierarchy.
pub struct Members<'a, M: TypeModel + ?Sized, F>
where
    F: FnMut(TypeId) -> IndexedCursor<'a, MemberDecl>,
{
    inner: FlatteningCursor<HierarchyCursor<'a, M>, IndexedCursor<'a, MemberDecl>, F>,
    filter: Filter,
}

impl<'a, M: TypeModel + ?Sized, F> Iterator for Members<'a, M, F>
where
    F: FnMut(TypeId) -> IndexedCursor<'a, MemberDecl>,
{
    type Item = &'a MemberDecl;

    fn next(&mut self) -> Option<&'a MemberDecl> {
        loop {
            let member = self.inner.next()?;
            if self.filter.matches_member(member) {
                return Some(member);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.filter.is_empty() {
            self.inner.size_hint()
        } else {
            (0, self.inner.size_hint().1)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
