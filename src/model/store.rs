//! In-memory arena implementation of [`TypeModel`].
//!
//! `TypeStore` keeps [`TypeDecl`] records in a flat arena indexed by
//! [`TypeId`]. It is the write side of the model: declarations are inserted
//! and wired up before any traversal starts, and the store is treated as
//! immutable while cursors borrow it.

use serde::Serialize;

use crate::model::TypeModel;
use crate::types::{Flags, MemberDecl, TypeDecl, TypeId, TypeKind};

// ---------------------------------------------------------------------------
// ModelStats
// ---------------------------------------------------------------------------

/// Aggregate statistics about the stored type graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelStats {
    pub types: usize,
    pub classes: usize,
    pub interfaces: usize,
    pub members: usize,
}

// ---------------------------------------------------------------------------
// TypeStore
// ---------------------------------------------------------------------------

/// Arena-backed type model.
#[derive(Debug, Default)]
pub struct TypeStore {
    decls: Vec<TypeDecl>,
}

impl TypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration and return its fresh handle.
    pub fn insert(&mut self, decl: TypeDecl) -> TypeId {
        let id = TypeId::new(self.decls.len() as u32);
        self.decls.push(decl);
        id
    }

    /// Shorthand: insert a named class with no relations yet.
    pub fn insert_class(&mut self, name: &str) -> TypeId {
        self.insert(TypeDecl::new(name, TypeKind::Class))
    }

    /// Shorthand: insert a named interface with no relations yet.
    pub fn insert_interface(&mut self, name: &str) -> TypeId {
        self.insert(TypeDecl::new(name, TypeKind::Interface))
    }

    pub fn set_super_class(&mut self, ty: TypeId, super_class: TypeId) {
        self.decls[ty.index()].super_class = Some(super_class);
    }

    /// Append a declared superinterface, preserving declaration order.
    pub fn add_interface(&mut self, ty: TypeId, interface: TypeId) {
        self.decls[ty.index()].interfaces.push(interface);
    }

    /// Append a nested type, preserving declaration order.
    pub fn add_inner(&mut self, outer: TypeId, inner: TypeId) {
        self.decls[outer.index()].inner_types.push(inner);
    }

    pub fn add_method(&mut self, ty: TypeId, method: MemberDecl) {
        self.decls[ty.index()].methods.push(method);
    }

    pub fn add_field(&mut self, ty: TypeId, field: MemberDecl) {
        self.decls[ty.index()].fields.push(field);
    }

    pub fn add_annotation(&mut self, ty: TypeId, annotation: MemberDecl) {
        self.decls[ty.index()].annotations.push(annotation);
    }

    pub fn set_flags(&mut self, ty: TypeId, flags: Flags) {
        self.decls[ty.index()].flags = flags;
    }

    fn decl(&self, ty: TypeId) -> &TypeDecl {
        &self.decls[ty.index()]
    }

    pub fn stats(&self) -> ModelStats {
        let classes = self
            .decls
            .iter()
            .filter(|d| !d.kind.is_interface())
            .count();
        let members = self
            .decls
            .iter()
            .map(|d| d.methods.len() + d.fields.len() + d.annotations.len())
            .sum();
        ModelStats {
            types: self.decls.len(),
            classes,
            interfaces: self.decls.len() - classes,
            members,
        }
    }
}

impl TypeModel for TypeStore {
    fn contains(&self, ty: TypeId) -> bool {
        ty.index() < self.decls.len()
    }

    fn kind(&self, ty: TypeId) -> TypeKind {
        self.decl(ty).kind
    }

    fn name(&self, ty: TypeId) -> &str {
        &self.decl(ty).name
    }

    fn flags(&self, ty: TypeId) -> Flags {
        self.decl(ty).flags
    }

    fn super_class(&self, ty: TypeId) -> Option<TypeId> {
        self.decl(ty).super_class
    }

    fn super_interfaces(&self, ty: TypeId) -> &[TypeId] {
        &self.decl(ty).interfaces
    }

    fn inner_types(&self, ty: TypeId) -> &[TypeId] {
        &self.decl(ty).inner_types
    }

    fn methods(&self, ty: TypeId) -> &[MemberDecl] {
        &self.decl(ty).methods
    }

    fn fields(&self, ty: TypeId) -> &[MemberDecl] {
        &self.decl(ty).fields
    }

    fn annotations(&self, ty: TypeId) -> &[MemberDecl] {
        &self.decl(ty).annotations
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
