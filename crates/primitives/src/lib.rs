//! Reflection-equivalent type model for convention-driven composition.
//!
//! Rust has no runtime reflection, so the types a composition host reasons
//! about are described explicitly: a [`TypeRef`] is the shape of a type
//! (name, kind, generic arguments, implemented interfaces), a [`TypeDef`]
//! adds the members a convention can select, and a [`MemberRef`] points at
//! one of those members with a stable identity.
//!
//! Canonical strings used by the host to match imports to exports live in
//! [`identity`]; assemblies and their on-disk blob format live in [`assembly`].

/// Assemblies and the binary blob format used to persist them.
pub mod assembly;
/// Error types for expression inspection and assembly I/O.
pub mod error;
/// Member expression inspection (`x => x.Member`).
pub mod expr;
/// Canonical type-identity and contract-name formatting.
pub mod identity;
/// Well-known framework types.
pub mod known;
/// Type definitions and member references.
pub mod members;
/// Type references, shapes and signatures.
pub mod types;

pub use assembly::{ASSEMBLY_EXTENSION, Assembly, MAGIC, SCHEMA_VERSION};
pub use error::{AssemblyError, ExprError};
pub use expr::{MemberExpr, inspect};
pub use members::{
	ConstructorInfo, ConstructorRef, FieldInfo, FieldRef, MemberKind, MemberRef, MethodInfo,
	MethodRef, ParameterInfo, ParameterRef, PropertyInfo, PropertyRef, TypeDef, TypeDefBuilder,
};
pub use types::{Signature, TypeAttributes, TypeBuilder, TypeInfo, TypeKind, TypeRef};
