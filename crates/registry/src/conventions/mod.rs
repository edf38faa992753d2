//! Convention records: the rules a registry applies to candidate types.
//!
//! Conventions are plain data. They are usually assembled with the builders
//! in [`crate::builder`], then handed to a registry and never mutated again.

use std::fmt;
use std::sync::Arc;

use weft_primitives::{MemberRef, TypeDef, TypeRef};

use crate::error::Result;

mod export;
mod import;
mod part;
mod type_default;

pub use export::ExportConvention;
pub use import::ImportConvention;
pub use part::PartConvention;
pub use type_default::TypeDefaultConvention;

/// Decides whether a part convention applies to a type.
pub type TypePredicate = Arc<dyn Fn(&TypeDef) -> bool + Send + Sync>;

/// Selects the members of a type that become exports or imports.
pub type MemberSelector = Arc<dyn Fn(&TypeDef) -> Result<Vec<MemberRef>> + Send + Sync>;

/// Derives a contract name from a member.
pub type ContractNameFn = Arc<dyn Fn(&MemberRef) -> String + Send + Sync>;

/// Derives a contract type from a member.
pub type ContractTypeFn = Arc<dyn Fn(&MemberRef) -> TypeRef + Send + Sync>;

/// Whether a part instance is shared between consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CreationPolicy {
	/// No constraint; the host decides.
	#[default]
	Any,
	/// One instance shared by every consumer.
	Shared,
	/// A fresh instance per request.
	NonShared,
}

impl CreationPolicy {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Any => "Any",
			Self::Shared => "Shared",
			Self::NonShared => "NonShared",
		}
	}
}

impl fmt::Display for CreationPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Optional contract overrides shared by export and import conventions.
pub trait ContractSource {
	fn contract_name_fn(&self) -> Option<&ContractNameFn>;
	fn contract_type_fn(&self) -> Option<&ContractTypeFn>;
}

/// Contract name function returning `name` for every member.
pub fn constant_name(name: String) -> ContractNameFn {
	Arc::new(move |_| name.clone())
}

/// Contract type function returning `ty` for every member.
pub fn constant_type(ty: TypeRef) -> ContractTypeFn {
	Arc::new(move |_| ty.clone())
}
