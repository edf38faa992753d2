//! Metadata attached to parts and exports, and metadata constraints on imports.

use std::fmt;

use weft_primitives::TypeRef;

use crate::conventions::CreationPolicy;
use crate::error::{ConventionError, Result, non_empty};

/// Value of a metadatum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetadataValue {
	Str(String),
	Int(i64),
	Bool(bool),
	Type(TypeRef),
	Policy(CreationPolicy),
	Null,
}

impl MetadataValue {
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl fmt::Display for MetadataValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Str(s) => f.write_str(s),
			Self::Int(i) => write!(f, "{i}"),
			Self::Bool(b) => write!(f, "{b}"),
			Self::Type(ty) => f.write_str(ty.identity()),
			Self::Policy(p) => write!(f, "{p}"),
			Self::Null => f.write_str("null"),
		}
	}
}

impl From<&str> for MetadataValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<String> for MetadataValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<i64> for MetadataValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for MetadataValue {
	fn from(value: i32) -> Self {
		Self::Int(value.into())
	}
}

impl From<bool> for MetadataValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<TypeRef> for MetadataValue {
	fn from(value: TypeRef) -> Self {
		Self::Type(value)
	}
}

impl From<CreationPolicy> for MetadataValue {
	fn from(value: CreationPolicy) -> Self {
		Self::Policy(value)
	}
}

/// Named metadatum. Equal when both name and value are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetadataItem {
	name: String,
	value: MetadataValue,
}

impl MetadataItem {
	pub fn new(name: &str, value: impl Into<MetadataValue>) -> Result<Self> {
		let name = non_empty(name, "metadata name")?;
		let value = value.into();
		if value.is_null() {
			return Err(ConventionError::NullValue("metadata value"));
		}
		Ok(Self { name, value })
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn value(&self) -> &MetadataValue {
		&self.value
	}
}

/// Metadatum an import requires matching exports to carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequiredMetadataItem {
	name: String,
	ty: TypeRef,
}

impl RequiredMetadataItem {
	pub fn new(name: &str, ty: TypeRef) -> Result<Self> {
		Ok(Self {
			name: non_empty(name, "required metadata name")?,
			ty,
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn ty(&self) -> &TypeRef {
		&self.ty
	}
}
