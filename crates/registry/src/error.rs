//! Error types for conventions, scanners and synthesis.

use std::path::PathBuf;

use thiserror::Error;
use weft_primitives::{AssemblyError, ExprError};

/// Failure taxonomy callers match on instead of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// A required argument or slot is missing.
	InvalidArgument,
	/// A required string is present but empty.
	InvalidRange,
	/// A file or directory does not exist.
	NotFound,
	/// A supplier evaluated to nothing.
	InvalidOperation,
	/// A member cannot be classified into an import cardinality.
	CardinalityMismatch,
	/// A discovered registry could not be instantiated.
	Activation,
	/// Reading from disk failed.
	Io,
	/// Persisted data could not be decoded.
	Format,
}

/// Errors raised while building conventions or synthesizing definitions.
#[derive(Debug, Error)]
pub enum ConventionError {
	/// A required slot was never set.
	#[error("{0} is required")]
	MissingArgument(&'static str),

	/// A null value was supplied where a value is required.
	#[error("{0} must not be null")]
	NullValue(&'static str),

	/// A required string was empty.
	#[error("{0} must not be empty")]
	EmptyString(&'static str),

	/// The member carries no value type to derive a contract from.
	#[error("{member} has no value type")]
	NoValueType { member: String },

	/// A supplier returned `None`.
	#[error("{0} supplier returned nothing")]
	SupplierReturnedNone(&'static str),

	/// A scanner directory does not exist.
	#[error("directory not found: {0}")]
	DirectoryNotFound(PathBuf),

	/// An assembly file does not exist.
	#[error("file not found: {0}")]
	FileNotFound(PathBuf),

	/// The import's value type fits no cardinality bucket.
	#[error("cannot determine import cardinality of {member}")]
	CardinalityMismatch { member: String },

	/// No factory knows how to create the discovered registry type.
	#[error("no factory registered for registry type {0}")]
	NoFactory(String),

	/// A registry factory failed.
	#[error("registry {type_identity} failed to activate: {reason}")]
	ActivationFailed { type_identity: String, reason: String },

	/// A member expression could not be resolved.
	#[error(transparent)]
	Expr(#[from] ExprError),

	/// An assembly could not be loaded.
	#[error(transparent)]
	Assembly(#[from] AssemblyError),
}

impl ConventionError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::MissingArgument(_) | Self::NullValue(_) | Self::NoValueType { .. } | Self::Expr(_) => {
				ErrorKind::InvalidArgument
			}
			Self::EmptyString(_) => ErrorKind::InvalidRange,
			Self::SupplierReturnedNone(_) => ErrorKind::InvalidOperation,
			Self::DirectoryNotFound(_) | Self::FileNotFound(_) => ErrorKind::NotFound,
			Self::CardinalityMismatch { .. } => ErrorKind::CardinalityMismatch,
			Self::NoFactory(_) | Self::ActivationFailed { .. } => ErrorKind::Activation,
			Self::Assembly(AssemblyError::Io { .. }) => ErrorKind::Io,
			Self::Assembly(_) => ErrorKind::Format,
		}
	}
}

/// Result type for convention operations.
pub type Result<T> = std::result::Result<T, ConventionError>;

/// Rejects empty strings with [`ErrorKind::InvalidRange`].
pub(crate) fn non_empty(value: &str, what: &'static str) -> Result<String> {
	if value.is_empty() {
		return Err(ConventionError::EmptyString(what));
	}
	Ok(value.to_string())
}
