//! Error and warning types for configuration parsing.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use weft_primitives::ExprError;
use weft_registry::ConventionError;

/// Errors that can occur when binding configuration to conventions.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A required attribute is missing or empty.
	#[error("missing required field: {0}")]
	MissingField(String),

	/// A type name that neither the well-known types nor the resolver's
	/// scanner know.
	#[error("unknown type: {0}")]
	UnknownType(String),

	/// A member selector that does not match any member of the part type.
	#[error("{type_identity} has no member matching '{selector}'")]
	UnknownMember {
		type_identity: String,
		selector: String,
	},

	#[error("invalid creation policy: {0} (expected 'any', 'shared' or 'non-shared')")]
	InvalidPolicy(String),

	/// An attribute holds a value of the wrong kind.
	#[error("invalid value for '{attribute}' on {node}")]
	InvalidValue {
		node: &'static str,
		attribute: &'static str,
	},

	/// A lambda member selector failed to resolve.
	#[error(transparent)]
	Expr(#[from] ExprError),

	/// A convention rejected a configured value.
	#[error(transparent)]
	Convention(#[from] ConventionError),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal issue found while parsing.
///
/// Warnings are collected alongside the parsed conventions; the offending
/// node or attribute is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A node this binding does not understand.
	UnknownNode {
		node: String,
		/// Where the node was found (e.g. "part").
		parent: &'static str,
	},
	/// An attribute this binding does not understand.
	UnknownAttribute {
		attribute: String,
		node: &'static str,
	},
}

impl fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigWarning::UnknownNode { node, parent } => {
				write!(f, "unknown node '{node}' in {parent} will be ignored")
			}
			ConfigWarning::UnknownAttribute { attribute, node } => {
				write!(f, "unknown attribute '{attribute}' on {node} will be ignored")
			}
		}
	}
}
