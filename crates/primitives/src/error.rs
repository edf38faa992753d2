//! Error types for member expressions and assembly blobs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while inspecting a member expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
	/// The expression does not follow `param => body`.
	#[error("malformed member expression: {0}")]
	Syntax(String),

	/// The body refers to something other than the lambda parameter.
	#[error("expression body does not start with parameter `{param}`: {body}")]
	UnboundParameter { param: String, body: String },

	/// The body chains more than one member access.
	#[error("expression must access a single member: {0}")]
	NestedAccess(String),

	/// No member of the inspected type matches.
	#[error("{type_identity} has no member matching `{member}`")]
	MemberNotFound { type_identity: String, member: String },

	/// More than one member matches and no parameter list disambiguates.
	#[error("`{member}` is ambiguous on {type_identity}")]
	Ambiguous { type_identity: String, member: String },
}

/// Errors produced while reading or writing assembly blobs.
#[derive(Debug, Error)]
pub enum AssemblyError {
	/// Error reading or writing an assembly file.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path of the assembly file.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The blob does not start with the assembly magic.
	#[error("not an assembly blob (bad magic)")]
	BadMagic,

	/// The blob ends before its header does.
	#[error("assembly blob truncated")]
	Truncated,

	/// The blob was written with an incompatible schema.
	#[error("assembly schema version {found} unsupported (expected {expected})")]
	UnsupportedVersion { found: u32, expected: u32 },

	/// Payload (de)serialization failed.
	#[error("assembly payload: {0}")]
	Codec(#[from] postcard::Error),
}
