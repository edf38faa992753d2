//! Definitions handed to the composition host.
//!
//! These mirror the host's own attribute-derived definitions: same metadata
//! keys, same identity strings. They are rebuilt on every catalog query.

use indexmap::IndexMap;
use weft_primitives::{MemberRef, TypeDef};

use crate::conventions::CreationPolicy;
use crate::metadata::{MetadataValue, RequiredMetadataItem};

/// Part metadata key carrying the part's [`CreationPolicy`].
pub const CREATION_POLICY_METADATA: &str = "System.ComponentModel.Composition.CreationPolicy";

/// Export metadata key carrying the export's type identity.
pub const EXPORT_TYPE_IDENTITY_METADATA: &str = "ExportTypeIdentity";

/// Ordered metadata dictionary.
pub type Metadata = IndexMap<String, MetadataValue>;

/// How many matching exports an import accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportCardinality {
	ExactlyOne,
	ZeroOrOne,
	ZeroOrMore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDefinition {
	pub member: MemberRef,
	pub contract_name: String,
	pub metadata: Metadata,
}

impl ExportDefinition {
	pub fn type_identity(&self) -> Option<&str> {
		self.metadata
			.get(EXPORT_TYPE_IDENTITY_METADATA)
			.and_then(MetadataValue::as_str)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDefinition {
	/// Imported member, or the constructor parameter for prerequisite imports.
	pub member: MemberRef,
	pub contract_name: String,
	/// `None` accepts exports of any type.
	pub required_type_identity: Option<String>,
	pub required_metadata: Vec<RequiredMetadataItem>,
	pub cardinality: ImportCardinality,
	pub is_recomposable: bool,
	/// Must be satisfied before the part can be constructed.
	pub is_prerequisite: bool,
	pub required_creation_policy: CreationPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartDefinition {
	pub part_type: TypeDef,
	pub metadata: Metadata,
	pub exports: Vec<ExportDefinition>,
	pub imports: Vec<ImportDefinition>,
}

impl PartDefinition {
	/// Convention parts are always closed types.
	pub fn is_generic(&self) -> bool {
		false
	}

	pub fn creation_policy(&self) -> CreationPolicy {
		match self.metadata.get(CREATION_POLICY_METADATA) {
			Some(MetadataValue::Policy(policy)) => *policy,
			_ => CreationPolicy::Any,
		}
	}
}
