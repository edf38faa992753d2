use std::fmt;

use super::{CreationPolicy, ExportConvention, ImportConvention, TypePredicate};
use crate::metadata::MetadataItem;

/// Rule turning every type that satisfies `condition` into a part.
#[derive(Clone)]
pub struct PartConvention {
	pub condition: TypePredicate,
	pub creation_policy: CreationPolicy,
	pub exports: Vec<ExportConvention>,
	pub imports: Vec<ImportConvention>,
	pub metadata: Vec<MetadataItem>,
}

impl PartConvention {
	pub fn new(condition: TypePredicate) -> Self {
		Self {
			condition,
			creation_policy: CreationPolicy::Any,
			exports: Vec::new(),
			imports: Vec::new(),
			metadata: Vec::new(),
		}
	}
}

impl fmt::Debug for PartConvention {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PartConvention")
			.field("creation_policy", &self.creation_policy)
			.field("exports", &self.exports)
			.field("imports", &self.imports)
			.field("metadata", &self.metadata)
			.finish_non_exhaustive()
	}
}
