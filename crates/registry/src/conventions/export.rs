use std::fmt;

use super::{ContractNameFn, ContractSource, ContractTypeFn, MemberSelector};
use crate::metadata::MetadataItem;

/// Rule selecting the members of a part that are exported.
#[derive(Clone)]
pub struct ExportConvention {
	pub contract_name: Option<ContractNameFn>,
	pub contract_type: Option<ContractTypeFn>,
	pub members: MemberSelector,
	pub metadata: Vec<MetadataItem>,
}

impl ExportConvention {
	pub fn new(members: MemberSelector) -> Self {
		Self {
			contract_name: None,
			contract_type: None,
			members,
			metadata: Vec::new(),
		}
	}
}

impl ContractSource for ExportConvention {
	fn contract_name_fn(&self) -> Option<&ContractNameFn> {
		self.contract_name.as_ref()
	}

	fn contract_type_fn(&self) -> Option<&ContractTypeFn> {
		self.contract_type.as_ref()
	}
}

impl fmt::Debug for ExportConvention {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ExportConvention")
			.field("contract_name", &self.contract_name.is_some())
			.field("contract_type", &self.contract_type.is_some())
			.field("metadata", &self.metadata)
			.finish_non_exhaustive()
	}
}
