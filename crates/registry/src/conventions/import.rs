use std::fmt;

use super::{ContractNameFn, ContractSource, ContractTypeFn, CreationPolicy, MemberSelector};
use crate::metadata::RequiredMetadataItem;

/// Rule selecting the members of a part that receive imports.
///
/// A selected constructor imports through each of its parameters.
#[derive(Clone)]
pub struct ImportConvention {
	pub allow_default_value: bool,
	pub contract_name: Option<ContractNameFn>,
	pub contract_type: Option<ContractTypeFn>,
	pub creation_policy: CreationPolicy,
	pub members: MemberSelector,
	pub recomposable: bool,
	pub required_metadata: Vec<RequiredMetadataItem>,
}

impl ImportConvention {
	pub fn new(members: MemberSelector) -> Self {
		Self {
			allow_default_value: false,
			contract_name: None,
			contract_type: None,
			creation_policy: CreationPolicy::Any,
			members,
			recomposable: false,
			required_metadata: Vec::new(),
		}
	}
}

impl ContractSource for ImportConvention {
	fn contract_name_fn(&self) -> Option<&ContractNameFn> {
		self.contract_name.as_ref()
	}

	fn contract_type_fn(&self) -> Option<&ContractTypeFn> {
		self.contract_type.as_ref()
	}
}

impl fmt::Debug for ImportConvention {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ImportConvention")
			.field("allow_default_value", &self.allow_default_value)
			.field("contract_name", &self.contract_name.is_some())
			.field("contract_type", &self.contract_type.is_some())
			.field("creation_policy", &self.creation_policy)
			.field("recomposable", &self.recomposable)
			.field("required_metadata", &self.required_metadata)
			.finish_non_exhaustive()
	}
}
