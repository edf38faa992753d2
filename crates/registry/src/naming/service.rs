use weft_primitives::MemberRef;

use crate::conventions::{ExportConvention, ImportConvention};
use crate::error::Result;

/// Contract naming applied to convention objects.
pub trait ContractNaming: Send + Sync {
	fn export_contract_name(&self, convention: &ExportConvention, member: &MemberRef) -> Result<String>;
	fn export_type_identity(&self, convention: &ExportConvention, member: &MemberRef) -> Result<String>;
	fn import_contract_name(&self, convention: &ImportConvention, member: &MemberRef) -> Result<String>;
	fn import_type_identity(&self, convention: &ImportConvention, member: &MemberRef) -> Result<Option<String>>;
}

/// Stateless adapter from conventions to the free naming functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractService;

impl ContractNaming for ContractService {
	fn export_contract_name(&self, convention: &ExportConvention, member: &MemberRef) -> Result<String> {
		super::export_contract_name(convention.contract_name.as_ref(), convention.contract_type.as_ref(), member)
	}

	fn export_type_identity(&self, convention: &ExportConvention, member: &MemberRef) -> Result<String> {
		super::export_type_identity(convention.contract_type.as_ref(), member)
	}

	fn import_contract_name(&self, convention: &ImportConvention, member: &MemberRef) -> Result<String> {
		super::import_contract_name(convention.contract_name.as_ref(), convention.contract_type.as_ref(), member)
	}

	fn import_type_identity(&self, convention: &ImportConvention, member: &MemberRef) -> Result<Option<String>> {
		super::import_type_identity(convention.contract_type.as_ref(), member)
	}
}
