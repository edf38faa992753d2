use weft_primitives::{MemberRef, TypeRef};

use super::{ContractNaming, ContractService};
use crate::conventions::{ContractSource, ExportConvention, ImportConvention, TypeDefaultConvention};
use crate::error::Result;

/// Contract naming that falls back to type-default conventions.
///
/// The default consulted is the last registered one whose target type is the
/// member's value type. Contract names come from its `contract_name` and type
/// identities from its `contract_type`, but only where the convention leaves
/// the matching override unset. Everything else goes through the wrapped
/// service with the convention untouched.
#[derive(Debug, Clone, Default)]
pub struct DefaultConventionContractService<N = ContractService> {
	base: N,
	defaults: Vec<TypeDefaultConvention>,
}

impl<N: ContractNaming> DefaultConventionContractService<N> {
	pub fn new(base: N) -> Self {
		Self {
			base,
			defaults: Vec::new(),
		}
	}

	pub fn with_defaults(mut self, defaults: impl IntoIterator<Item = TypeDefaultConvention>) -> Self {
		self.defaults.extend(defaults);
		self
	}

	pub fn add_default(&mut self, default: TypeDefaultConvention) {
		self.defaults.push(default);
	}

	pub fn defaults(&self) -> &[TypeDefaultConvention] {
		&self.defaults
	}

	/// Last registered default targeting the value type of `member`.
	pub fn default_for(&self, member: &MemberRef) -> Option<&TypeDefaultConvention> {
		let ty = member.value_type()?;
		self.defaults.iter().rev().find(|d| d.target_type == ty)
	}

	fn default_name<C: ContractSource>(&self, convention: &C, member: &MemberRef) -> Option<String> {
		if convention.contract_name_fn().is_some() {
			return None;
		}
		self.default_for(member)?.contract_name.clone()
	}

	fn default_type<C: ContractSource>(&self, convention: &C, member: &MemberRef) -> Option<TypeRef> {
		if convention.contract_type_fn().is_some() {
			return None;
		}
		self.default_for(member)?.contract_type.clone()
	}
}

impl<N: ContractNaming> ContractNaming for DefaultConventionContractService<N> {
	fn export_contract_name(&self, convention: &ExportConvention, member: &MemberRef) -> Result<String> {
		match self.default_name(convention, member) {
			Some(name) => Ok(name),
			None => self.base.export_contract_name(convention, member),
		}
	}

	fn export_type_identity(&self, convention: &ExportConvention, member: &MemberRef) -> Result<String> {
		match self.default_type(convention, member) {
			Some(ty) => Ok(ty.identity().to_string()),
			None => self.base.export_type_identity(convention, member),
		}
	}

	fn import_contract_name(&self, convention: &ImportConvention, member: &MemberRef) -> Result<String> {
		match self.default_name(convention, member) {
			Some(name) => Ok(name),
			None => self.base.import_contract_name(convention, member),
		}
	}

	/// A default contract type of `System.Object` lifts the type constraint.
	fn import_type_identity(&self, convention: &ImportConvention, member: &MemberRef) -> Result<Option<String>> {
		match self.default_type(convention, member) {
			Some(ty) if ty.is_object() => Ok(None),
			Some(ty) => Ok(Some(ty.identity().to_string())),
			None => self.base.import_type_identity(convention, member),
		}
	}
}
