use std::sync::Arc;

use weft_primitives::{MemberRef, TypeDef, TypeRef};

use super::member_on;
use crate::conventions::{
	ContractNameFn, ContractTypeFn, CreationPolicy, ImportConvention, MemberSelector, constant_name,
	constant_type,
};
use crate::error::{ConventionError, Result, non_empty};
use crate::metadata::RequiredMetadataItem;
use crate::select;

/// Builder for [`ImportConvention`].
#[derive(Default)]
pub struct ImportConventionBuilder {
	allow_default_value: bool,
	contract_name: Option<ContractNameFn>,
	contract_type: Option<ContractTypeFn>,
	creation_policy: CreationPolicy,
	members: Option<MemberSelector>,
	recomposable: bool,
	required_metadata: Vec<RequiredMetadataItem>,
}

impl ImportConventionBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn allow_default_value(mut self, allow: bool) -> Self {
		self.allow_default_value = allow;
		self
	}

	pub fn contract_name(mut self, name: &str) -> Result<Self> {
		self.contract_name = Some(constant_name(non_empty(name, "contract name")?));
		Ok(self)
	}

	pub fn contract_name_with(mut self, f: impl Fn(&MemberRef) -> String + Send + Sync + 'static) -> Self {
		self.contract_name = Some(Arc::new(f));
		self
	}

	pub fn contract_type(mut self, ty: TypeRef) -> Self {
		self.contract_type = Some(constant_type(ty));
		self
	}

	pub fn contract_type_with(mut self, f: impl Fn(&MemberRef) -> TypeRef + Send + Sync + 'static) -> Self {
		self.contract_type = Some(Arc::new(f));
		self
	}

	pub fn creation_policy(mut self, policy: CreationPolicy) -> Self {
		self.creation_policy = policy;
		self
	}

	pub fn members(mut self, selector: MemberSelector) -> Self {
		self.members = Some(selector);
		self
	}

	pub fn members_with(self, f: impl Fn(&TypeDef) -> Vec<MemberRef> + Send + Sync + 'static) -> Self {
		self.members(select::from_fn(f))
	}

	/// Selects the exact member `source` (`x => x.Member`, `x => new(..)`) names on `ty`.
	pub fn member_of(self, ty: &TypeDef, source: &str) -> Result<Self> {
		Ok(self.members(member_on(ty, source)?))
	}

	pub fn recomposable(mut self, recomposable: bool) -> Self {
		self.recomposable = recomposable;
		self
	}

	pub fn required_metadata(mut self, name: &str, ty: TypeRef) -> Result<Self> {
		self.required_metadata.push(RequiredMetadataItem::new(name, ty)?);
		Ok(self)
	}

	pub fn required_metadata_items(mut self, items: impl IntoIterator<Item = RequiredMetadataItem>) -> Self {
		self.required_metadata.extend(items);
		self
	}

	pub fn build(self) -> Result<ImportConvention> {
		let members = self.members.ok_or(ConventionError::MissingArgument("import members"))?;
		Ok(ImportConvention {
			allow_default_value: self.allow_default_value,
			contract_name: self.contract_name,
			contract_type: self.contract_type,
			creation_policy: self.creation_policy,
			members,
			recomposable: self.recomposable,
			required_metadata: self.required_metadata,
		})
	}
}
