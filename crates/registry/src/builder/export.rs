use std::sync::Arc;

use weft_primitives::{MemberRef, TypeDef, TypeRef};

use super::{member_on, supplied_metadata};
use crate::conventions::{
	ContractNameFn, ContractTypeFn, ExportConvention, MemberSelector, constant_name, constant_type,
};
use crate::error::{ConventionError, Result, non_empty};
use crate::metadata::{MetadataItem, MetadataValue};
use crate::select;

/// Builder for [`ExportConvention`].
#[derive(Default)]
pub struct ExportConventionBuilder {
	contract_name: Option<ContractNameFn>,
	contract_type: Option<ContractTypeFn>,
	members: Option<MemberSelector>,
	metadata: Vec<MetadataItem>,
}

impl ExportConventionBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Exports every selected member under `name`.
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

	pub fn members(mut self, selector: MemberSelector) -> Self {
		self.members = Some(selector);
		self
	}

	pub fn members_with(self, f: impl Fn(&TypeDef) -> Vec<MemberRef> + Send + Sync + 'static) -> Self {
		self.members(select::from_fn(f))
	}

	/// Selects the exact member `source` (`x => x.Member`) names on `ty`.
	pub fn member_of(self, ty: &TypeDef, source: &str) -> Result<Self> {
		Ok(self.members(member_on(ty, source)?))
	}

	pub fn metadata(mut self, name: &str, value: impl Into<MetadataValue>) -> Result<Self> {
		self.metadata.push(MetadataItem::new(name, value)?);
		Ok(self)
	}

	pub fn metadata_items(mut self, items: impl IntoIterator<Item = MetadataItem>) -> Self {
		self.metadata.extend(items);
		self
	}

	pub fn metadata_with(mut self, supplier: impl FnOnce() -> Option<Vec<MetadataItem>>) -> Result<Self> {
		self.metadata.extend(supplied_metadata(supplier)?);
		Ok(self)
	}

	pub fn build(self) -> Result<ExportConvention> {
		let members = self.members.ok_or(ConventionError::MissingArgument("export members"))?;
		Ok(ExportConvention {
			contract_name: self.contract_name,
			contract_type: self.contract_type,
			members,
			metadata: self.metadata,
		})
	}
}
