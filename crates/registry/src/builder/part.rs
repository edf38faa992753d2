use std::sync::Arc;

use weft_primitives::{TypeDef, TypeRef};

use super::{ExportConventionBuilder, ImportConventionBuilder, supplied_metadata};
use crate::conventions::{CreationPolicy, ExportConvention, ImportConvention, PartConvention, TypePredicate};
use crate::error::{ConventionError, Result};
use crate::metadata::{MetadataItem, MetadataValue};

/// Builder for [`PartConvention`].
#[derive(Default)]
pub struct PartConventionBuilder {
	condition: Option<TypePredicate>,
	creation_policy: CreationPolicy,
	exports: Vec<ExportConvention>,
	imports: Vec<ImportConvention>,
	metadata: Vec<MetadataItem>,
}

impl PartConventionBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn condition(mut self, predicate: impl Fn(&TypeDef) -> bool + Send + Sync + 'static) -> Self {
		self.condition = Some(Arc::new(predicate));
		self
	}

	/// Applies to exactly `ty`.
	pub fn for_type(self, ty: TypeRef) -> Self {
		self.condition(move |candidate| candidate.shape() == &ty)
	}

	/// Applies to types implementing the interface with `identity`.
	pub fn implementing(self, identity: &str) -> Self {
		let identity = identity.to_string();
		self.condition(move |candidate| candidate.shape().implements(&identity))
	}

	pub fn creation_policy(mut self, policy: CreationPolicy) -> Self {
		self.creation_policy = policy;
		self
	}

	pub fn export(mut self, convention: ExportConvention) -> Self {
		self.exports.push(convention);
		self
	}

	/// Builds an export convention in place and appends it.
	pub fn export_with(
		self,
		f: impl FnOnce(ExportConventionBuilder) -> Result<ExportConventionBuilder>,
	) -> Result<Self> {
		let convention = f(ExportConventionBuilder::new())?.build()?;
		Ok(self.export(convention))
	}

	pub fn exports(mut self, conventions: impl IntoIterator<Item = ExportConvention>) -> Self {
		self.exports.extend(conventions);
		self
	}

	pub fn import(mut self, convention: ImportConvention) -> Self {
		self.imports.push(convention);
		self
	}

	/// Builds an import convention in place and appends it.
	pub fn import_with(
		self,
		f: impl FnOnce(ImportConventionBuilder) -> Result<ImportConventionBuilder>,
	) -> Result<Self> {
		let convention = f(ImportConventionBuilder::new())?.build()?;
		Ok(self.import(convention))
	}

	pub fn imports(mut self, conventions: impl IntoIterator<Item = ImportConvention>) -> Self {
		self.imports.extend(conventions);
		self
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

	pub fn build(self) -> Result<PartConvention> {
		let condition = self.condition.ok_or(ConventionError::MissingArgument("part condition"))?;
		Ok(PartConvention {
			condition,
			creation_policy: self.creation_policy,
			exports: self.exports,
			imports: self.imports,
			metadata: self.metadata,
		})
	}
}
