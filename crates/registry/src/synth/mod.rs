//! Turns (convention, type) pairs into host definitions.

mod cardinality;

use std::sync::Arc;

pub use cardinality::{is_collection, member_cardinality, parameter_cardinality};
use weft_primitives::{MemberRef, ParameterRef, TypeDef};

use crate::conventions::{ExportConvention, ImportConvention, PartConvention};
use crate::definition::{
	CREATION_POLICY_METADATA, EXPORT_TYPE_IDENTITY_METADATA, ExportDefinition, ImportDefinition, Metadata,
	PartDefinition,
};
use crate::error::Result;
use crate::metadata::MetadataValue;
use crate::naming::{ContractNaming, ContractService};

/// Synthesizes part, export and import definitions with one naming service.
#[derive(Clone)]
pub struct PartSynthesizer {
	naming: Arc<dyn ContractNaming>,
}

impl Default for PartSynthesizer {
	fn default() -> Self {
		Self::new(Arc::new(ContractService))
	}
}

impl PartSynthesizer {
	pub fn new(naming: Arc<dyn ContractNaming>) -> Self {
		Self { naming }
	}

	/// One part per type in `types` that satisfies the convention's condition.
	pub fn parts_for(&self, convention: &PartConvention, types: &[TypeDef]) -> Result<Vec<PartDefinition>> {
		types
			.iter()
			.filter(|ty| (convention.condition)(ty))
			.map(|ty| self.part(convention, ty))
			.collect()
	}

	pub fn part(&self, convention: &PartConvention, ty: &TypeDef) -> Result<PartDefinition> {
		let mut metadata = Metadata::default();
		for item in &convention.metadata {
			metadata.insert(item.name().to_string(), item.value().clone());
		}
		// The convention's policy wins over a declared item with the same key.
		metadata.insert(
			CREATION_POLICY_METADATA.to_string(),
			MetadataValue::Policy(convention.creation_policy),
		);

		let mut exports = Vec::new();
		for export in &convention.exports {
			exports.extend(self.exports(export, ty)?);
		}
		let mut imports = Vec::new();
		for import in &convention.imports {
			for member in (import.members)(ty)? {
				imports.extend(self.imports(import, &member)?);
			}
		}

		tracing::trace!(
			part = ty.identity(),
			exports = exports.len(),
			imports = imports.len(),
			"synthesized part"
		);
		Ok(PartDefinition {
			part_type: ty.clone(),
			metadata,
			exports,
			imports,
		})
	}

	/// Export definitions for every member `convention` selects on `ty`.
	pub fn exports(&self, convention: &ExportConvention, ty: &TypeDef) -> Result<Vec<ExportDefinition>> {
		(convention.members)(ty)?
			.iter()
			.map(|member| self.export(convention, member))
			.collect()
	}

	pub fn export(&self, convention: &ExportConvention, member: &MemberRef) -> Result<ExportDefinition> {
		let contract_name = self.naming.export_contract_name(convention, member)?;
		let type_identity = self.naming.export_type_identity(convention, member)?;

		let mut metadata = Metadata::default();
		for item in &convention.metadata {
			metadata.insert(item.name().to_string(), item.value().clone());
		}
		metadata.insert(
			EXPORT_TYPE_IDENTITY_METADATA.to_string(),
			MetadataValue::Str(type_identity),
		);

		Ok(ExportDefinition {
			member: member.clone(),
			contract_name,
			metadata,
		})
	}

	/// Import definitions for one selected member.
	///
	/// A constructor expands to one prerequisite import per parameter. Those
	/// ignore the convention's required metadata and default-value setting.
	pub fn imports(&self, convention: &ImportConvention, member: &MemberRef) -> Result<Vec<ImportDefinition>> {
		let Some(ctor) = member.as_constructor() else {
			return Ok(vec![self.member_import(convention, member)?]);
		};
		ctor.parameter_refs()
			.map(|parameter| self.parameter_import(convention, parameter))
			.collect()
	}

	fn member_import(&self, convention: &ImportConvention, member: &MemberRef) -> Result<ImportDefinition> {
		let cardinality = member_cardinality(member, convention.allow_default_value)?;
		Ok(ImportDefinition {
			member: member.clone(),
			contract_name: self.naming.import_contract_name(convention, member)?,
			required_type_identity: self.naming.import_type_identity(convention, member)?,
			required_metadata: convention.required_metadata.clone(),
			cardinality,
			is_recomposable: convention.recomposable,
			is_prerequisite: false,
			required_creation_policy: convention.creation_policy,
		})
	}

	fn parameter_import(&self, convention: &ImportConvention, parameter: ParameterRef) -> Result<ImportDefinition> {
		let cardinality = parameter_cardinality(&parameter.info().parameter_type);
		let member = MemberRef::Parameter(parameter);
		Ok(ImportDefinition {
			contract_name: self.naming.import_contract_name(convention, &member)?,
			required_type_identity: self.naming.import_type_identity(convention, &member)?,
			required_metadata: Vec::new(),
			cardinality,
			is_recomposable: false,
			is_prerequisite: true,
			required_creation_policy: convention.creation_policy,
			member,
		})
	}
}

#[cfg(test)]
mod tests;
