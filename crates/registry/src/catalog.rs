//! Catalog view over registries: the definitions the host consumes.

use std::sync::Arc;

use crate::definition::{ExportDefinition, PartDefinition};
use crate::error::Result;
use crate::locator::RegistryLocator;
use crate::registry::PartRegistry;
use crate::synth::PartSynthesizer;

/// Parts synthesized from a set of registries.
///
/// Nothing is cached: each query rescans candidate types once per registry
/// and rebuilds every definition.
#[derive(Clone, Default)]
pub struct ConventionCatalog {
	registries: Vec<Arc<dyn PartRegistry>>,
}

impl ConventionCatalog {
	pub fn new(registries: Vec<Arc<dyn PartRegistry>>) -> Self {
		Self { registries }
	}

	/// Catalog over `seeds` and everything `locator` discovers from them.
	pub fn located(locator: &RegistryLocator, seeds: Vec<Arc<dyn PartRegistry>>) -> Result<Self> {
		Ok(Self::new(locator.locate(seeds)?))
	}

	pub fn registries(&self) -> &[Arc<dyn PartRegistry>] {
		&self.registries
	}

	pub fn parts(&self) -> Result<Vec<PartDefinition>> {
		let mut parts = Vec::new();
		for registry in &self.registries {
			let Some(scanner) = registry.type_scanner() else {
				tracing::trace!(registry = registry.registry_type(), "registry has no scanner");
				continue;
			};
			let types = scanner.types(&|_| true);
			let synth = PartSynthesizer::new(registry.contract_naming());
			let before = parts.len();
			for convention in registry.conventions() {
				parts.extend(synth.parts_for(&convention, &types)?);
			}
			tracing::debug!(
				registry = registry.registry_type(),
				types = types.len(),
				parts = parts.len() - before,
				"synthesized parts"
			);
		}
		Ok(parts)
	}

	/// Every synthesized export whose contract name is `contract_name`.
	pub fn exports_matching(&self, contract_name: &str) -> Result<Vec<ExportDefinition>> {
		Ok(self
			.parts()?
			.into_iter()
			.flat_map(|part| part.exports)
			.filter(|export| export.contract_name == contract_name)
			.collect())
	}
}
