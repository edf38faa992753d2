//! Discovery of registries through the type scanners of known registries.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use weft_primitives::TypeDef;

use crate::activation::Activator;
use crate::error::Result;
use crate::registry::{PartRegistry, REGISTRY_CONTRACT};

/// Finds registries reachable from a seed set.
///
/// Each round scans every known registry for public registry types with a
/// default constructor that are not known yet, and activates them. The walk
/// ends on the first round that finds nothing new; each registry type is
/// activated at most once, so cyclic discovery graphs terminate.
#[derive(Debug, Clone, Default)]
pub struct RegistryLocator {
	activator: Activator,
}

fn is_registry_candidate(ty: &TypeDef) -> bool {
	ty.is_public() && ty.shape().implements(REGISTRY_CONTRACT) && ty.default_constructor().is_some()
}

impl RegistryLocator {
	pub fn new(activator: Activator) -> Self {
		Self { activator }
	}

	pub fn activator(&self) -> &Activator {
		&self.activator
	}

	/// Returns the seeds followed by every registry discovered from them.
	///
	/// A failing activation aborts the walk.
	pub fn locate(&self, seeds: Vec<Arc<dyn PartRegistry>>) -> Result<Vec<Arc<dyn PartRegistry>>> {
		let mut known = seeds;
		let mut known_types: FxHashSet<String> = known.iter().map(|r| r.registry_type().to_string()).collect();

		for round in 1.. {
			let mut discovered = Vec::new();
			for registry in &known {
				let Some(scanner) = registry.type_scanner() else {
					continue;
				};
				for ty in scanner.types(&is_registry_candidate) {
					if !known_types.contains(ty.identity()) && !discovered.contains(&ty) {
						discovered.push(ty);
					}
				}
			}

			if discovered.is_empty() {
				tracing::debug!(rounds = round, registries = known.len(), "registry discovery settled");
				break;
			}
			tracing::debug!(round, found = discovered.len(), "discovered registries");

			for ty in discovered {
				let registry = self.activator.activate(&ty)?;
				known_types.insert(ty.identity().to_string());
				known_types.insert(registry.registry_type().to_string());
				known.push(registry);
			}
		}
		Ok(known)
	}
}
