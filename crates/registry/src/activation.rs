//! Instantiating registry types found during discovery.
//!
//! Rust cannot construct a type from its description, so every discoverable
//! registry type needs a factory keyed by its type identity. Factories are
//! registered on an [`Activator`] directly or, with the `plugins` feature,
//! submitted anywhere in the program as [`RegistryFactory`] items:
//!
//! ```ignore
//! inventory::submit! {
//! 	RegistryFactory::new("Acme.Plugins.Registry", || {
//! 		Ok(Arc::new(ConventionRegistry::new("Acme.Plugins.Registry")?))
//! 	})
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use weft_primitives::TypeDef;

use crate::error::{ConventionError, Result, non_empty};
use crate::registry::PartRegistry;

type Factory = Arc<dyn Fn() -> Result<Arc<dyn PartRegistry>> + Send + Sync>;

/// Statically submitted registry factory.
pub struct RegistryFactory {
	/// Identity of the registry type this factory creates.
	pub type_identity: &'static str,
	pub create: fn() -> Result<Arc<dyn PartRegistry>>,
}

impl RegistryFactory {
	pub const fn new(type_identity: &'static str, create: fn() -> Result<Arc<dyn PartRegistry>>) -> Self {
		Self { type_identity, create }
	}
}

#[cfg(feature = "plugins")]
inventory::collect!(RegistryFactory);

/// Maps registry type identities to factories.
#[derive(Clone, Default)]
pub struct Activator {
	factories: FxHashMap<String, Factory>,
}

impl Activator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers (or replaces) the factory for `type_identity`.
	pub fn register(
		&mut self,
		type_identity: &str,
		factory: impl Fn() -> Result<Arc<dyn PartRegistry>> + Send + Sync + 'static,
	) -> Result<()> {
		let key = non_empty(type_identity, "registry type identity")?;
		self.factories.insert(key, Arc::new(factory));
		Ok(())
	}

	pub fn register_factory(&mut self, factory: &RegistryFactory) -> Result<()> {
		self.register(factory.type_identity, factory.create)
	}

	/// Adds every [`RegistryFactory`] submitted through `inventory`.
	#[cfg(feature = "plugins")]
	pub fn with_plugins(mut self) -> Result<Self> {
		let mut factories: Vec<&'static RegistryFactory> = inventory::iter::<RegistryFactory>.into_iter().collect();
		factories.sort_by(|a, b| a.type_identity.cmp(b.type_identity));
		for factory in factories {
			self.register_factory(factory)?;
		}
		tracing::debug!(factories = self.factories.len(), "collected registry factories");
		Ok(self)
	}

	pub fn knows(&self, type_identity: &str) -> bool {
		self.factories.contains_key(type_identity)
	}

	/// Creates the registry `ty` describes.
	pub fn activate(&self, ty: &TypeDef) -> Result<Arc<dyn PartRegistry>> {
		let factory = self
			.factories
			.get(ty.identity())
			.ok_or_else(|| ConventionError::NoFactory(ty.identity().to_string()))?;
		factory().map_err(|err| ConventionError::ActivationFailed {
			type_identity: ty.identity().to_string(),
			reason: err.to_string(),
		})
	}
}

impl fmt::Debug for Activator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut keys: Vec<&str> = self.factories.keys().map(String::as_str).collect();
		keys.sort_unstable();
		f.debug_struct("Activator").field("factories", &keys).finish()
	}
}
