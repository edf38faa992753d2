//! Registries: named bundles of part conventions and the types they apply to.

use std::fmt;
use std::sync::Arc;

use crate::builder::{PartConventionBuilder, TypeDefaultConventionBuilder};
use crate::conventions::{PartConvention, TypeDefaultConvention};
use crate::error::{Result, non_empty};
use crate::naming::{ContractNaming, DefaultConventionContractService};
use crate::scanner::TypeScanner;

/// Identity of the interface discoverable registry types implement.
pub const REGISTRY_CONTRACT: &str = "Weft.Composition.IPartRegistry";

/// Source of part conventions.
pub trait PartRegistry: Send + Sync {
	/// Type identity of the concrete registry type.
	fn registry_type(&self) -> &str;

	/// Naming service applied to this registry's conventions.
	fn contract_naming(&self) -> Arc<dyn ContractNaming>;

	/// Types the conventions apply to, also scanned for further registries.
	fn type_scanner(&self) -> Option<Arc<dyn TypeScanner>>;

	fn conventions(&self) -> Vec<PartConvention>;
}

/// In-memory [`PartRegistry`] populated through builders.
#[derive(Clone)]
pub struct ConventionRegistry {
	registry_type: String,
	naming: DefaultConventionContractService,
	scanner: Option<Arc<dyn TypeScanner>>,
	conventions: Vec<PartConvention>,
}

impl ConventionRegistry {
	pub fn new(registry_type: &str) -> Result<Self> {
		Ok(Self {
			registry_type: non_empty(registry_type, "registry type")?,
			naming: DefaultConventionContractService::default(),
			scanner: None,
			conventions: Vec::new(),
		})
	}

	pub fn with_scanner(mut self, scanner: Arc<dyn TypeScanner>) -> Self {
		self.scanner = Some(scanner);
		self
	}

	pub fn set_scanner(&mut self, scanner: Arc<dyn TypeScanner>) {
		self.scanner = Some(scanner);
	}

	pub fn add(&mut self, convention: PartConvention) {
		self.conventions.push(convention);
	}

	/// Builds a part convention in place and registers it.
	pub fn part(&mut self, f: impl FnOnce(PartConventionBuilder) -> Result<PartConventionBuilder>) -> Result<()> {
		let convention = f(PartConventionBuilder::new())?.build()?;
		self.add(convention);
		Ok(())
	}

	pub fn add_default(&mut self, default: TypeDefaultConvention) {
		self.naming.add_default(default);
	}

	/// Builds a type-default convention in place and registers it.
	pub fn type_default(
		&mut self,
		f: impl FnOnce(TypeDefaultConventionBuilder) -> Result<TypeDefaultConventionBuilder>,
	) -> Result<()> {
		let default = f(TypeDefaultConventionBuilder::new())?.build()?;
		self.add_default(default);
		Ok(())
	}

	pub fn naming(&self) -> &DefaultConventionContractService {
		&self.naming
	}
}

impl PartRegistry for ConventionRegistry {
	fn registry_type(&self) -> &str {
		&self.registry_type
	}

	fn contract_naming(&self) -> Arc<dyn ContractNaming> {
		Arc::new(self.naming.clone())
	}

	fn type_scanner(&self) -> Option<Arc<dyn TypeScanner>> {
		self.scanner.clone()
	}

	fn conventions(&self) -> Vec<PartConvention> {
		self.conventions.clone()
	}
}

impl fmt::Debug for ConventionRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ConventionRegistry")
			.field("registry_type", &self.registry_type)
			.field("defaults", &self.naming.defaults().len())
			.field("scanner", &self.scanner.is_some())
			.field("conventions", &self.conventions.len())
			.finish()
	}
}
