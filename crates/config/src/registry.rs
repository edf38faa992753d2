//! Registries backed by configuration files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use weft_registry::{ContractNaming, ConventionRegistry, PartConvention, PartRegistry, TypeScanner};

use crate::error::{ConfigError, ConfigWarning, Result};
use crate::parse::{ParsedConventions, parse_conventions_str};
use crate::resolve::TypeResolver;

/// Registry type identity reported by [`ConfigRegistry`].
pub const CONFIG_REGISTRY_TYPE: &str = "Weft.Config.ConfigRegistry";

/// A [`PartRegistry`] whose conventions come from a KDL document.
///
/// The resolver's scanner, if any, supplies the candidate types.
#[derive(Debug, Clone)]
pub struct ConfigRegistry {
	inner: ConventionRegistry,
	source: Option<PathBuf>,
	warnings: Vec<ConfigWarning>,
}

impl ConfigRegistry {
	pub fn from_parsed(parsed: ParsedConventions, resolver: &TypeResolver) -> Result<Self> {
		let mut inner = ConventionRegistry::new(CONFIG_REGISTRY_TYPE)?;
		if let Some(scanner) = resolver.scanner() {
			inner.set_scanner(scanner);
		}
		for default in parsed.defaults {
			inner.add_default(default);
		}
		for part in parsed.parts {
			inner.add(part);
		}
		Ok(Self {
			inner,
			source: None,
			warnings: parsed.warnings,
		})
	}

	pub fn parse(input: &str, resolver: &TypeResolver) -> Result<Self> {
		Self::from_parsed(parse_conventions_str(input, resolver)?, resolver)
	}

	/// File this registry was loaded from.
	pub fn source(&self) -> Option<&Path> {
		self.source.as_deref()
	}

	pub fn warnings(&self) -> &[ConfigWarning] {
		&self.warnings
	}
}

impl PartRegistry for ConfigRegistry {
	fn registry_type(&self) -> &str {
		self.inner.registry_type()
	}

	fn contract_naming(&self) -> Arc<dyn ContractNaming> {
		self.inner.contract_naming()
	}

	fn type_scanner(&self) -> Option<Arc<dyn TypeScanner>> {
		self.inner.type_scanner()
	}

	fn conventions(&self) -> Vec<PartConvention> {
		self.inner.conventions()
	}
}

/// Load a convention file into a registry.
pub fn load_conventions(path: impl AsRef<Path>, resolver: &TypeResolver) -> Result<ConfigRegistry> {
	let path = path.as_ref();
	let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
		path: path.to_path_buf(),
		error: e,
	})?;
	let mut registry = ConfigRegistry::parse(&content, resolver)?;
	tracing::debug!(
		path = %path.display(),
		conventions = registry.inner.conventions().len(),
		defaults = registry.inner.naming().defaults().len(),
		warnings = registry.warnings.len(),
		"loaded conventions"
	);
	registry.source = Some(path.to_path_buf());
	Ok(registry)
}
