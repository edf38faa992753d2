//! Convention-driven composition metadata.
//!
//! Instead of annotating every type with its exports and imports, callers
//! register *conventions*: a predicate choosing the types that become parts,
//! selectors choosing the members that export or import, and optional
//! contract overrides. Given candidate types from a [`TypeScanner`], the
//! [`PartSynthesizer`] derives the same part, export and import definitions
//! the host would derive from attributes.
//!
//! # Flow
//!
//! 1. [`RegistryLocator`] expands a seed set of registries to everything
//!    reachable through their scanners.
//! 2. Each registry pairs its [`PartConvention`]s with its scanner's types.
//! 3. [`naming`] derives contract names and type identities per member.
//! 4. [`ConventionCatalog`] hands the resulting [`PartDefinition`]s to the host.

/// Instantiating discovered registry types.
pub mod activation;
/// Fluent builders for conventions.
pub mod builder;
/// Catalog of synthesized parts.
pub mod catalog;
/// Convention records and their function types.
pub mod conventions;
/// Definitions consumed by the composition host.
pub mod definition;
/// Error types.
pub mod error;
/// Recursive registry discovery.
pub mod locator;
/// Metadata items and metadata constraints.
pub mod metadata;
/// Contract name and type identity derivation.
pub mod naming;
/// Registries of part conventions.
pub mod registry;
/// Type scanners.
pub mod scanner;
/// Member selectors.
pub mod select;
/// Part, export and import synthesis.
pub mod synth;

pub use activation::{Activator, RegistryFactory};
pub use builder::{
	ExportConventionBuilder, ImportConventionBuilder, PartConventionBuilder, TypeDefaultConventionBuilder,
};
pub use catalog::ConventionCatalog;
pub use conventions::{
	ContractNameFn, ContractSource, ContractTypeFn, CreationPolicy, ExportConvention, ImportConvention,
	MemberSelector, PartConvention, TypeDefaultConvention, TypePredicate,
};
pub use definition::{
	CREATION_POLICY_METADATA, EXPORT_TYPE_IDENTITY_METADATA, ExportDefinition, ImportCardinality,
	ImportDefinition, Metadata, PartDefinition,
};
pub use error::{ConventionError, ErrorKind, Result};
pub use locator::RegistryLocator;
pub use metadata::{MetadataItem, MetadataValue, RequiredMetadataItem};
pub use naming::{ContractNaming, ContractService, DefaultConventionContractService};
pub use registry::{ConventionRegistry, PartRegistry, REGISTRY_CONTRACT};
pub use scanner::{AggregateScanner, AssemblyScanner, DirectoryScanner, TypeList, TypeScanner};
pub use synth::PartSynthesizer;
