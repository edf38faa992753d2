//! End-to-end synthesis through registries and the catalog.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use thiserror as _;
use weft_primitives::{Assembly, ParameterInfo, TypeDef, TypeKind, TypeRef, known};
use weft_registry::{
	Activator, ConventionCatalog, ConventionRegistry, CreationPolicy, DirectoryScanner, ImportCardinality,
	PartRegistry, REGISTRY_CONTRACT, RegistryLocator, TypeList, select,
};

fn foo() -> TypeDef {
	TypeDef::builder(TypeRef::class("Acme", "Foo"))
		.property("Name", known::string())
		.constructor(vec![
			ParameterInfo::new("id", known::int32()),
			ParameterInfo::new("tags", TypeRef::array_of(known::string())),
		])
		.build()
}

fn logger() -> TypeDef {
	TypeDef::builder(
		TypeRef::builder(TypeKind::Class, "Acme", "ConsoleLogger")
			.public()
			.interface("Acme.ILogger")
			.build(),
	)
	.build()
}

fn foo_registry(scanned: Vec<TypeDef>) -> ConventionRegistry {
	let mut registry = ConventionRegistry::new("Acme.FooRegistry")
		.expect("registry")
		.with_scanner(Arc::new(TypeList::from_types(scanned)));
	registry
		.part(|p| {
			p.for_type(foo().shape().clone())
				.export_with(|e| Ok(e.members(select::by_name("Name"))))?
				.import_with(|i| Ok(i.members(select::greediest_constructor())))
		})
		.expect("part");
	registry
}

#[test]
fn foo_scenario() {
	let registry: Arc<dyn PartRegistry> = Arc::new(foo_registry(vec![foo()]));
	let catalog = ConventionCatalog::new(vec![registry]);
	let parts = catalog.parts().expect("parts");

	assert_eq!(parts.len(), 1);
	let part = &parts[0];
	assert_eq!(part.exports.len(), 1);
	assert_eq!(part.exports[0].contract_name, "System.String");
	assert_eq!(part.imports.len(), 2);
	assert_eq!(part.imports[0].cardinality, ImportCardinality::ExactlyOne);
	assert_eq!(part.imports[1].cardinality, ImportCardinality::ZeroOrMore);

	assert_eq!(catalog.parts().expect("parts"), parts);
}

#[test]
fn type_defaults_flow_into_the_catalog() {
	let mut registry = foo_registry(vec![foo()]);
	registry
		.type_default(|d| d.for_type(known::string()).contract_name("First"))
		.expect("default");
	registry
		.type_default(|d| d.for_type(known::string()).contract_name("Second"))
		.expect("default");
	let catalog = ConventionCatalog::new(vec![Arc::new(registry)]);

	assert_eq!(catalog.exports_matching("Second").expect("exports").len(), 1);
	assert!(catalog.exports_matching("First").expect("exports").is_empty());
	assert!(catalog.exports_matching("System.String").expect("exports").is_empty());
}

/// A seed registry scans a directory of assemblies; one of them holds a
/// further registry whose conventions export loggers.
#[test]
fn discovered_registries_contribute_parts() {
	let dir = tempfile::tempdir().expect("tempdir");
	let plugin_registry = TypeDef::builder(
		TypeRef::builder(TypeKind::Class, "Acme", "LoggingRegistry")
			.public()
			.interface(REGISTRY_CONTRACT)
			.build(),
	)
	.build();
	Assembly::new("Acme.Logging", vec![plugin_registry, logger()])
		.write(&dir.path().join("logging.weftasm"))
		.expect("write");
	Assembly::new("Acme.Core", vec![foo()])
		.write(&dir.path().join("core.weftasm"))
		.expect("write");

	let scanner = Arc::new(DirectoryScanner::new(dir.path()).expect("scan"));
	let seed = foo_registry(Vec::new()).with_scanner(scanner.clone());

	let mut activator = Activator::new();
	activator
		.register("Acme.LoggingRegistry", move || {
			let mut registry = ConventionRegistry::new("Acme.LoggingRegistry")?.with_scanner(scanner.clone());
			registry.part(|p| {
				p.implementing("Acme.ILogger")
					.creation_policy(CreationPolicy::Shared)
					.export_with(|e| Ok(e.contract_type(TypeRef::interface("Acme", "ILogger")).members(select::the_type())))
			})?;
			Ok(Arc::new(registry))
		})
		.expect("register");

	let catalog = ConventionCatalog::located(&RegistryLocator::new(activator), vec![Arc::new(seed)]).expect("locate");
	assert_eq!(catalog.registries().len(), 2);

	let loggers = catalog.exports_matching("Acme.ILogger").expect("exports");
	assert_eq!(loggers.len(), 1);
	assert_eq!(loggers[0].member.identity(), "Acme.ConsoleLogger");
	assert_eq!(loggers[0].type_identity(), Some("Acme.ILogger"));

	let parts = catalog.parts().expect("parts");
	let policies: Vec<(String, CreationPolicy)> = parts
		.iter()
		.map(|p| (p.part_type.identity().to_string(), p.creation_policy()))
		.collect();
	assert_eq!(
		policies,
		[
			("Acme.Foo".to_string(), CreationPolicy::Any),
			("Acme.ConsoleLogger".to_string(), CreationPolicy::Shared),
		]
	);
}
