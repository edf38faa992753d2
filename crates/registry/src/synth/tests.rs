use std::sync::Arc;

use pretty_assertions::assert_eq;
use weft_primitives::{ParameterInfo, TypeDef, TypeRef, known};

use super::*;
use crate::builder::{ExportConventionBuilder, ImportConventionBuilder, PartConventionBuilder};
use crate::conventions::CreationPolicy;
use crate::definition::ImportCardinality;
use crate::error::ErrorKind;
use crate::naming::DefaultConventionContractService;
use crate::select;

fn foo() -> TypeDef {
	TypeDef::builder(TypeRef::class("Acme", "Foo"))
		.property("Name", known::string())
		.property("Tags", known::list_of(known::string()))
		.method("Render", Some(known::string()), vec![ParameterInfo::new("width", known::int32())])
		.constructor(vec![
			ParameterInfo::new("id", known::int32()),
			ParameterInfo::new("aliases", TypeRef::array_of(known::string())),
		])
		.build()
}

fn bar() -> TypeDef {
	TypeDef::builder(TypeRef::class("Acme", "Bar")).build()
}

fn foo_convention() -> PartConvention {
	PartConventionBuilder::new()
		.for_type(foo().shape().clone())
		.creation_policy(CreationPolicy::Shared)
		.export_with(|b| Ok(b.members(select::by_name("Name"))))
		.and_then(|b| b.import_with(|b| Ok(b.members(select::greediest_constructor()))))
		.and_then(|b| b.build())
		.expect("part convention")
}

#[test]
fn end_to_end_part() {
	let parts = PartSynthesizer::default()
		.parts_for(&foo_convention(), &[foo(), bar()])
		.expect("parts");
	assert_eq!(parts.len(), 1);

	let part = &parts[0];
	assert_eq!(part.part_type.identity(), "Acme.Foo");
	assert!(!part.is_generic());
	assert_eq!(part.creation_policy(), CreationPolicy::Shared);

	assert_eq!(part.exports.len(), 1);
	assert_eq!(part.exports[0].contract_name, "System.String");
	assert_eq!(part.exports[0].type_identity(), Some("System.String"));

	let cardinalities: Vec<ImportCardinality> = part.imports.iter().map(|i| i.cardinality).collect();
	assert_eq!(cardinalities, [ImportCardinality::ExactlyOne, ImportCardinality::ZeroOrMore]);
	let names: Vec<&str> = part.imports.iter().map(|i| i.contract_name.as_str()).collect();
	assert_eq!(names, ["System.Int32", "System.String[]"]);
	assert!(part.imports.iter().all(|i| i.is_prerequisite && !i.is_recomposable));
}

#[test]
fn definitions_are_rebuilt_but_structurally_equal() {
	let synth = PartSynthesizer::default();
	let first = synth.part(&foo_convention(), &foo()).expect("part");
	let second = synth.part(&foo_convention(), &foo()).expect("part");
	assert_eq!(first, second);
}

#[test]
fn declared_policy_metadata_cannot_mask_the_convention_policy() {
	let convention = PartConventionBuilder::new()
		.for_type(foo().shape().clone())
		.creation_policy(CreationPolicy::NonShared)
		.metadata(CREATION_POLICY_METADATA, "Shared")
		.and_then(|b| b.metadata("Owner", "billing"))
		.and_then(|b| b.build())
		.expect("part convention");
	let part = PartSynthesizer::default().part(&convention, &foo()).expect("part");

	assert_eq!(part.creation_policy(), CreationPolicy::NonShared);
	assert_eq!(
		part.metadata.get(CREATION_POLICY_METADATA),
		Some(&MetadataValue::Policy(CreationPolicy::NonShared))
	);
	assert_eq!(part.metadata.get("Owner"), Some(&MetadataValue::Str("billing".into())));
	assert_eq!(part.metadata.len(), 2);
}

#[test]
fn method_exports_use_the_signature_identity() {
	let export = ExportConventionBuilder::new()
		.members(select::by_name("Render"))
		.build()
		.expect("export convention");
	let exports = PartSynthesizer::default().exports(&export, &foo()).expect("exports");
	assert_eq!(exports.len(), 1);
	assert_eq!(exports[0].contract_name, "System.String(System.Int32)");
	assert_eq!(exports[0].type_identity(), Some("System.String(System.Int32)"));
}

#[test]
fn export_metadata_keeps_declared_items_and_identity() {
	let export = ExportConventionBuilder::new()
		.metadata("Format", "plain")
		.map(|b| b.members(select::by_name("Name")))
		.and_then(|b| b.build())
		.expect("export convention");
	let exports = PartSynthesizer::default().exports(&export, &foo()).expect("exports");
	let keys: Vec<&str> = exports[0].metadata.keys().map(String::as_str).collect();
	assert_eq!(keys, ["Format", "ExportTypeIdentity"]);
}

#[test]
fn constructor_parameters_ignore_member_settings() {
	let import = ImportConventionBuilder::new()
		.allow_default_value(true)
		.recomposable(true)
		.required_metadata("Lang", known::string())
		.map(|b| b.members(select::greediest_constructor()))
		.and_then(|b| b.build())
		.expect("import convention");
	let ty = foo();
	let ctor = ty.greediest_constructor().expect("ctor");
	let imports = PartSynthesizer::default()
		.imports(&import, &MemberRef::Constructor(ctor.clone()))
		.expect("imports");

	assert_eq!(imports.len(), ctor.info().parameters.len());
	for import in &imports {
		assert!(import.required_metadata.is_empty());
		assert!(!import.is_recomposable);
		assert_ne!(import.cardinality, ImportCardinality::ZeroOrOne);
	}
}

#[test]
fn member_imports_carry_convention_settings() {
	let import = ImportConventionBuilder::new()
		.allow_default_value(true)
		.recomposable(true)
		.creation_policy(CreationPolicy::NonShared)
		.required_metadata("Lang", known::string())
		.map(|b| b.members(select::by_name("Name")))
		.and_then(|b| b.build())
		.expect("import convention");
	let ty = foo();
	let name = MemberRef::Property(ty.property("Name").expect("property"));
	let imports = PartSynthesizer::default().imports(&import, &name).expect("imports");

	assert_eq!(imports.len(), 1);
	let import_def = &imports[0];
	assert_eq!(import_def.cardinality, ImportCardinality::ZeroOrOne);
	assert!(import_def.is_recomposable);
	assert!(!import_def.is_prerequisite);
	assert_eq!(import_def.required_metadata.len(), 1);
	assert_eq!(import_def.required_creation_policy, CreationPolicy::NonShared);
	assert_eq!(import_def.required_type_identity.as_deref(), Some("System.String"));
}

#[test]
fn object_contract_type_imports_anything() {
	let import = ImportConventionBuilder::new()
		.contract_type_with(|_| known::object())
		.members(select::by_name("Tags"))
		.build()
		.expect("import convention");
	let ty = foo();
	let tags = MemberRef::Property(ty.property("Tags").expect("property"));
	let imports = PartSynthesizer::default().imports(&import, &tags).expect("imports");
	assert_eq!(imports[0].required_type_identity, None);
	assert_eq!(imports[0].contract_name, known::OBJECT);
	assert_eq!(imports[0].cardinality, ImportCardinality::ZeroOrMore);
}

#[test]
fn importing_through_a_method_is_a_cardinality_mismatch() {
	let import = ImportConventionBuilder::new()
		.contract_name("render")
		.map(|b| b.members(select::by_name("Render")))
		.and_then(|b| b.build())
		.expect("import convention");
	let part = PartConventionBuilder::new()
		.condition(|_| true)
		.import(import)
		.build()
		.expect("part convention");
	let err = PartSynthesizer::default().part(&part, &foo()).expect_err("method import");
	assert_eq!(err.kind(), ErrorKind::CardinalityMismatch);
}

#[test]
fn synthesizer_uses_its_naming_service() {
	let default = crate::builder::TypeDefaultConventionBuilder::new()
		.for_type(known::string())
		.contract_name("Text")
		.and_then(|b| b.build())
		.expect("default");
	let naming = DefaultConventionContractService::new(crate::naming::ContractService).with_defaults([default]);
	let synth = PartSynthesizer::new(Arc::new(naming));
	let part = synth.part(&foo_convention(), &foo()).expect("part");
	assert_eq!(part.exports[0].contract_name, "Text");
}
