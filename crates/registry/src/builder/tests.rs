use pretty_assertions::assert_eq;
use weft_primitives::{MemberRef, ParameterInfo, TypeDef, TypeRef, known};

use super::*;
use crate::conventions::CreationPolicy;
use crate::error::ErrorKind;
use crate::metadata::{MetadataItem, MetadataValue, RequiredMetadataItem};
use crate::select;

fn invoice() -> TypeDef {
	TypeDef::builder(TypeRef::class("Acme.Billing", "Invoice"))
		.property("Total", known::int64())
		.constructor(vec![ParameterInfo::new("currency", known::string())])
		.build()
}

fn names(items: &[MetadataItem]) -> Vec<&str> {
	items.iter().map(MetadataItem::name).collect()
}

/// Scalars keep the last value set; metadata keeps every call in order.
#[test]
fn export_builder_round_trips() {
	let ty = invoice();
	let export = ExportConventionBuilder::new()
		.contract_name("first")
		.and_then(|b| b.contract_name("second"))
		.and_then(|b| b.metadata("A", 1))
		.map(|b| b.metadata_items([MetadataItem::new("B", true).expect("valid")]))
		.and_then(|b| b.metadata_with(|| Some(vec![MetadataItem::new("C", "c").expect("valid")])))
		.map(|b| b.members(select::the_type()))
		.and_then(|b| b.build())
		.expect("export convention");

	let member = MemberRef::Type(ty);
	let name = export.contract_name.as_ref().map(|f| f(&member));
	assert_eq!(name.as_deref(), Some("second"));
	assert!(export.contract_type.is_none());
	assert_eq!(names(&export.metadata), ["A", "B", "C"]);
	assert_eq!(export.metadata[0].value(), &MetadataValue::Int(1));
}

#[test]
fn import_builder_round_trips() {
	let import = ImportConventionBuilder::new()
		.allow_default_value(true)
		.recomposable(true)
		.creation_policy(CreationPolicy::Shared)
		.creation_policy(CreationPolicy::NonShared)
		.contract_type(known::string())
		.required_metadata("Lang", known::string())
		.map(|b| b.required_metadata_items([RequiredMetadataItem::new("Rank", known::int32()).expect("valid")]))
		.map(|b| b.members(select::greediest_constructor()))
		.and_then(|b| b.build())
		.expect("import convention");

	assert!(import.allow_default_value);
	assert!(import.recomposable);
	assert_eq!(import.creation_policy, CreationPolicy::NonShared);
	let required: Vec<&str> = import.required_metadata.iter().map(RequiredMetadataItem::name).collect();
	assert_eq!(required, ["Lang", "Rank"]);
	let ty = import.contract_type.as_ref().map(|f| f(&MemberRef::Type(invoice())));
	assert_eq!(ty, Some(known::string()));
}

#[test]
fn part_builder_appends_exports_and_imports() -> crate::error::Result<()> {
	let first = ExportConventionBuilder::new()
		.metadata("Order", 1)?
		.members(select::the_type())
		.build()?;
	let second = ExportConventionBuilder::new()
		.metadata("Order", 2)?
		.members(select::the_type())
		.build()?;

	let part = PartConventionBuilder::new()
		.for_type(invoice().shape().clone())
		.export(first)
		.exports([second])
		.export_with(|b| Ok(b.metadata("Order", 3)?.members(select::the_type())))?
		.import_with(|b| Ok(b.members(select::greediest_constructor())))?
		.creation_policy(CreationPolicy::Shared)
		.metadata("Owner", "billing")?
		.build()?;

	let order: Vec<&MetadataValue> = part.exports.iter().map(|e| e.metadata[0].value()).collect();
	assert_eq!(order, [&MetadataValue::Int(1), &MetadataValue::Int(2), &MetadataValue::Int(3)]);
	assert_eq!(part.imports.len(), 1);
	assert_eq!(part.creation_policy, CreationPolicy::Shared);
	assert!((part.condition)(&invoice()));
	assert!(!(part.condition)(&TypeDef::builder(TypeRef::class("Acme", "Other")).build()));
	Ok(())
}

#[test]
fn member_of_resolves_the_exact_member() {
	let ty = invoice();
	let import = ImportConventionBuilder::new()
		.member_of(&ty, "x => new(System.String)")
		.and_then(|b| b.build())
		.expect("import convention");
	let members = (import.members)(&ty).expect("select");
	assert_eq!(members.len(), 1);
	assert_eq!(members[0].identity(), "Acme.Billing.Invoice..ctor(System.String)");

	let err = ExportConventionBuilder::new()
		.member_of(&ty, "x => x.Missing")
		.err()
		.map(|e| e.kind());
	assert_eq!(err, Some(ErrorKind::InvalidArgument));
}

#[test]
fn validation_failures_use_the_right_kind() {
	let missing = ExportConventionBuilder::new().build().err().map(|e| e.kind());
	assert_eq!(missing, Some(ErrorKind::InvalidArgument));

	let missing = PartConventionBuilder::new().build().err().map(|e| e.kind());
	assert_eq!(missing, Some(ErrorKind::InvalidArgument));

	let empty = ImportConventionBuilder::new().contract_name("").err().map(|e| e.kind());
	assert_eq!(empty, Some(ErrorKind::InvalidRange));

	let supplier = PartConventionBuilder::new().metadata_with(|| None).err().map(|e| e.kind());
	assert_eq!(supplier, Some(ErrorKind::InvalidOperation));

	let target = TypeDefaultConventionBuilder::new().build().err().map(|e| e.kind());
	assert_eq!(target, Some(ErrorKind::InvalidArgument));
}

#[test]
fn type_default_builder_round_trips() {
	let default = TypeDefaultConventionBuilder::new()
		.for_type(known::string())
		.contract_name("Text")
		.map(|b| b.contract_type(known::object()))
		.and_then(|b| b.build())
		.expect("default convention");
	assert_eq!(default.target_type, known::string());
	assert_eq!(default.contract_name.as_deref(), Some("Text"));
	assert_eq!(default.contract_type, Some(known::object()));
}
