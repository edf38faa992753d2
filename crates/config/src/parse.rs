//! KDL nodes to convention objects.

use kdl::{KdlDocument, KdlNode, KdlValue};
use weft_primitives::{ExprError, MemberExpr, MemberRef, TypeDef, TypeRef, inspect};
use weft_registry::{
	CreationPolicy, ExportConvention, ExportConventionBuilder, ImportConvention, ImportConventionBuilder,
	MetadataItem, MetadataValue, PartConvention, PartConventionBuilder, RequiredMetadataItem,
	TypeDefaultConvention, TypeDefaultConventionBuilder, select,
};

use crate::error::{ConfigError, ConfigWarning, Result};
use crate::resolve::TypeResolver;

/// Conventions read from one document.
#[derive(Debug, Clone, Default)]
pub struct ParsedConventions {
	pub parts: Vec<PartConvention>,
	/// Type-default conventions, in document order.
	pub defaults: Vec<TypeDefaultConvention>,
	/// Non-fatal warnings encountered during parsing.
	pub warnings: Vec<ConfigWarning>,
}

/// Parses `part` and `default` nodes from a KDL string.
///
/// Unknown nodes and attributes are collected as warnings; anything that
/// would produce a broken convention is an error.
pub fn parse_conventions_str(input: &str, resolver: &TypeResolver) -> Result<ParsedConventions> {
	let doc: KdlDocument = input.parse()?;
	let mut parsed = ParsedConventions::default();

	for node in doc.nodes() {
		match node.name().value() {
			"part" => {
				let part = parse_part(node, resolver, &mut parsed.warnings)?;
				parsed.parts.push(part);
			}
			"default" => {
				let default = parse_default(node, resolver, &mut parsed.warnings)?;
				parsed.defaults.push(default);
			}
			other => parsed.warnings.push(ConfigWarning::UnknownNode {
				node: other.to_string(),
				parent: "document",
			}),
		}
	}
	Ok(parsed)
}

fn parse_part(node: &KdlNode, resolver: &TypeResolver, warnings: &mut Vec<ConfigWarning>) -> Result<PartConvention> {
	check_attributes(node, "part", &["type", "creation-policy"], warnings);
	let type_name = required_str(node, "part", "type")?;
	let ty = resolver
		.resolve_def(&type_name)
		.ok_or(ConfigError::UnknownType(type_name))?;

	let mut builder = PartConventionBuilder::new().for_type(ty.shape().clone());
	if let Some(policy) = optional_str(node, "creation-policy") {
		builder = builder.creation_policy(parse_policy(&policy)?);
	}

	for child in children(node) {
		match child.name().value() {
			"metadata" => builder = builder.metadata_items([parse_metadata(child, warnings)?]),
			"export" => builder = builder.export(parse_export(child, &ty, resolver, warnings)?),
			"import" => builder = builder.import(parse_import(child, &ty, resolver, warnings)?),
			other => warnings.push(ConfigWarning::UnknownNode {
				node: other.to_string(),
				parent: "part",
			}),
		}
	}
	Ok(builder.build()?)
}

fn parse_export(
	node: &KdlNode,
	ty: &TypeDef,
	resolver: &TypeResolver,
	warnings: &mut Vec<ConfigWarning>,
) -> Result<ExportConvention> {
	check_attributes(node, "export", &["member", "contract-name", "contract-type"], warnings);
	let member = parse_member(ty, &required_str(node, "export", "member")?)?;

	let mut builder = ExportConventionBuilder::new().members(select::fixed(member));
	if let Some(name) = optional_str(node, "contract-name") {
		builder = builder.contract_name(&name)?;
	}
	if let Some(contract_type) = optional_type(node, "contract-type", resolver)? {
		builder = builder.contract_type(contract_type);
	}

	for child in children(node) {
		match child.name().value() {
			"metadata" => builder = builder.metadata_items([parse_metadata(child, warnings)?]),
			other => warnings.push(ConfigWarning::UnknownNode {
				node: other.to_string(),
				parent: "export",
			}),
		}
	}
	Ok(builder.build()?)
}

fn parse_import(
	node: &KdlNode,
	ty: &TypeDef,
	resolver: &TypeResolver,
	warnings: &mut Vec<ConfigWarning>,
) -> Result<ImportConvention> {
	check_attributes(
		node,
		"import",
		&[
			"member",
			"contract-name",
			"contract-type",
			"allow-default",
			"recomposable",
			"creation-policy",
		],
		warnings,
	);
	let member = parse_member(ty, &required_str(node, "import", "member")?)?;

	let mut builder = ImportConventionBuilder::new().members(select::fixed(member));
	if let Some(name) = optional_str(node, "contract-name") {
		builder = builder.contract_name(&name)?;
	}
	if let Some(contract_type) = optional_type(node, "contract-type", resolver)? {
		builder = builder.contract_type(contract_type);
	}
	if let Some(allow) = optional_bool(node, "import", "allow-default")? {
		builder = builder.allow_default_value(allow);
	}
	if let Some(recomposable) = optional_bool(node, "import", "recomposable")? {
		builder = builder.recomposable(recomposable);
	}
	if let Some(policy) = optional_str(node, "creation-policy") {
		builder = builder.creation_policy(parse_policy(&policy)?);
	}

	for child in children(node) {
		match child.name().value() {
			"required-metadata" => {
				check_attributes(child, "required-metadata", &["name", "type"], warnings);
				let name = required_str(child, "required-metadata", "name")?;
				let type_name = required_str(child, "required-metadata", "type")?;
				let required_type = resolver
					.resolve_type(&type_name)
					.ok_or(ConfigError::UnknownType(type_name))?;
				builder = builder.required_metadata_items([RequiredMetadataItem::new(&name, required_type)?]);
			}
			other => warnings.push(ConfigWarning::UnknownNode {
				node: other.to_string(),
				parent: "import",
			}),
		}
	}
	Ok(builder.build()?)
}

fn parse_default(
	node: &KdlNode,
	resolver: &TypeResolver,
	warnings: &mut Vec<ConfigWarning>,
) -> Result<TypeDefaultConvention> {
	check_attributes(node, "default", &["type", "contract-name", "contract-type"], warnings);
	let type_name = required_str(node, "default", "type")?;
	let target = resolver
		.resolve_type(&type_name)
		.ok_or(ConfigError::UnknownType(type_name))?;

	let mut builder = TypeDefaultConventionBuilder::new().for_type(target);
	if let Some(name) = optional_str(node, "contract-name") {
		builder = builder.contract_name(&name)?;
	}
	if let Some(contract_type) = optional_type(node, "contract-type", resolver)? {
		builder = builder.contract_type(contract_type);
	}
	Ok(builder.build()?)
}

fn parse_metadata(node: &KdlNode, warnings: &mut Vec<ConfigWarning>) -> Result<MetadataItem> {
	check_attributes(node, "metadata", &["name", "value"], warnings);
	let name = required_str(node, "metadata", "name")?;
	let value = node
		.get("value")
		.ok_or_else(|| ConfigError::MissingField("metadata value".to_string()))?;
	Ok(MetadataItem::new(&name, metadata_value(value)?)?)
}

fn metadata_value(value: &KdlValue) -> Result<MetadataValue> {
	let invalid = || ConfigError::InvalidValue {
		node: "metadata",
		attribute: "value",
	};
	if let Some(s) = value.as_string() {
		return Ok(MetadataValue::Str(s.to_string()));
	}
	if let Some(b) = value.as_bool() {
		return Ok(MetadataValue::Bool(b));
	}
	if let Some(i) = value.as_integer() {
		return i64::try_from(i).map(MetadataValue::Int).map_err(|_| invalid());
	}
	if value.is_null() {
		return Ok(MetadataValue::Null);
	}
	Err(invalid())
}

/// Resolves a member selector against the part type.
///
/// `.type` is the type itself, `.ctor` the public constructor with the most
/// parameters, anything containing `=>` a member expression, and any other
/// string a property, field or unique method name.
fn parse_member(ty: &TypeDef, selector: &str) -> Result<MemberRef> {
	let unknown = || ConfigError::UnknownMember {
		type_identity: ty.identity().to_string(),
		selector: selector.to_string(),
	};
	match selector {
		".type" => Ok(MemberRef::Type(ty.clone())),
		".ctor" => ty.greediest_constructor().map(MemberRef::Constructor).ok_or_else(unknown),
		lambda if lambda.contains("=>") => Ok(inspect(ty, lambda)?),
		name => MemberExpr::Member(name.to_string())
			.resolve(ty)
			.map_err(|e| match e {
				ExprError::MemberNotFound { .. } => unknown(),
				other => ConfigError::Expr(other),
			}),
	}
}

fn parse_policy(value: &str) -> Result<CreationPolicy> {
	match value {
		"any" => Ok(CreationPolicy::Any),
		"shared" => Ok(CreationPolicy::Shared),
		"non-shared" => Ok(CreationPolicy::NonShared),
		other => Err(ConfigError::InvalidPolicy(other.to_string())),
	}
}

fn children(node: &KdlNode) -> impl Iterator<Item = &KdlNode> {
	node.children().map(|doc| doc.nodes()).unwrap_or_default().iter()
}

fn check_attributes(node: &KdlNode, context: &'static str, known: &[&str], warnings: &mut Vec<ConfigWarning>) {
	for entry in node.entries() {
		let attribute = match entry.name() {
			Some(name) if known.contains(&name.value()) => continue,
			Some(name) => name.value().to_string(),
			None => entry.value().to_string(),
		};
		warnings.push(ConfigWarning::UnknownAttribute {
			attribute,
			node: context,
		});
	}
}

/// String attribute, with empty strings treated as absent.
fn optional_str(node: &KdlNode, attribute: &str) -> Option<String> {
	node.get(attribute)
		.and_then(|v| v.as_string())
		.filter(|s| !s.is_empty())
		.map(String::from)
}

fn required_str(node: &KdlNode, context: &'static str, attribute: &str) -> Result<String> {
	optional_str(node, attribute).ok_or_else(|| ConfigError::MissingField(format!("{context} {attribute}")))
}

fn optional_type(node: &KdlNode, attribute: &str, resolver: &TypeResolver) -> Result<Option<TypeRef>> {
	optional_str(node, attribute)
		.map(|name| resolver.resolve_type(&name).ok_or(ConfigError::UnknownType(name)))
		.transpose()
}

fn optional_bool(node: &KdlNode, context: &'static str, attribute: &'static str) -> Result<Option<bool>> {
	node.get(attribute)
		.map(|v| {
			v.as_bool().ok_or(ConfigError::InvalidValue {
				node: context,
				attribute,
			})
		})
		.transpose()
}
