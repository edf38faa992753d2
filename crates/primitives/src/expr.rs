//! Member expressions: a textual stand-in for lambda selectors.
//!
//! Supported forms, with `x` standing for any parameter name:
//!
//! * `x => x` selects the type itself.
//! * `x => x.Member` selects a field, property or unique method.
//! * `x => x.Method(T1, T2)` selects an overload by parameter identities.
//! * `x => new(T1, T2)` selects a constructor by parameter identities.

use crate::error::ExprError;
use crate::members::{MemberRef, TypeDef};

/// Parsed member expression, not yet bound to a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberExpr {
	/// `x => x`
	Type,
	/// `x => x.Name`
	Member(String),
	/// `x => x.Name(T1, T2)`
	Method { name: String, parameters: Vec<String> },
	/// `x => new(T1, T2)`
	Constructor(Vec<String>),
}

impl MemberExpr {
	pub fn parse(source: &str) -> Result<Self, ExprError> {
		let (param, body) = source
			.split_once("=>")
			.ok_or_else(|| ExprError::Syntax(source.to_string()))?;
		let param = param.trim().trim_start_matches('(').trim_end_matches(')').trim();
		let body = body.trim();
		if !is_identifier(param) || body.is_empty() {
			return Err(ExprError::Syntax(source.to_string()));
		}

		if let Some(args) = body.strip_prefix("new") {
			let args = args.trim_start();
			if args.starts_with('(') {
				return Ok(Self::Constructor(parse_arguments(args, source)?));
			}
		}

		let Some(rest) = body.strip_prefix(param) else {
			return Err(ExprError::UnboundParameter {
				param: param.to_string(),
				body: body.to_string(),
			});
		};
		if rest.is_empty() {
			return Ok(Self::Type);
		}
		let Some(access) = rest.strip_prefix('.') else {
			return Err(ExprError::UnboundParameter {
				param: param.to_string(),
				body: body.to_string(),
			});
		};

		let name_end = access.find(|c: char| !is_identifier_char(c)).unwrap_or(access.len());
		let (name, tail) = access.split_at(name_end);
		if !is_identifier(name) {
			return Err(ExprError::Syntax(source.to_string()));
		}
		let tail = tail.trim_start();
		if tail.is_empty() {
			return Ok(Self::Member(name.to_string()));
		}
		if tail.starts_with('.') {
			return Err(ExprError::NestedAccess(body.to_string()));
		}
		if tail.starts_with('(') {
			let close = matching_paren(tail).ok_or_else(|| ExprError::Syntax(source.to_string()))?;
			if !tail[close + 1..].trim().is_empty() {
				return Err(ExprError::NestedAccess(body.to_string()));
			}
			return Ok(Self::Method {
				name: name.to_string(),
				parameters: parse_arguments(tail, source)?,
			});
		}
		Err(ExprError::Syntax(source.to_string()))
	}

	/// Binds this expression to a member of `ty`.
	pub fn resolve(&self, ty: &TypeDef) -> Result<MemberRef, ExprError> {
		let not_found = |member: &str| ExprError::MemberNotFound {
			type_identity: ty.identity().to_string(),
			member: member.to_string(),
		};
		match self {
			Self::Type => Ok(MemberRef::Type(ty.clone())),
			Self::Member(name) => {
				if let Some(property) = ty.property(name) {
					return Ok(MemberRef::Property(property));
				}
				if let Some(field) = ty.field(name) {
					return Ok(MemberRef::Field(field));
				}
				let mut methods = ty.methods_named(name);
				match (methods.next(), methods.next()) {
					(Some(method), None) => Ok(MemberRef::Method(method)),
					(Some(_), Some(_)) => Err(ExprError::Ambiguous {
						type_identity: ty.identity().to_string(),
						member: name.clone(),
					}),
					_ => Err(not_found(name)),
				}
			}
			Self::Method { name, parameters } => ty
				.methods_named(name)
				.find(|m| same_parameters(&m.info().parameters, parameters))
				.map(MemberRef::Method)
				.ok_or_else(|| not_found(&format!("{name}({})", parameters.join(",")))),
			Self::Constructor(parameters) => ty
				.constructor_refs()
				.find(|c| same_parameters(&c.info().parameters, parameters))
				.map(MemberRef::Constructor)
				.ok_or_else(|| not_found(&format!(".ctor({})", parameters.join(",")))),
		}
	}
}

/// Parses `source` and binds it to a member of `ty`.
pub fn inspect(ty: &TypeDef, source: &str) -> Result<MemberRef, ExprError> {
	MemberExpr::parse(source)?.resolve(ty)
}

fn same_parameters(declared: &[crate::members::ParameterInfo], wanted: &[String]) -> bool {
	declared.len() == wanted.len()
		&& declared
			.iter()
			.zip(wanted)
			.all(|(p, w)| p.parameter_type.identity() == w)
}

fn is_identifier_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

fn is_identifier(s: &str) -> bool {
	let mut chars = s.chars();
	chars
		.next()
		.is_some_and(|c| c.is_alphabetic() || c == '_')
		&& chars.all(is_identifier_char)
}

/// Byte index of the parenthesis closing the one at `s[0]`.
fn matching_paren(s: &str) -> Option<usize> {
	let mut depth = 0usize;
	for (i, c) in s.char_indices() {
		match c {
			'(' | '[' => depth += 1,
			')' | ']' => {
				depth = depth.checked_sub(1)?;
				if depth == 0 {
					return Some(i);
				}
			}
			_ => {}
		}
	}
	None
}

/// Splits `(A, B(C,D), E[,])` into its top-level type identities.
fn parse_arguments(args: &str, source: &str) -> Result<Vec<String>, ExprError> {
	let syntax = || ExprError::Syntax(source.to_string());
	let close = matching_paren(args).ok_or_else(syntax)?;
	if !args[close + 1..].trim().is_empty() {
		return Err(syntax());
	}
	let inner = &args[1..close];
	if inner.trim().is_empty() {
		return Ok(Vec::new());
	}

	let mut out = Vec::new();
	let mut depth = 0usize;
	let mut start = 0;
	for (i, c) in inner.char_indices() {
		match c {
			'(' | '[' => depth += 1,
			')' | ']' => depth = depth.checked_sub(1).ok_or_else(syntax)?,
			',' if depth == 0 => {
				out.push(inner[start..i].trim().to_string());
				start = i + 1;
			}
			_ => {}
		}
	}
	out.push(inner[start..].trim().to_string());
	if out.iter().any(String::is_empty) {
		return Err(syntax());
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::known;
	use crate::members::ParameterInfo;
	use crate::types::TypeRef;

	fn widget() -> TypeDef {
		TypeDef::builder(TypeRef::class("Acme", "Widget"))
			.property("Title", known::string())
			.field("size", known::int32())
			.method("Draw", None, vec![])
			.method("Scale", None, vec![ParameterInfo::new("f", known::int32())])
			.method("Scale", None, vec![ParameterInfo::new("f", known::int64())])
			.constructor(vec![])
			.constructor(vec![
				ParameterInfo::new("a", known::enumerable_of(known::string())),
				ParameterInfo::new("b", TypeRef::array_of_rank(known::int32(), 2)),
			])
			.build()
	}

	#[test]
	fn parses_each_form() {
		assert_eq!(MemberExpr::parse("x => x"), Ok(MemberExpr::Type));
		assert_eq!(MemberExpr::parse("w=>w.Title"), Ok(MemberExpr::Member("Title".into())));
		assert_eq!(
			MemberExpr::parse("x => x.Scale(System.Int32)"),
			Ok(MemberExpr::Method {
				name: "Scale".into(),
				parameters: vec!["System.Int32".into()],
			})
		);
		assert_eq!(
			MemberExpr::parse("x => new(System.Collections.Generic.IEnumerable(System.String), System.Int32[,])"),
			Ok(MemberExpr::Constructor(vec![
				"System.Collections.Generic.IEnumerable(System.String)".into(),
				"System.Int32[,]".into(),
			]))
		);
		assert_eq!(MemberExpr::parse("x => new()"), Ok(MemberExpr::Constructor(vec![])));
	}

	#[test]
	fn rejects_malformed_expressions() {
		assert!(matches!(MemberExpr::parse("x.Title"), Err(ExprError::Syntax(_))));
		assert!(matches!(
			MemberExpr::parse("x => y.Title"),
			Err(ExprError::UnboundParameter { .. })
		));
		assert!(matches!(
			MemberExpr::parse("x => x.Title.Length"),
			Err(ExprError::NestedAccess(_))
		));
		assert!(matches!(MemberExpr::parse("x => x.Scale(,)"), Err(ExprError::Syntax(_))));
	}

	#[test]
	fn resolves_members() {
		let ty = widget();
		let title = inspect(&ty, "x => x.Title").expect("property");
		assert_eq!(title.identity(), "Acme.Widget.Title");
		let draw = inspect(&ty, "x => x.Draw").expect("method");
		assert!(draw.is_method());
		let scale = inspect(&ty, "x => x.Scale(System.Int64)").expect("overload");
		assert_eq!(scale.identity(), "Acme.Widget.Scale(System.Int64)");
		let ctor = inspect(&ty, "x => new(System.Collections.Generic.IEnumerable(System.String), System.Int32[,])")
			.expect("ctor");
		assert_eq!(
			ctor.identity(),
			"Acme.Widget..ctor(System.Collections.Generic.IEnumerable(System.String),System.Int32[,])"
		);
	}

	#[test]
	fn overloads_need_a_parameter_list() {
		let ty = widget();
		assert!(matches!(inspect(&ty, "x => x.Scale"), Err(ExprError::Ambiguous { .. })));
		assert!(matches!(
			inspect(&ty, "x => x.Missing"),
			Err(ExprError::MemberNotFound { .. })
		));
	}
}
