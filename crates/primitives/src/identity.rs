//! Canonical string forms the host uses to match imports to exports.
//!
//! | Shape | Form |
//! |-------|------|
//! | named | `Namespace.Name` |
//! | nested | `Namespace.Outer+Inner` |
//! | closed generic | `Namespace.Name(Arg1,Arg2)` |
//! | array | `Element[]`, `Element[,]` |
//! | generic parameter | `{0}` (identity), `T` (contract name) |
//! | signature | `Return(P1,P2)`, `System.Void()` without a return |
//!
//! Contract names and type identities only disagree on generic parameters.

use std::fmt::Write;

use crate::known;
use crate::types::{Signature, TypeInfo, TypeKind, TypeRef};

/// Which canonical form to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMode {
	Identity,
	ContractName,
}

/// Canonical type identity of `ty`.
pub fn type_identity(ty: &TypeRef) -> String {
	ty.identity().to_string()
}

/// Canonical contract name of `ty`.
pub fn contract_name(ty: &TypeRef) -> String {
	ty.contract_name()
}

/// Canonical identity of a method or delegate signature.
pub fn signature_identity(signature: &Signature) -> String {
	let mut out = String::new();
	match &signature.return_type {
		Some(ret) => out.push_str(ret.identity()),
		None => out.push_str(known::VOID),
	}
	write_list(&mut out, signature.parameters.iter(), NameMode::Identity);
	out
}

pub(crate) fn format_type(info: &TypeInfo, mode: NameMode) -> String {
	let mut out = String::new();
	write_info(&mut out, info, mode);
	out
}

fn write_info(out: &mut String, info: &TypeInfo, mode: NameMode) {
	match info.kind {
		TypeKind::Array => {
			if let Some(element) = &info.element {
				write_ref(out, element, mode);
			}
			out.push('[');
			for _ in 1..info.rank.max(1) {
				out.push(',');
			}
			out.push(']');
		}
		TypeKind::GenericParameter => match mode {
			NameMode::Identity => {
				let _ = write!(out, "{{{}}}", info.generic_position.unwrap_or_default());
			}
			NameMode::ContractName => out.push_str(&info.name),
		},
		_ => {
			if let Some(declaring) = &info.declaring {
				write_info(out, declaring.info(), mode);
				out.push('+');
			} else if let Some(namespace) = &info.namespace {
				out.push_str(namespace);
				out.push('.');
			}
			out.push_str(&info.name);
			if !info.generic_args.is_empty() {
				write_list(out, info.generic_args.iter(), mode);
			}
		}
	}
}

fn write_ref(out: &mut String, ty: &TypeRef, mode: NameMode) {
	match mode {
		NameMode::Identity => out.push_str(ty.identity()),
		NameMode::ContractName => write_info(out, ty.info(), mode),
	}
}

fn write_list<'a>(out: &mut String, items: impl Iterator<Item = &'a TypeRef>, mode: NameMode) {
	out.push('(');
	for (i, ty) in items.enumerate() {
		if i > 0 {
			out.push(',');
		}
		write_ref(out, ty, mode);
	}
	out.push(')');
}
