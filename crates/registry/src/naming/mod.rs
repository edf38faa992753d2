//! Contract names and type identities.
//!
//! The host matches an import to exports first by contract name, then by
//! type identity. Both strings are derived from a member and the optional
//! overrides of its convention through four precedence chains:
//!
//! | Output | 1 | 2 | 3 | 4 |
//! |--------|---|---|---|---|
//! | export contract name | name override | contract *name* of type override | method signature identity | contract name of value type |
//! | export type identity | identity of type override | method signature identity | identity of value type | |
//! | import contract name | name override | *identity* of type override | identity of value type | |
//! | import type identity | identity of value type (no override) | `None` for the object type | delegate invoke signature | identity of type override |
//!
//! The free functions here take raw overrides; [`ContractService`] applies
//! them to convention objects and [`DefaultConventionContractService`]
//! layers type-default conventions on top.

mod defaults;
mod service;

pub use defaults::DefaultConventionContractService;
pub use service::{ContractNaming, ContractService};

use weft_primitives::{MemberRef, TypeRef};

use crate::conventions::{ContractNameFn, ContractTypeFn};
use crate::error::{ConventionError, Result};

fn value_type(member: &MemberRef) -> Result<TypeRef> {
	member.value_type().ok_or_else(|| ConventionError::NoValueType {
		member: member.identity(),
	})
}

pub fn export_contract_name(
	contract_name: Option<&ContractNameFn>,
	contract_type: Option<&ContractTypeFn>,
	member: &MemberRef,
) -> Result<String> {
	if let Some(name) = contract_name {
		return Ok(name(member));
	}
	if let Some(ty) = contract_type {
		return Ok(ty(member).contract_name());
	}
	if let Some(method) = member.as_method() {
		return Ok(method.signature().identity());
	}
	Ok(value_type(member)?.contract_name())
}

pub fn export_type_identity(contract_type: Option<&ContractTypeFn>, member: &MemberRef) -> Result<String> {
	if let Some(ty) = contract_type {
		return Ok(ty(member).identity().to_string());
	}
	if let Some(method) = member.as_method() {
		return Ok(method.signature().identity());
	}
	Ok(value_type(member)?.identity().to_string())
}

pub fn import_contract_name(
	contract_name: Option<&ContractNameFn>,
	contract_type: Option<&ContractTypeFn>,
	member: &MemberRef,
) -> Result<String> {
	if let Some(name) = contract_name {
		return Ok(name(member));
	}
	if let Some(ty) = contract_type {
		return Ok(ty(member).identity().to_string());
	}
	Ok(value_type(member)?.identity().to_string())
}

/// `None` means the import accepts exports of any type.
pub fn import_type_identity(contract_type: Option<&ContractTypeFn>, member: &MemberRef) -> Result<Option<String>> {
	let Some(ty) = contract_type else {
		return Ok(Some(value_type(member)?.identity().to_string()));
	};
	let contract = ty(member);
	if contract.is_object() {
		return Ok(None);
	}
	if let Some(declared) = member.value_type()
		&& declared.is_delegate()
		&& let Some(invoke) = declared.invoke_signature()
	{
		return Ok(Some(invoke.identity()));
	}
	Ok(Some(contract.identity().to_string()))
}
