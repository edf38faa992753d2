use weft_primitives::{MemberRef, TypeRef, known};

use crate::definition::ImportCardinality;
use crate::error::{ConventionError, Result};

/// Collection test used for imports: enumerable, except `System.String`.
pub fn is_collection(ty: &TypeRef) -> bool {
	ty.implements_enumerable() && ty.identity() != known::STRING
}

/// Cardinality of an import through a field, property or the type itself.
pub fn member_cardinality(member: &MemberRef, allow_default_value: bool) -> Result<ImportCardinality> {
	let ty = member
		.value_type()
		.filter(|ty| !ty.is_void())
		.ok_or_else(|| ConventionError::CardinalityMismatch {
			member: member.identity(),
		})?;
	Ok(if is_collection(&ty) {
		ImportCardinality::ZeroOrMore
	} else if allow_default_value {
		ImportCardinality::ZeroOrOne
	} else {
		ImportCardinality::ExactlyOne
	})
}

/// Cardinality of a constructor parameter import.
pub fn parameter_cardinality(parameter_type: &TypeRef) -> ImportCardinality {
	if is_collection(parameter_type) {
		ImportCardinality::ZeroOrMore
	} else {
		ImportCardinality::ExactlyOne
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;
	use weft_primitives::TypeDef;

	use super::*;
	use crate::error::ErrorKind;

	fn holder(value: TypeRef) -> MemberRef {
		let ty = TypeDef::builder(TypeRef::class("Acme", "Holder"))
			.property("Value", value)
			.method("Run", None, vec![])
			.build();
		MemberRef::Property(ty.property("Value").expect("property"))
	}

	#[rstest]
	#[case::array(TypeRef::array_of(known::int32()), false, ImportCardinality::ZeroOrMore)]
	#[case::array_default(TypeRef::array_of(known::int32()), true, ImportCardinality::ZeroOrMore)]
	#[case::generic_enumerable(known::enumerable_of(known::string()), false, ImportCardinality::ZeroOrMore)]
	#[case::list(known::list_of(known::int32()), true, ImportCardinality::ZeroOrMore)]
	#[case::scalar(known::int32(), false, ImportCardinality::ExactlyOne)]
	#[case::scalar_default(known::int32(), true, ImportCardinality::ZeroOrOne)]
	#[case::string(known::string(), false, ImportCardinality::ExactlyOne)]
	#[case::string_default(known::string(), true, ImportCardinality::ZeroOrOne)]
	fn cardinality_matrix(#[case] value: TypeRef, #[case] allow_default: bool, #[case] expected: ImportCardinality) {
		assert_eq!(member_cardinality(&holder(value), allow_default).expect("cardinality"), expected);
	}

	#[test]
	fn members_without_values_do_not_classify() {
		let ty = TypeDef::builder(TypeRef::class("Acme", "Holder"))
			.method("Run", None, vec![])
			.build();
		let run = MemberRef::Method(ty.methods_named("Run").next().expect("method"));
		let err = member_cardinality(&run, false).expect_err("method");
		assert_eq!(err.kind(), ErrorKind::CardinalityMismatch);

		let void = holder(known::void());
		assert_eq!(
			member_cardinality(&void, true).map_err(|e| e.kind()),
			Err(ErrorKind::CardinalityMismatch)
		);
	}

	#[test]
	fn parameters_ignore_defaults() {
		assert_eq!(parameter_cardinality(&known::string()), ImportCardinality::ExactlyOne);
		assert_eq!(
			parameter_cardinality(&TypeRef::array_of(known::string())),
			ImportCardinality::ZeroOrMore
		);
	}
}
