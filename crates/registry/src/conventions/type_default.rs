use weft_primitives::TypeRef;

/// Fallback contract for members whose value type is `target_type`.
///
/// When several defaults target the same type, the one registered last wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefaultConvention {
	pub contract_name: Option<String>,
	pub contract_type: Option<TypeRef>,
	pub target_type: TypeRef,
}

impl TypeDefaultConvention {
	pub fn new(target_type: TypeRef) -> Self {
		Self {
			contract_name: None,
			contract_type: None,
			target_type,
		}
	}
}
