use weft_primitives::TypeRef;

use crate::conventions::TypeDefaultConvention;
use crate::error::{ConventionError, Result, non_empty};

/// Builder for [`TypeDefaultConvention`].
#[derive(Debug, Default)]
pub struct TypeDefaultConventionBuilder {
	contract_name: Option<String>,
	contract_type: Option<TypeRef>,
	target_type: Option<TypeRef>,
}

impl TypeDefaultConventionBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn for_type(mut self, target: TypeRef) -> Self {
		self.target_type = Some(target);
		self
	}

	pub fn contract_name(mut self, name: &str) -> Result<Self> {
		self.contract_name = Some(non_empty(name, "contract name")?);
		Ok(self)
	}

	pub fn contract_type(mut self, ty: TypeRef) -> Self {
		self.contract_type = Some(ty);
		self
	}

	pub fn build(self) -> Result<TypeDefaultConvention> {
		let target_type = self
			.target_type
			.ok_or(ConventionError::MissingArgument("default target type"))?;
		Ok(TypeDefaultConvention {
			contract_name: self.contract_name,
			contract_type: self.contract_type,
			target_type,
		})
	}
}
