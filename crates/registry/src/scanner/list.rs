use weft_primitives::TypeDef;

use super::TypeScanner;
use crate::error::{ConventionError, Result};

/// Scanner over an explicit list of types.
#[derive(Debug, Clone, Default)]
pub struct TypeList {
	types: Vec<TypeDef>,
}

impl TypeList {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_types(types: impl IntoIterator<Item = TypeDef>) -> Self {
		Self {
			types: types.into_iter().collect(),
		}
	}

	/// Seeds the list from a supplier; a supplier yielding `None` is an error.
	pub fn from_supplier(supplier: impl FnOnce() -> Option<Vec<TypeDef>>) -> Result<Self> {
		let mut list = Self::new();
		list.add_supplier(supplier)?;
		Ok(list)
	}

	pub fn add(&mut self, ty: TypeDef) {
		self.types.push(ty);
	}

	pub fn add_types(&mut self, types: impl IntoIterator<Item = TypeDef>) {
		self.types.extend(types);
	}

	pub fn add_supplier(&mut self, supplier: impl FnOnce() -> Option<Vec<TypeDef>>) -> Result<()> {
		let types = supplier().ok_or(ConventionError::SupplierReturnedNone("type list"))?;
		self.types.extend(types);
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

impl TypeScanner for TypeList {
	fn types(&self, predicate: &dyn Fn(&TypeDef) -> bool) -> Vec<TypeDef> {
		self.types.iter().filter(|ty| predicate(ty)).cloned().collect()
	}
}
