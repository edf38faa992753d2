use std::path::Path;

use weft_primitives::{Assembly, TypeDef};

use super::TypeScanner;
use crate::error::{ConventionError, Result};

/// Scanner over the public, concrete classes of one assembly.
///
/// Interfaces, value types and abstract types never pass, whatever the
/// predicate says.
#[derive(Debug, Clone)]
pub struct AssemblyScanner {
	assembly: Assembly,
}

impl AssemblyScanner {
	pub fn new(assembly: Assembly) -> Self {
		Self { assembly }
	}

	/// Loads an assembly blob from `path`.
	pub fn open(path: &Path) -> Result<Self> {
		if !path.is_file() {
			return Err(ConventionError::FileNotFound(path.to_path_buf()));
		}
		let assembly = Assembly::read(path)?;
		tracing::debug!(
			assembly = %assembly.name,
			types = assembly.types.len(),
			path = %path.display(),
			"loaded assembly"
		);
		Ok(Self::new(assembly))
	}

	pub fn assembly(&self) -> &Assembly {
		&self.assembly
	}
}

impl TypeScanner for AssemblyScanner {
	fn types(&self, predicate: &dyn Fn(&TypeDef) -> bool) -> Vec<TypeDef> {
		self.assembly
			.types
			.iter()
			.filter(|ty| ty.is_public() && !ty.is_abstract() && ty.is_class())
			.filter(|ty| predicate(ty))
			.cloned()
			.collect()
	}

	fn find(&self, identity: &str) -> Option<TypeDef> {
		self.assembly.types.iter().find(|ty| ty.identity() == identity).cloned()
	}
}

#[cfg(test)]
mod tests {
	use weft_primitives::{TypeAttributes, TypeKind, TypeRef};

	use super::*;
	use crate::error::ErrorKind;

	fn assembly() -> Assembly {
		let concrete = TypeDef::builder(TypeRef::class("Acme", "Concrete")).build();
		let internal = TypeDef::builder(TypeRef::builder(TypeKind::Class, "Acme", "Hidden").build()).build();
		let abstract_ = TypeDef::builder(
			TypeRef::builder(TypeKind::Class, "Acme", "Base")
				.public()
				.attributes(TypeAttributes::ABSTRACT)
				.build(),
		)
		.build();
		let iface = TypeDef::builder(TypeRef::interface("Acme", "IThing")).build();
		let value = TypeDef::builder(TypeRef::builder(TypeKind::Struct, "Acme", "Point").public().build()).build();
		Assembly::new("Acme", vec![concrete, internal, abstract_, iface, value])
	}

	#[test]
	fn only_public_concrete_classes_pass() {
		let scanner = AssemblyScanner::new(assembly());
		let names: Vec<String> = scanner.types(&|_| true).iter().map(|t| t.name().to_string()).collect();
		assert_eq!(names, ["Concrete"]);
		assert!(scanner.types(&|t| t.name() == "IThing").is_empty());
	}

	#[test]
	fn find_sees_every_type() {
		let scanner = AssemblyScanner::new(assembly());
		for identity in ["Acme.Concrete", "Acme.Hidden", "Acme.Base", "Acme.IThing", "Acme.Point"] {
			assert_eq!(scanner.find(identity).map(|t| t.identity().to_string()), Some(identity.to_string()));
		}
		assert!(scanner.find("Acme.Missing").is_none());
	}

	#[test]
	fn open_reads_blobs_and_reports_missing_files() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("acme.weftasm");
		assembly().write(&path).expect("write");
		let scanner = AssemblyScanner::open(&path).expect("open");
		assert_eq!(scanner.types(&|_| true).len(), 1);

		let err = AssemblyScanner::open(&dir.path().join("gone.weftasm")).expect_err("missing");
		assert_eq!(err.kind(), ErrorKind::NotFound);

		let junk = dir.path().join("junk.weftasm");
		std::fs::write(&junk, b"definitely not an assembly").expect("write junk");
		let err = AssemblyScanner::open(&junk).expect_err("junk");
		assert_eq!(err.kind(), ErrorKind::Format);
	}
}
