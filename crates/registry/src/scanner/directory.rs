use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use weft_primitives::{ASSEMBLY_EXTENSION, AssemblyError, TypeDef};

use super::{AssemblyScanner, TypeScanner, extend_unique};
use crate::error::{ConventionError, Result};

/// Scanner over every assembly blob directly inside a directory.
///
/// The directory is read once, at construction.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
	path: PathBuf,
	scanners: Vec<AssemblyScanner>,
}

impl DirectoryScanner {
	pub fn new(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		if path.as_os_str().is_empty() {
			return Err(ConventionError::EmptyString("directory path"));
		}
		if !path.is_dir() {
			return Err(ConventionError::DirectoryNotFound(path.to_path_buf()));
		}

		let io = |error| {
			ConventionError::Assembly(AssemblyError::Io {
				path: path.to_path_buf(),
				error,
			})
		};
		let mut files = Vec::new();
		for entry in fs::read_dir(path).map_err(io)? {
			let entry_path = entry.map_err(io)?.path();
			if entry_path.extension().is_none_or(|ext| ext != ASSEMBLY_EXTENSION) {
				continue;
			}
			if !entry_path.is_file() {
				tracing::warn!(path = %entry_path.display(), "skipping non-file assembly entry");
				continue;
			}
			files.push(entry_path);
		}
		files.sort();

		let scanners = files
			.iter()
			.map(|file| AssemblyScanner::open(file))
			.collect::<Result<Vec<_>>>()?;
		tracing::debug!(dir = %path.display(), assemblies = scanners.len(), "scanned directory");
		Ok(Self {
			path: path.to_path_buf(),
			scanners,
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn assemblies(&self) -> impl Iterator<Item = &AssemblyScanner> {
		self.scanners.iter()
	}
}

impl TypeScanner for DirectoryScanner {
	fn types(&self, predicate: &dyn Fn(&TypeDef) -> bool) -> Vec<TypeDef> {
		let mut out = Vec::new();
		let mut seen = FxHashSet::default();
		for scanner in &self.scanners {
			extend_unique(&mut out, &mut seen, scanner.types(predicate));
		}
		out
	}

	fn find(&self, identity: &str) -> Option<TypeDef> {
		self.scanners.iter().find_map(|scanner| scanner.find(identity))
	}
}
