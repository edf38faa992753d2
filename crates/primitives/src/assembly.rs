//! Assemblies: named sets of type definitions, persisted as binary blobs.
//!
//! A blob is `MAGIC`, the schema version as little-endian `u32`, then the
//! postcard-encoded assembly.

use std::fs;
use std::mem::size_of;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AssemblyError;
use crate::members::TypeDef;

/// Magic bytes identifying a weft assembly blob.
pub const MAGIC: &[u8; 8] = b"WEFTASMB";

/// Schema version for blob format compatibility.
pub const SCHEMA_VERSION: u32 = 1;

/// File extension of assembly blobs on disk.
pub const ASSEMBLY_EXTENSION: &str = "weftasm";

/// Total header size in bytes (magic + version).
pub const HEADER_SIZE: usize = MAGIC.len() + size_of::<u32>();

/// A named collection of type definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assembly {
	pub name: String,
	pub types: Vec<TypeDef>,
}

impl Assembly {
	pub fn new(name: impl Into<String>, types: Vec<TypeDef>) -> Self {
		Self {
			name: name.into(),
			types,
		}
	}

	pub fn to_blob(&self) -> Result<Vec<u8>, AssemblyError> {
		let mut out = Vec::with_capacity(HEADER_SIZE);
		out.extend_from_slice(MAGIC);
		out.extend_from_slice(&SCHEMA_VERSION.to_le_bytes());
		let payload = postcard::to_stdvec(self)?;
		out.extend_from_slice(&payload);
		Ok(out)
	}

	pub fn from_blob(data: &[u8]) -> Result<Self, AssemblyError> {
		if data.len() < HEADER_SIZE {
			return Err(if data.starts_with(&MAGIC[..data.len().min(MAGIC.len())]) {
				AssemblyError::Truncated
			} else {
				AssemblyError::BadMagic
			});
		}
		if &data[..MAGIC.len()] != MAGIC {
			return Err(AssemblyError::BadMagic);
		}
		let mut version = [0u8; 4];
		version.copy_from_slice(&data[MAGIC.len()..HEADER_SIZE]);
		let found = u32::from_le_bytes(version);
		if found != SCHEMA_VERSION {
			return Err(AssemblyError::UnsupportedVersion {
				found,
				expected: SCHEMA_VERSION,
			});
		}
		Ok(postcard::from_bytes(&data[HEADER_SIZE..])?)
	}

	pub fn read(path: &Path) -> Result<Self, AssemblyError> {
		let data = fs::read(path).map_err(|error| AssemblyError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_blob(&data)
	}

	pub fn write(&self, path: &Path) -> Result<(), AssemblyError> {
		let blob = self.to_blob()?;
		fs::write(path, blob).map_err(|error| AssemblyError::Io {
			path: path.to_path_buf(),
			error,
		})
	}
}
