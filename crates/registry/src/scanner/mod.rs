//! Sources of candidate types.
//!
//! * [`TypeList`] - an explicit, growable list.
//! * [`AssemblyScanner`] - the public concrete classes of one assembly.
//! * [`DirectoryScanner`] - every assembly blob in a directory.
//! * [`AggregateScanner`] - a thread-safe union of other scanners.

mod aggregate;
mod assembly;
mod directory;
mod list;

pub use aggregate::AggregateScanner;
pub use assembly::AssemblyScanner;
pub use directory::DirectoryScanner;
pub use list::TypeList;
use rustc_hash::FxHashSet;
use weft_primitives::TypeDef;

/// Pluggable source of candidate types.
///
/// Repeated calls with the same predicate return the same types until the
/// backing set is mutated.
pub trait TypeScanner: Send + Sync {
	fn types(&self, predicate: &dyn Fn(&TypeDef) -> bool) -> Vec<TypeDef>;

	/// Any type this scanner knows with the given identity, including the
	/// interfaces and abstract types that never pass as candidates.
	fn find(&self, identity: &str) -> Option<TypeDef> {
		self.types(&|ty| ty.identity() == identity).into_iter().next()
	}
}

/// Appends `types` to `out`, skipping identities already present.
fn extend_unique(out: &mut Vec<TypeDef>, seen: &mut FxHashSet<String>, types: Vec<TypeDef>) {
	for ty in types {
		if seen.insert(ty.identity().to_string()) {
			out.push(ty);
		}
	}
}
