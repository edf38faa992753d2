use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use weft_primitives::TypeDef;

use super::{TypeScanner, extend_unique};

/// Union of child scanners, de-duplicated by type identity.
///
/// One lock guards both `add` and `types`, so children can be added while
/// other threads scan.
#[derive(Default)]
pub struct AggregateScanner {
	scanners: Mutex<Vec<Arc<dyn TypeScanner>>>,
}

impl AggregateScanner {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_scanners(scanners: impl IntoIterator<Item = Arc<dyn TypeScanner>>) -> Self {
		Self {
			scanners: Mutex::new(scanners.into_iter().collect()),
		}
	}

	pub fn add(&self, scanner: Arc<dyn TypeScanner>) {
		self.scanners.lock().push(scanner);
	}

	pub fn len(&self) -> usize {
		self.scanners.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.scanners.lock().is_empty()
	}
}

impl TypeScanner for AggregateScanner {
	fn types(&self, predicate: &dyn Fn(&TypeDef) -> bool) -> Vec<TypeDef> {
		let scanners = self.scanners.lock();
		let mut out = Vec::new();
		let mut seen = FxHashSet::default();
		for scanner in scanners.iter() {
			extend_unique(&mut out, &mut seen, scanner.types(predicate));
		}
		out
	}

	fn find(&self, identity: &str) -> Option<TypeDef> {
		self.scanners.lock().iter().find_map(|scanner| scanner.find(identity))
	}
}

impl fmt::Debug for AggregateScanner {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AggregateScanner")
			.field("scanners", &self.len())
			.finish()
	}
}
