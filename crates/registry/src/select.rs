//! Ready-made member selectors for export and import conventions.

use std::sync::Arc;

use weft_primitives::{MemberExpr, MemberRef, TypeDef, TypeRef};

use crate::conventions::MemberSelector;
use crate::error::Result;

/// Wraps an infallible selection function.
pub fn from_fn(f: impl Fn(&TypeDef) -> Vec<MemberRef> + Send + Sync + 'static) -> MemberSelector {
	Arc::new(move |ty| Ok(f(ty)))
}

/// The type itself.
pub fn the_type() -> MemberSelector {
	from_fn(|ty| vec![MemberRef::Type(ty.clone())])
}

/// Property, field, or every method named `name`, in that order of preference.
pub fn by_name(name: &str) -> MemberSelector {
	let name = name.to_string();
	from_fn(move |ty| {
		if let Some(property) = ty.property(&name) {
			return vec![MemberRef::Property(property)];
		}
		if let Some(field) = ty.field(&name) {
			return vec![MemberRef::Field(field)];
		}
		ty.methods_named(&name).map(MemberRef::Method).collect()
	})
}

/// Every public property.
pub fn public_properties() -> MemberSelector {
	from_fn(|ty| {
		ty.property_refs()
			.filter(|p| p.info().is_public)
			.map(MemberRef::Property)
			.collect()
	})
}

/// Every public instance field.
pub fn public_fields() -> MemberSelector {
	from_fn(|ty| {
		ty.field_refs()
			.filter(|f| f.info().is_public && !f.info().is_static)
			.map(MemberRef::Field)
			.collect()
	})
}

/// Public properties whose type is `property_type`.
pub fn properties_of_type(property_type: TypeRef) -> MemberSelector {
	from_fn(move |ty| {
		ty.property_refs()
			.filter(|p| p.info().is_public && p.info().property_type == property_type)
			.map(MemberRef::Property)
			.collect()
	})
}

/// The public constructor with the most parameters.
pub fn greediest_constructor() -> MemberSelector {
	from_fn(|ty| ty.greediest_constructor().map(MemberRef::Constructor).into_iter().collect())
}

/// Exactly `member`, on its declaring type only.
pub fn fixed(member: MemberRef) -> MemberSelector {
	from_fn(move |ty| {
		if member.declaring_type() == ty {
			vec![member.clone()]
		} else {
			Vec::new()
		}
	})
}

/// Resolves `source` (`x => x.Member`) against each candidate type.
///
/// The expression is parsed immediately; resolution failures surface when
/// the selector runs.
pub fn expression(source: &str) -> Result<MemberSelector> {
	let expr = MemberExpr::parse(source)?;
	Ok(Arc::new(move |ty| Ok(vec![expr.resolve(ty)?])))
}

#[cfg(test)]
mod tests {
	use weft_primitives::{ParameterInfo, known};

	use super::*;
	use crate::error::ErrorKind;

	fn gadget() -> TypeDef {
		TypeDef::builder(TypeRef::class("Acme", "Gadget"))
			.property("Label", known::string())
			.property("Count", known::int32())
			.field("serial", known::int64())
			.method("Reset", None, vec![])
			.constructor(vec![])
			.constructor(vec![ParameterInfo::new("label", known::string())])
			.build()
	}

	fn identities(selector: &MemberSelector, ty: &TypeDef) -> Vec<String> {
		selector(ty).expect("select").iter().map(MemberRef::identity).collect()
	}

	#[test]
	fn selects_by_name_and_shape() {
		let ty = gadget();
		assert_eq!(identities(&by_name("Label"), &ty), ["Acme.Gadget.Label"]);
		assert_eq!(identities(&by_name("serial"), &ty), ["Acme.Gadget.serial"]);
		assert_eq!(identities(&by_name("Reset"), &ty), ["Acme.Gadget.Reset()"]);
		assert_eq!(
			identities(&properties_of_type(known::int32()), &ty),
			["Acme.Gadget.Count"]
		);
		assert_eq!(
			identities(&greediest_constructor(), &ty),
			["Acme.Gadget..ctor(System.String)"]
		);
		assert_eq!(identities(&the_type(), &ty), ["Acme.Gadget"]);
	}

	#[test]
	fn fixed_members_only_match_their_own_type() {
		let ty = gadget();
		let other = TypeDef::builder(TypeRef::class("Acme", "Other")).build();
		let label = MemberRef::Property(ty.property("Label").expect("property"));
		let selector = fixed(label);
		assert_eq!(identities(&selector, &ty).len(), 1);
		assert!(identities(&selector, &other).is_empty());
	}

	#[test]
	fn expression_errors_surface() {
		assert_eq!(
			expression("Label").err().map(|e| e.kind()),
			Some(ErrorKind::InvalidArgument)
		);
		let selector = expression("x => x.Missing").expect("parses");
		assert!(selector(&gadget()).is_err());
	}
}
