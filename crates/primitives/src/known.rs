//! Framework types every type universe shares.

use std::sync::LazyLock;

use crate::types::{Signature, TypeAttributes, TypeKind, TypeRef};

pub const OBJECT: &str = "System.Object";
pub const STRING: &str = "System.String";
pub const CHAR: &str = "System.Char";
pub const INT32: &str = "System.Int32";
pub const INT64: &str = "System.Int64";
pub const BOOLEAN: &str = "System.Boolean";
pub const VOID: &str = "System.Void";
pub const VALUE_TYPE: &str = "System.ValueType";
pub const ENUM: &str = "System.Enum";
pub const ARRAY: &str = "System.Array";
pub const MULTICAST_DELEGATE: &str = "System.MulticastDelegate";
pub const IENUMERABLE: &str = "System.Collections.IEnumerable";

static OBJECT_TYPE: LazyLock<TypeRef> = LazyLock::new(|| {
	TypeRef::builder(TypeKind::Class, "System", "Object")
		.public()
		.no_base()
		.build()
});

static STRING_TYPE: LazyLock<TypeRef> = LazyLock::new(|| {
	TypeRef::builder(TypeKind::Class, "System", "String")
		.public()
		.attributes(TypeAttributes::SEALED)
		.interface(IENUMERABLE)
		.interface("System.Collections.Generic.IEnumerable(System.Char)")
		.build()
});

static VOID_TYPE: LazyLock<TypeRef> =
	LazyLock::new(|| TypeRef::builder(TypeKind::Void, "System", "Void").public().build());

static IENUMERABLE_TYPE: LazyLock<TypeRef> = LazyLock::new(|| {
	TypeRef::builder(TypeKind::Interface, "System.Collections", "IEnumerable")
		.public()
		.attributes(TypeAttributes::ABSTRACT)
		.build()
});

fn primitive(name: &str) -> TypeRef {
	TypeRef::builder(TypeKind::Struct, "System", name)
		.public()
		.attributes(TypeAttributes::SEALED)
		.build()
}

static CHAR_TYPE: LazyLock<TypeRef> = LazyLock::new(|| primitive("Char"));
static INT32_TYPE: LazyLock<TypeRef> = LazyLock::new(|| primitive("Int32"));
static INT64_TYPE: LazyLock<TypeRef> = LazyLock::new(|| primitive("Int64"));
static BOOLEAN_TYPE: LazyLock<TypeRef> = LazyLock::new(|| primitive("Boolean"));

pub fn object() -> TypeRef {
	OBJECT_TYPE.clone()
}

pub fn string() -> TypeRef {
	STRING_TYPE.clone()
}

pub fn character() -> TypeRef {
	CHAR_TYPE.clone()
}

pub fn int32() -> TypeRef {
	INT32_TYPE.clone()
}

pub fn int64() -> TypeRef {
	INT64_TYPE.clone()
}

pub fn boolean() -> TypeRef {
	BOOLEAN_TYPE.clone()
}

pub fn void() -> TypeRef {
	VOID_TYPE.clone()
}

/// Non-generic enumerable interface.
pub fn enumerable() -> TypeRef {
	IENUMERABLE_TYPE.clone()
}

/// `IEnumerable<item>`.
pub fn enumerable_of(item: TypeRef) -> TypeRef {
	TypeRef::builder(TypeKind::Interface, "System.Collections.Generic", "IEnumerable")
		.public()
		.attributes(TypeAttributes::ABSTRACT)
		.interface(IENUMERABLE)
		.generic_args(vec![item])
		.build()
}

/// `List<item>`.
pub fn list_of(item: TypeRef) -> TypeRef {
	let generic_enumerable = enumerable_of(item.clone());
	TypeRef::builder(TypeKind::Class, "System.Collections.Generic", "List")
		.public()
		.interface(IENUMERABLE)
		.interface(generic_enumerable.identity())
		.generic_args(vec![item])
		.build()
}

/// `Func<parameters.., ret>`.
pub fn func(parameters: Vec<TypeRef>, ret: TypeRef) -> TypeRef {
	let mut args = parameters.clone();
	args.push(ret.clone());
	TypeRef::builder(TypeKind::Delegate, "System", "Func")
		.public()
		.attributes(TypeAttributes::SEALED)
		.base(MULTICAST_DELEGATE)
		.generic_args(args)
		.invoke(Signature::new(Some(ret), parameters))
		.build()
}

/// `Action<parameters..>`.
pub fn action(parameters: Vec<TypeRef>) -> TypeRef {
	TypeRef::builder(TypeKind::Delegate, "System", "Action")
		.public()
		.attributes(TypeAttributes::SEALED)
		.base(MULTICAST_DELEGATE)
		.generic_args(parameters.clone())
		.invoke(Signature::new(None, parameters))
		.build()
}

/// Resolves a well-known type by fully-qualified name.
pub fn by_name(name: &str) -> Option<TypeRef> {
	let ty = match name {
		OBJECT => object(),
		STRING => string(),
		CHAR => character(),
		INT32 => int32(),
		INT64 => int64(),
		BOOLEAN => boolean(),
		VOID => void(),
		IENUMERABLE => enumerable(),
		_ => return None,
	};
	Some(ty)
}
