use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::identity::{self, NameMode};
use crate::known;

/// Broad category of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
	/// Reference type that may be instantiated.
	Class,
	/// Contract-only type.
	Interface,
	/// Value type.
	Struct,
	/// Enumeration value type.
	Enum,
	/// Callable type identified by its invoke signature.
	Delegate,
	/// Array of an element type.
	Array,
	/// Unbound generic parameter of an open generic definition.
	GenericParameter,
	/// The absence of a value (method return only).
	Void,
}

bitflags::bitflags! {
	/// Visibility and inheritance flags of a type.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
	pub struct TypeAttributes: u32 {
		/// Visible outside its assembly.
		const PUBLIC = 0x0001;
		/// Cannot be instantiated directly.
		const ABSTRACT = 0x0080;
		/// Cannot be derived from.
		const SEALED = 0x0100;
	}
}

/// Parameter and return types of a method or delegate invoke.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
	/// Return type; `None` for methods that return nothing.
	pub return_type: Option<TypeRef>,
	/// Parameter types in declaration order.
	pub parameters: Vec<TypeRef>,
}

impl Signature {
	pub fn new(return_type: Option<TypeRef>, parameters: Vec<TypeRef>) -> Self {
		Self { return_type, parameters }
	}

	/// Canonical identity of this signature (`Return(P1,P2)`).
	pub fn identity(&self) -> String {
		identity::signature_identity(self)
	}
}

/// Serializable description of a type's shape.
///
/// Base types and interfaces are recorded by identity rather than by
/// reference so shapes never form reference cycles (`Foo : IEquatable<Foo>`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeInfo {
	pub namespace: Option<String>,
	pub name: String,
	pub declaring: Option<TypeRef>,
	pub kind: TypeKind,
	pub attributes: TypeAttributes,
	pub generic_args: Vec<TypeRef>,
	pub element: Option<TypeRef>,
	pub rank: u8,
	pub generic_position: Option<u16>,
	pub base: Option<String>,
	pub interfaces: Vec<String>,
	pub invoke: Option<Signature>,
}

struct Shape {
	info: TypeInfo,
	identity: String,
}

/// Cheap, shareable reference to a type shape.
///
/// Equality and hashing go through the canonical type identity, so two
/// references built independently for `System.String` compare equal.
#[derive(Clone)]
pub struct TypeRef(Arc<Shape>);

impl TypeRef {
	/// Wraps a shape description, computing its identity once.
	pub fn from_info(info: TypeInfo) -> Self {
		let identity = identity::format_type(&info, NameMode::Identity);
		Self(Arc::new(Shape { info, identity }))
	}

	/// Starts a builder for a named type.
	pub fn builder(kind: TypeKind, namespace: &str, name: &str) -> TypeBuilder {
		TypeBuilder::new(kind, namespace, name)
	}

	/// Public, non-abstract class.
	pub fn class(namespace: &str, name: &str) -> Self {
		Self::builder(TypeKind::Class, namespace, name).public().build()
	}

	/// Public interface.
	pub fn interface(namespace: &str, name: &str) -> Self {
		Self::builder(TypeKind::Interface, namespace, name)
			.public()
			.attributes(TypeAttributes::ABSTRACT)
			.build()
	}

	/// Public delegate type with the given invoke signature.
	pub fn delegate(namespace: &str, name: &str, invoke: Signature) -> Self {
		Self::builder(TypeKind::Delegate, namespace, name)
			.public()
			.attributes(TypeAttributes::SEALED)
			.base(known::MULTICAST_DELEGATE)
			.invoke(invoke)
			.build()
	}

	/// Single-dimensional array of `element`.
	pub fn array_of(element: TypeRef) -> Self {
		Self::array_of_rank(element, 1)
	}

	/// Array of `element` with the given rank (at least 1).
	pub fn array_of_rank(element: TypeRef, rank: u8) -> Self {
		let attributes = element.attributes() & TypeAttributes::PUBLIC;
		Self::from_info(TypeInfo {
			namespace: None,
			name: String::new(),
			declaring: None,
			kind: TypeKind::Array,
			attributes: attributes | TypeAttributes::SEALED,
			generic_args: Vec::new(),
			element: Some(element),
			rank: rank.max(1),
			generic_position: None,
			base: Some(known::ARRAY.to_string()),
			interfaces: vec![known::IENUMERABLE.to_string()],
			invoke: None,
		})
	}

	/// Unbound generic parameter `name` at `position`.
	pub fn generic_parameter(name: &str, position: u16) -> Self {
		Self::from_info(TypeInfo {
			namespace: None,
			name: name.to_string(),
			declaring: None,
			kind: TypeKind::GenericParameter,
			attributes: TypeAttributes::empty(),
			generic_args: Vec::new(),
			element: None,
			rank: 0,
			generic_position: Some(position),
			base: None,
			interfaces: Vec::new(),
			invoke: None,
		})
	}

	/// Closes (or re-closes) this generic type over `args`.
	pub fn make_generic(&self, args: Vec<TypeRef>) -> Self {
		let mut info = self.0.info.clone();
		info.generic_args = args;
		Self::from_info(info)
	}

	pub fn info(&self) -> &TypeInfo {
		&self.0.info
	}

	/// Canonical type identity used for strict import/export matching.
	pub fn identity(&self) -> &str {
		&self.0.identity
	}

	/// Canonical contract name of this type.
	pub fn contract_name(&self) -> String {
		identity::format_type(&self.0.info, NameMode::ContractName)
	}

	pub fn namespace(&self) -> Option<&str> {
		self.0.info.namespace.as_deref()
	}

	pub fn name(&self) -> &str {
		&self.0.info.name
	}

	pub fn kind(&self) -> TypeKind {
		self.0.info.kind
	}

	pub fn attributes(&self) -> TypeAttributes {
		self.0.info.attributes
	}

	pub fn is_public(&self) -> bool {
		self.attributes().contains(TypeAttributes::PUBLIC)
	}

	pub fn is_abstract(&self) -> bool {
		self.attributes().contains(TypeAttributes::ABSTRACT)
	}

	pub fn is_class(&self) -> bool {
		self.kind() == TypeKind::Class
	}

	pub fn is_interface(&self) -> bool {
		self.kind() == TypeKind::Interface
	}

	pub fn is_value_type(&self) -> bool {
		matches!(self.kind(), TypeKind::Struct | TypeKind::Enum)
	}

	pub fn is_delegate(&self) -> bool {
		self.kind() == TypeKind::Delegate
	}

	pub fn is_array(&self) -> bool {
		self.kind() == TypeKind::Array
	}

	pub fn is_void(&self) -> bool {
		self.kind() == TypeKind::Void
	}

	pub fn is_generic_parameter(&self) -> bool {
		self.kind() == TypeKind::GenericParameter
	}

	/// True for the universal base object type.
	pub fn is_object(&self) -> bool {
		self.identity() == known::OBJECT
	}

	pub fn generic_args(&self) -> &[TypeRef] {
		&self.0.info.generic_args
	}

	pub fn element_type(&self) -> Option<&TypeRef> {
		self.0.info.element.as_ref()
	}

	pub fn rank(&self) -> u8 {
		self.0.info.rank
	}

	pub fn declaring_type(&self) -> Option<&TypeRef> {
		self.0.info.declaring.as_ref()
	}

	/// Identity of the base type, if any.
	pub fn base_type(&self) -> Option<&str> {
		self.0.info.base.as_deref()
	}

	/// Identities of the interfaces this type implements.
	pub fn interfaces(&self) -> &[String] {
		&self.0.info.interfaces
	}

	/// Whether this type is, or implements, the interface with `identity`.
	pub fn implements(&self, identity: &str) -> bool {
		self.identity() == identity || self.interfaces().iter().any(|i| i == identity)
	}

	/// Invoke signature of a delegate type.
	pub fn invoke_signature(&self) -> Option<&Signature> {
		self.0.info.invoke.as_ref()
	}

	/// Structural enumerable test: arrays and anything implementing the
	/// non-generic enumerable interface. `System.String` passes this test.
	pub fn implements_enumerable(&self) -> bool {
		self.is_array() || self.implements(known::IENUMERABLE)
	}
}

impl PartialEq for TypeRef {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0) || self.identity() == other.identity()
	}
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.identity().hash(state);
	}
}

impl fmt::Debug for TypeRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("TypeRef").field(&self.identity()).finish()
	}
}

impl fmt::Display for TypeRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.identity())
	}
}

impl Serialize for TypeRef {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.0.info.serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for TypeRef {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		TypeInfo::deserialize(deserializer).map(TypeRef::from_info)
	}
}

/// Builder for named type shapes.
#[derive(Debug, Clone)]
pub struct TypeBuilder {
	info: TypeInfo,
}

impl TypeBuilder {
	pub fn new(kind: TypeKind, namespace: &str, name: &str) -> Self {
		let namespace = (!namespace.is_empty()).then(|| namespace.to_string());
		let base = match kind {
			TypeKind::Class => Some(known::OBJECT.to_string()),
			TypeKind::Struct => Some(known::VALUE_TYPE.to_string()),
			TypeKind::Enum => Some(known::ENUM.to_string()),
			_ => None,
		};
		Self {
			info: TypeInfo {
				namespace,
				name: name.to_string(),
				declaring: None,
				kind,
				attributes: TypeAttributes::empty(),
				generic_args: Vec::new(),
				element: None,
				rank: 0,
				generic_position: None,
				base,
				interfaces: Vec::new(),
				invoke: None,
			},
		}
	}

	pub fn public(mut self) -> Self {
		self.info.attributes |= TypeAttributes::PUBLIC;
		self
	}

	pub fn attributes(mut self, attributes: TypeAttributes) -> Self {
		self.info.attributes |= attributes;
		self
	}

	/// Nests this type inside `declaring`; the namespace comes from the outer type.
	pub fn nested_in(mut self, declaring: TypeRef) -> Self {
		self.info.namespace = None;
		self.info.declaring = Some(declaring);
		self
	}

	pub fn generic_args(mut self, args: Vec<TypeRef>) -> Self {
		self.info.generic_args = args;
		self
	}

	/// Sets the base type identity.
	pub fn base(mut self, identity: &str) -> Self {
		self.info.base = Some(identity.to_string());
		self
	}

	/// Clears the base type (root of the hierarchy).
	pub fn no_base(mut self) -> Self {
		self.info.base = None;
		self
	}

	/// Records an implemented interface by identity.
	pub fn interface(mut self, identity: &str) -> Self {
		if !self.info.interfaces.iter().any(|i| i == identity) {
			self.info.interfaces.push(identity.to_string());
		}
		self
	}

	pub fn invoke(mut self, signature: Signature) -> Self {
		self.info.invoke = Some(signature);
		self
	}

	pub fn build(self) -> TypeRef {
		TypeRef::from_info(self.info)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn equality_goes_through_identity() {
		let a = TypeRef::class("Acme", "Widget");
		let b = TypeRef::class("Acme", "Widget");
		let c = TypeRef::class("Acme", "Gadget");
		assert_eq!(a, b);
		assert_ne!(a, c);
	}

	#[test]
	fn arrays_inherit_visibility_and_are_enumerable() {
		let widgets = TypeRef::array_of(TypeRef::class("Acme", "Widget"));
		assert!(widgets.is_public());
		assert!(widgets.implements_enumerable());
		assert_eq!(widgets.element_type().map(TypeRef::identity), Some("Acme.Widget"));
	}

	#[test]
	fn string_is_structurally_enumerable() {
		assert!(known::string().implements_enumerable());
		assert!(!known::int32().implements_enumerable());
	}

	#[test]
	fn make_generic_replaces_arguments() {
		let open = TypeRef::builder(TypeKind::Class, "Acme", "Box")
			.public()
			.generic_args(vec![TypeRef::generic_parameter("T", 0)])
			.build();
		let closed = open.make_generic(vec![known::int32()]);
		assert_eq!(closed.identity(), "Acme.Box(System.Int32)");
		assert_eq!(open.identity(), "Acme.Box({0})");
	}
}
