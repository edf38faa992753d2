//! Type definitions and stable references to their members.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{Signature, TypeKind, TypeRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
	pub name: String,
	pub field_type: TypeRef,
	pub is_public: bool,
	pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
	pub name: String,
	pub property_type: TypeRef,
	pub is_public: bool,
	pub can_read: bool,
	pub can_write: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInfo {
	pub name: String,
	pub parameter_type: TypeRef,
}

impl ParameterInfo {
	pub fn new(name: &str, parameter_type: TypeRef) -> Self {
		Self {
			name: name.to_string(),
			parameter_type,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
	pub name: String,
	pub return_type: Option<TypeRef>,
	pub parameters: Vec<ParameterInfo>,
	pub is_public: bool,
	pub is_static: bool,
}

impl MethodInfo {
	pub fn signature(&self) -> Signature {
		Signature::new(
			self.return_type.clone(),
			self.parameters.iter().map(|p| p.parameter_type.clone()).collect(),
		)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorInfo {
	pub parameters: Vec<ParameterInfo>,
	pub is_public: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct TypeDefData {
	shape: TypeRef,
	fields: Vec<FieldInfo>,
	properties: Vec<PropertyInfo>,
	methods: Vec<MethodInfo>,
	constructors: Vec<ConstructorInfo>,
}

/// A type together with the members conventions can select.
#[derive(Clone)]
pub struct TypeDef(Arc<TypeDefData>);

impl TypeDef {
	pub fn builder(shape: TypeRef) -> TypeDefBuilder {
		TypeDefBuilder::new(shape)
	}

	pub fn shape(&self) -> &TypeRef {
		&self.0.shape
	}

	pub fn identity(&self) -> &str {
		self.0.shape.identity()
	}

	pub fn name(&self) -> &str {
		self.0.shape.name()
	}

	pub fn is_public(&self) -> bool {
		self.0.shape.is_public()
	}

	pub fn is_abstract(&self) -> bool {
		self.0.shape.is_abstract()
	}

	pub fn is_class(&self) -> bool {
		self.0.shape.is_class()
	}

	pub fn fields(&self) -> &[FieldInfo] {
		&self.0.fields
	}

	pub fn properties(&self) -> &[PropertyInfo] {
		&self.0.properties
	}

	pub fn methods(&self) -> &[MethodInfo] {
		&self.0.methods
	}

	pub fn constructors(&self) -> &[ConstructorInfo] {
		&self.0.constructors
	}

	pub fn field_refs(&self) -> impl Iterator<Item = FieldRef> + '_ {
		(0..self.0.fields.len()).map(|index| FieldRef { owner: self.clone(), index })
	}

	pub fn property_refs(&self) -> impl Iterator<Item = PropertyRef> + '_ {
		(0..self.0.properties.len()).map(|index| PropertyRef { owner: self.clone(), index })
	}

	pub fn method_refs(&self) -> impl Iterator<Item = MethodRef> + '_ {
		(0..self.0.methods.len()).map(|index| MethodRef { owner: self.clone(), index })
	}

	pub fn constructor_refs(&self) -> impl Iterator<Item = ConstructorRef> + '_ {
		(0..self.0.constructors.len()).map(|index| ConstructorRef { owner: self.clone(), index })
	}

	/// Every member: the type itself, then fields, properties, methods and constructors.
	pub fn members(&self) -> Vec<MemberRef> {
		let mut out = vec![MemberRef::Type(self.clone())];
		out.extend(self.field_refs().map(MemberRef::Field));
		out.extend(self.property_refs().map(MemberRef::Property));
		out.extend(self.method_refs().map(MemberRef::Method));
		out.extend(self.constructor_refs().map(MemberRef::Constructor));
		out
	}

	pub fn field(&self, name: &str) -> Option<FieldRef> {
		self.field_refs().find(|f| f.info().name == name)
	}

	pub fn property(&self, name: &str) -> Option<PropertyRef> {
		self.property_refs().find(|p| p.info().name == name)
	}

	pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = MethodRef> + 'a {
		self.method_refs().filter(move |m| m.info().name == name)
	}

	/// Public constructor without parameters.
	pub fn default_constructor(&self) -> Option<ConstructorRef> {
		self.constructor_refs()
			.find(|c| c.info().is_public && c.info().parameters.is_empty())
	}

	/// Public constructor with the most parameters; the first declared wins ties.
	pub fn greediest_constructor(&self) -> Option<ConstructorRef> {
		let mut best: Option<ConstructorRef> = None;
		for ctor in self.constructor_refs().filter(|c| c.info().is_public) {
			let better = match &best {
				Some(current) => ctor.info().parameters.len() > current.info().parameters.len(),
				None => true,
			};
			if better {
				best = Some(ctor);
			}
		}
		best
	}
}

impl PartialEq for TypeDef {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0) || self.0.shape == other.0.shape
	}
}

impl Eq for TypeDef {}

impl Hash for TypeDef {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.shape.hash(state);
	}
}

impl fmt::Debug for TypeDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("TypeDef").field(&self.identity()).finish()
	}
}

impl fmt::Display for TypeDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.identity())
	}
}

impl Serialize for TypeDef {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.0.serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for TypeDef {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		TypeDefData::deserialize(deserializer).map(|data| TypeDef(Arc::new(data)))
	}
}

/// Builder for [`TypeDef`].
///
/// Classes that declare no constructor receive an implicit public
/// parameterless one when built.
#[derive(Debug, Clone)]
pub struct TypeDefBuilder {
	shape: TypeRef,
	fields: Vec<FieldInfo>,
	properties: Vec<PropertyInfo>,
	methods: Vec<MethodInfo>,
	constructors: Vec<ConstructorInfo>,
}

impl TypeDefBuilder {
	pub fn new(shape: TypeRef) -> Self {
		Self {
			shape,
			fields: Vec::new(),
			properties: Vec::new(),
			methods: Vec::new(),
			constructors: Vec::new(),
		}
	}

	/// Public instance field.
	pub fn field(self, name: &str, field_type: TypeRef) -> Self {
		self.field_info(FieldInfo {
			name: name.to_string(),
			field_type,
			is_public: true,
			is_static: false,
		})
	}

	pub fn field_info(mut self, info: FieldInfo) -> Self {
		self.fields.push(info);
		self
	}

	/// Public read/write property.
	pub fn property(self, name: &str, property_type: TypeRef) -> Self {
		self.property_info(PropertyInfo {
			name: name.to_string(),
			property_type,
			is_public: true,
			can_read: true,
			can_write: true,
		})
	}

	pub fn property_info(mut self, info: PropertyInfo) -> Self {
		self.properties.push(info);
		self
	}

	/// Public instance method.
	pub fn method(self, name: &str, return_type: Option<TypeRef>, parameters: Vec<ParameterInfo>) -> Self {
		self.method_info(MethodInfo {
			name: name.to_string(),
			return_type,
			parameters,
			is_public: true,
			is_static: false,
		})
	}

	pub fn method_info(mut self, info: MethodInfo) -> Self {
		self.methods.push(info);
		self
	}

	/// Public constructor.
	pub fn constructor(self, parameters: Vec<ParameterInfo>) -> Self {
		self.constructor_info(ConstructorInfo {
			parameters,
			is_public: true,
		})
	}

	pub fn constructor_info(mut self, info: ConstructorInfo) -> Self {
		self.constructors.push(info);
		self
	}

	pub fn build(mut self) -> TypeDef {
		if self.shape.kind() == TypeKind::Class && self.constructors.is_empty() {
			self.constructors.push(ConstructorInfo {
				parameters: Vec::new(),
				is_public: true,
			});
		}
		TypeDef(Arc::new(TypeDefData {
			shape: self.shape,
			fields: self.fields,
			properties: self.properties,
			methods: self.methods,
			constructors: self.constructors,
		}))
	}
}

macro_rules! member_handle {
	($(#[$attr:meta])* $handle:ident => $info:ty, $list:ident) => {
		$(#[$attr])*
		#[derive(Clone, PartialEq, Eq, Hash)]
		pub struct $handle {
			owner: TypeDef,
			index: usize,
		}

		impl $handle {
			pub fn declaring_type(&self) -> &TypeDef {
				&self.owner
			}

			pub fn info(&self) -> &$info {
				&self.owner.0.$list[self.index]
			}
		}
	};
}

member_handle!(
	/// Reference to a field of a [`TypeDef`].
	FieldRef => FieldInfo, fields
);
member_handle!(
	/// Reference to a property of a [`TypeDef`].
	PropertyRef => PropertyInfo, properties
);
member_handle!(
	/// Reference to a method of a [`TypeDef`].
	MethodRef => MethodInfo, methods
);
member_handle!(
	/// Reference to a constructor of a [`TypeDef`].
	ConstructorRef => ConstructorInfo, constructors
);

impl MethodRef {
	pub fn signature(&self) -> Signature {
		self.info().signature()
	}
}

impl ConstructorRef {
	pub fn parameter_refs(&self) -> impl Iterator<Item = ParameterRef> + '_ {
		(0..self.info().parameters.len()).map(|position| ParameterRef {
			ctor: self.clone(),
			position,
		})
	}
}

/// Reference to one constructor parameter.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ParameterRef {
	ctor: ConstructorRef,
	position: usize,
}

impl ParameterRef {
	pub fn constructor(&self) -> &ConstructorRef {
		&self.ctor
	}

	pub fn position(&self) -> usize {
		self.position
	}

	pub fn info(&self) -> &ParameterInfo {
		&self.ctor.info().parameters[self.position]
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
	Type,
	Field,
	Property,
	Method,
	Constructor,
	Parameter,
}

/// A member a convention can export or import through.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum MemberRef {
	Type(TypeDef),
	Field(FieldRef),
	Property(PropertyRef),
	Method(MethodRef),
	Constructor(ConstructorRef),
	Parameter(ParameterRef),
}

impl MemberRef {
	pub fn kind(&self) -> MemberKind {
		match self {
			Self::Type(_) => MemberKind::Type,
			Self::Field(_) => MemberKind::Field,
			Self::Property(_) => MemberKind::Property,
			Self::Method(_) => MemberKind::Method,
			Self::Constructor(_) => MemberKind::Constructor,
			Self::Parameter(_) => MemberKind::Parameter,
		}
	}

	pub fn declaring_type(&self) -> &TypeDef {
		match self {
			Self::Type(ty) => ty,
			Self::Field(f) => f.declaring_type(),
			Self::Property(p) => p.declaring_type(),
			Self::Method(m) => m.declaring_type(),
			Self::Constructor(c) => c.declaring_type(),
			Self::Parameter(p) => p.constructor().declaring_type(),
		}
	}

	pub fn name(&self) -> &str {
		match self {
			Self::Type(ty) => ty.name(),
			Self::Field(f) => &f.info().name,
			Self::Property(p) => &p.info().name,
			Self::Method(m) => &m.info().name,
			Self::Constructor(_) => ".ctor",
			Self::Parameter(p) => &p.info().name,
		}
	}

	/// Declared type of the value this member carries.
	///
	/// Methods and constructors carry no single value and return `None`.
	pub fn value_type(&self) -> Option<TypeRef> {
		match self {
			Self::Type(ty) => Some(ty.shape().clone()),
			Self::Field(f) => Some(f.info().field_type.clone()),
			Self::Property(p) => Some(p.info().property_type.clone()),
			Self::Parameter(p) => Some(p.info().parameter_type.clone()),
			Self::Method(_) | Self::Constructor(_) => None,
		}
	}

	pub fn is_method(&self) -> bool {
		matches!(self, Self::Method(_))
	}

	pub fn as_method(&self) -> Option<&MethodRef> {
		match self {
			Self::Method(m) => Some(m),
			_ => None,
		}
	}

	pub fn as_constructor(&self) -> Option<&ConstructorRef> {
		match self {
			Self::Constructor(c) => Some(c),
			_ => None,
		}
	}

	/// Stable identity of this member within its type universe.
	pub fn identity(&self) -> String {
		match self {
			Self::Type(ty) => ty.identity().to_string(),
			Self::Field(_) | Self::Property(_) => {
				format!("{}.{}", self.declaring_type().identity(), self.name())
			}
			Self::Method(m) => format!(
				"{}.{}{}",
				m.declaring_type().identity(),
				m.info().name,
				parameter_list(&m.info().parameters)
			),
			Self::Constructor(c) => constructor_identity(c),
			Self::Parameter(p) => format!("{}@{}", constructor_identity(p.constructor()), p.position()),
		}
	}
}

fn constructor_identity(ctor: &ConstructorRef) -> String {
	format!(
		"{}..ctor{}",
		ctor.declaring_type().identity(),
		parameter_list(&ctor.info().parameters)
	)
}

fn parameter_list(parameters: &[ParameterInfo]) -> String {
	let types: Vec<&str> = parameters.iter().map(|p| p.parameter_type.identity()).collect();
	format!("({})", types.join(","))
}

impl fmt::Debug for MemberRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}({})", self.kind(), self.identity())
	}
}

impl fmt::Display for MemberRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.identity())
	}
}
