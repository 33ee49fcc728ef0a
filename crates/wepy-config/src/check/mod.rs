//! Type constraints for schema fields
//!
//! A constraint is either one tag or an ordered list of tags satisfied when
//! any tag matches. The `Object` tag uses the loose run-time "object" kind,
//! so it also admits `null`, arrays and class instances.

use std::fmt;
use wepy_core::Value;

/// One acceptable kind of value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Function,
    Object,
    Array,
    /// Instance of a named class (nominal check)
    Named(String),
}

/// Declared type of a schema field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeConstraint {
    Single(TypeTag),
    /// Satisfied when at least one tag matches
    AnyOf(Vec<TypeTag>),
}

impl TypeTag {
    /// Whether `value` is of this kind
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            TypeTag::String => matches!(value, Value::String(_)),
            TypeTag::Number => matches!(value, Value::Number(_)),
            TypeTag::Boolean => matches!(value, Value::Bool(_)),
            TypeTag::Function => matches!(value, Value::Function(_)),
            TypeTag::Object => value.type_of() == "object",
            TypeTag::Array => value.is_array(),
            TypeTag::Named(class) => match value {
                Value::Instance(instance) => instance.is_instance_of(class),
                _ => false,
            },
        }
    }

    /// Name used in error messages
    pub fn name(&self) -> &str {
        match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Function => "function",
            TypeTag::Object => "object",
            TypeTag::Array => "array",
            TypeTag::Named(class) => class,
        }
    }
}

impl TypeConstraint {
    /// Named-class constraint
    pub fn named(class: impl Into<String>) -> Self {
        TypeConstraint::Single(TypeTag::Named(class.into()))
    }

    /// Whether `value` satisfies the constraint. An empty `AnyOf` matches nothing.
    pub fn satisfies(&self, value: &Value) -> bool {
        match self {
            TypeConstraint::Single(tag) => tag.matches(value),
            TypeConstraint::AnyOf(tags) => tags.iter().any(|tag| tag.matches(value)),
        }
    }
}

impl From<TypeTag> for TypeConstraint {
    fn from(tag: TypeTag) -> Self {
        TypeConstraint::Single(tag)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TypeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeConstraint::Single(tag) => fmt::Display::fmt(tag, f),
            TypeConstraint::AnyOf(tags) => {
                let names: Vec<&str> = tags.iter().map(TypeTag::name).collect();
                f.write_str(&names.join(" or "))
            },
        }
    }
}

/// Free-function form of [`TypeConstraint::satisfies`]
pub fn satisfies(constraint: &TypeConstraint, value: &Value) -> bool {
    constraint.satisfies(value)
}
