//! Option schema: declared type, default and alias link per key path

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use wepy_core::{Map, Value};

use crate::check::{TypeConstraint, TypeTag};

/// One schema entry
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    ty: Option<TypeConstraint>,
    default: Option<Value>,
    link: Option<String>,
}

/// Ordered mapping from dotted key path to its [`FieldSpec`].
///
/// Built once through the consuming builder methods; there is no way to
/// mutate a schema after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: IndexMap<String, FieldSpec>,
}

impl FieldSpec {
    /// Field validated against `ty`
    pub fn new(ty: impl Into<TypeConstraint>) -> Self {
        Self {
            ty: Some(ty.into()),
            default: None,
            link: None,
        }
    }

    /// Field that is only default-filled, never type checked
    pub fn untyped() -> Self {
        Self {
            ty: None,
            default: None,
            link: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Declare that this field mirrors the peer key path `target`.
    ///
    /// The link is recorded only; resolution does not follow it.
    pub fn linked_to(mut self, target: impl Into<String>) -> Self {
        self.link = Some(target.into());
        self
    }

    pub fn ty(&self) -> Option<&TypeConstraint> {
        self.ty.as_ref()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the field at `key`
    pub fn field(mut self, key: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(key.into(), spec);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.get(key)
    }

    /// Fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `(key, target)` for every field declaring a link
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter_map(|(key, spec)| spec.link().map(|target| (key, target)))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

static DEFAULT_SCHEMA: Lazy<Schema> = Lazy::new(build_default_schema);

/// The built-in option set of the build tool
pub fn default_schema() -> &'static Schema {
    &DEFAULT_SCHEMA
}

fn build_default_schema() -> Schema {
    use TypeTag::*;

    let string_or_array = TypeConstraint::AnyOf(vec![String, Array]);

    Schema::new()
        .field("entry", FieldSpec::new(String).with_default("app"))
        .field("src", FieldSpec::new(String).with_default("src"))
        .field("target", FieldSpec::new(String).with_default("weapp"))
        .field("static", FieldSpec::new(string_or_array).with_default("static"))
        .field("output", FieldSpec::new(String).with_default("weapp"))
        .field("platform", FieldSpec::new(String))
        .field("wpyExt", FieldSpec::new(String).with_default(".wpy"))
        .field("eslint", FieldSpec::new(Boolean).with_default(true))
        .field("cliLogs", FieldSpec::new(Boolean).with_default(false))
        .field("watch", FieldSpec::new(Boolean).with_default(false))
        .field("watchOption", FieldSpec::new(Object))
        .field("noCache", FieldSpec::new(Boolean).with_default(false))
        .field("build.web", FieldSpec::new(Object))
        .field("build.web.htmlTemplate", FieldSpec::new(String))
        .field("build.web.htmlOutput", FieldSpec::new(String))
        .field("build.web.jsOutput", FieldSpec::new(String))
        .field("build.web.resolve", FieldSpec::new(Object).linked_to("resolve"))
        .field("resolve", FieldSpec::new(Object).with_default(Map::new()))
        .field("compilers", FieldSpec::new(Object))
        .field("plugins", FieldSpec::new(Array).with_default(Vec::<Value>::new()))
        .field("appConfig", FieldSpec::new(Object))
        .field("appConfig.noPromiseAPI", FieldSpec::new(Array).with_default(Vec::<Value>::new()))
}
