//! Type references.

use std::fmt;

/// A fully-qualified reference to a class or interface, possibly nested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    package: String,
    /// Top-level name first, then each nested name.
    simple_names: Vec<String>,
}

impl ClassName {
    /// A class in `package` called `simple_name`. The package may be empty.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self { package: package.into(), simple_names: vec![simple_name.into()] }
    }

    /// Split a fully-qualified top-level name at its last dot.
    ///
    /// A name without dots is taken to be in the default package.
    pub fn parse(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((package, simple)) => Self::new(package, simple),
            None => Self::new("", qualified),
        }
    }

    /// A class in `java.lang`.
    pub fn java_lang(simple_name: &str) -> Self { Self::new("java.lang", simple_name) }

    /// A class nested inside this one.
    pub fn nested(&self, simple_name: impl Into<String>) -> Self {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name.into());
        Self { package: self.package.clone(), simple_names }
    }

    /// Package name.
    pub fn package(&self) -> &str { &self.package }

    /// Innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.simple_names.last().map(String::as_str).unwrap_or_default()
    }

    /// The outermost enclosing class, or `self` for a top-level class.
    pub fn top_level(&self) -> ClassName {
        Self { package: self.package.clone(), simple_names: self.simple_names[..1].to_vec() }
    }

    /// Names below the top-level class, e.g. `["Builder"]` for `Outer.Builder`.
    pub(crate) fn nested_names(&self) -> &[String] { &self.simple_names[1..] }

    /// Fully-qualified name.
    pub fn canonical_name(&self) -> String {
        let names = self.simple_names.join(".");
        if self.package.is_empty() {
            names
        } else {
            format!("{}.{}", self.package, names)
        }
    }

    /// Another top-level class in the same package.
    pub fn peer(&self, simple_name: impl Into<String>) -> Self {
        Self::new(self.package.clone(), simple_name)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.canonical_name()) }
}

/// Any Java type that can appear in a declaration or in code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// `void`.
    Void,
    /// A primitive such as `boolean` or `int`.
    Primitive(&'static str),
    /// A class or interface.
    Class(ClassName),
    /// A generic class applied to type arguments.
    Parameterized(ClassName, Vec<TypeName>),
    /// An array of a component type.
    Array(Box<TypeName>),
    /// A type variable with optional upper bounds.
    TypeVariable(String, Vec<TypeName>),
}

impl TypeName {
    /// `boolean`.
    pub const BOOLEAN: TypeName = TypeName::Primitive("boolean");
    /// `int`.
    pub const INT: TypeName = TypeName::Primitive("int");

    /// A parameterized type.
    pub fn parameterized(raw: ClassName, arguments: Vec<TypeName>) -> Self {
        TypeName::Parameterized(raw, arguments)
    }

    /// An unbounded type variable.
    pub fn type_variable(name: impl Into<String>) -> Self {
        TypeName::TypeVariable(name.into(), Vec::new())
    }

    /// A bounded type variable, `name extends bound`.
    pub fn bounded_type_variable(name: impl Into<String>, bound: impl Into<TypeName>) -> Self {
        TypeName::TypeVariable(name.into(), vec![bound.into()])
    }

    /// An array whose components are `self`.
    pub fn array_of(self) -> Self { TypeName::Array(Box::new(self)) }

    /// The raw class, if this names one.
    pub fn class_name(&self) -> Option<&ClassName> {
        match self {
            TypeName::Class(class) | TypeName::Parameterized(class, _) => Some(class),
            _ => None,
        }
    }

    /// Every class this type mentions, including type arguments and bounds.
    pub(crate) fn collect_classes<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        match self {
            TypeName::Void | TypeName::Primitive(_) => {}
            TypeName::Class(class) => out.push(class),
            TypeName::Parameterized(class, arguments) => {
                out.push(class);
                arguments.iter().for_each(|argument| argument.collect_classes(out));
            }
            TypeName::Array(component) => component.collect_classes(out),
            TypeName::TypeVariable(_, bounds) => {
                bounds.iter().for_each(|bound| bound.collect_classes(out))
            }
        }
    }
}

impl From<ClassName> for TypeName {
    fn from(class: ClassName) -> Self { TypeName::Class(class) }
}

impl From<&ClassName> for TypeName {
    fn from(class: &ClassName) -> Self { TypeName::Class(class.clone()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let class = ClassName::parse("software.amazon.awssdk.client.SdkClientHandler");
        assert_eq!(class.package(), "software.amazon.awssdk.client");
        assert_eq!(class.simple_name(), "SdkClientHandler");

        let bare = ClassName::parse("QueryAdvancedConfiguration");
        assert_eq!(bare.package(), "");
        assert_eq!(bare.canonical_name(), "QueryAdvancedConfiguration");
    }

    #[test]
    fn test_nested() {
        let outer = ClassName::new("software.amazon.awssdk.config", "ClientSecurityConfiguration");
        let builder = outer.nested("Builder");
        assert_eq!(builder.simple_name(), "Builder");
        assert_eq!(builder.top_level(), outer);
        assert_eq!(
            builder.canonical_name(),
            "software.amazon.awssdk.config.ClientSecurityConfiguration.Builder"
        );
    }

    #[test]
    fn test_collect_classes() {
        let list = ClassName::new("java.util", "List");
        let node = ClassName::new("org.w3c.dom", "Node");
        let t = TypeName::parameterized(list.clone(), vec![node.clone().into()]).array_of();
        let mut out = Vec::new();
        t.collect_classes(&mut out);
        assert_eq!(out, vec![&list, &node]);
    }
}
