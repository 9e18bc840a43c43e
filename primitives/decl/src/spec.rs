//! Fields, parameters, methods and type declarations.

use crate::code::{Arg, CodeBlock, CodeBlockBuilder};
use crate::name::{ClassName, TypeName};
use crate::writer::CodeWriter;
use crate::Result;

/// Declaration modifiers, ordered the way Java style guides list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `abstract`
    Abstract,
    /// `default`
    Default,
    /// `static`
    Static,
    /// `final`
    Final,
    /// `volatile`
    Volatile,
    /// `synchronized`
    Synchronized,
}

impl Modifier {
    /// Java keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Default => "default",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
        }
    }
}

fn add_modifiers(into: &mut Vec<Modifier>, modifiers: impl IntoIterator<Item = Modifier>) {
    for modifier in modifiers {
        if !into.contains(&modifier) {
            into.push(modifier);
        }
    }
    into.sort();
}

fn emit_modifiers(w: &mut CodeWriter<'_>, modifiers: &[Modifier]) {
    for modifier in modifiers {
        w.emit(modifier.keyword());
        w.emit(" ");
    }
}

fn emit_javadoc(w: &mut CodeWriter<'_>, javadoc: Option<&str>) {
    let Some(javadoc) = javadoc else { return };
    w.emit("/**\n");
    for line in javadoc.trim_end().lines() {
        if line.is_empty() {
            w.emit(" *\n");
        } else {
            w.emit(" * ");
            w.emit(line);
            w.emit("\n");
        }
    }
    w.emit(" */\n");
}

/// An annotation such as `@Override` or `@Generated("...")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    type_name: ClassName,
    value: Option<CodeBlock>,
}

impl Annotation {
    /// A marker annotation.
    pub fn new(type_name: ClassName) -> Self { Self { type_name, value: None } }

    /// An annotation with a single `value` element.
    pub fn with_value(type_name: ClassName, value: CodeBlock) -> Self {
        Self { type_name, value: Some(value) }
    }

    /// `@Override`.
    pub fn override_() -> Self { Self::new(ClassName::java_lang("Override")) }

    /// `@Deprecated`.
    pub fn deprecated() -> Self { Self::new(ClassName::java_lang("Deprecated")) }

    /// Annotation type.
    pub fn type_name(&self) -> &ClassName { &self.type_name }

    fn collect_classes<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        out.push(&self.type_name);
        if let Some(value) = &self.value {
            value.collect_classes(out);
        }
    }

    fn emit(&self, w: &mut CodeWriter<'_>) {
        w.emit("@");
        w.emit_type(&TypeName::Class(self.type_name.clone()));
        if let Some(value) = &self.value {
            w.emit("(");
            w.emit_code(value);
            w.emit(")");
        }
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDecl {
    name: String,
    type_name: TypeName,
    modifiers: Vec<Modifier>,
}

impl ParameterDecl {
    /// A parameter called `name` of `type_name`.
    pub fn new(type_name: impl Into<TypeName>, name: impl Into<String>) -> Self {
        Self { name: name.into(), type_name: type_name.into(), modifiers: Vec::new() }
    }

    /// Mark the parameter `final`.
    pub fn final_(mut self) -> Self {
        add_modifiers(&mut self.modifiers, [Modifier::Final]);
        self
    }

    /// Parameter name.
    pub fn name(&self) -> &str { &self.name }

    /// Parameter type.
    pub fn type_name(&self) -> &TypeName { &self.type_name }

    fn emit(&self, w: &mut CodeWriter<'_>, varargs: bool) {
        emit_modifiers(w, &self.modifiers);
        match (&self.type_name, varargs) {
            (TypeName::Array(component), true) => {
                w.emit_type(component);
                w.emit("...");
            }
            (type_name, _) => w.emit_type(type_name),
        }
        w.emit(" ");
        w.emit(&self.name);
    }
}

impl From<&ParameterDecl> for Arg {
    fn from(value: &ParameterDecl) -> Self { Arg::Text(value.name.clone()) }
}

/// A field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    name: String,
    type_name: TypeName,
    modifiers: Vec<Modifier>,
    javadoc: Option<String>,
    initializer: Option<CodeBlock>,
}

impl FieldDecl {
    /// Start a field declaration.
    pub fn builder(type_name: impl Into<TypeName>, name: impl Into<String>) -> FieldDeclBuilder {
        FieldDeclBuilder {
            field: FieldDecl {
                name: name.into(),
                type_name: type_name.into(),
                modifiers: Vec::new(),
                javadoc: None,
                initializer: None,
            },
        }
    }

    /// Field name.
    pub fn name(&self) -> &str { &self.name }

    /// Field type.
    pub fn type_name(&self) -> &TypeName { &self.type_name }

    /// Modifiers in canonical order.
    pub fn modifiers(&self) -> &[Modifier] { &self.modifiers }

    /// Whether the field carries `modifier`.
    pub fn has_modifier(&self, modifier: Modifier) -> bool { self.modifiers.contains(&modifier) }

    fn collect_classes<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        self.type_name.collect_classes(out);
        if let Some(initializer) = &self.initializer {
            initializer.collect_classes(out);
        }
    }

    fn emit(&self, w: &mut CodeWriter<'_>) {
        emit_javadoc(w, self.javadoc.as_deref());
        emit_modifiers(w, &self.modifiers);
        w.emit_type(&self.type_name);
        w.emit(" ");
        w.emit(&self.name);
        if let Some(initializer) = &self.initializer {
            w.emit(" = ");
            w.emit_code(initializer);
        }
        w.emit(";\n");
    }
}

impl From<&FieldDecl> for Arg {
    fn from(value: &FieldDecl) -> Self { Arg::Text(value.name.clone()) }
}

/// By-value builder for [`FieldDecl`].
#[derive(Debug)]
pub struct FieldDeclBuilder {
    field: FieldDecl,
}

impl FieldDeclBuilder {
    /// Add modifiers.
    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        add_modifiers(&mut self.field.modifiers, modifiers);
        self
    }

    /// Set the javadoc text.
    pub fn javadoc(mut self, javadoc: impl Into<String>) -> Self {
        self.field.javadoc = Some(javadoc.into());
        self
    }

    /// Set the initializer expression.
    pub fn initializer(mut self, initializer: CodeBlock) -> Self {
        self.field.initializer = Some(initializer);
        self
    }

    /// Finish the field.
    pub fn build(self) -> FieldDecl { self.field }
}

/// A method or constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    name: String,
    constructor: bool,
    javadoc: Option<String>,
    annotations: Vec<Annotation>,
    modifiers: Vec<Modifier>,
    type_variables: Vec<TypeName>,
    return_type: TypeName,
    parameters: Vec<ParameterDecl>,
    varargs: bool,
    exceptions: Vec<TypeName>,
    body: CodeBlock,
}

impl MethodDecl {
    /// Start a method declaration. The return type defaults to `void`.
    pub fn builder(name: impl Into<String>) -> MethodDeclBuilder {
        MethodDeclBuilder::new(name.into(), false)
    }

    /// Start a constructor declaration.
    pub fn constructor() -> MethodDeclBuilder { MethodDeclBuilder::new("<init>".to_string(), true) }

    /// Method name, `<init>` for constructors.
    pub fn name(&self) -> &str { &self.name }

    /// Whether this is a constructor.
    pub fn is_constructor(&self) -> bool { self.constructor }

    /// Modifiers in canonical order.
    pub fn modifiers(&self) -> &[Modifier] { &self.modifiers }

    /// Whether the method carries `modifier`.
    pub fn has_modifier(&self, modifier: Modifier) -> bool { self.modifiers.contains(&modifier) }

    /// Annotations in declaration order.
    pub fn annotations(&self) -> &[Annotation] { &self.annotations }

    /// Return type.
    pub fn return_type(&self) -> &TypeName { &self.return_type }

    /// Parameters.
    pub fn parameters(&self) -> &[ParameterDecl] { &self.parameters }

    /// Whether the last parameter is variadic.
    pub fn is_varargs(&self) -> bool { self.varargs }

    /// Declared exceptions.
    pub fn exceptions(&self) -> &[TypeName] { &self.exceptions }

    /// Method body; empty for abstract methods.
    pub fn body(&self) -> &CodeBlock { &self.body }

    fn has_body(&self, in_interface: bool) -> bool {
        if self.has_modifier(Modifier::Abstract) {
            return false;
        }
        !in_interface
            || self.has_modifier(Modifier::Default)
            || self.has_modifier(Modifier::Static)
    }

    fn collect_classes<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        self.annotations.iter().for_each(|a| a.collect_classes(out));
        self.type_variables.iter().for_each(|t| t.collect_classes(out));
        self.return_type.collect_classes(out);
        self.parameters.iter().for_each(|p| p.type_name.collect_classes(out));
        self.exceptions.iter().for_each(|e| e.collect_classes(out));
        self.body.collect_classes(out);
    }

    fn emit(&self, w: &mut CodeWriter<'_>, enclosing: &str, in_interface: bool) {
        emit_javadoc(w, self.javadoc.as_deref());
        for annotation in &self.annotations {
            annotation.emit(w);
            w.emit("\n");
        }
        emit_modifiers(w, &self.modifiers);

        if !self.type_variables.is_empty() {
            w.emit("<");
            for (i, variable) in self.type_variables.iter().enumerate() {
                if i > 0 {
                    w.emit(", ");
                }
                w.emit_type_variable_decl(variable);
            }
            w.emit("> ");
        }

        if self.constructor {
            w.emit(enclosing);
        } else {
            w.emit_type(&self.return_type);
            w.emit(" ");
            w.emit(&self.name);
        }

        w.emit("(");
        let last = self.parameters.len().saturating_sub(1);
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                w.emit(", ");
            }
            parameter.emit(w, self.varargs && i == last);
        }
        w.emit(")");

        if !self.exceptions.is_empty() {
            w.emit(" throws ");
            for (i, exception) in self.exceptions.iter().enumerate() {
                if i > 0 {
                    w.emit(", ");
                }
                w.emit_type(exception);
            }
        }

        if self.has_body(in_interface) {
            w.emit(" {\n");
            w.indent();
            w.emit_code(&self.body);
            w.unindent();
            w.emit("}\n");
        } else {
            w.emit(";\n");
        }
    }
}

impl From<&MethodDecl> for Arg {
    fn from(value: &MethodDecl) -> Self { Arg::Text(value.name.clone()) }
}

/// By-value builder for [`MethodDecl`].
///
/// Body-building calls mirror [`CodeBlockBuilder`]; the first format error is
/// reported by [`build`](Self::build).
#[derive(Debug)]
pub struct MethodDeclBuilder {
    name: String,
    constructor: bool,
    javadoc: Option<String>,
    annotations: Vec<Annotation>,
    modifiers: Vec<Modifier>,
    type_variables: Vec<TypeName>,
    return_type: TypeName,
    parameters: Vec<ParameterDecl>,
    varargs: bool,
    exceptions: Vec<TypeName>,
    code: CodeBlockBuilder,
}

impl MethodDeclBuilder {
    fn new(name: String, constructor: bool) -> Self {
        Self {
            name,
            constructor,
            javadoc: None,
            annotations: Vec::new(),
            modifiers: Vec::new(),
            type_variables: Vec::new(),
            return_type: TypeName::Void,
            parameters: Vec::new(),
            varargs: false,
            exceptions: Vec::new(),
            code: CodeBlock::builder(),
        }
    }

    /// Set the javadoc text.
    pub fn javadoc(mut self, javadoc: impl Into<String>) -> Self {
        self.javadoc = Some(javadoc.into());
        self
    }

    /// Add an annotation.
    pub fn add_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add modifiers.
    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        add_modifiers(&mut self.modifiers, modifiers);
        self
    }

    /// Declare a method type variable.
    pub fn add_type_variable(mut self, variable: TypeName) -> Self {
        self.type_variables.push(variable);
        self
    }

    /// Set the return type.
    pub fn returns(mut self, return_type: impl Into<TypeName>) -> Self {
        self.return_type = return_type.into();
        self
    }

    /// Add a parameter.
    pub fn add_parameter(mut self, parameter: ParameterDecl) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Make the last parameter, which must be an array, variadic.
    pub fn varargs(mut self, varargs: bool) -> Self {
        self.varargs = varargs;
        self
    }

    /// Declare a thrown exception.
    pub fn add_exception(mut self, exception: impl Into<TypeName>) -> Self {
        self.exceptions.push(exception.into());
        self
    }

    /// Append formatted code.
    pub fn add_code_fmt(mut self, format: &str, args: Vec<Arg>) -> Self {
        self.code.push(format, args);
        self
    }

    /// Append an already-built block.
    pub fn add_code(mut self, code: CodeBlock) -> Self {
        self.code.push_code(code);
        self
    }

    /// Append a statement.
    pub fn add_statement(mut self, format: &str, args: Vec<Arg>) -> Self {
        self.code.push_statement(format, args);
        self
    }

    /// Open a `{` block.
    pub fn begin_control_flow(mut self, format: &str, args: Vec<Arg>) -> Self {
        self.code.push_begin_control_flow(format, args);
        self
    }

    /// Close the current block and open a sibling.
    pub fn next_control_flow(mut self, format: &str, args: Vec<Arg>) -> Self {
        self.code.push_next_control_flow(format, args);
        self
    }

    /// Close the current block.
    pub fn end_control_flow(mut self) -> Self {
        self.code.push_end_control_flow();
        self
    }

    /// Whether no body code has been added yet.
    pub fn has_empty_body(&self) -> bool { self.code.is_empty() }

    /// Finish the method.
    pub fn build(self) -> Result<MethodDecl> {
        Ok(MethodDecl {
            body: self.code.build()?,
            name: self.name,
            constructor: self.constructor,
            javadoc: self.javadoc,
            annotations: self.annotations,
            modifiers: self.modifiers,
            type_variables: self.type_variables,
            return_type: self.return_type,
            parameters: self.parameters,
            varargs: self.varargs,
            exceptions: self.exceptions,
        })
    }
}

/// Class or interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// `class`
    Class,
    /// `interface`
    Interface,
}

/// A top-level class or interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    kind: TypeKind,
    name: String,
    javadoc: Option<String>,
    annotations: Vec<Annotation>,
    modifiers: Vec<Modifier>,
    type_variables: Vec<TypeName>,
    superclass: Option<TypeName>,
    superinterfaces: Vec<TypeName>,
    fields: Vec<FieldDecl>,
    methods: Vec<MethodDecl>,
}

impl TypeDecl {
    /// Start a class declaration.
    pub fn class_builder(name: impl Into<String>) -> TypeDeclBuilder {
        TypeDeclBuilder::new(TypeKind::Class, name.into())
    }

    /// Start an interface declaration.
    pub fn interface_builder(name: impl Into<String>) -> TypeDeclBuilder {
        TypeDeclBuilder::new(TypeKind::Interface, name.into())
    }

    /// Class or interface.
    pub fn kind(&self) -> TypeKind { self.kind }

    /// Simple name.
    pub fn name(&self) -> &str { &self.name }

    /// Modifiers in canonical order.
    pub fn modifiers(&self) -> &[Modifier] { &self.modifiers }

    /// Annotations in declaration order.
    pub fn annotations(&self) -> &[Annotation] { &self.annotations }

    /// Superclass, if any.
    pub fn superclass(&self) -> Option<&TypeName> { self.superclass.as_ref() }

    /// Implemented (or, for interfaces, extended) interfaces.
    pub fn superinterfaces(&self) -> &[TypeName] { &self.superinterfaces }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDecl] { &self.fields }

    /// Methods and constructors in declaration order.
    pub fn methods(&self) -> &[MethodDecl] { &self.methods }

    /// The first field called `name`.
    pub fn field(&self, name: &str) -> Option<&FieldDecl> { self.fields.iter().find(|f| f.name == name) }

    /// The first method called `name`.
    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Constructors in declaration order.
    pub fn constructors(&self) -> impl Iterator<Item = &MethodDecl> {
        self.methods.iter().filter(|m| m.constructor)
    }

    /// A copy of this declaration with `annotation` placed first.
    pub(crate) fn with_leading_annotation(&self, annotation: Annotation) -> TypeDecl {
        let mut copy = self.clone();
        copy.annotations.insert(0, annotation);
        copy
    }

    pub(crate) fn collect_classes<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        self.annotations.iter().for_each(|a| a.collect_classes(out));
        self.type_variables.iter().for_each(|t| t.collect_classes(out));
        if let Some(superclass) = &self.superclass {
            superclass.collect_classes(out);
        }
        self.superinterfaces.iter().for_each(|t| t.collect_classes(out));
        self.fields.iter().for_each(|f| f.collect_classes(out));
        self.methods.iter().for_each(|m| m.collect_classes(out));
    }

    pub(crate) fn emit(&self, w: &mut CodeWriter<'_>) {
        emit_javadoc(w, self.javadoc.as_deref());
        for annotation in &self.annotations {
            annotation.emit(w);
            w.emit("\n");
        }
        emit_modifiers(w, &self.modifiers);
        w.emit(match self.kind {
            TypeKind::Class => "class ",
            TypeKind::Interface => "interface ",
        });
        w.emit(&self.name);

        if !self.type_variables.is_empty() {
            w.emit("<");
            for (i, variable) in self.type_variables.iter().enumerate() {
                if i > 0 {
                    w.emit(", ");
                }
                w.emit_type_variable_decl(variable);
            }
            w.emit(">");
        }

        if let Some(superclass) = &self.superclass {
            w.emit(" extends ");
            w.emit_type(superclass);
        }

        if !self.superinterfaces.is_empty() {
            w.emit(match self.kind {
                TypeKind::Class => " implements ",
                TypeKind::Interface => " extends ",
            });
            for (i, interface) in self.superinterfaces.iter().enumerate() {
                if i > 0 {
                    w.emit(", ");
                }
                w.emit_type(interface);
            }
        }

        w.emit(" {\n");
        w.indent();
        let in_interface = self.kind == TypeKind::Interface;
        let mut first = true;
        for field in &self.fields {
            if !first {
                w.emit("\n");
            }
            field.emit(w);
            first = false;
        }
        for method in &self.methods {
            if !first {
                w.emit("\n");
            }
            method.emit(w, &self.name, in_interface);
            first = false;
        }
        w.unindent();
        w.emit("}\n");
    }
}

/// By-value builder for [`TypeDecl`].
#[derive(Debug)]
pub struct TypeDeclBuilder {
    decl: TypeDecl,
}

impl TypeDeclBuilder {
    fn new(kind: TypeKind, name: String) -> Self {
        Self {
            decl: TypeDecl {
                kind,
                name,
                javadoc: None,
                annotations: Vec::new(),
                modifiers: Vec::new(),
                type_variables: Vec::new(),
                superclass: None,
                superinterfaces: Vec::new(),
                fields: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    /// Set the javadoc text.
    pub fn javadoc(mut self, javadoc: impl Into<String>) -> Self {
        self.decl.javadoc = Some(javadoc.into());
        self
    }

    /// Add an annotation.
    pub fn add_annotation(mut self, annotation: Annotation) -> Self {
        self.decl.annotations.push(annotation);
        self
    }

    /// Add modifiers.
    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        add_modifiers(&mut self.decl.modifiers, modifiers);
        self
    }

    /// Declare a type variable.
    pub fn add_type_variable(mut self, variable: TypeName) -> Self {
        self.decl.type_variables.push(variable);
        self
    }

    /// Set the superclass.
    pub fn superclass(mut self, superclass: impl Into<TypeName>) -> Self {
        self.decl.superclass = Some(superclass.into());
        self
    }

    /// Add an implemented (or extended) interface.
    pub fn add_superinterface(mut self, interface: impl Into<TypeName>) -> Self {
        self.decl.superinterfaces.push(interface.into());
        self
    }

    /// Add a field.
    pub fn add_field(mut self, field: FieldDecl) -> Self {
        self.decl.fields.push(field);
        self
    }

    /// Add a method or constructor.
    pub fn add_method(mut self, method: MethodDecl) -> Self {
        self.decl.methods.push(method);
        self
    }

    /// Add several methods.
    pub fn add_methods(mut self, methods: impl IntoIterator<Item = MethodDecl>) -> Self {
        self.decl.methods.extend(methods);
        self
    }

    /// Finish the declaration.
    pub fn build(self) -> TypeDecl { self.decl }
}
