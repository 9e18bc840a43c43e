//! Indentation-aware text output and import resolution.

use std::collections::{BTreeMap, BTreeSet};

use crate::code::{CodeBlock, CodePart};
use crate::name::{ClassName, TypeName};

const INDENT: &str = "    ";

/// Simple names that can be used unqualified in one compilation unit.
#[derive(Debug, Default)]
pub(crate) struct ImportTable {
    /// Simple names referring to exactly one class.
    unique: BTreeMap<String, ClassName>,
    imports: BTreeSet<String>,
}

impl ImportTable {
    /// Resolve the classes referenced from a file in `package` declaring `declared`.
    ///
    /// Imports name top-level classes only; nested classes are spelled through
    /// their outermost class. A simple name shared by two distinct classes is
    /// never imported, and every reference to either is written fully qualified.
    pub(crate) fn new(package: &str, declared: &ClassName, referenced: Vec<&ClassName>) -> Self {
        let mut by_simple: BTreeMap<String, BTreeSet<ClassName>> = BTreeMap::new();
        let top_levels = std::iter::once(declared).chain(referenced).map(ClassName::top_level);
        for class in top_levels {
            by_simple.entry(class.simple_name().to_string()).or_default().insert(class);
        }

        let mut table = ImportTable::default();
        for (simple, classes) in by_simple {
            if classes.len() != 1 {
                continue;
            }
            let Some(class) = classes.into_iter().next() else { continue };
            let implicit = class.package().is_empty()
                || class.package() == "java.lang"
                || class.package() == package;
            if !implicit {
                table.imports.insert(class.canonical_name());
            }
            table.unique.insert(simple, class);
        }
        table
    }

    /// Sorted import lines' class names.
    pub(crate) fn imports(&self) -> impl Iterator<Item = &String> { self.imports.iter() }

    fn resolve(&self, class: &ClassName) -> String {
        let top = class.top_level();
        let mut spelled = match self.unique.get(top.simple_name()) {
            Some(unique) if *unique == top => top.simple_name().to_string(),
            _ => top.canonical_name(),
        };
        for nested in class.nested_names() {
            spelled.push('.');
            spelled.push_str(nested);
        }
        spelled
    }
}

/// How type references are spelled.
pub(crate) enum Names<'a> {
    /// Always the simple name.
    Simple,
    /// Simple where imported or implicit, qualified otherwise.
    Imports(&'a ImportTable),
}

/// Accumulates Java source, indenting each non-empty line.
pub(crate) struct CodeWriter<'a> {
    out: String,
    level: usize,
    at_line_start: bool,
    names: Names<'a>,
}

impl<'a> CodeWriter<'a> {
    pub(crate) fn new(names: Names<'a>) -> Self {
        Self { out: String::new(), level: 0, at_line_start: true, names }
    }

    pub(crate) fn indent(&mut self) { self.level += 1; }

    pub(crate) fn unindent(&mut self) { self.level = self.level.saturating_sub(1); }

    pub(crate) fn emit(&mut self, text: &str) {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.out.push('\n');
                self.at_line_start = true;
            }
            if line.is_empty() {
                continue;
            }
            if self.at_line_start {
                for _ in 0..self.level {
                    self.out.push_str(INDENT);
                }
                self.at_line_start = false;
            }
            self.out.push_str(line);
        }
    }

    pub(crate) fn emit_type(&mut self, type_name: &TypeName) {
        let spelled = self.spell(type_name);
        self.emit(&spelled);
    }

    /// Emit a type variable declaration, including its bounds.
    pub(crate) fn emit_type_variable_decl(&mut self, type_name: &TypeName) {
        match type_name {
            TypeName::TypeVariable(name, bounds) if !bounds.is_empty() => {
                let bounds: Vec<String> = bounds.iter().map(|b| self.spell(b)).collect();
                let decl = format!("{name} extends {}", bounds.join(" & "));
                self.emit(&decl);
            }
            other => self.emit_type(other),
        }
    }

    pub(crate) fn emit_code(&mut self, code: &CodeBlock) {
        for part in code.parts() {
            match part {
                CodePart::Text(text) => self.emit(text),
                CodePart::Type(type_name) => self.emit_type(type_name),
                CodePart::Indent => self.indent(),
                CodePart::Unindent => self.unindent(),
            }
        }
    }

    pub(crate) fn finish(self) -> String { self.out }

    fn spell(&self, type_name: &TypeName) -> String {
        match type_name {
            TypeName::Void => "void".to_string(),
            TypeName::Primitive(keyword) => (*keyword).to_string(),
            TypeName::Class(class) => self.spell_class(class),
            TypeName::Parameterized(raw, arguments) => {
                let arguments: Vec<String> = arguments.iter().map(|a| self.spell(a)).collect();
                format!("{}<{}>", self.spell_class(raw), arguments.join(", "))
            }
            TypeName::Array(component) => format!("{}[]", self.spell(component)),
            TypeName::TypeVariable(name, _) => name.clone(),
        }
    }

    fn spell_class(&self, class: &ClassName) -> String {
        match self.names {
            Names::Simple => {
                let mut spelled = class.top_level().simple_name().to_string();
                for nested in class.nested_names() {
                    spelled.push('.');
                    spelled.push_str(nested);
                }
                spelled
            }
            Names::Imports(table) => table.resolve(class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_table_collisions() {
        let declared = ClassName::new("software.amazon.awssdk.services.json", "DefaultJsonClient");
        let a = ClassName::new("software.amazon.awssdk.client", "SdkClientHandler");
        let b = ClassName::new("software.amazon.awssdk.opensdk.protect.client", "SdkClientHandler");
        let list = ClassName::new("java.util", "List");
        let string = ClassName::java_lang("String");
        let table = ImportTable::new(
            "software.amazon.awssdk.services.json",
            &declared,
            vec![&a, &b, &list, &string, &list],
        );

        let imports: Vec<&String> = table.imports().collect();
        assert_eq!(imports, vec!["java.util.List"]);
        assert_eq!(table.resolve(&a), "software.amazon.awssdk.client.SdkClientHandler");
        assert_eq!(table.resolve(&string), "String");
        assert_eq!(table.resolve(&declared), "DefaultJsonClient");
    }

    #[test]
    fn test_nested_classes_import_outermost() {
        let declared = ClassName::new("p", "DefaultPBaseClientBuilder");
        let outer = ClassName::new("software.amazon.awssdk.config", "ClientListenerConfiguration");
        let builder = outer.nested("Builder");
        let table = ImportTable::new("p", &declared, vec![&builder]);

        let imports: Vec<&String> = table.imports().collect();
        assert_eq!(imports, vec!["software.amazon.awssdk.config.ClientListenerConfiguration"]);
        assert_eq!(table.resolve(&builder), "ClientListenerConfiguration.Builder");
    }

    #[test]
    fn test_indentation() {
        let mut writer = CodeWriter::new(Names::Simple);
        writer.emit("a {\n");
        writer.indent();
        writer.emit("b;\n\nc;\n");
        writer.unindent();
        writer.emit("}\n");
        assert_eq!(writer.finish(), "a {\n    b;\n\n    c;\n}\n");
    }
}
