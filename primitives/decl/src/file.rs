//! Compilation units.

use crate::code::CodeBlock;
use crate::name::ClassName;
use crate::spec::{Annotation, TypeDecl};
use crate::writer::{CodeWriter, ImportTable, Names};
use crate::{args, Result};

/// Value of the `@Generated` marker placed on every generated type.
pub const DEFAULT_GENERATED_VALUE: &str = "software.amazon.awssdk:codegen";

/// One `.java` file holding a single top-level type.
#[derive(Debug, Clone)]
pub struct JavaFile {
    package: String,
    type_decl: TypeDecl,
    file_comment: Option<String>,
    generated_value: Option<String>,
}

impl JavaFile {
    /// A file declaring `type_decl` in `package`.
    pub fn new(package: impl Into<String>, type_decl: TypeDecl) -> Self {
        Self {
            package: package.into(),
            type_decl,
            file_comment: None,
            generated_value: Some(DEFAULT_GENERATED_VALUE.to_string()),
        }
    }

    /// Comment placed above the package statement, such as a license header.
    pub fn file_comment(mut self, comment: impl Into<String>) -> Self {
        self.file_comment = Some(comment.into());
        self
    }

    /// Value of the `@Generated` marker, or `None` to omit it.
    pub fn generated_value(mut self, value: Option<String>) -> Self {
        self.generated_value = value;
        self
    }

    /// Package name.
    pub fn package(&self) -> &str { &self.package }

    /// The declared type.
    pub fn type_decl(&self) -> &TypeDecl { &self.type_decl }

    /// The declared type's class name.
    pub fn class_name(&self) -> ClassName { ClassName::new(self.package.clone(), self.type_decl.name()) }

    /// Path of this file relative to a source root, e.g. `a/b/C.java`.
    pub fn relative_path(&self) -> String {
        let mut path = self.package.replace('.', "/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(self.type_decl.name());
        path.push_str(".java");
        path
    }

    /// Render the file. The same file always renders to the same text.
    pub fn render(&self) -> Result<String> {
        let decl = match &self.generated_value {
            Some(value) => {
                let generated = Annotation::with_value(
                    ClassName::new("javax.annotation", "Generated"),
                    CodeBlock::of("$S", args![value.as_str()])?,
                );
                self.type_decl.with_leading_annotation(generated)
            }
            None => self.type_decl.clone(),
        };

        let declared = self.class_name();
        let mut referenced = Vec::new();
        decl.collect_classes(&mut referenced);
        let imports = ImportTable::new(&self.package, &declared, referenced);

        let mut header = String::new();
        if let Some(comment) = &self.file_comment {
            header.push_str("/*\n");
            for line in comment.trim_end().lines() {
                if line.is_empty() {
                    header.push_str(" *\n");
                } else {
                    header.push_str(" * ");
                    header.push_str(line);
                    header.push('\n');
                }
            }
            header.push_str(" */\n\n");
        }
        if !self.package.is_empty() {
            header.push_str("package ");
            header.push_str(&self.package);
            header.push_str(";\n\n");
        }
        let mut any_import = false;
        for import in imports.imports() {
            header.push_str("import ");
            header.push_str(import);
            header.push_str(";\n");
            any_import = true;
        }
        if any_import {
            header.push('\n');
        }

        let mut writer = CodeWriter::new(Names::Imports(&imports));
        decl.emit(&mut writer);
        Ok(header + &writer.finish())
    }
}
