//! Code fragments built from format strings.

use std::fmt;

use crate::name::{ClassName, TypeName};
use crate::writer::{CodeWriter, Names};
use crate::{DeclError, Result};

/// One piece of a [`CodeBlock`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum CodePart {
    Text(String),
    Type(TypeName),
    Indent,
    Unindent,
}

/// A format argument. Usually created through the [`args!`](crate::args) macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// A name, literal or string value.
    Text(String),
    /// A type reference.
    Type(TypeName),
    /// A nested code fragment.
    Code(CodeBlock),
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self { Arg::Text(value.to_string()) }
}

impl From<String> for Arg {
    fn from(value: String) -> Self { Arg::Text(value) }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self { Arg::Text(value.clone()) }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self { Arg::Text(value.to_string()) }
}

impl From<u16> for Arg {
    fn from(value: u16) -> Self { Arg::Text(value.to_string()) }
}

impl From<ClassName> for Arg {
    fn from(value: ClassName) -> Self { Arg::Type(value.into()) }
}

impl From<&ClassName> for Arg {
    fn from(value: &ClassName) -> Self { Arg::Type(value.into()) }
}

impl From<TypeName> for Arg {
    fn from(value: TypeName) -> Self { Arg::Type(value) }
}

impl From<&TypeName> for Arg {
    fn from(value: &TypeName) -> Self { Arg::Type(value.clone()) }
}

impl From<CodeBlock> for Arg {
    fn from(value: CodeBlock) -> Self { Arg::Code(value) }
}

impl From<&CodeBlock> for Arg {
    fn from(value: &CodeBlock) -> Self { Arg::Code(value.clone()) }
}

/// An immutable fragment of Java code with resolved type references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodeBlock {
    parts: Vec<CodePart>,
}

impl CodeBlock {
    /// A single fragment from a format string.
    pub fn of(format: &str, args: Vec<Arg>) -> Result<Self> {
        let mut parts = Vec::new();
        append_format(&mut parts, format, args)?;
        Ok(Self { parts })
    }

    /// Start building a multi-statement block.
    pub fn builder() -> CodeBlockBuilder { CodeBlockBuilder::default() }

    /// Whether the block holds no code.
    pub fn is_empty(&self) -> bool { self.parts.is_empty() }

    /// Concatenate blocks, placing `separator` between them.
    pub fn join(blocks: impl IntoIterator<Item = CodeBlock>, separator: &str) -> Self {
        let mut parts = Vec::new();
        for (i, block) in blocks.into_iter().enumerate() {
            if i > 0 {
                push_text(&mut parts, separator);
            }
            extend_parts(&mut parts, block.parts);
        }
        Self { parts }
    }

    pub(crate) fn parts(&self) -> &[CodePart] { &self.parts }

    pub(crate) fn collect_classes<'a>(&'a self, out: &mut Vec<&'a ClassName>) {
        for part in &self.parts {
            if let CodePart::Type(type_name) = part {
                type_name.collect_classes(out);
            }
        }
    }
}

/// Renders the code with simple type names and no imports.
impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = CodeWriter::new(Names::Simple);
        writer.emit_code(self);
        f.write_str(&writer.finish())
    }
}

/// By-value builder for [`CodeBlock`].
///
/// The first format error is remembered and reported by [`build`](Self::build),
/// so a chain of calls needs a single `?`.
#[derive(Debug, Default)]
pub struct CodeBlockBuilder {
    parts: Vec<CodePart>,
    depth: usize,
    error: Option<DeclError>,
}

impl CodeBlockBuilder {
    /// Append formatted code without a terminator.
    pub fn add(mut self, format: &str, args: Vec<Arg>) -> Self {
        self.push(format, args);
        self
    }

    /// Append a statement: formatted code followed by `;` and a newline.
    pub fn add_statement(mut self, format: &str, args: Vec<Arg>) -> Self {
        self.push_statement(format, args);
        self
    }

    /// Open a `{` block, e.g. `if (x == null)`.
    pub fn begin_control_flow(mut self, format: &str, args: Vec<Arg>) -> Self {
        self.push_begin_control_flow(format, args);
        self
    }

    /// Close the current block and open a sibling, e.g. `else`.
    pub fn next_control_flow(mut self, format: &str, args: Vec<Arg>) -> Self {
        self.push_next_control_flow(format, args);
        self
    }

    /// Close the current block.
    pub fn end_control_flow(mut self) -> Self {
        self.push_end_control_flow();
        self
    }

    /// Append an already-built block.
    pub fn add_code(mut self, code: CodeBlock) -> Self {
        self.push_code(code);
        self
    }

    /// Finish the block.
    pub fn build(self) -> Result<CodeBlock> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if self.depth != 0 {
            return Err(DeclError::UnbalancedControlFlow(format!(
                "{} block(s) left open",
                self.depth
            )));
        }
        Ok(CodeBlock { parts: self.parts })
    }

    pub(crate) fn is_empty(&self) -> bool { self.parts.is_empty() }

    pub(crate) fn push(&mut self, format: &str, args: Vec<Arg>) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = append_format(&mut self.parts, format, args) {
            self.error = Some(error);
        }
    }

    pub(crate) fn push_statement(&mut self, format: &str, args: Vec<Arg>) {
        self.push(format, args);
        push_text(&mut self.parts, ";\n");
    }

    pub(crate) fn push_begin_control_flow(&mut self, format: &str, args: Vec<Arg>) {
        self.push(format, args);
        push_text(&mut self.parts, " {\n");
        self.parts.push(CodePart::Indent);
        self.depth += 1;
    }

    pub(crate) fn push_next_control_flow(&mut self, format: &str, args: Vec<Arg>) {
        if self.depth == 0 {
            self.fail(format!("'{format}' without an open block"));
            return;
        }
        self.parts.push(CodePart::Unindent);
        push_text(&mut self.parts, "} ");
        self.push(format, args);
        push_text(&mut self.parts, " {\n");
        self.parts.push(CodePart::Indent);
    }

    pub(crate) fn push_end_control_flow(&mut self) {
        if self.depth == 0 {
            self.fail("end of block without an open block".to_string());
            return;
        }
        self.depth -= 1;
        self.parts.push(CodePart::Unindent);
        push_text(&mut self.parts, "}\n");
    }

    pub(crate) fn push_code(&mut self, code: CodeBlock) { extend_parts(&mut self.parts, code.parts); }

    fn fail(&mut self, message: String) {
        if self.error.is_none() {
            self.error = Some(DeclError::UnbalancedControlFlow(message));
        }
    }
}

fn push_text(parts: &mut Vec<CodePart>, text: &str) {
    if text.is_empty() {
        return;
    }
    match parts.last_mut() {
        Some(CodePart::Text(last)) => last.push_str(text),
        _ => parts.push(CodePart::Text(text.to_string())),
    }
}

fn extend_parts(parts: &mut Vec<CodePart>, more: Vec<CodePart>) {
    for part in more {
        match part {
            CodePart::Text(text) => push_text(parts, &text),
            other => parts.push(other),
        }
    }
}

/// Count the argument-consuming placeholders of a format string.
fn count_placeholders(format: &str) -> usize {
    let mut count = 0;
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c == '$' && matches!(chars.next(), Some('T' | 'N' | 'S' | 'L')) {
            count += 1;
        }
    }
    count
}

fn append_format(parts: &mut Vec<CodePart>, format: &str, args: Vec<Arg>) -> Result<()> {
    let supplied = args.len();
    let count_error = || DeclError::ArgumentCount {
        format: format.to_string(),
        expected: count_placeholders(format),
        actual: supplied,
    };

    let mut args = args.into_iter().enumerate();
    let mut chars = format.chars();
    let mut text = String::new();

    while let Some(c) = chars.next() {
        if c != '$' {
            text.push(c);
            continue;
        }
        let placeholder = match chars.next() {
            Some(placeholder) => placeholder,
            None => {
                return Err(DeclError::UnknownPlaceholder {
                    placeholder: ' ',
                    format: format.to_string(),
                })
            }
        };
        match placeholder {
            '$' => text.push('$'),
            '>' | '<' => {
                push_text(parts, &std::mem::take(&mut text));
                parts.push(if placeholder == '>' { CodePart::Indent } else { CodePart::Unindent });
            }
            'T' | 'N' | 'S' | 'L' => {
                let (index, arg) = args.next().ok_or_else(count_error)?;
                match (placeholder, arg) {
                    ('T' | 'L', Arg::Type(type_name)) => {
                        push_text(parts, &std::mem::take(&mut text));
                        parts.push(CodePart::Type(type_name));
                    }
                    ('N', Arg::Text(name)) => text.push_str(&name),
                    ('S', Arg::Text(value)) => text.push_str(&string_literal(&value)),
                    ('L', Arg::Text(literal)) => text.push_str(&literal),
                    ('L', Arg::Code(code)) => {
                        push_text(parts, &std::mem::take(&mut text));
                        extend_parts(parts, code.parts);
                    }
                    _ => {
                        return Err(DeclError::ArgumentKind {
                            placeholder,
                            index,
                            format: format.to_string(),
                        })
                    }
                }
            }
            other => {
                return Err(DeclError::UnknownPlaceholder {
                    placeholder: other,
                    format: format.to_string(),
                })
            }
        }
    }

    if args.next().is_some() {
        return Err(count_error());
    }
    push_text(parts, &text);
    Ok(())
}

/// Quote and escape a Java string literal.
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn test_placeholders() {
        let handler = ClassName::new("software.amazon.awssdk.client", "SdkClientHandler");
        let code = CodeBlock::of("$T $N = $S + $L + $$1", args![handler, "clientHandler", "a\"b", 42u16])
            .expect("valid format");
        assert_eq!(code.to_string(), "SdkClientHandler clientHandler = \"a\\\"b\" + 42 + $1");
    }

    #[test]
    fn test_argument_count_mismatch() {
        let err = CodeBlock::of("$N = $N", args!["a"]).unwrap_err();
        assert_eq!(
            err,
            DeclError::ArgumentCount { format: "$N = $N".to_string(), expected: 2, actual: 1 }
        );
    }

    #[test]
    fn test_unknown_placeholder() {
        let err = CodeBlock::of("$X", args![]).unwrap_err();
        assert!(matches!(err, DeclError::UnknownPlaceholder { placeholder: 'X', .. }));
    }

    #[test]
    fn test_text_for_type_rejected() {
        let err = CodeBlock::of("$T", args!["String"]).unwrap_err();
        assert!(matches!(err, DeclError::ArgumentKind { placeholder: 'T', index: 0, .. }));
    }

    #[test]
    fn test_control_flow() {
        let code = CodeBlock::builder()
            .begin_control_flow("if ($N == null)", args!["waiters"])
            .add_statement("waiters = create()", args![])
            .next_control_flow("else", args![])
            .add_statement("reuse()", args![])
            .end_control_flow()
            .build()
            .expect("balanced");
        assert_eq!(
            code.to_string(),
            "if (waiters == null) {\n    waiters = create();\n} else {\n    reuse();\n}\n"
        );
    }

    #[test]
    fn test_unbalanced_control_flow() {
        let open = CodeBlock::builder().begin_control_flow("try", args![]).build();
        assert!(matches!(open, Err(DeclError::UnbalancedControlFlow(_))));

        let closed = CodeBlock::builder().end_control_flow().build();
        assert!(matches!(closed, Err(DeclError::UnbalancedControlFlow(_))));
    }

    #[test]
    fn test_nested_code_keeps_types() {
        let list = ClassName::new("java.util", "List");
        let inner = CodeBlock::of("new $T()", args![ClassName::new("java.util", "ArrayList")])
            .expect("valid");
        let outer = CodeBlock::of("$T x = $L", args![list, inner]).expect("valid");
        let mut classes = Vec::new();
        outer.collect_classes(&mut classes);
        assert_eq!(classes.len(), 2);
        assert_eq!(outer.to_string(), "List x = new ArrayList()");
    }

    #[test]
    fn test_join() {
        let a = CodeBlock::of("a", args![]).expect("valid");
        let b = CodeBlock::of("b", args![]).expect("valid");
        assert_eq!(CodeBlock::join([a, b], ", ").to_string(), "a, b");
    }
}
