//! Naming conventions shared by the model and the generators.

/// Suffix appended to operation names to form request class names.
pub const REQUEST_CLASS_SUFFIX: &str = "Request";

/// Suffix appended to operation names to form response class names.
pub const RESPONSE_CLASS_SUFFIX: &str = "Response";

/// Java keywords and reserved literals that cannot be used verbatim as variable names.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null",
];

/// Upper-case the first character of `name`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Lower-case the leading run of upper-case characters of `name`.
///
/// An upper-case letter followed by a lower-case one starts the next word and is
/// kept, so `APostOperation` becomes `aPostOperation` and `EC2Instance` becomes
/// `ec2Instance`.
///
/// # Examples
/// ```
/// use model::naming::uncapitalize;
/// assert_eq!(uncapitalize("APostOperation"), "aPostOperation");
/// assert_eq!(uncapitalize("DescribeInstances"), "describeInstances");
/// assert_eq!(uncapitalize("EC2Instance"), "ec2Instance");
/// ```
pub fn uncapitalize(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut i = 0;

    while i < chars.len() {
        out.extend(chars[i].to_lowercase());
        i += 1;
        let next_starts_word = i + 1 < chars.len()
            && chars[i].is_uppercase()
            && chars[i + 1].is_lowercase();
        if next_starts_word || i >= chars.len() || !chars[i].is_uppercase() {
            break;
        }
    }

    out.extend(&chars[i..]);
    out
}

/// Variable name for a type or shape name, escaping Java keywords.
pub fn variable_name(name: &str) -> String {
    let candidate = uncapitalize(name);
    if JAVA_KEYWORDS.contains(&candidate.as_str()) {
        format!("{candidate}Value")
    } else {
        candidate
    }
}

/// Whether `name` is a Java keyword.
pub fn is_java_keyword(name: &str) -> bool { JAVA_KEYWORDS.contains(&name) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncapitalize() {
        assert_eq!(uncapitalize("APostOperation"), "aPostOperation");
        assert_eq!(uncapitalize("GetItem"), "getItem");
        assert_eq!(uncapitalize("EC2Instance"), "ec2Instance");
        assert_eq!(uncapitalize("ACM"), "acm");
        assert_eq!(uncapitalize("x"), "x");
        assert_eq!(uncapitalize(""), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("json"), "Json");
        assert_eq!(capitalize("Json"), "Json");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_variable_name_escapes_keywords() {
        assert_eq!(variable_name("Default"), "defaultValue");
        assert_eq!(variable_name("QueueUrl"), "queueUrl");
        assert!(is_java_keyword("volatile"));
    }

    #[test]
    fn test_reserved_literals_are_escaped() {
        assert_eq!(variable_name("Null"), "nullValue");
        assert_eq!(variable_name("True"), "trueValue");
        assert!(is_java_keyword("false"));
    }
}
