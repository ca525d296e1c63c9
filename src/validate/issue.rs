//! Validation issues and their one-line rendering.

use std::fmt;

/// A single validation failure, located by a field path such as
/// `["options", "output"]` or `["topLevel"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: Vec<String>,
    pub message: String,
}

impl Issue {
    pub fn new(path: &[&str], message: impl Into<String>) -> Self {
        Self {
            path: path.iter().map(|segment| segment.to_string()).collect(),
            message: message.into(),
        }
    }

    /// Render as the diagnostic line printed to stderr.
    ///
    /// - `options.<name>` → `InvalidParam "<name>": <message>`
    /// - `topLevel` → `InvalidArg: <message>`
    /// - anything else → `<message>`
    pub fn render(&self) -> String {
        match self.path.split_first() {
            Some((root, rest)) if root == "options" && !rest.is_empty() => {
                let param = serde_json::Value::from(rest.join("."));
                format!("InvalidParam {}: {}", param, self.message)
            }
            Some((root, _)) if root == "topLevel" => format!("InvalidArg: {}", self.message),
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::Issue;

    #[test]
    fn option_issue_quotes_param() {
        let issue = Issue::new(&["options", "output"], "Required");
        assert_eq!(issue.render(), r#"InvalidParam "output": Required"#);
    }

    #[test]
    fn nested_option_path_joined_with_dots() {
        let issue = Issue::new(&["options", "a", "b"], "Bad");
        assert_eq!(issue.to_string(), r#"InvalidParam "a.b": Bad"#);
    }

    #[test]
    fn top_level_issue() {
        let issue = Issue::new(&["topLevel"], "Array must contain at least 1 element(s)");
        assert_eq!(
            issue.render(),
            "InvalidArg: Array must contain at least 1 element(s)"
        );
    }

    #[test]
    fn bare_options_path_falls_back_to_message() {
        let issue = Issue::new(&["options"], "Expected object");
        assert_eq!(issue.render(), "Expected object");
    }
}
