use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};

/// A Markdown document split into YAML frontmatter and body.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub frontmatter: Frontmatter,
    pub body: String,
    /// Line number (1-based) where the body starts in the original file.
    pub body_start_line: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Frontmatter {
    fields: Mapping,
}

impl Frontmatter {
    fn value(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Scalar field rendered as a string. Numbers and booleans are stringified.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.value(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// List field. A comma-separated string counts as a list.
    pub fn list(&self, name: &str) -> Vec<String> {
        match self.value(name) {
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s.trim().to_string()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .filter(|s| !s.is_empty())
                .collect(),
            Some(Value::String(s)) => s
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// True when the field exists and is not blank (or an empty list).
    pub fn is_present(&self, name: &str) -> bool {
        match self.value(name) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(Value::Sequence(items)) => !items.is_empty(),
            Some(Value::Mapping(map)) => !map.is_empty(),
            Some(_) => true,
        }
    }
}

/// Split a Markdown file into frontmatter and body.
///
/// Files without a leading `---` fence have empty frontmatter.
pub fn parse_document(content: &str) -> Result<Document> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return Ok(Document {
            frontmatter: Frontmatter::default(),
            body: content.to_string(),
            body_start_line: 1,
        });
    };

    let mut yaml_end = None;
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            yaml_end = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }

    let Some((yaml_len, body_offset)) = yaml_end else {
        anyhow::bail!("Unterminated frontmatter block");
    };

    let yaml = &rest[..yaml_len];
    let fields = if yaml.trim().is_empty() {
        Mapping::new()
    } else {
        serde_yaml::from_str::<Mapping>(yaml).context("Invalid YAML frontmatter")?
    };

    // Opening fence + YAML lines + closing fence.
    let body_start_line = 2 + yaml.lines().count() + 1;

    Ok(Document {
        frontmatter: Frontmatter { fields },
        body: rest[body_offset..].to_string(),
        body_start_line,
    })
}
