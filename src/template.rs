//! `{variable}` substitution for feedback messages and delivery commands.
//!
//! - `{name}` substitutes the variable `name` (surrounding whitespace inside
//!   the braces is ignored)
//! - `{{` and `}}` render literal braces; a lone `}` is kept as-is
//!
//! Referencing a variable that was not provided is an error, so a typo in a
//! config template is reported instead of silently rendering as empty.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template parsing and rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// `{}` with nothing inside.
    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },
}

/// A parsed template piece.
#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(String),
    Variable { name: &'a str, position: usize },
}

fn parse(template: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                text.push('{');
            }
            '{' => {
                let close = template[pos..]
                    .find('}')
                    .map(|offset| pos + offset)
                    .ok_or(TemplateError::UnmatchedBrace { position: pos })?;

                let name = template[pos + 1..close].trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(Segment::Variable {
                    name,
                    position: pos,
                });

                while let Some(&(idx, _)) = chars.peek() {
                    if idx > close {
                        break;
                    }
                    chars.next();
                }
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                text.push('}');
            }
            _ => text.push(ch),
        }
    }

    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }

    Ok(segments)
}

/// Render `template`, substituting every `{name}` from `variables`.
///
/// ```
/// use std::collections::HashMap;
/// use diffcue::template::render_template;
///
/// let mut vars = HashMap::new();
/// vars.insert("file_ref".to_string(), "src/lib.rs:4".to_string());
///
/// let out = render_template("@{file_ref} {{literal}}", &vars).unwrap();
/// assert_eq!(out, "@src/lib.rs:4 {literal}");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());

    for segment in parse(template)? {
        match segment {
            Segment::Text(text) => result.push_str(&text),
            Segment::Variable { name, position } => match variables.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position,
                    });
                }
            },
        }
    }

    Ok(result)
}

/// Check that `template` parses and only references names in `allowed`.
pub fn check_template(template: &str, allowed: &[&str]) -> Result<(), TemplateError> {
    for segment in parse(template)? {
        if let Segment::Variable { name, position } = segment {
            if !allowed.contains(&name) {
                return Err(TemplateError::UndefinedVariable {
                    name: name.to_string(),
                    position,
                });
            }
        }
    }
    Ok(())
}

/// Build a variables map from key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
