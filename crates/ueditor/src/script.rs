//! Script fragment templates with named, typed slots
//!
//! Templates are plain JavaScript with `{{slot}}` placeholders. Every
//! placeholder must receive a value when the template is rendered, so a
//! rendered fragment never carries a leftover placeholder. Values are typed:
//! raw code is spliced as-is while text values are emitted as escaped string
//! literals.

use crate::error::{RenderError, RenderResult};

/// A value bound to a template slot
#[derive(Debug, Clone)]
pub enum ScriptValue {
    /// Raw JavaScript spliced verbatim
    Code(String),

    /// Text emitted as a double-quoted string literal
    Str(String),

    /// Text emitted as a single-quoted string literal
    SingleQuoted(String),

    /// Integer literal
    Number(i64),

    /// Any JSON value emitted as a JavaScript literal
    Json(serde_json::Value),
}

impl ScriptValue {
    pub fn code(code: impl Into<String>) -> Self {
        Self::Code(code.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self::Str(text.into())
    }

    pub fn single_quoted(text: impl Into<String>) -> Self {
        Self::SingleQuoted(text.into())
    }

    /// Render the value as JavaScript source
    pub fn to_script(&self) -> RenderResult<String> {
        match self {
            ScriptValue::Code(code) => Ok(code.clone()),
            ScriptValue::Str(text) => quote_double(text),
            ScriptValue::SingleQuoted(text) => quote_single(text),
            ScriptValue::Number(n) => Ok(n.to_string()),
            ScriptValue::Json(value) => {
                let literal = serde_json::to_string(value)?;
                Ok(escape_script_close(&literal))
            }
        }
    }
}

/// Quote text as a double-quoted JavaScript string literal
pub fn quote_double(text: &str) -> RenderResult<String> {
    let literal = serde_json::to_string(text)?;
    Ok(escape_script_close(&literal))
}

/// Quote text as a single-quoted JavaScript string literal
pub fn quote_single(text: &str) -> RenderResult<String> {
    let literal = serde_json::to_string(text)?;
    let body = &literal[1..literal.len() - 1];

    let mut quoted = String::with_capacity(literal.len() + 2);
    quoted.push('\'');

    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('"') => quoted.push('"'),
                Some(escaped) => {
                    quoted.push('\\');
                    quoted.push(escaped);
                }
                None => quoted.push('\\'),
            },
            '\'' => quoted.push_str("\\'"),
            _ => quoted.push(c),
        }
    }

    quoted.push('\'');
    Ok(escape_script_close(&quoted))
}

/// Keep a literal from terminating an enclosing `<script>` element
fn escape_script_close(literal: &str) -> String {
    literal.replace("</", "<\\/")
}

/// A named JavaScript template
#[derive(Debug, Clone, Copy)]
pub struct Template {
    name: &'static str,
    source: &'static str,
}

#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Literal(&'a str),
    Slot(&'a str),
}

impl Template {
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Names of every slot in the template, in order of appearance
    pub fn slots(&self) -> RenderResult<Vec<&'static str>> {
        Ok(self
            .segments()?
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Slot(name) => Some(name),
                Segment::Literal(_) => None,
            })
            .collect())
    }

    /// Fill every slot and return the rendered fragment
    pub fn render(&self, values: &[(&str, ScriptValue)]) -> RenderResult<String> {
        let mut rendered = String::with_capacity(self.source.len());

        for segment in self.segments()? {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Slot(slot) => {
                    let value = values
                        .iter()
                        .find(|(name, _)| *name == slot)
                        .map(|(_, value)| value)
                        .ok_or_else(|| RenderError::UnresolvedSlot {
                            template: self.name.to_string(),
                            slot: slot.to_string(),
                        })?;
                    rendered.push_str(&value.to_script()?);
                }
            }
        }

        Ok(rendered)
    }

    fn segments(&self) -> RenderResult<Vec<Segment<'static>>> {
        let source = self.source;
        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut pos = 0;

        while let Some(offset) = source[pos..].find("{{") {
            let mut open = pos + offset;

            // `{{{slot}}}` is a literal brace around a slot
            while source[open..].starts_with("{{{") {
                open += 1;
            }

            let name_start = open + 2;
            let close = source[name_start..]
                .find("}}")
                .map(|offset| name_start + offset)
                .ok_or_else(|| RenderError::MalformedTemplate {
                    template: self.name.to_string(),
                    reason: format!("unclosed slot at byte {open}"),
                })?;

            let name = source[name_start..close].trim();
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(RenderError::MalformedTemplate {
                    template: self.name.to_string(),
                    reason: format!("invalid slot name '{name}'"),
                });
            }

            if literal_start < open {
                segments.push(Segment::Literal(&source[literal_start..open]));
            }
            segments.push(Segment::Slot(name));

            pos = close + 2;
            literal_start = pos;
        }

        if literal_start < source.len() {
            segments.push(Segment::Literal(&source[literal_start..]));
        }

        Ok(segments)
    }
}
