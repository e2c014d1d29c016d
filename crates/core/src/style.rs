//! Structured style sheets.
//!
//! Editors describe their output as [`Declaration`]s grouped into
//! [`StyleRule`]s. The same declarations drive both the exported text and the
//! live preview, so the preview never has to split generated CSS apart.

use serde::Serialize;
use std::fmt;

/// One `property: value;` pair, with an optional trailing `/* note */`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Shorthand for [`Declaration::new`].
pub fn decl(property: impl Into<String>, value: impl Into<String>) -> Declaration {
    Declaration::new(property, value)
}

/// A rule block, or a bare list of declarations when `selector` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleRule {
    pub comment: Option<String>,
    pub selector: Option<String>,
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            comment: None,
            selector: Some(selector.into()),
            declarations,
        }
    }

    /// Declarations without an enclosing selector.
    pub fn bare(declarations: Vec<Declaration>) -> Self {
        Self {
            comment: None,
            selector: None,
            declarations,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Value of the first declaration of `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        if let Some(comment) = &self.comment {
            writeln!(f, "{pad}/* {comment} */")?;
        }
        let inner_pad = match &self.selector {
            Some(selector) => {
                writeln!(f, "{pad}{selector} {{")?;
                format!("{pad}  ")
            }
            None => pad.clone(),
        };
        for (i, d) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{inner_pad}{}: {};", d.property, d.value)?;
            if let Some(note) = &d.note {
                write!(f, " /* {note} */")?;
            }
        }
        if self.selector.is_some() {
            if !self.declarations.is_empty() {
                f.write_str("\n")?;
            }
            write!(f, "{pad}}}")?;
        }
        Ok(())
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// A top-level entry of a [`StyleSheet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SheetItem {
    Rule(StyleRule),
    Media {
        comment: Option<String>,
        query: String,
        rules: Vec<StyleRule>,
    },
    /// Pre-formatted text such as an `@keyframes` block.
    Raw(String),
}

impl fmt::Display for SheetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetItem::Rule(rule) => rule.fmt(f),
            SheetItem::Media {
                comment,
                query,
                rules,
            } => {
                if let Some(comment) = comment {
                    writeln!(f, "/* {comment} */")?;
                }
                writeln!(f, "@media {query} {{")?;
                for rule in rules {
                    rule.write_indented(f, 1)?;
                    f.write_str("\n")?;
                }
                f.write_str("}")
            }
            SheetItem::Raw(text) => f.write_str(text),
        }
    }
}

/// Ordered sheet items, separated by blank lines when displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleSheet {
    pub items: Vec<SheetItem>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sheet holding a single rule.
    pub fn single(rule: StyleRule) -> Self {
        Self {
            items: vec![SheetItem::Rule(rule)],
        }
    }

    pub fn rule(mut self, rule: StyleRule) -> Self {
        self.items.push(SheetItem::Rule(rule));
        self
    }

    pub fn media(
        mut self,
        comment: Option<&str>,
        query: impl Into<String>,
        rules: Vec<StyleRule>,
    ) -> Self {
        self.items.push(SheetItem::Media {
            comment: comment.map(str::to_owned),
            query: query.into(),
            rules,
        });
        self
    }

    pub fn raw(mut self, text: impl Into<String>) -> Self {
        self.items.push(SheetItem::Raw(text.into()));
        self
    }

    /// All rules, in order, excluding those nested in media queries.
    pub fn rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.items.iter().filter_map(|item| match item {
            SheetItem::Rule(rule) => Some(rule),
            _ => None,
        })
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            item.fmt(f)?;
        }
        Ok(())
    }
}
