// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Badge-spec parsing.
//!
//! A badge spec is the compact `label-message-color` (or `label-color`)
//! string popularized by shields.io. Fields are separated by `-`, an `_`
//! stands for a space, and a doubled `--` or `__` stands for a literal `-`
//! or `_`.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::NamedColor;

/// Parsed contents of a shield.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Content {
    label: String,
    message: Option<String>,
    color: NamedColor,
}

impl Content {
    /// Build content directly from its parts.
    ///
    /// Only content that a badge spec can express is accepted, so the
    /// [`Display`](fmt::Display) form always parses back to the same value:
    ///
    /// - an empty `label` is [`BadgeSpecError::EmptyLabel`];
    /// - an empty `message` is [`BadgeSpecError::EmptyMessage`];
    /// - a message starting with `-`, or a field holding a space followed by
    ///   a space or `_`, is [`BadgeSpecError::Unescapable`].
    pub fn new(
        label: impl Into<String>,
        message: Option<String>,
        color: NamedColor,
    ) -> Result<Self, BadgeSpecError> {
        let label = label.into();
        if label.is_empty() {
            return Err(BadgeSpecError::EmptyLabel);
        }
        if has_ambiguous_space(&label) {
            return Err(BadgeSpecError::Unescapable(label));
        }
        if let Some(message) = &message {
            if message.is_empty() {
                return Err(BadgeSpecError::EmptyMessage);
            }
            // The escaped `--` would join the separator before it.
            if message.starts_with('-') || has_ambiguous_space(message) {
                return Err(BadgeSpecError::Unescapable(message.clone()));
            }
        }
        Ok(Self {
            label,
            message,
            color,
        })
    }

    /// Parse a badge spec.
    pub fn parse(raw: &str) -> Result<Self, BadgeSpecError> {
        let mut parts = split_fields(raw)?;
        let color_name = match parts.len() {
            2 | 3 => parts.pop().unwrap_or_default(),
            n => return Err(BadgeSpecError::FieldCount(n)),
        };
        let color = NamedColor::resolve(&color_name)
            .ok_or(BadgeSpecError::UnknownColor(color_name))?;
        let message = if parts.len() == 2 { parts.pop() } else { None };
        let label = parts.pop().unwrap_or_default();
        Self::new(label, message, color)
    }

    /// Text of the left band.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Text of the right band, if the shield has two bands.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The badge color.
    pub fn color(&self) -> NamedColor {
        self.color
    }

    /// Background of the label band.
    ///
    /// Two-band shields use a grey label band; single-band shields are filled
    /// entirely with the badge color.
    pub fn label_background(&self) -> NamedColor {
        if self.message.is_some() {
            NamedColor::Grey
        } else {
            self.color
        }
    }

    /// Background of the message band.
    pub fn message_background(&self) -> NamedColor {
        self.color
    }
}

impl FromStr for Content {
    type Err = BadgeSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Content {
    /// Writes the canonical badge spec for this content.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(f, &self.label)?;
        f.write_str("-")?;
        if let Some(message) = &self.message {
            write_escaped(f, message)?;
            f.write_str("-")?;
        }
        f.write_str(self.color.token())
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '-' => f.write_str("--")?,
            '_' => f.write_str("__")?,
            ' ' => f.write_str("_")?,
            other => fmt::Write::write_char(f, other)?,
        }
    }
    Ok(())
}

/// A space escapes to a lone `_`, which merges with a following `_` or `__`.
fn has_ambiguous_space(text: &str) -> bool {
    text.contains("  ") || text.contains(" _")
}

/// Look-behind state of the field scanner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Scan {
    /// A character has been read but not yet committed, because the next one
    /// may turn it into an escape.
    Pending(char),
    /// The previous character completed an escape and has been committed.
    Settled,
}

/// Split a badge spec into unescaped fields.
fn split_fields(raw: &str) -> Result<Vec<String>, BadgeSpecError> {
    let mut chars = raw.chars();
    let first = chars.next().ok_or(BadgeSpecError::Empty)?;

    let mut parts = vec![String::new()];
    let mut state = Scan::Pending(first);
    for c in chars {
        // `parts` is never empty.
        let last = parts.len() - 1;
        state = match (state, c) {
            (Scan::Pending('_'), '_') => {
                parts[last].push('_');
                Scan::Settled
            }
            (Scan::Pending('-'), '-') => {
                parts[last].push('-');
                Scan::Settled
            }
            (Scan::Pending('-'), _) => {
                parts.push(String::new());
                Scan::Pending(c)
            }
            (Scan::Pending('_'), _) => {
                parts[last].push(' ');
                Scan::Pending(c)
            }
            (Scan::Pending(previous), _) => {
                parts[last].push(previous);
                Scan::Pending(c)
            }
            (Scan::Settled, _) => Scan::Pending(c),
        };
    }

    match state {
        Scan::Pending('-') => return Err(BadgeSpecError::TrailingSeparator),
        Scan::Pending(previous) => {
            let last = parts.len() - 1;
            parts[last].push(previous);
        }
        Scan::Settled => {}
    }
    Ok(parts)
}

/// Reasons a badge spec is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BadgeSpecError {
    /// The badge spec has no characters.
    Empty,
    /// The badge spec ends with an unescaped `-`.
    TrailingSeparator,
    /// The badge spec does not split into two or three fields.
    FieldCount(usize),
    /// The label field is empty.
    EmptyLabel,
    /// A message was given but it is empty.
    EmptyMessage,
    /// The text has no badge-spec spelling that parses back to it.
    Unescapable(String),
    /// The last field is not a known color.
    UnknownColor(String),
}

impl fmt::Display for BadgeSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("badge spec is empty"),
            Self::TrailingSeparator => f.write_str("badge spec ends with an unescaped `-`"),
            Self::FieldCount(n) => write!(
                f,
                "badge spec has {n} field(s), expected `label-color` or `label-message-color`"
            ),
            Self::EmptyLabel => f.write_str("badge spec has an empty label"),
            Self::EmptyMessage => f.write_str("badge spec has an empty message"),
            Self::Unescapable(text) => {
                write!(f, "`{text}` cannot be written as a badge spec field")
            }
            Self::UnknownColor(name) => write!(f, "unknown badge color `{name}`"),
        }
    }
}

impl core::error::Error for BadgeSpecError {}
