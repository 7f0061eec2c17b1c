//! Stateful model of the monetary input field.
//!
//! Mirrors the web client's controlled input: every edit is re-parsed, the
//! numeric value becomes the model state, and the visible text is replaced
//! with the grouped rendering, which is what makes a typed `1234567` show up
//! as `1.234.567` live. Key acceptance uses the locale decimal separator
//! (`,`), not `.`, which the field treats as a thousands separator.
//!
//! Kept in the domain so the behavior is testable without any UI toolkit.

use rust_decimal::Decimal;

use crate::domain::currency::{self, ParseAmountError};

/// Per-field input policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldOptions {
    /// Accept a single `,` decimal separator.
    pub allow_decimal: bool,
    /// Accept a leading minus sign.
    pub allow_negative: bool,
}

/// A key as reported by the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Tab,
    Escape,
    Enter,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

/// A key press with modifier state.
#[derive(Debug, Clone, Copy)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }
}

/// Monetary input field holding a numeric value and its display text.
#[derive(Debug, Default)]
pub struct AmountField {
    options: FieldOptions,
    value: Decimal,
    text: String,
}

impl AmountField {
    pub fn new(options: FieldOptions) -> Self {
        Self {
            options,
            value: Decimal::ZERO,
            text: String::new(),
        }
    }

    /// Current numeric value of the field.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Current display text of the field.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// The value as sent upstream: a plain string-encoded number.
    pub fn wire_value(&self) -> String {
        self.value.to_string()
    }

    /// Applies an edited raw string to the field.
    ///
    /// The raw text is re-parsed, the numeric value is stored, and the
    /// display text is replaced with the grouped rendering. Clearing the
    /// field resets the value to zero and the text to empty. Unparseable
    /// input leaves the field untouched and reports the error.
    pub fn set_text(&mut self, raw: &str) -> Result<&str, ParseAmountError> {
        match currency::parse(raw) {
            Ok(value) => {
                self.value = value;
                self.text = currency::format(value);
                Ok(self.text.as_str())
            }
            Err(ParseAmountError::Empty) => {
                self.value = Decimal::ZERO;
                self.text.clear();
                Ok(self.text.as_str())
            }
            Err(err) => Err(err),
        }
    }

    /// Whether a key press should reach the field.
    ///
    /// Digits always pass; navigation and editing keys always pass; modifier
    /// chords (copy/paste/select-all) always pass. The decimal separator and
    /// the minus sign pass only when the field options allow them, at most
    /// once, and the minus only at the start of the text.
    pub fn accepts_key(&self, press: &KeyPress, current_text: &str, cursor: usize) -> bool {
        if press.ctrl || press.meta {
            return true;
        }

        match press.key {
            Key::Backspace
            | Key::Delete
            | Key::Tab
            | Key::Escape
            | Key::Enter
            | Key::ArrowLeft
            | Key::ArrowRight
            | Key::Home
            | Key::End => true,
            Key::Char(c) if c.is_ascii_digit() => true,
            Key::Char(',') => self.options.allow_decimal && !current_text.contains(','),
            Key::Char('-') => {
                self.options.allow_negative && cursor == 0 && !current_text.starts_with('-')
            }
            Key::Char(_) => false,
        }
    }
}
