/// Declarative description of one stat line
use super::builder::ReportBuilder;
use crate::derived::default_display;
use serde_json::Value;

/// Converts the typed raw value into what gets displayed. It may push extra
/// lines through the builder; those land before the stat's own line.
pub type Transform<'s, T> = Box<dyn FnMut(T, &mut ReportBuilder<'_>) -> Value + 's>;

pub struct StatSpec<'s, T> {
    pub(crate) key: String,
    pub(crate) display: String,
    pub(crate) color: Option<char>,
    pub(crate) transform: Option<Transform<'s, T>>,
}

impl<'s, T> StatSpec<'s, T> {
    /// Stat read from `key`, labelled with the key's default display name.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let display = default_display(&key);
        Self {
            display: if display.is_empty() { "Stat".to_string() } else { display },
            key,
            color: None,
            transform: None,
        }
    }

    pub fn display(mut self, display: impl Into<String>) -> Self {
        let display = display.into();
        if !display.is_empty() {
            self.display = display;
        }
        self
    }

    /// Fixed color code instead of the one picked from the value type.
    pub fn color(mut self, color: char) -> Self {
        self.color = Some(color);
        self
    }

    pub fn map<F, R>(mut self, mut transform: F) -> Self
    where
        F: FnMut(T, &mut ReportBuilder<'_>) -> R + 's,
        R: Into<Value>,
        T: 's,
    {
        self.transform = Some(Box::new(
            move |raw: T, builder: &mut ReportBuilder<'_>| -> Value { transform(raw, builder).into() },
        ));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.display
    }
}

/// Integer stat, the common case.
pub fn int<'s>(key: impl Into<String>) -> StatSpec<'s, i64> {
    StatSpec::new(key)
}

pub fn text<'s>(key: impl Into<String>) -> StatSpec<'s, String> {
    StatSpec::new(key)
}

pub fn coins<'s>() -> StatSpec<'s, i64> {
    int("coins")
}
