/// Ordered report construction over a player document
use super::stat::StatSpec;
use crate::colors::{self, SECTION};
use crate::derived::{format_player_name, NOT_AVAILABLE};
use crate::json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Title,
    Stat,
    Error,
}

/// One line of a report. Lines are displayed in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLine {
    pub kind: LineKind,
    pub label: String,
    pub value: String,
    pub color: char,
}

impl ReportLine {
    pub fn stat(label: impl Into<String>, value: impl Into<String>, color: char) -> Self {
        Self {
            kind: LineKind::Stat,
            label: label.into(),
            value: value.into(),
            color,
        }
    }

    /// Text with in-band color codes, ready for chat.
    pub fn formatted(&self) -> String {
        match self.kind {
            LineKind::Title => self.label.clone(),
            LineKind::Error => format!("{SECTION}{}{}", self.color, self.label),
            LineKind::Stat => format!("{}: {SECTION}{}{}", self.label, self.color, self.value),
        }
    }

    /// Text with color codes removed.
    pub fn plain(&self) -> String {
        colors::strip(&self.formatted())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<ReportLine> {
        self.lines
    }

    pub fn formatted(&self) -> Vec<String> {
        self.lines.iter().map(ReportLine::formatted).collect()
    }

    pub fn plain(&self) -> Vec<String> {
        self.lines.iter().map(ReportLine::plain).collect()
    }

    /// First stat line with the given label.
    pub fn find(&self, label: &str) -> Option<&ReportLine> {
        self.lines
            .iter()
            .find(|line| line.kind == LineKind::Stat && line.label == label)
    }
}

/// Color picked from the displayed value when a stat has no override.
pub fn default_color(value: &Value) -> char {
    match value {
        Value::Number(_) => colors::YELLOW,
        Value::String(_) => colors::GRAY,
        Value::Bool(true) => colors::GREEN,
        Value::Bool(false) => colors::RED,
        _ => colors::WHITE,
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Accumulates report lines for one player document.
///
/// Stats resolve against the active scope, which starts at the player root
/// and can be moved to any sub-document mid-build.
pub struct ReportBuilder<'a> {
    player: &'a Value,
    game: Option<&'a Value>,
    title: Option<&'a str>,
    scope: &'a Value,
    lines: Vec<ReportLine>,
}

impl<'a> ReportBuilder<'a> {
    /// Builder for the overall (network-wide) report.
    pub fn new(player: &'a Value) -> Self {
        Self {
            player,
            game: None,
            title: None,
            scope: player,
            lines: Vec::new(),
        }
    }

    /// Builder for one game. The game object is `stats.<game_key>`.
    pub fn for_game(player: &'a Value, game_key: &str, title: &'a str) -> Self {
        Self {
            player,
            game: json::get_path(player, &["stats", game_key]).filter(|game| game.is_object()),
            title: Some(title),
            scope: player,
            lines: Vec::new(),
        }
    }

    pub fn player(&self) -> &'a Value {
        self.player
    }

    pub fn game(&self) -> Option<&'a Value> {
        self.game
    }

    pub fn scope(&self) -> &'a Value {
        self.scope
    }

    pub fn set_active_scope(&mut self, scope: &'a Value) {
        self.scope = scope;
    }

    /// `"<Title> stats of <name>"`, or `"Stats of <name>"` without a game.
    pub fn first_line(&mut self) {
        let heading = match self.title {
            Some(title) => format!("{title} stats"),
            None => "Stats".to_string(),
        };
        self.lines.push(ReportLine {
            kind: LineKind::Title,
            label: format!("{heading} of {}", format_player_name(self.player)),
            value: String::new(),
            color: colors::WHITE,
        });
    }

    /// Resolve `spec` against the active scope.
    pub fn emit<T: DeserializeOwned>(&mut self, spec: StatSpec<'_, T>) {
        let scope = self.scope;
        self.emit_from(scope, spec);
    }

    /// Resolve `spec` against `scope` without moving the active scope.
    pub fn emit_from<T: DeserializeOwned>(&mut self, scope: &'a Value, spec: StatSpec<'_, T>) {
        let StatSpec {
            key,
            display,
            color,
            transform,
        } = spec;

        let Some(raw) = json::get(scope, &key).map(json::normalize_number) else {
            return self.add_empty(display);
        };
        let Some(typed) = json::as_typed::<T>(&raw) else {
            return self.add_empty(display);
        };

        let value = match transform {
            Some(mut transform) => transform(typed, &mut *self),
            None => raw.into_owned(),
        };
        self.add_line(display, value, color);
    }

    /// Integer stats with default labels, in order.
    pub fn emit_ints(&mut self, keys: &[&str]) {
        for key in keys {
            self.emit(super::stat::int(*key));
        }
    }

    /// Append a computed line without a field lookup.
    pub fn add_line(&mut self, label: impl Into<String>, value: impl Into<Value>, color: Option<char>) {
        let value = value.into();
        let color = color.unwrap_or_else(|| default_color(&value));
        self.lines
            .push(ReportLine::stat(label, render_value(&value), color));
    }

    /// Append `label: N/A` in red.
    pub fn add_empty(&mut self, label: impl Into<String>) {
        self.lines
            .push(ReportLine::stat(label, NOT_AVAILABLE, colors::RED));
    }

    /// Append a freeform red line.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.lines.push(ReportLine {
            kind: LineKind::Error,
            label: message.into(),
            value: String::new(),
            color: colors::RED,
        });
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn build(self) -> Report {
        Report { lines: self.lines }
    }
}
