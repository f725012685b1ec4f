//! Values that are computed from raw stats rather than read verbatim:
//! leveling curves, prestige banding, timestamps and rank prefixes.
//!
//! Every function here is pure and total. Bad input degrades to a fallback
//! value instead of an error so a single odd field never breaks a report.

use crate::colors::{self, SECTION};
use crate::json;
use chrono::{Local, TimeZone, Utc};
use serde_json::Value;
use std::fmt::Display;

/// Rendered in place of any value that cannot be produced.
pub const NOT_AVAILABLE: &str = "N/A";

const NETWORK_BASE: f64 = 10_000.0;
const NETWORK_GROWTH: f64 = 2_500.0;
const NETWORK_HALF_GROWTH: f64 = 0.5 * NETWORK_GROWTH;
const REVERSE_PQ_PREFIX: f64 = -(NETWORK_BASE - 0.5 * NETWORK_GROWTH) / NETWORK_GROWTH;
const REVERSE_CONST: f64 = REVERSE_PQ_PREFIX * REVERSE_PQ_PREFIX;
const GROWTH_DIVIDES_2: f64 = 2.0 / NETWORK_GROWTH;

/// Whole network level reached with `exp` experience.
fn network_level_floor(exp: f64) -> f64 {
    if exp < 0.0 {
        return 1.0;
    }
    (1.0 + REVERSE_PQ_PREFIX + (REVERSE_CONST + GROWTH_DIVIDES_2 * exp).sqrt()).floor()
}

/// Experience needed to reach the start of `level`.
fn total_exp_to_full_level(level: f64) -> f64 {
    (NETWORK_HALF_GROWTH * (level - 2.0) + NETWORK_BASE) * (level - 1.0)
}

/// Fraction of the way from the current level to the next one.
fn network_progress(exp: f64) -> f64 {
    let level = network_level_floor(exp);
    let start = total_exp_to_full_level(level);
    let next = total_exp_to_full_level(level + 1.0);
    (exp - start) / (next - start)
}

/// Exact network level (level plus progress), rounded to two decimals.
pub fn network_level(exp: f64) -> f64 {
    if !exp.is_finite() || exp < 0.0 {
        return 1.0;
    }
    let exact = network_level_floor(exp) + network_progress(exp);
    (exact * 100.0).round() / 100.0
}

const SKYWARS_THRESHOLDS: [i64; 12] = [0, 20, 70, 150, 250, 500, 1000, 2000, 3500, 6000, 10000, 15000];

/// SkyWars level for the pre-`levelFormatted` experience curve.
///
/// Inside a bracket the progress term uses integer division, so every value
/// in a bracket lands on the bracket's base level.
pub fn skywars_level(exp: i64) -> i64 {
    let last = SKYWARS_THRESHOLDS[SKYWARS_THRESHOLDS.len() - 1];
    if exp >= last {
        return 12 + (exp - last) / 10_000;
    }
    if exp < 0 {
        return 1;
    }
    let bracket = SKYWARS_THRESHOLDS
        .iter()
        .position(|threshold| exp < *threshold)
        .unwrap_or(SKYWARS_THRESHOLDS.len() - 1);
    let floor = SKYWARS_THRESHOLDS[bracket - 1];
    let ceiling = SKYWARS_THRESHOLDS[bracket];
    1 + bracket as i64 + (exp - floor) / (ceiling - floor)
}

const BEDWARS_SYMBOL: char = '\u{272b}';
const BEDWARS_SYMBOL_1000: char = '\u{272a}';
const BEDWARS_SYMBOL_2000: char = '\u{269d}';

/// Single color per hundred levels below 1000.
const BEDWARS_SOLID: [char; 10] = ['7', 'f', '6', 'b', '2', '3', '4', 'd', '9', '5'];

/// Level color and symbol color for 1100 to 1999.
const BEDWARS_DUO: [(char, char); 9] = [
    ('f', '7'),
    ('e', '6'),
    ('b', '3'),
    ('a', '2'),
    ('3', '9'),
    ('c', '4'),
    ('d', '5'),
    ('9', '1'),
    ('5', '8'),
];

/// Four digit colors followed by the symbol color, 2000 to 2999.
const BEDWARS_FANCY: [&str; 10] = [
    "7ff77", "fee66", "6ffbb", "5dd6e", "bff77", "faa22", "4ccdd", "eff88", "a2266", "b3399",
];
const BEDWARS_FANCY_1000: &str = "6eabd";
const BEDWARS_FANCY_3000: &str = "e66cc";

/// Prestige colors for a Bedwars level.
///
/// Returns the colored level text (ending on the color the symbol should
/// take) and the prestige symbol. Append the symbol to get the full badge.
pub fn bedwars_level_band(level: i64) -> (String, char) {
    let symbol = match level {
        1000..=1999 => BEDWARS_SYMBOL_1000,
        l if l > 1999 => BEDWARS_SYMBOL_2000,
        _ => BEDWARS_SYMBOL,
    };

    let text = match level {
        l if l < 100 => solid(BEDWARS_SOLID[0], l),
        100..=999 => solid(BEDWARS_SOLID[(level / 100) as usize], level),
        1000..=1099 => interleave(BEDWARS_FANCY_1000, level),
        1100..=1999 => {
            let (digits, symbol_color) = BEDWARS_DUO[(level / 100 - 11) as usize];
            format!("{SECTION}{digits}{level}{SECTION}{symbol_color}")
        }
        2000..=2999 => interleave(BEDWARS_FANCY[(level / 100 - 20) as usize], level),
        _ => interleave(BEDWARS_FANCY_3000, level),
    };

    (text, symbol)
}

fn solid(color: char, level: i64) -> String {
    format!("{SECTION}{color}{level}")
}

/// One color per digit for the first four digits, then the symbol color.
fn interleave(palette: &str, level: i64) -> String {
    let colors: Vec<char> = palette.chars().collect();
    let digits = level.to_string();
    let mut out = String::new();
    for (index, digit) in digits.chars().enumerate() {
        if index < 4 {
            out.push(SECTION);
            out.push(colors[index]);
        }
        out.push(digit);
    }
    out.push(SECTION);
    out.push(colors[4]);
    out
}

const BUILD_BATTLE_TITLES: [(i64, char, &str); 12] = [
    (0, 'f', "Rookie"),
    (100, '7', "Untrained"),
    (250, 'e', "Amateur"),
    (500, 'a', "Apprentice"),
    (1000, 'd', "Experienced"),
    (2000, '9', "Seasoned"),
    (3500, '2', "Trained"),
    (5000, '3', "Skilled"),
    (7500, 'c', "Talented"),
    (10000, '5', "Professional"),
    (15000, '1', "Expert"),
    (20000, '4', "Master"),
];

/// Colored Build Battle title for a score. Negative scores count as Rookie.
pub fn build_battle_title(score: i64) -> String {
    let (_, color, title) = BUILD_BATTLE_TITLES
        .iter()
        .rev()
        .find(|(threshold, _, _)| score >= *threshold)
        .unwrap_or(&BUILD_BATTLE_TITLES[0]);
    format!("{SECTION}{color}{title}")
}

/// `dd/MM/yyyy` in the local time zone, or [`NOT_AVAILABLE`].
pub fn format_timestamp(epoch_millis: i64) -> String {
    format_timestamp_in(epoch_millis, &Local)
}

/// `dd/MM/yyyy` in `zone`, or [`NOT_AVAILABLE`] when the instant is out of range.
pub fn format_timestamp_in<Tz>(epoch_millis: i64, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match Utc.timestamp_millis_opt(epoch_millis).single() {
        Some(instant) => instant.with_timezone(zone).format("%d/%m/%Y").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Creation time embedded in a Mongo object id, in epoch millis.
///
/// The first eight hex characters are the big-endian creation second.
pub fn object_id_millis(object_id: &str) -> Option<i64> {
    let prefix = object_id.get(..8)?;
    let bytes: [u8; 4] = hex::decode(prefix).ok()?.try_into().ok()?;
    Some(i64::from(u32::from_be_bytes(bytes)) * 1000)
}

/// Earliest credible first-login time.
///
/// Hypixel has overwritten `firstLogin` for some accounts, while the player
/// document id still carries its creation time.
pub fn reconcile_first_login(object_id: &str, first_login: Option<i64>) -> Option<i64> {
    match (object_id_millis(object_id), first_login) {
        (Some(created), Some(first_login)) => Some(created.min(first_login)),
        (created, first_login) => created.or(first_login),
    }
}

/// Colored rank bracket (with trailing space) that precedes a display name.
pub fn format_rank_prefix(player: &Value) -> String {
    if let Some(prefix) = json::get_str(player, "prefix") {
        return format!("{prefix} ");
    }

    let rank = json::get_str(player, "rank");
    let mut resolved = rank
        .filter(|rank| *rank != "NORMAL")
        .or_else(|| json::get_str(player, "newPackageRank"))
        .or_else(|| json::get_str(player, "packageRank"))
        .unwrap_or_default();

    if resolved == "MVP_PLUS" && json::get_str(player, "monthlyPackageRank") == Some("SUPERSTAR") {
        resolved = "SUPERSTAR";
    }
    if rank == Some("NONE") {
        resolved = "";
    }

    let plus = rank_color(player, "rankPlusColor", colors::RED);
    let monthly = rank_color(player, "monthlyRankColor", colors::GOLD);

    match resolved {
        "VIP" => "\u{a7}a[VIP] ".to_string(),
        "VIP_PLUS" => "\u{a7}a[VIP\u{a7}6+\u{a7}a] ".to_string(),
        "MVP" => "\u{a7}b[MVP] ".to_string(),
        "MVP_PLUS" => format!("\u{a7}b[MVP{plus}+\u{a7}b] "),
        "SUPERSTAR" => format!("{monthly}[MVP{plus}++{monthly}] "),
        "HELPER" => "\u{a7}9[HELPER] ".to_string(),
        "MODERATOR" => "\u{a7}2[MOD] ".to_string(),
        "ADMIN" => "\u{a7}c[ADMIN] ".to_string(),
        "YOUTUBER" => "\u{a7}c[\u{a7}fYOUTUBE\u{a7}c] ".to_string(),
        "GAME_MASTER" => "\u{a7}2[GM] ".to_string(),
        _ => colors::code(colors::GRAY),
    }
}

fn rank_color(player: &Value, key: &str, fallback: char) -> String {
    let code = json::get_str(player, key)
        .and_then(colors::from_name)
        .unwrap_or(fallback);
    colors::code(code)
}

/// Rank prefix followed by the player's display name.
pub fn format_player_name(player: &Value) -> String {
    let name = json::get_str(player, "displayname").unwrap_or("???");
    format!("{}{name}", format_rank_prefix(player))
}

/// Upper-case the first character: `"wins"` becomes `"Wins"`.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Default label for a stat key: `"final_kills"` becomes `"Final kills"`.
pub fn default_display(key: &str) -> String {
    capitalize(key).replace('_', " ")
}

/// `"speed_hat"` becomes `"Speed Hat"`.
pub fn snake_to_title(text: &str) -> String {
    text.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| capitalize(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}
