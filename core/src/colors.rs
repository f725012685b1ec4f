/// Minecraft in-band formatting codes (`§` followed by one code character)
use once_cell::sync::Lazy;
use regex::Regex;

/// Control character that introduces a formatting code.
pub const SECTION: char = '\u{a7}';

pub const DARK_BLUE: char = '1';
pub const GOLD: char = '6';
pub const GRAY: char = '7';
pub const BLUE: char = '9';
pub const GREEN: char = 'a';
pub const AQUA: char = 'b';
pub const RED: char = 'c';
pub const YELLOW: char = 'e';
pub const WHITE: char = 'f';
pub const STRIKETHROUGH: char = 'm';

static FORMATTING_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\x{a7}[0-9a-fk-or]").expect("valid formatting code regex"));

/// `§` + `code`, e.g. `code(RED)` == `"§c"`.
pub fn code(code: char) -> String {
    format!("{SECTION}{code}")
}

/// Color code for a Hypixel color name such as `"dark_purple"`.
pub fn from_name(name: &str) -> Option<char> {
    let code = match name.to_ascii_lowercase().as_str() {
        "black" => '0',
        "dark_blue" => '1',
        "dark_green" => '2',
        "dark_aqua" => '3',
        "dark_red" => '4',
        "dark_purple" => '5',
        "gold" => '6',
        "gray" => '7',
        "dark_gray" => '8',
        "blue" => '9',
        "green" => 'a',
        "aqua" => 'b',
        "red" => 'c',
        "light_purple" => 'd',
        "yellow" => 'e',
        "white" => 'f',
        _ => return None,
    };
    Some(code)
}

/// Remove every formatting code, leaving the visible text.
pub fn strip(text: &str) -> String {
    FORMATTING_CODE.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_are_case_insensitive() {
        assert_eq!(from_name("GOLD"), Some('6'));
        assert_eq!(from_name("light_purple"), Some('d'));
        assert_eq!(from_name("rainbow"), None);
    }

    #[test]
    fn strip_removes_codes_only() {
        assert_eq!(strip("Kills: \u{a7}e42"), "Kills: 42");
        assert_eq!(strip("\u{a7}b[MVP\u{a7}c+\u{a7}b] Nora"), "[MVP+] Nora");
        assert_eq!(strip("100% \u{a7}"), "100% \u{a7}");
    }
}
