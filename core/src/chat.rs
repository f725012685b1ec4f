/// Chat-side presentation: the `[SIMPLE]` prefix and the breakline banner
/// that frames every report
use crate::colors::{self, BLUE, GOLD, RED, SECTION, STRIKETHROUGH, WHITE};
use crate::config::ChatOptions;
use crate::stats::Report;
use once_cell::sync::Lazy;

pub static PREFIX: Lazy<String> = Lazy::new(|| {
    format!(
        "{}[{}SIMPLE{}] {}",
        colors::code(BLUE),
        colors::code(GOLD),
        colors::code(BLUE),
        colors::code(WHITE)
    )
});

/// A status message as shown in chat.
pub fn put(message: &str) -> String {
    format!("{}{message}", *PREFIX)
}

pub fn err(message: &str) -> String {
    put(&format!("{SECTION}{RED}{message}"))
}

/// Smallest chat scale the client offers.
const MIN_CHAT_SCALE: f32 = 0.1;

/// Number of banner cells that fit one chat line. Width and scale are the
/// client's chat settings; width is clamped to `0.0..=1.0` and scale to at
/// least [`MIN_CHAT_SCALE`].
pub fn dash_count(chat: ChatOptions) -> usize {
    if chat.scale.is_nan() || chat.scale <= 0.0 {
        return 0;
    }
    let width = chat.width.clamp(0.0, 1.0);
    let scale = chat.scale.max(MIN_CHAT_SCALE);
    let cells = ((280.0 * width + 40.0) / 320.0 * (1.0 / scale) * 53.0).floor() - 6.0;
    if cells.is_finite() && cells > 0.0 {
        cells as usize
    } else {
        0
    }
}

/// A struck-through line of dashes with `[SIMPLE]` at the halfway cell.
pub fn breakline(dashes: usize) -> String {
    let struck = format!("{SECTION}{BLUE}{SECTION}{STRIKETHROUGH}");
    let mut line = struck.clone();
    for cell in 1..=dashes {
        if cell == dashes >> 1 {
            line.push_str(&format!(
                "{SECTION}{BLUE}[{SECTION}{GOLD}SIMPLE{SECTION}{BLUE}]{SECTION}{STRIKETHROUGH}"
            ));
        } else {
            line.push('-');
        }
    }
    line
}

/// The report as chat lines, between two breaklines.
pub fn frame(report: &Report, chat: ChatOptions) -> Vec<String> {
    let banner = breakline(dash_count(chat));
    let mut lines = Vec::with_capacity(report.lines().len() + 2);
    lines.push(banner.clone());
    lines.extend(report.formatted());
    lines.push(banner);
    lines
}
