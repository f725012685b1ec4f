/// The Pit keeps its counters in two sub-objects, `profile` and
/// `pit_stats_ptl`; the routine switches scope between them.
use crate::json;
use crate::stats::{int, text, ReportBuilder};
use serde_json::Value;

pub fn pit<'a>(builder: &mut ReportBuilder<'a>, game: &'a Value) {
    let (Some(profile), Some(lifetime)) = (
        json::get_object(game, "profile"),
        json::get_object(game, "pit_stats_ptl"),
    ) else {
        builder.add_error("Player has missing Pit stats.");
        return;
    };

    builder.set_active_scope(lifetime);
    builder.emit_ints(&["kills", "assists", "deaths"]);
    builder.set_active_scope(profile);
    builder.emit(int("cash").display("Gold"));
    builder.emit(int("renown"));
    builder.set_active_scope(lifetime);
    builder.emit(int("max_streak").display("Highest Killstreak"));
    builder.emit_ints(&["damage_dealt", "damage_received"]);

    builder.set_active_scope(profile);
    if json::get(profile, "genesis_allegiance").is_some() {
        builder.emit(text("genesis_allegiance").map(|side, _| {
            if side == "ANGEL" {
                "\u{a7}bAngel"
            } else {
                "\u{a7}cDemon"
            }
        }));
    }

    let prestige = json::get_array(profile, "prestiges").map_or(0, Vec::len);
    builder.add_line("Prestige", prestige, None);

    let supporter = json::get_array(game, "packages")
        .is_some_and(|packages| packages.iter().any(|package| package.as_str() == Some("supporter")));
    builder.add_line("Pit Supporter", supporter, None);
}
