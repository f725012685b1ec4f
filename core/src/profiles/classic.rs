/// Classic lobby games: Arena Brawl, Turbo Kart Racers, Paintball, Quakecraft,
/// TNT Games, VampireZ and Walls
use crate::derived::{capitalize, snake_to_title};
use crate::stats::{coins, int, text, ReportBuilder};
use serde_json::Value;

const ARENA_MODES: [&str; 3] = ["1v1", "2v2", "4v4"];
const ARENA_SKILLS: [&str; 4] = ["offensive", "utility", "support", "ultimate"];

pub fn arena<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    arena_mode_totals(builder, "wins");
    arena_mode_totals(builder, "losses");
    builder.emit(coins());
    for skill in ARENA_SKILLS {
        builder.emit(
            text(skill)
                .display(format!("{} Skill", capitalize(skill)))
                .map(|name, _| name.replace('_', " ")),
        );
    }
}

/// One line per mode, then the sum of the modes that are present.
fn arena_mode_totals(builder: &mut ReportBuilder<'_>, stat: &str) {
    let label = capitalize(stat);
    let mut total: Option<i64> = None;
    for mode in ARENA_MODES {
        builder.emit(
            int(format!("{stat}_{mode}"))
                .display(format!("{mode} {label}"))
                .map(|value, _| {
                    *total.get_or_insert(0) += value;
                    value
                }),
        );
    }
    match total {
        Some(total) => builder.add_line(format!("Total {label}"), total, None),
        None => builder.add_empty(format!("Total {label}")),
    }
}

pub fn gingerbread<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    for cup in ["gold", "silver", "bronze"] {
        builder.emit(int(format!("{cup}_trophy")).display(format!("{} Trophies", capitalize(cup))));
    }
    builder.emit(coins());
}

pub fn paintball<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit_ints(&["kills", "deaths", "wins", "shots_fired"]);
    builder.emit(text("hat").map(|hat, _| snake_to_title(&hat)));
    builder.emit(coins());
}

pub fn quake<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit(int("kills").display("Solo Kills"));
    builder.emit(int("wins").display("Solo Wins"));
    builder.emit(int("kills_teams").display("Teams Kills"));
    builder.emit(int("wins_teams").display("Teams Wins"));
    builder.emit(coins());
    builder.emit(text("trigger").map(|trigger, _| quake_trigger(&trigger)));
}

/// Railgun cooldown in seconds for a trigger upgrade name.
fn quake_trigger(trigger: &str) -> String {
    let seconds = match trigger {
        "ONE_POINT_FIVE" => "1.5s",
        "ONE_POINT_FOUR" => "1.4s",
        "ONE_POINT_THREE" => "1.3s",
        "ONE_POINT_TWO" => "1.2s",
        "ONE_POINT_ONE" => "1.1s",
        "ONE_POINT_ZERO" | "ONE" => "1s",
        "ZERO_POINT_NINE" => "0.9s",
        "ZERO_POINT_EIGHT_FIVE" => "0.85s",
        other => other,
    };
    seconds.to_string()
}

const TNT_MODES: [(&str, &str); 5] = [
    ("tntrun", "TNT Run"),
    ("pvprun", "PVP Run"),
    ("bowspleef", "TNT Bowspleef"),
    ("capture", "TNT Wizards"),
    ("tnttag", "TNT Tag"),
];

pub fn tnt_games<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    for (mode, name) in TNT_MODES {
        builder.emit(int(format!("wins_{mode}")).display(format!("{name} Wins")));
    }
    builder.emit(coins());
}

pub fn vampirez<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit_ints(&["human_wins", "vampire_wins", "zombie_kills", "coins"]);
}

pub fn walls<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit_ints(&["kills", "deaths", "wins", "coins"]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::find_profile;
    use serde_json::json;

    #[test]
    fn arena_sums_modes_and_formats_skills() {
        let player = json!({
            "displayname": "Nora",
            "stats": {"Arena": {
                "wins_1v1": 4,
                "wins_4v4": 6,
                "losses_2v2": 1,
                "offensive": "fireball",
                "ultimate": "healing_totem"
            }}
        });
        let report = find_profile("Arena").unwrap().render(&player);
        assert_eq!(
            report.plain(),
            vec![
                "Arena Brawl stats of Nora",
                "1v1 Wins: 4",
                "2v2 Wins: N/A",
                "4v4 Wins: 6",
                "Total Wins: 10",
                "1v1 Losses: N/A",
                "2v2 Losses: 1",
                "4v4 Losses: N/A",
                "Total Losses: 1",
                "Coins: N/A",
                "Offensive Skill: fireball",
                "Utility Skill: N/A",
                "Support Skill: N/A",
                "Ultimate Skill: healing totem",
            ]
        );
    }

    #[test]
    fn quake_triggers_map_to_seconds() {
        assert_eq!(quake_trigger("ONE_POINT_THREE"), "1.3s");
        assert_eq!(quake_trigger("ONE"), "1s");
        assert_eq!(quake_trigger("ZERO_POINT_EIGHT_FIVE"), "0.85s");
        assert_eq!(quake_trigger("TWO"), "TWO");
    }

    #[test]
    fn paintball_hat_is_title_cased() {
        let player = json!({"stats": {"Paintball": {"hat": "speed_hat", "kills": 10}}});
        let report = find_profile("Paintball").unwrap().render(&player);
        assert_eq!(report.find("Hat").unwrap().value, "Speed Hat");
        assert_eq!(report.find("Shots fired").unwrap().value, "N/A");
    }
}
