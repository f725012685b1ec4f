/// PvP games: Warlords, Blitz, Cops and Crims, UHC variants, Smash Heroes,
/// Crazy Walls and Mega Walls
use crate::colors;
use crate::derived::capitalize;
use crate::json;
use crate::stats::{coins, int, text, ReportBuilder};
use serde_json::Value;

const WARLORDS_CLASSES: [&str; 4] = ["mage", "paladin", "shaman", "warrior"];
const WARLORDS_UPGRADES: [&str; 10] = [
    "cooldown",
    "critchance",
    "critmultiplier",
    "energy",
    "health",
    "skill1",
    "skill2",
    "skill3",
    "skill4",
    "skill5",
];

pub fn battleground<'a>(builder: &mut ReportBuilder<'a>, game: &'a Value) {
    builder.emit_ints(&["kills", "assists", "deaths", "wins", "losses"]);
    builder.emit(int("win_streak").display("Winstreak"));
    builder.emit(int("damage").display("Damage Dealt"));
    builder.emit(int("damage_taken").display("Damage Taken"));
    builder.emit(coins());

    for class in WARLORDS_CLASSES {
        let label = format!("{} Level", capitalize(class));
        match warlords_class_level(game, class) {
            Some(level) => builder.add_line(label, level, None),
            None => builder.add_empty(label),
        }
    }
}

/// A class level is the sum of its upgrade levels; `None` when the class
/// has no upgrades recorded.
fn warlords_class_level(game: &Value, class: &str) -> Option<i64> {
    WARLORDS_UPGRADES
        .iter()
        .filter_map(|upgrade| json::get_i64(game, &format!("{class}_{upgrade}")))
        .reduce(|total, level| total + level)
}

pub fn hunger_games<'a>(builder: &mut ReportBuilder<'a>, game: &'a Value) {
    builder.emit_ints(&["kills", "deaths"]);
    builder.emit(int("wins_solo_normal").display("Wins").map(|solo, _| {
        solo + json::get_i64(game, "wins_teams_normal").unwrap_or(0)
    }));
    builder.emit(coins());
    builder.emit(text("defaultkit").display("Default Kit"));
}

pub fn cops_and_crims<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit(int("kills").display("Defusal Kills"));
    builder.emit(int("deaths").display("Defusal Deaths"));
    builder.emit(int("round_wins").display("Defusal Round Wins"));
    builder.emit(int("game_wins").display("Defusal Game Wins"));
    builder.emit(int("kills_deathmatch").display("Deathmatch Kills"));
    builder.emit(int("deaths_deathmatch").display("Deathmatch Deaths"));
    builder.emit(int("game_wins_deathmatch").display("Deathmatch Wins"));
    builder.emit(coins());
}

pub fn speed_uhc<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit_ints(&["kills", "deaths", "wins", "coins", "winstreak"]);
}

pub fn super_smash<'a>(builder: &mut ReportBuilder<'a>, game: &'a Value) {
    builder.emit_ints(&["kills", "deaths", "wins", "coins"]);
    builder.emit(
        int("smashLevel")
            .display("Smash Level")
            .color(colors::GOLD)
            .map(|level, _| format!("{level}\u{272b}")),
    );

    let Some(class) = json::get_str(game, "active_class") else {
        return;
    };
    let prestige = json::get_i64(game, &format!("pg_{class}")).unwrap_or(0);
    let level = json::get_i64(game, &format!("lastLevel_{class}")).unwrap_or(0);
    builder.add_line("Active Class", format!("{class} (P{prestige} Lv{level})"), None);
}

pub fn crazy_walls<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit_ints(&["kills", "deaths", "wins", "coins", "golden_skulls", "gold_dust"]);
}

pub fn uhc<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit_ints(&["kills", "deaths", "wins", "coins", "score", "heads_eaten"]);
}

pub fn mega_walls<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit(int("kills"));
    builder.emit(int("total_final_kills").display("Finals"));
    builder.emit_ints(&["deaths", "final_deaths", "wins", "coins"]);
    builder.emit(text("chosen_class"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::find_profile;
    use serde_json::json;

    #[test]
    fn warlords_class_levels_sum_upgrades() {
        let game = json!({"mage_cooldown": 3, "mage_skill5": 4, "mage_health": 2, "warrior_energy": 1});
        assert_eq!(warlords_class_level(&game, "mage"), Some(9));
        assert_eq!(warlords_class_level(&game, "warrior"), Some(1));
        assert_eq!(warlords_class_level(&game, "shaman"), None);
    }

    #[test]
    fn blitz_wins_include_team_wins() {
        let player = json!({"stats": {"HungerGames": {"wins_solo_normal": 5, "wins_teams_normal": 2}}});
        let report = find_profile("HungerGames").unwrap().render(&player);
        assert_eq!(report.find("Wins").unwrap().value, "7");

        let player = json!({"stats": {"HungerGames": {"wins_teams_normal": 2}}});
        let report = find_profile("HungerGames").unwrap().render(&player);
        assert_eq!(report.find("Wins").unwrap().value, "N/A");
    }

    #[test]
    fn smash_shows_active_class_composite() {
        let player = json!({"stats": {"SuperSmash": {
            "smashLevel": 40,
            "active_class": "BOTMUN",
            "pg_BOTMUN": 2,
            "lastLevel_BOTMUN": 7
        }}});
        let report = find_profile("SuperSmash").unwrap().render(&player);
        let level = report.find("Smash Level").unwrap();
        assert_eq!(level.value, "40\u{272b}");
        assert_eq!(level.color, '6');
        assert_eq!(report.find("Active Class").unwrap().value, "BOTMUN (P2 Lv7)");
    }

    #[test]
    fn mega_walls_labels() {
        let player = json!({"stats": {"Walls3": {"total_final_kills": 30, "chosen_class": "Herobrine"}}});
        let report = find_profile("Walls3").unwrap().render(&player);
        assert_eq!(report.find("Finals").unwrap().value, "30");
        assert_eq!(report.find("Final deaths").unwrap().value, "N/A");
        let class = report.find("Chosen class").unwrap();
        assert_eq!((class.value.as_str(), class.color), ("Herobrine", '7'));
    }
}
