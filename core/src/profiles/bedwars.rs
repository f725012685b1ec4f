/// Bedwars: prestige badge plus the overall counters
use crate::derived::bedwars_level_band;
use crate::json;
use crate::stats::{coins, int, ReportBuilder};
use serde_json::Value;

pub fn bedwars<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    // The level is tracked as an achievement, not in the Bedwars stats object.
    let level = json::get_path(builder.player(), &["achievements", "bedwars_level"])
        .and_then(json::as_typed::<i64>)
        .unwrap_or(1);
    let (badge, symbol) = bedwars_level_band(level);
    builder.add_line("Level", format!("{badge}{symbol}"), None);

    builder.emit(int("kills_bedwars").display("Kills"));
    builder.emit(int("deaths_bedwars").display("Deaths"));
    builder.emit(int("final_kills_bedwars").display("Final Kills"));
    builder.emit(int("final_deaths_bedwars").display("Final Deaths"));
    builder.emit(int("wins_bedwars").display("Wins"));
    builder.emit(coins());
    builder.emit(int("winstreak"));
}

#[cfg(test)]
mod tests {
    use crate::profiles::find_profile;
    use serde_json::json;

    #[test]
    fn level_comes_from_achievements() {
        let player = json!({
            "achievements": {"bedwars_level": 1050},
            "stats": {"Bedwars": {"wins_bedwars": 300}}
        });
        let report = find_profile("Bedwars").unwrap().render(&player);
        let level = report.find("Level").unwrap();
        assert_eq!(level.value, "\u{a7}61\u{a7}e0\u{a7}a5\u{a7}b0\u{a7}d\u{272a}");
        assert_eq!(report.find("Wins").unwrap().value, "300");
    }

    #[test]
    fn float_counters_render_as_integers() {
        let player = json!({
            "achievements": {"bedwars_level": 150.0},
            "stats": {"Bedwars": {"coins": 1500.0}}
        });
        let report = find_profile("Bedwars").unwrap().render(&player);
        assert_eq!(report.find("Coins").unwrap().value, "1500");
        assert_eq!(report.find("Level").unwrap().value, "\u{a7}f150\u{272b}");
    }

    #[test]
    fn missing_level_defaults_to_one() {
        let player = json!({"stats": {"Bedwars": {}}});
        let report = find_profile("Bedwars").unwrap().render(&player);
        assert_eq!(report.find("Level").unwrap().value, "\u{a7}71\u{272b}");
        assert_eq!(report.find("Kills").unwrap().value, "N/A");
    }
}
