/// SkyWars and its sibling SkyClash
use crate::derived::skywars_level;
use crate::json;
use crate::stats::{int, text, ReportBuilder};
use serde_json::Value;

pub fn skywars<'a>(builder: &mut ReportBuilder<'a>, game: &'a Value) {
    // Newer accounts carry a preformatted level; older ones only the raw experience.
    if json::get(game, "levelFormatted").is_some() {
        builder.emit(text("levelFormatted").display("SkyWars Level"));
    } else {
        builder.emit(
            int("skywars_experience")
                .display("SkyWars Level")
                .map(|exp, _| skywars_level(exp)),
        );
    }
    builder.emit_ints(&["kills", "deaths", "wins", "coins"]);
    builder.emit(int("win_streak").display("Winstreak"));
    builder.emit_ints(&["souls", "heads"]);
    builder.emit(int("shard").display("Shards").map(|shards, _| format!("{shards}/20000")));
    builder.emit(int("opals"));
}

pub fn skyclash<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit_ints(&["kills", "deaths", "wins", "coins"]);
    builder.emit(int("win_streak").display("Winstreak"));
    builder.emit(int("card_packs"));
}

#[cfg(test)]
mod tests {
    use crate::profiles::find_profile;
    use serde_json::json;

    #[test]
    fn formatted_level_takes_precedence() {
        let player = json!({"stats": {"SkyWars": {
            "levelFormatted": "\u{a7}b21\u{22c6}",
            "skywars_experience": 70000
        }}});
        let report = find_profile("SkyWars").unwrap().render(&player);
        assert_eq!(report.find("SkyWars Level").unwrap().value, "\u{a7}b21\u{22c6}");
    }

    #[test]
    fn level_falls_back_to_experience_curve() {
        let player = json!({"stats": {"SkyWars": {"skywars_experience": 25000, "shard": 1250}}});
        let report = find_profile("SkyWars").unwrap().render(&player);
        let level = report.find("SkyWars Level").unwrap();
        assert_eq!((level.value.as_str(), level.color), ("13", 'e'));
        assert_eq!(report.find("Shards").unwrap().value, "1250/20000");
    }
}
