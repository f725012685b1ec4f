/// Network-wide report shown when no game is requested
use crate::colors;
use crate::derived::{format_timestamp, network_level, reconcile_first_login, NOT_AVAILABLE};
use crate::json;
use crate::stats::{int, text, Report, ReportBuilder, StatSpec};
use serde_json::Value;

pub fn render_overall(player: &Value) -> Report {
    let mut builder = ReportBuilder::new(player);
    builder.first_line();

    builder.emit(
        StatSpec::<f64>::new("networkExp")
            .display("Network Level")
            .map(|exp, _| network_level(exp)),
    );
    builder.emit(int("achievementPoints").display("Achievement Points"));
    builder.add_line("Quests Completed", quests_completed(player), None);
    builder.emit(int("karma"));

    if let Some(links) = json::get_path(player, &["socialMedia", "links"]).filter(|links| links.is_object()) {
        builder.emit_from(links, text("DISCORD").display("Discord").color(colors::BLUE));
    }

    builder.emit(int("lastLogin").display("Last Login").map(|last_login, builder| {
        let last_logout = json::get_i64(builder.player(), "lastLogout").unwrap_or(0);
        builder.add_line("Online", last_logout != 0 && last_login > last_logout, None);
        builder.emit(text("_id").display("First Login").map(|object_id, builder| {
            let first_login = json::get_i64(builder.player(), "firstLogin");
            login_date(reconcile_first_login(&object_id, first_login))
        }));
        login_date(Some(last_login))
    }));

    builder.build()
}

/// Login date, or a red `N/A` when there is no usable timestamp.
fn login_date(epoch_millis: Option<i64>) -> String {
    match epoch_millis.map(format_timestamp) {
        Some(date) if date != NOT_AVAILABLE => date,
        _ => format!("{}{NOT_AVAILABLE}", colors::code(colors::RED)),
    }
}

/// Total quest completions across every quest in `quests`.
fn quests_completed(player: &Value) -> usize {
    json::get(player, "quests")
        .and_then(Value::as_object)
        .map(|quests| {
            quests
                .values()
                .filter_map(|quest| json::get_array(quest, "completions"))
                .map(Vec::len)
                .sum()
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quests_count_every_completion() {
        let player = json!({"quests": {
            "a": {"completions": [{"time": 1}, {"time": 2}]},
            "b": {"completions": [{"time": 3}]},
            "c": {"active": {}},
            "d": 5
        }});
        assert_eq!(quests_completed(&player), 3);
        assert_eq!(quests_completed(&json!({})), 0);
    }

    #[test]
    fn minimal_document() {
        let player = json!({"displayname": "Nora", "achievementPoints": 500});
        let report = render_overall(&player);
        assert_eq!(
            report.plain(),
            vec![
                "Stats of Nora",
                "Network Level: N/A",
                "Achievement Points: 500",
                "Quests Completed: 0",
                "Karma: N/A",
                "Last Login: N/A",
            ]
        );
    }

    #[test]
    fn last_login_emits_online_and_first_login() {
        let player = json!({
            "_id": "5e6e1c00aabbccddeeff0011",
            "displayname": "Nora",
            "networkExp": 5000,
            "lastLogin": 1_700_000_000_000_i64,
            "lastLogout": 1_600_000_000_000_i64,
            "firstLogin": 1_600_000_000_000_i64,
            "socialMedia": {"links": {"DISCORD": "nora#0001"}}
        });
        let report = render_overall(&player);
        let labels: Vec<&str> = report.lines().iter().map(|line| line.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Stats of \u{a7}7Nora",
                "Network Level",
                "Achievement Points",
                "Quests Completed",
                "Karma",
                "Discord",
                "Online",
                "First Login",
                "Last Login",
            ]
        );
        assert_eq!(report.find("Network Level").unwrap().value, "1.5");
        assert_eq!(report.find("Online").unwrap().value, "true");
        assert_eq!(report.find("Discord").unwrap().color, '9');
        assert_eq!(
            report.find("First Login").unwrap().value,
            format_timestamp(1_584_274_432_000)
        );
        assert_eq!(
            report.find("Last Login").unwrap().value,
            format_timestamp(1_700_000_000_000)
        );
    }

    #[test]
    fn unusable_login_times_render_red() {
        let player = json!({"_id": "zzzzzzzz", "lastLogin": i64::MAX});
        let report = render_overall(&player);
        let last_login = report.find("Last Login").unwrap();
        assert_eq!(last_login.value, "\u{a7}cN/A");
        assert_eq!(report.find("First Login").unwrap().value, "\u{a7}cN/A");
        assert!(report.plain().contains(&"Last Login: N/A".to_string()));
        assert_eq!(login_date(Some(0)), format_timestamp(0));
    }

    #[test]
    fn never_logged_out_means_offline() {
        let player = json!({"lastLogin": 1_700_000_000_000_i64});
        let report = render_overall(&player);
        assert_eq!(report.find("Online").unwrap().value, "false");
        assert_eq!(report.find("First Login").unwrap().value, "N/A");
    }
}
