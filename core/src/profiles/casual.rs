/// Arcade, Build Battle, Duels, Housing, Classic Lobby, Murder Mystery, SkyBlock
use crate::derived::{build_battle_title, capitalize};
use crate::stats::{coins, int, ReportBuilder};
use serde_json::Value;

pub fn arcade<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit(coins());
}

pub fn build_battle<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit(int("wins"));
    builder.emit(int("score").display("Title").map(|score, builder| {
        builder.add_line("Score", score, None);
        build_battle_title(score)
    }));
    builder.emit(coins());
    builder.emit(int("games_played").display("Games Played"));
    builder.emit(int("correct_guesses").display("Correct Guessed (GTB)"));
}

pub fn duels<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit_ints(&["wins", "losses"]);
    builder.emit(int("current_winstreak").display("Winstreak"));
    builder.emit(int("best_overall_winstreak").display("Best Winstreak"));
    builder.emit(coins());
}

pub fn housing<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.add_error("what did you even expect to be here.");
}

pub fn legacy<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit(int("tokens"));
    builder.emit(int("total_tokens").display("Total Tokens"));
}

pub fn murder_mystery<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.emit_ints(&["murderer_wins", "detective_wins"]);
    for mode in ["assassins", "infection"] {
        builder.emit(
            int(format!("wins_MURDER_{}", mode.to_uppercase()))
                .display(format!("{} Wins", capitalize(mode))),
        );
    }
    for role in ["murderer", "detective"] {
        builder.emit(int(format!("{role}_chance")).map(|chance, _| format!("{chance}%")));
    }
    builder.emit(int("kills_as_murderer"));
    builder.emit(coins());
}

// SkyBlock data lives in the profiles endpoint, not the player document.
pub fn skyblock<'a>(builder: &mut ReportBuilder<'a>, _game: &'a Value) {
    builder.add_empty("Profiles");
}
