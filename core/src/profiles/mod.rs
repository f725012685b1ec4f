/// Game profile registry: canonical game keys, aliases, titles and the
/// routine that turns `stats.<key>` into report lines
pub mod bedwars;
pub mod casual;
pub mod classic;
pub mod combat;
pub mod overall;
pub mod pit;
pub mod skywars;

use crate::stats::{Report, ReportBuilder};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

pub use overall::render_overall;

/// Emits one game's lines. The second argument is the game's stats object,
/// which is also the builder's active scope when the routine starts.
pub type RenderFn = for<'a> fn(&mut ReportBuilder<'a>, &'a Value);

#[derive(Clone, Copy)]
pub struct GameProfile {
    /// Key under `stats` in the player document, e.g. `"Walls3"`.
    pub key: &'static str,
    /// Human readable name used in the report title, e.g. `"Mega Walls"`.
    pub title: &'static str,
    /// Lowercase alternative names accepted from the user.
    pub aliases: &'static [&'static str],
    pub render: RenderFn,
}

impl std::fmt::Debug for GameProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameProfile")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("aliases", &self.aliases)
            .finish()
    }
}

impl PartialEq for GameProfile {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl GameProfile {
    /// Full report for this game: title line, then either the game's lines or
    /// an error line when the player has never played it.
    pub fn render(&self, player: &Value) -> Report {
        let mut builder = ReportBuilder::for_game(player, self.key, self.title);
        builder.first_line();
        match builder.game() {
            Some(game) => {
                builder.set_active_scope(game);
                (self.render)(&mut builder, game);
            }
            None => builder.add_error("No stats found."),
        }
        builder.build()
    }
}

pub static PROFILES: &[GameProfile] = &[
    GameProfile {
        key: "Arcade",
        title: "Arcade",
        aliases: &["arcadegames"],
        render: casual::arcade,
    },
    GameProfile {
        key: "Arena",
        title: "Arena Brawl",
        aliases: &["arenabrawl", "arena_brawl", "brawl"],
        render: classic::arena,
    },
    GameProfile {
        key: "Battleground",
        title: "Warlords",
        aliases: &["warlords", "wl", "bg"],
        render: combat::battleground,
    },
    GameProfile {
        key: "Bedwars",
        title: "Bedwars",
        aliases: &["bw", "bed", "bedwar", "bed_wars"],
        render: bedwars::bedwars,
    },
    GameProfile {
        key: "BuildBattle",
        title: "Build Battle",
        aliases: &["build_battle", "bb", "build", "gtb"],
        render: casual::build_battle,
    },
    GameProfile {
        key: "Duels",
        title: "Duels",
        aliases: &["duel", "d"],
        render: casual::duels,
    },
    GameProfile {
        key: "GingerBread",
        title: "Turbo Kart Racers",
        aliases: &["tkr", "turbokartracers", "turbo_kart_racers", "karts"],
        render: classic::gingerbread,
    },
    GameProfile {
        key: "Housing",
        title: "Housing",
        aliases: &["house"],
        render: casual::housing,
    },
    GameProfile {
        key: "HungerGames",
        title: "Blitz Survival Games",
        aliases: &["survival_games", "blitz", "bsg", "sg", "blitzsg"],
        render: combat::hunger_games,
    },
    GameProfile {
        key: "Legacy",
        title: "Classic Lobby",
        aliases: &["classic", "classiclobby", "classic_lobby"],
        render: casual::legacy,
    },
    GameProfile {
        key: "MCGO",
        title: "Pigs and Crims",
        aliases: &["copsandcrims", "cops_and_crims", "cvc", "cac"],
        render: combat::cops_and_crims,
    },
    GameProfile {
        key: "MurderMystery",
        title: "Murder Mystery",
        aliases: &["murder_mystery", "mm", "murder"],
        render: casual::murder_mystery,
    },
    GameProfile {
        key: "Paintball",
        title: "Paintball",
        aliases: &["pb", "paint"],
        render: classic::paintball,
    },
    GameProfile {
        key: "Pit",
        title: "Pit",
        aliases: &["thepit", "the_pit"],
        render: pit::pit,
    },
    GameProfile {
        key: "Quake",
        title: "Quakecraft",
        aliases: &["quakecraft", "qc"],
        render: classic::quake,
    },
    GameProfile {
        key: "SkyBlock",
        title: "SkyBlock",
        aliases: &["sb", "sky_block"],
        render: casual::skyblock,
    },
    GameProfile {
        key: "SkyClash",
        title: "SkyClash",
        aliases: &["sky_clash", "sc"],
        render: skywars::skyclash,
    },
    GameProfile {
        key: "SkyWars",
        title: "SkyWars",
        aliases: &["sw", "sky_wars", "skywar"],
        render: skywars::skywars,
    },
    GameProfile {
        key: "SpeedUHC",
        title: "Speed UHC",
        aliases: &["speed_uhc", "suhc", "speed"],
        render: combat::speed_uhc,
    },
    GameProfile {
        key: "SuperSmash",
        title: "Smash Heroes",
        aliases: &["super_smash", "smash", "smashheroes", "smash_heroes", "sh"],
        render: combat::super_smash,
    },
    GameProfile {
        key: "TNTGames",
        title: "TNT Games",
        aliases: &["tnt", "tnt_games", "tntrun", "bowspleef", "wizards"],
        render: classic::tnt_games,
    },
    GameProfile {
        key: "TrueCombat",
        title: "Crazy Walls",
        aliases: &["true_combat", "crazywalls", "crazy_walls", "cw"],
        render: combat::crazy_walls,
    },
    GameProfile {
        key: "UHC",
        title: "UHC",
        aliases: &["uhcchampions", "uhc_champions"],
        render: combat::uhc,
    },
    GameProfile {
        key: "VampireZ",
        title: "VampireZ",
        aliases: &["vz", "vampire", "vampires"],
        render: classic::vampirez,
    },
    GameProfile {
        key: "Walls",
        title: "Walls",
        aliases: &["thewalls", "the_walls"],
        render: classic::walls,
    },
    GameProfile {
        key: "Walls3",
        title: "Mega Walls",
        aliases: &["megawalls", "mega_walls", "mw"],
        render: combat::mega_walls,
    },
];

/// Every accepted lowercase name (canonical keys and aliases) → profile.
static BY_NAME: Lazy<HashMap<String, &'static GameProfile>> = Lazy::new(|| {
    let mut names = HashMap::new();
    for profile in PROFILES {
        names.insert(profile.key.to_lowercase(), profile);
        for alias in profile.aliases {
            names.insert(alias.to_lowercase(), profile);
        }
    }
    names
});

/// Case-insensitive lookup by canonical key or alias.
pub fn resolve_game_alias(name: &str) -> Option<&'static GameProfile> {
    BY_NAME.get(&name.trim().to_lowercase()).copied()
}

/// Profile for an exact canonical key.
pub fn find_profile(key: &str) -> Option<&'static GameProfile> {
    PROFILES.iter().find(|profile| profile.key == key)
}

pub fn list_profiles() -> &'static [GameProfile] {
    PROFILES
}

/// Accepted game names starting with `prefix`, sorted, for tab completion.
pub fn complete(prefix: &str) -> Vec<&'static str> {
    let prefix = prefix.trim().to_lowercase();
    let mut matches: Vec<&'static str> = BY_NAME
        .keys()
        .filter(|name| name.starts_with(&prefix))
        .map(|name| name.as_str())
        .collect();
    matches.sort_unstable();
    matches
}
