/// Chat command parsing for `/stats` and `/setkey`
use crate::profiles;
use thiserror::Error;

pub const STATS_USAGE: &str = "/stats <player> [game]";
pub const SETKEY_USAGE: &str = "/setkey [api key]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand<'a> {
    Stats {
        player: &'a str,
        game: Option<&'a str>,
    },
    SetKey {
        key: &'a str,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    Usage(&'static str),
    #[error("Unknown command: {0}")]
    Unknown(String),
}

impl<'a> ChatCommand<'a> {
    /// Parse one chat line. The leading `/` is optional.
    pub fn parse(line: &'a str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        match name.trim_start_matches('/').to_ascii_lowercase().as_str() {
            "stats" => match args[..] {
                [player] => Ok(ChatCommand::Stats {
                    player,
                    game: None,
                }),
                [player, game] => Ok(ChatCommand::Stats {
                    player,
                    game: Some(game),
                }),
                _ => Err(CommandError::Usage(STATS_USAGE)),
            },
            "setkey" => match args[..] {
                [key] => Ok(ChatCommand::SetKey { key }),
                _ => Err(CommandError::Usage(SETKEY_USAGE)),
            },
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

/// Completions for the word being typed at the end of `line`. Only the
/// game argument of `/stats` completes.
pub fn tab_complete(line: &str) -> Vec<&'static str> {
    let mut words: Vec<&str> = line.split_whitespace().collect();
    if line.ends_with(char::is_whitespace) {
        words.push("");
    }
    match words.as_slice() {
        [command, _player, partial] if command.trim_start_matches('/').eq_ignore_ascii_case("stats") => {
            profiles::complete(partial)
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stats_arity() {
        assert_eq!(
            ChatCommand::parse("/stats Nora"),
            Ok(ChatCommand::Stats { player: "Nora", game: None })
        );
        assert_eq!(
            ChatCommand::parse("stats Nora bw"),
            Ok(ChatCommand::Stats { player: "Nora", game: Some("bw") })
        );
        assert_eq!(ChatCommand::parse("/stats"), Err(CommandError::Usage(STATS_USAGE)));
        assert_eq!(
            ChatCommand::parse("/stats a b c").unwrap_err().to_string(),
            "/stats <player> [game]"
        );
    }

    #[test]
    fn parses_setkey() {
        assert_eq!(
            ChatCommand::parse("/SetKey abc"),
            Ok(ChatCommand::SetKey { key: "abc" })
        );
        assert_eq!(ChatCommand::parse("/setkey"), Err(CommandError::Usage(SETKEY_USAGE)));
        assert_eq!(
            ChatCommand::parse("/party invite"),
            Err(CommandError::Unknown("/party".to_string()))
        );
    }

    #[test]
    fn completes_only_the_game_argument() {
        assert!(tab_complete("/stats nora ").len() > 20);
        assert!(tab_complete("/stats nora bed").contains(&"bedwars"));
        assert!(tab_complete("/stats no").is_empty());
        assert!(tab_complete("/setkey ab").is_empty());
    }
}
