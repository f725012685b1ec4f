use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use simplestats_core::{
    chat, colors, complete, list_profiles, ChatCommand, HypixelApi, SimpleStatsConfig,
    StatsError, StatsQueryService,
};

#[derive(Debug, Parser)]
#[command(name = "simplestats", version)]
#[command(about = "Look up Hypixel player stats from the terminal")]
struct Args {
    /// Config file to use instead of the per-user default
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep Minecraft formatting codes in the output
    #[arg(long)]
    raw: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show overall stats, or one game's stats when a game is given
    Stats { player: String, game: Option<String> },
    /// Store and validate a Hypixel API key
    Setkey { key: String },
    /// List supported games, optionally only those starting with a prefix
    Games { prefix: Option<String> },
    /// Read `/stats` and `/setkey` commands from stdin, one per line
    Shell,
}

struct App {
    config: SimpleStatsConfig,
    config_path: PathBuf,
    raw: bool,
    service: Option<Arc<StatsQueryService<HypixelApi>>>,
}

impl App {
    fn emit(&self, line: &str) {
        if self.raw {
            println!("{line}");
        } else {
            println!("{}", colors::strip(line));
        }
    }

    fn service(&mut self) -> Result<Arc<StatsQueryService<HypixelApi>>, StatsError> {
        if let Some(service) = &self.service {
            return Ok(Arc::clone(service));
        }
        let key = self.config.hypixel_key().ok_or(StatsError::NoApiKey)?;
        let api = HypixelApi::new(key).with_base_url(self.config.api_base_url.clone());
        let service = Arc::new(StatsQueryService::new(api));
        self.service = Some(Arc::clone(&service));
        Ok(service)
    }

    async fn stats(&mut self, player: &str, game: Option<&str>) {
        let service = match self.service() {
            Ok(service) => service,
            Err(err) => return self.emit(&chat::err(&err.to_string())),
        };
        let handle = service.spawn_report(player.to_string(), game.map(str::to_string));
        match handle.await {
            Ok(Ok(report)) => {
                for line in chat::frame(&report, self.config.chat) {
                    self.emit(&line);
                }
            }
            Ok(Err(err)) => self.emit(&chat::err(&err.to_string())),
            Err(err) => {
                warn!("stats task failed: {err}");
                self.emit(&chat::err(&format!("{err}. See logs for more details.")));
            }
        }
    }

    async fn set_key(&mut self, key: &str) -> Result<()> {
        self.emit(&chat::put("Setting API key."));
        let key = match self.config.set_hypixel_key(key) {
            Ok(key) => key,
            Err(err) => {
                warn!("{err}");
                self.emit(&chat::err("Double check that you input your key correctly."));
                return Ok(());
            }
        };
        self.service = None;

        let api = HypixelApi::new(key).with_base_url(self.config.api_base_url.clone());
        match api.validate_key().await {
            Ok(()) => self.emit(&chat::put("Successfully set key!")),
            Err(err) => {
                warn!("key validation failed: {err}");
                self.emit(&chat::err("Set key... but it was invalid!!"));
                self.emit(&chat::err("Double check that you input your key correctly."));
            }
        }

        self.config
            .write_data(&self.config_path)
            .with_context(|| format!("failed to save {}", self.config_path.display()))?;
        Ok(())
    }

    fn games(&self, prefix: Option<&str>) {
        match prefix {
            Some(prefix) => {
                for name in complete(prefix) {
                    println!("{name}");
                }
            }
            None => {
                for profile in list_profiles() {
                    println!("{:<16} {:<20} {}", profile.key, profile.title, profile.aliases.join(", "));
                }
            }
        }
    }

    async fn shell(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if matches!(line, "exit" | "quit") {
                break;
            }
            match ChatCommand::parse(line) {
                Ok(ChatCommand::Stats { player, game }) => self.stats(player, game).await,
                Ok(ChatCommand::SetKey { key }) => self.set_key(key).await?,
                Err(err) => self.emit(&chat::err(&err.to_string())),
            }
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => SimpleStatsConfig::default_path()
            .ok_or_else(|| anyhow!("could not determine the user config directory"))?,
    };
    let config = SimpleStatsConfig::load(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    let mut app = App {
        config,
        config_path,
        raw: args.raw,
        service: None,
    };

    match args.command {
        Command::Stats { player, game } => app.stats(&player, game.as_deref()).await,
        Command::Setkey { key } => app.set_key(&key).await?,
        Command::Games { prefix } => app.games(prefix.as_deref()),
        Command::Shell => app.shell().await?,
    }
    Ok(())
}
