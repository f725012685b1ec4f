pub mod api;
pub mod chat;
pub mod colors;
pub mod command;
pub mod config;
pub mod derived;
pub mod error;
pub mod json;
pub mod profiles;
pub mod service;
pub mod stats;

pub use api::{ApiError, HypixelApi, PlayerSource, DEFAULT_BASE_URL};
pub use command::{tab_complete, ChatCommand, CommandError};
pub use config::{ChatOptions, ConfigError, SimpleStatsConfig};
pub use error::StatsError;
pub use profiles::{complete, list_profiles, render_overall, resolve_game_alias, GameProfile};
pub use service::{IdentityCache, StatsQueryService};
pub use stats::{LineKind, Report, ReportBuilder, ReportLine, StatSpec};
