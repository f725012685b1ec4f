/// Orchestration of one stats request: identity lookup, fetch, report
use crate::api::PlayerSource;
use crate::error::StatsError;
use crate::json;
use crate::profiles::{self, overall::render_overall, GameProfile};
use crate::stats::Report;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Lowercased player name to UUID. Names the API did not know are stored
/// with a random UUID so they are never looked up by name again.
#[derive(Debug, Default)]
pub struct IdentityCache {
    entries: Mutex<HashMap<String, Uuid>>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Uuid> {
        let entries = self.entries.lock().ok()?;
        entries.get(&name.to_lowercase()).copied()
    }

    pub fn insert(&self, name: &str, uuid: Uuid) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(name.to_lowercase(), uuid);
        }
    }

    /// Cache a sentinel for `name` unless something is already cached.
    pub fn mark_not_found(&self, name: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries
                .entry(name.to_lowercase())
                .or_insert_with(Uuid::new_v4);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parses the document's `uuid` field, which Hypixel sends without dashes.
fn document_uuid(player: &serde_json::Value) -> Option<Uuid> {
    json::get_str(player, "uuid").and_then(|raw| Uuid::parse_str(raw).ok())
}

pub struct StatsQueryService<S> {
    source: S,
    identities: IdentityCache,
}

impl<S: PlayerSource> StatsQueryService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            identities: IdentityCache::new(),
        }
    }

    pub fn identities(&self) -> &IdentityCache {
        &self.identities
    }

    pub fn resolve_game_alias(&self, alias: &str) -> Option<&'static GameProfile> {
        profiles::resolve_game_alias(alias)
    }

    pub async fn report_overall_stats(&self, name: &str) -> Result<Report, StatsError> {
        self.fetch_and_report(name, None).await
    }

    pub async fn report_game_stats(&self, name: &str, alias: &str) -> Result<Report, StatsError> {
        self.fetch_and_report(name, Some(alias)).await
    }

    pub async fn fetch_and_report(
        &self,
        name: &str,
        alias: Option<&str>,
    ) -> Result<Report, StatsError> {
        let name = name.trim().to_lowercase();
        let profile = match alias {
            Some(alias) => Some(
                self.resolve_game_alias(alias)
                    .ok_or_else(|| StatsError::InvalidGame(alias.to_string()))?,
            ),
            None => None,
        };

        let cached = self.identities.get(&name);
        let fetched = match cached {
            Some(uuid) => {
                debug!("identity cache hit for {name}, fetching by uuid {uuid}");
                self.source.player_by_uuid(uuid).await
            }
            None => {
                debug!("fetching {name} by name");
                self.source.player_by_name(&name).await
            }
        };

        let player = match fetched {
            Ok(Some(player)) if player.is_object() => player,
            Ok(_) => {
                warn!("no player document for {name}");
                self.identities.mark_not_found(&name);
                return Err(StatsError::PlayerNotFound(name));
            }
            Err(err) => {
                warn!("player lookup for {name} failed: {err}");
                return Err(err.into());
            }
        };

        if cached.is_none() {
            if let Some(uuid) = document_uuid(&player) {
                info!("caching identity {name} -> {uuid}");
                self.identities.insert(&name, uuid);
            }
        }

        Ok(match profile {
            Some(profile) => profile.render(&player),
            None => render_overall(&player),
        })
    }
}

impl<S: PlayerSource + 'static> StatsQueryService<S> {
    /// Run a request on the tokio runtime so the caller's loop is not
    /// blocked; the handle resolves to the finished report.
    pub fn spawn_report(
        self: &Arc<Self>,
        name: String,
        alias: Option<String>,
    ) -> JoinHandle<Result<Report, StatsError>> {
        let service = Arc::clone(self);
        tokio::spawn(async move { service.fetch_and_report(&name, alias.as_deref()).await })
    }
}
