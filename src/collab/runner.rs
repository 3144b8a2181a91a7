//! Drive stored matches one action at a time.

use tracing::{debug, info, warn};

use super::notify::{deliver, Notifier};
use super::store::{MatchStore, Versioned};
use super::{CollaboratorError, MatchId};
use crate::core::action::{Action, Intent, Outcome};
use crate::core::config::MatchConfig;
use crate::core::error::EngineError;
use crate::core::player::PlayerId;
use crate::core::state::MatchState;
use crate::turn::{new_match, GuildOfThieves};

/// Loads a match, applies one action, then persists and notifies.
///
/// An action starts from the cached mid-cycle snapshot when there is one,
/// otherwise from the last save. Per [`Intent`]:
/// - `Save`: commit against the version the action started from, drop the
///   cache
/// - `Cache`: keep the progress in the cache slot
/// - `Undo`: drop the cache, back to the last save
/// - `None`: nothing is written
pub struct MatchRunner<S, N> {
    engine: GuildOfThieves,
    store: S,
    notifier: N,
}

impl<S: MatchStore, N: Notifier> MatchRunner<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            engine: GuildOfThieves::new(),
            store,
            notifier,
        }
    }

    #[must_use]
    pub fn with_engine(mut self, engine: GuildOfThieves) -> Self {
        self.engine = engine;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Create and save a new match. Returns the first version.
    pub fn create(&mut self, id: MatchId, config: MatchConfig) -> Result<u64, CollaboratorError> {
        let state = new_match(config).map_err(EngineError::from)?;
        let version = self.store.save(id, 0, state.encode()?)?;
        info!(%id, players = state.player_count(), "match stored");
        Ok(version)
    }

    /// The state the next action would start from.
    pub fn current(&self, id: MatchId) -> Result<Versioned<MatchState>, CollaboratorError> {
        let snapshot = match self.store.cached(id) {
            Some(cached) => cached,
            None => self.store.load(id)?,
        };
        let state = MatchState::decode(&snapshot.value)?;
        Ok(Versioned::new(snapshot.version, state))
    }

    /// Last committed state, ignoring any cached progress.
    pub fn saved(&self, id: MatchId) -> Result<Versioned<MatchState>, CollaboratorError> {
        let snapshot = self.store.load(id)?;
        let state = MatchState::decode(&snapshot.value)?;
        Ok(Versioned::new(snapshot.version, state))
    }

    /// Apply `action` by `player` to match `id`.
    ///
    /// A conflicting save drops the cached progress; the caller reloads and
    /// retries.
    pub fn submit(
        &mut self,
        id: MatchId,
        player: PlayerId,
        action: &Action,
    ) -> Result<Outcome, CollaboratorError> {
        let Versioned {
            version,
            value: mut state,
        } = self.current(id)?;

        let outcome = self.engine.apply(&mut state, player, action)?;

        match outcome.intent {
            Intent::Save => {
                let bytes = state.encode()?;
                match self.store.save(id, version, bytes) {
                    Ok(saved) => {
                        self.store.discard_cache(id);
                        debug!(%id, version = saved, "match saved");
                    }
                    Err(err) => {
                        if err.is_conflict() {
                            self.store.discard_cache(id);
                        }
                        warn!(%id, error = %err, "save failed");
                        return Err(err);
                    }
                }
            }
            Intent::Cache => {
                self.store.cache(id, Versioned::new(version, state.encode()?));
                debug!(%id, phase = ?state.phase, "progress cached");
            }
            Intent::Undo => {
                self.store.discard_cache(id);
                debug!(%id, "cached progress discarded");
            }
            Intent::None => {}
        }

        deliver(&self.notifier, id, &outcome.notifications);
        Ok(outcome)
    }
}
