//! State shared between the host thread and the game loop thread.

use std::sync::{Arc, Mutex};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::EnemyTemplate;
use skirmish_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// The asset loader finished the enemy model.
    EnemyTemplateLoaded(EnemyTemplate),
    /// The asset loader finished the weapon model.
    WeaponLoaded,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after each tick.
///
/// `None` until the first tick completes.
#[derive(Debug, Clone, Default)]
pub struct SharedSnapshot(Arc<Mutex<Option<GameStateSnapshot>>>);

impl SharedSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, snapshot: GameStateSnapshot) {
        if let Ok(mut lock) = self.0.lock() {
            *lock = Some(snapshot);
        }
    }

    /// Clone of the latest snapshot. A poisoned lock reads as empty.
    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.0.lock().ok().and_then(|lock| lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = SharedSnapshot::new();
        assert!(shared.latest().is_none());
    }

    #[test]
    fn test_store_visible_through_clones() {
        let shared = SharedSnapshot::new();
        let reader = shared.clone();
        let mut snapshot = GameStateSnapshot::default();
        snapshot.round.score = 3;
        shared.store(snapshot.clone());
        assert_eq!(reader.latest(), Some(snapshot));
    }
}
