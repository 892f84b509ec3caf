//! Errors surfaced by the simulation. None of them are fatal: they report a
//! precondition the host can retry after.

use skirmish_core::enums::RoundPhase;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    /// The asset loader has not delivered the enemy model yet.
    #[error("enemy template is still loading")]
    EnemyTemplateNotLoaded,

    /// The requested lifecycle action does not apply in this phase.
    #[error("cannot {action} a round in phase {from:?}")]
    InvalidTransition {
        from: RoundPhase,
        action: &'static str,
    },
}
