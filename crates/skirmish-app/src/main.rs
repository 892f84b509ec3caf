use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

use skirmish_app::autopilot::Autopilot;
use skirmish_app::config::{AppConfig, AppError};
use skirmish_app::game_loop::spawn_game_loop;
use skirmish_app::hud::LogHud;
use skirmish_app::logging::init_logging;
use skirmish_app::state::GameLoopCommand;
use skirmish_core::commands::PlayerCommand;

fn main() -> ExitCode {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref());
    init_logging(
        config
            .as_ref()
            .map(|c| c.log_filter.as_str())
            .unwrap_or("info"),
    );

    match config.and_then(run) {
        Ok(final_score) => {
            info!(final_score, "session finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "session failed");
            ExitCode::FAILURE
        }
    }
}

/// Play one round to the end and return the final score.
fn run(config: AppConfig) -> Result<u32, AppError> {
    info!(
        seed = config.sim.seed,
        duration_secs = config.sim.round_duration_secs,
        autopilot = config.autopilot,
        "starting skirmish"
    );

    let hud = LogHud::new();
    let game = spawn_game_loop(&config, Some(Box::new(hud.clone())))?;

    // Assets are in memory already; report them the way a loader would.
    game.send(GameLoopCommand::EnemyTemplateLoaded(config.enemy_template))?;
    game.send(GameLoopCommand::WeaponLoaded)?;
    game.send_player(PlayerCommand::StartRound)?;

    let mut autopilot = config.autopilot.then(Autopilot::default);
    let played = game.run_until_round_end(config.tick_duration(), |snapshot| {
        if let Some(pilot) = autopilot.as_mut() {
            for command in pilot.plan(snapshot) {
                game.send_player(command)?;
            }
        }
        Ok(())
    });

    // Join first: a panicked loop is the more useful error.
    game.shutdown()?;
    played?;
    Ok(hud.final_score().unwrap_or_default())
}
