//! Duskmire - headless demo arena.
//!
//! Spawns the player and a handful of species, drives the simulation with a
//! scripted command stream for a fixed duration, and prints the session
//! summary. Rendering clients embed [`duskmire::DuskmirePlugin`] the same
//! way; the only difference is where the commands come from.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use rand::Rng;
use std::time::Duration;

use duskmire::core::{GameState, SessionContext};
use duskmire::enemies::{spawn_enemy, SpeciesRegistry};
use duskmire::player::{spawn_player, PlayerCommand, PlayerConfig};
use duskmire::DuskmirePlugin;

const TICK_SECS: f32 = 1.0 / 60.0;
const RUN_SECS: f32 = 30.0;

fn main() {
    let mut app = App::new();
    app.add_plugins((LogPlugin::default(), StatesPlugin))
        .init_resource::<Time>()
        .add_plugins(DuskmirePlugin)
        .add_systems(OnEnter(GameState::InGame), spawn_arena);

    let ticks = (RUN_SECS / TICK_SECS) as u32;
    for tick in 0..ticks {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(TICK_SECS));
        drive_player(&mut app, tick);
        app.update();
        if app.world().resource::<State<GameState>>().get() == &GameState::GameOver {
            break;
        }
    }

    let session = app.world().resource::<SessionContext>();
    println!(
        "session over: {} kills, {:.1} damage dealt, {:.1} damage taken",
        session.kills, session.damage_dealt, session.damage_taken
    );
}

/// Spawn the player and one of each loaded species, scattered along the x
/// axis.
fn spawn_arena(
    mut commands: Commands,
    registry: Res<SpeciesRegistry>,
    config: Res<PlayerConfig>,
) {
    spawn_player(&mut commands, &config, Vec2::ZERO);

    let mut rng = rand::thread_rng();
    let species = ["husk", "stalker", "ravager", "sentinel", "shade"];
    for (i, name) in species.iter().enumerate() {
        let side = if i % 2 == 0 { 1.0 } else { -1.0 };
        let x = side * (6.0 + 3.0 * i as f32 + rng.gen_range(-1.0..1.0));
        spawn_enemy(&mut commands, &registry, name, Vec2::new(x, 0.0));
    }
}

/// Scripted command stream: sweep back and forth, swinging periodically.
fn drive_player(app: &mut App, tick: u32) {
    let world = app.world_mut();
    let t = tick as f32 * TICK_SECS;
    let dir = if (t / 6.0) as u32 % 2 == 0 { 1.0 } else { -1.0 };
    world.send_event(PlayerCommand::Move(dir * 0.8));
    if tick % 24 == 0 {
        world.send_event(PlayerCommand::Attack);
    }
    if tick % 300 == 150 {
        world.send_event(PlayerCommand::Jump);
    }
}
