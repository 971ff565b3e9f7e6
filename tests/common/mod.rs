//! Shared harness for the scenario tests: a headless app with a manually
//! advanced clock, plus spawn and inspection helpers.

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use std::sync::Arc;
use std::time::Duration;

use duskmire::core::GameState;
use duskmire::enemies::{
    spawn_from_config, EnemyParams, EnemyState, SpeciesConfig, SpeciesDefinition, StateMachine,
};
use duskmire::combat::Health;
use duskmire::player::{spawn_player, PlayerCommand, PlayerConfig};
use duskmire::DuskmirePlugin;

pub const TICK: f32 = 1.0 / 60.0;

/// Headless simulation app, already in `InGame`. The clock never advances
/// on its own; use [`tick`].
pub fn sim_app() -> App {
    let mut app = App::new();
    app.add_plugins(StatesPlugin)
        .init_resource::<Time>()
        .add_plugins(DuskmirePlugin);
    app.insert_state(GameState::InGame);
    app
}

/// Advance the clock by `dt` seconds and run one update.
pub fn tick(app: &mut App, dt: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(dt));
    app.update();
}

/// Run `seconds` of simulation at the default tick rate.
pub fn run_for(app: &mut App, seconds: f32) {
    let steps = (seconds / TICK).ceil() as u32;
    for _ in 0..steps {
        tick(app, TICK);
    }
}

/// Baseline species used by most scenarios; individual tests mutate the
/// definition before converting it.
pub fn base_definition() -> SpeciesDefinition {
    ron::from_str(
        r#"
        (
            name: "TestSpecies",
            max_health: 20.0,
            patrol_speed: 1.5,
            chase_speed: 3.0,
            idle_time: 1.0,
            patrol_wait: 0.4,
            waypoints: [(-4.0, 0.0), (4.0, 0.0)],
            chase_bounds: (-12.0, 12.0),
            sight_radius: 6.0,
            sight_tolerance: 1.5,
            hurt_radius: 0.5,
            attack_cooldown: 1.2,
            attack: (
                clip: "attack",
                damage: 1.0,
                window: (0.3, 0.7),
                point_offset: (0.8, 0.0),
                point_radius: 0.6,
            ),
            clips: {
                "idle": 1.0,
                "walk": 0.8,
                "attack": 0.7,
                "hurt": 0.35,
                "death": 0.9,
            },
            despawn_delay: 0.6,
        )
        "#,
    )
    .expect("base definition parses")
}

/// Spawn an enemy from a behavior table at `position`.
pub fn spawn_enemy_at(app: &mut App, config: SpeciesConfig, position: Vec2) -> Entity {
    let world = app.world_mut();
    let entity = {
        let mut commands = world.commands();
        spawn_from_config(&mut commands, Arc::new(config), position)
    };
    world.flush();
    entity
}

/// Spawn the player at `position`, using the current `PlayerConfig`.
pub fn spawn_player_at(app: &mut App, position: Vec2) -> Entity {
    let config = app.world().resource::<PlayerConfig>().clone();
    let world = app.world_mut();
    let entity = {
        let mut commands = world.commands();
        spawn_player(&mut commands, &config, position)
    };
    world.flush();
    entity
}

pub fn send(app: &mut App, command: PlayerCommand) {
    app.world_mut().send_event(command);
}

pub fn enemy_state(app: &App, entity: Entity) -> EnemyState {
    app.world()
        .get::<StateMachine>(entity)
        .expect("entity has a state machine")
        .state()
}

pub fn health_of(app: &App, entity: Entity) -> f32 {
    app.world()
        .get::<Health>(entity)
        .expect("entity has health")
        .current()
}

pub fn is_despawned(app: &App, entity: Entity) -> bool {
    app.world().get_entity(entity).is_err()
}

pub fn teleport(app: &mut App, entity: Entity, position: Vec2) {
    app.world_mut()
        .get_mut::<Transform>(entity)
        .expect("entity has a transform")
        .translation = position.extend(0.0);
}

pub fn position_of(app: &App, entity: Entity) -> Vec2 {
    app.world()
        .get::<Transform>(entity)
        .expect("entity has a transform")
        .translation
        .truncate()
}

pub fn params_of<'a>(app: &'a App, entity: Entity) -> &'a EnemyParams {
    app.world()
        .get::<EnemyParams>(entity)
        .expect("entity has enemy params")
}
