//! World and schedule construction, shared by the binary and the tests.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::bird::{
    collision_margin, flight_machine, health_machine, Bird, FlightCtl, HealthCtl, BIRD_SIZE,
};
use crate::components::boxcollider::BoxCollider;
use crate::components::city::{city_machine, City, CityCtl};
use crate::components::dynamictext::DynamicText;
use crate::components::ground::Ground;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::ObstacleCtl;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::events::audio::AudioCmd;
use crate::events::bird::BirdEvent;
use crate::resources::artstore::stock_art;
use crate::resources::audiostate::AudioState;
use crate::resources::colliders::ColliderRegistry;
use crate::resources::entityindex::EntityIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::inbox::{BirdInbox, CityInbox, ObstacleInbox};
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::scene::{ActiveScene, NextScene};
use crate::resources::score::Score;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::scenes::SceneMachines;
use crate::systems::audio::{audio_sink, update_audio_messages};
use crate::systems::bird::bird_update;
use crate::systems::city::city_update;
use crate::systems::collision::{collision_detector, update_bird_messages};
use crate::systems::ground::ground_wrap;
use crate::systems::movement::movement;
use crate::systems::obstacle::obstacle_update;
use crate::systems::scene::{scene_change_detector, scene_dispatch, scene_update};
use crate::systems::time::update_world_time;

const CREDITS_TEXT: &str = "Birdy\nproudly presented by\nthe workshop crew";

/// Build the complete game world: resources, messages, and the long-lived
/// entities (bird, city, ground, world region, text widgets).
pub fn build_world(cfg: GameConfig, seed: Option<u64>) -> World {
    let mut world = World::new();

    world.insert_resource(WorldTime::with_tick_rate(cfg.tick_rate as f32));
    world.insert_resource(match seed {
        Some(seed) => GameRng::seeded(seed),
        None => GameRng::default(),
    });
    world.insert_resource(InputState::with_jump_key(&cfg.jump_key));
    world.init_resource::<WorldSignals>();
    world.init_resource::<EntityIndex>();
    world.init_resource::<ColliderRegistry>();
    world.init_resource::<Score>();
    world.init_resource::<ActiveScene>();
    world.init_resource::<NextScene>();
    world.init_resource::<BirdInbox>();
    world.init_resource::<CityInbox>();
    world.init_resource::<ObstacleInbox>();
    world.init_resource::<AudioState>();
    world.init_resource::<ObstacleCtl>();
    world.init_resource::<SceneMachines>();
    world.init_resource::<Messages<BirdEvent>>();
    world.init_resource::<Messages<AudioCmd>>();
    world.insert_resource(stock_art());

    spawn_entities(&mut world, &cfg);
    world.insert_resource(cfg);
    world
}

fn spawn_entities(world: &mut World, cfg: &GameConfig) {
    let margin = collision_margin();
    let bird = world
        .spawn((
            Bird,
            MapPosition::new(cfg.width / 8.0, cfg.ground_y() / 2.0),
            RigidBody::new(),
            Rotation::default(),
            Sprite::new("bird_yellow"),
            BoxCollider::new(BIRD_SIZE.x - 2.0 * margin, BIRD_SIZE.y - 2.0 * margin)
                .with_offset(Vec2::new(margin, margin)),
            Group("bird"),
            FlightCtl(flight_machine()),
            HealthCtl(health_machine()),
        ))
        .id();

    let city = world
        .spawn((City, MapPosition::new(0.0, 0.0), CityCtl(city_machine())))
        .id();

    let ground = world
        .spawn((
            Ground::new(cfg.width),
            MapPosition::new(0.0, cfg.ground_y()),
            RigidBody::new(),
            Sprite::new("ground"),
        ))
        .id();

    // Region the bird must stay inside; leaving it ends the game.
    let area = world.spawn(MapPosition::new(0.0, -cfg.height)).id();

    let mut credits_text = DynamicText::new(CREDITS_TEXT);
    credits_text.visible = false;
    let credits = world
        .spawn((
            credits_text,
            MapPosition::new(cfg.width / 2.0, cfg.height),
            RigidBody::new(),
        ))
        .id();

    let mut logo_text = DynamicText::new("B I R D Y");
    logo_text.visible = false;
    let logo = world
        .spawn((logo_text, MapPosition::new(cfg.width / 2.0, cfg.height / 2.0)))
        .id();

    let mut index = world.resource_mut::<EntityIndex>();
    index.insert("bird", bird);
    index.insert("city", city);
    index.insert("ground", ground);
    index.insert("world", area);
    index.insert("credits", credits);
    index.insert("logo", logo);
}

/// One simulation tick, in dependency order: clock, detection, dispatch,
/// entity controllers, the active scene, then movement and the audio sink.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((
        update_world_time,
        collision_detector.after(update_world_time),
        update_bird_messages.after(collision_detector),
        scene_dispatch.after(update_bird_messages),
        bird_update.after(scene_dispatch),
        city_update.after(bird_update),
        obstacle_update.after(city_update),
        scene_update.after(obstacle_update),
        scene_change_detector.after(scene_update),
        movement.after(scene_change_detector),
        ground_wrap.after(movement),
        update_audio_messages.after(scene_change_detector),
        audio_sink.after(update_audio_messages),
    ));
    schedule
}
