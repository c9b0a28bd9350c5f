//! Scene flow: intro to start to play, scoring and game over.

use bevy_ecs::prelude::*;

use birdy::components::bird::{FlightCtl, FlightState, HealthCtl, HealthState};
use birdy::components::ground::Ground;
use birdy::components::mapposition::MapPosition;
use birdy::components::obstacle::{ObstacleCtl, ObstaclePhase};
use birdy::components::rigidbody::RigidBody;
use birdy::events::bird::BirdEvent;
use birdy::game::{build_schedule, build_world};
use birdy::resources::audiostate::AudioState;
use birdy::resources::gameconfig::GameConfig;
use birdy::resources::input::InputState;
use birdy::resources::scene::{ActiveScene, NextScene, SceneId};
use birdy::resources::score::Score;
use birdy::resources::worldsignals::WorldSignals;
use birdy::scenes::{PlayState, SceneMachines, StartState};

struct Rig {
    world: World,
    schedule: Schedule,
}

fn make_rig() -> Rig {
    Rig {
        world: build_world(GameConfig::new(), Some(11)),
        schedule: build_schedule(),
    }
}

impl Rig {
    fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.schedule.run(&mut self.world);
        }
    }

    fn hold_jump_and_tick(&mut self, n: u32) {
        for _ in 0..n {
            let mut input = self.world.resource_mut::<InputState>();
            input.begin_tick();
            let key = input.jump_key;
            input.press(key);
            self.tick(1);
        }
    }

    fn release_jump(&mut self) {
        self.world.resource_mut::<InputState>().begin_tick();
    }

    fn goto(&mut self, scene: SceneId) {
        self.world.resource_mut::<NextScene>().set(scene);
        self.tick(1);
        assert_eq!(self.active(), scene);
    }

    fn active(&self) -> SceneId {
        self.world.resource::<ActiveScene>().get()
    }

    fn banner(&self) -> Option<String> {
        self.world
            .resource::<WorldSignals>()
            .string("banner")
            .map(str::to_string)
    }

    fn points(&self) -> i32 {
        self.world.resource::<Score>().points
    }

    fn play_state(&self) -> PlayState {
        self.world.resource::<SceneMachines>().play.state()
    }

    fn send(&mut self, event: BirdEvent) {
        self.world
            .resource_mut::<Messages<BirdEvent>>()
            .write(event);
    }

    fn ground_velocity(&mut self) -> glam::Vec2 {
        self.world
            .query_filtered::<&RigidBody, With<Ground>>()
            .single(&self.world)
            .unwrap()
            .velocity
    }

    fn bird_x(&mut self) -> f32 {
        self.world
            .query_filtered::<&MapPosition, With<FlightCtl>>()
            .single(&self.world)
            .unwrap()
            .pos
            .x
    }
}

#[test]
fn intro_plays_credits_and_hands_over_to_the_start_scene() {
    let mut rig = make_rig();
    rig.tick(1);
    assert_eq!(rig.active(), SceneId::Intro);
    assert!(rig.world.resource::<AudioState>().is_music_running("bgmusic"));

    // Credits scroll 360 px at 1.5 px/tick, then 2 s pause, 4 s logo.
    rig.tick(650);
    assert_eq!(rig.active(), SceneId::Start);
    assert_eq!(rig.banner().as_deref(), Some("title"));
    let speed = rig.ground_velocity();
    assert!(speed.x < 0.0);
}

#[test]
fn holding_jump_starts_the_ready_countdown_into_play() {
    let mut rig = make_rig();
    rig.goto(SceneId::Start);
    assert_eq!(
        rig.world.resource::<SceneMachines>().start.state(),
        StartState::Starting
    );

    rig.hold_jump_and_tick(1);
    assert_eq!(
        rig.world.resource::<SceneMachines>().start.state(),
        StartState::Ready
    );
    assert_eq!(rig.banner().as_deref(), Some("ready"));

    // Keep flapping through the countdown so the bird stays off the ground.
    rig.hold_jump_and_tick(125);
    assert_eq!(rig.active(), SceneId::Play);
    assert_eq!(rig.play_state(), PlayState::Playing);
    assert_eq!(rig.points(), 0);

    rig.release_jump();
    rig.tick(1);
    assert_eq!(
        rig.world.resource::<ObstacleCtl>().0.state(),
        ObstaclePhase::Breeding
    );
}

#[test]
fn leaving_a_passage_scores_a_point() {
    let mut rig = make_rig();
    rig.goto(SceneId::Play);
    rig.send(BirdEvent::LeftPassage);
    rig.tick(1);
    assert_eq!(rig.points(), 1);
    assert_eq!(rig.play_state(), PlayState::Playing);
}

#[test]
fn banked_passage_points_absorb_one_pipe_hit_until_they_run_out() {
    let mut rig = make_rig();
    rig.goto(SceneId::Play);

    // Five passages bank five points.
    for _ in 0..5 {
        rig.send(BirdEvent::LeftPassage);
        rig.tick(1);
    }
    assert_eq!(rig.points(), 5);
    assert_eq!(rig.play_state(), PlayState::Playing);

    // A hit is affordable at five points: three are spent and the bird is
    // pushed past the obstacle, pipe width plus its own width.
    let x0 = rig.bird_x();
    rig.send(BirdEvent::TouchedPipe);
    rig.tick(1);
    assert_eq!(rig.play_state(), PlayState::Playing);
    assert_eq!(rig.points(), 2);
    let cfg = rig.world.resource::<GameConfig>().clone();
    assert!((rig.bird_x() - x0 - (cfg.pipe_width + 34.0)).abs() < 0.01);

    rig.tick(1);
    let health = rig
        .world
        .query::<&HealthCtl>()
        .single(&rig.world)
        .unwrap()
        .0
        .state();
    assert_eq!(health, HealthState::Injured);

    // Two points cannot pay for another hit.
    rig.send(BirdEvent::TouchedPipe);
    rig.tick(1);
    assert_eq!(rig.play_state(), PlayState::GameOver);
    assert_eq!(rig.points(), 2);
    assert_eq!(rig.banner().as_deref(), Some("game_over"));
    assert_eq!(rig.ground_velocity(), glam::Vec2::ZERO);
}

#[test]
fn pipe_hit_without_points_ends_the_round() {
    let mut rig = make_rig();
    rig.goto(SceneId::Play);
    assert_eq!(rig.points(), 0);

    rig.send(BirdEvent::TouchedPipe);
    rig.tick(1);
    assert_eq!(rig.play_state(), PlayState::GameOver);
    assert_eq!(rig.banner().as_deref(), Some("game_over"));
    assert_eq!(rig.ground_velocity(), glam::Vec2::ZERO);

    // The crash verdict reaches the bird one tick later, the stop command
    // the spawner.
    rig.tick(1);
    let flight = rig
        .world
        .query::<&FlightCtl>()
        .single(&rig.world)
        .unwrap()
        .0
        .state();
    assert_eq!(flight, FlightState::Crashing);
    assert_eq!(
        rig.world.resource::<ObstacleCtl>().0.state(),
        ObstaclePhase::Stopped
    );
}

#[test]
fn ground_touch_ends_the_round() {
    let mut rig = make_rig();
    rig.goto(SceneId::Play);
    rig.send(BirdEvent::TouchedGround);
    rig.tick(1);
    assert_eq!(rig.play_state(), PlayState::GameOver);
    assert!(!rig.world.resource::<AudioState>().is_music_running("bgmusic"));
}

#[test]
fn jump_after_game_over_returns_to_the_start_scene() {
    let mut rig = make_rig();
    rig.goto(SceneId::Play);
    rig.send(BirdEvent::TouchedPipe);
    rig.tick(1);
    assert_eq!(rig.play_state(), PlayState::GameOver);

    rig.hold_jump_and_tick(1);
    assert_eq!(rig.active(), SceneId::Start);
    assert_eq!(rig.banner().as_deref(), Some("title"));
}
