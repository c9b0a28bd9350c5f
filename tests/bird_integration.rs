//! Bird flight and health behaviour over full world ticks.

use bevy_ecs::prelude::*;

use birdy::components::bird::{FlightCtl, FlightState, HealthCtl, HealthState};
use birdy::components::mapposition::MapPosition;
use birdy::components::rigidbody::RigidBody;
use birdy::components::rotation::Rotation;
use birdy::events::bird::BirdEvent;
use birdy::game::{build_schedule, build_world};
use birdy::resources::gameconfig::GameConfig;
use birdy::resources::inbox::BirdInbox;
use birdy::resources::input::InputState;

struct Rig {
    world: World,
    schedule: Schedule,
}

fn make_rig() -> Rig {
    let mut rig = Rig {
        world: build_world(GameConfig::new(), Some(7)),
        schedule: build_schedule(),
    };
    // First tick initializes every machine.
    rig.tick(1);
    rig
}

impl Rig {
    fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.schedule.run(&mut self.world);
        }
    }

    fn send(&mut self, event: BirdEvent) {
        self.world.resource_mut::<BirdInbox>().push(event);
    }

    fn flight(&mut self) -> FlightState {
        self.world
            .query::<&FlightCtl>()
            .single(&self.world)
            .unwrap()
            .0
            .state()
    }

    fn health(&mut self) -> HealthState {
        self.world
            .query::<&HealthCtl>()
            .single(&self.world)
            .unwrap()
            .0
            .state()
    }

    fn bird_pos(&mut self) -> glam::Vec2 {
        self.world
            .query_filtered::<&MapPosition, With<FlightCtl>>()
            .single(&self.world)
            .unwrap()
            .pos
    }

    fn bird_velocity(&mut self) -> glam::Vec2 {
        self.world
            .query_filtered::<&RigidBody, With<FlightCtl>>()
            .single(&self.world)
            .unwrap()
            .velocity
    }

    fn bird_rotation(&mut self) -> f32 {
        self.world
            .query_filtered::<&Rotation, With<FlightCtl>>()
            .single(&self.world)
            .unwrap()
            .degrees
    }

    fn hold_jump(&mut self) {
        let mut input = self.world.resource_mut::<InputState>();
        input.begin_tick();
        let key = input.jump_key;
        input.press(key);
    }
}

#[test]
fn gravity_pulls_the_flying_bird_down() {
    let mut rig = make_rig();
    let y0 = rig.bird_pos().y;
    rig.tick(20);
    assert_eq!(rig.flight(), FlightState::Flying);
    assert!(rig.bird_velocity().y > 0.0);
    assert!(rig.bird_pos().y > y0);
}

#[test]
fn flapping_pushes_the_bird_upwards() {
    let mut rig = make_rig();
    rig.tick(10);
    let falling = rig.bird_velocity().y;
    assert!(falling > 0.0);
    for _ in 0..10 {
        rig.hold_jump();
        rig.tick(1);
    }
    assert!(rig.bird_velocity().y < falling);
    assert!(rig.bird_velocity().y < 0.0);
}

#[test]
fn rotation_follows_the_vertical_speed_within_limits() {
    let mut rig = make_rig();
    rig.tick(120);
    let degrees = rig.bird_rotation();
    assert!((-45.0..=90.0).contains(&degrees));
    // A long fall pins the nose down.
    assert!(degrees > 0.0);
}

#[test]
fn pipe_hit_injures_then_heals_after_the_timer() {
    let mut rig = make_rig();
    rig.send(BirdEvent::TouchedPipe);
    rig.tick(1);
    assert_eq!(rig.health(), HealthState::Injured);
    assert_eq!(rig.flight(), FlightState::Crashing);

    // Injury lasts one second of ticks.
    rig.tick(59);
    assert_eq!(rig.health(), HealthState::Injured);
    rig.tick(2);
    assert_eq!(rig.health(), HealthState::Sane);
    // Flight does not recover by itself.
    assert_eq!(rig.flight(), FlightState::Crashing);
}

#[test]
fn second_pipe_hit_restarts_the_injury_timer() {
    let mut rig = make_rig();
    rig.send(BirdEvent::TouchedPipe);
    rig.tick(30);
    assert_eq!(rig.health(), HealthState::Injured);
    rig.send(BirdEvent::TouchedPipe);
    rig.tick(45);
    // 75 ticks after the first hit, but only 45 after the second.
    assert_eq!(rig.health(), HealthState::Injured);
    rig.tick(20);
    assert_eq!(rig.health(), HealthState::Sane);
}

#[test]
fn ground_touch_is_fatal_and_stops_the_bird() {
    let mut rig = make_rig();
    rig.send(BirdEvent::TouchedGround);
    rig.tick(1);
    assert_eq!(rig.flight(), FlightState::Down);
    assert_eq!(rig.health(), HealthState::Dead);
    assert_eq!(rig.bird_rotation(), 90.0);
    assert_eq!(rig.bird_velocity(), glam::Vec2::ZERO);
}

#[test]
fn ground_touch_preempts_a_pipe_hit_queued_behind_it() {
    let mut rig = make_rig();
    rig.send(BirdEvent::TouchedGround);
    rig.send(BirdEvent::TouchedPipe);
    rig.tick(1);
    assert_eq!(rig.flight(), FlightState::Down);
    assert_eq!(rig.health(), HealthState::Dead);
    // The trailing pipe hit was dropped in Dead: no injury timer is running,
    // so nothing changes once a recovery would have been due.
    rig.tick(70);
    assert_eq!(rig.health(), HealthState::Dead);
}

#[test]
fn pipe_hit_then_ground_touch_resolve_in_queue_order() {
    let mut rig = make_rig();
    rig.send(BirdEvent::TouchedPipe);
    rig.send(BirdEvent::TouchedGround);
    rig.tick(1);
    // Flying -> Crashing -> Down and Sane -> Injured -> Dead in one tick.
    assert_eq!(rig.flight(), FlightState::Down);
    assert_eq!(rig.health(), HealthState::Dead);
    assert_eq!(rig.bird_velocity(), glam::Vec2::ZERO);
}

#[test]
fn leaving_the_world_kills_the_bird_in_flight() {
    let mut rig = make_rig();
    rig.send(BirdEvent::LeftWorld);
    rig.tick(1);
    assert_eq!(rig.flight(), FlightState::Crashing);
    assert_eq!(rig.health(), HealthState::Dead);
}

#[test]
fn passage_event_leaves_health_untouched() {
    let mut rig = make_rig();
    rig.send(BirdEvent::LeftPassage);
    rig.tick(1);
    assert_eq!(rig.health(), HealthState::Sane);
    assert_eq!(rig.flight(), FlightState::Flying);
}
