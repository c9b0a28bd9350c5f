//! Scene dispatch, update and switching.
//!
//! Dispatch runs early in the tick so detections reach the bird on the same
//! tick; the active scene machine updates late, after every entity
//! controller, so verdicts it forwards to the bird arrive one tick later.

use bevy_ecs::prelude::*;
use log::info;

use crate::events::bird::BirdEvent;
use crate::resources::inbox::BirdInbox;
use crate::resources::scene::{ActiveScene, SceneId};
use crate::scenes::SceneMachines;
use crate::systems::fsm::FsmRunner;

/// Fan this tick's bird events out to the bird inbox and the active scene.
pub fn scene_dispatch(
    mut reader: MessageReader<BirdEvent>,
    mut machines: ResMut<SceneMachines>,
    active: Res<ActiveScene>,
    mut bird_inbox: ResMut<BirdInbox>,
) {
    for event in reader.read() {
        bird_inbox.push(*event);
        match active.get() {
            SceneId::Intro => machines.intro.enqueue(*event),
            SceneId::Start => machines.start.enqueue(*event),
            SceneId::Play => machines.play.enqueue(*event),
        }
    }
}

/// Drive the active scene machine.
pub fn scene_update(
    mut machines: ResMut<SceneMachines>,
    active: Res<ActiveScene>,
    mut runner: FsmRunner,
) {
    let mut ctx = runner.ctx();
    match active.get() {
        SceneId::Intro => machines.intro.update(&mut ctx),
        SceneId::Start => machines.start.update(&mut ctx),
        SceneId::Play => machines.play.update(&mut ctx),
    }
}

/// Apply a pending scene switch and initialize the entered machine.
/// Runs directly after [`scene_update`] so a switch requested during the
/// update takes effect before the next tick.
pub fn scene_change_detector(
    mut machines: ResMut<SceneMachines>,
    mut active: ResMut<ActiveScene>,
    mut runner: FsmRunner,
) {
    let Some(scene) = runner.next_scene.take() else {
        return;
    };
    info!("Switching scene to {:?}", scene);
    active.set(scene);
    let mut ctx = runner.ctx();
    match scene {
        SceneId::Intro => machines.intro.init(&mut ctx),
        SceneId::Start => machines.start.init(&mut ctx),
        SceneId::Play => machines.play.init(&mut ctx),
    }
}
