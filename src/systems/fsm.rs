//! Shared system parameter for driving state machines.
//!
//! Every controller system (bird, city, obstacles, scenes) takes an
//! [`FsmRunner`] and borrows an [`FsmContext`] from it for the machines it
//! drives. Keeping the machine storage (components or resources) outside the
//! runner is what lets a system hold its machine mutably while handing the
//! context to the machine's callbacks.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;

use crate::components::dynamictext::DynamicText;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::components::statemachine::FsmContext;
use crate::events::audio::AudioCmd;
use crate::resources::audiostate::AudioState;
use crate::resources::colliders::ColliderRegistry;
use crate::resources::entityindex::EntityIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::inbox::{BirdInbox, CityInbox, ObstacleInbox};
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::scene::NextScene;
use crate::resources::score::Score;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

#[derive(SystemParam)]
pub struct FsmRunner<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub cfg: Res<'w, GameConfig>,
    pub time: Res<'w, WorldTime>,
    pub input: Res<'w, InputState>,
    pub rng: ResMut<'w, GameRng>,
    pub score: ResMut<'w, Score>,
    pub signals: ResMut<'w, WorldSignals>,
    pub index: ResMut<'w, EntityIndex>,
    pub colliders: ResMut<'w, ColliderRegistry>,
    pub next_scene: ResMut<'w, NextScene>,
    pub bird_inbox: ResMut<'w, BirdInbox>,
    pub city_inbox: ResMut<'w, CityInbox>,
    pub obstacle_inbox: ResMut<'w, ObstacleInbox>,
    pub audio_state: Res<'w, AudioState>,
    pub audio: MessageWriter<'w, AudioCmd>,
    pub positions: Query<'w, 's, &'static mut MapPosition>,
    pub bodies: Query<'w, 's, &'static mut RigidBody>,
    pub rotations: Query<'w, 's, &'static mut Rotation>,
    pub sprites: Query<'w, 's, &'static mut Sprite>,
    pub texts: Query<'w, 's, &'static mut DynamicText>,
    pub obstacles: Query<'w, 's, (Entity, &'static Obstacle)>,
    pub groups: Query<'w, 's, (Entity, &'static Group)>,
}

impl<'w, 's> FsmRunner<'w, 's> {
    pub fn ctx(&mut self) -> FsmContext<'_, 'w, 's> {
        FsmContext {
            commands: &mut self.commands,
            cfg: &self.cfg,
            time: &self.time,
            input: &self.input,
            rng: &mut self.rng,
            score: &mut self.score,
            signals: &mut self.signals,
            index: &mut self.index,
            colliders: &mut self.colliders,
            next_scene: &mut self.next_scene,
            bird_inbox: &mut self.bird_inbox,
            city_inbox: &mut self.city_inbox,
            obstacle_inbox: &mut self.obstacle_inbox,
            audio_state: &self.audio_state,
            audio: &mut self.audio,
            positions: &mut self.positions,
            bodies: &mut self.bodies,
            rotations: &mut self.rotations,
            sprites: &mut self.sprites,
            texts: &mut self.texts,
            obstacles: &self.obstacles,
            groups: &self.groups,
        }
    }
}
