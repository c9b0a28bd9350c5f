//! Generic finite state machine engine.
//!
//! Every behaviour in the game (bird flight, bird health, day/night cycle,
//! obstacle spawning, the three scenes) is a [`StateMachine`] over its own
//! state and event enums. A machine is a table of transition rules plus
//! per-state hooks; it carries no world access of its own. All callbacks
//! receive an [`FsmContext`] that bundles the commands, resources and
//! queries game logic needs, so the same machine type works as a component
//! on an entity or as a field of a resource.
//!
//! Update order within one tick of [`StateMachine::update`]:
//!
//! 1. The running state timer is decremented; on reaching zero a `Timeout`
//!    trigger is evaluated against the current state's rules.
//! 2. One eventless (`Always`) evaluation runs against the now-current
//!    state. This is what lets a transient state entered by a timeout fall
//!    through to its successor within the same tick.
//! 3. The event queue is drained in FIFO order, each event evaluated
//!    against the then-current state. Events with no matching rule are
//!    dropped (optionally logged).
//! 4. If no rule fired at all, the state's `on_tick` hook runs.
//!
//! Rules are evaluated in declaration order; the first rule whose trigger
//! matches and whose guard passes wins, so guarded rules should be declared
//! before the unguarded fallback. A rule whose target equals its source is
//! a self-transition: it runs only the rule action, skips exit/entry, and
//! restarts the state timer.

use bevy_ecs::prelude::*;
use log::{debug, trace};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::components::dynamictext::DynamicText;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
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

/// Everything a machine callback may touch.
///
/// Built each tick by [`FsmRunner`](crate::systems::fsm::FsmRunner) from its
/// system parameters and threaded through every hook, guard and action.
pub struct FsmContext<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub cfg: &'a GameConfig,
    pub time: &'a WorldTime,
    pub input: &'a InputState,
    pub rng: &'a mut GameRng,
    pub score: &'a mut Score,
    pub signals: &'a mut WorldSignals,
    pub index: &'a mut EntityIndex,
    pub colliders: &'a mut ColliderRegistry,
    pub next_scene: &'a mut NextScene,
    pub bird_inbox: &'a mut BirdInbox,
    pub city_inbox: &'a mut CityInbox,
    pub obstacle_inbox: &'a mut ObstacleInbox,
    pub audio_state: &'a AudioState,
    pub audio: &'a mut MessageWriter<'w, AudioCmd>,
    pub positions: &'a mut Query<'w, 's, &'static mut MapPosition>,
    pub bodies: &'a mut Query<'w, 's, &'static mut RigidBody>,
    pub rotations: &'a mut Query<'w, 's, &'static mut Rotation>,
    pub sprites: &'a mut Query<'w, 's, &'static mut Sprite>,
    pub texts: &'a mut Query<'w, 's, &'static mut DynamicText>,
    pub obstacles: &'a Query<'w, 's, (Entity, &'static Obstacle)>,
    pub groups: &'a Query<'w, 's, (Entity, &'static Group)>,
}

/// Transition action. Runs after exit and before entry on a state change;
/// runs alone on a self-transition.
pub type FsmAction = for<'a, 'w, 's> fn(&mut FsmContext<'a, 'w, 's>);

/// Transition guard. A rule with a failing guard is skipped and matching
/// continues with the next rule.
pub type FsmGuard = for<'a, 'w, 's> fn(&mut FsmContext<'a, 'w, 's>) -> bool;

/// State timer. Evaluated on state entry; the returned tick count runs down
/// to a `Timeout` trigger.
pub type FsmTimer = for<'a, 'w, 's> fn(&mut FsmContext<'a, 'w, 's>) -> u32;

/// What causes a transition rule to be considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger<E> {
    /// Considered once per update, without any event.
    Always,
    /// Considered when the state timer runs out.
    Timeout,
    /// Considered when the given event is dequeued.
    On(E),
}

#[derive(Clone, Copy)]
struct Rule<S, E> {
    from: S,
    to: S,
    trigger: Trigger<E>,
    guard: Option<FsmGuard>,
    action: Option<FsmAction>,
}

#[derive(Default, Clone, Copy)]
struct StateHooks {
    on_entry: Option<FsmAction>,
    on_tick: Option<FsmAction>,
    on_exit: Option<FsmAction>,
    timer: Option<FsmTimer>,
}

/// A table-driven state machine over state enum `S` and event enum `E`.
pub struct StateMachine<S, E> {
    description: &'static str,
    initial: S,
    state: S,
    hooks: FxHashMap<S, StateHooks>,
    rules: Vec<Rule<S, E>>,
    queue: VecDeque<E>,
    ticks_left: Option<u32>,
    log_dropped: bool,
    initialized: bool,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + Eq + Hash + Debug + Send + Sync + 'static,
    E: Copy + PartialEq + Debug + Send + Sync + 'static,
{
    pub fn new(description: &'static str, initial: S) -> Self {
        StateMachine {
            description,
            initial,
            state: initial,
            hooks: FxHashMap::default(),
            rules: Vec::new(),
            queue: VecDeque::new(),
            ticks_left: None,
            log_dropped: false,
            initialized: false,
        }
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn state(&self) -> S {
        self.state
    }

    /// Log events dropped for lack of a matching rule at debug level.
    pub fn log_dropped_events(&mut self) -> &mut Self {
        self.log_dropped = true;
        self
    }

    pub fn on_entry(&mut self, state: S, f: FsmAction) -> &mut Self {
        self.hooks.entry(state).or_default().on_entry = Some(f);
        self
    }

    pub fn on_tick(&mut self, state: S, f: FsmAction) -> &mut Self {
        self.hooks.entry(state).or_default().on_tick = Some(f);
        self
    }

    pub fn on_exit(&mut self, state: S, f: FsmAction) -> &mut Self {
        self.hooks.entry(state).or_default().on_exit = Some(f);
        self
    }

    pub fn timer(&mut self, state: S, f: FsmTimer) -> &mut Self {
        self.hooks.entry(state).or_default().timer = Some(f);
        self
    }

    /// Add a transition rule. Rules match in declaration order.
    pub fn rule(
        &mut self,
        from: S,
        to: S,
        trigger: Trigger<E>,
        guard: Option<FsmGuard>,
        action: Option<FsmAction>,
    ) -> &mut Self {
        self.rules.push(Rule {
            from,
            to,
            trigger,
            guard,
            action,
        });
        self
    }

    /// Convenience for an unguarded, actionless rule.
    pub fn when(&mut self, from: S, to: S, trigger: Trigger<E>) -> &mut Self {
        self.rule(from, to, trigger, None, None)
    }

    /// Queue an event for the next update.
    pub fn enqueue(&mut self, event: E) {
        self.queue.push_back(event);
    }

    /// Reset to the initial state and run its entry hook and timer.
    /// Pending events are discarded.
    pub fn init(&mut self, ctx: &mut FsmContext) {
        self.queue.clear();
        self.state = self.initial;
        self.initialized = true;
        trace!("[{}] init -> {:?}", self.description, self.state);
        if let Some(entry) = self.hooks_for(self.state).on_entry {
            entry(ctx);
        }
        self.start_timer(ctx);
    }

    /// Advance the machine by one tick. See the module docs for ordering.
    pub fn update(&mut self, ctx: &mut FsmContext) {
        if !self.initialized {
            self.init(ctx);
            return;
        }

        let mut fired = false;

        if let Some(left) = self.ticks_left {
            if left <= 1 {
                self.ticks_left = None;
                fired |= self.try_fire(ctx, |t| matches!(t, Trigger::Timeout));
            } else {
                self.ticks_left = Some(left - 1);
            }
        }

        fired |= self.try_fire(ctx, |t| matches!(t, Trigger::Always));

        while let Some(event) = self.queue.pop_front() {
            let matched = self.try_fire(ctx, |t| matches!(t, Trigger::On(e) if e == event));
            if matched {
                fired = true;
            } else if self.log_dropped {
                debug!(
                    "[{}] dropped {:?} in state {:?}",
                    self.description, event, self.state
                );
            }
        }

        if !fired {
            if let Some(tick) = self.hooks_for(self.state).on_tick {
                tick(ctx);
            }
        }
    }

    fn hooks_for(&self, state: S) -> StateHooks {
        self.hooks.get(&state).copied().unwrap_or_default()
    }

    fn start_timer(&mut self, ctx: &mut FsmContext) {
        self.ticks_left = self
            .hooks_for(self.state)
            .timer
            .map(|f| f(ctx).max(1));
    }

    /// Find and execute the first rule from the current state whose trigger
    /// satisfies `matches` and whose guard passes. Returns whether a rule
    /// fired.
    fn try_fire(
        &mut self,
        ctx: &mut FsmContext,
        matches: impl Fn(Trigger<E>) -> bool,
    ) -> bool {
        let from = self.state;
        let rule = self
            .rules
            .iter()
            .copied()
            .filter(|r| r.from == from && matches(r.trigger))
            .find(|r| match r.guard {
                Some(guard) => guard(ctx),
                None => true,
            });
        let Some(rule) = rule else {
            return false;
        };

        if rule.to == from {
            // Self-transition: action only, then the timer starts over.
            trace!("[{}] {:?} self-transition", self.description, from);
            if let Some(action) = rule.action {
                action(ctx);
            }
            self.start_timer(ctx);
            return true;
        }

        debug!("[{}] {:?} -> {:?}", self.description, from, rule.to);
        if let Some(exit) = self.hooks_for(from).on_exit {
            exit(ctx);
        }
        if let Some(action) = rule.action {
            action(ctx);
        }
        self.state = rule.to;
        if let Some(entry) = self.hooks_for(rule.to).on_entry {
            entry(ctx);
        }
        self.start_timer(ctx);
        true
    }
}
