//! The three top-level scenes, each a state machine.
//!
//! Exactly one scene machine is active at a time; the scene update system
//! drives it and the change detector applies switches requested through
//! [`NextScene`](crate::resources::scene::NextScene). Scenes never mutate
//! the bird or obstacle machines directly: hit verdicts go through the bird
//! inbox, spawner start/stop through the obstacle inbox, and machine resets
//! through signal flags drained by the owning controller system.
//!
//! Signal keys used here:
//! - `banner` (string): which screen-centered text the renderer shows.
//! - `bird_reset`, `city_reset`, `obstacle_reset` (flags): machine re-init
//!   requests.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::components::bird::{flap, BIRD_SIZE};
use crate::components::statemachine::{FsmContext, StateMachine, Trigger};
use crate::events::audio::AudioCmd;
use crate::events::bird::BirdEvent;
use crate::events::city::DayEvent;
use crate::events::obstacle::ObstacleCmd;
use crate::resources::scene::SceneId;

pub const BANNER_SIGNAL: &str = "banner";
pub const BIRD_RESET_FLAG: &str = "bird_reset";
pub const CITY_RESET_FLAG: &str = "city_reset";
pub const OBSTACLE_RESET_FLAG: &str = "obstacle_reset";

const MUSIC_ID: &str = "bgmusic";

/// How fast the intro credits scroll upwards, in pixels per tick.
const CREDITS_SCROLL_SPEED: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntroState {
    Credits,
    Waiting,
    Logo,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartState {
    Starting,
    Ready,
    GameOver,
    StartingToPlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayState {
    Starting,
    Playing,
    GameOver,
}

/// All three scene machines; [`ActiveScene`](crate::resources::scene::ActiveScene)
/// selects which one runs.
#[derive(Resource)]
pub struct SceneMachines {
    pub intro: StateMachine<IntroState, BirdEvent>,
    pub start: StateMachine<StartState, BirdEvent>,
    pub play: StateMachine<PlayState, BirdEvent>,
}

impl Default for SceneMachines {
    fn default() -> Self {
        SceneMachines {
            intro: intro_machine(),
            start: start_machine(),
            play: play_machine(),
        }
    }
}

/// Intro: credits scroll up, then after a pause the logo shows, then the
/// start scene takes over.
pub fn intro_machine() -> StateMachine<IntroState, BirdEvent> {
    use IntroState::*;

    let mut fsm = StateMachine::new("[Intro Scene]", Credits);

    fsm.on_entry(Credits, |ctx| {
        if ctx.rng.one_in(2) {
            ctx.city_inbox.push(DayEvent::Sunset);
        } else {
            ctx.city_inbox.push(DayEvent::Sunrise);
        }
        let credits = ctx.index.require("credits");
        if let Ok(mut pos) = ctx.positions.get_mut(credits) {
            pos.pos = Vec2::new(ctx.cfg.width / 2.0, ctx.cfg.height);
        }
        if let Ok(mut body) = ctx.bodies.get_mut(credits) {
            body.set_velocity(0.0, -CREDITS_SCROLL_SPEED * ctx.time.tick_rate);
        }
        if let Ok(mut text) = ctx.texts.get_mut(credits) {
            text.visible = true;
        }
        let logo = ctx.index.require("logo");
        if let Ok(mut text) = ctx.texts.get_mut(logo) {
            text.visible = false;
        }
        ctx.audio.write(AudioCmd::PlayMusic {
            id: MUSIC_ID.into(),
            looped: true,
        });
    });

    fsm.on_exit(Credits, |ctx| {
        let credits = ctx.index.require("credits");
        if let Ok(mut body) = ctx.bodies.get_mut(credits) {
            body.stop();
        }
    });

    // The credits are complete once they have scrolled into the upper
    // quarter of the screen.
    fsm.rule(
        Credits,
        Waiting,
        Trigger::Always,
        Some(|ctx| {
            let credits = ctx.index.require("credits");
            ctx.positions
                .get(credits)
                .map(|pos| pos.pos.y < ctx.cfg.height / 4.0)
                .unwrap_or(false)
        }),
        None,
    );

    fsm.timer(Waiting, |ctx| ctx.time.ticks(2.0));
    fsm.on_exit(Waiting, |ctx| {
        let credits = ctx.index.require("credits");
        if let Ok(mut text) = ctx.texts.get_mut(credits) {
            text.visible = false;
        }
    });

    fsm.timer(Logo, |ctx| ctx.time.ticks(4.0));
    fsm.on_entry(Logo, |ctx| {
        let logo = ctx.index.require("logo");
        if let Ok(mut text) = ctx.texts.get_mut(logo) {
            text.visible = true;
        }
    });
    fsm.on_exit(Logo, |ctx| {
        ctx.next_scene.set(SceneId::Start);
    });

    fsm.when(Waiting, Logo, Trigger::Timeout);
    fsm.when(Logo, Complete, Trigger::Timeout);

    fsm
}

/// Start: the bird flaps in place until the jump key is held, then a short
/// ready countdown leads into play.
pub fn start_machine() -> StateMachine<StartState, BirdEvent> {
    use BirdEvent::*;
    use StartState::*;

    let mut fsm = StateMachine::new("[Start Scene]", Starting);
    fsm.log_dropped_events();

    fsm.on_entry(Starting, |ctx| {
        reset_world(ctx);
        if !ctx.audio_state.is_music_running(MUSIC_ID) {
            ctx.audio.write(AudioCmd::PlayMusic {
                id: MUSIC_ID.into(),
                looped: true,
            });
        }
    });

    fsm.on_tick(Starting, keep_bird_in_air);

    fsm.rule(
        Starting,
        Ready,
        Trigger::Always,
        Some(|ctx| ctx.input.jump_down()),
        None,
    );
    fsm.when(Starting, GameOver, Trigger::On(TouchedGround));

    fsm.timer(Ready, |ctx| ctx.time.ticks(ctx.cfg.ready_time_sec));
    fsm.on_entry(Ready, |ctx| {
        ctx.signals.set_string(BANNER_SIGNAL, "ready");
    });
    fsm.on_exit(Ready, |ctx| {
        ctx.signals.clear_string(BANNER_SIGNAL);
    });

    fsm.rule(
        Ready,
        StartingToPlay,
        Trigger::Timeout,
        None,
        Some(|ctx| ctx.next_scene.set(SceneId::Play)),
    );
    fsm.rule(
        Ready,
        GameOver,
        Trigger::On(TouchedGround),
        None,
        Some(|ctx| ctx.signals.set_string(BANNER_SIGNAL, "title")),
    );

    fsm.on_entry(GameOver, |ctx| {
        stop_scrolling(ctx);
        ctx.audio.write(AudioCmd::StopAllMusic);
        ctx.signals.set_string(BANNER_SIGNAL, "game_over");
    });

    fsm.rule(
        GameOver,
        Starting,
        Trigger::Always,
        Some(|ctx| ctx.input.jump_just_pressed()),
        None,
    );

    fsm
}

/// Play: scoring, recoverable pipe hits while enough points are banked,
/// game over on ground or world contact.
pub fn play_machine() -> StateMachine<PlayState, BirdEvent> {
    use BirdEvent::*;
    use PlayState::*;

    let mut fsm = StateMachine::new("[Play Scene]", Playing);
    fsm.log_dropped_events();

    fsm.on_entry(Playing, |ctx| {
        ctx.score.reset();
        ctx.signals.set_flag(OBSTACLE_RESET_FLAG);
        start_scrolling(ctx);
        ctx.obstacle_inbox.push(ObstacleCmd::Start);
    });

    // A pipe hit is absorbed while more than 3 points are banked: the bird
    // is pushed past the obstacle and stays alive.
    fsm.rule(
        Playing,
        Playing,
        Trigger::On(TouchedPipe),
        Some(|ctx| ctx.score.points > 3),
        Some(|ctx| {
            ctx.score.add(-3);
            let bird = ctx.index.require("bird");
            if let Ok(mut pos) = ctx.positions.get_mut(bird) {
                pos.pos.x += ctx.cfg.pipe_width + BIRD_SIZE.x;
            }
            ctx.bird_inbox.push(TouchedPipe);
            ctx.audio.write(AudioCmd::PlayFx { id: "hit".into() });
        }),
    );
    fsm.rule(
        Playing,
        GameOver,
        Trigger::On(TouchedPipe),
        None,
        Some(|ctx| {
            ctx.bird_inbox.push(Crashed);
            ctx.audio.write(AudioCmd::PlayFx { id: "hit".into() });
        }),
    );

    fsm.rule(
        Playing,
        Playing,
        Trigger::On(LeftPassage),
        None,
        Some(|ctx| {
            ctx.score.add(1);
            ctx.audio.write(AudioCmd::PlayFx { id: "point".into() });
        }),
    );

    fsm.rule(
        Playing,
        GameOver,
        Trigger::On(TouchedGround),
        None,
        Some(|ctx| {
            ctx.bird_inbox.push(TouchedGround);
            ctx.audio.write(AudioCmd::StopMusic {
                id: MUSIC_ID.into(),
            });
        }),
    );
    fsm.rule(
        Playing,
        GameOver,
        Trigger::On(LeftWorld),
        None,
        Some(|ctx| {
            ctx.bird_inbox.push(LeftWorld);
            ctx.audio.write(AudioCmd::StopMusic {
                id: MUSIC_ID.into(),
            });
        }),
    );

    fsm.on_entry(GameOver, |ctx| {
        stop_scrolling(ctx);
        ctx.obstacle_inbox.push(ObstacleCmd::Stop);
        ctx.signals.set_string(BANNER_SIGNAL, "game_over");
    });

    fsm.rule(
        GameOver,
        Starting,
        Trigger::Always,
        Some(|ctx| ctx.input.jump_just_pressed()),
        None,
    );
    fsm.when(GameOver, GameOver, Trigger::On(TouchedPipe));
    fsm.when(GameOver, GameOver, Trigger::On(LeftPassage));
    fsm.rule(
        GameOver,
        GameOver,
        Trigger::On(TouchedGround),
        None,
        Some(|ctx| {
            ctx.audio.write(AudioCmd::StopMusic {
                id: MUSIC_ID.into(),
            });
        }),
    );

    fsm.on_entry(Starting, |ctx| {
        ctx.next_scene.set(SceneId::Start);
        ctx.signals.clear_string(BANNER_SIGNAL);
    });

    fsm
}

/// Put every long-lived entity back to its start-scene arrangement and
/// rebuild the standing collision rules.
fn reset_world(ctx: &mut FsmContext) {
    let cfg = ctx.cfg;

    ctx.signals.set_flag(CITY_RESET_FLAG);

    let ground = ctx.index.require("ground");
    if let Ok(mut pos) = ctx.positions.get_mut(ground) {
        pos.pos = Vec2::new(0.0, cfg.ground_y());
    }
    start_scrolling(ctx);

    let bird = ctx.index.require("bird");
    if let Ok(mut pos) = ctx.positions.get_mut(bird) {
        pos.pos = Vec2::new(cfg.width / 8.0, cfg.ground_y() / 2.0);
    }
    if let Ok(mut body) = ctx.bodies.get_mut(bird) {
        body.stop();
    }
    if let Ok(mut rotation) = ctx.rotations.get_mut(bird) {
        rotation.degrees = 0.0;
    }
    ctx.signals.set_flag(BIRD_RESET_FLAG);

    ctx.colliders.clear();
    let world = ctx.index.require("world");
    ctx.colliders.register_end(
        bird,
        world,
        Vec2::ZERO,
        Vec2::new(cfg.width, 2.0 * cfg.height),
        BirdEvent::LeftWorld,
    );
    // The ground wraps by one screen width; doubling the region keeps the
    // playfield covered at every wrap offset.
    ctx.colliders.register_start(
        bird,
        ground,
        Vec2::ZERO,
        Vec2::new(2.0 * cfg.width, cfg.ground_height),
        BirdEvent::TouchedGround,
    );

    ctx.signals.set_string(BANNER_SIGNAL, "title");
}

/// Random low-force flaps that keep the idle bird around mid-air.
fn keep_bird_in_air(ctx: &mut FsmContext) {
    let bird = ctx.index.require("bird");
    let hanging_low = ctx
        .positions
        .get(bird)
        .map(|pos| pos.pos.y > ctx.cfg.ground_y() / 2.0)
        .unwrap_or(false);
    if hanging_low {
        let force = ctx.rng.int(1, 4) as f32;
        flap(ctx, force);
    }
}

fn start_scrolling(ctx: &mut FsmContext) {
    let ground = ctx.index.require("ground");
    if let Ok(mut body) = ctx.bodies.get_mut(ground) {
        body.set_velocity(ctx.cfg.world_speed * ctx.time.tick_rate, 0.0);
    }
}

fn stop_scrolling(ctx: &mut FsmContext) {
    let ground = ctx.index.require("ground");
    if let Ok(mut body) = ctx.bodies.get_mut(ground) {
        body.stop();
    }
}
