//! State machine engine semantics, driven through a scratch machine with a
//! real world-backed context.

use bevy_ecs::system::SystemState;

use birdy::components::statemachine::{FsmContext, StateMachine, Trigger};
use birdy::game::build_world;
use birdy::resources::gameconfig::GameConfig;
use birdy::systems::fsm::FsmRunner;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum TestState {
    A,
    B,
    C,
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum TestEvent {
    Go,
    Other,
}

use TestEvent::*;
use TestState::*;

/// Run a test body with a context borrowed from a fresh world.
fn with_ctx(f: impl FnOnce(&mut FsmContext)) {
    let mut world = build_world(GameConfig::new(), Some(1));
    let mut state = SystemState::<FsmRunner>::new(&mut world);
    let mut runner = state.get_mut(&mut world);
    let mut ctx = runner.ctx();
    f(&mut ctx);
}

#[test]
fn event_rule_fires_and_unmatched_events_are_dropped() {
    with_ctx(|ctx| {
        let mut fsm = StateMachine::new("test", A);
        fsm.when(A, B, Trigger::On(Go));

        fsm.init(ctx);
        fsm.enqueue(Other);
        fsm.enqueue(Go);
        fsm.update(ctx);
        assert_eq!(fsm.state(), B);

        // Other was dropped, not deferred.
        fsm.update(ctx);
        assert_eq!(fsm.state(), B);
    });
}

#[test]
fn timeout_fires_after_the_configured_ticks() {
    with_ctx(|ctx| {
        let mut fsm: StateMachine<TestState, TestEvent> = StateMachine::new("test", A);
        fsm.timer(A, |_| 3);
        fsm.when(A, C, Trigger::Timeout);

        fsm.init(ctx);
        fsm.update(ctx);
        fsm.update(ctx);
        assert_eq!(fsm.state(), A);
        fsm.update(ctx);
        assert_eq!(fsm.state(), C);
    });
}

#[test]
fn eventless_rule_follows_a_timeout_in_the_same_update() {
    with_ctx(|ctx| {
        let mut fsm: StateMachine<TestState, TestEvent> = StateMachine::new("test", A);
        fsm.timer(A, |_| 1);
        fsm.rule(
            A,
            B,
            Trigger::Timeout,
            None,
            Some(|ctx: &mut FsmContext| {
                let n = ctx.signals.integer("births").unwrap_or(0);
                ctx.signals.set_integer("births", n + 1);
            }),
        );
        fsm.when(B, A, Trigger::Always);

        fsm.init(ctx);
        // Timeout moves A -> B, the eventless rule returns to A, all in one
        // update; the timer restarts on re-entry.
        for _ in 0..4 {
            fsm.update(ctx);
            assert_eq!(fsm.state(), A);
        }
        assert_eq!(ctx.signals.integer("births"), Some(4));
    });
}

#[test]
fn first_enqueued_of_two_matching_events_wins() {
    with_ctx(|ctx| {
        let mut fsm = StateMachine::new("test", A);
        fsm.when(A, B, Trigger::On(Go));
        fsm.when(A, C, Trigger::On(Other));

        fsm.init(ctx);
        fsm.enqueue(Go);
        fsm.enqueue(Other);
        fsm.update(ctx);
        // Go transitioned first; Other found no rule in B and was dropped.
        assert_eq!(fsm.state(), B);

        let mut fsm = StateMachine::new("test", A);
        fsm.when(A, B, Trigger::On(Go));
        fsm.when(A, C, Trigger::On(Other));

        fsm.init(ctx);
        fsm.enqueue(Other);
        fsm.enqueue(Go);
        fsm.update(ctx);
        assert_eq!(fsm.state(), C);
    });
}

#[test]
fn guarded_rule_is_checked_before_the_unguarded_fallback() {
    with_ctx(|ctx| {
        let mut fsm = StateMachine::new("test", A);
        fsm.rule(
            A,
            B,
            Trigger::On(Go),
            Some(|ctx: &mut FsmContext| ctx.signals.has_flag("gate")),
            None,
        );
        fsm.when(A, C, Trigger::On(Go));

        fsm.init(ctx);
        fsm.enqueue(Go);
        fsm.update(ctx);
        assert_eq!(fsm.state(), C);

        let mut fsm = StateMachine::new("test", A);
        fsm.rule(
            A,
            B,
            Trigger::On(Go),
            Some(|ctx: &mut FsmContext| ctx.signals.has_flag("gate")),
            None,
        );
        fsm.when(A, C, Trigger::On(Go));

        ctx.signals.set_flag("gate");
        fsm.init(ctx);
        fsm.enqueue(Go);
        fsm.update(ctx);
        assert_eq!(fsm.state(), B);
    });
}

#[test]
fn self_transition_runs_only_the_action_and_restarts_the_timer() {
    with_ctx(|ctx| {
        let mut fsm = StateMachine::new("test", A);
        fsm.timer(A, |_| 2);
        fsm.on_entry(A, |ctx| {
            let n = ctx.signals.integer("entries").unwrap_or(0);
            ctx.signals.set_integer("entries", n + 1);
        });
        fsm.rule(
            A,
            A,
            Trigger::On(Go),
            None,
            Some(|ctx: &mut FsmContext| {
                let n = ctx.signals.integer("actions").unwrap_or(0);
                ctx.signals.set_integer("actions", n + 1);
            }),
        );
        fsm.when(A, C, Trigger::Timeout);

        fsm.init(ctx);
        assert_eq!(ctx.signals.integer("entries"), Some(1));

        // Feeding Go every tick keeps resetting the 2-tick timer.
        for _ in 0..5 {
            fsm.enqueue(Go);
            fsm.update(ctx);
            assert_eq!(fsm.state(), A);
        }
        assert_eq!(ctx.signals.integer("actions"), Some(5));
        // No exit/entry ran for the self-transitions.
        assert_eq!(ctx.signals.integer("entries"), Some(1));

        fsm.update(ctx);
        assert_eq!(fsm.state(), A);
        fsm.update(ctx);
        assert_eq!(fsm.state(), C);
    });
}

#[test]
fn on_tick_runs_only_when_no_rule_fired() {
    with_ctx(|ctx| {
        let mut fsm = StateMachine::new("test", A);
        fsm.on_tick(A, |ctx| {
            let n = ctx.signals.integer("ticks").unwrap_or(0);
            ctx.signals.set_integer("ticks", n + 1);
        });
        fsm.when(A, A, Trigger::On(Go));

        fsm.init(ctx);
        fsm.update(ctx);
        assert_eq!(ctx.signals.integer("ticks"), Some(1));

        fsm.enqueue(Go);
        fsm.update(ctx);
        // The self-transition consumed the update.
        assert_eq!(ctx.signals.integer("ticks"), Some(1));
    });
}

#[test]
fn init_resets_state_and_discards_pending_events() {
    with_ctx(|ctx| {
        let mut fsm = StateMachine::new("test", A);
        fsm.when(A, B, Trigger::On(Go));
        fsm.when(B, C, Trigger::On(Go));

        fsm.init(ctx);
        fsm.enqueue(Go);
        fsm.update(ctx);
        assert_eq!(fsm.state(), B);

        fsm.enqueue(Go);
        fsm.init(ctx);
        assert_eq!(fsm.state(), A);
        fsm.update(ctx);
        // The event queued before init is gone.
        assert_eq!(fsm.state(), A);
    });
}

#[test]
fn first_update_initializes_a_fresh_machine() {
    with_ctx(|ctx| {
        let mut fsm: StateMachine<TestState, TestEvent> = StateMachine::new("test", A);
        fsm.on_entry(A, |ctx| ctx.signals.set_flag("entered"));
        fsm.update(ctx);
        assert!(ctx.signals.has_flag("entered"));
        assert_eq!(fsm.state(), A);
    });
}
