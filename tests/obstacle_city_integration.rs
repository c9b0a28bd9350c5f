//! Obstacle breeding/culling and the city's day/night cycle.

use bevy_ecs::prelude::*;

use birdy::components::city::NIGHT_FLAG;
use birdy::components::group::Group;
use birdy::components::mapposition::MapPosition;
use birdy::components::obstacle::Obstacle;
use birdy::events::city::DayEvent;
use birdy::game::{build_schedule, build_world};
use birdy::resources::colliders::ColliderRegistry;
use birdy::resources::gameconfig::GameConfig;
use birdy::resources::inbox::CityInbox;
use birdy::resources::scene::{NextScene, SceneId};
use birdy::resources::worldsignals::WorldSignals;

struct Rig {
    world: World,
    schedule: Schedule,
}

fn make_rig(cfg: GameConfig) -> Rig {
    Rig {
        world: build_world(cfg, Some(23)),
        schedule: build_schedule(),
    }
}

impl Rig {
    fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.schedule.run(&mut self.world);
        }
    }

    fn enter_play(&mut self) {
        self.world.resource_mut::<NextScene>().set(SceneId::Play);
        self.tick(1);
    }

    fn obstacles(&mut self) -> Vec<(f32, Obstacle)> {
        self.world
            .query::<(&MapPosition, &Obstacle)>()
            .iter(&self.world)
            .map(|(position, obstacle)| (position.pos.x, *obstacle))
            .collect()
    }

    fn star_count(&mut self) -> usize {
        self.world
            .query::<&Group>()
            .iter(&self.world)
            .filter(|group| group.name() == "star")
            .count()
    }

    fn night(&self) -> bool {
        self.world.resource::<WorldSignals>().has_flag(NIGHT_FLAG)
    }

    fn send_day_event(&mut self, event: DayEvent) {
        self.world.resource_mut::<CityInbox>().push(event);
    }
}

fn fixed_breeding_cfg(seconds: f32) -> GameConfig {
    let mut cfg = GameConfig::new();
    cfg.min_pipe_creation_sec = seconds;
    cfg.max_pipe_creation_sec = seconds;
    cfg
}

#[test]
fn breeding_timeout_spawns_one_obstacle_with_its_collision_rules() {
    let mut rig = make_rig(fixed_breeding_cfg(1.0));
    rig.enter_play();
    // The spawner resets and starts on the next tick, then breeds for 60.
    rig.tick(62);

    let obstacles = rig.obstacles();
    assert_eq!(obstacles.len(), 1);
    let (x, obstacle) = obstacles[0];
    let cfg = rig.world.resource::<GameConfig>().clone();
    assert!(x <= cfg.width && x > cfg.width - 20.0);
    assert_eq!(obstacle.height, cfg.ground_y());
    assert_eq!(obstacle.width, cfg.pipe_width);

    // The passage keeps the configured clearance from both edges.
    let radius = cfg.passage_height / 2.0;
    assert!(obstacle.passage_center_y >= cfg.min_pipe_height + radius);
    assert!(obstacle.passage_center_y <= cfg.ground_y() - cfg.min_pipe_height - radius);

    // Two pipe start rules and one passage end rule.
    assert_eq!(rig.world.resource::<ColliderRegistry>().len(), 3);
}

#[test]
fn offscreen_obstacle_is_culled_at_the_first_birth_after_crossing() {
    let mut rig = make_rig(fixed_breeding_cfg(1.0));
    rig.enter_play();
    // Births land every 60 ticks from tick 62. A pipe needs ceil(692 / 2.5)
    // = 277 ticks to clear the left edge, so the first one is fully
    // offscreen from tick 339 and the next birth after that is tick 362.
    rig.tick(360);

    let before = rig.obstacles();
    assert_eq!(before.len(), 5);
    let offscreen = before
        .iter()
        .filter(|(x, obstacle)| x + obstacle.width < 0.0)
        .count();
    assert_eq!(offscreen, 1);

    // The birth on the next tick removes it and adds a fresh pipe.
    rig.tick(1);
    let after = rig.obstacles();
    assert_eq!(after.len(), 5);
    assert!(after.iter().all(|(x, obstacle)| x + obstacle.width >= 0.0));
    // Collision rules track the population: three per living obstacle.
    let rules = rig.world.resource::<ColliderRegistry>().len();
    assert_eq!(rules, after.len() * 3);
}

#[test]
fn sunset_brings_night_and_a_star_field() {
    let mut rig = make_rig(GameConfig::new());
    // Let the intro's random day event settle first.
    rig.tick(2);
    rig.send_day_event(DayEvent::Sunset);
    rig.tick(1);

    assert!(rig.night());
    let cfg = rig.world.resource::<GameConfig>().clone();
    rig.tick(1);
    assert!(rig.star_count() < cfg.max_stars as usize);
}

#[test]
fn sunrise_clears_the_night_and_the_stars() {
    let mut rig = make_rig(GameConfig::new());
    rig.tick(2);
    rig.send_day_event(DayEvent::Sunset);
    rig.tick(2);
    assert!(rig.night());

    rig.send_day_event(DayEvent::Sunrise);
    rig.tick(2);
    assert!(!rig.night());
    assert_eq!(rig.star_count(), 0);
}

#[test]
fn night_renews_itself_every_cycle() {
    let mut cfg = GameConfig::new();
    cfg.night_seconds = 0.1;
    let mut rig = make_rig(cfg.clone());
    rig.tick(2);
    rig.send_day_event(DayEvent::Sunset);
    rig.tick(1);
    assert!(rig.night());

    // Several star cycles later the night is still on.
    rig.tick(30);
    assert!(rig.night());
    assert!(rig.star_count() < cfg.max_stars as usize);
}

#[test]
fn day_obstacles_are_never_lighted() {
    let mut rig = make_rig(fixed_breeding_cfg(0.1));
    rig.enter_play();
    rig.tick(2);
    rig.send_day_event(DayEvent::Sunrise);
    rig.tick(300);

    let obstacles = rig.obstacles();
    assert!(!obstacles.is_empty());
    for (_, obstacle) in obstacles {
        assert!(!obstacle.lighted);
    }
}
