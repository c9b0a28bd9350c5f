//! Game configuration resource.
//!
//! All tunables are loaded once at startup from an INI file and treated as
//! immutable for the run. Speeds and accelerations are expressed in pixels
//! per tick (the simulation is fixed-tick); call sites scale by the tick rate
//! where pixels per second are needed.
//!
//! # Configuration file format
//!
//! ```ini
//! [window]
//! width = 640
//! height = 480
//! tick_rate = 60
//! jump_key = space
//!
//! [world]
//! gravity = 0.4
//! speed = -2.5
//! ground_height = 112
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Flat map of gameplay tunables, loadable from an INI file.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// World width in pixels.
    pub width: f32,
    /// World height in pixels.
    pub height: f32,
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Key that makes the bird flap ("space" or "up").
    pub jump_key: String,
    /// Gravity in pixels per tick squared.
    pub world_gravity: f32,
    /// Horizontal world scroll speed in pixels per tick (negative = leftwards).
    pub world_speed: f32,
    /// Height of the ground strip in pixels.
    pub ground_height: f32,
    /// Seconds the bird stays injured after a pipe hit.
    pub bird_injured_seconds: f32,
    /// Wing-flap animation period in milliseconds.
    pub bird_flap_millis: u64,
    /// Minimum seconds between obstacle spawns.
    pub min_pipe_creation_sec: f32,
    /// Maximum seconds between obstacle spawns.
    pub max_pipe_creation_sec: f32,
    /// Pipe width in pixels.
    pub pipe_width: f32,
    /// Minimum visible pipe length above/below the passage.
    pub min_pipe_height: f32,
    /// Vertical extent of the passage gap.
    pub passage_height: f32,
    /// A night obstacle is lighted with probability 1 in this value.
    pub lighted_one_in: i32,
    /// Upper bound used when sampling the star count.
    pub max_stars: i32,
    /// Seconds per night star-regeneration cycle.
    pub night_seconds: f32,
    /// Seconds the "get ready" phase lasts before play begins.
    pub ready_time_sec: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the canonical default values.
    pub fn new() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            tick_rate: 60,
            jump_key: "space".into(),
            world_gravity: 0.4,
            world_speed: -2.5,
            ground_height: 112.0,
            bird_injured_seconds: 1.0,
            bird_flap_millis: 50,
            min_pipe_creation_sec: 1.0,
            max_pipe_creation_sec: 5.0,
            pipe_width: 52.0,
            min_pipe_height: 100.0,
            passage_height: 100.0,
            lighted_one_in: 4,
            max_stars: 5,
            night_seconds: 10.0,
            ready_time_sec: 2.0,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration reading from a custom file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Top edge of the ground strip; obstacles stand on it.
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(v) = ini.getfloat("window", "width").ok().flatten() {
            self.width = v as f32;
        }
        if let Some(v) = ini.getfloat("window", "height").ok().flatten() {
            self.height = v as f32;
        }
        if let Some(v) = ini.getuint("window", "tick_rate").ok().flatten() {
            self.tick_rate = v as u32;
        }
        if let Some(v) = ini.get("window", "jump_key") {
            self.jump_key = v;
        }

        if let Some(v) = ini.getfloat("world", "gravity").ok().flatten() {
            self.world_gravity = v as f32;
        }
        if let Some(v) = ini.getfloat("world", "speed").ok().flatten() {
            self.world_speed = v as f32;
        }
        if let Some(v) = ini.getfloat("world", "ground_height").ok().flatten() {
            self.ground_height = v as f32;
        }

        if let Some(v) = ini.getfloat("bird", "injured_seconds").ok().flatten() {
            self.bird_injured_seconds = v as f32;
        }
        if let Some(v) = ini.getuint("bird", "flap_millis").ok().flatten() {
            self.bird_flap_millis = v;
        }

        if let Some(v) = ini.getfloat("obstacles", "min_creation_sec").ok().flatten() {
            self.min_pipe_creation_sec = v as f32;
        }
        if let Some(v) = ini.getfloat("obstacles", "max_creation_sec").ok().flatten() {
            self.max_pipe_creation_sec = v as f32;
        }
        if let Some(v) = ini.getfloat("obstacles", "pipe_width").ok().flatten() {
            self.pipe_width = v as f32;
        }
        if let Some(v) = ini.getfloat("obstacles", "min_pipe_height").ok().flatten() {
            self.min_pipe_height = v as f32;
        }
        if let Some(v) = ini.getfloat("obstacles", "passage_height").ok().flatten() {
            self.passage_height = v as f32;
        }
        if let Some(v) = ini.getint("obstacles", "lighted_one_in").ok().flatten() {
            self.lighted_one_in = v as i32;
        }

        if let Some(v) = ini.getint("city", "max_stars").ok().flatten() {
            self.max_stars = v as i32;
        }
        if let Some(v) = ini.getfloat("city", "night_seconds").ok().flatten() {
            self.night_seconds = v as f32;
        }

        if let Some(v) = ini.getfloat("game", "ready_time_sec").ok().flatten() {
            self.ready_time_sec = v as f32;
        }

        info!(
            "Loaded config: {}x{} @ {} ticks/s, speed={}, gravity={}",
            self.width, self.height, self.tick_rate, self.world_speed, self.world_gravity
        );

        Ok(())
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_rate == 0 {
            return Err("tick_rate must be positive".into());
        }
        if self.min_pipe_creation_sec > self.max_pipe_creation_sec {
            return Err(format!(
                "min_creation_sec ({}) exceeds max_creation_sec ({})",
                self.min_pipe_creation_sec, self.max_pipe_creation_sec
            ));
        }
        if 2.0 * self.min_pipe_height + self.passage_height > self.ground_y() {
            return Err("passage geometry does not fit between sky and ground".into());
        }
        if self.max_stars < 2 {
            return Err("max_stars must be at least 2".into());
        }
        if self.world_speed >= 0.0 {
            return Err("world speed must be negative (world scrolls leftwards)".into());
        }
        Ok(())
    }
}
