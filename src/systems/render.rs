//! Terminal renderer.
//!
//! Draws the world into a fixed pixel buffer at a quarter of the world
//! resolution and blits it with Unicode half-blocks, two pixels per terminal
//! cell. Text (credits, banners, score) is overlaid with plain characters
//! after the pixel pass. Runs from the main loop, not the schedule.

use std::io::{self, Write};

use bevy_ecs::prelude::*;
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::queue;
use glam::Vec2;

use crate::components::bird::BIRD_SIZE;
use crate::components::city::NIGHT_FLAG;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::sprite::Sprite;
use crate::resources::artstore::{ArtStore, Rgb};
use crate::resources::gameconfig::GameConfig;
use crate::resources::scene::{ActiveScene, SceneId};
use crate::resources::score::Score;
use crate::resources::worldsignals::WorldSignals;
use crate::scenes::BANNER_SIGNAL;

/// World pixels per buffer pixel.
pub const VIEW_SCALE: f32 = 0.25;

const SKY_DAY: Rgb = Rgb::new(113, 197, 207);
const SKY_NIGHT: Rgb = Rgb::new(12, 16, 48);
const GLOW: Rgb = Rgb::new(255, 255, 0);

pub struct PixelBuf {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl PixelBuf {
    /// Buffer sized for the given world dimensions.
    pub fn for_world(cfg: &GameConfig) -> Self {
        let width = (cfg.width * VIEW_SCALE) as u16;
        let height = (cfg.height * VIEW_SCALE) as u16;
        PixelBuf {
            width,
            height,
            pixels: vec![SKY_DAY; width as usize * height as usize],
        }
    }

    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            self.pixels[y as usize * self.width as usize + x as usize] = color;
        }
    }

    /// Fill a rectangle given in world coordinates.
    fn fill_world_rect(&mut self, min: Vec2, size: Vec2, color: Rgb) {
        let x0 = (min.x * VIEW_SCALE).floor() as i32;
        let y0 = (min.y * VIEW_SCALE).floor() as i32;
        let x1 = ((min.x + size.x) * VIEW_SCALE).ceil() as i32;
        let y1 = ((min.y + size.y) * VIEW_SCALE).ceil() as i32;
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x, y, color);
            }
        }
    }

    /// Blit the buffer as half-blocks: the upper pixel of each cell is the
    /// foreground of `▀`, the lower one the background.
    fn blit(&self, out: &mut impl Write) -> io::Result<()> {
        for row in 0..self.height / 2 {
            queue!(out, MoveTo(0, row))?;
            for col in 0..self.width {
                let top = self.pixels[(row * 2) as usize * self.width as usize + col as usize];
                let bottom =
                    self.pixels[(row * 2 + 1) as usize * self.width as usize + col as usize];
                queue!(
                    out,
                    SetForegroundColor(to_color(top)),
                    SetBackgroundColor(to_color(bottom)),
                    Print('▀')
                )?;
            }
        }
        queue!(out, ResetColor)?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Terminal cell under a world position.
fn cell(pos: Vec2) -> (u16, u16) {
    let col = (pos.x * VIEW_SCALE).max(0.0) as u16;
    let row = (pos.y * VIEW_SCALE / 2.0).max(0.0) as u16;
    (col, row)
}

pub fn draw_frame(world: &mut World, buf: &mut PixelBuf, out: &mut impl Write) -> io::Result<()> {
    let cfg = world.resource::<GameConfig>().clone();
    let night = world.resource::<WorldSignals>().has_flag(NIGHT_FLAG);
    let banner = world
        .resource::<WorldSignals>()
        .string(BANNER_SIGNAL)
        .map(str::to_string);
    let points = world.resource::<Score>().points;
    let scene = world.resource::<ActiveScene>().get();

    let mut shapes: Vec<(Vec2, &'static str, Option<Obstacle>)> = Vec::new();
    let mut sprite_query = world.query::<(&MapPosition, &Sprite, Option<&Obstacle>)>();
    for (position, sprite, obstacle) in sprite_query.iter(world) {
        shapes.push((position.pos, sprite.art, obstacle.copied()));
    }

    let mut labels: Vec<(Vec2, String)> = Vec::new();
    let mut text_query = world.query::<(&MapPosition, &DynamicText)>();
    for (position, text) in text_query.iter(world) {
        if text.visible {
            labels.push((position.pos, text.text.clone()));
        }
    }

    let art = world.resource::<ArtStore>();

    buf.clear(if night { SKY_NIGHT } else { SKY_DAY });

    // Stars first, then pipes, then the ground strip, the bird on top.
    for (position, name, _) in shapes.iter().filter(|(_, name, _)| *name == "star") {
        if let Some(color) = art.color(name) {
            let (x, y) = ((position.x * VIEW_SCALE) as i32, (position.y * VIEW_SCALE) as i32);
            buf.set(x, y, color);
        }
    }

    for (position, name, obstacle) in &shapes {
        let Some(obstacle) = obstacle else { continue };
        let Some(color) = art.color(name) else { continue };
        let (upper_offset, upper_size) = obstacle.upper_part();
        let (lower_offset, lower_size) = obstacle.lower_part();
        buf.fill_world_rect(*position + upper_offset, upper_size, color);
        buf.fill_world_rect(*position + lower_offset, lower_size, color);
        if obstacle.lighted {
            let (passage_offset, passage_size) = obstacle.passage();
            let inset = passage_size.x / 10.0;
            buf.fill_world_rect(
                *position + passage_offset + Vec2::new(inset, 0.0),
                passage_size - Vec2::new(2.0 * inset, 0.0),
                GLOW,
            );
        }
    }

    if let Some(color) = art.color("ground") {
        buf.fill_world_rect(
            Vec2::new(0.0, cfg.ground_y()),
            Vec2::new(cfg.width, cfg.ground_height),
            color,
        );
    }

    for (position, name, _) in shapes.iter().filter(|(_, name, _)| name.starts_with("bird")) {
        if let Some(color) = art.color(name) {
            buf.fill_world_rect(*position, BIRD_SIZE, color);
        }
    }

    buf.blit(out)?;

    for (position, text) in &labels {
        for (i, line) in text.lines().enumerate() {
            let (col, row) = cell(*position);
            let col = col.saturating_sub(line.chars().count() as u16 / 2);
            queue!(out, MoveTo(col, row + i as u16), Print(line))?;
        }
    }

    if let Some(banner) = banner {
        let text = match banner.as_str() {
            "title" => "B I R D Y",
            "ready" => "Get Ready!",
            "game_over" => "Game Over",
            other => other,
        };
        let row = buf.height / 4;
        let col = (buf.width / 2).saturating_sub(text.chars().count() as u16 / 2);
        queue!(out, MoveTo(col, row), Print(text))?;
    }

    if scene == SceneId::Play {
        let text = format!("Score: {}", points);
        let col = (buf.width / 2).saturating_sub(text.chars().count() as u16 / 2);
        queue!(out, MoveTo(col, 1), Print(text))?;
    }

    out.flush()
}
