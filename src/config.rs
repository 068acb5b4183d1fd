use std::path::PathBuf;

use clap::Parser;

use crate::constants::{ENEMY_FIRE_CHANCE, ENEMY_SPAWN_CHANCE, FPS, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Which limit an enemy shot has to pass before `is_gone` reports it.
/// Shots are only dropped from play once they leave the bottom of the
/// screen or hit the ship, whichever boundary is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShotBoundary {
    /// Compare y against the screen width (classic behaviour)
    #[default]
    ScreenWidth,
    ScreenHeight,
}

impl ShotBoundary {
    pub fn limit(&self) -> f32 {
        match self {
            ShotBoundary::ScreenWidth => SCREEN_WIDTH,
            ShotBoundary::ScreenHeight => SCREEN_HEIGHT,
        }
    }
}

/// When ship health counts as depleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepletionCheck {
    /// Only `health == 0`; a ship that skips past zero keeps flying
    #[default]
    Exact,
    AtOrBelow,
}

impl DepletionCheck {
    pub fn is_depleted(&self, health: i32) -> bool {
        match self {
            DepletionCheck::Exact => health == 0,
            DepletionCheck::AtOrBelow => health <= 0,
        }
    }
}

/// Gameplay rules. `Default` reproduces the classic game exactly,
/// `corrected()` fixes its three known oddities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub shot_boundary: ShotBoundary,
    pub depletion: DepletionCheck,
    /// Drop an enemy from play when it rams the ship
    pub remove_rammed_enemy: bool,
    /// Percent chance per tick of a new enemy
    pub enemy_spawn_chance: u32,
    /// Percent chance per enemy per tick of a new enemy shot
    pub enemy_fire_chance: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            shot_boundary: ShotBoundary::default(),
            depletion: DepletionCheck::default(),
            remove_rammed_enemy: false,
            enemy_spawn_chance: ENEMY_SPAWN_CHANCE,
            enemy_fire_chance: ENEMY_FIRE_CHANCE,
        }
    }
}

impl Rules {
    pub fn corrected() -> Self {
        Self {
            shot_boundary: ShotBoundary::ScreenHeight,
            depletion: DepletionCheck::AtOrBelow,
            remove_rammed_enemy: true,
            ..Self::default()
        }
    }

    /// No random spawns or enemy fire; used to script scenarios
    pub fn scripted(self) -> Self {
        Self {
            enemy_spawn_chance: 0,
            enemy_fire_chance: 0,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub rules: Rules,
    /// RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
    pub fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            seed: None,
            fps: FPS,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "space")]
#[command(about = "Steer the ship with the mouse, click to fire")]
pub struct Cli {
    /// Loop frequency cap
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Seed for enemy spawns and fire, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory holding ship.png and enemy.png
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Where log output is written (the terminal is taken by the game)
    #[arg(long, default_value = "space.log")]
    pub log_file: PathBuf,

    /// Fix the classic quirks: enemy shots despawn at the bottom edge,
    /// negative health ends the game, rammed enemies are removed
    #[arg(long)]
    pub corrected: bool,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        let rules = if self.corrected {
            Rules::corrected()
        } else {
            Rules::default()
        };
        GameConfig {
            rules,
            seed: self.seed,
            fps: self.fps,
        }
    }
}
