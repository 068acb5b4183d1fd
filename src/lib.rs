// Library exports for the binary and for testing
pub use config::{Cli, DepletionCheck, GameConfig, Rules, ShotBoundary};
pub use entities::{Enemy, GameState, Phase, Point, Projectile, ProjectileOwner, Ship};
pub use game::{Game, TickInput, TickReport};

pub mod app;
pub mod config;
pub mod constants;
pub mod entities;
pub mod game;
pub mod input;
pub mod renderer;
pub mod sprite;
pub mod terminal;
