mod enemy;
mod game_state;
mod point;
mod projectile;
mod ship;

// Re-export all public types
pub use enemy::Enemy;
pub use game_state::{GameState, Phase};
pub use point::Point;
pub use projectile::{Projectile, ProjectileOwner};
pub use ship::Ship;
