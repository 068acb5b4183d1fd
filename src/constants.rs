//! Tuning values for the play field, in world units (one unit = one pixel
//! of the 500x750 logical screen).

/// Logical screen size
pub const SCREEN_WIDTH: f32 = 500.0;
pub const SCREEN_HEIGHT: f32 = 750.0;

/// Target loop frequency
pub const FPS: u32 = 25;

// Ship
pub const SHIP_WIDTH: u32 = 55;
pub const SHIP_HEIGHT: u32 = 75;
pub const SHIP_START_HEALTH: i32 = 100;

// Enemy
pub const ENEMY_WIDTH: u32 = 57;
pub const ENEMY_HEIGHT: u32 = 35;
/// Enemies bounce when their x leaves (WALL_MARGIN, SCREEN_WIDTH - WALL_MARGIN)
pub const WALL_MARGIN: f32 = 57.0;
pub const ENEMY_SPAWN_Y: f32 = -35.0;
pub const ENEMY_SPEED_X: (i32, i32) = (2, 4);
pub const ENEMY_SPEED_Y: (i32, i32) = (5, 15);

// Projectiles
pub const PROJECTILE_SPEED: f32 = 15.0;
pub const PROJECTILE_LENGTH: f32 = 25.0;
/// Where a player shot is parked once it has killed an enemy
pub const SPENT_SHOT_Y: f32 = -10.0;
/// Where an enemy shot is parked once it has hit the ship
pub const SPENT_ENEMY_SHOT_Y: f32 = SCREEN_HEIGHT + 10.0;

// Collision radii
pub const ENEMY_SHOT_HIT_RADIUS: f32 = 20.0;
pub const PLAYER_SHOT_HIT_RADIUS: f32 = 30.0;
pub const RAM_RADIUS: f32 = 70.0;

pub const ENEMY_SHOT_DAMAGE: i32 = 10;

// Scoring
pub const KILL_POINTS: i32 = 5;
pub const ESCAPE_PENALTY: i32 = 1;

/// Percent chances, rolled as `random_range(0..=100) < chance`
pub const ENEMY_SPAWN_CHANCE: u32 = 5;
pub const ENEMY_FIRE_CHANCE: u32 = 5;

// Colours (RGB)
pub const BACKGROUND: (u8, u8, u8) = (52, 52, 52);
pub const PLAYER_SHOT_COLOR: (u8, u8, u8) = (0, 255, 255);
pub const ENEMY_SHOT_COLOR: (u8, u8, u8) = (255, 255, 0);
pub const SCORE_COLOR: (u8, u8, u8) = (0, 255, 0);
pub const GAME_OVER_COLOR: (u8, u8, u8) = (255, 0, 0);

pub const GAME_OVER_TEXT: &str = "Looser";
/// World position of the game-over text
pub const GAME_OVER_TEXT_POS: (f32, f32) = (250.0, 250.0);
