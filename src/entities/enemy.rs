use rand::Rng;

use super::point::Point;
use super::projectile::{Projectile, ProjectileOwner};
use super::ship::Ship;
use crate::constants::{
    ENEMY_SPAWN_Y, ENEMY_SPEED_X, ENEMY_SPEED_Y, PLAYER_SHOT_HIT_RADIUS, RAM_RADIUS,
    SCREEN_HEIGHT, SCREEN_WIDTH, SPENT_SHOT_Y, WALL_MARGIN,
};

/// A descending enemy that zig-zags between the side walls.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Point,
    pub vel: Point,
}

impl Enemy {
    pub fn new(pos: Point, vel: Point) -> Self {
        Self { pos, vel }
    }

    /// Spawns just above the screen at a random column with a random
    /// rightward and downward speed.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = rng.random_range(WALL_MARGIN as i32..=(SCREEN_WIDTH - WALL_MARGIN) as i32);
        let vx = rng.random_range(ENEMY_SPEED_X.0..=ENEMY_SPEED_X.1);
        let vy = rng.random_range(ENEMY_SPEED_Y.0..=ENEMY_SPEED_Y.1);
        Self::new(
            Point::new(x as f32, ENEMY_SPAWN_Y),
            Point::new(vx as f32, vy as f32),
        )
    }

    pub fn update(&mut self) {
        self.bounce();
        self.pos += self.vel;
    }

    /// Flips horizontal direction when outside the open wall interval
    pub fn bounce(&mut self) {
        let inside = WALL_MARGIN < self.pos.x && self.pos.x < SCREEN_WIDTH - WALL_MARGIN;
        if !inside {
            self.vel.x = -self.vel.x;
        }
    }

    /// Consumes the first live player shot within range. At most one shot
    /// is used per call; it is parked above the screen.
    pub fn check_destroyed(&self, projectiles: &mut [Projectile]) -> bool {
        for projectile in projectiles.iter_mut() {
            if projectile.owner != ProjectileOwner::Player || projectile.is_gone() {
                continue;
            }
            if projectile.pos.dist(self.pos) < PLAYER_SHOT_HIT_RADIUS {
                projectile.pos.y = SPENT_SHOT_Y;
                return true;
            }
        }
        false
    }

    pub fn is_gone(&self) -> bool {
        self.pos.y > SCREEN_HEIGHT
    }

    pub fn collides_with_ship(&self, ship: &Ship) -> bool {
        ship.pos.dist(self.pos) < RAM_RADIUS
    }
}
