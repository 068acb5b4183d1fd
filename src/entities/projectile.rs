use super::point::Point;
use super::ship::Ship;
use crate::constants::{
    ENEMY_SHOT_COLOR, ENEMY_SHOT_DAMAGE, ENEMY_SHOT_HIT_RADIUS, PLAYER_SHOT_COLOR,
    PROJECTILE_SPEED, SCREEN_WIDTH, SPENT_ENEMY_SHOT_Y,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

impl ProjectileOwner {
    pub fn velocity(&self) -> Point {
        match self {
            ProjectileOwner::Player => Point::new(0.0, -PROJECTILE_SPEED),
            ProjectileOwner::Enemy => Point::new(0.0, PROJECTILE_SPEED),
        }
    }

    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            ProjectileOwner::Player => PLAYER_SHOT_COLOR,
            ProjectileOwner::Enemy => ENEMY_SHOT_COLOR,
        }
    }
}

/// A straight-line shot. Player shots leave through the top edge, enemy
/// shots count as gone once past `limit`.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Point,
    pub owner: ProjectileOwner,
    /// y value the shot has to pass to be gone
    pub limit: f32,
}

impl Projectile {
    pub fn new(pos: Point, owner: ProjectileOwner) -> Self {
        let limit = match owner {
            ProjectileOwner::Player => 0.0,
            // Enemy shots are checked against the screen width, not its height
            ProjectileOwner::Enemy => SCREEN_WIDTH,
        };
        Self { pos, owner, limit }
    }

    pub fn new_with_limit(pos: Point, owner: ProjectileOwner, limit: f32) -> Self {
        Self { pos, owner, limit }
    }

    pub fn velocity(&self) -> Point {
        self.owner.velocity()
    }

    pub fn update(&mut self) {
        self.pos += self.velocity();
    }

    pub fn is_gone(&self) -> bool {
        match self.owner {
            ProjectileOwner::Player => self.pos.y < self.limit,
            ProjectileOwner::Enemy => self.pos.y > self.limit,
        }
    }

    /// Damages the ship when close enough and parks the shot below the
    /// screen so it is dropped at the end of the pass. Returns whether it hit.
    pub fn check_hit(&mut self, ship: &mut Ship) -> bool {
        if self.owner != ProjectileOwner::Enemy {
            return false;
        }
        if ship.pos.dist(self.pos) < ENEMY_SHOT_HIT_RADIUS {
            ship.take_damage(ENEMY_SHOT_DAMAGE);
            self.pos.y = SPENT_ENEMY_SHOT_Y;
            return true;
        }
        false
    }
}
