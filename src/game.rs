use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::{GameConfig, Rules};
use crate::constants::{ESCAPE_PENALTY, KILL_POINTS, SCREEN_HEIGHT};
use crate::entities::{Enemy, GameState, Point, Projectile, ProjectileOwner, Ship};

/// Input gathered for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer location in world units, if known
    pub pointer: Option<Point>,
    /// Primary-button presses since the last tick
    pub shots: u32,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub shots_fired: u32,
    pub enemies_spawned: u32,
    pub enemies_destroyed: u32,
    pub enemies_escaped: u32,
    pub ship_hits: u32,
    /// Set on the tick that ended the game
    pub game_over: bool,
}

/// The whole simulation. Knows nothing about terminals or time.
pub struct Game {
    pub ship: Ship,
    /// Player shots
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub enemy_projectiles: Vec<Projectile>,
    pub state: GameState,
    pub rules: Rules,
    rng: StdRng,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            ship: Ship::new(),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            enemy_projectiles: Vec::new(),
            state: GameState::default(),
            rules: config.rules,
            rng,
        }
    }

    pub fn score(&self) -> i32 {
        self.state.score
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Advances the simulation by one frame. A frame that ends the game
    /// still runs to completion; every later call is a no-op.
    pub fn tick(&mut self, input: &TickInput) -> TickReport {
        let mut report = TickReport::default();
        if self.state.is_over() {
            return report;
        }

        if self.roll(self.rules.enemy_spawn_chance) {
            let enemy = Enemy::spawn(&mut self.rng);
            debug!(x = enemy.pos.x, vx = enemy.vel.x, vy = enemy.vel.y, "enemy spawned");
            self.enemies.push(enemy);
            report.enemies_spawned += 1;
        }

        // Shots leave from where the ship was before this frame's move
        for _ in 0..input.shots {
            self.projectiles
                .push(Projectile::new(self.ship.pos, ProjectileOwner::Player));
            report.shots_fired += 1;
        }

        if let Some(pointer) = input.pointer {
            self.ship.update_position(pointer);
        }

        if self.rules.depletion.is_depleted(self.ship.health) {
            self.end_game(&mut report, "ship destroyed");
        }

        self.update_projectiles();
        self.update_enemies(&mut report);
        self.update_enemy_projectiles(&mut report);

        report
    }

    fn roll(&mut self, chance: u32) -> bool {
        self.rng.random_range(0..=100) < chance
    }

    fn end_game(&mut self, report: &mut TickReport, reason: &str) {
        if !report.game_over {
            info!(score = self.state.score, health = self.ship.health, reason, "game over");
        }
        self.state.end();
        report.game_over = true;
    }

    fn update_projectiles(&mut self) {
        for projectile in &mut self.projectiles {
            projectile.update();
        }
        self.projectiles.retain(|p| !p.is_gone());
    }

    /// Newest enemies are handled first so they get first pick of the
    /// player's shots.
    fn update_enemies(&mut self, report: &mut TickReport) {
        let mut survivors = Vec::with_capacity(self.enemies.len());
        let enemies = std::mem::take(&mut self.enemies);

        for mut enemy in enemies.into_iter().rev() {
            if self.roll(self.rules.enemy_fire_chance) {
                self.enemy_projectiles.push(Projectile::new_with_limit(
                    enemy.pos,
                    ProjectileOwner::Enemy,
                    self.rules.shot_boundary.limit(),
                ));
            }
            enemy.update();

            if enemy.collides_with_ship(&self.ship) {
                self.end_game(report, "rammed by enemy");
                if !self.rules.remove_rammed_enemy {
                    survivors.push(enemy);
                }
            } else if enemy.check_destroyed(&mut self.projectiles) {
                self.state.score += KILL_POINTS;
                report.enemies_destroyed += 1;
                debug!(score = self.state.score, "enemy destroyed");
            } else if enemy.is_gone() {
                self.state.score -= ESCAPE_PENALTY;
                report.enemies_escaped += 1;
                debug!(score = self.state.score, "enemy escaped");
            } else {
                survivors.push(enemy);
            }
        }

        survivors.reverse();
        self.enemies = survivors;
    }

    fn update_enemy_projectiles(&mut self, report: &mut TickReport) {
        for projectile in &mut self.enemy_projectiles {
            projectile.update();
            if projectile.check_hit(&mut self.ship) {
                report.ship_hits += 1;
                info!(health = self.ship.health, "ship hit");
            }
        }
        // `is_gone` may fire early (the classic width check), but the shot
        // stays live and can still hit the ship until it leaves the screen
        self.enemy_projectiles.retain(|p| p.pos.y <= SCREEN_HEIGHT);
    }
}
