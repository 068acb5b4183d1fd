use color_eyre::Result;
use ratatui::{Terminal, backend::Backend, layout::Rect};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::game::{Game, TickInput};
use crate::input::InputManager;
use crate::renderer::{GameRenderer, RenderView, Viewport};
use crate::sprite::Sprites;

/// Caps the loop at a fixed rate by sleeping away what is left of each frame
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    /// Blocks until one frame has passed since the previous call and
    /// returns the time actually elapsed
    pub fn tick(&mut self) -> Duration {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        let now = Instant::now();
        let delta = now.duration_since(self.last);
        self.last = now;
        delta
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// A frame that took more than twice its budget
    pub fn is_slow(&self, delta: Duration) -> bool {
        delta > self.frame * 2
    }
}

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    game: Game,
    sprites: Sprites,
    clock: FrameClock,
    input_manager: InputManager,
    renderer: GameRenderer,
    frame_count: u64,
}

impl App {
    pub fn new(config: &GameConfig, sprites: Sprites) -> Self {
        Self {
            running: true,
            game: Game::new(config),
            sprites,
            clock: FrameClock::new(config.fps),
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            frame_count: 0,
        }
    }

    /// Run the application's main loop until quit. After game over the
    /// last frame stays up and only quit is processed.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!(fps = self.clock.frame_duration().as_secs_f32().recip(), "starting");

        while self.running {
            let delta = self.clock.tick();
            if self.clock.is_slow(delta) {
                debug!(?delta, frame = self.frame_count, "slow frame");
            }

            self.input_manager.poll_events(self.game.state.phase)?;
            if self.input_manager.quit_requested() {
                info!(score = self.game.score(), frames = self.frame_count, "quit");
                self.running = false;
                continue;
            }

            let size = terminal.size()?;
            let viewport = Viewport::fit(Rect::new(0, 0, size.width, size.height));
            let input = TickInput {
                pointer: self
                    .input_manager
                    .pointer()
                    .map(|(column, row)| viewport.to_world(column, row)),
                shots: self.input_manager.shots(),
            };

            if !self.game.is_over() {
                self.game.tick(&input);
                self.frame_count += 1;
            }

            terminal.draw(|frame| {
                let view = RenderView {
                    game_state: self.game.state,
                    ship: &self.game.ship,
                    enemies: &self.game.enemies,
                    projectiles: &self.game.projectiles,
                    enemy_projectiles: &self.game.enemy_projectiles,
                    sprites: &self.sprites,
                };
                self.renderer.render(frame, &view);
            })?;
        }
        Ok(())
    }
}
