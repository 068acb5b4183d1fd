#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    /// Terminal: the last frame stays on screen until quit
    GameOver,
}

/// Score and phase, owned by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameState {
    pub score: i32,
    pub phase: Phase,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn end(&mut self) {
        self.phase = Phase::GameOver;
    }
}
