use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

use crate::entities::Phase;

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Fire,
    Quit,
}

/// Polls terminal events, remembers where the pointer last was and turns
/// key and button presses into game actions
#[derive(Debug, Default)]
pub struct InputManager {
    /// Last known pointer cell (column, row)
    pointer: Option<(u16, u16)>,
    actions: Vec<InputAction>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains every pending event without blocking.
    /// Should be called once per frame before reading actions
    pub fn poll_events(&mut self, phase: Phase) -> color_eyre::Result<()> {
        self.actions.clear();

        while event::poll(Duration::from_millis(0))? {
            let event = event::read()?;
            self.handle_event(&event, phase);
        }

        Ok(())
    }

    pub fn handle_event(&mut self, event: &Event, phase: Phase) {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event, phase),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.actions.push(InputAction::Quit);
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: &MouseEvent, phase: Phase) {
        match mouse_event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = Some((mouse_event.column, mouse_event.row));
            }
            MouseEventKind::Down(button) => {
                self.pointer = Some((mouse_event.column, mouse_event.row));
                // Shots are ignored once the game has ended
                if button == MouseButton::Left && phase == Phase::Running {
                    self.actions.push(InputAction::Fire);
                }
            }
            _ => {}
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.actions.contains(&InputAction::Quit)
    }

    pub fn shots(&self) -> u32 {
        self.actions
            .iter()
            .filter(|action| **action == InputAction::Fire)
            .count() as u32
    }

    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_pointer_tracks_movement() {
        let mut input = InputManager::new();
        assert_eq!(input.pointer(), None);

        input.handle_event(&mouse(MouseEventKind::Moved, 10, 4), Phase::Running);
        assert_eq!(input.pointer(), Some((10, 4)));

        input.handle_event(
            &mouse(MouseEventKind::Drag(MouseButton::Left), 12, 5),
            Phase::Running,
        );
        assert_eq!(input.pointer(), Some((12, 5)));
    }

    #[test]
    fn test_left_click_fires() {
        let mut input = InputManager::new();
        input.handle_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), 3, 3),
            Phase::Running,
        );
        input.handle_event(
            &mouse(MouseEventKind::Down(MouseButton::Right), 3, 3),
            Phase::Running,
        );
        input.handle_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), 4, 3),
            Phase::Running,
        );
        assert_eq!(input.shots(), 2);
        assert_eq!(input.pointer(), Some((4, 3)));
        assert!(!input.quit_requested());
    }

    #[test]
    fn test_clicks_ignored_after_game_over() {
        let mut input = InputManager::new();
        input.handle_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), 3, 3),
            Phase::GameOver,
        );
        assert_eq!(input.shots(), 0);
    }

    #[test]
    fn test_quit_keys_work_in_any_phase() {
        for phase in [Phase::Running, Phase::GameOver] {
            for event in [
                key(KeyCode::Char('q'), KeyModifiers::NONE),
                key(KeyCode::Esc, KeyModifiers::NONE),
                key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            ] {
                let mut input = InputManager::new();
                input.handle_event(&event, phase);
                assert!(input.quit_requested());
            }
        }

        let mut input = InputManager::new();
        input.handle_event(&key(KeyCode::Char('c'), KeyModifiers::NONE), Phase::Running);
        assert!(!input.quit_requested());
        assert_eq!(input.shots(), 0);
    }
}
