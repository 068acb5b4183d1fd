use crate::constants::{
    BACKGROUND, GAME_OVER_COLOR, GAME_OVER_TEXT, GAME_OVER_TEXT_POS, PROJECTILE_LENGTH,
    SCORE_COLOR, SCREEN_HEIGHT, SCREEN_WIDTH, SHIP_WIDTH,
};
use crate::entities::{Enemy, GameState, Point, Projectile, Ship};
use crate::sprite::{Sprite, Sprites};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Block,
};

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Maps the 500x750 world onto a block of terminal cells. Cells are
/// assumed to be twice as tall as they are wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub rect: Rect,
    /// World units per column
    unit_x: f32,
    /// World units per row
    unit_y: f32,
}

impl Viewport {
    /// Largest aspect-correct viewport centred in `area`
    pub fn fit(area: Rect) -> Self {
        let width = area.width.max(1) as f32;
        let height = area.height.max(1) as f32;
        let scale = (SCREEN_WIDTH / width).max(SCREEN_HEIGHT / 2.0 / height);

        let cols = ((SCREEN_WIDTH / scale).round() as u16).clamp(1, area.width.max(1));
        let rows = ((SCREEN_HEIGHT / 2.0 / scale).round() as u16).clamp(1, area.height.max(1));
        let rect = Rect {
            x: area.x + (area.width.saturating_sub(cols)) / 2,
            y: area.y + (area.height.saturating_sub(rows)) / 2,
            width: cols,
            height: rows,
        };

        Self {
            rect,
            unit_x: SCREEN_WIDTH / cols as f32,
            unit_y: SCREEN_HEIGHT / rows as f32,
        }
    }

    /// Cell holding a world point, if it is on screen
    pub fn to_cell(&self, point: Point) -> Option<(u16, u16)> {
        let col = (point.x / self.unit_x).floor();
        let row = (point.y / self.unit_y).floor();
        if col < 0.0 || row < 0.0 || col >= self.rect.width as f32 || row >= self.rect.height as f32
        {
            return None;
        }
        Some((self.rect.x + col as u16, self.rect.y + row as u16))
    }

    /// World point at the centre of a cell; cells outside are clamped to the edge
    pub fn to_world(&self, column: u16, row: u16) -> Point {
        let col = column
            .saturating_sub(self.rect.x)
            .min(self.rect.width.saturating_sub(1));
        let row = row
            .saturating_sub(self.rect.y)
            .min(self.rect.height.saturating_sub(1));
        Point::new(
            (col as f32 + 0.5) * self.unit_x,
            (row as f32 + 0.5) * self.unit_y,
        )
    }

    /// Column/row ranges (viewport-relative) overlapping a world rectangle
    fn cell_span(&self, pos: Point, width: f32, height: f32) -> (i32, i32, i32, i32) {
        let first_col = (pos.x / self.unit_x).floor().max(0.0) as i32;
        let last_col = (((pos.x + width) / self.unit_x).ceil() as i32).min(self.rect.width as i32);
        let first_row = (pos.y / self.unit_y).floor().max(0.0) as i32;
        let last_row =
            (((pos.y + height) / self.unit_y).ceil() as i32).min(self.rect.height as i32);
        (first_col, last_col, first_row, last_row)
    }
}

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub ship: &'a Ship,
    pub enemies: &'a [Enemy],
    pub projectiles: &'a [Projectile],
    pub enemy_projectiles: &'a [Projectile],
    pub sprites: &'a Sprites,
}

/// Draws a frame of the game into the terminal buffer
#[derive(Debug, Default)]
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let viewport = Viewport::fit(frame.area());
        self.render_into(frame.buffer_mut(), viewport, view);
    }

    /// Paint order: background, ship, game-over text, shots, enemies,
    /// enemy shots, score.
    pub fn render_into(&self, buffer: &mut Buffer, viewport: Viewport, view: &RenderView) {
        let background = rgb(BACKGROUND);
        ratatui::widgets::Widget::render(
            Block::default().style(Style::default().bg(background)),
            viewport.rect,
            buffer,
        );

        draw_sprite(buffer, viewport, &view.sprites.ship, view.ship.pos, background);

        if view.game_state.is_over() {
            let (x, y) = GAME_OVER_TEXT_POS;
            draw_text(
                buffer,
                viewport,
                Point::new(x, y),
                GAME_OVER_TEXT,
                Style::default()
                    .fg(rgb(GAME_OVER_COLOR))
                    .add_modifier(Modifier::BOLD),
            );
        }

        for projectile in view.projectiles {
            draw_projectile(buffer, viewport, projectile);
        }
        for enemy in view.enemies {
            draw_sprite(buffer, viewport, &view.sprites.enemy, enemy.pos, background);
        }
        for projectile in view.enemy_projectiles {
            draw_projectile(buffer, viewport, projectile);
        }

        draw_text(
            buffer,
            viewport,
            Point::new(0.0, 0.0),
            &format!("Score: {}", view.game_state.score),
            Style::default().fg(rgb(SCORE_COLOR)),
        );
    }
}

/// Half-block rendering: the top and bottom of each cell are sampled
/// separately from the sprite.
fn draw_sprite(buffer: &mut Buffer, viewport: Viewport, sprite: &Sprite, pos: Point, bg: Color) {
    let (first_col, last_col, first_row, last_row) =
        viewport.cell_span(pos, sprite.width() as f32, sprite.height() as f32);

    for row in first_row..last_row {
        for col in first_col..last_col {
            let x = (col as f32 + 0.5) * viewport.unit_x - pos.x;
            let top = sprite.sample(x, (row as f32 + 0.25) * viewport.unit_y - pos.y);
            let bottom = sprite.sample(x, (row as f32 + 0.75) * viewport.unit_y - pos.y);
            if top.is_none() && bottom.is_none() {
                continue;
            }

            let position = (viewport.rect.x + col as u16, viewport.rect.y + row as u16);
            if let Some(cell) = buffer.cell_mut(position) {
                cell.set_char('▀')
                    .set_fg(top.map_or(bg, rgb))
                    .set_bg(bottom.map_or(bg, rgb));
            }
        }
    }
}

/// A shot is a streak trailing PROJECTILE_LENGTH units above its position,
/// offset to the middle of the ship sprite.
fn draw_projectile(buffer: &mut Buffer, viewport: Viewport, projectile: &Projectile) {
    let x = projectile.pos.x + SHIP_WIDTH as f32 / 2.0;
    let top = Point::new(x, projectile.pos.y - PROJECTILE_LENGTH);
    let (first_col, _, first_row, last_row) = viewport.cell_span(top, 0.0, PROJECTILE_LENGTH);
    if x < 0.0 || projectile.pos.y <= 0.0 || first_col >= viewport.rect.width as i32 {
        return;
    }

    let style = Style::default().fg(rgb(projectile.owner.color()));
    for row in first_row..last_row {
        let position = (viewport.rect.x + first_col as u16, viewport.rect.y + row as u16);
        if let Some(cell) = buffer.cell_mut(position) {
            cell.set_char('│').set_style(style);
        }
    }
}

fn draw_text(buffer: &mut Buffer, viewport: Viewport, at: Point, text: &str, style: Style) {
    if let Some((x, y)) = viewport.to_cell(at) {
        let room = viewport.rect.right().saturating_sub(x) as usize;
        buffer.set_stringn(x, y, text, room, style);
    }
}
