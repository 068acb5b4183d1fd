use super::point::Point;
use crate::constants::{SHIP_HEIGHT, SHIP_START_HEALTH, SHIP_WIDTH};

/// The player ship. Its position follows the pointer directly.
#[derive(Debug, Clone)]
pub struct Ship {
    /// Top-left corner of the sprite
    pub pos: Point,
    /// Not clamped; may go below zero
    pub health: i32,
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

impl Ship {
    pub fn new() -> Self {
        Self {
            pos: Point::default(),
            health: SHIP_START_HEALTH,
        }
    }

    /// Centres the sprite on the pointer
    pub fn update_position(&mut self, pointer: Point) {
        self.pos = Point::new(
            pointer.x - self.get_width() as f32 / 2.0,
            pointer.y - self.get_height() as f32 / 2.0,
        );
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn get_width(&self) -> u32 {
        SHIP_WIDTH
    }

    pub fn get_height(&self) -> u32 {
        SHIP_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_new() {
        let ship = Ship::new();
        assert_eq!(ship.health, 100);
        assert_eq!(ship.pos, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_update_position_centres_sprite() {
        let mut ship = Ship::new();
        ship.update_position(Point::new(100.0, 200.0));
        assert_eq!(ship.pos, Point::new(72.5, 162.5));
    }

    #[test]
    fn test_take_damage_goes_negative() {
        let mut ship = Ship::new();
        ship.health = 5;
        ship.take_damage(10);
        assert_eq!(ship.health, -5);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_damage_is_subtracted_exactly(
                start in -200i32..200,
                hits in prop::collection::vec(0i32..50, 0..10)
            ) {
                let mut ship = Ship::new();
                ship.health = start;
                let total: i32 = hits.iter().sum();
                for hit in hits {
                    ship.take_damage(hit);
                }
                prop_assert_eq!(ship.health, start - total);
            }
        }
    }
}
