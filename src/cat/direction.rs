use glam::Vec2;

use super::sprites::SpriteId;

/// 8-way compass heading toward the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// Classify a normalized displacement (position -> target) in screen
    /// coordinates, where +y points down. An axis contributes its compass
    /// letter when its component exceeds 0.5 in magnitude; a unit vector
    /// always has at least one such component, so every heading classifies.
    pub fn classify(n: Vec2) -> Self {
        let north = n.y < -0.5;
        let south = n.y > 0.5;
        let east = n.x > 0.5;
        let west = n.x < -0.5;

        match (north, south, east, west) {
            (true, _, true, _) => Self::NE,
            (true, _, _, true) => Self::NW,
            (true, _, _, _) => Self::N,
            (_, true, true, _) => Self::SE,
            (_, true, _, true) => Self::SW,
            (_, true, _, _) => Self::S,
            (_, _, true, _) => Self::E,
            (_, _, _, true) => Self::W,
            // Only reachable for non-unit input — fall back to the dominant axis.
            _ => {
                if n.x >= 0.0 {
                    Self::E
                } else {
                    Self::W
                }
            }
        }
    }

    /// The walking sprite for this heading.
    pub fn sprite(self) -> SpriteId {
        match self {
            Self::N => SpriteId::North,
            Self::NE => SpriteId::NorthEast,
            Self::E => SpriteId::East,
            Self::SE => SpriteId::SouthEast,
            Self::S => SpriteId::South,
            Self::SW => SpriteId::SouthWest,
            Self::W => SpriteId::West,
            Self::NW => SpriteId::NorthWest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(displacement: Vec2) -> Direction {
        Direction::classify(displacement.normalize())
    }

    #[test]
    fn cardinal_headings_are_symmetric() {
        assert_eq!(classify(Vec2::new(10.0, 0.0)), Direction::E);
        assert_eq!(classify(Vec2::new(-10.0, 0.0)), Direction::W);
        assert_eq!(classify(Vec2::new(0.0, -10.0)), Direction::N);
        assert_eq!(classify(Vec2::new(0.0, 10.0)), Direction::S);
    }

    #[test]
    fn diagonals_combine_both_axes() {
        assert_eq!(classify(Vec2::new(10.0, 10.0)), Direction::SE);
        assert_eq!(classify(Vec2::new(-10.0, -10.0)), Direction::NW);
        assert_eq!(classify(Vec2::new(10.0, -10.0)), Direction::NE);
        assert_eq!(classify(Vec2::new(-10.0, 10.0)), Direction::SW);
    }

    #[test]
    fn shallow_angles_stay_cardinal() {
        // ~17 degrees off horizontal: |y/d| < 0.5, so no vertical letter.
        assert_eq!(classify(Vec2::new(10.0, 3.0)), Direction::E);
        assert_eq!(classify(Vec2::new(-10.0, -3.0)), Direction::W);
    }

    #[test]
    fn every_unit_vector_classifies() {
        // Sweep the circle; classification must be total for unit input.
        for i in 0..360 {
            let a = (i as f32).to_radians();
            let _ = Direction::classify(Vec2::new(a.cos(), a.sin()));
        }
    }
}
