/// Columns in the sprite sheet grid.
pub const SHEET_COLS: u32 = 8;
/// Rows in the sprite sheet grid.
pub const SHEET_ROWS: u32 = 4;
/// Edge length of one sprite cell in pixels.
pub const SPRITE_SIZE: f32 = 32.0;
/// Half a cell — the cat's position is its center, so this is the margin
/// kept from every screen edge.
pub const HALF_SPRITE: f32 = SPRITE_SIZE / 2.0;

/// A (col, row) cell in the sprite sheet grid.
pub type Cell = (u8, u8);

/// Every pose the sheet contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Idle,
    Alert,
    Tired,
    Sleeping,
    ScratchSelf,
    ScratchWallN,
    ScratchWallS,
    ScratchWallE,
    ScratchWallW,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl SpriteId {
    /// Ordered frame cells for this pose. Layout is fixed by the sheet art.
    pub fn frames(self) -> &'static [Cell] {
        match self {
            Self::Idle => &[(3, 3)],
            Self::Alert => &[(7, 3)],
            Self::Tired => &[(3, 2)],
            Self::Sleeping => &[(2, 0), (2, 1)],
            Self::ScratchSelf => &[(5, 0), (6, 0), (7, 0)],
            Self::ScratchWallN => &[(0, 0), (0, 1)],
            Self::ScratchWallS => &[(7, 1), (6, 2)],
            Self::ScratchWallE => &[(2, 2), (2, 3)],
            Self::ScratchWallW => &[(4, 0), (4, 1)],
            Self::North => &[(1, 2), (1, 3)],
            Self::NorthEast => &[(0, 2), (0, 3)],
            Self::East => &[(3, 0), (3, 1)],
            Self::SouthEast => &[(5, 1), (5, 2)],
            Self::South => &[(6, 3), (7, 2)],
            Self::SouthWest => &[(5, 3), (6, 1)],
            Self::West => &[(4, 2), (4, 3)],
            Self::NorthWest => &[(1, 0), (1, 1)],
        }
    }

    /// Cell for frame `n`, wrapping past the end so any counter works.
    pub fn frame_at(self, n: u32) -> Cell {
        let frames = self.frames();
        frames[n as usize % frames.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SpriteId; 17] = [
        SpriteId::Idle,
        SpriteId::Alert,
        SpriteId::Tired,
        SpriteId::Sleeping,
        SpriteId::ScratchSelf,
        SpriteId::ScratchWallN,
        SpriteId::ScratchWallS,
        SpriteId::ScratchWallE,
        SpriteId::ScratchWallW,
        SpriteId::North,
        SpriteId::NorthEast,
        SpriteId::East,
        SpriteId::SouthEast,
        SpriteId::South,
        SpriteId::SouthWest,
        SpriteId::West,
        SpriteId::NorthWest,
    ];

    #[test]
    fn every_pose_has_frames_inside_the_grid() {
        for id in ALL {
            let frames = id.frames();
            assert!(!frames.is_empty(), "{id:?} has no frames");
            for &(col, row) in frames {
                assert!((col as u32) < SHEET_COLS, "{id:?} col {col} out of grid");
                assert!((row as u32) < SHEET_ROWS, "{id:?} row {row} out of grid");
            }
        }
    }

    #[test]
    fn frame_at_wraps() {
        assert_eq!(SpriteId::Sleeping.frame_at(0), (2, 0));
        assert_eq!(SpriteId::Sleeping.frame_at(1), (2, 1));
        assert_eq!(SpriteId::Sleeping.frame_at(2), (2, 0));
        // Single-frame poses ignore the counter entirely.
        assert_eq!(SpriteId::Idle.frame_at(999), (3, 3));
    }
}
