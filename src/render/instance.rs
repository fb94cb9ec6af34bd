use bytemuck::{Pod, Zeroable};

use crate::cat::{TickOutput, HALF_SPRITE};

/// Per-instance data uploaded to the GPU each frame.
/// Stride = 16 bytes. There is exactly one cat, but the instanced path keeps
/// the vertex buffer static and the per-frame upload tiny.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Top-left corner of the sprite quad in screen pixels.
    pub position: [f32; 2],
    /// Sprite sheet cell (col, row) selecting the frame.
    pub cell: [f32; 2],
}

impl SpriteInstance {
    /// Build an instance from the animator's tick output. The animator tracks
    /// the cat's center; the quad is addressed by its top-left corner.
    pub fn from_output(out: &TickOutput) -> Self {
        let (col, row) = out.cell;
        Self {
            position: [out.position.x - HALF_SPRITE, out.position.y - HALF_SPRITE],
            cell: [col as f32, row as f32],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cat::AnimationState;
    use glam::Vec2;

    #[test]
    fn instance_offsets_center_to_top_left() {
        let out = TickOutput {
            position: Vec2::new(100.0, 60.0),
            state: AnimationState::Idle,
            cell: (3, 3),
        };
        let inst = SpriteInstance::from_output(&out);
        assert_eq!(inst.position, [84.0, 44.0]);
        assert_eq!(inst.cell, [3.0, 3.0]);
    }
}
