use glam::Vec2;

use super::direction::Direction;
use super::sprites::{Cell, SpriteId, HALF_SPRITE, SPRITE_SIZE};

/// Pixels moved per tick while chasing.
const MOVE_SPEED: f32 = 10.0;
/// Distance at which the cat stops chasing and settles.
const PROXIMITY: f32 = 48.0;
/// Idle ticks required before a sub-animation may start.
const IDLE_ANIM_MIN_TICKS: u32 = 10;
/// Per-tick chance of starting an idle sub-animation once eligible.
const IDLE_ANIM_CHANCE: f32 = 0.005;
/// The idle counter is clamped here before the alert countdown decrements,
/// bounding how many alert frames play before movement resumes.
const ALERT_COUNTDOWN_CAP: u32 = 7;
/// Sleeping shows the tired intro pose for this many frames.
const SLEEP_INTRO_FRAMES: u32 = 8;
/// Sleeping frames advance at quarter speed.
const SLEEP_FRAME_DIVISOR: u32 = 4;
/// Sleeping resets to plain idle past this frame count.
const SLEEP_FRAME_BUDGET: u32 = 192;
/// Scratch animations reset to plain idle past this frame count.
const SCRATCH_FRAME_BUDGET: u32 = 9;

/// Where an idle scratch happens. Wall variants are only offered while the
/// cat rests against the matching screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScratchSpot {
    Fur,
    WallN,
    WallS,
    WallE,
    WallW,
}

impl ScratchSpot {
    fn sprite(self) -> SpriteId {
        match self {
            Self::Fur => SpriteId::ScratchSelf,
            Self::WallN => SpriteId::ScratchWallN,
            Self::WallS => SpriteId::ScratchWallS,
            Self::WallE => SpriteId::ScratchWallE,
            Self::WallW => SpriteId::ScratchWallW,
        }
    }
}

/// What the cat is doing on a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    /// Single startle pose shown while the idle countdown drains.
    Alert,
    Sleeping,
    Scratching(ScratchSpot),
    Moving(Direction),
}

/// Idle sub-animation currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdleAnimation {
    Sleeping,
    Scratching(ScratchSpot),
}

/// One tick's outputs — everything the render driver needs.
#[derive(Debug, Clone, Copy)]
pub struct TickOutput {
    /// Cat center in screen pixels, already clamped to the viewport.
    pub position: Vec2,
    pub state: AnimationState,
    /// Sprite sheet cell to display.
    pub cell: Cell,
}

/// The cat's entire mutable state: position, counters, idle sub-animation.
/// All transitions happen inside `tick`; callers only read outputs.
pub struct Animator {
    position: Vec2,
    frame_count: u32,
    idle_ticks: u32,
    idle_animation: Option<IdleAnimation>,
    idle_frame: u32,
}

impl Animator {
    /// The cat starts tucked into the top-left corner.
    pub fn new() -> Self {
        Self {
            position: Vec2::splat(HALF_SPRITE),
            frame_count: 0,
            idle_ticks: 0,
            idle_animation: None,
            idle_frame: 0,
        }
    }

    /// Advance one animation tick (~100ms cadence).
    ///
    /// `target` is the last observed pointer position, `viewport` the current
    /// screen size in pixels. The RNG drives idle sub-animation choice only;
    /// seed it for deterministic runs.
    pub fn tick(&mut self, target: Vec2, viewport: Vec2, rng: &mut fastrand::Rng) -> TickOutput {
        self.frame_count = self.frame_count.wrapping_add(1);

        let to_target = target - self.position;
        let distance = to_target.length();

        // Close enough: settle down instead of chasing.
        if distance < MOVE_SPEED || distance < PROXIMITY {
            return self.idle(viewport, rng);
        }

        self.reset_idle_animation();

        // Startle: after settling for more than a tick, play alert poses
        // while the idle counter drains, then resume movement. Clamp before
        // decrementing — the order bounds the countdown length.
        if self.idle_ticks > 1 {
            self.idle_ticks = self.idle_ticks.min(ALERT_COUNTDOWN_CAP);
            self.idle_ticks -= 1;
            return self.output(AnimationState::Alert, SpriteId::Alert.frame_at(0));
        }

        let heading = Direction::classify(to_target / distance);
        self.position += to_target / distance * MOVE_SPEED;
        self.position.x = self.position.x.clamp(HALF_SPRITE, viewport.x - HALF_SPRITE);
        self.position.y = self.position.y.clamp(HALF_SPRITE, viewport.y - HALF_SPRITE);

        self.output(
            AnimationState::Moving(heading),
            heading.sprite().frame_at(self.frame_count),
        )
    }

    /// Idle processing: count settled ticks, occasionally commit to a
    /// sub-animation, and advance whichever one is running.
    fn idle(&mut self, viewport: Vec2, rng: &mut fastrand::Rng) -> TickOutput {
        self.idle_ticks = self.idle_ticks.saturating_add(1);

        if self.idle_ticks > IDLE_ANIM_MIN_TICKS
            && self.idle_animation.is_none()
            && rng.f32() < IDLE_ANIM_CHANCE
        {
            let choices = self.available_idle_animations(viewport);
            self.idle_animation = Some(choices[rng.usize(0..choices.len())]);
        }

        let out = match self.idle_animation {
            Some(IdleAnimation::Sleeping) => {
                if self.idle_frame < SLEEP_INTRO_FRAMES {
                    self.output(AnimationState::Sleeping, SpriteId::Tired.frame_at(0))
                } else {
                    let cell = SpriteId::Sleeping.frame_at(self.idle_frame / SLEEP_FRAME_DIVISOR);
                    if self.idle_frame > SLEEP_FRAME_BUDGET {
                        self.reset_idle_animation();
                    }
                    self.output(AnimationState::Sleeping, cell)
                }
            }
            Some(IdleAnimation::Scratching(spot)) => {
                let cell = spot.sprite().frame_at(self.idle_frame);
                if self.idle_frame > SCRATCH_FRAME_BUDGET {
                    self.reset_idle_animation();
                }
                self.output(AnimationState::Scratching(spot), cell)
            }
            None => self.output(AnimationState::Idle, SpriteId::Idle.frame_at(0)),
        };

        self.idle_frame += 1;
        out
    }

    /// Sub-animations available right now. Wall scratches require the matching
    /// coordinate to be within one sprite size of its screen edge.
    fn available_idle_animations(&self, viewport: Vec2) -> Vec<IdleAnimation> {
        let mut choices = vec![
            IdleAnimation::Sleeping,
            IdleAnimation::Scratching(ScratchSpot::Fur),
        ];
        if self.position.x < SPRITE_SIZE {
            choices.push(IdleAnimation::Scratching(ScratchSpot::WallW));
        }
        if self.position.y < SPRITE_SIZE {
            choices.push(IdleAnimation::Scratching(ScratchSpot::WallN));
        }
        if self.position.x > viewport.x - SPRITE_SIZE {
            choices.push(IdleAnimation::Scratching(ScratchSpot::WallE));
        }
        if self.position.y > viewport.y - SPRITE_SIZE {
            choices.push(IdleAnimation::Scratching(ScratchSpot::WallS));
        }
        choices
    }

    fn reset_idle_animation(&mut self) {
        self.idle_animation = None;
        self.idle_frame = 0;
    }

    fn output(&self, state: AnimationState, cell: Cell) -> TickOutput {
        TickOutput {
            position: self.position,
            state,
            cell,
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(1920.0, 1080.0);

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(7)
    }

    fn cat_at(x: f32, y: f32) -> Animator {
        let mut cat = Animator::new();
        cat.position = Vec2::new(x, y);
        cat
    }

    #[test]
    fn chases_a_distant_target() {
        let mut cat = cat_at(100.0, 100.0);
        let out = cat.tick(Vec2::new(500.0, 100.0), VIEWPORT, &mut rng());

        assert_eq!(out.state, AnimationState::Moving(Direction::E));
        assert_eq!(out.position, Vec2::new(110.0, 100.0));
    }

    #[test]
    fn position_stays_inside_the_viewport() {
        let mut cat = cat_at(960.0, 540.0);
        let mut r = rng();

        // Chase random far-flung targets, some well outside the screen.
        for _ in 0..500 {
            let target = Vec2::new(
                r.f32() * (VIEWPORT.x + 400.0) - 200.0,
                r.f32() * (VIEWPORT.y + 400.0) - 200.0,
            );
            let out = cat.tick(target, VIEWPORT, &mut r);
            assert!(out.position.x >= HALF_SPRITE && out.position.x <= VIEWPORT.x - HALF_SPRITE);
            assert!(out.position.y >= HALF_SPRITE && out.position.y <= VIEWPORT.y - HALF_SPRITE);
        }
    }

    #[test]
    fn proximity_routes_to_idle_not_movement() {
        let mut cat = cat_at(500.0, 500.0);
        let out = cat.tick(Vec2::new(547.0, 500.0), VIEWPORT, &mut rng());

        assert_eq!(out.state, AnimationState::Idle);
        assert_eq!(out.position, Vec2::new(500.0, 500.0));
        assert_eq!(cat.idle_ticks, 1);
    }

    #[test]
    fn stationary_target_counts_idle_ticks() {
        let mut cat = cat_at(500.0, 500.0);
        let mut r = rng();

        for expected in 1..=5 {
            cat.tick(Vec2::new(500.0, 500.0), VIEWPORT, &mut r);
            assert_eq!(cat.idle_ticks, expected);
        }
    }

    #[test]
    fn startle_plays_alert_before_movement_resumes() {
        let mut cat = cat_at(500.0, 500.0);
        cat.idle_ticks = 5;

        // Target jumps 500px away: first tick startles, doesn't move.
        let out = cat.tick(Vec2::new(1000.0, 500.0), VIEWPORT, &mut rng());
        assert_eq!(out.state, AnimationState::Alert);
        assert_eq!(out.position, Vec2::new(500.0, 500.0));
        assert_eq!(cat.idle_ticks, 4);
    }

    #[test]
    fn alert_countdown_is_clamped() {
        let mut cat = cat_at(500.0, 500.0);
        cat.idle_ticks = 100;
        let mut r = rng();
        let target = Vec2::new(1400.0, 500.0);

        // Clamp-then-decrement caps the startle at six alert frames no matter
        // how long the cat has been settled.
        let mut alert_frames = 0;
        loop {
            let out = cat.tick(target, VIEWPORT, &mut r);
            match out.state {
                AnimationState::Alert => alert_frames += 1,
                AnimationState::Moving(_) => break,
                other => panic!("unexpected state {other:?}"),
            }
            assert!(alert_frames < 20, "countdown never finished");
        }
        assert_eq!(alert_frames, 6);
    }

    #[test]
    fn sleeping_opens_with_the_tired_pose() {
        let mut cat = cat_at(500.0, 500.0);
        cat.idle_animation = Some(IdleAnimation::Sleeping);

        let out = cat.tick(Vec2::new(500.0, 500.0), VIEWPORT, &mut rng());
        assert_eq!(out.state, AnimationState::Sleeping);
        assert_eq!(out.cell, SpriteId::Tired.frame_at(0));
    }

    #[test]
    fn sleeping_resets_to_idle_after_its_frame_budget() {
        let mut cat = cat_at(500.0, 500.0);
        cat.idle_animation = Some(IdleAnimation::Sleeping);
        let mut r = rng();
        let target = Vec2::new(500.0, 500.0);

        for _ in 0..=SLEEP_FRAME_BUDGET {
            let out = cat.tick(target, VIEWPORT, &mut r);
            assert_eq!(out.state, AnimationState::Sleeping);
        }
        // Budget exceeded: this tick still shows sleeping but clears the
        // sub-animation.
        let out = cat.tick(target, VIEWPORT, &mut r);
        assert_eq!(out.state, AnimationState::Sleeping);
        assert!(cat.idle_animation.is_none());

        // Keep the counter below the sub-animation threshold so the next
        // tick can't roll a fresh one.
        cat.idle_ticks = 0;
        let out = cat.tick(target, VIEWPORT, &mut r);
        assert_eq!(out.state, AnimationState::Idle);
    }

    #[test]
    fn scratching_resets_to_idle_after_its_frame_budget() {
        let mut cat = cat_at(500.0, 500.0);
        cat.idle_animation = Some(IdleAnimation::Scratching(ScratchSpot::Fur));
        let mut r = rng();
        let target = Vec2::new(500.0, 500.0);

        for _ in 0..=SCRATCH_FRAME_BUDGET {
            let out = cat.tick(target, VIEWPORT, &mut r);
            assert_eq!(out.state, AnimationState::Scratching(ScratchSpot::Fur));
        }
        let out = cat.tick(target, VIEWPORT, &mut r);
        assert_eq!(out.state, AnimationState::Scratching(ScratchSpot::Fur));
        assert!(cat.idle_animation.is_none());

        cat.idle_ticks = 0;
        let out = cat.tick(target, VIEWPORT, &mut r);
        assert_eq!(out.state, AnimationState::Idle);
    }

    #[test]
    fn wall_scratches_require_the_matching_edge() {
        let center = cat_at(960.0, 540.0);
        let choices = center.available_idle_animations(VIEWPORT);
        assert_eq!(
            choices,
            vec![
                IdleAnimation::Sleeping,
                IdleAnimation::Scratching(ScratchSpot::Fur),
            ]
        );

        let west = cat_at(HALF_SPRITE, 540.0);
        let choices = west.available_idle_animations(VIEWPORT);
        assert!(choices.contains(&IdleAnimation::Scratching(ScratchSpot::WallW)));
        assert!(!choices.contains(&IdleAnimation::Scratching(ScratchSpot::WallE)));

        // A corner offers both of its walls.
        let corner = cat_at(VIEWPORT.x - HALF_SPRITE, VIEWPORT.y - HALF_SPRITE);
        let choices = corner.available_idle_animations(VIEWPORT);
        assert!(choices.contains(&IdleAnimation::Scratching(ScratchSpot::WallE)));
        assert!(choices.contains(&IdleAnimation::Scratching(ScratchSpot::WallS)));
    }

    #[test]
    fn movement_interrupts_an_idle_animation() {
        let mut cat = cat_at(500.0, 500.0);
        cat.idle_animation = Some(IdleAnimation::Sleeping);
        cat.idle_frame = 50;
        cat.idle_ticks = 1;

        let out = cat.tick(Vec2::new(1000.0, 500.0), VIEWPORT, &mut rng());
        assert!(matches!(out.state, AnimationState::Moving(_)));
        assert!(cat.idle_animation.is_none());
        assert_eq!(cat.idle_frame, 0);
    }

    #[test]
    fn directional_sprites_alternate_with_the_frame_counter() {
        let mut cat = cat_at(100.0, 100.0);
        let mut r = rng();
        let target = Vec2::new(1800.0, 100.0);

        let first = cat.tick(target, VIEWPORT, &mut r).cell;
        let second = cat.tick(target, VIEWPORT, &mut r).cell;
        assert_ne!(first, second);
        assert_eq!(cat.tick(target, VIEWPORT, &mut r).cell, first);
    }
}
