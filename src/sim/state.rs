//! Match state and core simulation types
//!
//! Everything a tick reads or writes lives in `MatchState`; there is no
//! module-level state anywhere in the simulation.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which half of the playfield a paddle (or anything it fired) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction projectiles from this side travel in
    pub fn facing(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// A player's paddle, including its charge economy and laser loadout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner; x never changes after construction
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity (pixels/tick, negative is up)
    pub velocity: f32,
    pub score: u32,
    /// Intact flags, top to bottom
    pub segments: [bool; PADDLE_SEGMENTS],
    pub charge: f32,
    pub fire_cooldown: u32,
    pub heal_cooldown: u32,
    pub upgrade_cooldown: u32,
    pub laser_level: u32,
    pub laser_width: f32,
    pub laser_height: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_EDGE_OFFSET,
            Side::Right => CANVAS_WIDTH - PADDLE_WIDTH - PADDLE_EDGE_OFFSET,
        };
        Self {
            side,
            pos: Vec2::new(x, CANVAS_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            velocity: 0.0,
            score: 0,
            segments: [true; PADDLE_SEGMENTS],
            // Start with full charge
            charge: MAX_CHARGE,
            fire_cooldown: 0,
            heal_cooldown: 0,
            upgrade_cooldown: 0,
            laser_level: 1,
            laser_width: LASER_WIDTH,
            laser_height: LASER_HEIGHT,
        }
    }

    #[inline]
    pub fn segment_height(&self) -> f32 {
        self.height / PADDLE_SEGMENTS as f32
    }

    /// Top edge of segment `index` in playfield coordinates
    #[inline]
    pub fn segment_top(&self, index: usize) -> f32 {
        self.pos.y + index as f32 * self.segment_height()
    }

    /// Centre of segment `index` on the paddle's front face
    pub fn segment_center(&self, index: usize) -> Vec2 {
        Vec2::new(
            self.face_x(),
            self.segment_top(index) + self.segment_height() / 2.0,
        )
    }

    /// x coordinate of the face pointing at the opponent
    pub fn face_x(&self) -> f32 {
        match self.side {
            Side::Left => self.pos.x + self.width,
            Side::Right => self.pos.x,
        }
    }

    /// Centre of the paddle body
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }

    /// Largest y the paddle's top edge may take
    #[inline]
    pub fn max_y(&self) -> f32 {
        CANVAS_HEIGHT - self.height
    }

    pub fn intact_count(&self) -> usize {
        self.segments.iter().filter(|s| **s).count()
    }

    pub fn is_fully_destroyed(&self) -> bool {
        self.segments.iter().all(|s| !s)
    }

    /// Lowest-indexed destroyed segment, if any
    pub fn first_destroyed(&self) -> Option<usize> {
        self.segments.iter().position(|s| !s)
    }
}

/// The ball; x/y is the top-left corner of its bounding square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
            vel: Vec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            size: BALL_SIZE,
        }
    }
}

impl Ball {
    /// Vertical midpoint, used for paddle hit tests
    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }
}

/// What a projectile does on impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Breaks every intact segment it overlaps
    #[default]
    Destructive,
}

/// A laser bolt in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Signed horizontal speed; the sign follows `origin.facing()`
    pub speed: f32,
    pub origin: Side,
    pub kind: ProjectileKind,
    pub age: u32,
    pub max_age: u32,
}

impl Projectile {
    /// The side whose paddle this projectile can hit
    pub fn target(&self) -> Side {
        self.origin.opponent()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }
}

/// Why the screen is flashing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashCause {
    Goal,
    Destruction,
}

/// Full-screen flash requested by a scoring event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenFlash {
    pub cause: FlashCause,
    /// Player who earned the points
    pub beneficiary: Side,
    pub ticks_left: u32,
}

/// Timed on-screen message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub text: String,
    pub side: Side,
    pub ticks_left: u32,
}

/// Cosmetic timers the renderer reads; never affects gameplay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    pub flash: Option<ScreenFlash>,
    pub banner: Option<Banner>,
}

impl Overlay {
    pub fn flash(&mut self, cause: FlashCause, beneficiary: Side) {
        self.flash = Some(ScreenFlash {
            cause,
            beneficiary,
            ticks_left: FLASH_TICKS,
        });
    }

    pub fn announce(&mut self, text: &str, side: Side) {
        self.banner = Some(Banner {
            text: text.to_string(),
            side,
            ticks_left: BANNER_TICKS,
        });
    }

    /// Count both timers down one tick, dropping expired entries
    pub fn decay(&mut self) {
        if let Some(flash) = &mut self.flash {
            flash.ticks_left = flash.ticks_left.saturating_sub(1);
            if flash.ticks_left == 0 {
                self.flash = None;
            }
        }
        if let Some(banner) = &mut self.banner {
            banner.ticks_left = banner.ticks_left.saturating_sub(1);
            if banner.ticks_left == 0 {
                self.banner = None;
            }
        }
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    /// Seed the match RNG was created from
    pub seed: u64,
    /// Serve randomisation
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    /// Live projectiles in spawn order
    pub projectiles: Vec<Projectile>,
    pub overlay: Overlay,
    next_id: u32,
}

impl MatchState {
    /// Fresh match: centred paddles, full charge, all segments intact
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::default(),
            projectiles: Vec::new(),
            overlay: Overlay::default(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
