//! Decorative sakura petals.
//!
//! Two populations share one field: falling petals trickle in from above the
//! viewport on the spawner tick, explosion petals burst from the centre on a
//! correct answer and shrink away. None of this feeds back into quiz state.

use rand::Rng;

use crate::config::PetalConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PetalKind {
    Falling,
    Explosion,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Petal {
    pub id: u64,
    pub kind: PetalKind,
    pub x: f64,
    pub y: f64,
    /// Degrees.
    pub rotation: f64,
    pub scale: f64,
}

/// Visible area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

pub struct PetalField {
    cfg: PetalConfig,
    viewport: Viewport,
    falling: Vec<Petal>,
    explosion: Vec<Petal>,
    next_id: u64,
}

impl PetalField {
    pub fn new(cfg: PetalConfig, viewport: Viewport) -> Self {
        Self {
            cfg,
            viewport,
            falling: Vec::new(),
            explosion: Vec::new(),
            next_id: 0,
        }
    }

    /// Track window resizes; affects spawn width, fall bound and burst centre.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn falling(&self) -> &[Petal] {
        &self.falling
    }

    pub fn explosion(&self) -> &[Petal] {
        &self.explosion
    }

    /// Falling petals first, then explosion petals (render order).
    pub fn iter(&self) -> impl Iterator<Item = &Petal> {
        self.falling.iter().chain(self.explosion.iter())
    }

    pub fn len(&self) -> usize {
        self.falling.len() + self.explosion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// One spawner tick: with `spawn_chance`, drop a petal in from above.
    /// Returns whether a petal was added.
    pub fn spawn_tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !rng.gen_bool(self.cfg.spawn_chance) {
            return false;
        }
        let id = self.alloc_id();
        let petal = Petal {
            id,
            kind: PetalKind::Falling,
            x: rng.gen_range(0.0..self.viewport.width.max(f64::MIN_POSITIVE)),
            y: self.cfg.spawn_y,
            rotation: rng.gen_range(0.0..360.0),
            scale: rng.gen_range(self.cfg.min_scale..=self.cfg.max_scale),
        };
        self.falling.push(petal);
        true
    }

    /// Append `burst_size` explosion petals at the viewport centre.
    pub fn burst<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (cx, cy) = self.viewport.center();
        for _ in 0..self.cfg.burst_size {
            let id = self.alloc_id();
            let rotation = rng.gen_range(0.0..360.0);
            self.explosion.push(Petal {
                id,
                kind: PetalKind::Explosion,
                x: cx,
                y: cy,
                rotation,
                scale: 1.0,
            });
        }
    }

    /// One animation frame.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let bottom = self.viewport.height;
        let fall = self.cfg.fall_speed;
        for p in &mut self.falling {
            p.y += fall;
        }
        self.falling.retain(|p| p.y < bottom);

        let cfg = &self.cfg;
        for p in &mut self.explosion {
            if cfg.jitter > 0.0 {
                p.x += rng.gen_range(-cfg.jitter..=cfg.jitter);
                p.y += rng.gen_range(-cfg.jitter..=cfg.jitter);
            }
            if cfg.spin > 0.0 {
                p.rotation += rng.gen_range(0.0..cfg.spin);
            }
            p.scale *= cfg.shrink_factor;
        }
        let floor = cfg.min_visible_scale;
        self.explosion.retain(|p| p.scale >= floor);
    }
}
