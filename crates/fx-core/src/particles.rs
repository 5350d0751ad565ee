//! Depth-simulated particle field.
//!
//! Particles live in a pseudo-3D space: lateral position spans twice the
//! viewport on each axis and depth runs from the camera (0) out to a far
//! plane that tracks the viewport width. Each frame every particle travels
//! toward the camera and is recycled to the far plane when it passes it,
//! which reads as continuous forward motion through a starfield. Projection
//! is a pinhole camera with a depth-scaled parallax shift from the smoothed
//! pointer.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::constants::*;

/// Viewport extent in CSS pixels. The far depth plane tracks the width, so
/// resizing changes both the projection and the fade range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        // degenerate sizes would put non-finite values through the projection
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Focal length of the pinhole projection.
    #[inline]
    pub fn fov(&self) -> f32 {
        self.width * 0.5
    }

    /// Far depth plane; particles recycle here.
    #[inline]
    pub fn far(&self) -> f32 {
        self.width
    }
}

/// Perspective scale for a depth value: 1 at the camera, falling off with z.
#[inline]
pub fn perspective_scale(fov: f32, z: f32) -> f32 {
    fov / (fov + z)
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub size: f32,
    pub opacity: f32,
    pub vz: f32,
}

/// Screen-space draw command for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
}

impl Particle {
    pub fn spawn(rng: &mut SmallRng, vp: Viewport) -> Self {
        let mut p = Particle {
            x: 0.0,
            y: 0.0,
            // gen() is [0, 1); flip it so depth lands in (0, far]
            z: (1.0 - rng.gen::<f32>()) * vp.far(),
            size: rng.gen::<f32>() * PARTICLE_MAX_SIZE,
            opacity: PARTICLE_OPACITY_MIN + rng.gen::<f32>() * PARTICLE_OPACITY_SPAN,
            vz: PARTICLE_SPEED_MIN + rng.gen::<f32>() * PARTICLE_SPEED_SPAN,
        };
        p.scatter(rng, vp);
        p
    }

    // Lateral spread is twice the viewport so edges stay populated under
    // parallax shifts.
    fn scatter(&mut self, rng: &mut SmallRng, vp: Viewport) {
        self.x = (rng.gen::<f32>() - 0.5) * vp.width * 2.0;
        self.y = (rng.gen::<f32>() - 0.5) * vp.height * 2.0;
    }

    /// Advance one frame. A particle that passes the camera is recycled to
    /// the far plane with a fresh lateral position, keeping `z` in (0, far].
    pub fn step(&mut self, rng: &mut SmallRng, vp: Viewport) {
        self.z -= self.vz;
        if self.z <= 0.0 {
            self.z = vp.far();
            self.scatter(rng, vp);
        }
    }

    /// Project to screen space. Returns `None` when the depth fade leaves no
    /// visible alpha; such particles are skipped entirely.
    pub fn project(&self, vp: Viewport, parallax: Vec2) -> Option<Projected> {
        let scale = perspective_scale(vp.fov(), self.z);
        let alpha = self.opacity * (1.0 - self.z / vp.far());
        if alpha <= 0.0 {
            return None;
        }
        let shift_x = parallax.x * vp.width * PARALLAX_STRENGTH * scale;
        let shift_y = parallax.y * vp.height * PARALLAX_STRENGTH * scale;
        Some(Projected {
            x: self.x * scale + vp.width * 0.5 + shift_x,
            y: self.y * scale + vp.height * 0.5 + shift_y,
            radius: self.size * scale * PROJECTED_RADIUS_SCALE,
            alpha,
        })
    }
}

/// Fixed-size particle pool plus the pointer state that drives parallax.
pub struct ParticleField {
    viewport: Viewport,
    particles: Vec<Particle>,
    pointer_target: Vec2,
    pointer: Vec2,
    rng: SmallRng,
}

impl ParticleField {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_rng(viewport, SmallRng::from_entropy())
    }

    /// Deterministic construction for tests.
    pub fn with_seed(viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(viewport, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(viewport: Viewport, mut rng: SmallRng) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(&mut rng, viewport))
            .collect::<Vec<_>>();
        log::debug!("[field] seeded {} particles", particles.len());
        Self {
            viewport,
            particles,
            pointer_target: Vec2::ZERO,
            pointer: Vec2::ZERO,
            rng,
        }
    }

    /// Record the latest raw pointer sample, normalized to [-1, 1] per axis.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer_target = Vec2::new(
            (x / self.viewport.width) * 2.0 - 1.0,
            (y / self.viewport.height) * 2.0 - 1.0,
        );
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Advance one frame: smooth the pointer, then step every particle.
    pub fn tick(&mut self) {
        self.pointer = self.pointer.lerp(self.pointer_target, POINTER_SMOOTHING);
        for p in &mut self.particles {
            p.step(&mut self.rng, self.viewport);
        }
    }

    /// Draw commands for every particle with visible alpha.
    pub fn visible(&self) -> impl Iterator<Item = Projected> + '_ {
        let vp = self.viewport;
        let parallax = self.pointer;
        self.particles.iter().filter_map(move |p| p.project(vp, parallax))
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Smoothed pointer, normalized.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }
}
