//! Physics domain: kinematic bodies, static solids and moving platforms.

use bevy::prelude::*;

/// Axis-aligned kinematic body. Position lives in the entity's `Transform`
/// (world units are pixels, y-up); the body carries everything else the
/// integrator and resolver need. `enabled = false` removes the body from
/// integration, resolution and every contact pair without despawning the
/// actor, so a removal effect can still play.
#[derive(Component, Debug, Clone)]
pub struct Body {
    pub velocity: Vec2,
    pub size: Vec2,
    pub gravity_scale: f32,
    pub grounded: bool,
    pub enabled: bool,
}

impl Body {
    /// A gravity-affected body for walking actors.
    pub fn dynamic(size: Vec2) -> Self {
        Self {
            velocity: Vec2::ZERO,
            size,
            gravity_scale: 1.0,
            grounded: false,
            enabled: true,
        }
    }

    /// A gravity-exempt body for floating pickups and trigger volumes.
    pub fn trigger(size: Vec2) -> Self {
        Self {
            gravity_scale: 0.0,
            ..Self::dynamic(size)
        }
    }

    pub fn with_gravity_scale(mut self, scale: f32) -> Self {
        self.gravity_scale = scale;
        self
    }
}

/// Marker: this body is pushed out of `Solid` geometry by the resolver.
/// Trigger bodies (pickups, checkpoints) overlap freely and never carry it.
#[derive(Component, Debug)]
pub struct TerrainCollider;

/// Static collision rectangle. Moving platforms also carry one; the platform
/// driver moves the `Transform` underneath it.
#[derive(Component, Debug)]
pub struct Solid {
    pub size: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformAxis {
    Horizontal,
    Vertical,
}

impl PlatformAxis {
    pub fn unit(self) -> Vec2 {
        match self {
            PlatformAxis::Horizontal => Vec2::X,
            PlatformAxis::Vertical => Vec2::Y,
        }
    }
}

/// Oscillates a platform along one axis between `origin ± amplitude`.
/// `phase` stays in [-1, 1]; the driver reflects direction at the extremes
/// and clamps to exactly ±1 so the oscillation never drifts.
#[derive(Component, Debug)]
pub struct MovingPlatform {
    pub origin: Vec2,
    pub axis: PlatformAxis,
    pub amplitude: f32,
    pub speed: f32,
    pub phase: f32,
    pub direction: f32,
}

impl MovingPlatform {
    pub fn new(origin: Vec2, axis: PlatformAxis, amplitude: f32, speed: f32) -> Self {
        Self {
            origin,
            axis,
            amplitude,
            speed,
            phase: 0.0,
            direction: 1.0,
        }
    }

    /// Advance the oscillation by one tick.
    pub fn advance(&mut self, dt: f32) {
        if self.amplitude <= f32::EPSILON {
            return;
        }
        self.phase += self.speed * dt * self.direction / self.amplitude;
        if self.phase.abs() >= 1.0 {
            self.phase = self.phase.clamp(-1.0, 1.0);
            self.direction = -self.direction;
        }
    }

    /// Current platform centre for the phase.
    pub fn position(&self) -> Vec2 {
        self.origin + self.axis.unit() * self.amplitude * self.phase
    }
}

/// AABB overlap test on centre positions and full sizes.
pub fn aabb_overlap(pos_a: Vec2, size_a: Vec2, pos_b: Vec2, size_b: Vec2) -> bool {
    let half_a = size_a * 0.5;
    let half_b = size_b * 0.5;
    (pos_a.x - pos_b.x).abs() < half_a.x + half_b.x && (pos_a.y - pos_b.y).abs() < half_a.y + half_b.y
}
