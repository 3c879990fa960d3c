//! Particle simulation.

use std::fmt::Write;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Default number of particles.
pub const DEFAULT_PARTICLES: usize = 50;
/// Particles closer than this are joined by a line.
pub const CONNECTION_DISTANCE: f64 = 150.0;
/// Largest per-frame velocity component.
pub const MAX_VELOCITY: f64 = 0.25;

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    /// Viewport with negative, infinite or NaN extents collapsed to zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: usable_extent(width),
            height: usable_extent(height),
        }
    }

    fn normalized(self) -> Self {
        Self::new(self.width, self.height)
    }
}

fn usable_extent(extent: f64) -> f64 {
    if extent.is_finite() { extent.max(0.0) } else { 0.0 }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Pixels per frame.
    pub vx: f64,
    pub vy: f64,
    /// Radius, 1-3 px.
    pub size: f64,
    /// 0.2-0.7.
    pub opacity: f64,
}

/// Line between two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: (f64, f64),
    pub to: (f64, f64),
    /// `0.1 * (1 - distance / CONNECTION_DISTANCE)`.
    pub alpha: f64,
}

/// Snapshot of the field after a frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    /// Frames simulated so far.
    pub tick: u64,
    pub viewport: ViewportSize,
    pub particles: Vec<Particle>,
    pub connections: Vec<Connection>,
}

impl Frame {
    /// Render the frame as a standalone SVG element.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let ViewportSize { width, height } = self.viewport;
        let mut out = String::with_capacity(64 * (self.particles.len() + self.connections.len()));
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="hero-canvas" viewBox="0 0 {width} {height}" width="{width}" height="{height}" aria-hidden="true">"#
        );
        for c in &self.connections {
            let _ = write!(
                out,
                r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="rgb(0,255,136)" stroke-opacity="{:.3}" stroke-width="0.5"/>"#,
                c.from.0, c.from.1, c.to.0, c.to.1, c.alpha
            );
        }
        for p in &self.particles {
            let _ = write!(
                out,
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="rgb(0,255,136)" fill-opacity="{:.2}"/>"#,
                p.x, p.y, p.size, p.opacity
            );
        }
        out.push_str("</svg>");
        out
    }
}

/// Field of drifting particles that bounce off the viewport edges.
#[derive(Debug, Clone)]
pub struct ParticleField {
    viewport: ViewportSize,
    particles: Vec<Particle>,
    tick: u64,
}

impl ParticleField {
    /// Scatter `count` particles with a deterministic seed.
    #[must_use]
    pub fn seeded(viewport: ViewportSize, count: usize, seed: u64) -> Self {
        let viewport = viewport.normalized();
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                x: random_coordinate(&mut rng, viewport.width),
                y: random_coordinate(&mut rng, viewport.height),
                vx: rng.random_range(-MAX_VELOCITY..MAX_VELOCITY),
                vy: rng.random_range(-MAX_VELOCITY..MAX_VELOCITY),
                size: rng.random_range(1.0..3.0),
                opacity: rng.random_range(0.2..0.7),
            })
            .collect();
        Self::from_particles(viewport, particles)
    }

    /// Scatter `count` particles with a random seed.
    #[must_use]
    pub fn random(viewport: ViewportSize, count: usize) -> Self {
        Self::seeded(viewport, count, rand::rng().random::<u64>())
    }

    #[must_use]
    pub fn from_particles(viewport: ViewportSize, particles: Vec<Particle>) -> Self {
        Self {
            viewport: viewport.normalized(),
            particles,
            tick: 0,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        let ViewportSize { width, height } = self.viewport;
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            bounce(&mut p.x, &mut p.vx, width);
            bounce(&mut p.y, &mut p.vy, height);
        }
        self.tick += 1;
    }

    /// Change the viewport and pull particles back inside it.
    pub fn resize(&mut self, viewport: ViewportSize) {
        let viewport = viewport.normalized();
        self.viewport = viewport;
        for p in &mut self.particles {
            p.x = p.x.clamp(0.0, viewport.width);
            p.y = p.y.clamp(0.0, viewport.height);
        }
    }

    /// Lines between every pair of particles closer than
    /// [`CONNECTION_DISTANCE`].
    #[must_use]
    pub fn connections(&self) -> Vec<Connection> {
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance < CONNECTION_DISTANCE {
                    out.push(Connection {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        alpha: 0.1 * (1.0 - distance / CONNECTION_DISTANCE),
                    });
                }
            }
        }
        out
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            tick: self.tick,
            viewport: self.viewport,
            particles: self.particles.clone(),
            connections: self.connections(),
        }
    }
}

fn random_coordinate(rng: &mut StdRng, extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

/// Reflect the velocity when a coordinate leaves `[0, extent]`.
fn bounce(position: &mut f64, velocity: &mut f64, extent: f64) {
    if *position < 0.0 {
        *position = 0.0;
        *velocity = velocity.abs();
    } else if *position > extent {
        *position = extent;
        *velocity = -velocity.abs();
    }
}
