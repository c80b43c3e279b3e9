// Particle field simulation.
//
// Plain CPU-side state: integration, edge reflection, pointer attraction and
// the pairwise proximity pass used to draw connection lines. Drawing itself
// lives in the web renderer, which consumes `for_each_connection` and
// `for_each_pointer_link`.

use super::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimeStep {
    /// One implicit unit of motion per animation frame.
    #[default]
    PerFrame,
    /// Motion scaled by the measured frame delta at a 60Hz reference.
    Normalized,
}

impl TimeStep {
    /// Number of reference frames represented by a frame that took `dt_sec`.
    pub fn frames(self, dt_sec: f32) -> f32 {
        match self {
            TimeStep::PerFrame => 1.0,
            TimeStep::Normalized => (dt_sec * REFERENCE_FRAME_HZ).clamp(0.0, MAX_FRAMES_PER_STEP),
        }
    }
}

/// Per-profile field configuration. Immutable for the life of a particle batch.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub mobile: bool,
    pub particle_count: usize,
    pub size_min: f32,
    pub size_max: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub connection_distance: f32,
    pub pointer_distance: f32,
    pub palette: &'static [&'static str],
    pub glow: bool,
    pub time_step: TimeStep,
}

impl FieldConfig {
    pub fn mobile() -> Self {
        Self {
            mobile: true,
            particle_count: MOBILE_PARTICLE_COUNT,
            size_min: PARTICLE_SIZE_MIN,
            size_max: MOBILE_PARTICLE_SIZE_MAX,
            speed_min: PARTICLE_SPEED_MIN,
            speed_max: MOBILE_PARTICLE_SPEED_MAX,
            connection_distance: MOBILE_CONNECTION_DISTANCE,
            pointer_distance: MOBILE_POINTER_DISTANCE,
            palette: &PARTICLE_PALETTE,
            glow: false,
            time_step: TimeStep::PerFrame,
        }
    }

    pub fn desktop() -> Self {
        Self {
            mobile: false,
            particle_count: DESKTOP_PARTICLE_COUNT,
            size_min: PARTICLE_SIZE_MIN,
            size_max: DESKTOP_PARTICLE_SIZE_MAX,
            speed_min: PARTICLE_SPEED_MIN,
            speed_max: DESKTOP_PARTICLE_SPEED_MAX,
            connection_distance: DESKTOP_CONNECTION_DISTANCE,
            pointer_distance: DESKTOP_POINTER_DISTANCE,
            palette: &PARTICLE_PALETTE,
            glow: true,
            time_step: TimeStep::PerFrame,
        }
    }

    pub fn for_width(width: f64) -> Self {
        if width <= MOBILE_BREAKPOINT {
            Self::mobile()
        } else {
            Self::desktop()
        }
    }

    pub fn with_time_step(mut self, time_step: TimeStep) -> Self {
        self.time_step = time_step;
        self
    }

    /// Pointer attraction only runs on the desktop profile.
    #[inline]
    pub fn pointer_enabled(&self) -> bool {
        !self.mobile
    }

    #[inline]
    pub fn velocity_cap(&self) -> f32 {
        self.speed_max * VELOCITY_CAP_FACTOR
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: &'static str,
    pub base_opacity: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
}

/// A line between two particles within connection range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: Vec2,
    pub b: Vec2,
    /// Linear falloff: 1 at distance 0, 0 at the connection distance.
    pub strength: f32,
    pub alpha: f32,
    pub width: f32,
    /// Drawn with the brighter pointer stroke.
    pub enhanced: bool,
}

/// A line from the pointer to a particle within interaction range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerLink {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

pub struct ParticleField {
    config: FieldConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    pointer: PointerState,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, config: FieldConfig, rng: StdRng) -> Self {
        let mut field = Self {
            config,
            width,
            height,
            particles: Vec::new(),
            pointer: PointerState::default(),
            rng,
        };
        field.populate();
        field
    }

    /// Field sized to the viewport with the profile that matches its width.
    pub fn for_viewport(width: f32, height: f32, time_step: TimeStep, rng: StdRng) -> Self {
        let config = FieldConfig::for_width(width as f64).with_time_step(time_step);
        Self::new(width, height, config, rng)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Resize: pick the profile for the new width and replace the whole batch.
    pub fn regenerate(&mut self, width: f32, height: f32) {
        let time_step = self.config.time_step;
        self.config = FieldConfig::for_width(width as f64).with_time_step(time_step);
        self.width = width;
        self.height = height;
        self.populate();
        log::debug!(
            "[particles] regenerated {} particles for {}x{} (mobile={})",
            self.particles.len(),
            width,
            height,
            self.config.mobile
        );
    }

    fn populate(&mut self) {
        let (w, h) = (self.width, self.height);
        let cfg = &self.config;
        let rng = &mut self.rng;
        self.particles = (0..cfg.particle_count)
            .map(|_| {
                let position = Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h);
                let velocity = Vec2::new(
                    (rng.gen::<f32>() - 0.5) * cfg.speed_max,
                    (rng.gen::<f32>() - 0.5) * cfg.speed_max,
                );
                let radius = cfg.size_min + rng.gen::<f32>() * (cfg.size_max - cfg.size_min);
                let color = cfg.palette.choose(rng).copied().unwrap_or("#3B82F6");
                let base_opacity = PARTICLE_OPACITY_MIN + rng.gen::<f32>() * PARTICLE_OPACITY_SPAN;
                Particle {
                    position,
                    velocity,
                    radius,
                    color,
                    base_opacity,
                    opacity: base_opacity,
                }
            })
            .collect();
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.position = Vec2::new(x, y);
        self.pointer.active = true;
    }

    pub fn pointer_left(&mut self) {
        self.pointer.active = false;
    }

    #[inline]
    fn pointer_engaged(&self) -> bool {
        self.pointer.active && self.config.pointer_enabled()
    }

    /// Advance one animation frame representing `frames` reference frames.
    pub fn step(&mut self, frames: f32) {
        let engaged = self.pointer_engaged();
        let pointer = self.pointer.position;
        let cfg = &self.config;
        let cap = Vec2::splat(cfg.velocity_cap());
        let (w, h) = (self.width, self.height);

        for p in self.particles.iter_mut() {
            p.position += p.velocity * frames;

            if p.position.x < 0.0 || p.position.x > w {
                p.velocity.x = -p.velocity.x;
                p.position.x = p.position.x.clamp(0.0, w);
            }
            if p.position.y < 0.0 || p.position.y > h {
                p.velocity.y = -p.velocity.y;
                p.position.y = p.position.y.clamp(0.0, h);
            }

            let damping = if engaged {
                let delta = pointer - p.position;
                let distance = delta.length();
                if distance < cfg.pointer_distance {
                    let force = (cfg.pointer_distance - distance) / cfg.pointer_distance;
                    if distance > 0.0 {
                        p.velocity += delta / distance * force * POINTER_FORCE_SCALE * frames;
                    }
                    p.velocity = p.velocity.clamp(-cap, cap);
                    p.opacity = (p.base_opacity + force * POINTER_OPACITY_BOOST).min(1.0);
                    None
                } else {
                    Some(DAMPING_POINTER_ACTIVE)
                }
            } else {
                Some(DAMPING_POINTER_IDLE)
            };
            if let Some(d) = damping {
                p.opacity = p.base_opacity;
                p.velocity *= d.powf(frames);
            }

            if p.velocity.x.abs() < cfg.speed_min {
                p.velocity.x = (self.rng.gen::<f32>() - 0.5) * cfg.speed_min * 2.0;
            }
            if p.velocity.y.abs() < cfg.speed_min {
                p.velocity.y = (self.rng.gen::<f32>() - 0.5) * cfg.speed_min * 2.0;
            }
        }
    }

    /// Visit every unordered particle pair closer than the connection distance.
    pub fn for_each_connection(&self, mut f: impl FnMut(Connection)) {
        let cfg = &self.config;
        let engaged = self.pointer_engaged();
        let pointer = self.pointer.position;
        let n = self.particles.len();
        for i in 0..n {
            let a = self.particles[i].position;
            for j in (i + 1)..n {
                let b = self.particles[j].position;
                let distance = a.distance(b);
                if distance >= cfg.connection_distance {
                    continue;
                }
                let strength = 1.0 - distance / cfg.connection_distance;
                let mut link = Connection {
                    a,
                    b,
                    strength,
                    alpha: strength * CONNECTION_ALPHA_BASE,
                    width: 1.0,
                    enhanced: false,
                };
                if engaged {
                    let nearest = pointer.distance(a).min(pointer.distance(b));
                    if nearest < cfg.pointer_distance {
                        let enhancement = 1.0 - nearest / cfg.pointer_distance;
                        link.alpha = strength
                            * (CONNECTION_ALPHA_BASE + enhancement * (1.0 - CONNECTION_ALPHA_BASE));
                        link.width = 1.0 + enhancement * CONNECTION_ENHANCED_WIDTH;
                        link.enhanced = true;
                    }
                }
                f(link);
            }
        }
    }

    /// Visit every particle within pointer range (desktop, pointer active only).
    pub fn for_each_pointer_link(&self, mut f: impl FnMut(PointerLink)) {
        if !self.pointer_engaged() {
            return;
        }
        let pointer = self.pointer.position;
        let range = self.config.pointer_distance;
        for p in &self.particles {
            let distance = pointer.distance(p.position);
            if distance < range {
                f(PointerLink {
                    from: p.position,
                    to: pointer,
                    alpha: (1.0 - distance / range) * POINTER_LINK_ALPHA,
                });
            }
        }
    }
}
