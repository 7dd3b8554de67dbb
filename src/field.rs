// The particle collection and the viewport it drifts in. Generated once per
// activation, stepped and drawn once per frame in insertion order.

use crate::config::BackgroundConfig;
use crate::error::BackgroundResult;
use crate::particle::Particle;
use crate::surface::Surface;
use crate::viewport::Viewport;
use rand::Rng;

pub struct ParticleField {
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng>(config: &BackgroundConfig, viewport: Viewport, rng: &mut R) -> ParticleField {
        let mut particles = Vec::with_capacity(config.count as usize);
        let [width, height] = viewport.bounds();
        for _ in 0..config.count {
            let size = uniform(rng, config.min_size, config.max_size);
            let pos_x = rng.gen::<f64>() * width;
            let pos_y = rng.gen::<f64>() * height;
            let vel_x = uniform(rng, -config.max_speed, config.max_speed);
            let vel_y = uniform(rng, -config.max_speed, config.max_speed);
            particles.push(Particle::new(pos_x, pos_y, vel_x, vel_y, size, config.color));
        }
        ParticleField { viewport, particles }
    }

    pub fn from_particles(viewport: Viewport, particles: Vec<Particle>) -> ParticleField {
        ParticleField { viewport, particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // Particles are kept as they are; the next step pulls stragglers back in
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Clears the surface, then advances and draws each particle in order.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> BackgroundResult<()> {
        surface.clear(self.viewport)?;
        for particle in &mut self.particles {
            particle.advance(self.viewport);
            surface.fill_circle(particle.pos[0], particle.pos[1], particle.size, particle.color)?;
        }
        Ok(())
    }
}

fn uniform<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::surface::testing::{DrawCall, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_field(seed: u64, viewport: Viewport) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleField::generate(&BackgroundConfig::default(), viewport, &mut rng)
    }

    #[test]
    fn generated_particles_respect_configured_ranges() {
        let viewport = Viewport::new(640, 480);
        let field = seeded_field(1, viewport);
        assert_eq!(field.particles().len(), 50);
        for p in field.particles() {
            assert!(p.size >= 0.5 && p.size <= 1.0);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 640.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 480.0);
            assert!(p.vel[0].abs() <= 0.1 && p.vel[1].abs() <= 0.1);
            assert_eq!(p.color, Color::AMBIENT);
        }
    }

    #[test]
    fn same_seed_gives_same_particles() {
        let viewport = Viewport::new(1024, 768);
        assert_eq!(
            seeded_field(42, viewport).particles(),
            seeded_field(42, viewport).particles()
        );
        assert_ne!(
            seeded_field(42, viewport).particles(),
            seeded_field(43, viewport).particles()
        );
    }

    #[test]
    fn zero_speed_and_zero_viewport_are_handled() {
        let config = BackgroundConfig {
            max_speed: 0.0,
            ..BackgroundConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let field = ParticleField::generate(&config, Viewport::new(0, 0), &mut rng);
        for p in field.particles() {
            assert_eq!(p.pos, [0.0, 0.0]);
            assert_eq!(p.vel, [0.0, 0.0]);
        }
    }

    #[test]
    fn tick_clears_then_draws_in_collection_order() {
        let viewport = Viewport::new(100, 100);
        let mut field = ParticleField::from_particles(
            viewport,
            vec![
                Particle::new(10.0, 10.0, 1.0, 0.0, 0.5, Color::AMBIENT),
                Particle::new(20.0, 20.0, 0.0, 1.0, 0.75, Color::AMBIENT),
            ],
        );
        let mut surface = RecordingSurface::default();
        field.tick(&mut surface).unwrap();

        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Clear(viewport),
                DrawCall::Circle { x: 11.0, y: 10.0, radius: 0.5, color: Color::AMBIENT },
                DrawCall::Circle { x: 20.0, y: 21.0, radius: 0.75, color: Color::AMBIENT },
            ]
        );
    }

    #[test]
    fn empty_field_only_clears() {
        let config = BackgroundConfig {
            count: 0,
            ..BackgroundConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let mut field = ParticleField::generate(&config, Viewport::new(10, 10), &mut rng);
        let mut surface = RecordingSurface::default();
        for _ in 0..3 {
            field.tick(&mut surface).unwrap();
        }
        assert!(field.particles().is_empty());
        assert_eq!(surface.clears(), 3);
        assert_eq!(surface.circles(), 0);
    }

    #[test]
    fn resize_keeps_particles_and_bounds_them_on_next_tick() {
        let mut field = seeded_field(9, Viewport::new(800, 600));
        let before = field.particles().to_vec();
        field.resize(Viewport::new(200, 100));
        assert_eq!(field.particles(), &before[..]);

        let mut surface = RecordingSurface::default();
        field.tick(&mut surface).unwrap();
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 200.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 100.0);
        }
    }
}
