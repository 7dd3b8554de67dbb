// Simple particle struct to keep track of individual position, velocity, size and color

use crate::color::Color;
use crate::viewport::Viewport;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
            color,
        }
    }

    /// Advances the particle by one frame tick, reflecting off the viewport edges.
    ///
    /// A component whose next step would leave `[0, bound]` is turned back toward
    /// the inside before moving, so the position stays within the viewport after
    /// every step. Particles left outside by a shrinking viewport are turned inward
    /// and land on the edge.
    pub fn advance(&mut self, viewport: Viewport) {
        let bounds = viewport.bounds();
        let next = vecmath::vec2_add(self.pos, self.vel);
        for axis in 0..2 {
            if next[axis] < 0.0 {
                self.vel[axis] = self.vel[axis].abs();
            } else if next[axis] > bounds[axis] {
                self.vel[axis] = -self.vel[axis].abs();
            }
        }
        let moved = vecmath::vec2_add(self.pos, self.vel);
        for axis in 0..2 {
            self.pos[axis] = moved[axis].max(0.0).min(bounds[axis]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f64, y: f64, dx: f64, dy: f64) -> Particle {
        Particle::new(x, y, dx, dy, 1.0, Color::AMBIENT)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn free_particle_moves_by_its_velocity() {
        let mut p = particle(10.0, 10.0, 0.1, -0.1);
        p.advance(Viewport::new(100, 100));
        assert_close(p.pos[0], 10.1);
        assert_close(p.pos[1], 9.9);
        assert_eq!(p.vel, [0.1, -0.1]);
    }

    #[test]
    fn particle_on_right_edge_bounces_back() {
        let mut p = particle(100.0, 50.0, 0.3, 0.0);
        p.advance(Viewport::new(100, 100));
        assert_eq!(p.vel[0], -0.3);
        assert_close(p.pos[0], 100.0 - 0.3);
    }

    #[test]
    fn particle_near_top_edge_bounces_back() {
        let mut p = particle(50.0, 0.05, 0.0, -0.1);
        p.advance(Viewport::new(100, 100));
        assert_eq!(p.vel[1], 0.1);
        assert_close(p.pos[1], 0.15);
    }

    #[test]
    fn particle_outside_shrunk_viewport_is_turned_inward() {
        let mut p = particle(150.0, 20.0, 0.1, 0.0);
        p.advance(Viewport::new(100, 100));
        assert_eq!(p.vel[0], -0.1);
        assert_eq!(p.pos[0], 100.0);

        p.advance(Viewport::new(100, 100));
        assert_close(p.pos[0], 99.9);
    }

    #[test]
    fn zero_viewport_pins_particle_to_origin() {
        let mut p = particle(0.0, 0.0, 0.1, -0.05);
        for _ in 0..5 {
            p.advance(Viewport::new(0, 0));
            assert_eq!(p.pos, [0.0, 0.0]);
        }
    }

    #[test]
    fn position_stays_in_bounds_over_many_steps() {
        let viewport = Viewport::new(3, 2);
        let mut p = particle(1.5, 1.0, 0.7, -0.45);
        for _ in 0..1000 {
            p.advance(viewport);
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 3.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 2.0);
        }
    }
}
