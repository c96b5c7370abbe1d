use crate::utils::sleep;
use dioxus::prelude::*;
use rand::Rng;
use std::time::Duration;

const PARTICLE_COUNT: usize = 80;
const FIELD_WIDTH: f64 = 1600.0;
const FIELD_HEIGHT: f64 = 900.0;
const MAX_RADIUS: f64 = 3.0;
const SPEED: f64 = 2.0;
const LINK_DISTANCE: f64 = 150.0;
const LINK_OPACITY: f64 = 0.4;
const PARTICLE_COLOR: &str = "#00BFFF";
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// A line between two particles that are close enough, faded by distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Random positions, sizes and headings across a `width` x `height` field.
    pub fn scatter<R: Rng + ?Sized>(rng: &mut R, count: usize, width: f64, height: f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..width),
                y: rng.gen_range(0.0..height),
                vx: rng.gen_range(-0.5..0.5) * SPEED,
                vy: rng.gen_range(-0.5..0.5) * SPEED,
                radius: rng.gen_range(0.5..=MAX_RADIUS),
            })
            .collect();
        Self::from_particles(particles, width, height)
    }

    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance one frame. A particle that fully leaves an edge comes back in on the opposite one.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x - p.radius > self.width {
                p.x = -p.radius;
            } else if p.x + p.radius < 0.0 {
                p.x = self.width + p.radius;
            }
            if p.y - p.radius > self.height {
                p.y = -p.radius;
            } else if p.y + p.radius < 0.0 {
                p.y = self.height + p.radius;
            }
        }
    }

    pub fn links(&self, max_distance: f64) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance <= max_distance {
                    links.push(Link {
                        from: i,
                        to: j,
                        opacity: LINK_OPACITY * (1.0 - distance / max_distance),
                    });
                }
            }
        }
        links
    }
}

/// Drifting, linked dots behind the page content
#[component]
pub fn ParticleBackground() -> Element {
    let mut field = use_signal(|| {
        ParticleField::scatter(
            &mut rand::thread_rng(),
            PARTICLE_COUNT,
            FIELD_WIDTH,
            FIELD_HEIGHT,
        )
    });

    use_future(move || async move {
        loop {
            sleep(FRAME_INTERVAL).await;
            field.with_mut(|field| field.step());
        }
    });

    let field = field.read();
    let particles = field.particles();
    let links = field.links(LINK_DISTANCE);
    let view_box = format!("0 0 {FIELD_WIDTH} {FIELD_HEIGHT}");

    rsx! {
        svg {
            id: "particles-js",
            class: "particle-background",
            view_box: "{view_box}",
            preserve_aspect_ratio: "xMidYMid slice",
            for link in links.iter() {
                line {
                    x1: particles[link.from].x,
                    y1: particles[link.from].y,
                    x2: particles[link.to].x,
                    y2: particles[link.to].y,
                    stroke: PARTICLE_COLOR,
                    stroke_opacity: link.opacity,
                    stroke_width: "1",
                }
            }
            for particle in particles.iter() {
                circle {
                    cx: particle.x,
                    cy: particle.y,
                    r: particle.radius,
                    fill: PARTICLE_COLOR,
                    fill_opacity: "0.5",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius: 1.0,
        }
    }

    #[test]
    fn scatter_stays_inside_the_field() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::scatter(&mut rng, PARTICLE_COUNT, 400.0, 300.0);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..400.0).contains(&p.x));
            assert!((0.0..300.0).contains(&p.y));
            assert!(p.radius > 0.0 && p.radius <= MAX_RADIUS);
            assert!(p.vx.abs() <= SPEED / 2.0 && p.vy.abs() <= SPEED / 2.0);
        }
    }

    #[test]
    fn particles_leaving_an_edge_reenter_opposite() {
        let mut field = ParticleField::from_particles(
            vec![
                Particle { vx: 2.0, ..still(100.5, 50.0) },
                Particle { vy: -2.0, ..still(50.0, -0.5) },
            ],
            100.0,
            80.0,
        );
        field.step();
        assert_eq!(field.particles()[0].x, -1.0);
        assert_eq!(field.particles()[1].y, 81.0);

        field.step();
        assert_eq!(field.particles()[0].x, 1.0);
        assert_eq!(field.particles()[1].y, 79.0);
    }

    #[test]
    fn links_fade_with_distance() {
        let field = ParticleField::from_particles(
            vec![still(0.0, 0.0), still(75.0, 0.0), still(400.0, 400.0)],
            500.0,
            500.0,
        );
        let links = field.links(LINK_DISTANCE);
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].from, links[0].to), (0, 1));
        assert!((links[0].opacity - LINK_OPACITY / 2.0).abs() < 1e-9);
    }
}
