//! Explosion sparks.  Purely decorative: nothing collides with a particle.

use rand::Rng;

use crate::config::{PARTICLE_BURST, PARTICLE_LIFETIME, PARTICLE_MAX_VELOCITY};
use crate::entities::Particle;

/// `PARTICLE_BURST` fresh particles at `center`, each with both velocity
/// components drawn independently from `[-3, 3]`.
pub fn spawn_burst(center: (f32, f32), rng: &mut impl Rng) -> Vec<Particle> {
    (0..PARTICLE_BURST)
        .map(|_| Particle {
            x: center.0,
            y: center.1,
            vx: rng.gen_range(-PARTICLE_MAX_VELOCITY..=PARTICLE_MAX_VELOCITY),
            vy: rng.gen_range(-PARTICLE_MAX_VELOCITY..=PARTICLE_MAX_VELOCITY),
            lifetime: PARTICLE_LIFETIME,
        })
        .collect()
}

/// Step every particle one frame and drop the ones that just expired, so an
/// expired particle is never drawn.
pub fn advance(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.x += p.vx;
        p.y += p.vy;
        p.lifetime = p.lifetime.saturating_sub(1);
    }
    particles.retain(|p| p.lifetime > 0);
}
