//! Particle set generation

use glam::Vec3;
use rand::Rng;

/// Fixed, immutable collection of particle positions.
///
/// Each coordinate is drawn uniformly from `[-spread / 2, spread / 2)`.
/// The set never changes after generation; the mesh that owns it only
/// carries a rotation transform.
#[derive(Clone, Debug)]
pub struct ParticleSet {
    positions: Box<[Vec3]>,
}

impl ParticleSet {
    pub fn generate<R: Rng + ?Sized>(count: usize, spread: f32, rng: &mut R) -> Self {
        let mut coord = || (rng.gen::<f32>() - 0.5) * spread;
        let positions = (0..count)
            .map(|_| Vec3::new(coord(), coord(), coord()))
            .collect();
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_exact_count_within_bounds() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = ParticleSet::generate(5000, 5.0, &mut rng);
            assert_eq!(set.len(), 5000);
            for p in set.positions() {
                for c in p.to_array() {
                    assert!((-2.5..2.5).contains(&c), "seed {seed}: {c} out of range");
                }
            }
        }
    }

    #[test]
    fn same_seed_same_set() {
        let a = ParticleSet::generate(100, 5.0, &mut StdRng::seed_from_u64(7));
        let b = ParticleSet::generate(100, 5.0, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn different_draws_differ() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = ParticleSet::generate(100, 5.0, &mut rng);
        let b = ParticleSet::generate(100, 5.0, &mut rng);
        assert_ne!(a.positions(), b.positions());
    }

    #[test]
    fn spread_scales_bounds() {
        let set = ParticleSet::generate(1000, 1.0, &mut StdRng::seed_from_u64(3));
        assert!(set
            .positions()
            .iter()
            .all(|p| p.abs().max_element() <= 0.5));
    }
}
