use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)` used by the sampler.
///
/// Injected into [`LanguageModel`](super::generator::LanguageModel) so that
/// tests can replace it with a scripted or deterministic implementation.
pub trait UniformSource {
	/// Returns the next value, uniformly distributed in `[0, 1)`.
	fn next_uniform(&mut self) -> f64;
}

/// Default random source backed by `StdRng`.
///
/// - `seeded(seed)`: reproducible sequence for a given seed
/// - `from_entropy()`: seeded from the operating system
#[derive(Clone, Debug)]
pub struct RandomSource {
	rng: StdRng,
	seed: Option<u64>,
}

impl RandomSource {
	/// Creates a deterministic source.
	pub fn seeded(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed), seed: Some(seed) }
	}

	/// Creates a source seeded with fresh entropy.
	pub fn from_entropy() -> Self {
		Self { rng: StdRng::from_os_rng(), seed: None }
	}

	/// The seed this source was created with, if any.
	pub fn seed(&self) -> Option<u64> {
		self.seed
	}
}

impl UniformSource for RandomSource {
	fn next_uniform(&mut self) -> f64 {
		// `random::<f64>()` samples the half-open interval [0, 1)
		self.rng.random::<f64>()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_seed_same_sequence() {
		let mut a = RandomSource::seeded(42);
		let mut b = RandomSource::seeded(42);
		for _ in 0..100 {
			assert_eq!(a.next_uniform().to_bits(), b.next_uniform().to_bits());
		}
	}

	#[test]
	fn draws_stay_in_unit_interval() {
		let mut source = RandomSource::from_entropy();
		assert_eq!(source.seed(), None);
		for _ in 0..10_000 {
			let r = source.next_uniform();
			assert!((0.0..1.0).contains(&r), "draw {} out of range", r);
		}
	}
}
