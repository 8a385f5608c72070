use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A synthetic 0/1 knapsack instance: one weight and one value per item.
///
/// Generated once from a fixed seed and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub weights: Vec<u32>,
    pub values: Vec<u32>,
}

impl Instance {
    /// Deterministically generate `n` items from `seed`.
    ///
    /// Weights are drawn uniformly from `[1, 10)` and values from `[10, 100)`,
    /// weights first, off a single seeded PRNG stream. The same `(n, seed)`
    /// always produces the same instance.
    pub fn generate(n: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);

        let weights = (0..n).map(|_| rng.random_range(1..10)).collect();
        let values = (0..n).map(|_| rng.random_range(10..100)).collect();

        Self { weights, values }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0)]
    #[test_case(42)]
    #[test_case(u64::MAX)]
    fn identical_seeds_give_identical_instances(seed: u64) {
        let a = Instance::generate(100, seed);
        let b = Instance::generate(100, seed);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_give_different_instances() {
        let a = Instance::generate(100, 42);
        let b = Instance::generate(100, 43);
        assert_ne!(a, b);
    }

    #[test]
    fn generated_items_stay_in_range() {
        let instance = Instance::generate(1000, 42);
        assert_eq!(instance.len(), 1000);
        assert!(instance.weights.iter().all(|&w| (1..10).contains(&w)));
        assert!(instance.values.iter().all(|&v| (10..100).contains(&v)));
    }

    #[test]
    fn zero_items_yields_empty_instance() {
        let instance = Instance::generate(0, 42);
        assert!(instance.is_empty());
        assert!(instance.values.is_empty());
    }
}
