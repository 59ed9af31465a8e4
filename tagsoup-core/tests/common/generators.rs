//! Stochastic generators for test variations
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("TAGSOUP_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Poisson-like count (simplified)
    pub fn poisson(&mut self, lambda: f64) -> usize {
        let l = (-lambda).exp();
        let mut k = 0;
        let mut p = 1.0;
        loop {
            k += 1;
            p *= self.rng.gen::<f64>();
            if p <= l {
                break;
            }
        }
        k - 1
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Split `input` at random char boundaries. Empty chunks are allowed.
    pub fn chunks<'a>(&mut self, input: &'a str) -> Vec<&'a str> {
        let cuts = self.poisson(3.0);
        let mut points: Vec<usize> = (0..cuts)
            .map(|_| {
                let mut at = self.rng.gen_range(0..=input.len());
                while !input.is_char_boundary(at) {
                    at -= 1;
                }
                at
            })
            .collect();
        points.sort_unstable();

        let mut chunks = Vec::with_capacity(points.len() + 1);
        let mut start = 0;
        for at in points {
            chunks.push(&input[start..at]);
            start = at;
        }
        chunks.push(&input[start..]);
        chunks
    }

    /// Random lower-case tag name
    pub fn name(&mut self) -> String {
        let len = 1 + self.geometric(0.6);
        let chars = b"abcdefghijklmnopqrstuvwxyz0123456789";
        let mut name = String::with_capacity(len);
        name.push(self.rng.gen_range(b'a'..=b'z') as char);
        for _ in 1..len {
            name.push(chars[self.rng.gen_range(0..chars.len())] as char);
        }
        name
    }

    /// Random fragment of loosely well-formed markup
    pub fn markup_fragment(&mut self) -> String {
        let name = self.name();
        let mut out = format!("<{}", name);
        if self.chance(0.4) {
            out.push_str(&format!(" {}=\"{}\"", self.name(), self.name()));
        }
        if self.chance(0.2) {
            out.push_str(" disabled");
        }
        out.push('>');
        if self.chance(0.6) {
            out.push_str(" some  text\n here ");
        }
        if self.chance(0.2) {
            out.push_str("<!-- note -->");
        }
        out.push_str(&format!("</{}>", name));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let mut g1 = Gen::new(42);
        let mut g2 = Gen::new(42);

        for _ in 0..10 {
            assert_eq!(g1.name(), g2.name());
            assert_eq!(g1.geometric(0.9), g2.geometric(0.9));
        }
    }

    #[test]
    fn test_chunks_rejoin() {
        let mut gen = Gen::new(7);
        let input = "<p>héllo wörld</p>";
        for _ in 0..50 {
            assert_eq!(gen.chunks(input).concat(), input);
        }
    }
}
