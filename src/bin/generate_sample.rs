use anyhow::{Context, Result};
use serde_json::{json, Map};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let cell_count = 48;
    let mut coverage_map = Map::new();
    let mut coverage_stability = Map::new();

    for i in 0..cell_count {
        // Resolution-5 style hex cell identifier.
        let cell = format!("85{:06x}fffffff", rng.next_u64() & 0xff_ffff);

        // 24 hourly pass counts around a per-cell base rate, then the
        // upstream derivation: average = sum/24, stability = 1/(variance+1).
        let base = (rng.next_f64() * 4.0).max(0.1);
        let hourly: Vec<f64> = (0..24)
            .map(|_| (base + rng.gauss(0.0, 0.8)).max(0.0))
            .collect();

        let average = hourly.iter().sum::<f64>() / hourly.len() as f64;
        let variance = hourly
            .iter()
            .map(|c| (c - average).powi(2))
            .sum::<f64>()
            / hourly.len() as f64;
        let stability = 1.0 / (variance + 1.0);

        coverage_map.insert(cell.clone(), json!(round3(average)));

        // Leave some cells without a stability entry so the viewer's
        // default-to-1.0 path shows up in the sample.
        if i % 7 != 3 {
            coverage_stability.insert(cell, json!(round3(stability)));
        }
    }

    let doc = json!({
        "coverageMap": coverage_map,
        "coverageStability": coverage_stability,
    });

    let output_path = "coverage_data.json";
    let text = serde_json::to_string_pretty(&doc).context("serializing document")?;
    std::fs::write(output_path, text).with_context(|| format!("writing {output_path}"))?;

    println!(
        "Wrote {} cells ({} with stability) to {output_path}",
        doc["coverageMap"].as_object().map_or(0, |m| m.len()),
        doc["coverageStability"].as_object().map_or(0, |m| m.len()),
    );
    Ok(())
}
