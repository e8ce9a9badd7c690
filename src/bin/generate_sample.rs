//! Generate a deterministic sample CSV for trying out the explorer:
//! `cargo run --bin generate_sample -- sample.csv`

use std::env;

use anyhow::{Context, Result};

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

    /// Uniform float in [0, 1).
    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Gaussian via Box-Muller.
    fn gauss(&mut self, mu: f64, sigma: f64) -> f64 {
        let u1 = self.uniform().max(1e-12);
        let u2 = self.uniform();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mu + sigma * z
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const REGIONS: [&str; 4] = ["North", "South", "East", "West"];
const PRODUCTS: [&str; 5] = ["Widget", "Gadget", "Sprocket", "Gizmo", "Doohickey"];

fn main() -> Result<()> {
    let path = env::args().nth(1).unwrap_or_else(|| "sample.csv".to_string());
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {path}"))?;
    writer.write_record([
        "order_date",
        "region",
        "product",
        "units",
        "unit_price",
        "revenue",
    ])?;

    for i in 0..500 {
        // Spread orders over 2024; a few rows get an unparseable date so the
        // coercion-to-null path shows up in the missing-values view.
        let day = (rng.next_u64() % 365) as i64;
        let date = if i % 61 == 0 {
            "unknown".to_string()
        } else {
            let month = 1 + day / 31;
            let dom = 1 + day % 28;
            format!("2024-{month:02}-{dom:02}")
        };

        let units = 1 + (rng.next_u64() % 40) as i64;
        let unit_price = (rng.gauss(25.0, 6.0).max(1.0) * 100.0).round() / 100.0;
        // Revenue tracks units × price with noise, so the correlation
        // heatmap has structure to show.
        let revenue = (units as f64 * unit_price + rng.gauss(0.0, 15.0)).max(0.0);

        // Sprinkle missing cells.
        let units_field = if i % 37 == 0 {
            String::new()
        } else {
            units.to_string()
        };

        writer.write_record([
            date.as_str(),
            *rng.pick(&REGIONS),
            *rng.pick(&PRODUCTS),
            units_field.as_str(),
            &format!("{unit_price:.2}"),
            &format!("{revenue:.2}"),
        ])?;
    }

    writer.flush()?;
    println!("Wrote 500 rows to {path}");
    Ok(())
}
