//! Writes a deterministic synthetic medal table so the dashboard can be
//! demoed without the real dataset. A handful of rows are deliberately
//! incomplete or belong to non-country teams; the loader must drop them.

const COUNTRIES: &[&str] = &[
    "United States", "Germany", "Norway", "Italy", "Canada", "Sweden",
    "France", "Japan", "Australia", "Netherlands", "South Korea", "Kenya",
];

const SPORTS: &[&str] = &[
    "Athletics", "Swimming", "Gymnastics", "Rowing", "Fencing", "Cycling",
    "Wrestling", "Boxing",
];

const MEDALS: &[&str] = &["Gold", "Silver", "Bronze"];

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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "sample_olympics.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Team", "Year", "Sport", "Medal"])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for year in (1960..=2020).step_by(4) {
        let year_text = year.to_string();

        for sport in SPORTS {
            // One to three medal events per sport and games.
            let events = 1 + (rng.next_u64() % 3);
            for _ in 0..events {
                for medal in MEDALS {
                    let team = rng.pick(COUNTRIES);
                    writer
                        .write_record([team, year_text.as_str(), sport, medal])
                        .expect("Failed to write row");
                    rows += 1;
                }
            }
        }

        // Rows the cleaner must drop: a non-country team and a missing medal.
        if year % 12 == 0 {
            writer
                .write_record(["Unified Team", year_text.as_str(), "Rowing", "Gold"])
                .expect("Failed to write row");
            writer
                .write_record(["Norway", year_text.as_str(), "Rowing", ""])
                .expect("Failed to write row");
            rows += 2;
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} rows to {output_path}");
}
