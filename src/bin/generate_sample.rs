use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use tvc_viewer::data::model::{Dataset, Record};
use tvc_viewer::data::writer;

/// Write a synthetic TIME/VALUE/COLOR file to open in the viewer.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Output path.
    #[arg(short, long, default_value = "data.txt")]
    output: PathBuf,

    /// Number of data lines after the header.
    #[arg(short = 'n', long, default_value_t = 500)]
    records: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Damped oscillation plus noise; the colour weight is the local envelope.
fn generate(records: usize, noise: &mut Noise) -> Dataset {
    const DT: f64 = 0.02;
    const TAU: f64 = 4.0;
    const FREQ: f64 = 0.8;

    (0..records)
        .map(|i| {
            let t = i as f64 * DT;
            let envelope = (-t / TAU).exp();
            let signal = 2.0 * envelope * (2.0 * std::f64::consts::PI * FREQ * t).sin();
            Record::new(t, signal + noise.gauss(0.0, 0.05), envelope)
        })
        .collect()
}

/// Reproducible noise: splitmix64 uniforms, summed twelve at a time for
/// an approximately normal sample.
struct Noise(u64);

impl Noise {
    fn uniform(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        (z ^ (z >> 31)) as f64 / u64::MAX as f64
    }

    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = (0..12).map(|_| self.uniform()).sum::<f64>() - 6.0;
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dataset = generate(args.records, &mut Noise(args.seed));
    writer::write_file(&args.output, &dataset)?;

    println!(
        "Wrote {} records to {}",
        dataset.len(),
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_file() {
        let a = generate(200, &mut Noise(7));
        let b = generate(200, &mut Noise(7));
        assert_eq!(a, b);
        assert_ne!(a, generate(200, &mut Noise(8)));
    }

    #[test]
    fn noise_is_centred_and_bounded() {
        let mut noise = Noise(42);
        let samples: Vec<f64> = (0..5000).map(|_| noise.gauss(0.0, 1.0)).collect();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!(mean.abs() < 0.1, "mean {mean}");
        // A sum of twelve uniforms never leaves [-6, 6].
        assert!(samples.iter().all(|z| z.abs() <= 6.0));
    }

    #[test]
    fn colour_weight_is_the_envelope() {
        let ds = generate(3, &mut Noise(1));
        assert_eq!(ds.time(), &[0.0, 0.02, 0.04]);
        assert_eq!(ds.color()[0], 1.0);
        assert!(ds.color().windows(2).all(|w| w[1] < w[0]));
    }
}
