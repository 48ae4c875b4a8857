use std::path::Path;

use crate::{
    metrics,
    sampler::{Sampler, UniformSampler},
    simulation::{Outcome, Simulation},
    variants::Variant,
    Record,
};

#[derive(Debug, typed_builder::TypedBuilder)]
pub struct Config {
    variants: Vec<Variant>,
    loss_probabilities: Vec<f64>,
    nr_packets: u64,
    /// Wall-clock duration attributed to each run, in seconds.
    duration_secs: f64,
    #[builder(default, setter(strip_option))]
    seed: Option<u64>,
}

/// Sweeps every configured variant across every loss probability and derives
/// one record per run. A single sampler is threaded through the whole sweep,
/// so a seeded configuration reproduces exactly.
pub fn run(cfg: Config) -> Vec<Record> {
    let mut clk = match cfg.seed {
        Some(seed) => UniformSampler::seeded(seed),
        None => UniformSampler::from_entropy(),
    };
    let mut records = Vec::with_capacity(cfg.loss_probabilities.len() * cfg.variants.len());
    for &loss_probability in &cfg.loss_probabilities {
        for &variant in &cfg.variants {
            let sim = Simulation::builder()
                .variant(variant)
                .loss_probability(loss_probability)
                .nr_packets(cfg.nr_packets)
                .build();
            let outcome = sim.run(&mut clk);
            records.push(record(
                loss_probability,
                &outcome,
                cfg.duration_secs,
                &mut clk,
            ));
        }
    }
    records
}

fn record(
    loss_probability: f64,
    outcome: &Outcome,
    duration_secs: f64,
    clk: &mut impl Sampler,
) -> Record {
    let controller = &outcome.controller;
    Record {
        variant: controller.variant(),
        loss_probability,
        nr_sent: controller.packets_sent(),
        nr_lost: outcome.nr_lost,
        nr_retransmissions: controller.retransmissions(),
        throughput: metrics::throughput(controller.packets_sent(), outcome.nr_lost, duration_secs),
        goodput: metrics::goodput(controller.packets_sent(), outcome.nr_lost),
        avg_delay: metrics::average_delay(controller, clk),
        delay_jitter: metrics::delay_jitter(controller, clk),
    }
}

/// Reads a loss-probability sweep from a JSON file.
pub fn read_sweep(path: impl AsRef<Path>) -> Result<Vec<f64>, Error> {
    let s = std::fs::read_to_string(path)?;
    let sweep: Vec<f64> = serde_json::from_str(&s)?;
    if let Some(&p) = sweep.iter().find(|p| !(0.0..=1.0).contains(*p)) {
        return Err(Error::InvalidProbability(p));
    }
    Ok(sweep)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("loss probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    #[error("serde error")]
    Serde(#[from] serde_json::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}
