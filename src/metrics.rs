//! Derived statistics over a completed run.

use crate::{controller::Controller, ident::SeqNum, sampler::Sampler};

/// Packets delivered per second of simulated wall-clock time.
pub fn throughput(nr_sent: u64, nr_lost: u64, duration_secs: f64) -> f64 {
    nr_sent.saturating_sub(nr_lost) as f64 / duration_secs
}

/// The fraction of sent packets that were delivered.
///
/// A run with zero sent packets is a caller error: fatal in debug builds,
/// zero in release builds.
pub fn goodput(nr_sent: u64, nr_lost: u64) -> f64 {
    debug_assert!(nr_sent > 0, "goodput of an empty run");
    if nr_sent == 0 {
        return 0.0;
    }
    nr_sent.saturating_sub(nr_lost) as f64 / nr_sent as f64
}

/// The mean of the non-negative per-packet delays, or zero when none exist.
///
/// Negative delays occur because the synthetic clock is not causally
/// ordered; they are excluded here but included in [`delay_jitter`]. The two
/// computations are kept separate on purpose.
pub fn average_delay(controller: &Controller, clk: &mut impl Sampler) -> f64 {
    let mut total = 0.0;
    let mut nr_valid = 0u64;
    for seq in 1..=controller.packets_acked() {
        let delay = controller.delay(SeqNum::new(seq), clk);
        if delay.is_non_negative() {
            total += delay.into_f64();
            nr_valid += 1;
        }
    }
    if nr_valid == 0 {
        return 0.0;
    }
    total / nr_valid as f64
}

/// The population variance of the full per-packet delay sequence, negative
/// delays included. Zero for a run with no acknowledgments.
pub fn delay_jitter(controller: &Controller, clk: &mut impl Sampler) -> f64 {
    let delays = (1..=controller.packets_acked())
        .map(|seq| controller.delay(SeqNum::new(seq), clk).into_f64())
        .collect::<Vec<_>>();
    if delays.is_empty() {
        return 0.0;
    }
    let mean = delays.iter().sum::<f64>() / delays.len() as f64;
    delays.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / delays.len() as f64
}
