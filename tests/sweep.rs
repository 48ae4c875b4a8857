use anyhow::Result;

use ccsim::{
    driver::{self, Config},
    sampler::UniformSampler,
    Simulation, Variant,
};

#[test]
fn tahoe_lossless_run_grows_additively() {
    let mut clk = UniformSampler::seeded(7);
    let sim = Simulation::builder()
        .variant(Variant::Tahoe)
        .loss_probability(0.0)
        .nr_packets(10)
        .build();
    let outcome = sim.run(&mut clk);
    let controller = &outcome.controller;
    assert_eq!(outcome.nr_lost, 0);
    assert_eq!(controller.packets_sent(), 10);
    assert_eq!(controller.packets_acked(), 10);
    assert_eq!(controller.retransmissions(), 0);
    // Every acknowledgment lands on the growth boundary, so the window
    // walks 1 -> 2 -> ... -> 11 over ten acks
    assert_eq!(controller.cwnd(), 11.0);
    assert!(!controller.in_fast_recovery());
}

#[test]
fn certain_loss_drops_every_packet() {
    for variant in Variant::ALL {
        let mut clk = UniformSampler::seeded(7);
        let sim = Simulation::builder()
            .variant(variant)
            .loss_probability(1.0)
            .nr_packets(5)
            .build();
        let outcome = sim.run(&mut clk);
        let controller = &outcome.controller;
        assert_eq!(outcome.nr_lost, 5);
        assert_eq!(controller.packets_sent(), 5);
        assert_eq!(controller.packets_acked(), 0);
        assert_eq!(controller.retransmissions(), 5);
        assert!(controller.cwnd() >= 1.0);
    }
}

#[test]
fn sweep_produces_one_record_per_cell() {
    let cfg = Config::builder()
        .variants(Variant::ALL.to_vec())
        .loss_probabilities(vec![0.1, 0.5, 0.9])
        .nr_packets(200)
        .duration_secs(10.0)
        .seed(42)
        .build();
    let records = driver::run(cfg);
    assert_eq!(records.len(), 9);
    for record in &records {
        assert_eq!(record.nr_sent, 200);
        assert!(record.nr_lost <= record.nr_sent);
        // The run loop only exercises the loss path, so every loss is
        // counted as exactly one retransmission
        assert_eq!(record.nr_retransmissions, record.nr_lost);
        let delivered = (record.nr_sent - record.nr_lost) as f64;
        assert!((record.goodput - delivered / record.nr_sent as f64).abs() < 1e-12);
        assert!((record.throughput - delivered / 10.0).abs() < 1e-12);
        assert!(record.avg_delay >= 0.0);
        assert!(record.delay_jitter >= 0.0);
    }
}

#[test]
fn seeded_sweeps_are_reproducible() {
    let cfg = || {
        Config::builder()
            .variants(vec![Variant::Reno, Variant::Cubic])
            .loss_probabilities(vec![0.2, 0.8])
            .nr_packets(100)
            .duration_secs(5.0)
            .seed(1234)
            .build()
    };
    let first = driver::run(cfg());
    let second = driver::run(cfg());
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.variant, b.variant);
        assert_eq!(a.loss_probability, b.loss_probability);
        assert_eq!(a.nr_lost, b.nr_lost);
        assert_eq!(a.nr_retransmissions, b.nr_retransmissions);
        assert_eq!(a.throughput, b.throughput);
        assert_eq!(a.goodput, b.goodput);
        assert_eq!(a.avg_delay, b.avg_delay);
        assert_eq!(a.delay_jitter, b.delay_jitter);
    }
}

#[test]
fn read_sweep_accepts_a_valid_probability_list() -> Result<()> {
    let path = std::env::temp_dir().join("ccsim-sweep-valid.json");
    std::fs::write(&path, "[0.1, 0.3, 0.5, 0.7, 0.9]")?;
    let sweep = driver::read_sweep(&path)?;
    assert_eq!(sweep, vec![0.1, 0.3, 0.5, 0.7, 0.9]);
    std::fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn read_sweep_rejects_out_of_range_probabilities() -> Result<()> {
    let path = std::env::temp_dir().join("ccsim-sweep-invalid.json");
    std::fs::write(&path, "[0.1, 1.5]")?;
    let err = driver::read_sweep(&path).unwrap_err();
    assert!(matches!(err, driver::Error::InvalidProbability(_)));
    std::fs::remove_file(&path)?;
    Ok(())
}
