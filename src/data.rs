use crate::variants::Variant;

/// The metrics derived from one run at one loss probability.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// The congestion-control variant under test.
    pub variant: Variant,
    /// The per-send drop probability of the run.
    pub loss_probability: f64,
    /// The number of packets sent.
    pub nr_sent: u64,
    /// The number of packets dropped by the loss process.
    pub nr_lost: u64,
    /// The number of retransmissions counted by the controller.
    pub nr_retransmissions: u64,
    /// Packets delivered per second of simulated time.
    pub throughput: f64,
    /// The fraction of sent packets that were delivered.
    pub goodput: f64,
    /// The mean non-negative per-packet delay.
    pub avg_delay: f64,
    /// The population variance of the per-packet delays.
    pub delay_jitter: f64,
}
