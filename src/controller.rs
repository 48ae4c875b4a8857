use delegate::delegate;
use rustc_hash::FxHashMap;

use crate::{
    ident::SeqNum,
    sampler::Sampler,
    time::{Delay, Timestamp},
    variants::{cubic::Cubic, reno::Reno, tahoe::Tahoe, Variant},
};

/// Connection state shared by every variant.
#[derive(Debug, Clone)]
pub(crate) struct Conn {
    /// The congestion window, in packets. Never drops below one packet.
    pub(crate) cwnd: f64,
    /// The slow-start threshold. Starts unbounded and only ever decreases.
    pub(crate) ssthresh: f64,
    pub(crate) nr_sent: u64,
    pub(crate) nr_acked: u64,
    pub(crate) nr_retx: u64,
    /// Send time per sequence number; append-only for the lifetime of the
    /// connection.
    send_times: FxHashMap<SeqNum, Timestamp>,
}

impl Conn {
    pub(crate) fn new() -> Self {
        Self {
            cwnd: 1.0,
            ssthresh: f64::INFINITY,
            nr_sent: 0,
            nr_acked: 0,
            nr_retx: 0,
            send_times: FxHashMap::default(),
        }
    }

    /// Whether the acknowledgment count sits on a window growth boundary.
    /// The window is a real number, so this is a floating-point modulo.
    pub(crate) fn at_boundary(&self) -> bool {
        self.nr_acked as f64 % self.cwnd == 0.0
    }

    fn send(&mut self, clk: &mut impl Sampler) {
        self.nr_sent += 1;
        self.send_times.insert(SeqNum::new(self.nr_sent), clk.now());
    }

    fn delay(&self, seq: SeqNum, clk: &mut impl Sampler) -> Delay {
        match self.send_times.get(&seq) {
            // A send time of exactly zero reads as "no timing data"
            Some(&sent) if sent != Timestamp::ZERO => clk.now() - sent,
            _ => Delay::ZERO,
        }
    }

    fn cwnd(&self) -> f64 {
        self.cwnd
    }

    fn ssthresh(&self) -> f64 {
        self.ssthresh
    }

    fn packets_sent(&self) -> u64 {
        self.nr_sent
    }

    fn packets_acked(&self) -> u64 {
        self.nr_acked
    }

    fn retransmissions(&self) -> u64 {
        self.nr_retx
    }
}

/// One simulated connection: the shared counters plus the state machine of
/// the selected variant.
///
/// A controller is created at the start of a run, mutated only by the event
/// operations below, and read by the metrics once the run completes. It is
/// not shared across runs and carries no synchronization.
#[derive(Debug, Clone)]
pub struct Controller {
    conn: Conn,
    state: VariantState,
}

#[derive(Debug, Clone)]
enum VariantState {
    Tahoe(Tahoe),
    Reno(Reno),
    Cubic(Cubic),
}

impl Controller {
    pub fn new(variant: Variant) -> Self {
        let state = match variant {
            Variant::Tahoe => VariantState::Tahoe(Tahoe::default()),
            Variant::Reno => VariantState::Reno(Reno::default()),
            Variant::Cubic => VariantState::Cubic(Cubic::default()),
        };
        Self {
            conn: Conn::new(),
            state,
        }
    }

    /// A Cubic controller with tuned growth and reduction factors.
    pub fn with_cubic(cubic: Cubic) -> Self {
        Self {
            conn: Conn::new(),
            state: VariantState::Cubic(cubic),
        }
    }

    pub fn variant(&self) -> Variant {
        match self.state {
            VariantState::Tahoe(_) => Variant::Tahoe,
            VariantState::Reno(_) => Variant::Reno,
            VariantState::Cubic(_) => Variant::Cubic,
        }
    }

    /// Assigns the next sequence number and records its send time.
    pub fn send(&mut self, clk: &mut impl Sampler) {
        self.conn.send(clk);
    }

    /// Handles a new acknowledgment.
    pub fn acknowledge(&mut self, clk: &mut impl Sampler) {
        self.conn.nr_acked += 1;
        match &mut self.state {
            VariantState::Tahoe(v) => v.on_ack(&mut self.conn),
            VariantState::Reno(v) => v.on_ack(&mut self.conn),
            VariantState::Cubic(v) => v.on_ack(&mut self.conn, clk),
        }
    }

    /// Handles a duplicate acknowledgment.
    pub fn on_duplicate_ack(&mut self) {
        match &mut self.state {
            VariantState::Tahoe(v) => v.on_dup_ack(&mut self.conn),
            VariantState::Reno(v) => v.on_dup_ack(&mut self.conn),
            VariantState::Cubic(v) => v.on_dup_ack(&mut self.conn),
        }
    }

    /// Handles a detected packet loss.
    pub fn on_loss(&mut self, clk: &mut impl Sampler) {
        match &mut self.state {
            VariantState::Tahoe(v) => v.on_loss(&mut self.conn),
            VariantState::Reno(v) => v.on_loss(&mut self.conn),
            VariantState::Cubic(v) => v.on_loss(&mut self.conn, clk),
        }
    }

    /// Handles a retransmission timeout.
    pub fn on_timeout(&mut self, clk: &mut impl Sampler) {
        match &mut self.state {
            VariantState::Tahoe(v) => v.on_timeout(&mut self.conn),
            VariantState::Reno(v) => v.on_timeout(&mut self.conn),
            VariantState::Cubic(v) => v.on_timeout(&mut self.conn, clk),
        }
    }

    /// The synthetic one-way delay of the given sequence number, or zero if
    /// no send time was recorded for it. The value can be negative because
    /// the clock samples on the two ends are independent draws.
    pub fn delay(&self, seq: SeqNum, clk: &mut impl Sampler) -> Delay {
        self.conn.delay(seq, clk)
    }

    /// Whether the controller is in fast recovery. Always false for Cubic,
    /// whose duplicate-ack path only counts retransmissions.
    pub fn in_fast_recovery(&self) -> bool {
        match self.state {
            VariantState::Tahoe(v) => v.in_fast_recovery,
            VariantState::Reno(v) => v.in_fast_recovery,
            VariantState::Cubic(_) => false,
        }
    }

    delegate! {
        to self.conn {
            pub fn cwnd(&self) -> f64;
            pub fn ssthresh(&self) -> f64;
            pub fn packets_sent(&self) -> u64;
            pub fn packets_acked(&self) -> u64;
            pub fn retransmissions(&self) -> u64;
        }
    }
}
