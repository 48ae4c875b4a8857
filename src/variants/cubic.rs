use crate::{controller::Conn, sampler::Sampler, time::Timestamp};

/// Cubic growth and reduction factors, plus the timestamp of the most recent
/// congestion event feeding the polynomial growth term.
#[derive(Debug, Copy, Clone, typed_builder::TypedBuilder)]
pub struct Cubic {
    /// Scale factor of the polynomial growth term.
    #[builder(default = 0.2)]
    beta: f64,
    /// Multiplier applied to the slow-start threshold on loss and timeout.
    #[builder(default = 0.5)]
    reduction_factor: f64,
    /// Multiplier applied to the window on loss.
    #[builder(default = 0.7)]
    fast_convergence: f64,
    #[builder(default, setter(skip))]
    last_congestion_event: Timestamp,
}

impl Default for Cubic {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Cubic {
    pub(crate) fn on_ack(&mut self, conn: &mut Conn, clk: &mut impl Sampler) {
        if conn.nr_acked as f64 <= conn.ssthresh {
            // Slow start
            conn.cwnd *= 2.0;
        } else {
            let elapsed = (clk.now() - self.last_congestion_event).into_f64();
            conn.cwnd += 3.0 * self.beta * elapsed.powi(2) / conn.cwnd;
        }
        self.last_congestion_event = clk.now();
    }

    pub(crate) fn on_dup_ack(&mut self, conn: &mut Conn) {
        conn.nr_retx += 1;
    }

    pub(crate) fn on_loss(&mut self, conn: &mut Conn, clk: &mut impl Sampler) {
        conn.nr_retx += 1;
        conn.ssthresh *= self.reduction_factor;
        conn.cwnd = (conn.cwnd * self.fast_convergence).max(1.0);
        self.last_congestion_event = clk.now();
    }

    pub(crate) fn on_timeout(&mut self, conn: &mut Conn, clk: &mut impl Sampler) {
        conn.nr_retx += 1;
        conn.ssthresh *= self.reduction_factor;
        conn.cwnd = 1.0;
        self.last_congestion_event = clk.now();
    }
}
