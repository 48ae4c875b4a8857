use crate::controller::Conn;

/// Tahoe restarts from slow start on every loss signal. There is no fast
/// recovery; the flag exists so the recovery state stays observable through
/// the same accessor as Reno's.
#[derive(Debug, Default, Copy, Clone)]
pub(crate) struct Tahoe {
    pub(crate) in_fast_recovery: bool,
}

impl Tahoe {
    pub(crate) fn on_ack(&mut self, conn: &mut Conn) {
        if conn.at_boundary() {
            conn.cwnd += 1.0;
        }
    }

    pub(crate) fn on_dup_ack(&mut self, conn: &mut Conn) {
        if conn.at_boundary() {
            conn.nr_retx += 1;
            conn.ssthresh = (conn.cwnd / 2.0).max(1.0);
            conn.cwnd = 1.0;
            self.in_fast_recovery = false;
        }
    }

    pub(crate) fn on_loss(&mut self, conn: &mut Conn) {
        conn.nr_retx += 1;
    }

    pub(crate) fn on_timeout(&mut self, conn: &mut Conn) {
        conn.nr_retx += 1;
        conn.cwnd = 1.0;
    }
}
