use crate::controller::Conn;

/// Window penalty applied to every acknowledgment that misses the growth
/// boundary. Kept as a single named constant so the shrink rule can be tuned
/// without touching the rest of the state machine.
const ACK_PENALTY: f64 = 0.5;

/// Reno halves the window on the first duplicate-ack signal of an episode
/// and inflates it by one packet per duplicate ack while in fast recovery.
#[derive(Debug, Default, Copy, Clone)]
pub(crate) struct Reno {
    pub(crate) in_fast_recovery: bool,
}

impl Reno {
    pub(crate) fn on_ack(&mut self, conn: &mut Conn) {
        if conn.at_boundary() {
            conn.cwnd += 1.0;
        } else {
            conn.cwnd = (conn.cwnd * ACK_PENALTY).max(1.0);
        }
    }

    pub(crate) fn on_dup_ack(&mut self, conn: &mut Conn) {
        if !conn.at_boundary() {
            return;
        }
        conn.nr_retx += 1;
        if self.in_fast_recovery {
            // Fast-recovery inflation
            conn.cwnd += 1.0;
        } else {
            conn.ssthresh = (conn.cwnd / 2.0).max(1.0);
            conn.cwnd = (conn.cwnd / 2.0).max(1.0);
            self.in_fast_recovery = true;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_ack_grows_the_window() {
        let mut reno = Reno::default();
        let mut conn = Conn::new();
        conn.cwnd = 2.0;
        conn.nr_acked = 3;
        conn.nr_acked += 1;
        reno.on_ack(&mut conn);
        assert_eq!(conn.cwnd, 3.0);
    }

    #[test]
    fn off_boundary_ack_shrinks_the_window() {
        let mut reno = Reno::default();
        let mut conn = Conn::new();
        conn.cwnd = 3.0;
        conn.nr_acked = 5;
        reno.on_ack(&mut conn);
        assert_eq!(conn.cwnd, 1.5);
        // The penalty never takes the window below one packet
        conn.nr_acked = 7;
        reno.on_ack(&mut conn);
        assert_eq!(conn.cwnd, 1.0);
    }

    #[test]
    fn first_dup_ack_halves_and_enters_fast_recovery() {
        let mut reno = Reno::default();
        let mut conn = Conn::new();
        conn.cwnd = 8.0;
        reno.on_dup_ack(&mut conn);
        assert_eq!(conn.cwnd, 4.0);
        assert_eq!(conn.ssthresh, 4.0);
        assert_eq!(conn.nr_retx, 1);
        assert!(reno.in_fast_recovery);
    }

    #[test]
    fn fast_recovery_inflates_by_one_per_dup_ack() {
        let mut reno = Reno::default();
        let mut conn = Conn::new();
        conn.cwnd = 8.0;
        reno.on_dup_ack(&mut conn);
        assert_eq!(conn.cwnd, 4.0);
        reno.on_dup_ack(&mut conn);
        assert_eq!(conn.cwnd, 5.0);
        reno.on_dup_ack(&mut conn);
        assert_eq!(conn.cwnd, 6.0);
        assert_eq!(conn.nr_retx, 3);
    }

    #[test]
    fn off_boundary_dup_ack_is_ignored() {
        let mut reno = Reno::default();
        let mut conn = Conn::new();
        conn.cwnd = 8.0;
        conn.nr_acked = 3;
        reno.on_dup_ack(&mut conn);
        assert_eq!(conn.cwnd, 8.0);
        assert!(!reno.in_fast_recovery);
    }

    #[test]
    fn window_floor_holds_under_repeated_losses() {
        let mut reno = Reno::default();
        let mut conn = Conn::new();
        for _ in 0..10 {
            reno.on_timeout(&mut conn);
            reno.on_dup_ack(&mut conn);
            conn.nr_acked += 1;
            reno.on_ack(&mut conn);
            assert!(conn.cwnd >= 1.0);
            assert!(conn.ssthresh >= 1.0);
        }
    }
}
