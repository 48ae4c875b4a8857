use crate::{controller::Controller, sampler::Sampler, variants::Variant};

/// One simulated run: a fixed number of send events pushed through a single
/// controller, each resolved as either a loss or an acknowledgment.
///
/// The duplicate-ack and timeout paths are not exercised here; they exist on
/// the controller contract for callers that model those signals themselves.
#[derive(Debug, Copy, Clone, typed_builder::TypedBuilder)]
pub struct Simulation {
    variant: Variant,
    loss_probability: f64,
    nr_packets: u64,
}

impl Simulation {
    pub fn run(self, clk: &mut impl Sampler) -> Outcome {
        assert!(
            (0.0..=1.0).contains(&self.loss_probability),
            "loss probability {} is outside [0, 1]",
            self.loss_probability
        );
        let mut controller = Controller::new(self.variant);
        let mut nr_lost = 0;
        for _ in 0..self.nr_packets {
            controller.send(clk);
            if clk.should_drop(self.loss_probability) {
                nr_lost += 1;
                controller.on_loss(clk);
            } else {
                controller.acknowledge(clk);
            }
        }
        Outcome {
            controller,
            nr_lost,
        }
    }
}

/// The result of a completed run.
#[derive(Debug)]
pub struct Outcome {
    /// The controller in its final state.
    pub controller: Controller,
    /// The number of packets dropped by the loss process.
    pub nr_lost: u64,
}
