/// The phase the next `advance` call will run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Nothing pending. `advance` is a no-op.
    #[default]
    Idle,
    /// Highlight the pair at the cursor and decide whether to swap.
    Compare,
    /// Exchange the highlighted pair and start the slide.
    Swap,
    /// Clear highlights and draw the final frame.
    Finish,
}

impl Phase {
    /// Short name used in log output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Compare => "compare",
            Phase::Swap => "swap",
            Phase::Finish => "finish",
        }
    }

    /// Whether the state machine has nothing left to do.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Idle)
    }
}
