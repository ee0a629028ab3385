/// Messages for the StepView demo application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Advance every indicator by one step.
    Next,

    /// Move every indicator back one step (never below 1).
    Previous,

    /// Return every indicator to its configured starting step.
    Reset,
}
