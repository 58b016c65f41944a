/// Actions an observer can take during the penalty loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current outer iteration and return its iterate.
    StopEarly,
}
