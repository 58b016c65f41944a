/// Actions an observer can take during a simplex search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the best vertex found so far.
    StopEarly,
}
