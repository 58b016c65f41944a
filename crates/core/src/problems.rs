mod constrained;

pub use constrained::ConstrainedProblem;
