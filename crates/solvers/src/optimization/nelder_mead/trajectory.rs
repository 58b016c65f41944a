use super::{Node, Simplex};

/// The sequence of simplexes visited by a search, initial simplex first.
///
/// Each snapshot is an owned copy taken when it was recorded, so later
/// iterations never change earlier entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory<const N: usize> {
    snapshots: Vec<Simplex<N>>,
}

impl<const N: usize> Trajectory<N> {
    pub(super) fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Appends a copy of `simplex`.
    pub(super) fn record(&mut self, simplex: &Simplex<N>) {
        self.snapshots.push(simplex.clone());
    }

    /// Returns the number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot taken after `iter` iterations.
    #[must_use]
    pub fn get(&self, iter: usize) -> Option<&Simplex<N>> {
        self.snapshots.get(iter)
    }

    /// Iterates over the snapshots in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, Simplex<N>> {
        self.snapshots.iter()
    }

    /// Iterates over the best value of each snapshot.
    pub fn best_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.snapshots.iter().map(|simplex| simplex.best().value())
    }

    /// Iterates over the vertex coordinates of each snapshot.
    ///
    /// This is the shape plotting code usually wants: one polygon per iteration.
    pub fn polygons(&self) -> impl Iterator<Item = Vec<[f64; N]>> + '_ {
        self.snapshots
            .iter()
            .map(|simplex| simplex.nodes().iter().map(Node::x).copied().collect())
    }
}

impl<'a, const N: usize> IntoIterator for &'a Trajectory<N> {
    type Item = &'a Simplex<N>;
    type IntoIter = std::slice::Iter<'a, Simplex<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
