use std::hash::Hash;

/// Successor generation for a least-cost search.
///
/// An expander defines the search graph: what a state is and which states
/// can be reached from it in one move, at what cost.
pub trait Expander {
    /// A node of the search graph. Two states are the same node iff equal.
    type State: Copy + Eq + Hash;

    /// Append every successor of `state` into `buf` together with the
    /// incremental cost of reaching it. Costs are non-negative by type.
    /// The caller clears `buf` before calling.
    fn expand(&self, state: &Self::State, buf: &mut Vec<(Self::State, u32)>);
}
