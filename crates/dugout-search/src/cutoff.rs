/// Decides where a search stops descending and falls back to a heuristic.
pub trait Cutoff {
    /// Whether the search should evaluate heuristically at `depth` (root is 0).
    fn should_cut(&self, depth: usize) -> bool;
}

impl<F> Cutoff for F
where
    F: Fn(usize) -> bool,
{
    fn should_cut(&self, depth: usize) -> bool {
        self(depth)
    }
}

/// Searches to terminal states.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCutoff;

impl Cutoff for NoCutoff {
    fn should_cut(&self, _depth: usize) -> bool {
        false
    }
}

/// Cuts every node at or below the given depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLimit(pub usize);

impl Cutoff for DepthLimit {
    fn should_cut(&self, depth: usize) -> bool {
        depth >= self.0
    }
}
