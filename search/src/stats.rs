//! Per-call search counters.
//!
//! Counters are observational: they are collected alongside the search and
//! never influence which plan is found.

/// Aggregate counters for one `search_with_policy` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStatsV1 {
    /// OR-phase entries (including goal hits and cycle prunes).
    pub or_nodes: u64,
    /// AND-phase entries (one per attempted action).
    pub and_nodes: u64,
    /// OR-phase entries that hit a goal state.
    pub goal_leaves: u64,
    /// OR-phase entries rejected because the state was already on the path.
    pub cycles_pruned: u64,
    /// Non-goal, non-cyclic states where no action led to a plan.
    pub dead_ends: u64,
    /// Longest ancestor path observed at any OR-phase entry.
    pub max_path_len: u64,
}

impl SearchStatsV1 {
    /// Canonical JSON projection for report binding.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "and_nodes": self.and_nodes,
            "cycles_pruned": self.cycles_pruned,
            "dead_ends": self.dead_ends,
            "goal_leaves": self.goal_leaves,
            "max_path_len": self.max_path_len,
            "or_nodes": self.or_nodes,
        })
    }
}
