//! Conditional plan: the branching tree produced by a successful search.

/// A contingent course of action rooted at `state`.
///
/// Each node holds the state it applies to, the action chosen there (absent at
/// goal leaves), and one child per possible outcome of that action, in the
/// order the problem's `results` returned them.
///
/// Nodes are built bottom-up and never mutated afterwards: the child list is
/// complete before the node exists. A node without an action has no children
/// by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalPlan<S, A> {
    state: S,
    action: Option<A>,
    children: Vec<ConditionalPlan<S, A>>,
}

impl<S, A> ConditionalPlan<S, A> {
    /// A terminal leaf: `state` is a goal, nothing left to do.
    #[must_use]
    pub fn goal(state: S) -> Self {
        Self {
            state,
            action: None,
            children: Vec::new(),
        }
    }

    /// A decision node: do `action` in `state`, then follow the child whose
    /// state matches the observed outcome.
    #[must_use]
    pub fn branch(state: S, action: A, children: Vec<ConditionalPlan<S, A>>) -> Self {
        Self {
            state,
            action: Some(action),
            children,
        }
    }

    /// The state this node applies to.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The chosen action (`None` at goal leaves).
    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// One sub-plan per outcome, in outcome order.
    #[must_use]
    pub fn children(&self) -> &[ConditionalPlan<S, A>] {
        &self.children
    }

    /// True if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in the tree rooted here.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Edges on the longest root-to-leaf path (a lone leaf has depth 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Leaf states in pre-order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&S> {
        self.iter()
            .filter(|n| n.is_leaf())
            .map(ConditionalPlan::state)
            .collect()
    }

    /// Pre-order traversal of every node, starting with `self`.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, S, A> {
        Iter { stack: vec![self] }
    }
}

impl<'a, S, A> IntoIterator for &'a ConditionalPlan<S, A> {
    type Item = &'a ConditionalPlan<S, A>;
    type IntoIter = Iter<'a, S, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a [`ConditionalPlan`].
#[derive(Debug)]
pub struct Iter<'a, S, A> {
    stack: Vec<&'a ConditionalPlan<S, A>>,
}

impl<'a, S, A> Iterator for Iter<'a, S, A> {
    type Item = &'a ConditionalPlan<S, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
