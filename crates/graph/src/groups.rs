use crate::types::{Relation, SocialGraph};
use log::trace;
use petgraph::graph::{EdgeReference, NodeIndex};
use petgraph::visit::{Bfs, EdgeFiltered, VisitMap, Visitable};
use std::collections::{HashSet, VecDeque};

/// Which half-edges a traversal may follow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeFilter<'a> {
    /// Every relationship label
    Any,

    /// Only edges with exactly this label
    Label(&'a str),

    /// Only edges whose label is in the set
    AnyOf(HashSet<&'a str>),
}

impl EdgeFilter<'_> {
    pub fn admits(&self, label: &str) -> bool {
        match self {
            EdgeFilter::Any => true,
            EdgeFilter::Label(wanted) => *wanted == label,
            EdgeFilter::AnyOf(wanted) => wanted.contains(label),
        }
    }
}

/// Which people seed new groups when counting components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeUniverse {
    /// Listed people and every relationship endpoint
    Everyone,

    /// Only the explicit person list; unlisted endpoints are still reachable
    Listed,
}

impl SocialGraph {
    /// Number of groups over all relationship labels, counting every person
    /// the graph knows about.
    pub fn count_groups(&self) -> usize {
        self.count_groups_with(&EdgeFilter::Any, NodeUniverse::Everyone)
    }

    /// Number of groups formed by `relationship` edges alone.
    ///
    /// Listed people with no such edge are groups of one.
    pub fn count_groups_via(&self, relationship: &str) -> usize {
        self.count_groups_with(&EdgeFilter::Label(relationship), NodeUniverse::Listed)
    }

    /// Number of groups formed by edges carrying any of `relationships`.
    ///
    /// A single-label set counts the same as [`SocialGraph::count_groups_via`].
    pub fn count_groups_via_any<'a, I>(&self, relationships: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let filter = EdgeFilter::AnyOf(relationships.into_iter().collect());
        self.count_groups_with(&filter, NodeUniverse::Listed)
    }

    /// Connected components under `filter`, seeded from `universe` in order.
    pub fn count_groups_with(&self, filter: &EdgeFilter<'_>, universe: NodeUniverse) -> usize {
        trace!("count_groups_with({filter:?}, {universe:?})");

        let seeds: Vec<NodeIndex> = match universe {
            NodeUniverse::Everyone => self.graph().node_indices().collect(),
            NodeUniverse::Listed => self
                .people()
                .iter()
                .filter_map(|&person| self.node(person))
                .collect(),
        };

        let filtered = EdgeFiltered::from_fn(self.graph(), |edge: EdgeReference<'_, Relation>| {
            filter.admits(&edge.weight().label)
        });
        let mut bfs = Bfs {
            stack: VecDeque::new(),
            discovered: self.graph().visit_map(),
        };

        let mut groups = 0;
        for seed in seeds {
            if !bfs.discovered.visit(seed) {
                continue;
            }
            groups += 1;
            bfs.stack.push_back(seed);
            while bfs.next(&filtered).is_some() {}
        }

        groups
    }
}
