use crate::groups::EdgeFilter;
use crate::types::{PersonId, SocialGraph};
use log::trace;
use petgraph::visit::{EdgeRef, VisitMap, Visitable};
use std::collections::VecDeque;

impl SocialGraph {
    /// Whether any chain of relationships links the two people.
    ///
    /// A person is always connected to themself, even when unknown.
    pub fn are_connected(&self, from: PersonId, to: PersonId) -> bool {
        self.shortest_hops(from, to, &EdgeFilter::Any).is_some()
    }

    /// Whether a chain made only of `relationship` edges links the two people
    pub fn are_connected_via(&self, from: PersonId, to: PersonId, relationship: &str) -> bool {
        self.shortest_hops(from, to, &EdgeFilter::Label(relationship))
            .is_some()
    }

    /// Length of the shortest chain between two people, `None` when there is none.
    ///
    /// `distance(p, p)` is `Some(0)` for every `p`, known or not.
    pub fn distance(&self, from: PersonId, to: PersonId) -> Option<usize> {
        self.shortest_hops(from, to, &EdgeFilter::Any)
    }

    /// Shortest chain between two people using only `relationship` edges
    pub fn distance_via(&self, from: PersonId, to: PersonId, relationship: &str) -> Option<usize> {
        self.shortest_hops(from, to, &EdgeFilter::Label(relationship))
    }

    /// People whose shortest distance from `person` is exactly `depth`, over
    /// every relationship label.
    ///
    /// Returned in discovery order. Unknown people yield an empty list;
    /// `depth == 0` yields the person alone.
    pub fn at_distance(&self, person: PersonId, depth: usize) -> Vec<PersonId> {
        trace!("at_distance({person}, {depth})");

        let Some(start) = self.node(person) else {
            return Vec::new();
        };
        if depth == 0 {
            return vec![person];
        }

        let mut visited = self.graph().visit_map();
        visited.visit(start);
        let mut queue = VecDeque::from([(start, 0usize)]);
        let mut ring = Vec::new();

        while let Some((current, level)) = queue.pop_front() {
            for edge in self.half_edges(current) {
                let neighbor = edge.target();
                if !visited.visit(neighbor) {
                    continue;
                }
                // Nodes on the requested ring are collected, never expanded
                if level + 1 == depth {
                    ring.push(self.person_at(neighbor));
                } else {
                    queue.push_back((neighbor, level + 1));
                }
            }
        }

        ring
    }

    /// Breadth-first search from `from` until `to` is first discovered.
    fn shortest_hops(
        &self,
        from: PersonId,
        to: PersonId,
        filter: &EdgeFilter<'_>,
    ) -> Option<usize> {
        trace!("shortest_hops({from}, {to}, {filter:?})");

        if from == to {
            return Some(0);
        }
        let start = self.node(from)?;
        let target = self.node(to)?;

        let mut visited = self.graph().visit_map();
        visited.visit(start);
        let mut queue = VecDeque::from([(start, 0usize)]);

        while let Some((current, depth)) = queue.pop_front() {
            for edge in self.half_edges(current) {
                if !filter.admits(&edge.weight().label) {
                    continue;
                }
                let neighbor = edge.target();
                if neighbor == target {
                    return Some(depth + 1);
                }
                if visited.visit(neighbor) {
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }

        None
    }
}
