use log::debug;
use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Identifier of a person (graph node)
pub type PersonId = i64;

/// Relationship carried by a single half-edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    /// Relationship label (e.g., "sibling", "friend")
    pub label: String,
}

/// Declared relationship between two people, as handed over by the loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationTriple {
    pub a: PersonId,
    pub b: PersonId,
    pub label: String,
}

impl RelationTriple {
    pub fn new(a: PersonId, b: PersonId, label: impl Into<String>) -> Self {
        Self {
            a,
            b,
            label: label.into(),
        }
    }
}

/// Summary of a loaded graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Distinct people (explicit list plus edge endpoints)
    pub persons: usize,

    /// Entries in the explicit person list, repeats included
    pub listed_persons: usize,

    /// Declared relationships (each stored as two half-edges)
    pub relations: usize,

    /// Distinct relationship labels, sorted
    pub labels: Vec<String>,

    /// Connected components over all relationship labels
    pub groups: usize,
}

/// Undirected, labeled multigraph of people.
///
/// Built once and never mutated afterwards, so a shared reference can be
/// queried from any number of threads.
#[derive(Debug, Clone)]
pub struct SocialGraph {
    /// Directed storage; every relationship is written as A -> B and B -> A
    graph: DiGraph<PersonId, Relation>,

    /// Person id -> NodeIndex mapping for fast lookup
    person_index: HashMap<PersonId, NodeIndex>,

    /// Explicit person list in load order
    people: Vec<PersonId>,
}

impl SocialGraph {
    /// Build the graph from the explicit person list and the declared relationships.
    ///
    /// Endpoints missing from the person list become implicit nodes. Repeated
    /// relationships are kept as independent edges.
    pub fn new<P, R>(people: P, relations: R) -> Self
    where
        P: IntoIterator<Item = PersonId>,
        R: IntoIterator<Item = RelationTriple>,
    {
        let mut social = Self {
            graph: DiGraph::new(),
            person_index: HashMap::new(),
            people: Vec::new(),
        };

        for person in people {
            social.people.push(person);
            social.ensure_node(person);
        }
        for triple in relations {
            social.add_relation(triple);
        }

        debug!(
            "Built social graph: {} people ({} listed), {} relations",
            social.person_count(),
            social.people.len(),
            social.relation_count()
        );

        social
    }

    fn ensure_node(&mut self, person: PersonId) -> NodeIndex {
        let graph = &mut self.graph;
        *self
            .person_index
            .entry(person)
            .or_insert_with(|| graph.add_node(person))
    }

    fn add_relation(&mut self, triple: RelationTriple) {
        let a = self.ensure_node(triple.a);
        let b = self.ensure_node(triple.b);
        let relation = Relation {
            label: triple.label,
        };

        self.graph.add_edge(a, b, relation.clone());
        self.graph.add_edge(b, a, relation);
    }

    pub(crate) fn node(&self, person: PersonId) -> Option<NodeIndex> {
        self.person_index.get(&person).copied()
    }

    pub(crate) fn person_at(&self, node: NodeIndex) -> PersonId {
        self.graph[node]
    }

    pub(crate) fn graph(&self) -> &DiGraph<PersonId, Relation> {
        &self.graph
    }

    /// Half-edges leaving `node`, in declaration order.
    ///
    /// petgraph hands outgoing edges back newest first; edge indices grow with
    /// insertion, so sorting by id restores the declared order.
    pub(crate) fn half_edges(&self, node: NodeIndex) -> Vec<EdgeReference<'_, Relation>> {
        let mut edges: Vec<_> = self.graph.edges(node).collect();
        edges.sort_unstable_by_key(|edge| edge.id());
        edges
    }

    /// Whether the person is listed or appears as a relationship endpoint
    pub fn contains(&self, person: PersonId) -> bool {
        self.person_index.contains_key(&person)
    }

    /// Explicit person list as supplied at construction
    pub fn people(&self) -> &[PersonId] {
        &self.people
    }

    /// `(neighbor, label)` pairs touching `person`, in declaration order
    pub fn relations_of(&self, person: PersonId) -> Vec<(PersonId, &str)> {
        self.node(person)
            .map(|node| {
                self.half_edges(node)
                    .into_iter()
                    .map(|edge| (self.person_at(edge.target()), edge.weight().label.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of distinct people
    pub fn person_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of declared relationships
    pub fn relation_count(&self) -> usize {
        self.graph.edge_count() / 2
    }

    /// Distinct relationship labels
    pub fn relationship_labels(&self) -> BTreeSet<&str> {
        self.graph
            .edge_weights()
            .map(|relation| relation.label.as_str())
            .collect()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            persons: self.person_count(),
            listed_persons: self.people.len(),
            relations: self.relation_count(),
            labels: self
                .relationship_labels()
                .into_iter()
                .map(str::to_string)
                .collect(),
            groups: self.count_groups(),
        }
    }
}
