//! # Social Graph
//!
//! Connectivity queries over a social graph of people linked by typed,
//! symmetric relationships.
//!
//! ## Features
//!
//! - **Connectivity** - are two people linked, optionally through one relationship type
//! - **Distance** - shortest hop count between two people
//! - **Rings** - everyone exactly N hops away from a person
//! - **Groups** - number of connected components, optionally per relationship type(s)
//!
//! ## Architecture
//!
//! ```text
//! people file + relations file
//!     │
//!     ├──> Loader
//!     │      ├─ One person id per line
//!     │      └─ `a,b,label` triples (wrong arity skipped)
//!     │
//!     ├──> Social Graph (petgraph)
//!     │      ├─ Nodes: person ids
//!     │      └─ Edges: two half-edges per relationship, same label
//!     │
//!     └──> Queries (breadth-first)
//!            ├─ are_connected / distance
//!            ├─ at_distance
//!            └─ count_groups
//! ```
//!
//! ```
//! use social_graph::{RelationTriple, SocialGraph};
//!
//! let graph = SocialGraph::new(
//!     [1, 2, 3, 4],
//!     [RelationTriple::new(1, 2, "sibling"), RelationTriple::new(2, 3, "friend")],
//! );
//! assert_eq!(graph.distance(1, 3), Some(2));
//! assert_eq!(graph.count_groups(), 2);
//! ```

mod error;
mod groups;
mod loader;
mod traversal;
mod types;

pub use error::{GraphError, Result};
pub use groups::{EdgeFilter, NodeUniverse};
pub use loader::{load_people, load_relations};
pub use types::{GraphStats, PersonId, Relation, RelationTriple, SocialGraph};
