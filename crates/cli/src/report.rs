use serde::Serialize;
use social_graph::{GraphStats, PersonId};

/// JSON document printed for each query
#[derive(Debug, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryReport {
    Connected {
        from: PersonId,
        to: PersonId,
        #[serde(skip_serializing_if = "Option::is_none")]
        relationship: Option<String>,
        result: bool,
    },
    Distance {
        from: PersonId,
        to: PersonId,
        #[serde(skip_serializing_if = "Option::is_none")]
        relationship: Option<String>,
        /// -1 when no chain exists
        result: i64,
    },
    AtDistance {
        person: PersonId,
        depth: i64,
        result: Vec<PersonId>,
    },
    Groups {
        relationships: Vec<String>,
        result: usize,
    },
    Stats(GraphStats),
}
