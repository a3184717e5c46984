use crate::error::{GraphError, Result};
use crate::types::{PersonId, RelationTriple, SocialGraph};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read one person id per line; blank lines are ignored.
pub fn load_people<R: BufRead>(reader: R) -> Result<Vec<PersonId>> {
    let mut people = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let value = line.trim();
        if value.is_empty() {
            continue;
        }
        people.push(parse_person(value, idx + 1)?);
    }

    Ok(people)
}

/// Read `a,b,label` relationship lines.
///
/// Lines that do not split into exactly three fields are skipped with a
/// warning; a non-numeric id is an error.
pub fn load_relations<R: BufRead>(reader: R) -> Result<Vec<RelationTriple>> {
    let mut relations = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let value = line.trim();
        if value.is_empty() {
            continue;
        }

        let fields: Vec<&str> = value.split(',').map(str::trim).collect();
        let [a, b, label] = fields.as_slice() else {
            warn!(
                "Skipping relation on line {}: expected 3 fields, found {}",
                idx + 1,
                fields.len()
            );
            continue;
        };

        relations.push(RelationTriple::new(
            parse_person(a, idx + 1)?,
            parse_person(b, idx + 1)?,
            *label,
        ));
    }

    Ok(relations)
}

fn parse_person(value: &str, line: usize) -> Result<PersonId> {
    value
        .parse()
        .map_err(|_| GraphError::invalid_person_id(line, value))
}

impl SocialGraph {
    /// Load the person list and relationship list from disk and build the graph
    pub fn from_files(
        people_path: impl AsRef<Path>,
        relations_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let people_path = people_path.as_ref();
        let relations_path = relations_path.as_ref();
        debug!(
            "Loading people from {} and relations from {}",
            people_path.display(),
            relations_path.display()
        );

        let people = load_people(BufReader::new(File::open(people_path)?))?;
        let relations = load_relations(BufReader::new(File::open(relations_path)?))?;

        Ok(Self::new(people, relations))
    }
}
