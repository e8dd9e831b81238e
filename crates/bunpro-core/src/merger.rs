//! Grammar point consolidation
//!
//! Every example sentence in a Bunpro export is its own card, so one grammar
//! point shows up on many rows that differ only in the sentence. This module
//! groups those rows, keeps the first one, and writes every sentence of the
//! group into its `Examples` column.

use crate::error::{Error, Result};
use crate::schema::{EXAMPLES, EXAMPLES_SEPARATOR, GRAMMAR, SENTENCE};
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// How rows with an empty or whitespace-only `Grammar` value are grouped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankGrammarPolicy {
    /// Blank values group like any other value
    #[default]
    Group,
    /// Each row with a blank value is kept as its own group
    Keep,
}

/// Identity of a group of rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Rows sharing this key value
    Value(String),
    /// A single blank-keyed row, by row index
    Unique(usize),
}

impl GroupKey {
    fn for_row(value: &str, row: usize, policy: BlankGrammarPolicy) -> Self {
        match policy {
            BlankGrammarPolicy::Keep if value.trim().is_empty() => GroupKey::Unique(row),
            _ => GroupKey::Value(value.to_string()),
        }
    }

    /// The key's text, empty for blank rows kept apart
    pub fn as_str(&self) -> &str {
        match self {
            GroupKey::Value(v) => v.as_str(),
            GroupKey::Unique(_) => "",
        }
    }
}

/// Rows sharing a key, with their values in row order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: GroupKey,
    /// Index of the first row carrying this key
    pub first_row: usize,
    pub values: Vec<String>,
}

impl Group {
    /// The group's values joined into one `Examples` cell
    pub fn merge_text(&self) -> String {
        self.values.join(EXAMPLES_SEPARATOR)
    }
}

/// Partition rows by the `key` column, collecting the `value` column.
///
/// Groups come back in first-seen order and each group's values keep the
/// relative order of their rows.
pub fn group_by(
    table: &Table,
    key: &str,
    value: &str,
    policy: BlankGrammarPolicy,
) -> Result<Vec<Group>> {
    let key_idx = table.column_index(key)?;
    let value_idx = table.column_index(value)?;

    let mut groups: Vec<Group> = Vec::new();
    let mut positions: HashMap<GroupKey, usize> = HashMap::new();

    for (row_idx, row) in table.rows.iter().enumerate() {
        let group_key = GroupKey::for_row(row.get(key_idx).unwrap_or_default(), row_idx, policy);
        let item = row.get(value_idx).unwrap_or_default().to_string();

        match positions.get(&group_key) {
            Some(&pos) => groups[pos].values.push(item),
            None => {
                positions.insert(group_key.clone(), groups.len());
                groups.push(Group {
                    key: group_key,
                    first_row: row_idx,
                    values: vec![item],
                });
            }
        }
    }

    Ok(groups)
}

/// Collapse rows sharing a `Grammar` value into their first row, whose
/// `Examples` becomes every `Sentence` of the group.
pub fn dedupe_and_merge(table: Table, policy: BlankGrammarPolicy) -> Result<Table> {
    let key_idx = table.column_index(GRAMMAR)?;
    let examples_idx = table.column_index(EXAMPLES)?;

    let groups = group_by(&table, GRAMMAR, SENTENCE, policy)?;
    let group_count = groups.len();
    let representatives: HashSet<usize> = groups.iter().map(|g| g.first_row).collect();
    let mut merged: HashMap<GroupKey, String> = groups
        .into_iter()
        .map(|g| {
            let text = g.merge_text();
            (g.key, text)
        })
        .collect();

    let rows_in = table.rows.len();
    let mut rows = Vec::with_capacity(group_count);

    for (row_idx, mut row) in table.rows.into_iter().enumerate() {
        if !representatives.contains(&row_idx) {
            continue;
        }

        let key = GroupKey::for_row(row.get(key_idx).unwrap_or_default(), row_idx, policy);
        let examples = merged
            .remove(&key)
            .ok_or_else(|| Error::MissingGroup(key.as_str().to_string()))?;
        row.set(examples_idx, examples);
        rows.push(row);
    }

    debug!(rows_in, rows_out = rows.len(), "merged grammar points");

    Ok(Table {
        columns: table.columns,
        rows,
        source_path: table.source_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, Row};
    use std::path::PathBuf;

    fn cards(rows: &[(&str, &str)]) -> Table {
        let mut table = Table::new(PathBuf::from("cards.tsv"));
        table.columns = vec![
            Column::new(GRAMMAR.to_string(), 0),
            Column::new(SENTENCE.to_string(), 1),
            Column::new(EXAMPLES.to_string(), 2),
        ];
        table.rows = rows
            .iter()
            .map(|(g, s)| Row::new(vec![g.to_string(), s.to_string(), "Examples".to_string()]))
            .collect();
        table
    }

    #[test]
    fn test_group_by_first_seen_order() {
        let table = cards(&[("B", "1"), ("A", "2"), ("B", "3"), ("C", "4"), ("A", "5")]);
        let groups = group_by(&table, GRAMMAR, SENTENCE, BlankGrammarPolicy::Group).unwrap();

        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["B", "A", "C"]);
        assert_eq!(groups[0].values, vec!["1", "3"]);
        assert_eq!(groups[1].values, vec!["2", "5"]);
        assert_eq!(groups[1].first_row, 1);
        assert_eq!(groups[2].values, vec!["4"]);
    }

    #[test]
    fn test_merge_collapses_duplicates() {
        let table = cards(&[("A", "foobar"), ("A", "baz"), ("B", "qux")]);
        let merged = dedupe_and_merge(table, BlankGrammarPolicy::Group).unwrap();

        assert_eq!(merged.row_count(), 2);
        assert_eq!(merged.rows[0].cells, vec!["A", "foobar", "foobar\n baz"]);
        assert_eq!(merged.rows[1].cells, vec!["B", "qux", "qux"]);
    }

    #[test]
    fn test_single_row_group_has_no_separator() {
        let table = cards(&[("solo", "only one")]);
        let merged = dedupe_and_merge(table, BlankGrammarPolicy::Group).unwrap();

        assert_eq!(merged.rows[0].get(2), Some("only one"));
    }

    #[test]
    fn test_first_row_is_representative() {
        let table = cards(&[("A", "first"), ("B", "x"), ("A", "second")]);
        let merged = dedupe_and_merge(table, BlankGrammarPolicy::Group).unwrap();

        assert_eq!(merged.rows[0].get(1), Some("first"));
        assert_eq!(merged.rows[0].get(2), Some("first\n second"));
        assert_eq!(merged.rows[1].get(0), Some("B"));
    }

    #[test]
    fn test_blank_grammar_grouped() {
        let table = cards(&[("", "a"), ("X", "b"), ("", "c")]);
        let merged = dedupe_and_merge(table, BlankGrammarPolicy::Group).unwrap();

        assert_eq!(merged.row_count(), 2);
        assert_eq!(merged.rows[0].get(2), Some("a\n c"));
    }

    #[test]
    fn test_blank_grammar_kept() {
        let table = cards(&[("", "a"), ("X", "b"), ("  ", "c"), ("X", "d")]);
        let merged = dedupe_and_merge(table, BlankGrammarPolicy::Keep).unwrap();

        assert_eq!(merged.row_count(), 3);
        assert_eq!(merged.rows[0].get(2), Some("a"));
        assert_eq!(merged.rows[1].get(2), Some("b\n d"));
        assert_eq!(merged.rows[2].get(2), Some("c"));
    }

    #[test]
    fn test_survivors_are_group_first_rows() {
        let table = cards(&[("X", "a"), ("", "b"), ("Y", "c"), ("X", "d"), ("", "e"), ("Y", "f")]);
        let groups = group_by(&table, GRAMMAR, SENTENCE, BlankGrammarPolicy::Keep).unwrap();
        let first_rows: Vec<usize> = groups.iter().map(|g| g.first_row).collect();
        assert_eq!(first_rows, vec![0, 1, 2, 4]);

        let merged = dedupe_and_merge(table.clone(), BlankGrammarPolicy::Keep).unwrap();
        assert_eq!(merged.row_count(), groups.len());
        for (group, row) in groups.iter().zip(&merged.rows) {
            let original = &table.rows[group.first_row];
            assert_eq!(row.get(0), original.get(0));
            assert_eq!(row.get(1), original.get(1));
            assert_eq!(row.get(2), Some(group.merge_text().as_str()));
        }
    }

    #[test]
    fn test_missing_examples_column() {
        let mut table = cards(&[("A", "a")]);
        table.columns.pop();
        assert!(matches!(
            dedupe_and_merge(table, BlankGrammarPolicy::Group),
            Err(Error::MissingColumn(name)) if name == EXAMPLES
        ));
    }

    #[test]
    fn test_policy_serde() {
        assert_eq!(serde_json::to_string(&BlankGrammarPolicy::Keep).unwrap(), "\"keep\"");
        let parsed: BlankGrammarPolicy = serde_json::from_str("\"group\"").unwrap();
        assert_eq!(parsed, BlankGrammarPolicy::Group);
    }
}
