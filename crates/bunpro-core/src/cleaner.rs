//! Regex substitutions that strip cloze and HTML artifacts from card text
//!
//! Rules are applied in order, each over the full text of every cell in its
//! column. A column with several rules sees them in the order listed.

use crate::error::Result;
use crate::schema::{
    GRAMMAR_MEANING, GRAMMAR_STRUCTURE, OFFLINE_RESOURCES, SENTENCE, SUPPLEMENTAL_LINKS,
};
use crate::table::Table;
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::debug;

const HTML_TAG: &str = r"<[^>]*>";

static DEFAULT_RULES: LazyLock<Vec<CleanRule>> = LazyLock::new(|| {
    [
        // Cloze markers: {{c1::...}}
        (SENTENCE, r"[{}:]", ""),
        (SENTENCE, r"c[0-9]", ""),
        (GRAMMAR_STRUCTURE, HTML_TAG, ""),
        (GRAMMAR_MEANING, HTML_TAG, ""),
        (SUPPLEMENTAL_LINKS, HTML_TAG, ""),
        (OFFLINE_RESOURCES, HTML_TAG, "\n"),
        (OFFLINE_RESOURCES, r"&#x27;s", "'S"),
        (GRAMMAR_MEANING, r" {21}", " "),
    ]
    .into_iter()
    .map(|(column, pattern, replacement)| {
        CleanRule::new(column, pattern, replacement).expect("built-in clean pattern is valid")
    })
    .collect()
});

/// A find-and-replace applied to one column
#[derive(Debug, Clone)]
pub struct CleanRule {
    pub column: String,
    pub pattern: Regex,
    pub replacement: String,
}

impl CleanRule {
    pub fn new(
        column: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            column: column.into(),
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// Replace every match in `text`; the replacement is taken literally
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern
            .replace_all(text, NoExpand(self.replacement.as_str()))
    }
}

/// The substitutions used for Bunpro exports
pub fn default_rules() -> &'static [CleanRule] {
    &DEFAULT_RULES
}

/// Apply `rules` in order to every cell of their columns
pub fn clean_table(table: &mut Table, rules: &[CleanRule]) -> Result<()> {
    for rule in rules {
        let index = table.column_index(&rule.column)?;
        let mut changed = 0usize;

        for row in &mut table.rows {
            let Some(cell) = row.cells.get_mut(index) else {
                continue;
            };
            let cleaned = match rule.apply(cell) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(text) => text,
            };
            *cell = cleaned;
            changed += 1;
        }

        debug!(
            column = %rule.column,
            pattern = rule.pattern.as_str(),
            cells = changed,
            "applied clean rule"
        );
    }
    Ok(())
}

/// Apply every rule for `column` to a single value
pub fn clean_value(column: &str, value: &str, rules: &[CleanRule]) -> String {
    rules
        .iter()
        .filter(|r| r.column == column)
        .fold(value.to_string(), |text, rule| rule.apply(&text).into_owned())
}
