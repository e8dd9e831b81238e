//! Column names for the Bunpro export and the Notion database layout

pub const SENTENCE: &str = "Sentence";
pub const TRANSLATION: &str = "Translation";
pub const SENTENCE_NUANCE: &str = "Sentence Nuance";
pub const JLPT_LEVEL: &str = "JLPT Level";
pub const GRAMMAR: &str = "Grammar";
pub const GRAMMAR_MEANING: &str = "Grammar Meaning";
pub const GRAMMAR_STRUCTURE: &str = "Grammar Structure";
pub const GRAMMAR_NUANCE: &str = "Grammar Nuance";
pub const SUPPLEMENTAL_LINKS: &str = "Supplemental Links";
pub const OFFLINE_RESOURCES: &str = "Offline Resources";
pub const LEARNING_STATUS: &str = "Learning Status";
pub const EXAMPLES: &str = "Examples";

/// Value written to every row's `Learning Status`
pub const IN_PROGRESS: &str = "In Progress";

/// Placeholder held by `Examples` until the merge step fills it
pub const EXAMPLES_PLACEHOLDER: &str = "Examples";

/// Separator between sentences in a merged `Examples` cell
pub const EXAMPLES_SEPARATOR: &str = "\n ";

/// Semantic name for each export column, by position
pub const SOURCE_COLUMNS: [(usize, &str); 10] = [
    (0, SENTENCE),
    (1, TRANSLATION),
    (2, SENTENCE_NUANCE),
    (3, JLPT_LEVEL),
    (4, GRAMMAR),
    (5, GRAMMAR_MEANING),
    (6, GRAMMAR_STRUCTURE),
    (7, GRAMMAR_NUANCE),
    (8, SUPPLEMENTAL_LINKS),
    (9, OFFLINE_RESOURCES),
];

/// Columns appended after renaming, with their constant initial value
pub const DERIVED_COLUMNS: [(&str, &str); 2] = [
    (LEARNING_STATUS, IN_PROGRESS),
    (EXAMPLES, EXAMPLES_PLACEHOLDER),
];

/// Final column order of the written CSV
pub const OUTPUT_COLUMNS: [&str; 12] = [
    GRAMMAR,
    JLPT_LEVEL,
    SENTENCE,
    TRANSLATION,
    EXAMPLES,
    LEARNING_STATUS,
    GRAMMAR_MEANING,
    GRAMMAR_STRUCTURE,
    GRAMMAR_NUANCE,
    SENTENCE_NUANCE,
    SUPPLEMENTAL_LINKS,
    OFFLINE_RESOURCES,
];
