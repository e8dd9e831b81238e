//! bunpro-core: Core library for reshaping Bunpro Anki exports
//!
//! This library provides functionality to:
//! - Load a tab-separated Anki export into a text table
//! - Rename and reorder its columns for a Notion database
//! - Strip cloze and HTML artifacts from card text
//! - Merge all example sentences of a grammar point into one row
//! - Write the result as CSV

pub mod cleaner;
pub mod config;
pub mod error;
pub mod mapper;
pub mod merger;
pub mod parser;
pub mod pipeline;
pub mod schema;
pub mod table;
pub mod writer;

pub use cleaner::{clean_table, default_rules, CleanRule};
pub use config::ConvertOptions;
pub use error::{Error, Result};
pub use mapper::{map_columns, reorder};
pub use merger::{dedupe_and_merge, group_by, BlankGrammarPolicy, Group, GroupKey};
pub use parser::{parse_tsv, parse_tsv_str};
pub use pipeline::{convert, convert_with, transform, ConvertSummary};
pub use table::{Column, Row, Table};
pub use writer::{write_csv, write_csv_to};
