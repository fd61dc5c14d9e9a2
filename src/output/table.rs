//! Table output formatting

use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a rounded table with a centered header
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Two-column FIELD/VALUE table for a single record
pub fn format_record(fields: &[(&str, String)]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["FIELD", "VALUE"]);
    for (name, value) in fields {
        builder.push_record([name.to_string(), value.clone()]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
