//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; printing is left to the CLI.

pub mod expense;
pub mod registry;
pub mod statement;

pub use expense::{
    format_expense_details, format_expense_table, format_sort_indicator, format_total_line,
};
pub use registry::{format_name_list, format_rule_list};
pub use statement::format_statement_table;
