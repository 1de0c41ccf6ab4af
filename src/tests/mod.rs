//! Internal test modules.

mod schema_tests;
mod source_tests;
