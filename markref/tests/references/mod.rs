//! Reference engine tests
//!
//! Reading generated Markdown back, editing references and regenerating.

mod editing;
mod properties;
