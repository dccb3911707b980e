//! Definition renderers for every schema object kind
//!
//! Output matches what the target flavor prints in its own SHOW CREATE
//! statements, so rendered text can be compared against introspected text.

pub mod column;
pub mod constraint;
pub mod index;
pub mod routine;
pub mod table;

pub use column::render_column_definition;
pub use constraint::{render_check_definition, render_foreign_key_definition};
pub use index::render_index_definition;
pub use routine::render_create_routine;
pub use table::render_create_table;
