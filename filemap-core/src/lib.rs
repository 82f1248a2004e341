#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod log;
pub mod operations;
pub mod output;
pub mod qualify;
pub mod rewrite;
pub mod table;
pub mod tokens;
pub mod walker;

pub use config::Config;
pub use error::ConfigError;
pub use log::RunLog;
pub use operations::{map_operation, MapOptions};
pub use output::{MapResult, OutputFormat, OutputFormatter, VersionResult};
pub use qualify::QualifyingSet;
pub use rewrite::{rewrite_document, rewrite_text, write_atomic, ApplyOrder, Replacement};
pub use table::{Collision, RenameEntry, RenameTable};
pub use tokens::{MappingTable, TokenPair};
pub use walker::{build_globset, walk_tree, WalkReport};
