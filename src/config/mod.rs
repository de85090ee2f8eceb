//! # Configuration Module
//!
//! Configuration structures for every command, each with a builder.
//!
//! - **SearchConfig**: the `search` command listing all cycles
//! - **SpotlightConfig**: the `spotlight` command focused on one node
//! - **ComponentsConfig**: the `components` command listing searched SCCs
//! - **RenderOptions**: the `render` command drawing graphs
//!
//! ## Example
//!
//! ```
//! use johnson_cycles::cli::{GraphFormat, OutputFormat};
//! use johnson_cycles::common::ConfigBuilder;
//! use johnson_cycles::config::{RenderOptions, SearchConfig};
//!
//! let config = SearchConfig::builder()
//!     .with_paths(vec!["graphs".into()])
//!     .with_format(OutputFormat::Human)
//!     .with_max_cycles(Some(10))
//!     .with_error_on_cycles(true)
//!     .build()?;
//! assert!(config.error_on_cycles);
//!
//! // Missing fields are reported instead of defaulted
//! let incomplete = RenderOptions::builder()
//!     .with_format(GraphFormat::Dot)
//!     .build();
//! assert!(incomplete.is_err());
//! # Ok::<(), johnson_cycles::error::CycleSearchError>(())
//! ```

pub mod components;
pub mod render;
pub mod search;
pub mod spotlight;

pub use components::ComponentsConfig;
pub use render::RenderOptions;
pub use search::SearchConfig;
pub use spotlight::SpotlightConfig;
