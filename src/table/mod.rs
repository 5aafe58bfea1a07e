//! Reading dirty article tables and writing clean ones.
//!
//! # Submodules
//!
//! - [`loader`]: Parses the scraped CSV into a [`RecordSet`](crate::models::RecordSet)
//! - [`writer`]: Serializes the cleaned records as CSV or JSON
//!
//! # File Layout
//!
//! ```text
//! raw/
//! ├── elpais_2021.csv          # dirty input: url, title, body, ...
//! └── clean_elpais_2021.csv    # clean output: uid, url, title, body, host, source_id, ...
//! ```

pub mod loader;
pub mod writer;

pub use loader::{load_records, parse_records};
pub use writer::{encode_records, write_records, OutputFormat};
