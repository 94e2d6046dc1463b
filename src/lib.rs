//! Case-insensitive, insertion-ordered store for `Name: Value` header lines.
//!
//! ```
//! use headerstore::HeaderStore;
//!
//! let mut headers = HeaderStore::new();
//! headers.parse_line("Content-Type: application/json").unwrap();
//! headers.parse_line("Authorization: Bearer abc123").unwrap();
//!
//! assert_eq!(headers.get("content-type"), Some("application/json"));
//! assert_eq!(headers.bearer_token(), Some("abc123"));
//! assert!(headers.is_json_request());
//! ```

pub mod config;
pub mod http;

pub use config::{ConfigError, MalformedLinePolicy, StoreConfig};
pub use http::{HeaderStore, ParseError, RequestHeader, Validator, ValidatorError};
