//! Stream coordination: tokens in, result triples out
//!
//! - [`StreamCoordinator`]: owns the moment accumulator and the median
//!   structure, rounds results to the configured precision
//! - [`Token`]: classifies raw input as value, command or garbage
//! - [`Session`]: line-level driver applying commands and multi-value lines
//! - [`Summary`]: the `mean,stddev,median` triple
//!
//! # Example
//!
//! ```
//! use streamstats::stream::StreamCoordinator;
//!
//! let mut stream = StreamCoordinator::new();
//!
//! for raw in ["1", "2", "3"] {
//!     let summary = stream.observe(raw).unwrap();
//!     println!("{}", summary);
//! }
//!
//! stream.reset();
//! assert!(stream.is_empty());
//! ```

mod coordinator;
mod session;
mod summary;
mod token;

pub use coordinator::{StreamConfig, StreamCoordinator, DEFAULT_PRECISION};
pub use session::{parse_precision, Response, Session};
pub use summary::Summary;
pub use token::{Command, Token};
