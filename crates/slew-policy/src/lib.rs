//! Priority policy trait and scoring context for Slew.
//!
//! The `PriorityPolicy` trait defines the `&self` score function with a
//! `ScoreContext` carrying the target, sensor, injected random source,
//! and free-form options. `target_stream` gives callers a reproducible
//! per-target random stream to inject.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod options;
pub mod policy;
pub mod source;

pub use context::ScoreContext;
pub use options::PolicyOptions;
pub use policy::PriorityPolicy;
pub use source::{target_stream, UniformSource};
