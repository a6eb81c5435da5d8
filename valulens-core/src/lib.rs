//! ValuLens Core — the result renderer and its collaborators.
//!
//! Everything needed to turn one analysis payload into a display document:
//! - Payload model (`model`) — all-optional, never fails field-by-field
//! - Formatting contract (`format`) — percent / number / text / N/M classification
//! - Report builders (`report`) — pure payload → sections transformation
//! - Analysis client (`client`) — one blocking POST per request
//! - Client configuration (`config`) and a bundled sample payload (`sample`)

pub mod client;
pub mod config;
pub mod format;
pub mod model;
pub mod report;
pub mod sample;

pub use client::{AnalysisClient, ClientError};
pub use config::ClientConfig;
pub use model::AnalysisResult;
pub use report::{build_report, Report, Section};
