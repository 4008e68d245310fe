//! HTTP surface for record generation
//!
//! Input collection, XML download delivery, and the plot-series feed sit
//! here as thin wrappers around the domain generator:
//! - `POST /api/generate` materializes a `GenerationConfig` and runs it
//! - `GET /api/records/{concurrent,denial}.xml` download the latest batch
//! - `GET /api/records/series` feeds the plotting consumer

pub mod error_response;
pub mod routes;
pub mod types;


pub use error_response::{ApiError, ErrorResponse};
pub use routes::{router, ApiState};
pub use types::{GenerateRequest, GenerateSummary};
