//! Output projections for generated records
//!
//! Pure, order-preserving renderings of a generated batch for the two
//! downstream consumers: XML documents for file download and date-keyed
//! series for plotting.

pub mod series;
pub mod xml;

pub use series::{RecordSeries, SeriesPoint};
pub use xml::{concurrent_records_xml, denial_records_xml};
