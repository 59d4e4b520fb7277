//! Output sinks: tabular (CSV), document (JSON), and relational (Postgres).

pub mod csv;
pub mod json;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use csv::{write_district_rows, write_lead_rows};
pub use json::write_districts_json;

#[cfg(feature = "postgres")]
pub use postgres::PostgresSink;
