// Data ingestion and normalization for uploaded CSV bytes.

pub mod csv_reader;
pub mod normalize;
pub mod schema;

pub use csv_reader::RawTable;
