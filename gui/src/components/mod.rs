// GUI components module
pub mod chart;
pub mod data_table;
pub mod error_banner;
pub mod kpi;

pub use data_table::DataTable;
pub use error_banner::ErrorBanner;
pub use kpi::KpiRow;
