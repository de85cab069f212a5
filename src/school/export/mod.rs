pub mod csv_export;
pub mod export_provider;

pub use csv_export::{CsvExport, RosterRecord};
pub use export_provider::ExportProvider;
