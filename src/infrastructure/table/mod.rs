mod csv_table_loader;

pub use csv_table_loader::CsvTableLoader;
