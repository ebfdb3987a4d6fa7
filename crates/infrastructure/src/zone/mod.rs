pub mod csv_source;

pub use csv_source::{parse_served_tld, parse_zone_table, CsvZoneSource};
