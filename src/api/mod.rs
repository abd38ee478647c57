pub mod base;
pub mod brokerage;
pub mod csv_ledger;
pub mod dto;
pub mod utils;

pub use base::LedgerSource;
pub use brokerage::BrokerageApi;
pub use csv_ledger::CsvLedger;
