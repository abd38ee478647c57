mod app;
mod brokerage;
mod csv_ledger;
mod service;
mod session;
