use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use csv::Writer;
use strum_macros::{Display, EnumIter};

use crate::{
    app::calc::round_currency,
    models::{Order, OrderType, RealizedGainsReport, UnrealizedGainsReport},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const REALIZED_HEADERS: [&str; 8] = [
    "Symbol",
    "Buy Date",
    "Sell Date",
    "Quantity",
    "Buy Price",
    "Sell Price",
    "Gain/Loss",
    "Gain/Loss %",
];

const UNREALIZED_HEADERS: [&str; 8] = [
    "Symbol",
    "Quantity",
    "Avg Buy Price",
    "Current Price",
    "Total Cost",
    "Current Value",
    "Unrealized Gain/Loss",
    "Gain/Loss %",
];

const ORDER_HEADERS: [&str; 9] = [
    "Order ID",
    "Date & Time",
    "Symbol",
    "Type",
    "Order Type",
    "Quantity",
    "Price",
    "Total Value",
    "Status",
];

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum ExportKind {
    RealizedGains,
    UnrealizedGains,
    OrderHistory,
}

impl ExportKind {
    /// e.g. `realized-gains-2024-03-01.csv`
    pub fn default_file_name(&self, date: NaiveDate) -> String {
        format!("{}-{}.csv", self, date.format("%Y-%m-%d"))
    }
}

fn format_time(time: &Option<NaiveDateTime>) -> String {
    time.map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn write_realized<W: Write>(report: &RealizedGainsReport, writer: W) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(REALIZED_HEADERS)?;

    for gain in report.records() {
        csv.write_record([
            gain.symbol().clone(),
            format_time(gain.buy_trade().trade_time()),
            format_time(gain.sell_trade().trade_time()),
            gain.quantity().to_string(),
            format!("{:.2}", round_currency(*gain.buy_price())),
            format!("{:.2}", round_currency(*gain.sell_price())),
            format!("{:.2}", round_currency(*gain.gain_loss())),
            format!("{:.2}", round_currency(*gain.gain_loss_percent())),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

pub fn write_unrealized<W: Write>(report: &UnrealizedGainsReport, writer: W) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(UNREALIZED_HEADERS)?;

    for holding in report.records() {
        csv.write_record([
            holding.symbol().clone(),
            holding.quantity().to_string(),
            format!("{:.2}", round_currency(*holding.average_price())),
            format!("{:.2}", round_currency(*holding.current_price())),
            format!("{:.2}", round_currency(*holding.total_cost())),
            format!("{:.2}", round_currency(*holding.current_value())),
            format!("{:.2}", round_currency(*holding.unrealized_gain_loss())),
            format!("{:.2}", round_currency(*holding.unrealized_gain_loss_percent())),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

pub fn write_orders<W: Write>(orders: &[Order], writer: W) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(ORDER_HEADERS)?;

    for order in orders {
        let trade = order.trade();
        csv.write_record([
            trade.id().map(|id| id.to_string()).unwrap_or_default(),
            format_time(trade.trade_time()),
            trade.symbol().clone(),
            trade.side().to_string(),
            trade.order_type().unwrap_or(OrderType::Market).to_string(),
            trade.quantity().to_string(),
            trade.price().normalize().to_string(),
            format!("{:.2}", round_currency(*order.total_value())),
            trade.status().to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Expands `~` and creates the file, returning the path that was written.
pub fn create_export_file(path: &str) -> Result<(PathBuf, File)> {
    let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
    let file = File::create(&expanded)
        .with_context(|| format!("Failed to create export file at path: {}", path))?;
    Ok((expanded, file))
}

pub fn export_realized(report: &RealizedGainsReport, path: &str) -> Result<PathBuf> {
    let (path, file) = create_export_file(path)?;
    write_realized(report, file).with_context(|| context(&path))?;
    Ok(path)
}

pub fn export_unrealized(report: &UnrealizedGainsReport, path: &str) -> Result<PathBuf> {
    let (path, file) = create_export_file(path)?;
    write_unrealized(report, file).with_context(|| context(&path))?;
    Ok(path)
}

pub fn export_orders(orders: &[Order], path: &str) -> Result<PathBuf> {
    let (path, file) = create_export_file(path)?;
    write_orders(orders, file).with_context(|| context(&path))?;
    Ok(path)
}

fn context(path: &Path) -> String {
    format!("Failed to write CSV export to {}", path.display())
}
