use std::path::PathBuf;

use anyhow::{Context, Error, Result};
use async_trait::async_trait;
use csv::{Reader, StringRecord};
use tracing::debug;

use super::base::LedgerSource;
use crate::{
    app::utils::{parse_datetime, parse_decimal, parse_number, parse_optional},
    models::{Holding, Session, Trade, TradeSide, TradeStatus},
};

const TRADE_COLUMNS: usize = 9;
const HOLDING_COLUMNS: usize = 6;

/// Ledger exported to CSV files, for working offline.
///
/// Trades: `id,client_id,symbol,side,order_type,quantity,price,status,trade_time`.
/// Holdings: `client_id,symbol,quantity,average_price,current_price,total_value`.
#[derive(Clone, Debug, Default)]
pub struct CsvLedger {
    trades_path: Option<PathBuf>,
    holdings_path: Option<PathBuf>,
}

impl CsvLedger {
    pub fn new(trades_path: Option<&str>, holdings_path: Option<&str>) -> Self {
        let expand = |path: &str| PathBuf::from(shellexpand::tilde(path).as_ref());
        Self {
            trades_path: trades_path.map(expand),
            holdings_path: holdings_path.map(expand),
        }
    }

    fn open(path: &Option<PathBuf>, what: &str) -> Result<Reader<std::fs::File>> {
        let path = path
            .as_ref()
            .with_context(|| format!("No {} CSV file configured", what))?;
        Reader::from_path(path)
            .with_context(|| format!("Failed to open CSV file at path: {}", path.display()))
    }

    pub fn read_trades(&self) -> Result<Vec<Trade>> {
        let mut reader = Self::open(&self.trades_path, "trades")?;
        let mut trades = Vec::new();

        for (row_idx, record) in reader.records().enumerate() {
            let rec = record
                .with_context(|| format!("Failed to read CSV record at row {}", row_idx + 1))?;
            let trade =
                parse_trade(&rec).with_context(|| format!("Invalid trade at row {}", row_idx + 1))?;
            trades.push(trade);
        }

        Ok(trades)
    }

    /// Holdings keyed by client id.
    pub fn read_holdings(&self) -> Result<Vec<(i64, Holding)>> {
        let mut reader = Self::open(&self.holdings_path, "holdings")?;
        let mut holdings = Vec::new();

        for (row_idx, record) in reader.records().enumerate() {
            let rec = record
                .with_context(|| format!("Failed to read CSV record at row {}", row_idx + 1))?;
            let holding = parse_holding(&rec)
                .with_context(|| format!("Invalid holding at row {}", row_idx + 1))?;
            holdings.push(holding);
        }

        Ok(holdings)
    }
}

fn check_columns(rec: &StringRecord, expected: usize) -> Result<()> {
    if rec.len() < expected {
        return Err(Error::msg(format!(
            "expected at least {} columns, found {}",
            expected,
            rec.len()
        )));
    }
    Ok(())
}

fn parse_trade(rec: &StringRecord) -> Result<Trade> {
    check_columns(rec, TRADE_COLUMNS)?;

    let side = rec[3]
        .trim()
        .parse::<TradeSide>()
        .with_context(|| format!("Unknown trade side '{}'", &rec[3]))?;
    let order_type = parse_optional(&rec[4], "order type")?;
    let status = rec[7]
        .trim()
        .parse::<TradeStatus>()
        .with_context(|| format!("Unknown trade status '{}'", &rec[7]))?;

    Ok(Trade::new(
        parse_optional(&rec[0], "id")?,
        parse_number(&rec[1], "client id")?,
        rec[2].trim().to_string(),
        parse_number(&rec[5], "quantity")?,
        parse_decimal(&rec[6], "price")?,
        side,
        order_type,
        status,
        parse_datetime(&rec[8])?,
    ))
}

fn parse_holding(rec: &StringRecord) -> Result<(i64, Holding)> {
    check_columns(rec, HOLDING_COLUMNS)?;

    let client_id = parse_number(&rec[0], "client id")?;
    let holding = Holding::new(
        rec[1].trim().to_string(),
        parse_number(&rec[2], "quantity")?,
        parse_decimal(&rec[3], "average price")?,
        parse_decimal(&rec[4], "current price")?,
        parse_decimal(&rec[5], "total value")?,
    );

    Ok((client_id, holding))
}

#[async_trait]
impl LedgerSource for CsvLedger {
    async fn trades_for_client(&self, _session: &Session, client_id: i64) -> Result<Vec<Trade>> {
        let trades: Vec<Trade> = self
            .read_trades()?
            .into_iter()
            .filter(|trade| *trade.client_id() == client_id)
            .collect();

        debug!(client_id, trades = trades.len(), "read trades from csv");
        Ok(trades)
    }

    async fn holdings_for_client(
        &self,
        _session: &Session,
        client_id: i64,
    ) -> Result<Vec<Holding>> {
        let holdings: Vec<Holding> = self
            .read_holdings()?
            .into_iter()
            .filter(|(owner, _)| *owner == client_id)
            .map(|(_, holding)| holding)
            .collect();

        debug!(client_id, holdings = holdings.len(), "read holdings from csv");
        Ok(holdings)
    }

    fn name(&self) -> &str {
        "csv ledger"
    }
}
