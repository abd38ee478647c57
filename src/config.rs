use anyhow::{Result, bail};
use clap::Args;

use crate::{
    api::{BrokerageApi, CsvLedger, LedgerSource},
    app::LotMatching,
    models::{Role, Session},
};

/// Connection and identity settings. Every flag can also come from the environment or `.env`.
#[derive(Args, Clone)]
pub struct Config {
    /// Base URL of the brokerage API, e.g. http://localhost:8080/api
    #[arg(long, env = "BROKERAGE_API_URL")]
    pub api_url: Option<String>,

    /// Trades CSV to read instead of the API
    #[arg(long, env = "BROKERAGE_TRADES_CSV")]
    pub trades_csv: Option<String>,

    /// Holdings CSV to read instead of the API
    #[arg(long, env = "BROKERAGE_HOLDINGS_CSV")]
    pub holdings_csv: Option<String>,

    #[arg(long, env = "BROKERAGE_USERNAME", default_value = "")]
    pub username: String,

    #[arg(long, env = "BROKERAGE_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    /// CLIENT or ADMIN
    #[arg(long, env = "BROKERAGE_ROLE", default_value = "CLIENT")]
    pub role: Role,

    /// The logged-in client's own account id
    #[arg(long, env = "BROKERAGE_CLIENT_ID")]
    pub client_id: Option<i64>,

    /// Account to report on; admins must set this
    #[arg(long)]
    pub view_client: Option<i64>,

    /// average-cost or fifo
    #[arg(long, env = "BROKERAGE_LOT_MATCHING", default_value = "average-cost")]
    pub lot_matching: LotMatching,
}

impl Config {
    pub fn session(&self) -> Session {
        Session::new(
            self.username.clone(),
            self.password.clone(),
            self.role,
            self.client_id,
        )
    }

    /// CSV files win over the API when both are configured.
    pub fn ledger_source(&self) -> Result<Box<dyn LedgerSource>> {
        if self.trades_csv.is_some() || self.holdings_csv.is_some() {
            return Ok(Box::new(CsvLedger::new(
                self.trades_csv.as_deref(),
                self.holdings_csv.as_deref(),
            )));
        }

        match &self.api_url {
            Some(url) => Ok(Box::new(BrokerageApi::new(url.clone()))),
            None => bail!("Set BROKERAGE_API_URL or pass --trades-csv/--holdings-csv"),
        }
    }
}
