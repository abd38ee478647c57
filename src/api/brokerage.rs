use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{
    base::LedgerSource,
    dto::{PortfolioDto, TradeDto},
    utils::{make_request, parse_response_array},
};
use crate::models::{Holding, Session, Trade};

/// Read-only client for the brokerage backend.
#[derive(Clone, Debug)]
pub struct BrokerageApi {
    client: Client,
    base_url: String,
}

impl BrokerageApi {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LedgerSource for BrokerageApi {
    async fn trades_for_client(&self, session: &Session, client_id: i64) -> Result<Vec<Trade>> {
        let endpoint = format!("trades/client/{}", client_id);
        let res = make_request(&self.client, &self.base_url, &endpoint, session)
            .await
            .with_context(|| format!("Brokerage trades (client {})", client_id))?;

        let trades = parse_response_array::<TradeDto>(res, "trade")?
            .iter()
            .map(TradeDto::to_trade)
            .collect::<Vec<_>>();

        debug!(client_id, trades = trades.len(), "fetched trades");
        Ok(trades)
    }

    async fn holdings_for_client(
        &self,
        session: &Session,
        client_id: i64,
    ) -> Result<Vec<Holding>> {
        let endpoint = format!("portfolio/client/{}", client_id);
        let res = make_request(&self.client, &self.base_url, &endpoint, session)
            .await
            .with_context(|| format!("Brokerage portfolio (client {})", client_id))?;

        let holdings = parse_response_array::<PortfolioDto>(res, "holding")?
            .iter()
            .map(PortfolioDto::to_holding)
            .collect::<Vec<_>>();

        debug!(client_id, holdings = holdings.len(), "fetched holdings");
        Ok(holdings)
    }

    fn name(&self) -> &str {
        "brokerage api"
    }
}
