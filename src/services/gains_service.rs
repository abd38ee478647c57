use anyhow::{Context, Result};
use tracing::info;

use crate::{
    api::LedgerSource,
    app::{
        history::order_history,
        realized::{LotMatching, RealizedGainsCalculator},
        unrealized::UnrealizedGainsCalculator,
    },
    models::{Order, RealizedGainsReport, Session, UnrealizedGainsReport},
};

/// Fetches one snapshot from a ledger source and runs the matching calculator over it.
pub struct GainsService<S: LedgerSource> {
    source: S,
    realized: RealizedGainsCalculator,
    unrealized: UnrealizedGainsCalculator,
}

impl<S: LedgerSource> GainsService<S> {
    pub fn new(source: S, lot_matching: LotMatching) -> Self {
        Self {
            source,
            realized: RealizedGainsCalculator::new(lot_matching),
            unrealized: UnrealizedGainsCalculator,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn realized_gains(
        &self,
        session: &Session,
        requested: Option<i64>,
    ) -> Result<RealizedGainsReport> {
        let client_id = session.resolve_client(requested)?;
        let trades = self
            .source
            .trades_for_client(session, client_id)
            .await
            .with_context(|| format!("Failed to load trades from {}", self.source.name()))?;

        let report = self
            .realized
            .compute(&trades)
            .with_context(|| format!("Failed to compute realized gains for client {}", client_id))?;

        info!(
            client_id,
            records = report.records().len(),
            net_gain_loss = %report.net_gain_loss(),
            "realized gains ready"
        );
        Ok(report)
    }

    pub async fn unrealized_gains(
        &self,
        session: &Session,
        requested: Option<i64>,
    ) -> Result<UnrealizedGainsReport> {
        let client_id = session.resolve_client(requested)?;
        let holdings = self
            .source
            .holdings_for_client(session, client_id)
            .await
            .with_context(|| format!("Failed to load holdings from {}", self.source.name()))?;

        let report = self.unrealized.compute(&holdings).with_context(|| {
            format!("Failed to compute unrealized gains for client {}", client_id)
        })?;

        info!(
            client_id,
            holdings = report.records().len(),
            total_unrealized_gain_loss = %report.total_unrealized_gain_loss(),
            "unrealized gains ready"
        );
        Ok(report)
    }

    pub async fn order_history(
        &self,
        session: &Session,
        requested: Option<i64>,
    ) -> Result<Vec<Order>> {
        let client_id = session.resolve_client(requested)?;
        let trades = self
            .source
            .trades_for_client(session, client_id)
            .await
            .with_context(|| format!("Failed to load trades from {}", self.source.name()))?;

        let orders = order_history(&trades)
            .with_context(|| format!("Failed to build order history for client {}", client_id))?;

        info!(client_id, orders = orders.len(), "order history ready");
        Ok(orders)
    }
}
