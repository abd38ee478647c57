use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Holding, Session, Trade};

/// Where a client's ledger and open positions come from.
#[async_trait]
pub trait LedgerSource: Send + Sync {
    /// Every trade on the client's account, in whatever order the source keeps them.
    async fn trades_for_client(&self, session: &Session, client_id: i64) -> Result<Vec<Trade>>;

    async fn holdings_for_client(&self, session: &Session, client_id: i64)
    -> Result<Vec<Holding>>;

    /// Source name for logging
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: LedgerSource + ?Sized> LedgerSource for Box<T> {
    async fn trades_for_client(&self, session: &Session, client_id: i64) -> Result<Vec<Trade>> {
        (**self).trades_for_client(session, client_id).await
    }

    async fn holdings_for_client(
        &self,
        session: &Session,
        client_id: i64,
    ) -> Result<Vec<Holding>> {
        (**self).holdings_for_client(session, client_id).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
