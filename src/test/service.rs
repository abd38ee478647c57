#[cfg(test)]
mod tests {
    use anyhow::Result;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use crate::{
        api::LedgerSource,
        app::LotMatching,
        models::{Holding, Session, SessionError, Trade},
        services::GainsService,
        test::fixtures::{CLIENT_ID, admin_session, buy, client_session, holding, sell},
    };

    struct StaticLedger {
        trades: Vec<Trade>,
        holdings: Vec<(i64, Holding)>,
    }

    #[async_trait]
    impl LedgerSource for StaticLedger {
        async fn trades_for_client(&self, _session: &Session, client_id: i64) -> Result<Vec<Trade>> {
            Ok(self
                .trades
                .iter()
                .filter(|t| *t.client_id() == client_id)
                .cloned()
                .collect())
        }

        async fn holdings_for_client(
            &self,
            _session: &Session,
            client_id: i64,
        ) -> Result<Vec<Holding>> {
            Ok(self
                .holdings
                .iter()
                .filter(|(owner, _)| *owner == client_id)
                .map(|(_, h)| h.clone())
                .collect())
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    fn service(lot_matching: LotMatching) -> GainsService<StaticLedger> {
        GainsService::new(
            StaticLedger {
                trades: vec![
                    buy(1, "AAPL", 10, dec!(100), "2024-01-01T10:00:00"),
                    sell(2, "AAPL", 10, dec!(120), "2024-01-02T10:00:00"),
                ],
                holdings: vec![(CLIENT_ID, holding("X", 10, dec!(20), dec!(25), dec!(250)))],
            },
            lot_matching,
        )
    }

    #[tokio::test]
    async fn realized_gains_for_own_account() {
        let report = service(LotMatching::AverageCost)
            .realized_gains(&client_session(), None)
            .await
            .unwrap();

        assert_eq!(*report.net_gain_loss(), dec!(200));
    }

    #[tokio::test]
    async fn admin_reads_named_account() {
        let service = service(LotMatching::Fifo);

        let unrealized = service
            .unrealized_gains(&admin_session(), Some(CLIENT_ID))
            .await
            .unwrap();
        let orders = service
            .order_history(&admin_session(), Some(CLIENT_ID))
            .await
            .unwrap();

        assert_eq!(*unrealized.total_unrealized_gain_loss(), dec!(50));
        assert_eq!(orders.len(), 2);
        assert_eq!(*orders[0].trade().id(), Some(2));
    }

    #[tokio::test]
    async fn client_cannot_peek_at_other_accounts() {
        let err = service(LotMatching::AverageCost)
            .realized_gains(&client_session(), Some(99))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SessionError>(),
            Some(SessionError::Forbidden { requested: 99, .. })
        ));
    }

    #[tokio::test]
    async fn calculator_errors_carry_context() {
        let service = GainsService::new(
            StaticLedger {
                trades: vec![sell(1, "AAPL", 0, dec!(1), "2024-01-02T10:00:00")],
                holdings: Vec::new(),
            },
            LotMatching::AverageCost,
        );

        let err = service
            .realized_gains(&client_session(), None)
            .await
            .unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("client 7"));
        assert!(message.contains("zero quantity"));
    }
}
