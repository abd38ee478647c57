#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        api::{BrokerageApi, LedgerSource},
        models::{OrderType, TradeSide, TradeStatus},
        test::fixtures::{CLIENT_ID, at, client_session},
    };

    // alice:secret
    const BASIC_AUTH: &str = "Basic YWxpY2U6c2VjcmV0";

    const TRADES_JSON: &str = r#"[
        {"id":1,"clientId":7,"symbol":"AAPL","quantity":10,"price":100.5,"type":"BUY",
         "orderType":"MARKET","status":"EXECUTED","tradeTime":"2024-01-01T10:00:00",
         "fraudCheckPassed":true,"fraudCheckReason":null},
        {"id":2,"clientId":7,"symbol":"AAPL","quantity":4,"price":120,"type":"SELL",
         "orderType":null,"status":"PENDING","tradeTime":null}
    ]"#;

    #[tokio::test]
    async fn fetches_trades_with_basic_auth() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/trades/client/7")
            .match_header("authorization", BASIC_AUTH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(TRADES_JSON)
            .create_async()
            .await;

        let api = BrokerageApi::new(format!("{}/api/", server.url()));
        let trades = api
            .trades_for_client(&client_session(), CLIENT_ID)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(trades.len(), 2);
        assert_eq!(*trades[0].id(), Some(1));
        assert_eq!(*trades[0].client_id(), CLIENT_ID);
        assert_eq!(*trades[0].price(), dec!(100.5));
        assert_eq!(*trades[0].side(), TradeSide::Buy);
        assert_eq!(*trades[0].order_type(), Some(OrderType::Market));
        assert_eq!(*trades[0].trade_time(), at("2024-01-01T10:00:00"));
        assert_eq!(*trades[1].status(), TradeStatus::Pending);
        assert_eq!(*trades[1].trade_time(), None);
    }

    #[tokio::test]
    async fn fetches_holdings() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/portfolio/client/7")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id":3,"symbol":"X","quantity":10,"averagePrice":20,"currentPrice":25,
                     "totalValue":250,"profitLoss":50,"profitLossPercent":25}]"#,
            )
            .create_async()
            .await;

        let api = BrokerageApi::new(format!("{}/api", server.url()));
        let holdings = api
            .holdings_for_client(&client_session(), CLIENT_ID)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(holdings.len(), 1);
        assert_eq!(*holdings[0].quantity(), 10);
        assert_eq!(*holdings[0].average_price(), dec!(20));
        assert_eq!(*holdings[0].total_value(), dec!(250));
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/trades/client/7")
            .with_status(401)
            .create_async()
            .await;

        let api = BrokerageApi::new(format!("{}/api", server.url()));
        let err = api
            .trades_for_client(&client_session(), CLIENT_ID)
            .await
            .unwrap_err();

        assert!(format!("{:#}", err).contains("401"));
    }

    #[tokio::test]
    async fn malformed_element_fails_whole_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/trades/client/7")
            .with_status(200)
            .with_body(r#"[{"id":1,"clientId":7,"symbol":"AAPL","quantity":-1,"price":1,"type":"BUY"}]"#)
            .create_async()
            .await;

        let api = BrokerageApi::new(format!("{}/api", server.url()));
        let err = api
            .trades_for_client(&client_session(), CLIENT_ID)
            .await
            .unwrap_err();

        assert!(format!("{:#}", err).contains("index 0"));
    }
}
