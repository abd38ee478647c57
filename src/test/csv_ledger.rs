#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal_macros::dec;
    use tempfile::NamedTempFile;

    use crate::{
        api::{CsvLedger, LedgerSource},
        models::{OrderType, TradeSide, TradeStatus},
        test::fixtures::{CLIENT_ID, at, client_session},
    };

    const TRADES: &str = "\
id,client_id,symbol,side,order_type,quantity,price,status,trade_time
1,7,AAPL,BUY,MARKET,10,100.00,EXECUTED,2024-01-01T10:00:00
2,7,AAPL,Sell,,10,120.00,executed,2024-01-02 10:00:00
3,8,MSFT,BUY,LIMIT,5,50,PENDING,2024-01-03
4,7,MSFT,SELL,MARKET,5,55,REJECTED,
";

    const HOLDINGS: &str = "\
client_id,symbol,quantity,average_price,current_price,total_value
7,X,10,20,25,250
8,Y,1,1,1,1
";

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn reads_trades_for_one_client() {
        let file = write_temp(TRADES);
        let ledger = CsvLedger::new(file.path().to_str(), None);

        let trades = ledger
            .trades_for_client(&client_session(), CLIENT_ID)
            .await
            .unwrap();

        assert_eq!(trades.len(), 3);
        assert_eq!(*trades[0].side(), TradeSide::Buy);
        assert_eq!(*trades[0].order_type(), Some(OrderType::Market));
        assert_eq!(*trades[0].trade_time(), at("2024-01-01T10:00:00"));
        assert_eq!(*trades[1].side(), TradeSide::Sell);
        assert_eq!(*trades[1].order_type(), None);
        assert_eq!(*trades[1].status(), TradeStatus::Executed);
        assert_eq!(*trades[1].price(), dec!(120));
        assert_eq!(*trades[1].trade_time(), at("2024-01-02T10:00:00"));
        assert_eq!(*trades[2].trade_time(), None);
    }

    #[test]
    fn date_only_timestamps_are_midnight() {
        let file = write_temp(TRADES);
        let trades = CsvLedger::new(file.path().to_str(), None)
            .read_trades()
            .unwrap();

        assert_eq!(*trades[2].trade_time(), at("2024-01-03T00:00:00"));
    }

    #[tokio::test]
    async fn reads_holdings_for_one_client() {
        let file = write_temp(HOLDINGS);
        let ledger = CsvLedger::new(None, file.path().to_str());

        let holdings = ledger
            .holdings_for_client(&client_session(), CLIENT_ID)
            .await
            .unwrap();

        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].symbol(), "X");
        assert_eq!(*holdings[0].total_value(), dec!(250));
    }

    #[test]
    fn unknown_side_names_the_row() {
        let file = write_temp(
            "id,client_id,symbol,side,order_type,quantity,price,status,trade_time\n\
             1,7,AAPL,SHORT,,1,1,EXECUTED,\n",
        );

        let err = CsvLedger::new(file.path().to_str(), None)
            .read_trades()
            .unwrap_err();

        assert!(format!("{:#}", err).contains("row 1"));
        assert!(format!("{:#}", err).contains("SHORT"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(CsvLedger::new(None, None).read_trades().is_err());
        assert!(
            CsvLedger::new(Some("/definitely/not/here.csv"), None)
                .read_trades()
                .is_err()
        );
    }
}
