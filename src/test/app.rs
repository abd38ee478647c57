#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crossterm::event::KeyCode;
    use rust_decimal_macros::dec;

    use crate::{
        app::{App, Reports, Tab, history::order_history, realized::RealizedGainsCalculator},
        models::UnrealizedGainsReport,
        test::fixtures::{buy, sell},
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn set_sample_app() -> App {
        let trades = vec![
            buy(1, "AAPL", 10, dec!(100), "2024-01-01T10:00:00"),
            sell(2, "AAPL", 5, dec!(120), "2024-01-02T10:00:00"),
            sell(3, "AAPL", 5, dec!(90), "2024-01-03T10:00:00"),
        ];
        let realized = RealizedGainsCalculator::default().compute(&trades).unwrap();
        let orders = order_history(&trades).unwrap();
        App::new(Reports::new(realized, UnrealizedGainsReport::default(), orders))
    }

    #[test]
    fn tabs_cycle_both_ways() {
        assert_eq!(Tab::Realized.next(), Tab::Unrealized);
        assert_eq!(Tab::Orders.next(), Tab::Realized);
        assert_eq!(Tab::Realized.previous(), Tab::Orders);
        assert_eq!(Tab::Realized.to_string(), "Realized Gains");
    }

    #[test]
    fn row_selection_wraps() {
        let mut app = set_sample_app();

        app.handle_key(KeyCode::Down, today());
        assert_eq!(app.selected(), Some(0));
        app.handle_key(KeyCode::Down, today());
        assert_eq!(app.selected(), Some(1));
        app.handle_key(KeyCode::Down, today());
        assert_eq!(app.selected(), Some(0));
        app.handle_key(KeyCode::Up, today());
        assert_eq!(app.selected(), Some(1));
    }

    #[test]
    fn switching_tab_clears_selection() {
        let mut app = set_sample_app();

        app.handle_key(KeyCode::Down, today());
        app.handle_key(KeyCode::Tab, today());

        assert_eq!(app.tab(), Tab::Unrealized);
        assert_eq!(app.selected(), None);

        // No holdings, nothing to select.
        app.handle_key(KeyCode::Down, today());
        assert_eq!(app.selected(), None);
    }

    #[test]
    fn q_quits() {
        let mut app = set_sample_app();

        assert!(!app.handle_key(KeyCode::Char('x'), today()));
        assert!(app.handle_key(KeyCode::Char('q'), today()));
    }

    #[test]
    fn row_counts_follow_reports() {
        let app_reports = {
            let trades = vec![
                buy(1, "AAPL", 10, dec!(100), "2024-01-01T10:00:00"),
                sell(2, "AAPL", 5, dec!(120), "2024-01-02T10:00:00"),
            ];
            let realized = RealizedGainsCalculator::default().compute(&trades).unwrap();
            Reports::new(
                realized,
                UnrealizedGainsReport::default(),
                order_history(&trades).unwrap(),
            )
        };

        assert_eq!(app_reports.row_count(Tab::Realized), 1);
        assert_eq!(app_reports.row_count(Tab::Unrealized), 0);
        assert_eq!(app_reports.row_count(Tab::Orders), 2);
    }
}
