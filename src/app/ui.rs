use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap},
};
use rust_decimal::Decimal;
use strum::IntoEnumIterator;

use crate::app::{
    app::{Reports, Tab},
    calc::round_currency,
};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn gain_color(value: Decimal) -> Color {
    if value >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    }
}

fn money(value: Decimal) -> String {
    format!("{:.2}", round_currency(value))
}

fn signed_cell(value: Decimal, suffix: &str) -> Cell<'static> {
    Cell::from(format!("{}{}", money(value), suffix)).style(Style::default().fg(gain_color(value)))
}

fn header(cells: &[&'static str]) -> Row<'static> {
    Row::new(
        cells
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow))),
    )
    .height(1)
}

pub fn render(
    frame: &mut Frame,
    reports: &Reports,
    tab: Tab,
    table_state: &mut TableState,
    popup_message: &Option<String>,
    error_popup: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let titles = Tab::iter().map(|t| t.to_string()).collect::<Vec<_>>();
    let selected = Tab::iter().position(|t| t == tab).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .block(Block::default().title("Brokerage Gains").borders(Borders::ALL));
    frame.render_widget(tabs, chunks[0]);

    frame.render_widget(summary(reports, tab), chunks[1]);

    if reports.row_count(tab) == 0 {
        let empty = match tab {
            Tab::Realized => "No realized gains/losses yet. Realized gains occur when you sell shares.",
            Tab::Unrealized => "No current holdings.",
            Tab::Orders => "No orders yet.",
        };
        let empty_message = Paragraph::new(empty)
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty_message, chunks[2]);
    } else {
        let table = match tab {
            Tab::Realized => realized_table(reports),
            Tab::Unrealized => unrealized_table(reports),
            Tab::Orders => orders_table(reports),
        }
        .block(Block::default().title(tab.to_string()).borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(table, chunks[2], table_state);
    }

    let help = Paragraph::new("q quit | tab/←/→ switch view | ↑/↓ select | e export CSV")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);

    if let Some(message) = error_popup {
        render_popup(frame, "Error", message, Color::Red);
    } else if let Some(message) = popup_message {
        render_popup(frame, "Info", message, Color::Cyan);
    }
}

fn summary(reports: &Reports, tab: Tab) -> Paragraph<'static> {
    let spans = match tab {
        Tab::Realized => {
            let report = reports.realized();
            vec![
                Span::raw("Gains: "),
                Span::styled(money(*report.total_gains()), Style::default().fg(Color::Green)),
                Span::raw("   Losses: "),
                Span::styled(
                    money(report.total_losses().abs()),
                    Style::default().fg(Color::Red),
                ),
                Span::raw("   Net: "),
                Span::styled(
                    money(*report.net_gain_loss()),
                    Style::default().fg(gain_color(*report.net_gain_loss())),
                ),
            ]
        }
        Tab::Unrealized => {
            let report = reports.unrealized();
            let total = *report.total_unrealized_gain_loss();
            vec![
                Span::raw("Invested: "),
                Span::raw(money(*report.total_cost())),
                Span::raw("   Current value: "),
                Span::raw(money(*report.total_current_value())),
                Span::raw("   Unrealized: "),
                Span::styled(
                    format!(
                        "{} ({}%)",
                        money(total),
                        money(*report.total_unrealized_gain_loss_percent())
                    ),
                    Style::default().fg(gain_color(total)),
                ),
            ]
        }
        Tab::Orders => vec![Span::raw(format!("Orders: {}", reports.orders().len()))],
    };

    Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL))
}

fn realized_table(reports: &Reports) -> Table<'static> {
    let rows = reports.realized().records().iter().map(|gain| {
        let buy_time = gain.buy_trade().trade_time();
        let sell_time = gain.sell_trade().trade_time();
        Row::new([
            Cell::from(gain.symbol().clone()),
            Cell::from(buy_time.map(|t| t.format(TIME_FORMAT).to_string()).unwrap_or_default()),
            Cell::from(sell_time.map(|t| t.format(TIME_FORMAT).to_string()).unwrap_or_default()),
            Cell::from(gain.quantity().to_string()),
            Cell::from(money(*gain.buy_price())),
            Cell::from(money(*gain.sell_price())),
            signed_cell(*gain.gain_loss(), ""),
            signed_cell(*gain.gain_loss_percent(), "%"),
        ])
        .height(1)
    });

    Table::new(
        rows.collect::<Vec<_>>(),
        [
            Constraint::Length(10),
            Constraint::Length(18),
            Constraint::Length(18),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(12),
        ],
    )
    .header(header(&[
        "Symbol",
        "Buy Date",
        "Sell Date",
        "Quantity",
        "Buy Price",
        "Sell Price",
        "Gain/Loss",
        "Gain/Loss %",
    ]))
}

fn unrealized_table(reports: &Reports) -> Table<'static> {
    let rows = reports.unrealized().records().iter().map(|holding| {
        Row::new([
            Cell::from(holding.symbol().clone()),
            Cell::from(holding.quantity().to_string()),
            Cell::from(money(*holding.average_price())),
            Cell::from(money(*holding.current_price())),
            Cell::from(money(*holding.total_cost())),
            Cell::from(money(*holding.current_value())),
            signed_cell(*holding.unrealized_gain_loss(), ""),
            signed_cell(*holding.unrealized_gain_loss_percent(), "%"),
        ])
        .height(1)
    });

    Table::new(
        rows.collect::<Vec<_>>(),
        [
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(12),
        ],
    )
    .header(header(&[
        "Symbol",
        "Quantity",
        "Avg Buy Price",
        "Current Price",
        "Total Cost",
        "Current Value",
        "Unr. G/L",
        "Unr. G/L %",
    ]))
}

fn orders_table(reports: &Reports) -> Table<'static> {
    let rows = reports.orders().iter().map(|order| {
        let trade = order.trade();
        Row::new([
            Cell::from(trade.id().map(|id| id.to_string()).unwrap_or_default()),
            Cell::from(
                trade
                    .trade_time()
                    .map(|t| t.format(TIME_FORMAT).to_string())
                    .unwrap_or_default(),
            ),
            Cell::from(trade.symbol().clone()),
            Cell::from(trade.side().to_string()),
            Cell::from(trade.quantity().to_string()),
            Cell::from(money(*trade.price())),
            Cell::from(money(*order.total_value())),
            Cell::from(trade.status().to_string()),
        ])
        .height(1)
    });

    Table::new(
        rows.collect::<Vec<_>>(),
        [
            Constraint::Length(8),
            Constraint::Length(18),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(12),
        ],
    )
    .header(header(&[
        "Order ID", "Date", "Symbol", "Type", "Quantity", "Price", "Total", "Status",
    ]))
}

fn popup_area(area: Rect) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn render_popup(frame: &mut Frame, title: &str, message: &str, color: Color) {
    let area = popup_area(frame.area());
    let popup = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
