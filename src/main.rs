use anyhow::Result;
use brokerage_gains::{
    app::{
        App, Reports,
        calc::round_currency,
        export::{export_orders, export_realized, export_unrealized},
    },
    config::Config,
    services::GainsService,
};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "brokerage-gains")]
#[command(about = "Realized and unrealized gains for a brokerage account")]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profit/loss crystallized by executed sells
    Realized {
        /// Write the report as CSV to this path
        #[arg(long)]
        export: Option<String>,
    },
    /// Paper profit/loss on open positions
    Unrealized {
        #[arg(long)]
        export: Option<String>,
    },
    /// Every order, most recent first
    Orders {
        #[arg(long)]
        export: Option<String>,
    },
    /// Browse all reports in the terminal
    Tui,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let session = cli.config.session();
    let requested = cli.config.view_client;
    let service = GainsService::new(cli.config.ledger_source()?, cli.config.lot_matching);

    match cli.command {
        Commands::Realized { export } => {
            let report = service.realized_gains(&session, requested).await?;
            for gain in report.records() {
                println!(
                    "{:<8} {:>6} @ {:>10} -> {:>10}  {:>12}  {:>8}%",
                    gain.symbol(),
                    gain.quantity(),
                    round_currency(*gain.buy_price()),
                    round_currency(*gain.sell_price()),
                    round_currency(*gain.gain_loss()),
                    round_currency(*gain.gain_loss_percent()),
                );
            }
            println!(
                "Gains {}  Losses {}  Net {}",
                round_currency(*report.total_gains()),
                round_currency(*report.total_losses()),
                round_currency(*report.net_gain_loss()),
            );
            if let Some(path) = export {
                let written = export_realized(&report, &path)?;
                info!(path = %written.display(), "exported realized gains");
            }
        }
        Commands::Unrealized { export } => {
            let report = service.unrealized_gains(&session, requested).await?;
            for holding in report.records() {
                println!(
                    "{:<8} {:>6}  cost {:>12}  value {:>12}  {:>12}  {:>8}%",
                    holding.symbol(),
                    holding.quantity(),
                    round_currency(*holding.total_cost()),
                    round_currency(*holding.current_value()),
                    round_currency(*holding.unrealized_gain_loss()),
                    round_currency(*holding.unrealized_gain_loss_percent()),
                );
            }
            println!(
                "Invested {}  Value {}  Unrealized {} ({}%)",
                round_currency(*report.total_cost()),
                round_currency(*report.total_current_value()),
                round_currency(*report.total_unrealized_gain_loss()),
                round_currency(*report.total_unrealized_gain_loss_percent()),
            );
            if let Some(path) = export {
                let written = export_unrealized(&report, &path)?;
                info!(path = %written.display(), "exported unrealized gains");
            }
        }
        Commands::Orders { export } => {
            let orders = service.order_history(&session, requested).await?;
            for order in &orders {
                let trade = order.trade();
                println!(
                    "{:>6} {:<20} {:<8} {:<4} {:>6} @ {:>10}  {}",
                    trade.id().map(|id| id.to_string()).unwrap_or_default(),
                    trade
                        .trade_time()
                        .map(|t| t.to_string())
                        .unwrap_or_default(),
                    trade.symbol(),
                    trade.side(),
                    trade.quantity(),
                    trade.price(),
                    trade.status(),
                );
            }
            if let Some(path) = export {
                let written = export_orders(&orders, &path)?;
                info!(path = %written.display(), "exported order history");
            }
        }
        Commands::Tui => {
            let (realized, unrealized, orders) = tokio::try_join!(
                service.realized_gains(&session, requested),
                service.unrealized_gains(&session, requested),
                service.order_history(&session, requested),
            )?;

            let mut app = App::new(Reports::new(realized, unrealized, orders));
            app.run()?;
        }
    }

    Ok(())
}
