pub mod holding;
pub mod order;
pub mod realized_gain;
pub mod session;
pub mod trade;
pub mod unrealized_gain;

pub use holding::Holding;
pub use order::Order;
pub use realized_gain::{RealizedGain, RealizedGainsReport};
pub use session::{Role, Session, SessionError};
pub use trade::{OrderType, Trade, TradeSide, TradeStatus};
pub use unrealized_gain::{UnrealizedGain, UnrealizedGainsReport};
