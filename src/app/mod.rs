pub mod app;
pub mod calc;
pub mod export;
pub mod history;
pub mod realized;
pub mod ui;
pub mod unrealized;
pub mod utils;

pub use app::{App, Reports, Tab};
pub use realized::{LotMatching, RealizedGainsCalculator};
pub use unrealized::UnrealizedGainsCalculator;
