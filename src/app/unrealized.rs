use tracing::debug;

use crate::{
    app::calc::{checked_product, checked_sub, checked_sum, percent_change, validate_holding},
    error::GainsError,
    models::{Holding, UnrealizedGain, UnrealizedGainsReport},
};

#[derive(Clone, Copy, Debug, Default)]
pub struct UnrealizedGainsCalculator;

impl UnrealizedGainsCalculator {
    /// Values every holding against its average cost. Output keeps the input order.
    pub fn compute(&self, holdings: &[Holding]) -> Result<UnrealizedGainsReport, GainsError> {
        let records = holdings
            .iter()
            .map(value_holding)
            .collect::<Result<Vec<_>, _>>()?;

        let total_cost = checked_sum(records.iter().map(|r| *r.total_cost()), "total cost")?;
        let total_current_value = checked_sum(
            records.iter().map(|r| *r.current_value()),
            "total current value",
        )?;
        let total_unrealized_gain_loss =
            checked_sub(total_current_value, total_cost, "total unrealized gain/loss")?;
        let total_unrealized_gain_loss_percent =
            percent_change(total_unrealized_gain_loss, total_cost)?;

        debug!(
            holdings = records.len(),
            %total_cost,
            %total_current_value,
            "computed unrealized gains"
        );

        Ok(UnrealizedGainsReport::new(
            records,
            total_cost,
            total_current_value,
            total_unrealized_gain_loss,
            total_unrealized_gain_loss_percent,
        ))
    }
}

fn value_holding(holding: &Holding) -> Result<UnrealizedGain, GainsError> {
    validate_holding(holding)?;

    let total_cost = checked_product(*holding.quantity(), *holding.average_price(), "total cost")?;
    let current_value = *holding.total_value();
    let unrealized_gain_loss = checked_sub(current_value, total_cost, "unrealized gain/loss")?;
    let unrealized_gain_loss_percent = percent_change(unrealized_gain_loss, total_cost)?;

    Ok(UnrealizedGain::new(
        holding.symbol().clone(),
        *holding.quantity(),
        *holding.average_price(),
        *holding.current_price(),
        total_cost,
        current_value,
        unrealized_gain_loss,
        unrealized_gain_loss_percent,
    ))
}
