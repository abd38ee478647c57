use std::collections::{HashMap, VecDeque};

use derive_new::new;
use rust_decimal::Decimal;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, warn};

use crate::{
    app::calc::{checked_product, checked_sub, checked_sum, mean, percent_change, validate_trade},
    error::GainsError,
    models::{RealizedGain, RealizedGainsReport, Trade},
};

/// How a sell is paired with the buys that preceded it.
#[derive(Clone, Copy, Debug, Default, Display, EnumIter, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum LotMatching {
    /// Each sell is priced against the plain mean of every earlier buy price. Buys are never
    /// used up, so one purchase can back any number of sells.
    #[default]
    AverageCost,
    /// Sells drain buy lots oldest first.
    Fifo,
}

#[derive(Clone, Copy, Debug, Default, new)]
pub struct RealizedGainsCalculator {
    lot_matching: LotMatching,
}

struct SymbolBucket<'a> {
    symbol: &'a str,
    buys: Vec<&'a Trade>,
    sells: Vec<&'a Trade>,
}

struct Lot<'a> {
    trade: &'a Trade,
    remaining: u32,
}

impl RealizedGainsCalculator {
    pub fn lot_matching(&self) -> LotMatching {
        self.lot_matching
    }

    pub fn compute(&self, trades: &[Trade]) -> Result<RealizedGainsReport, GainsError> {
        let executed: Vec<&Trade> = trades.iter().filter(|trade| trade.is_executed()).collect();
        for trade in &executed {
            validate_trade(trade)?;
        }

        let mut records = Vec::new();
        for bucket in group_by_symbol(&executed) {
            match self.lot_matching {
                LotMatching::AverageCost => match_average_cost(&bucket, &mut records)?,
                LotMatching::Fifo => match_fifo(&bucket, &mut records)?,
            }
        }

        // Stable, so sells at the same instant keep their ledger order.
        records.sort_by(|a, b| {
            b.sell_trade()
                .timeline_key()
                .cmp(&a.sell_trade().timeline_key())
        });

        let total_gains = checked_sum(
            records
                .iter()
                .map(|record| *record.gain_loss())
                .filter(|gain| *gain > Decimal::ZERO),
            "total gains",
        )?;
        let total_losses = checked_sum(
            records
                .iter()
                .map(|record| *record.gain_loss())
                .filter(|loss| *loss < Decimal::ZERO),
            "total losses",
        )?;
        let net_gain_loss = checked_sum([total_gains, total_losses], "net gain/loss")?;

        debug!(
            trades = trades.len(),
            executed = executed.len(),
            records = records.len(),
            policy = %self.lot_matching,
            "computed realized gains"
        );

        Ok(RealizedGainsReport::new(
            records,
            total_gains,
            total_losses,
            net_gain_loss,
        ))
    }
}

/// Buckets trades per symbol in order of first appearance, buys registered before sells.
fn group_by_symbol<'a>(executed: &[&'a Trade]) -> Vec<SymbolBucket<'a>> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut buckets: Vec<SymbolBucket<'a>> = Vec::new();

    let buys = executed.iter().copied().filter(|trade| trade.is_buy());
    let sells = executed.iter().copied().filter(|trade| trade.is_sell());

    for trade in buys.chain(sells) {
        let symbol = trade.symbol().as_str();
        let slot = *index.entry(symbol).or_insert_with(|| {
            buckets.push(SymbolBucket {
                symbol,
                buys: Vec::new(),
                sells: Vec::new(),
            });
            buckets.len() - 1
        });

        let bucket = &mut buckets[slot];
        if trade.is_buy() {
            bucket.buys.push(trade);
        } else {
            bucket.sells.push(trade);
        }
    }

    buckets
}

fn match_average_cost(
    bucket: &SymbolBucket<'_>,
    records: &mut Vec<RealizedGain>,
) -> Result<(), GainsError> {
    for sell in &bucket.sells {
        let sell_time = sell.timeline_key();
        let matching: Vec<&Trade> = bucket
            .buys
            .iter()
            .copied()
            .filter(|buy| buy.timeline_key() < sell_time)
            .collect();

        let prices: Vec<Decimal> = matching.iter().map(|buy| *buy.price()).collect();
        let (Some(first_buy), Some(avg_buy_price)) = (matching.first(), mean(&prices)?) else {
            continue;
        };

        let quantity = *sell.quantity();
        let spread = checked_sub(*sell.price(), avg_buy_price, "gain/loss")?;
        let gain_loss = checked_product(quantity, spread, "gain/loss")?;
        let gain_loss_percent = percent_change(spread, avg_buy_price)?;

        records.push(build_record(
            bucket.symbol,
            first_buy,
            sell,
            avg_buy_price,
            gain_loss,
            gain_loss_percent,
        ));
    }

    Ok(())
}

fn match_fifo(
    bucket: &SymbolBucket<'_>,
    records: &mut Vec<RealizedGain>,
) -> Result<(), GainsError> {
    let mut timeline: Vec<&Trade> = bucket
        .buys
        .iter()
        .chain(bucket.sells.iter())
        .copied()
        .collect();
    // A buy stamped at the same instant as a sell is not "prior" to it.
    timeline.sort_by_key(|trade| (trade.timeline_key(), trade.is_buy()));

    let mut lots: VecDeque<Lot<'_>> = VecDeque::new();

    for trade in timeline {
        if trade.is_buy() {
            lots.push_back(Lot {
                trade,
                remaining: *trade.quantity(),
            });
            continue;
        }

        let wanted = *trade.quantity();
        let available: u64 = lots.iter().map(|lot| u64::from(lot.remaining)).sum();
        let Some(first_buy) = lots.front().map(|lot| lot.trade) else {
            continue;
        };
        if available < u64::from(wanted) {
            warn!(
                symbol = bucket.symbol,
                sell_quantity = wanted,
                owned_quantity = available,
                "selling more shares than owned, skipping sell"
            );
            continue;
        }

        let mut remaining = wanted;
        let mut cost = Decimal::ZERO;
        while remaining > 0 {
            let Some(lot) = lots.front_mut() else {
                break;
            };
            let take = remaining.min(lot.remaining);
            cost = checked_sum(
                [cost, checked_product(take, *lot.trade.price(), "lot cost")?],
                "lot cost",
            )?;
            remaining -= take;
            lot.remaining -= take;
            if lot.remaining == 0 {
                lots.pop_front();
            }
        }

        // Gain comes from the exact lot cost; the per-share price is only shown.
        let proceeds = checked_product(wanted, *trade.price(), "sale proceeds")?;
        let gain_loss = checked_sub(proceeds, cost, "gain/loss")?;
        let gain_loss_percent = percent_change(gain_loss, cost)?;
        let buy_price = cost
            .checked_div(Decimal::from(wanted))
            .ok_or(GainsError::Overflow("lot cost per share"))?;

        records.push(build_record(
            bucket.symbol,
            first_buy,
            trade,
            buy_price,
            gain_loss,
            gain_loss_percent,
        ));
    }

    Ok(())
}

fn build_record(
    symbol: &str,
    buy_trade: &Trade,
    sell_trade: &Trade,
    buy_price: Decimal,
    gain_loss: Decimal,
    gain_loss_percent: Decimal,
) -> RealizedGain {
    RealizedGain::new(
        symbol.to_string(),
        buy_trade.clone(),
        sell_trade.clone(),
        *sell_trade.quantity(),
        buy_price,
        *sell_trade.price(),
        gain_loss,
        gain_loss_percent,
    )
}
