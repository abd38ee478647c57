use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or ISO `YYYY-MM-DDTHH:MM:SS[.f]`. Blank means absent.
pub fn parse_datetime(field: &str) -> Result<Option<NaiveDateTime>> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(None);
    }

    if let Ok(datetime) = field.parse::<NaiveDateTime>() {
        return Ok(Some(datetime));
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(field, "%Y-%m-%d %H:%M:%S") {
        return Ok(Some(datetime));
    }

    let date = NaiveDate::parse_from_str(field, "%Y-%m-%d")
        .with_context(|| format!("Failed to parse date '{}'", field))?;
    Ok(date.and_hms_opt(0, 0, 0))
}

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

pub fn parse_number<T: FromStr>(field: &str, field_name: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    field
        .trim()
        .parse::<T>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

pub fn parse_optional<T: FromStr>(field: &str, field_name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if field.trim().is_empty() {
        return Ok(None);
    }
    parse_number(field, field_name).map(Some)
}
