//! Input checks applied before anything is sent to the API

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Currency used when none is given
pub const DEFAULT_CURRENCY: &str = "USD";

/// Trimmed name; blank names are rejected.
pub fn required_name(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("Name is required.".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Trimmed optional text; blank becomes `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Replace `current` when a new value was given. A blank value clears it.
pub fn merge_text(current: Option<String>, given: Option<&str>) -> Option<String> {
    match given {
        Some(value) => optional_text(Some(value)),
        None => current,
    }
}

/// An offer must point at an existing product and supplier.
pub fn offer_links(product_id: i64, supplier_id: i64) -> Result<()> {
    if product_id <= 0 || supplier_id <= 0 {
        return Err(Error::Validation(
            "Select a product and a supplier.".to_string(),
        ));
    }
    Ok(())
}

pub fn non_negative_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::Validation(
            "Unit price must be zero or greater.".to_string(),
        ));
    }
    Ok(price)
}

pub fn non_negative_stock(label: &str, stock: i64) -> Result<i64> {
    if stock < 0 {
        return Err(Error::Validation(format!(
            "{} must be zero or greater.",
            label
        )));
    }
    Ok(stock)
}

/// Upper-cased currency code, `USD` when blank.
pub fn currency(value: Option<&str>) -> String {
    optional_text(value)
        .map(|c| c.to_uppercase())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

/// `YYYY-MM-DD` date; blank becomes `None`.
pub fn expiry_date(value: Option<&str>) -> Result<Option<String>> {
    match optional_text(value) {
        None => Ok(None),
        Some(date) => NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map(|d| Some(d.format("%Y-%m-%d").to_string()))
            .map_err(|_| {
                Error::Validation(format!(
                    "Invalid expiry date '{}'. Use YYYY-MM-DD.",
                    date
                ))
            }),
    }
}

/// Every ID must be a positive number.
pub fn positive_ids(ids: &[i64]) -> Result<()> {
    if ids.is_empty() {
        return Err(Error::Validation("Enter at least one offer ID.".to_string()));
    }
    if let Some(bad) = ids.iter().find(|id| **id <= 0) {
        return Err(Error::Validation(format!(
            "Invalid offer ID {}. IDs must be positive.",
            bad
        )));
    }
    Ok(())
}
