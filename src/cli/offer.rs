//! Offer command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::list::run_list_command;
use crate::cli::validate::{
    currency, expiry_date, merge_text, non_negative_price, non_negative_stock, offer_links,
    optional_text,
};
use crate::cli::{CommandContext, OfferFields};
use crate::client::OfferApi;
use crate::client::models::{NewOffer, Offer, OfferUpdate};
use crate::error::{Error, Result};
use crate::models::OfferDisplay;
use crate::output::print_one;
use crate::router::Route;

/// Run the offer list command.
pub async fn list(opts: &GlobalOptions, product_id: i64, limit: Option<usize>) -> Result<()> {
    if product_id <= 0 {
        return Err(Error::Validation("Select a product.".to_string()));
    }

    run_list_command::<Offer, OfferDisplay, _, _>(
        opts,
        Route::Offers,
        limit,
        "offers",
        |client| async move { client.list_offers(product_id).await },
    )
    .await
}

/// Run the offer get command.
pub async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Offers).await?;

    let offer = ctx.finish(ctx.client.get_offer(id).await)?;
    print_one(OfferDisplay::from(offer), ctx.format)
}

/// Check a complete offer body.
fn validated(mut offer: NewOffer) -> Result<NewOffer> {
    offer_links(offer.product_id, offer.supplier_id)?;
    non_negative_price(offer.unit_price)?;
    non_negative_stock("Available stock", offer.stock_available)?;
    non_negative_stock("Reserved stock", offer.stock_reserved)?;
    offer.currency = Some(currency(offer.currency.as_deref()));
    offer.expiry_date = expiry_date(offer.expiry_date.as_deref())?;
    Ok(offer)
}

/// Build a create body from command-line input.
pub fn new_offer(
    product_id: i64,
    supplier_id: i64,
    fields: &OfferFields,
    inactive: bool,
) -> Result<NewOffer> {
    validated(NewOffer {
        product_id,
        supplier_id,
        lot_number: optional_text(fields.lot.as_deref()),
        unit_price: fields.price.unwrap_or(0.0),
        stock_available: fields.stock.unwrap_or(0),
        stock_reserved: fields.reserved.unwrap_or(0),
        currency: fields.currency.clone(),
        expiry_date: fields.expires.clone(),
        active: !inactive,
    })
}

/// Run the offer create command.
pub async fn create(
    opts: &GlobalOptions,
    product_id: i64,
    supplier_id: i64,
    fields: &OfferFields,
    inactive: bool,
) -> Result<()> {
    let body = new_offer(product_id, supplier_id, fields, inactive)?;

    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Offers).await?;
    ctx.finish(ctx.client.create_offer(&body).await)?;

    println!(
        "{} Offer created for product {} from supplier {}",
        "✓".green(),
        body.product_id,
        body.supplier_id
    );
    Ok(())
}

/// Changes requested for an existing offer
#[derive(Debug, Default, Clone)]
pub struct OfferChanges<'a> {
    pub product_id: Option<i64>,
    pub supplier_id: Option<i64>,
    pub fields: Option<&'a OfferFields>,
    pub active: Option<bool>,
}

/// Apply the given changes over the current record.
pub fn merge(current: &Offer, changes: &OfferChanges<'_>) -> Result<OfferUpdate> {
    let mut merged = NewOffer::from(current);
    if let Some(id) = changes.product_id {
        merged.product_id = id;
    }
    if let Some(id) = changes.supplier_id {
        merged.supplier_id = id;
    }
    if let Some(fields) = changes.fields {
        merged.lot_number = merge_text(merged.lot_number, fields.lot.as_deref());
        if let Some(price) = fields.price {
            merged.unit_price = price;
        }
        if let Some(stock) = fields.stock {
            merged.stock_available = stock;
        }
        if let Some(reserved) = fields.reserved {
            merged.stock_reserved = reserved;
        }
        if fields.currency.is_some() {
            merged.currency = fields.currency.clone();
        }
        if fields.expires.is_some() {
            merged.expiry_date = fields.expires.clone();
        }
    }
    if let Some(active) = changes.active {
        merged.active = active;
    }

    Ok(OfferUpdate {
        id: current.id,
        fields: validated(merged)?,
    })
}

/// Run the offer update command.
pub async fn update(opts: &GlobalOptions, id: i64, changes: OfferChanges<'_>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Offers).await?;

    let result = async {
        let current = ctx.client.get_offer(id).await?;
        let update = merge(&current, &changes)?;
        ctx.client.update_offer(&update).await
    }
    .await;
    ctx.finish(result)?;

    println!("{} Offer {} updated", "✓".green(), id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> Offer {
        serde_json::from_value(serde_json::json!({
            "idProductoProveedorLote": 21,
            "idProducto": 12,
            "idProveedor": 9,
            "numeroLote": "L-01",
            "precioUnitario": 4.5,
            "stockDisponible": 100,
            "stockReservado": 5,
            "moneda": "USD",
            "fechaVencimiento": "2026-06-30T00:00:00",
            "activo": true
        }))
        .unwrap()
    }

    #[test]
    fn test_new_offer_defaults() {
        let body = new_offer(12, 9, &OfferFields::default(), false).unwrap();

        assert_eq!(body.currency.as_deref(), Some("USD"));
        assert_eq!(body.unit_price, 0.0);
        assert_eq!(body.stock_available, 0);
        assert_eq!(body.expiry_date, None);
        assert!(body.active);
    }

    #[test]
    fn test_new_offer_needs_product_and_supplier() {
        let err = new_offer(0, 9, &OfferFields::default(), false).unwrap_err();
        assert_eq!(err.to_string(), "Select a product and a supplier.");
    }

    #[test]
    fn test_new_offer_rejects_negative_values() {
        let fields = OfferFields {
            price: Some(-1.0),
            ..Default::default()
        };
        assert!(new_offer(12, 9, &fields, false).is_err());

        let fields = OfferFields {
            reserved: Some(-3),
            ..Default::default()
        };
        let err = new_offer(12, 9, &fields, false).unwrap_err();
        assert!(err.to_string().starts_with("Reserved stock"));
    }

    #[test]
    fn test_merge_keeps_date_part_and_applies_changes() {
        let fields = OfferFields {
            price: Some(5.25),
            currency: Some("eur".to_string()),
            ..Default::default()
        };
        let changes = OfferChanges {
            fields: Some(&fields),
            active: Some(false),
            ..Default::default()
        };

        let update = merge(&current(), &changes).unwrap();

        assert_eq!(update.id, 21);
        assert_eq!(update.fields.unit_price, 5.25);
        assert_eq!(update.fields.currency.as_deref(), Some("EUR"));
        assert_eq!(update.fields.expiry_date.as_deref(), Some("2026-06-30"));
        assert_eq!(update.fields.lot_number.as_deref(), Some("L-01"));
        assert_eq!(update.fields.stock_available, 100);
        assert!(!update.fields.active);
    }

    #[test]
    fn test_merge_validates_result() {
        let fields = OfferFields {
            expires: Some("30/06/2026".to_string()),
            ..Default::default()
        };
        let changes = OfferChanges {
            fields: Some(&fields),
            ..Default::default()
        };

        assert!(merge(&current(), &changes).is_err());
    }
}
