//! Supplier command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::confirm;
use crate::cli::handlers::list::run_list_command;
use crate::cli::validate::{merge_text, optional_text, required_name};
use crate::cli::{CommandContext, ListArgs, SupplierFields};
use crate::client::SupplierApi;
use crate::client::models::{NewSupplier, Supplier, SupplierUpdate};
use crate::error::{ApiError, Result};
use crate::models::SupplierDisplay;
use crate::router::Route;

/// Run the supplier list command. Search text is matched by the server.
pub async fn list(opts: &GlobalOptions, filters: &ListArgs) -> Result<()> {
    let search = filters.search_ref().map(str::to_string);

    run_list_command::<Supplier, SupplierDisplay, _, _>(
        opts,
        Route::Suppliers,
        filters.limit,
        "suppliers",
        |client| async move { client.list_suppliers(search.as_deref()).await },
    )
    .await
}

/// Build a create body from command-line input.
pub fn new_supplier(name: &str, fields: &SupplierFields, inactive: bool) -> Result<NewSupplier> {
    Ok(NewSupplier {
        code: optional_text(fields.code.as_deref()),
        name: Some(required_name(name)?),
        tax_id: optional_text(fields.tax_id.as_deref()),
        email: optional_text(fields.email.as_deref()),
        phone: optional_text(fields.phone.as_deref()),
        active: !inactive,
    })
}

/// Run the supplier create command.
pub async fn create(
    opts: &GlobalOptions,
    name: &str,
    fields: &SupplierFields,
    inactive: bool,
) -> Result<()> {
    let body = new_supplier(name, fields, inactive)?;

    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Suppliers).await?;
    ctx.finish(ctx.client.create_supplier(&body).await)?;

    println!(
        "{} Supplier '{}' created",
        "✓".green(),
        body.name.as_deref().unwrap_or_default()
    );
    Ok(())
}

/// Apply the given fields over the current record.
pub fn merge(
    current: &Supplier,
    name: Option<&str>,
    fields: &SupplierFields,
    active: Option<bool>,
) -> Result<SupplierUpdate> {
    let mut merged = NewSupplier::from(current);
    if let Some(name) = name {
        merged.name = Some(required_name(name)?);
    }
    merged.code = merge_text(merged.code, fields.code.as_deref());
    merged.tax_id = merge_text(merged.tax_id, fields.tax_id.as_deref());
    merged.email = merge_text(merged.email, fields.email.as_deref());
    merged.phone = merge_text(merged.phone, fields.phone.as_deref());
    if let Some(active) = active {
        merged.active = active;
    }

    Ok(SupplierUpdate {
        id: current.id,
        fields: merged,
    })
}

/// Run the supplier update command.
pub async fn update(
    opts: &GlobalOptions,
    id: i64,
    name: Option<&str>,
    fields: &SupplierFields,
    active: Option<bool>,
) -> Result<()> {
    if let Some(name) = name {
        required_name(name)?;
    }

    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Suppliers).await?;

    let result = async {
        let current = ctx
            .client
            .list_suppliers(None)
            .await?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("supplier {}", id)))?;
        let update = merge(&current, name, fields, active)?;
        ctx.client.update_supplier(&update).await
    }
    .await;
    ctx.finish(result)?;

    println!("{} Supplier {} updated", "✓".green(), id);
    Ok(())
}

/// Run the supplier delete command.
pub async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Suppliers).await?;

    if !confirm(&format!("Delete supplier {}?", id), yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.finish(ctx.client.delete_supplier(id).await)?;
    println!("{} Supplier {} deleted", "✓".green(), id);
    Ok(())
}
