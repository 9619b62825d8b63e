//! Generic list command handler
//!
//! Provides a reusable pattern for list commands that follow the standard flow:
//! 1. Create command context
//! 2. Pass the session guard for the screen's route
//! 3. Fetch data
//! 4. Apply limit
//! 5. Convert to display type
//! 6. Print output

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::InventarioClient;
use crate::error::Result;
use crate::output::Formattable;
use crate::router::Route;

/// Run a standard list command with the common guard → fetch → limit →
/// display → print pattern.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `Category`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, and `Serialize`
///
/// # Example
///
/// ```ignore
/// run_list_command::<Supplier, SupplierDisplay, _, _>(
///     opts,
///     Route::Suppliers,
///     filters.limit,
///     "suppliers",
///     |client| async move { client.list_suppliers(search.as_deref()).await },
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    route: Route,
    limit: Option<usize>,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(Arc<InventarioClient>) -> Fut,
{
    let ctx = CommandContext::new(opts)?;
    ctx.enter(route).await?;
    list_in_context::<T, D, Fut, F>(&ctx, limit, resource_name, fetcher).await
}

/// Same as [`run_list_command`] for a context that already passed the guard.
pub async fn list_in_context<T, D, Fut, F>(
    ctx: &CommandContext,
    limit: Option<usize>,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(Arc<InventarioClient>) -> Fut,
{
    debug!("Fetching {}", resource_name);

    let items = ctx.finish(fetcher(ctx.client.clone()).await)?;

    debug!("Fetched {} {}", items.len(), resource_name);

    let display_items: Vec<D> = apply_limit(items, limit).into_iter().map(D::from).collect();
    display_items.print(ctx.format)?;

    Ok(())
}

/// Keep at most `limit` items.
pub fn apply_limit<T>(items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    match limit {
        Some(limit) => items.into_iter().take(limit).collect(),
        None => items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_limit() {
        assert_eq!(apply_limit(vec![1, 2, 3], Some(2)), vec![1, 2]);
        assert_eq!(apply_limit(vec![1, 2, 3], None), vec![1, 2, 3]);
        assert_eq!(apply_limit(vec![1], Some(5)), vec![1]);
    }
}
