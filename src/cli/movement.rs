//! Movement command implementations

use futures::future::try_join_all;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::list::run_list_command;
use crate::cli::validate::positive_ids;
use crate::client::MovementApi;
use crate::client::models::Movement;
use crate::error::Result;
use crate::models::MovementDisplay;
use crate::router::Route;

/// Run the movement list command.
///
/// Offers are queried concurrently; the first failure aborts the listing.
/// Rows keep the order of the IDs given.
pub async fn list(opts: &GlobalOptions, offer_ids: &[i64], limit: Option<usize>) -> Result<()> {
    positive_ids(offer_ids)?;
    let ids = dedup(offer_ids);

    run_list_command::<Movement, MovementDisplay, _, _>(
        opts,
        Route::Movements,
        limit,
        "movements",
        |client| async move {
            let lookups = ids.iter().map(|id| client.list_movements(*id));
            let per_offer = try_join_all(lookups).await?;
            Ok(per_offer.into_iter().flatten().collect())
        },
    )
    .await
}

/// Drop repeated IDs, keeping first occurrences.
fn dedup(ids: &[i64]) -> Vec<i64> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(id) {
            seen.push(*id);
        }
    }
    seen
}
