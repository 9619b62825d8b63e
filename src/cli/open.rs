//! Open command: navigate to a console location

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::context::is_interactive;
use crate::cli::handlers::list::list_in_context;
use crate::cli::product::products_with_categories;
use crate::client::models::{Category, Supplier};
use crate::client::{CategoryApi, SupplierApi};
use crate::error::{Result, SessionError};
use crate::models::{CategoryDisplay, ProductDisplay, SupplierDisplay};
use crate::router::Route;

/// Run the open command.
///
/// The path goes through the session guard first. Screens with a plain
/// listing render it; the rest point at the command that needs more input.
pub async fn run(opts: &GlobalOptions, path: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let route = Route::resolve(path);
    log::debug!("Opening {} (resolved to {})", path, route);

    if route == Route::Login {
        if !is_interactive() {
            return Err(SessionError::EmptyCredentials.into());
        }
        let next = ctx.prompt_login(None).await?;
        println!("{} Signed in", "✓".green());
        return render(&ctx, next.landing()).await;
    }

    ctx.enter(route).await?;
    render(&ctx, route.landing()).await
}

async fn render(ctx: &CommandContext, route: Route) -> Result<()> {
    println!("{}", route.to_string().bold());

    match route {
        Route::Categories => {
            list_in_context::<Category, CategoryDisplay, _, _>(
                ctx,
                None,
                "categories",
                |client| async move { client.list_categories().await },
            )
            .await
        }
        Route::Suppliers => {
            list_in_context::<Supplier, SupplierDisplay, _, _>(
                ctx,
                None,
                "suppliers",
                |client| async move { client.list_suppliers(None).await },
            )
            .await
        }
        Route::Products => {
            list_in_context::<ProductDisplay, ProductDisplay, _, _>(
                ctx,
                None,
                "products",
                |client| async move { products_with_categories(client.as_ref(), None).await },
            )
            .await
        }
        Route::Offers => {
            println!(
                "Run {} to list offers.",
                "inventario offer list --product <ID>".cyan()
            );
            Ok(())
        }
        Route::Movements => {
            println!(
                "Run {} to list movements.",
                "inventario movement list <OFFER_ID>...".cyan()
            );
            Ok(())
        }
        Route::Login | Route::Root => Ok(()),
    }
}
