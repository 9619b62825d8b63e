//! Category command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::confirm;
use crate::cli::handlers::list::run_list_command;
use crate::cli::validate::required_name;
use crate::cli::{CommandContext, ListArgs};
use crate::client::CategoryApi;
use crate::client::models::{Category, CategoryUpdate, NewCategory};
use crate::error::{ApiError, Result};
use crate::models::CategoryDisplay;
use crate::router::Route;

/// Run the category list command.
///
/// The categories endpoint has no search parameter, so `--search` filters
/// locally by name.
pub async fn list(opts: &GlobalOptions, filters: &ListArgs) -> Result<()> {
    let search = filters.search_ref().map(str::to_string);

    run_list_command::<Category, CategoryDisplay, _, _>(
        opts,
        Route::Categories,
        filters.limit,
        "categories",
        |client| async move {
            let categories = client.list_categories().await?;
            Ok(filter_by_name(categories, search.as_deref()))
        },
    )
    .await
}

/// Case-insensitive substring match on the category name.
pub fn filter_by_name(categories: Vec<Category>, search: Option<&str>) -> Vec<Category> {
    let Some(needle) = search.map(str::to_lowercase) else {
        return categories;
    };

    categories
        .into_iter()
        .filter(|c| {
            c.name
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&needle)
        })
        .collect()
}

/// Run the category create command.
pub async fn create(opts: &GlobalOptions, name: &str, inactive: bool) -> Result<()> {
    let body = NewCategory {
        name: Some(required_name(name)?),
        active: !inactive,
    };

    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Categories).await?;
    ctx.finish(ctx.client.create_category(&body).await)?;

    println!(
        "{} Category '{}' created",
        "✓".green(),
        body.name.as_deref().unwrap_or_default()
    );
    Ok(())
}

/// Run the category update command. Fields not given keep their current value.
pub async fn update(
    opts: &GlobalOptions,
    id: i64,
    name: Option<&str>,
    active: Option<bool>,
) -> Result<()> {
    let name = name.map(required_name).transpose()?;

    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Categories).await?;

    let result = async {
        let current = find_category(&ctx, id).await?;
        let update = merge(&current, name, active);
        ctx.client.update_category(&update).await
    }
    .await;
    ctx.finish(result)?;

    println!("{} Category {} updated", "✓".green(), id);
    Ok(())
}

fn merge(current: &Category, name: Option<String>, active: Option<bool>) -> CategoryUpdate {
    let mut fields = NewCategory::from(current);
    if name.is_some() {
        fields.name = name;
    }
    if let Some(active) = active {
        fields.active = active;
    }
    CategoryUpdate {
        id: current.id,
        fields,
    }
}

async fn find_category(ctx: &CommandContext, id: i64) -> Result<Category> {
    ctx.client
        .list_categories()
        .await?
        .into_iter()
        .find(|c| c.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("category {}", id)).into())
}

/// Run the category delete command.
pub async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Categories).await?;

    if !confirm(&format!("Delete category {}?", id), yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.finish(ctx.client.delete_category(id).await)?;
    println!("{} Category {} deleted", "✓".green(), id);
    Ok(())
}
