//! Product command implementations

use colored::Colorize;
use futures::future::try_join;

use crate::cli::args::GlobalOptions;
use crate::cli::context::confirm;
use crate::cli::handlers::list::run_list_command;
use crate::cli::validate::{merge_text, optional_text, required_name};
use crate::cli::{CommandContext, ListArgs, ProductFields};
use crate::client::models::{NewProduct, Product, ProductUpdate};
use crate::client::{CategoryApi, ProductApi};
use crate::error::{Error, Result};
use crate::models::{CategoryNames, ProductDisplay};
use crate::output::print_one;
use crate::router::Route;

/// Fetch products together with the categories that name them.
pub async fn products_with_categories<C>(
    client: &C,
    search: Option<&str>,
) -> Result<Vec<ProductDisplay>>
where
    C: ProductApi + CategoryApi + ?Sized,
{
    let (categories, products) =
        try_join(client.list_categories(), client.list_products(search)).await?;
    let names = CategoryNames::from_active(&categories);

    Ok(products
        .into_iter()
        .map(|p| ProductDisplay::with_categories(p, &names))
        .collect())
}

/// Run the product list command. Search text is matched by the server.
pub async fn list(opts: &GlobalOptions, filters: &ListArgs) -> Result<()> {
    let search = filters.search_ref().map(str::to_string);

    run_list_command::<ProductDisplay, ProductDisplay, _, _>(
        opts,
        Route::Products,
        filters.limit,
        "products",
        |client| async move { products_with_categories(client.as_ref(), search.as_deref()).await },
    )
    .await
}

/// Run the product get command.
pub async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Products).await?;

    let (categories, product) = ctx.finish(
        try_join(ctx.client.list_categories(), ctx.client.get_product(id)).await,
    )?;
    let names = CategoryNames::from_active(&categories);
    print_one(ProductDisplay::with_categories(product, &names), ctx.format)
}

fn category_id(value: Option<i64>) -> Result<Option<i64>> {
    match value {
        Some(id) if id <= 0 => Err(Error::Validation(format!(
            "Invalid category ID {}.",
            id
        ))),
        other => Ok(other),
    }
}

/// Build a create body from command-line input.
pub fn new_product(name: &str, fields: &ProductFields, inactive: bool) -> Result<NewProduct> {
    Ok(NewProduct {
        code: optional_text(fields.code.as_deref()),
        name: Some(required_name(name)?),
        description: optional_text(fields.description.as_deref()),
        brand: optional_text(fields.brand.as_deref()),
        category_id: category_id(fields.category_id)?,
        image_url: optional_text(fields.image_url.as_deref()),
        active: !inactive,
    })
}

/// Run the product create command.
pub async fn create(
    opts: &GlobalOptions,
    name: &str,
    fields: &ProductFields,
    inactive: bool,
) -> Result<()> {
    let body = new_product(name, fields, inactive)?;

    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Products).await?;
    ctx.finish(ctx.client.create_product(&body).await)?;

    println!(
        "{} Product '{}' created",
        "✓".green(),
        body.name.as_deref().unwrap_or_default()
    );
    Ok(())
}

/// Apply the given fields over the current record.
pub fn merge(
    current: &Product,
    name: Option<&str>,
    fields: &ProductFields,
    active: Option<bool>,
) -> Result<ProductUpdate> {
    let mut merged = NewProduct::from(current);
    if let Some(name) = name {
        merged.name = Some(required_name(name)?);
    }
    merged.code = merge_text(merged.code, fields.code.as_deref());
    merged.description = merge_text(merged.description, fields.description.as_deref());
    merged.brand = merge_text(merged.brand, fields.brand.as_deref());
    merged.image_url = merge_text(merged.image_url, fields.image_url.as_deref());
    if let Some(id) = category_id(fields.category_id)? {
        merged.category_id = Some(id);
    }
    if let Some(active) = active {
        merged.active = active;
    }

    Ok(ProductUpdate {
        id: current.id,
        fields: merged,
    })
}

/// Run the product update command.
pub async fn update(
    opts: &GlobalOptions,
    id: i64,
    name: Option<&str>,
    fields: &ProductFields,
    active: Option<bool>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Products).await?;

    let result = async {
        let current = ctx.client.get_product(id).await?;
        let update = merge(&current, name, fields, active)?;
        ctx.client.update_product(&update).await
    }
    .await;
    ctx.finish(result)?;

    println!("{} Product {} updated", "✓".green(), id);
    Ok(())
}

/// Run the product delete command. The server deactivates the product.
pub async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Products).await?;

    if !confirm(&format!("Deactivate product {}?", id), yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.finish(ctx.client.delete_product(id).await)?;
    println!("{} Product {} deactivated", "✓".green(), id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::InventarioClient;
    use crate::client::mock::MockTransport;
    use crate::client::pipeline::Pipeline;
    use reqwest::Method;

    fn current() -> Product {
        Product {
            id: 12,
            code: Some("P-012".to_string()),
            name: Some("Martillo".to_string()),
            description: Some("Mango de fibra".to_string()),
            brand: Some("Stanley".to_string()),
            category_id: Some(3),
            image_url: None,
            active: true,
        }
    }

    #[test]
    fn test_new_product_trims_and_nulls() {
        let fields = ProductFields {
            brand: Some(" Truper ".to_string()),
            description: Some("".to_string()),
            category_id: Some(2),
            ..Default::default()
        };

        let body = new_product("Destornillador", &fields, true).unwrap();

        assert_eq!(body.brand.as_deref(), Some("Truper"));
        assert_eq!(body.description, None);
        assert_eq!(body.category_id, Some(2));
        assert!(!body.active);
    }

    #[test]
    fn test_new_product_rejects_bad_category() {
        let fields = ProductFields {
            category_id: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            new_product("Clavos", &fields, false),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_merge_product() {
        let fields = ProductFields {
            brand: Some("Bellota".to_string()),
            ..Default::default()
        };

        let update = merge(&current(), Some(" Martillo 16oz "), &fields, None).unwrap();

        assert_eq!(update.id, 12);
        assert_eq!(update.fields.name.as_deref(), Some("Martillo 16oz"));
        assert_eq!(update.fields.brand.as_deref(), Some("Bellota"));
        assert_eq!(update.fields.code.as_deref(), Some("P-012"));
        assert_eq!(update.fields.category_id, Some(3));
        assert!(update.fields.active);
    }

    #[tokio::test]
    async fn test_products_with_categories_names_the_category_column() {
        let transport = MockTransport::new()
            .respond(
                Method::GET,
                "/admin/categorias",
                200,
                r#"[
                    {"idCategoria": 3, "nombre": "Herramientas", "activo": true},
                    {"idCategoria": 4, "nombre": "Pinturas", "activo": false}
                ]"#,
            )
            .await
            .respond(
                Method::GET,
                "/admin/productos",
                200,
                r#"[
                    {"idProducto": 1, "nombre": "Martillo", "idCategoria": 3, "activo": true},
                    {"idProducto": 2, "nombre": "Rodillo", "idCategoria": 4, "activo": true},
                    {"idProducto": 3, "nombre": "Clavos", "idCategoria": 77, "activo": true},
                    {"idProducto": 4, "nombre": "Cinta", "idCategoria": null, "activo": true}
                ]"#,
            )
            .await;
        let client = InventarioClient::with_pipeline(Pipeline::new(transport));

        let rows = products_with_categories(&client, None).await.unwrap();
        let labels: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();

        assert_eq!(labels, vec!["Herramientas", "#4", "#77", "-"]);
    }

    #[tokio::test]
    async fn test_products_with_categories_fails_when_categories_fail() {
        let transport = MockTransport::new()
            .respond(Method::GET, "/admin/categorias", 500, "down")
            .await
            .respond(Method::GET, "/admin/productos", 200, "[]")
            .await;
        let client = InventarioClient::with_pipeline(Pipeline::new(transport));

        assert!(products_with_categories(&client, None).await.is_err());
    }

    #[test]
    fn test_merge_rejects_blank_name() {
        assert!(merge(&current(), Some("  "), &ProductFields::default(), None).is_err());
    }
}
