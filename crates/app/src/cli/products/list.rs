use std::io::Write;

use catalog::filter::ProductFilter;
use catalog_app::{
    context::AppContext,
    domain::products::ProductStore,
    screens::{ListDisplay, ProductListScreen},
};
use clap::Args;

use crate::cli::table::write_products;

use super::{flush, notice_error, write_error};

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    /// Only show this category, compared without case ("Tous" shows all)
    #[arg(long)]
    category: Option<String>,

    /// Only show products whose name or description contains this text
    #[arg(long)]
    search: Option<String>,

    /// Ask the store for this exact category instead of filtering locally
    #[arg(long, conflicts_with = "category")]
    remote_category: Option<String>,
}

pub(crate) async fn run(
    ctx: &AppContext,
    args: ListProductsArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    if let Some(category) = args.remote_category {
        let products = ctx
            .products
            .list_products_by_category(&category)
            .await
            .map_err(|error| format!("failed to list products: {error}"))?;

        let mut filter = ProductFilter::with_products(products);
        filter.set_query(args.search.as_deref().unwrap_or_default());

        write_products(out, &filter.to_visible()).map_err(|error| write_error(&error))?;

        return flush(out);
    }

    let screen = ProductListScreen::new(ctx.products.clone());

    screen.load().await;

    if let Some(category) = &args.category {
        screen.select_category(category);
    }

    if let Some(query) = &args.search {
        screen.search(query);
    }

    match screen.display() {
        ListDisplay::Products(products) => {
            write_products(out, &products).map_err(|error| write_error(&error))?;
        }
        ListDisplay::Empty(state) => {
            writeln!(out, "{}\n{}", state.title(), state.description())
                .map_err(|error| write_error(&error))?;
        }
        ListDisplay::Failed(notice) => return Err(notice_error(notice)),
        ListDisplay::Loading => return Err("product list did not load".to_string()),
    }

    flush(out)
}
