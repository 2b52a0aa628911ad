use std::io::Write;

use catalog::products::ProductId;
use catalog_app::{
    context::AppContext,
    screens::{DetailDisplay, ProductDetailScreen},
};
use clap::Args;

use super::{flush, notice_error, write_error};

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    /// Product identifier
    id: ProductId,
}

pub(crate) async fn run(
    ctx: &AppContext,
    args: DeleteProductArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    let screen = ProductDetailScreen::new(ctx.products.clone());

    screen.load(args.id).await;

    let display = screen.display();

    if let Some(notice) = display.notice() {
        return Err(notice_error(notice));
    }

    let DetailDisplay::Loaded(product) = display else {
        return Err("product did not load".to_string());
    };

    screen.delete().await.map_err(notice_error)?;

    writeln!(out, "deleted {} ({})", product.name, product.id)
        .map_err(|error| write_error(&error))?;

    flush(out)
}
