use std::io::Write;

use catalog::products::ProductId;
use catalog_app::{
    context::AppContext,
    screens::{DetailDisplay, ProductDetailScreen},
};
use clap::Args;

use crate::cli::table::write_product;

use super::{flush, notice_error, write_error};

#[derive(Debug, Args)]
pub(crate) struct GetProductArgs {
    /// Product identifier
    id: ProductId,

    /// Also print the message used when sharing the product
    #[arg(long)]
    share: bool,
}

pub(crate) async fn run(
    ctx: &AppContext,
    args: GetProductArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    let screen = ProductDetailScreen::new(ctx.products.clone());

    screen.load(args.id).await;

    let display = screen.display();

    let DetailDisplay::Loaded(product) = display else {
        return Err(display
            .notice()
            .map_or_else(|| "product did not load".to_string(), notice_error));
    };

    write_product(out, &product).map_err(|error| write_error(&error))?;

    if args.share
        && let Some(message) = screen.share_message()
    {
        writeln!(out, "\n{message}").map_err(|error| write_error(&error))?;
    }

    flush(out)
}
