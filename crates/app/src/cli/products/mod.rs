use std::io::{self, Write};

use catalog_app::screens::Notice;
use clap::{Args, Subcommand};

use super::store::StoreArgs;

mod create;
mod delete;
mod get;
mod list;
mod update;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List products, optionally filtered
    List(list::ListProductsArgs),

    /// Show one product
    Get(get::GetProductArgs),

    /// Create a product
    Create(create::CreateProductArgs),

    /// Change some fields of a product
    Update(update::UpdateProductArgs),

    /// Delete a product
    Delete(delete::DeleteProductArgs),
}

pub(crate) async fn run(command: ProductsCommand) -> Result<(), String> {
    let ctx = command.store.connect().await?;
    let mut out = io::stdout().lock();

    match command.command {
        ProductsSubcommand::List(args) => list::run(&ctx, args, &mut out).await,
        ProductsSubcommand::Get(args) => get::run(&ctx, args, &mut out).await,
        ProductsSubcommand::Create(args) => create::run(&ctx, args, &mut out).await,
        ProductsSubcommand::Update(args) => update::run(&ctx, args, &mut out).await,
        ProductsSubcommand::Delete(args) => delete::run(&ctx, args, &mut out).await,
    }
}

fn notice_error(notice: Notice) -> String {
    notice.message().to_string()
}

fn write_error(error: &io::Error) -> String {
    format!("failed to write output: {error}")
}

fn flush(out: &mut impl Write) -> Result<(), String> {
    out.flush().map_err(|error| write_error(&error))
}
