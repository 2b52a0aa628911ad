use std::io::Write;

use catalog::{products::ProductId, validation::FormField};
use catalog_app::{
    context::AppContext,
    screens::{FetchOutcome, ProductFormScreen},
};
use clap::Args;

use super::{create::report, flush};

#[derive(Debug, Args)]
pub(crate) struct UpdateProductArgs {
    /// Product identifier
    id: ProductId,

    /// New name
    #[arg(long)]
    name: Option<String>,

    /// New description
    #[arg(long)]
    description: Option<String>,

    /// New price; anything unparseable counts as 0
    #[arg(long)]
    price: Option<String>,

    /// New category label
    #[arg(long)]
    category: Option<String>,

    /// New image URL, or "" to remove the image
    #[arg(long)]
    image_url: Option<String>,
}

impl UpdateProductArgs {
    fn changes(&self) -> impl Iterator<Item = (FormField, &str)> {
        [
            (FormField::Name, &self.name),
            (FormField::Description, &self.description),
            (FormField::Price, &self.price),
            (FormField::Category, &self.category),
            (FormField::ImageUrl, &self.image_url),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|value| (field, value)))
    }
}

pub(crate) async fn run(
    ctx: &AppContext,
    args: UpdateProductArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    let screen = ProductFormScreen::edit(ctx.products.clone(), args.id);

    if screen.load().await != FetchOutcome::Applied {
        return Err(screen.notice().map_or_else(
            || "product did not load".to_string(),
            |notice| notice.message().to_string(),
        ));
    }

    for (field, value) in args.changes() {
        screen.set_field(field, value);
    }

    report(screen.submit().await, out)?;

    flush(out)
}
