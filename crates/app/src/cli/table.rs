use std::io;

use catalog::products::ProductRecord;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

const PRICE_COLUMN: usize = 3;

/// Write `products` as a table, one row per product, in the given order.
pub(crate) fn write_products(
    out: &mut impl io::Write,
    products: &[ProductRecord],
) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Nom", "Catégorie", "Prix"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.category.clone(),
            product.price_label(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(PRICE_COLUMN..=PRICE_COLUMN), Alignment::right());

    writeln!(out, "{table}")
}

/// Write every field of one product as `label: value` lines.
pub(crate) fn write_product(out: &mut impl io::Write, product: &ProductRecord) -> io::Result<()> {
    writeln!(out, "id: {}", product.id)?;
    writeln!(out, "nom: {}", product.name)?;
    writeln!(out, "description: {}", product.description)?;
    writeln!(out, "prix: {}", product.price_label())?;
    writeln!(out, "catégorie: {}", product.category)?;
    writeln!(
        out,
        "image: {}",
        product.image_url.as_deref().unwrap_or("aucune")
    )
}
