use std::io::Write;

use catalog::validation::FormField;
use catalog_app::{
    context::AppContext,
    screens::{Navigation, ProductFormScreen, SubmitOutcome},
};
use clap::Args;

use super::{flush, notice_error, write_error};

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Product name
    #[arg(long, default_value = "")]
    name: String,

    /// Product description
    #[arg(long, default_value = "")]
    description: String,

    /// Price, e.g. 9.99; anything unparseable counts as 0
    #[arg(long, default_value = "")]
    price: String,

    /// Category label
    #[arg(long, default_value = "")]
    category: String,

    /// http(s) URL of the product image
    #[arg(long)]
    image_url: Option<String>,
}

pub(crate) async fn run(
    ctx: &AppContext,
    args: CreateProductArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    let screen = ProductFormScreen::create(ctx.products.clone());

    screen.set_field(FormField::Name, &args.name);
    screen.set_field(FormField::Description, &args.description);
    screen.set_field(FormField::Price, &args.price);
    screen.set_field(FormField::Category, &args.category);

    if let Some(url) = &args.image_url {
        screen.set_field(FormField::ImageUrl, url);
    }

    report(screen.submit().await, out)?;

    flush(out)
}

/// Print the outcome of a form submit, failing on anything but a save.
pub(super) fn report(outcome: SubmitOutcome, out: &mut impl Write) -> Result<(), String> {
    match outcome {
        SubmitOutcome::Saved { notice, navigation } => {
            writeln!(out, "{notice}").map_err(|error| write_error(&error))?;

            if let Navigation::ProductDetail(product) = navigation {
                writeln!(out, "id: {product}").map_err(|error| write_error(&error))?;
            }

            Ok(())
        }
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors.iter() {
                writeln!(out, "{field}: {message}").map_err(|error| write_error(&error))?;
            }

            flush(out)?;

            Err(format!("invalid product ({} errors)", errors.len()))
        }
        SubmitOutcome::Failed(notice) => Err(notice_error(notice)),
        SubmitOutcome::Busy => Err("a submit is already in progress".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use catalog::validation::ValidationErrors;

    use super::*;

    #[test]
    fn invalid_outcome_fails() {
        let mut out = Vec::new();

        let result = report(SubmitOutcome::Invalid(ValidationErrors::default()), &mut out);

        assert!(result.is_err(), "invalid outcome should fail the command");
    }

    #[test]
    fn busy_outcome_fails() {
        let mut out = Vec::new();

        assert!(
            report(SubmitOutcome::Busy, &mut out).is_err(),
            "busy outcome should fail the command"
        );
    }
}
