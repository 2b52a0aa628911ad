//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    pricing::{format_price, two_decimals},
    uuids::TypedUuid,
};

/// Product Identifier
pub type ProductId = TypedUuid<ProductRecord>;

/// Product Record
///
/// A product as persisted by a store. The `id` is assigned on creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Store-assigned identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Product price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Category label
    pub category: String,

    /// Optional image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ProductRecord {
    /// Build a persisted record from a draft and its assigned identifier.
    #[must_use]
    pub fn from_draft(id: ProductId, draft: NewProduct) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            image_url: draft.image_url,
        }
    }

    /// Copy the editable fields back into a draft.
    #[must_use]
    pub fn to_draft(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
            image_url: self.image_url.clone(),
        }
    }

    /// Price rendered for display, e.g. `9.99 €`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    /// Text offered when sharing the product.
    #[must_use]
    pub fn share_message(&self) -> String {
        format!(
            "Découvrez {} à {}€ - {}",
            self.name,
            two_decimals(self.price),
            self.description
        )
    }

    /// Merge the fields present in `patch` into this record.
    ///
    /// Fields absent from the patch are left untouched. An empty `image_url` clears the image.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }

        if let Some(description) = patch.description {
            self.description = description;
        }

        if let Some(price) = patch.price {
            self.price = price;
        }

        if let Some(category) = patch.category {
            self.category = category;
        }

        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url).filter(|url| !url.is_empty());
        }
    }
}

/// New Product
///
/// A draft record that has not been assigned an identifier yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Product price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Category label
    pub category: String,

    /// Optional image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Product Patch
///
/// Merge-patch for an existing record: `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    /// Replacement name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Replacement description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Replacement price
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,

    /// Replacement category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Replacement image location, `""` clears it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ProductPatch {
    /// A patch overwriting every editable field with the draft's values.
    ///
    /// A draft without an image produces a patch that clears the stored image.
    #[must_use]
    pub fn replace_all(draft: NewProduct) -> Self {
        Self {
            name: Some(draft.name),
            description: Some(draft.description),
            price: Some(draft.price),
            category: Some(draft.category),
            image_url: Some(draft.image_url.unwrap_or_default()),
        }
    }

    /// Whether the patch would leave a record unchanged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.image_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn widget() -> ProductRecord {
        ProductRecord::from_draft(
            ProductId::new(),
            NewProduct {
                name: "Widget".to_string(),
                description: "A widget".to_string(),
                price: Decimal::new(999, 2),
                category: "Maison".to_string(),
                image_url: Some("https://x.com/p.jpg".to_string()),
            },
        )
    }

    #[test]
    fn apply_only_overwrites_present_fields() {
        let mut record = widget();
        let original = record.clone();

        record.apply(ProductPatch {
            price: Some(Decimal::new(1250, 2)),
            ..ProductPatch::default()
        });

        assert_eq!(record.price, Decimal::new(1250, 2));
        assert_eq!(record.name, original.name);
        assert_eq!(record.description, original.description);
        assert_eq!(record.category, original.category);
        assert_eq!(record.image_url, original.image_url);
        assert_eq!(record.id, original.id);
    }

    #[test]
    fn empty_image_url_in_patch_clears_image() {
        let mut record = widget();

        record.apply(ProductPatch {
            image_url: Some(String::new()),
            ..ProductPatch::default()
        });

        assert_eq!(record.image_url, None);
    }

    #[test]
    fn replace_all_patch_reproduces_the_draft() {
        let mut record = widget();
        let draft = NewProduct {
            name: "Lampe".to_string(),
            description: "Une lampe".to_string(),
            price: Decimal::from(30),
            category: "Maison".to_string(),
            image_url: None,
        };

        record.apply(ProductPatch::replace_all(draft.clone()));

        assert_eq!(record.to_draft(), draft);
    }

    #[test]
    fn share_message_mentions_name_price_and_description() {
        assert_eq!(
            widget().share_message(),
            "Découvrez Widget à 9.99€ - A widget"
        );
    }

    #[test]
    fn price_label_uses_two_decimals() {
        let mut record = widget();
        record.price = Decimal::from(4);

        assert_eq!(record.price_label(), "4.00 €");
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(ProductPatch::default().is_empty());
        assert!(
            !ProductPatch {
                category: Some("Livres".to_string()),
                ..ProductPatch::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn record_uses_camel_case_document_shape() -> TestResult {
        let record = widget();

        let value = serde_json::to_value(&record)?;

        assert_eq!(value["imageUrl"], json!("https://x.com/p.jpg"));
        assert_eq!(value["price"], json!(9.99));
        assert_eq!(value["id"], json!(record.id.to_string()));

        Ok(())
    }

    #[test]
    fn record_without_image_omits_the_key() -> TestResult {
        let mut record = widget();
        record.image_url = None;

        let value = serde_json::to_value(&record)?;

        assert!(value.get("imageUrl").is_none(), "imageUrl should be omitted");

        Ok(())
    }

    #[test]
    fn patch_deserializes_partial_documents() -> TestResult {
        let patch: ProductPatch = serde_json::from_value(json!({ "price": 4.5 }))?;

        assert_eq!(
            patch,
            ProductPatch {
                price: Some(Decimal::new(45, 1)),
                ..ProductPatch::default()
            }
        );

        Ok(())
    }
}
