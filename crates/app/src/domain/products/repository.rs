//! Products Repository

use catalog::products::{NewProduct, ProductId, ProductPatch, ProductRecord};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LIST_PRODUCTS_BY_CATEGORY_SQL: &str = include_str!("sql/list_products_by_category.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// Row shape shared by every product query.
#[derive(Debug)]
struct ProductRow {
    uuid: Uuid,
    name: String,
    description: String,
    price: Decimal,
    category: String,
    image_url: Option<String>,
}

impl<'r> FromRow<'r, PgRow> for ProductRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            category: row.try_get("category")?,
            image_url: row.try_get("image_url")?,
        })
    }
}

impl From<ProductRow> for ProductRecord {
    fn from(row: ProductRow) -> Self {
        ProductRecord {
            id: ProductId::from_uuid(row.uuid),
            name: row.name,
            description: row.description,
            price: row.price,
            category: row.category,
            image_url: row.image_url,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        pool: &PgPool,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let rows = query_as::<Postgres, ProductRow>(LIST_PRODUCTS_SQL)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(ProductRecord::from).collect())
    }

    pub(crate) async fn list_products_by_category(
        &self,
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let rows = query_as::<Postgres, ProductRow>(LIST_PRODUCTS_BY_CATEGORY_SQL)
            .bind(category)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(ProductRecord::from).collect())
    }

    pub(crate) async fn get_product(
        &self,
        pool: &PgPool,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        let row = query_as::<Postgres, ProductRow>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(pool)
            .await?;

        Ok(row.map(ProductRecord::from))
    }

    pub(crate) async fn create_product(
        &self,
        pool: &PgPool,
        product: ProductId,
        draft: NewProduct,
    ) -> Result<ProductId, sqlx::Error> {
        let created: Uuid = query_scalar(CREATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(draft.name)
            .bind(draft.description)
            .bind(draft.price)
            .bind(draft.category)
            .bind(draft.image_url.filter(|url| !url.is_empty()))
            .fetch_one(pool)
            .await?;

        Ok(ProductId::from_uuid(created))
    }

    /// Returns `None` when no product has the given identifier.
    pub(crate) async fn update_product(
        &self,
        pool: &PgPool,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<ProductId>, sqlx::Error> {
        let updated: Option<Uuid> = query_scalar(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(patch.name)
            .bind(patch.description)
            .bind(patch.price)
            .bind(patch.category)
            .bind(patch.image_url)
            .fetch_optional(pool)
            .await?;

        Ok(updated.map(ProductId::from_uuid))
    }

    pub(crate) async fn delete_product(
        &self,
        pool: &PgPool,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
