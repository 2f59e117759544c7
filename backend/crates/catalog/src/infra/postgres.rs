//! PostgreSQL Repository Implementation
//!
//! Expected tables: `stores`, `billboards`, `categories`, `sizes`, `colors`,
//! `products`, plus `product_images (product_id, position, url)` and
//! `product_variants (product_id, position, size_id, color_id, in_stock)`.
//! Foreign keys without cascade on billboards, categories, sizes and colors
//! surface as 409 when a referenced row is deleted.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use kernel::id::{StoreId, UserId};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use crate::domain::entity::{
    attribute::{Attribute, AttributeId, AttributeKind},
    billboard::{Billboard, BillboardId},
    category::{Category, CategoryId},
    product::{Product, ProductFilter, ProductId, ProductImage, ProductVariant},
    store::Store,
};
use crate::domain::repository::{
    AttributeRepository, BillboardRepository, CategoryRepository, ProductRepository,
    StoreRepository,
};
use crate::error::CatalogResult;

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PRODUCT_COLUMNS: &str = r#"
    product_id,
    store_id,
    category_id,
    name,
    description,
    price,
    is_featured,
    is_archived,
    created_at,
    updated_at
"#;

/// Primary key column of the attribute table.
const fn attribute_key(kind: AttributeKind) -> &'static str {
    match kind {
        AttributeKind::Size => "size_id",
        AttributeKind::Color => "color_id",
    }
}

/// Escape `%`, `_` and `\` for a literal ILIKE substring match.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

// ============================================================================
// Store Repository Implementation
// ============================================================================

impl StoreRepository for PgCatalogRepository {
    async fn create_store(&self, store: &Store) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO stores (store_id, user_id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(store.store_id.as_uuid())
        .bind(store.user_id.as_uuid())
        .bind(&store.name)
        .bind(store.created_at)
        .bind(store.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_store(&self, store_id: &StoreId) -> CatalogResult<Option<Store>> {
        let row = sqlx::query_as::<_, StoreRow>(
            r#"
            SELECT store_id, user_id, name, created_at, updated_at
            FROM stores
            WHERE store_id = $1
            "#,
        )
        .bind(store_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StoreRow::into_store))
    }

    async fn list_stores_by_owner(&self, user_id: &UserId) -> CatalogResult<Vec<Store>> {
        let rows = sqlx::query_as::<_, StoreRow>(
            r#"
            SELECT store_id, user_id, name, created_at, updated_at
            FROM stores
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StoreRow::into_store).collect())
    }
}

// ============================================================================
// Billboard Repository Implementation
// ============================================================================

impl BillboardRepository for PgCatalogRepository {
    async fn list_billboards(&self, store_id: &StoreId) -> CatalogResult<Vec<Billboard>> {
        let rows = sqlx::query_as::<_, BillboardRow>(
            r#"
            SELECT billboard_id, store_id, label, image_url, created_at, updated_at
            FROM billboards
            WHERE store_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(store_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BillboardRow::into_billboard).collect())
    }

    async fn find_billboard(
        &self,
        store_id: &StoreId,
        billboard_id: &BillboardId,
    ) -> CatalogResult<Option<Billboard>> {
        let row = sqlx::query_as::<_, BillboardRow>(
            r#"
            SELECT billboard_id, store_id, label, image_url, created_at, updated_at
            FROM billboards
            WHERE store_id = $1 AND billboard_id = $2
            "#,
        )
        .bind(store_id.as_uuid())
        .bind(billboard_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BillboardRow::into_billboard))
    }

    async fn create_billboard(&self, billboard: &Billboard) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO billboards (billboard_id, store_id, label, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(billboard.billboard_id.as_uuid())
        .bind(billboard.store_id.as_uuid())
        .bind(&billboard.label)
        .bind(&billboard.image_url)
        .bind(billboard.created_at)
        .bind(billboard.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_billboard(&self, billboard: &Billboard) -> CatalogResult<()> {
        sqlx::query(
            r#"
            UPDATE billboards
            SET label = $3, image_url = $4, updated_at = $5
            WHERE store_id = $1 AND billboard_id = $2
            "#,
        )
        .bind(billboard.store_id.as_uuid())
        .bind(billboard.billboard_id.as_uuid())
        .bind(&billboard.label)
        .bind(&billboard.image_url)
        .bind(billboard.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_billboard(
        &self,
        store_id: &StoreId,
        billboard_id: &BillboardId,
    ) -> CatalogResult<bool> {
        let result = sqlx::query("DELETE FROM billboards WHERE store_id = $1 AND billboard_id = $2")
            .bind(store_id.as_uuid())
            .bind(billboard_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Category Repository Implementation
// ============================================================================

impl CategoryRepository for PgCatalogRepository {
    async fn list_categories(&self, store_id: &StoreId) -> CatalogResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT category_id, store_id, billboard_id, name, created_at, updated_at
            FROM categories
            WHERE store_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(store_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    async fn find_category(
        &self,
        store_id: &StoreId,
        category_id: &CategoryId,
    ) -> CatalogResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT category_id, store_id, billboard_id, name, created_at, updated_at
            FROM categories
            WHERE store_id = $1 AND category_id = $2
            "#,
        )
        .bind(store_id.as_uuid())
        .bind(category_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }

    async fn create_category(&self, category: &Category) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (category_id, store_id, billboard_id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(category.category_id.as_uuid())
        .bind(category.store_id.as_uuid())
        .bind(category.billboard_id.as_uuid())
        .bind(&category.name)
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_category(&self, category: &Category) -> CatalogResult<()> {
        sqlx::query(
            r#"
            UPDATE categories
            SET billboard_id = $3, name = $4, updated_at = $5
            WHERE store_id = $1 AND category_id = $2
            "#,
        )
        .bind(category.store_id.as_uuid())
        .bind(category.category_id.as_uuid())
        .bind(category.billboard_id.as_uuid())
        .bind(&category.name)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_category(
        &self,
        store_id: &StoreId,
        category_id: &CategoryId,
    ) -> CatalogResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE store_id = $1 AND category_id = $2")
            .bind(store_id.as_uuid())
            .bind(category_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Attribute Repository Implementation
// ============================================================================

impl PgCatalogRepository {
    async fn find_attribute_where(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
        column: &str,
        bind: AttributeLookup<'_>,
    ) -> CatalogResult<Option<Attribute>> {
        let sql = format!(
            "SELECT {key} AS attribute_id, store_id, name, value, created_at, updated_at \
             FROM {table} WHERE store_id = $1 AND {column} = $2",
            key = attribute_key(kind),
            table = kind.table(),
        );
        let query = sqlx::query_as::<_, AttributeRow>(&sql).bind(store_id.as_uuid());
        let query = match bind {
            AttributeLookup::Id(id) => query.bind(*id.as_uuid()),
            AttributeLookup::Name(name) => query.bind(name),
        };
        let row = query.fetch_optional(&self.pool).await?;

        Ok(row.map(|r| r.into_attribute(kind)))
    }
}

enum AttributeLookup<'a> {
    Id(&'a AttributeId),
    Name(&'a str),
}

impl AttributeRepository for PgCatalogRepository {
    async fn list_attributes(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
    ) -> CatalogResult<Vec<Attribute>> {
        let sql = format!(
            "SELECT {key} AS attribute_id, store_id, name, value, created_at, updated_at \
             FROM {table} WHERE store_id = $1 ORDER BY created_at DESC",
            key = attribute_key(kind),
            table = kind.table(),
        );
        let rows = sqlx::query_as::<_, AttributeRow>(&sql)
            .bind(store_id.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_attribute(kind)).collect())
    }

    async fn find_attribute(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
        attribute_id: &AttributeId,
    ) -> CatalogResult<Option<Attribute>> {
        self.find_attribute_where(
            store_id,
            kind,
            attribute_key(kind),
            AttributeLookup::Id(attribute_id),
        )
        .await
    }

    async fn find_attribute_by_name(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
        name: &str,
    ) -> CatalogResult<Option<Attribute>> {
        self.find_attribute_where(store_id, kind, "name", AttributeLookup::Name(name))
            .await
    }

    async fn create_attribute(&self, attribute: &Attribute) -> CatalogResult<()> {
        let sql = format!(
            "INSERT INTO {table} ({key}, store_id, name, value, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
            key = attribute_key(attribute.kind),
            table = attribute.kind.table(),
        );
        sqlx::query(&sql)
            .bind(attribute.attribute_id.as_uuid())
            .bind(attribute.store_id.as_uuid())
            .bind(&attribute.name)
            .bind(&attribute.value)
            .bind(attribute.created_at)
            .bind(attribute.updated_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_attribute(&self, attribute: &Attribute) -> CatalogResult<()> {
        let sql = format!(
            "UPDATE {table} SET name = $3, value = $4, updated_at = $5 \
             WHERE store_id = $1 AND {key} = $2",
            key = attribute_key(attribute.kind),
            table = attribute.kind.table(),
        );
        sqlx::query(&sql)
            .bind(attribute.store_id.as_uuid())
            .bind(attribute.attribute_id.as_uuid())
            .bind(&attribute.name)
            .bind(&attribute.value)
            .bind(attribute.updated_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_attribute(
        &self,
        store_id: &StoreId,
        kind: AttributeKind,
        attribute_id: &AttributeId,
    ) -> CatalogResult<bool> {
        let sql = format!(
            "DELETE FROM {table} WHERE store_id = $1 AND {key} = $2",
            key = attribute_key(kind),
            table = kind.table(),
        );
        let result = sqlx::query(&sql)
            .bind(store_id.as_uuid())
            .bind(attribute_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Product Repository Implementation
// ============================================================================

impl PgCatalogRepository {
    /// Attach images and variants to product rows, keeping row order.
    async fn hydrate(&self, rows: Vec<ProductRow>) -> CatalogResult<Vec<Product>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = rows.iter().map(|r| r.product_id).collect();

        let images = sqlx::query_as::<_, ImageRow>(
            r#"
            SELECT product_id, url
            FROM product_images
            WHERE product_id = ANY($1)
            ORDER BY product_id, position
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let variants = sqlx::query_as::<_, VariantRow>(
            r#"
            SELECT product_id, size_id, color_id, in_stock
            FROM product_variants
            WHERE product_id = ANY($1)
            ORDER BY product_id, position
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut images_by_product: HashMap<Uuid, Vec<ProductImage>> = HashMap::new();
        for image in images {
            images_by_product
                .entry(image.product_id)
                .or_default()
                .push(ProductImage { url: image.url });
        }
        let mut variants_by_product: HashMap<Uuid, Vec<ProductVariant>> = HashMap::new();
        for variant in variants {
            variants_by_product
                .entry(variant.product_id)
                .or_default()
                .push(variant.into_variant());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let images = images_by_product.remove(&row.product_id).unwrap_or_default();
                let variants = variants_by_product
                    .remove(&row.product_id)
                    .unwrap_or_default();
                row.into_product(images, variants)
            })
            .collect())
    }
}

/// Write images and variants of `product`, positions in list order.
async fn insert_children(
    tx: &mut Transaction<'_, Postgres>,
    product: &Product,
) -> CatalogResult<()> {
    for (position, image) in product.images.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO product_images (product_id, position, url)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(position as i32)
        .bind(&image.url)
        .execute(&mut **tx)
        .await?;
    }

    for (position, variant) in product.variants.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO product_variants (product_id, position, size_id, color_id, in_stock)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(position as i32)
        .bind(variant.size_id.as_uuid())
        .bind(variant.color_id.as_uuid())
        .bind(variant.in_stock)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

impl ProductRepository for PgCatalogRepository {
    async fn list_products(
        &self,
        store_id: &StoreId,
        filter: &ProductFilter,
    ) -> CatalogResult<Vec<Product>> {
        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p WHERE p.is_archived = FALSE AND p.store_id = "
        ));
        query.push_bind(*store_id.as_uuid());

        if let Some(category_id) = filter.category_id {
            query.push(" AND p.category_id = ");
            query.push_bind(category_id.into_uuid());
        }
        if filter.featured_only {
            query.push(" AND p.is_featured = TRUE");
        }
        if let Some(name) = &filter.name {
            query.push(" AND p.name ILIKE ");
            query.push_bind(like_pattern(name));
        }
        if filter.size_id.is_some() || filter.color_id.is_some() {
            // Both constraints on the same variant row
            query.push(" AND EXISTS (SELECT 1 FROM product_variants v WHERE v.product_id = p.product_id");
            if let Some(size_id) = filter.size_id {
                query.push(" AND v.size_id = ");
                query.push_bind(size_id.into_uuid());
            }
            if let Some(color_id) = filter.color_id {
                query.push(" AND v.color_id = ");
                query.push_bind(color_id.into_uuid());
            }
            query.push(")");
        }
        query.push(" ORDER BY p.created_at DESC");

        let rows = query
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await?;

        self.hydrate(rows).await
    }

    async fn find_product(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
    ) -> CatalogResult<Option<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE store_id = $1 AND product_id = $2"
        );
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(store_id.as_uuid())
            .bind(product_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn create_product(&self, product: &Product) -> CatalogResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                store_id,
                category_id,
                name,
                description,
                price,
                is_featured,
                is_archived,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(product.store_id.as_uuid())
        .bind(product.category_id.as_uuid())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.is_featured)
        .bind(product.is_archived)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&mut *tx)
        .await?;

        insert_children(&mut tx, product).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn update_product(&self, product: &Product) -> CatalogResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE products
            SET category_id = $3,
                name = $4,
                description = $5,
                price = $6,
                is_featured = $7,
                is_archived = $8,
                updated_at = $9
            WHERE store_id = $1 AND product_id = $2
            "#,
        )
        .bind(product.store_id.as_uuid())
        .bind(product.product_id.as_uuid())
        .bind(product.category_id.as_uuid())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.is_featured)
        .bind(product.is_archived)
        .bind(product.updated_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM product_images WHERE product_id = $1")
            .bind(product.product_id.as_uuid())
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM product_variants WHERE product_id = $1")
            .bind(product.product_id.as_uuid())
            .execute(&mut *tx)
            .await?;
        insert_children(&mut tx, product).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete_product(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
    ) -> CatalogResult<bool> {
        // Images and variants go with ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM products WHERE store_id = $1 AND product_id = $2")
            .bind(store_id.as_uuid())
            .bind(product_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct StoreRow {
    store_id: Uuid,
    user_id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StoreRow {
    fn into_store(self) -> Store {
        Store {
            store_id: StoreId::from_uuid(self.store_id),
            user_id: UserId::from_uuid(self.user_id),
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BillboardRow {
    billboard_id: Uuid,
    store_id: Uuid,
    label: String,
    image_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BillboardRow {
    fn into_billboard(self) -> Billboard {
        Billboard {
            billboard_id: BillboardId::from_uuid(self.billboard_id),
            store_id: StoreId::from_uuid(self.store_id),
            label: self.label,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    category_id: Uuid,
    store_id: Uuid,
    billboard_id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            category_id: CategoryId::from_uuid(self.category_id),
            store_id: StoreId::from_uuid(self.store_id),
            billboard_id: BillboardId::from_uuid(self.billboard_id),
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AttributeRow {
    attribute_id: Uuid,
    store_id: Uuid,
    name: String,
    value: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AttributeRow {
    fn into_attribute(self, kind: AttributeKind) -> Attribute {
        Attribute {
            attribute_id: AttributeId::from_uuid(self.attribute_id),
            store_id: StoreId::from_uuid(self.store_id),
            kind,
            name: self.name,
            value: self.value,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    store_id: Uuid,
    category_id: Uuid,
    name: String,
    description: String,
    price: Decimal,
    is_featured: bool,
    is_archived: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self, images: Vec<ProductImage>, variants: Vec<ProductVariant>) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            store_id: StoreId::from_uuid(self.store_id),
            category_id: CategoryId::from_uuid(self.category_id),
            name: self.name,
            description: self.description,
            price: self.price,
            is_featured: self.is_featured,
            is_archived: self.is_archived,
            images,
            variants,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ImageRow {
    product_id: Uuid,
    url: String,
}

#[derive(sqlx::FromRow)]
struct VariantRow {
    product_id: Uuid,
    size_id: Uuid,
    color_id: Uuid,
    in_stock: i32,
}

impl VariantRow {
    fn into_variant(self) -> ProductVariant {
        ProductVariant {
            size_id: AttributeId::from_uuid(self.size_id),
            color_id: AttributeId::from_uuid(self.color_id),
            in_stock: self.in_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("shirt"), "%shirt%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
