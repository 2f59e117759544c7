//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::database::{Constraint, violated_constraint};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    account_summary::OrderSummary,
    address::{Address, AddressId},
    user::User,
};
use crate::domain::repository::{AccountSummaryRepository, AddressRepository, UserRepository};
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = r#"
    user_id,
    email,
    name,
    password_hash,
    phone,
    image,
    role,
    is_verified,
    verification_token,
    reset_token,
    reset_token_expiry,
    created_at,
    updated_at
"#;

const ADDRESS_COLUMNS: &str = r#"
    address_id,
    user_id,
    name,
    line1,
    line2,
    city,
    state,
    postal_code,
    country,
    is_default,
    created_at,
    updated_at
"#;

/// Map a write error, turning the email unique index into `EmailTaken`.
fn user_write_error(err: sqlx::Error) -> AuthError {
    if violated_constraint(&err) == Some(Constraint::Unique) {
        AuthError::EmailTaken
    } else {
        AuthError::Database(err)
    }
}

impl PgAuthRepository {
    async fn find_user_where(&self, column: &str, value: &str) -> AuthResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create_user(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                email,
                name,
                password_hash,
                phone,
                image,
                role,
                is_verified,
                verification_token,
                reset_token,
                reset_token_expiry,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.name.as_deref())
        .bind(user.password_hash.as_ref().map(|h| h.as_str()))
        .bind(user.phone.as_deref())
        .bind(user.image.as_deref())
        .bind(user.role.code())
        .bind(user.is_verified)
        .bind(user.verification_token.as_deref())
        .bind(user.reset_token.as_deref())
        .bind(user.reset_token_expiry)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(user_write_error)?;

        Ok(())
    }

    async fn find_user_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_user_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        self.find_user_where("email", email.as_str()).await
    }

    async fn find_user_by_reset_token(&self, token: &str) -> AuthResult<Option<User>> {
        self.find_user_where("reset_token", token).await
    }

    async fn update_user(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                email = $2,
                name = $3,
                phone = $4,
                image = $5,
                role = $6,
                is_verified = $7,
                verification_token = $8,
                updated_at = $9
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.name.as_deref())
        .bind(user.phone.as_deref())
        .bind(user.image.as_deref())
        .bind(user.role.code())
        .bind(user.is_verified)
        .bind(user.verification_token.as_deref())
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(user_write_error)?;

        Ok(())
    }

    async fn consume_verification_token(&self, token: &str) -> AuthResult<Option<User>> {
        let sql = format!(
            r#"
            UPDATE users SET
                is_verified = TRUE,
                verification_token = NULL,
                updated_at = now()
            WHERE verification_token = $1
            RETURNING {USER_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn store_reset_token(
        &self,
        user_id: &UserId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                reset_token = $2,
                reset_token_expiry = $3,
                updated_at = now()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(token)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn consume_reset_token(
        &self,
        token: &str,
        password_hash: &UserPassword,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<UserId>> {
        // Row lock on UPDATE: a second caller re-checks the WHERE after the
        // first commits and finds the token gone
        let user_id: Option<Uuid> = sqlx::query_scalar(
            r#"
            UPDATE users SET
                password_hash = $2,
                reset_token = NULL,
                reset_token_expiry = NULL,
                updated_at = now()
            WHERE reset_token = $1 AND reset_token_expiry > $3
            RETURNING user_id
            "#,
        )
        .bind(token)
        .bind(password_hash.as_str())
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user_id.map(UserId::from_uuid))
    }
}

// ============================================================================
// Address Repository Implementation
// ============================================================================

impl AddressRepository for PgAuthRepository {
    async fn list_addresses(&self, user_id: &UserId) -> AuthResult<Vec<Address>> {
        let sql = format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE user_id = $1 ORDER BY created_at ASC"
        );
        let rows = sqlx::query_as::<_, AddressRow>(&sql)
            .bind(user_id.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(AddressRow::into_address).collect())
    }

    async fn find_address(
        &self,
        user_id: &UserId,
        address_id: &AddressId,
    ) -> AuthResult<Option<Address>> {
        let sql = format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE address_id = $1 AND user_id = $2"
        );
        let row = sqlx::query_as::<_, AddressRow>(&sql)
            .bind(address_id.as_uuid())
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(AddressRow::into_address))
    }

    async fn create_address(&self, address: &Address) -> AuthResult<()> {
        let mut tx = self.pool.begin().await?;

        if address.is_default {
            clear_default_address(&mut tx, address).await?;
        }

        sqlx::query(
            r#"
            INSERT INTO addresses (
                address_id,
                user_id,
                name,
                line1,
                line2,
                city,
                state,
                postal_code,
                country,
                is_default,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(address.address_id.as_uuid())
        .bind(address.user_id.as_uuid())
        .bind(&address.name)
        .bind(&address.line1)
        .bind(address.line2.as_deref())
        .bind(&address.city)
        .bind(address.state.as_deref())
        .bind(&address.postal_code)
        .bind(&address.country)
        .bind(address.is_default)
        .bind(address.created_at)
        .bind(address.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn update_address(&self, address: &Address) -> AuthResult<()> {
        let mut tx = self.pool.begin().await?;

        if address.is_default {
            clear_default_address(&mut tx, address).await?;
        }

        sqlx::query(
            r#"
            UPDATE addresses SET
                name = $3,
                line1 = $4,
                line2 = $5,
                city = $6,
                state = $7,
                postal_code = $8,
                country = $9,
                is_default = $10,
                updated_at = $11
            WHERE address_id = $1 AND user_id = $2
            "#,
        )
        .bind(address.address_id.as_uuid())
        .bind(address.user_id.as_uuid())
        .bind(&address.name)
        .bind(&address.line1)
        .bind(address.line2.as_deref())
        .bind(&address.city)
        .bind(address.state.as_deref())
        .bind(&address.postal_code)
        .bind(&address.country)
        .bind(address.is_default)
        .bind(address.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete_address(&self, user_id: &UserId, address_id: &AddressId) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM addresses WHERE address_id = $1 AND user_id = $2")
            .bind(address_id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn count_addresses(&self, user_id: &UserId) -> AuthResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM addresses WHERE user_id = $1")
                .bind(user_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

/// Drop the default flag from the user's other addresses.
async fn clear_default_address(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    address: &Address,
) -> AuthResult<()> {
    sqlx::query(
        "UPDATE addresses SET is_default = FALSE, updated_at = $3 \
         WHERE user_id = $1 AND address_id <> $2 AND is_default",
    )
    .bind(address.user_id.as_uuid())
    .bind(address.address_id.as_uuid())
    .bind(address.updated_at)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

// ============================================================================
// Account Summary Repository Implementation
// ============================================================================

impl AccountSummaryRepository for PgAuthRepository {
    async fn count_favorites(&self, user_id: &UserId) -> AuthResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM favorites WHERE user_id = $1")
                .bind(user_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn recent_orders(&self, user_id: &UserId, limit: i64) -> AuthResult<Vec<OrderSummary>> {
        let rows = sqlx::query_as::<_, OrderSummaryRow>(
            r#"
            SELECT
                order_id,
                is_paid,
                is_sent,
                created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderSummaryRow::into_summary).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    name: Option<String>,
    password_hash: Option<String>,
    phone: Option<String>,
    image: Option<String>,
    role: String,
    is_verified: bool,
    verification_token: Option<String>,
    reset_token: Option<String>,
    reset_token_expiry: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let role = UserRole::from_code(&self.role)
            .ok_or_else(|| AuthError::Internal(format!("Invalid role: {}", self.role)))?;

        let password_hash = self
            .password_hash
            .map(UserPassword::from_hash_string)
            .transpose()?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            email: Email::from_db(self.email),
            name: self.name,
            password_hash,
            phone: self.phone,
            image: self.image,
            role,
            is_verified: self.is_verified,
            verification_token: self.verification_token,
            reset_token: self.reset_token,
            reset_token_expiry: self.reset_token_expiry,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AddressRow {
    address_id: Uuid,
    user_id: Uuid,
    name: String,
    line1: String,
    line2: Option<String>,
    city: String,
    state: Option<String>,
    postal_code: String,
    country: String,
    is_default: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AddressRow {
    fn into_address(self) -> Address {
        Address {
            address_id: AddressId::from_uuid(self.address_id),
            user_id: UserId::from_uuid(self.user_id),
            name: self.name,
            line1: self.line1,
            line2: self.line2,
            city: self.city,
            state: self.state,
            postal_code: self.postal_code,
            country: self.country,
            is_default: self.is_default,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OrderSummaryRow {
    order_id: Uuid,
    is_paid: bool,
    is_sent: bool,
    created_at: DateTime<Utc>,
}

impl OrderSummaryRow {
    fn into_summary(self) -> OrderSummary {
        OrderSummary {
            order_id: self.order_id,
            is_paid: self.is_paid,
            is_sent: self.is_sent,
            created_at: self.created_at,
        }
    }
}
