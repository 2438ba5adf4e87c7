//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    Address, Company, Geo, NewUser, RoleName, User, UserInfo, UserUpdate,
};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Columns of a user plus its role names aggregated into an array.
const SELECT_USER: &str = r#"
    SELECT
        u.id, u.first_name, u.last_name, u.username, u.email, u.password_hash,
        u.street, u.suite, u.city, u.zipcode, u.geo_lat, u.geo_lng,
        u.phone, u.website, u.company_name, u.company_catch_phrase, u.company_bs,
        u.created_at, u.updated_at,
        COALESCE(
            array_agg(r.name::text ORDER BY r.id) FILTER (WHERE r.name IS NOT NULL),
            '{}'
        ) AS roles
    FROM users u
    LEFT JOIN user_roles ur ON ur.user_id = u.id
    LEFT JOIN roles r ON r.id = ur.role_id
"#;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    username: String,
    email: String,
    password_hash: String,
    street: Option<String>,
    suite: Option<String>,
    city: Option<String>,
    zipcode: Option<String>,
    geo_lat: Option<String>,
    geo_lng: Option<String>,
    phone: Option<String>,
    website: Option<String>,
    company_name: Option<String>,
    company_catch_phrase: Option<String>,
    company_bs: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    roles: Vec<String>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            username: r.username,
            email: r.email,
            password_hash: r.password_hash,
            address: Address {
                street: r.street,
                suite: r.suite,
                city: r.city,
                zipcode: r.zipcode,
                geo: Geo {
                    lat: r.geo_lat,
                    lng: r.geo_lng,
                },
            },
            phone: r.phone,
            website: r.website,
            company: Company {
                name: r.company_name,
                catch_phrase: r.company_catch_phrase,
                bs: r.company_bs,
            },
            roles: r
                .roles
                .iter()
                .filter_map(|name| name.parse::<RoleName>().ok())
                .collect(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

fn role_names(roles: &[RoleName]) -> Vec<&'static str> {
    roles.iter().map(RoleName::as_str).collect()
}

/// PostgreSQL repository for users and their role assignments.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(&self, filter: &str, value: &str) -> Result<Option<User>, AppError> {
        let sql = format!("{SELECT_USER} WHERE {filter} GROUP BY u.id");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(User::from))
    }

    async fn require(&self, id: i64) -> Result<User, AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::resource_not_found("User", "id", id))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("{SELECT_USER} WHERE u.id = $1 GROUP BY u.id");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.fetch_one_where("u.username = lower($1)", username).await
    }

    async fn find_by_username_or_email(
        &self,
        username_or_email: &str,
    ) -> Result<Option<User>, AppError> {
        let sql = format!(
            "{SELECT_USER} WHERE u.username = lower($1) OR u.email = lower($1) \
             GROUP BY u.id ORDER BY (u.username = lower($1)) DESC LIMIT 1"
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username_or_email)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(User::from))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = lower($1))",
        )
        .bind(username)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = lower($1))",
        )
        .bind(email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list(&self, page: PageRequest) -> Result<Page<User>, AppError> {
        let sql = format!(
            "{SELECT_USER} GROUP BY u.id ORDER BY u.created_at DESC, u.id DESC LIMIT $1 OFFSET $2"
        );

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(self.pool.as_ref())
            .await?;

        let total = self.count().await?;

        Ok(Page::new(
            rows.into_iter().map(User::from).collect(),
            page,
            total,
        ))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (
                first_name, last_name, username, email, password_hash,
                street, suite, city, zipcode, geo_lat, geo_lng,
                phone, website, company_name, company_catch_phrase, company_bs
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING id
            "#,
        )
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.address.street)
        .bind(&new_user.address.suite)
        .bind(&new_user.address.city)
        .bind(&new_user.address.zipcode)
        .bind(&new_user.address.geo.lat)
        .bind(&new_user.address.geo.lng)
        .bind(&new_user.phone)
        .bind(&new_user.website)
        .bind(&new_user.company.name)
        .bind(&new_user.company.catch_phrase)
        .bind(&new_user.company.bs)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO user_roles (user_id, role_id) SELECT $1, id FROM roles WHERE name = ANY($2)",
        )
        .bind(id)
        .bind(role_names(&new_user.roles))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.require(id).await
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<User, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                first_name = $2, last_name = $3, password_hash = $4,
                street = $5, suite = $6, city = $7, zipcode = $8, geo_lat = $9, geo_lng = $10,
                phone = $11, website = $12,
                company_name = $13, company_catch_phrase = $14, company_bs = $15,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(&update.password_hash)
        .bind(&update.address.street)
        .bind(&update.address.suite)
        .bind(&update.address.city)
        .bind(&update.address.zipcode)
        .bind(&update.address.geo.lat)
        .bind(&update.address.geo.lng)
        .bind(&update.phone)
        .bind(&update.website)
        .bind(&update.company.name)
        .bind(&update.company.catch_phrase)
        .bind(&update.company.bs)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::resource_not_found("User", "id", id));
        }

        self.require(id).await
    }

    async fn update_info(&self, id: i64, info: UserInfo) -> Result<User, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                street = $2, suite = $3, city = $4, zipcode = $5, geo_lat = $6, geo_lng = $7,
                phone = $8, website = $9,
                company_name = $10, company_catch_phrase = $11, company_bs = $12,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&info.address.street)
        .bind(&info.address.suite)
        .bind(&info.address.city)
        .bind(&info.address.zipcode)
        .bind(&info.address.geo.lat)
        .bind(&info.address.geo.lng)
        .bind(&info.phone)
        .bind(&info.website)
        .bind(&info.company.name)
        .bind(&info.company.catch_phrase)
        .bind(&info.company.bs)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::resource_not_found("User", "id", id));
        }

        self.require(id).await
    }

    async fn set_roles(&self, id: i64, roles: Vec<RoleName>) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_roles WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let inserted = sqlx::query(
            "INSERT INTO user_roles (user_id, role_id) SELECT $1, id FROM roles WHERE name = ANY($2)",
        )
        .bind(id)
        .bind(role_names(&roles))
        .execute(&mut *tx)
        .await?;

        if inserted.rows_affected() != roles.len() as u64 {
            return Err(AppError::internal(
                "Role table is missing entries",
                json!({ "expected": role_names(&roles) }),
            ));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::resource_not_found("User", "id", id));
        }

        Ok(())
    }
}
