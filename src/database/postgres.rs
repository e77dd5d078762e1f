use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::database::models::{Cat, CatChanges, Feeding, Meal, NewCat, NewFeeding, NewToy, NewUser, Toy, User};
use crate::database::store::{Store, StoreError};

const CAT_COLUMNS: &str = "id, name, breed, description, age, user_id";

/// Postgres-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct FeedingRow {
    id: i64,
    date: NaiveDate,
    meal: String,
    cat_id: i64,
}

impl TryFrom<FeedingRow> for Feeding {
    type Error = StoreError;

    fn try_from(row: FeedingRow) -> Result<Self, Self::Error> {
        let meal = Meal::from_code(&row.meal).ok_or_else(|| {
            StoreError::Sqlx(sqlx::Error::Decode(
                format!("unknown meal code '{}' on feeding {}", row.meal, row.id).into(),
            ))
        })?;
        Ok(Feeding {
            id: row.id,
            date: row.date,
            meal,
            cat_id: row.cat_id,
        })
    }
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash)
             VALUES ($1, $2)
             RETURNING id, username, password_hash, date_joined",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, date_joined FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, date_joined FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list_cats_for_owner(&self, owner_id: i64) -> Result<Vec<Cat>, StoreError> {
        let sql = format!("SELECT {CAT_COLUMNS} FROM cats WHERE user_id = $1 ORDER BY id");
        let cats = sqlx::query_as::<_, Cat>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(cats)
    }

    async fn find_cat(&self, id: i64) -> Result<Option<Cat>, StoreError> {
        let sql = format!("SELECT {CAT_COLUMNS} FROM cats WHERE id = $1");
        let cat = sqlx::query_as::<_, Cat>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cat)
    }

    async fn find_cat_owned(&self, id: i64, owner_id: i64) -> Result<Option<Cat>, StoreError> {
        let sql = format!("SELECT {CAT_COLUMNS} FROM cats WHERE id = $1 AND user_id = $2");
        let cat = sqlx::query_as::<_, Cat>(&sql)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cat)
    }

    async fn create_cat(&self, owner_id: i64, cat: NewCat) -> Result<Cat, StoreError> {
        let sql = format!(
            "INSERT INTO cats (name, breed, description, age, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {CAT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Cat>(&sql)
            .bind(&cat.name)
            .bind(&cat.breed)
            .bind(&cat.description)
            .bind(cat.age)
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn update_cat(&self, id: i64, changes: CatChanges) -> Result<Option<Cat>, StoreError> {
        let sql = format!(
            "UPDATE cats SET breed = $2, description = $3, age = $4
             WHERE id = $1
             RETURNING {CAT_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Cat>(&sql)
            .bind(id)
            .bind(&changes.breed)
            .bind(&changes.description)
            .bind(changes.age)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete_cat(&self, id: i64) -> Result<bool, StoreError> {
        // feedings and cats_toys rows go with the cat via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM cats WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_feedings(&self, cat_id: i64) -> Result<Vec<Feeding>, StoreError> {
        let rows = sqlx::query_as::<_, FeedingRow>(
            "SELECT id, date, meal, cat_id FROM feedings
             WHERE cat_id = $1
             ORDER BY date DESC, id DESC",
        )
        .bind(cat_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Feeding::try_from).collect()
    }

    async fn add_feeding(&self, cat_id: i64, feeding: NewFeeding) -> Result<Feeding, StoreError> {
        let row = sqlx::query_as::<_, FeedingRow>(
            "INSERT INTO feedings (date, meal, cat_id)
             VALUES ($1, $2, $3)
             RETURNING id, date, meal, cat_id",
        )
        .bind(feeding.date)
        .bind(feeding.meal.code())
        .bind(cat_id)
        .fetch_one(&self.pool)
        .await?;

        Feeding::try_from(row)
    }

    async fn list_toys(&self) -> Result<Vec<Toy>, StoreError> {
        let toys = sqlx::query_as::<_, Toy>("SELECT id, name, color FROM toys ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(toys)
    }

    async fn find_toy(&self, id: i64) -> Result<Option<Toy>, StoreError> {
        let toy = sqlx::query_as::<_, Toy>("SELECT id, name, color FROM toys WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(toy)
    }

    async fn create_toy(&self, toy: NewToy) -> Result<Toy, StoreError> {
        let created = sqlx::query_as::<_, Toy>(
            "INSERT INTO toys (name, color) VALUES ($1, $2) RETURNING id, name, color",
        )
        .bind(&toy.name)
        .bind(&toy.color)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_toy(&self, id: i64, toy: NewToy) -> Result<Option<Toy>, StoreError> {
        let updated = sqlx::query_as::<_, Toy>(
            "UPDATE toys SET name = $2, color = $3 WHERE id = $1 RETURNING id, name, color",
        )
        .bind(id)
        .bind(&toy.name)
        .bind(&toy.color)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_toy(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM toys WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_cat_toys(&self, cat_id: i64) -> Result<Vec<Toy>, StoreError> {
        let toys = sqlx::query_as::<_, Toy>(
            "SELECT t.id, t.name, t.color FROM toys t
             JOIN cats_toys ct ON ct.toy_id = t.id
             WHERE ct.cat_id = $1
             ORDER BY t.id",
        )
        .bind(cat_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(toys)
    }

    async fn associate_toy(&self, cat_id: i64, toy_id: i64) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO cats_toys (cat_id, toy_id) VALUES ($1, $2)
             ON CONFLICT (cat_id, toy_id) DO NOTHING",
        )
        .bind(cat_id)
        .bind(toy_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn dissociate_toy(&self, cat_id: i64, toy_id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM cats_toys WHERE cat_id = $1 AND toy_id = $2")
            .bind(cat_id)
            .bind(toy_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
