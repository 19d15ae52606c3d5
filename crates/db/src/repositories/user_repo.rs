//! Repository for the `users` and `user_profiles` tables.

use mfc_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User, UserWithProfile};
use crate::models::user_profile::UserProfile;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, first_name, last_name, \
                       is_staff, is_active, created_at, updated_at";

const PROFILE_COLUMNS: &str = "id, user_id, phone, snils, created_at, updated_at";

/// Provides account and profile persistence.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user without a profile (staff accounts).
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, first_name, last_name, is_staff)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.is_staff)
            .fetch_one(pool)
            .await
    }

    /// Register a citizen: the user row and its profile are written in one
    /// transaction, so a SNILS conflict leaves no orphan account behind.
    pub async fn create_with_profile(
        pool: &PgPool,
        input: &CreateUser,
        phone: &str,
        snils: &str,
    ) -> Result<(User, UserProfile), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO users (username, email, password_hash, first_name, last_name, is_staff)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.is_staff)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO user_profiles (user_id, phone, snils)
             VALUES ($1, $2, $3)
             RETURNING {PROFILE_COLUMNS}"
        );
        let profile = sqlx::query_as::<_, UserProfile>(&query)
            .bind(user.id)
            .bind(phone)
            .bind(snils)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((user, profile))
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Profile of a user, if one was created at registration.
    pub async fn find_profile(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE user_id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Management listing: users with profile fields, newest first.
    pub async fn list_with_profiles(pool: &PgPool) -> Result<Vec<UserWithProfile>, sqlx::Error> {
        sqlx::query_as::<_, UserWithProfile>(
            "SELECT u.id, u.username, u.email, u.first_name, u.last_name,
                    u.is_staff, u.is_active, p.phone, p.snils, u.created_at
             FROM users u
             LEFT JOIN user_profiles p ON p.user_id = u.id
             ORDER BY u.created_at DESC, u.id DESC",
        )
        .fetch_all(pool)
        .await
    }
}
