//! Progress store — the single owner of users, progress records and certificates.
//!
//! Handlers talk to the `ProgressStore` trait; `AppState` carries an
//! `Arc<dyn ProgressStore>` so a persistent backend can replace the in-memory one.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::progress::models::{
    Certificate, ProgressRecord, ProgressUpdate, User, UserOverview, UserProfile, UserProgress,
};

/// Produces the certificate to append once the store holds its write lock.
pub type CertificateBuilder<'a> = Box<dyn FnOnce() -> Result<Certificate, AppError> + Send + 'a>;

#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Creates or replaces a profile. `created_at` survives replacement.
    async fn upsert_user(
        &self,
        user_id: &str,
        profile: UserProfile,
        now: DateTime<Utc>,
    ) -> Result<User, AppError>;

    /// Fails with `NotFound` when the user has never been written.
    async fn ensure_user(&self, user_id: &str) -> Result<(), AppError>;

    async fn user_overview(&self, user_id: &str) -> Result<UserOverview, AppError>;

    /// Returns a default record, without storing it, when none exists yet.
    async fn get_progress(
        &self,
        user_id: &str,
        specialization_id: &str,
    ) -> Result<ProgressRecord, AppError>;

    async fn upsert_progress(
        &self,
        user_id: &str,
        specialization_id: &str,
        update: ProgressUpdate,
    ) -> Result<ProgressRecord, AppError>;

    /// Builds a certificate and appends it to the owning (user, specialization)
    /// record, creating the record if needed. `build` runs inside the same write
    /// section as the append, so each record holds its certificates in id order.
    /// `build` is never called for an unknown user.
    async fn append_certificate(
        &self,
        user_id: &str,
        specialization_id: &str,
        build: CertificateBuilder<'_>,
    ) -> Result<Certificate, AppError>;

    async fn list_certificates(&self, user_id: &str) -> Result<Vec<Certificate>, AppError>;
}

struct UserEntry {
    user: User,
    progress: UserProgress,
}

/// Process-memory store. One lock covers every user, so concurrent writes
/// to the same record are applied one after another.
#[derive(Default)]
pub struct InMemoryProgressStore {
    users: RwLock<HashMap<String, UserEntry>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn upsert_user(
        &self,
        user_id: &str,
        profile: UserProfile,
        now: DateTime<Utc>,
    ) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        let created_at = users
            .get(user_id)
            .map(|entry| entry.user.created_at)
            .unwrap_or(now);

        let user = User {
            id: user_id.to_string(),
            name: profile.name,
            email: profile.email,
            specialization: profile.specialization,
            level: profile.level,
            created_at,
            updated_at: now,
        };

        match users.get_mut(user_id) {
            Some(entry) => entry.user = user.clone(),
            None => {
                info!(user_id, "Registered new user");
                users.insert(
                    user_id.to_string(),
                    UserEntry {
                        user: user.clone(),
                        progress: UserProgress::default(),
                    },
                );
            }
        }

        Ok(user)
    }

    async fn ensure_user(&self, user_id: &str) -> Result<(), AppError> {
        if self.users.read().await.contains_key(user_id) {
            Ok(())
        } else {
            Err(AppError::user_not_found())
        }
    }

    async fn user_overview(&self, user_id: &str) -> Result<UserOverview, AppError> {
        let users = self.users.read().await;
        let entry = users.get(user_id).ok_or_else(AppError::user_not_found)?;
        Ok(UserOverview {
            user: entry.user.clone(),
            progress: entry.progress.clone(),
        })
    }

    async fn get_progress(
        &self,
        user_id: &str,
        specialization_id: &str,
    ) -> Result<ProgressRecord, AppError> {
        let users = self.users.read().await;
        let entry = users.get(user_id).ok_or_else(AppError::user_not_found)?;
        Ok(entry
            .progress
            .get(specialization_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn upsert_progress(
        &self,
        user_id: &str,
        specialization_id: &str,
        update: ProgressUpdate,
    ) -> Result<ProgressRecord, AppError> {
        let mut users = self.users.write().await;
        let entry = users
            .get_mut(user_id)
            .ok_or_else(AppError::user_not_found)?;

        let record = entry.progress.get_or_insert_default(specialization_id);
        record.apply(update);
        debug!(
            user_id,
            specialization_id,
            completed = record.completed_modules.len(),
            percentage = ?record.progress_percentage,
            "Progress updated"
        );

        Ok(record.clone())
    }

    async fn append_certificate(
        &self,
        user_id: &str,
        specialization_id: &str,
        build: CertificateBuilder<'_>,
    ) -> Result<Certificate, AppError> {
        let mut users = self.users.write().await;
        let entry = users
            .get_mut(user_id)
            .ok_or_else(AppError::user_not_found)?;

        let certificate = build()?;
        entry
            .progress
            .get_or_insert_default(specialization_id)
            .certificates
            .push(certificate.clone());

        Ok(certificate)
    }

    async fn list_certificates(&self, user_id: &str) -> Result<Vec<Certificate>, AppError> {
        let users = self.users.read().await;
        let entry = users.get(user_id).ok_or_else(AppError::user_not_found)?;
        Ok(entry.progress.certificates())
    }
}
