/*
 * Responsibility
 * - users.json file store への CRUD
 * - 重複チェックは boolean ではなく tagged variant (UserLookup) で返す
 */
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::repos::error::RepoError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password_digest: String,
}

/// Outcome of checking a signup against existing records.
///
/// `NotFound` means no existing record clashes and the signup may proceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserLookup {
    NotFound,
    UsernameTaken,
    EmailTaken,
}

pub struct UserRepo {
    path: PathBuf,
    // Serializes read-modify-write cycles on the backing file.
    write_lock: Mutex<()>,
}

impl UserRepo {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Insert a new user unless the username or email is already taken.
    /// The conflict check and the insert happen under one lock.
    pub async fn create(&self, user: UserRecord) -> Result<UserLookup, RepoError> {
        let _guard = self.write_lock.lock().await;

        let mut users = self.load().await?;
        let lookup = lookup(&users, &user.username, &user.email);
        if lookup == UserLookup::NotFound {
            users.push(user);
            self.store(&users).await?;
        }

        Ok(lookup)
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, RepoError> {
        let users = self.load().await?;
        Ok(users.into_iter().find(|u| u.username == username))
    }

    async fn load(&self) -> Result<Vec<UserRecord>, RepoError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            // First signup creates the file.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(RepoError::Io(e)),
        }
    }

    async fn store(&self, users: &[UserRecord]) -> Result<(), RepoError> {
        let bytes = serde_json::to_vec_pretty(users)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

fn lookup(users: &[UserRecord], username: &str, email: &str) -> UserLookup {
    for user in users {
        if user.username == username {
            return UserLookup::UsernameTaken;
        }
        if user.email == email {
            return UserLookup::EmailTaken;
        }
    }
    UserLookup::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str, email: &str) -> UserRecord {
        UserRecord {
            username: username.to_string(),
            email: email.to_string(),
            password_digest: "digest".to_string(),
        }
    }

    fn temp_repo(name: &str) -> UserRepo {
        let path = std::env::temp_dir().join(format!(
            "login-users-{}-{}.json",
            std::process::id(),
            name
        ));
        let _ = std::fs::remove_file(&path);
        UserRepo::new(path)
    }

    #[test]
    fn lookup_reports_the_clashing_field() {
        let users = vec![record("alice", "alice@example.com")];

        assert_eq!(
            lookup(&users, "alice", "other@example.com"),
            UserLookup::UsernameTaken
        );
        assert_eq!(
            lookup(&users, "bob", "alice@example.com"),
            UserLookup::EmailTaken
        );
        assert_eq!(
            lookup(&users, "bob", "bob@example.com"),
            UserLookup::NotFound
        );
    }

    #[tokio::test]
    async fn create_then_find_round_trips() {
        let repo = temp_repo("round-trip");

        let outcome = repo
            .create(record("alice", "alice@example.com"))
            .await
            .unwrap();
        assert_eq!(outcome, UserLookup::NotFound);

        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.email, "alice@example.com");
        assert!(repo.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_rejects_duplicates_without_writing() {
        let repo = temp_repo("duplicates");

        repo.create(record("alice", "alice@example.com"))
            .await
            .unwrap();

        let outcome = repo
            .create(record("alice", "new@example.com"))
            .await
            .unwrap();
        assert_eq!(outcome, UserLookup::UsernameTaken);

        let outcome = repo
            .create(record("bob", "alice@example.com"))
            .await
            .unwrap();
        assert_eq!(outcome, UserLookup::EmailTaken);

        // The clashing signups must not have replaced the original record.
        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.email, "alice@example.com");
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty_store() {
        let repo = temp_repo("missing-file");
        assert!(repo.find_by_username("alice").await.unwrap().is_none());
    }
}
