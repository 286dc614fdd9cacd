//! In-memory implementation of UserRepository

use async_trait::async_trait;

use blog_core::{DomainError, RepoResult, Snowflake, User, UserRepository};

use super::{MemoryStore, UserRow};

#[derive(Clone, Debug)]
pub struct MemoryUserRepository {
    store: MemoryStore,
}

impl MemoryUserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let tables = self.store.tables.read();
        Ok(tables.users.get(&id).and_then(UserRow::live).cloned())
    }

    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>> {
        let tables = self.store.tables.read();
        Ok(ids
            .iter()
            .filter_map(|id| tables.users.get(id).and_then(UserRow::live))
            .cloned()
            .collect())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let tables = self.store.tables.read();
        Ok(tables
            .users
            .values()
            .filter_map(UserRow::live)
            .find(|u| u.username == username)
            .cloned())
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        let tables = self.store.tables.read();
        Ok(tables
            .users
            .values()
            .filter_map(UserRow::live)
            .any(|u| u.username == username))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let tables = self.store.tables.read();
        Ok(tables
            .users
            .values()
            .filter_map(UserRow::live)
            .any(|u| u.email == email))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut tables = self.store.tables.write();

        // Checked under the write lock, so this is the uniqueness constraint
        for existing in tables.users.values().filter_map(UserRow::live) {
            if existing.username == user.username {
                return Err(DomainError::UsernameAlreadyExists);
            }
            if existing.email == user.email {
                return Err(DomainError::EmailAlreadyExists);
            }
        }
        if tables.users.contains_key(&user.id) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate user id {}",
                user.id
            )));
        }

        tables.users.insert(
            user.id,
            UserRow {
                user: user.clone(),
                password_hash: password_hash.to_string(),
                deleted_at: None,
            },
        );
        Ok(())
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        let tables = self.store.tables.read();
        Ok(tables
            .users
            .get(&id)
            .filter(|row| row.deleted_at.is_none())
            .map(|row| row.password_hash.clone()))
    }
}
