//! User storage.
//!
//! The auth core only needs to look users up and create them; everything
//! else about user data belongs to its own service. [`UserStore`] is that
//! boundary, and [`InMemoryUserStore`] is the bundled implementation.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::model::User;

/// Lookup and creation interface consumed by the auth endpoints.
pub trait UserStore: Send + Sync {
    fn find_by_email(&self, email: &str) -> Option<User>;
    fn find_by_id(&self, id: &Uuid) -> Option<User>;
    fn insert(&self, user: User);
}

/// Process-local user store backed by a `RwLock<HashMap>`.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, User>> {
        self.users.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, User>> {
        self.users.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl UserStore for InMemoryUserStore {
    fn find_by_email(&self, email: &str) -> Option<User> {
        self.read().values().find(|user| user.email == email).cloned()
    }

    fn find_by_id(&self, id: &Uuid) -> Option<User> {
        self.read().get(id).cloned()
    }

    fn insert(&self, user: User) {
        self.write().insert(user.id, user);
    }
}
