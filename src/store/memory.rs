//! In-memory store with the same contract as the PostgreSQL one. Backs
//! the handler tests and database-free local runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::error::AppError;
use crate::person::Person;
use crate::store::PersonStore;

#[derive(Default)]
pub struct MemStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i32, Person>,
    next_id: i32,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonStore for MemStore {
    async fn list(&self) -> Result<Vec<Person>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Person>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.get(&id).cloned())
    }

    async fn insert(&self, person: Person) -> Result<Person, AppError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let created = Person {
            id: inner.next_id,
            name: person.name,
        };
        inner.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn replace(&self, person: &Person) -> Result<(), AppError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.get_mut(&person.id) {
            Some(row) => {
                *row = person.clone();
                Ok(())
            }
            None => Err(AppError::Conflict(format!(
                "person {} changed or vanished during update",
                person.id
            ))),
        }
    }

    async fn remove(&self, id: i32) -> Result<(), AppError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::Conflict(format!(
                "person {} changed or vanished during delete",
                id
            ))),
        }
    }

    async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.contains_key(&id))
    }
}
