//! Envelope-level operations over a shared `TodoStore`.
//!
//! # Design
//! `TodoService` owns the only store and a `std::sync::Mutex` around it.
//! Every operation takes the lock once, runs one store call and builds the
//! envelope while still holding it, so no two operations interleave. The
//! lock is never held across an `.await`; callers on an async runtime can
//! call these methods directly from handlers.
//!
//! A poisoned lock is taken over rather than propagated: store mutators
//! finish each change in a single assignment, so a panic elsewhere cannot
//! leave the sequence half-updated.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::response::{self, ApiResponse};
use crate::store::TodoStore;
use crate::types::{CreateTodo, ReplaceTodo, SearchQuery, TodoItem, UpdateStatus};

#[derive(Debug, Default)]
pub struct TodoService {
    store: Mutex<TodoStore>,
}

impl TodoService {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// A service over the startup seed items.
    pub fn seeded() -> Self {
        Self::new(TodoStore::seeded())
    }

    fn lock(&self) -> MutexGuard<'_, TodoStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn health(&self) -> ApiResponse<()> {
        ApiResponse::ok_empty(response::HEALTHY)
    }

    pub fn list(&self) -> ApiResponse<Vec<TodoItem>> {
        let store = self.lock();
        tracing::debug!(count = store.len(), "listing todos");
        ApiResponse::ok(store.list_all().to_vec(), response::LIST_FETCHED)
    }

    pub fn create(&self, input: CreateTodo) -> ApiResponse<Vec<TodoItem>> {
        let mut store = self.lock();
        let items = store.create(input);
        if let Some(created) = items.last() {
            tracing::info!(id = created.id, priority = %created.priority, "todo created");
        }
        ApiResponse::ok(items.to_vec(), response::CREATED)
    }

    pub fn search(&self, query: &SearchQuery) -> ApiResponse<Vec<TodoItem>> {
        let store = self.lock();
        match store.search(query) {
            Ok(matches) => {
                tracing::debug!(
                    todo = ?query.todo,
                    priority = ?query.priority,
                    matches = matches.len(),
                    "search matched"
                );
                ApiResponse::ok(matches, response::SEARCH_FETCHED)
            }
            Err(err) => {
                tracing::debug!(todo = ?query.todo, priority = ?query.priority, "{err}");
                ApiResponse::fail(response::SEARCH_EMPTY)
            }
        }
    }

    pub fn get(&self, id: u64) -> ApiResponse<TodoItem> {
        let store = self.lock();
        match store.find_by_id(id) {
            Ok(item) => {
                tracing::debug!(id, "todo fetched");
                ApiResponse::ok(item.clone(), response::ITEM_FETCHED)
            }
            Err(err) => {
                tracing::debug!(id, "{err}");
                ApiResponse::fail(response::DATA_NOT_FOUND)
            }
        }
    }

    pub fn delete(&self, id: u64) -> ApiResponse<()> {
        let mut store = self.lock();
        match store.delete_by_id(id) {
            Ok(removed) => {
                tracing::info!(id = removed.id, remaining = store.len(), "todo deleted");
                ApiResponse::ok_empty(response::DELETED)
            }
            Err(err) => {
                tracing::debug!(id, "{err}");
                ApiResponse::fail(response::DATA_NOT_FOUND)
            }
        }
    }

    pub fn update_status(&self, id: u64, input: UpdateStatus) -> ApiResponse<TodoItem> {
        let mut store = self.lock();
        match store.update_status(id, input) {
            Ok(item) => {
                tracing::info!(id, is_done = item.is_done, "todo status updated");
                ApiResponse::ok(item.clone(), response::UPDATED)
            }
            Err(err) => {
                tracing::debug!(id, "{err}");
                ApiResponse::fail(response::ITEM_NOT_FOUND)
            }
        }
    }

    pub fn replace(&self, id: u64, input: ReplaceTodo) -> ApiResponse<TodoItem> {
        let mut store = self.lock();
        match store.replace(id, input) {
            Ok(item) => {
                tracing::info!(id, todo = %item.todo, "todo replaced");
                ApiResponse::ok(item.clone(), response::UPDATED)
            }
            Err(err) => {
                tracing::debug!(id, "{err}");
                ApiResponse::fail(response::ITEM_NOT_FOUND)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn coffee_query() -> SearchQuery {
        SearchQuery::new("coffee", "low")
    }

    #[test]
    fn health_reports_healthy() {
        let resp = TodoService::seeded().health();
        assert!(resp.success);
        assert_eq!(resp.message, "Server is healthy");
        assert!(resp.data.is_none());
    }

    #[test]
    fn list_returns_seed_items() {
        let resp = TodoService::seeded().list();
        assert!(resp.success);
        assert_eq!(resp.message, response::LIST_FETCHED);
        assert_eq!(resp.data.unwrap().len(), 3);
    }

    #[test]
    fn create_returns_the_whole_list() {
        let service = TodoService::seeded();
        let resp = service.create(CreateTodo {
            todo: "Stretch".to_string(),
            priority: "low".to_string(),
            is_done: false,
            emoji: "🤸".to_string(),
        });
        assert!(resp.success);
        assert_eq!(resp.message, response::CREATED);
        let items = resp.data.unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[3].id, 4);
        assert_eq!(items[3].emoji, "🤸");
    }

    #[test]
    fn search_hit_and_miss() {
        let service = TodoService::seeded();

        let hit = service.search(&coffee_query());
        assert!(hit.success);
        assert_eq!(hit.message, response::SEARCH_FETCHED);
        assert_eq!(hit.data.unwrap()[0].todo, "Morning Coffee");

        let miss = service.search(&SearchQuery::new("xyz", "low"));
        assert_eq!(miss, ApiResponse::fail(response::SEARCH_EMPTY));
    }

    #[test]
    fn get_missing_is_data_not_found() {
        let resp = TodoService::seeded().get(99);
        assert_eq!(resp, ApiResponse::fail(response::DATA_NOT_FOUND));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let service = TodoService::seeded();
        assert_eq!(service.delete(1), ApiResponse::ok_empty(response::DELETED));
        assert!(!service.get(1).success);
        assert_eq!(service.delete(1), ApiResponse::fail(response::DATA_NOT_FOUND));
    }

    #[test]
    fn update_status_missing_leaves_store_unchanged() {
        let service = TodoService::seeded();
        let before = service.list().data;
        let resp = service.update_status(99, UpdateStatus { is_done: true });
        assert_eq!(resp, ApiResponse::fail(response::ITEM_NOT_FOUND));
        assert_eq!(service.list().data, before);
    }

    #[test]
    fn replace_reports_updated_item() {
        let service = TodoService::seeded();
        let resp = service.replace(
            3,
            ReplaceTodo {
                todo: "Green tea".to_string(),
                priority: "medium".to_string(),
                is_done: true,
            },
        );
        assert!(resp.success);
        assert_eq!(resp.message, response::UPDATED);
        let item = resp.data.unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.todo, "Green tea");
    }

    #[test]
    fn concurrent_creates_assign_unique_ids() {
        let service = Arc::new(TodoService::new(TodoStore::new()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        service.create(CreateTodo::default());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<u64> = service.list().data.unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 200);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(ids.last(), Some(&200));
    }
}
