//! In-memory todo collection.
//!
//! # Design
//! `TodoStore` is a plain owned value with `&mut self` mutators; it knows
//! nothing about locking. `TodoService` wraps it in a mutex so each call is
//! one exclusive critical section.
//!
//! Ids come from `next_id`, bumped once per create and never rewound, so an
//! id freed by a delete is never handed out again. The counter saturates at
//! `u64::MAX`; uniqueness holds for every id below it.

use chrono::{DateTime, SubsecRound, TimeZone, Utc};

use crate::error::{Result, StoreError};
use crate::types::{CreateTodo, ReplaceTodo, SearchQuery, TodoItem, UpdateStatus};

/// Ordered, process-lifetime collection of todo items.
#[derive(Debug, Clone)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// An empty store whose first item gets id 1.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store around existing items. The counter resumes after the
    /// highest id present.
    pub fn from_items(items: Vec<TodoItem>) -> Self {
        let next_id = items
            .iter()
            .map(|item| item.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        Self { items, next_id }
    }

    /// The three items every fresh process starts with.
    pub fn seeded() -> Self {
        Self::from_items(vec![
            seed_item(1, "🏋️", "Gym Workout", "high", seed_time(2025, 8, 20, 7, 0)),
            seed_item(2, "🧘", "Meditation for 20 mins", "medium", seed_time(2025, 8, 21, 6, 30)),
            seed_item(3, "☕", "Morning Coffee", "low", seed_time(2025, 8, 22, 8, 15)),
        ])
    }

    pub fn list_all(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new item and return the whole updated sequence; the new item
    /// is always last.
    pub fn create(&mut self, input: CreateTodo) -> &[TodoItem] {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.items.push(TodoItem {
            id,
            emoji: input.emoji,
            todo: input.todo,
            priority: input.priority,
            is_done: input.is_done,
            created_at: Utc::now().trunc_subsecs(3),
        });
        &self.items
    }

    pub fn find_by_id(&self, id: u64) -> Result<&TodoItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound { id })
    }

    /// Items whose text contains `query.todo` and whose priority equals
    /// `query.priority`, both compared case-insensitively. A missing or empty
    /// criterion matches everything.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<TodoItem>> {
        let needle = criterion(query.todo.as_deref());
        let priority = criterion(query.priority.as_deref());

        let matches: Vec<TodoItem> = self
            .items
            .iter()
            .filter(|item| {
                let text_ok = needle
                    .as_deref()
                    .is_none_or(|n| item.todo.to_lowercase().contains(n));
                let priority_ok = priority
                    .as_deref()
                    .is_none_or(|p| item.priority.to_lowercase() == p);
                text_ok && priority_ok
            })
            .cloned()
            .collect();

        if matches.is_empty() {
            Err(StoreError::NoMatches)
        } else {
            Ok(matches)
        }
    }

    /// Set only `is_done` on the item with `id`.
    pub fn update_status(&mut self, id: u64, input: UpdateStatus) -> Result<&TodoItem> {
        let index = self.position(id)?;
        self.items[index].is_done = input.is_done;
        Ok(&self.items[index])
    }

    /// Swap in a new item that keeps the old `id` and `created_at`. The
    /// emoji is not part of a replace and ends up empty.
    pub fn replace(&mut self, id: u64, input: ReplaceTodo) -> Result<&TodoItem> {
        let index = self.position(id)?;
        let created_at = self.items[index].created_at;
        self.items[index] = TodoItem {
            id,
            emoji: String::new(),
            todo: input.todo,
            priority: input.priority,
            is_done: input.is_done,
            created_at,
        };
        Ok(&self.items[index])
    }

    /// Remove the item with `id`, keeping the others in order.
    pub fn delete_by_id(&mut self, id: u64) -> Result<TodoItem> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound { id })
    }
}

fn criterion(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_lowercase)
}

fn seed_item(id: u64, emoji: &str, todo: &str, priority: &str, created_at: DateTime<Utc>) -> TodoItem {
    TodoItem {
        id,
        emoji: emoji.to_string(),
        todo: todo.to_string(),
        priority: priority.to_string(),
        is_done: false,
        created_at,
    }
}

fn seed_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}
