//! In-memory Gateway
//!
//! Holds the table in an `Rc<RefCell<..>>` so clones share rows. Used by
//! tests and by the UI when no remote store is configured.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::Gateway;
use crate::domain::{GatewayError, GatewayResult, NewTodo, Todo, TodoId, TodoPatch};

/// Gateway operation, used for call recording and failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOp {
    Insert,
    Select,
    Update,
    Delete,
    DeleteMany,
}

#[derive(Debug, Default)]
struct MemoryTable {
    rows: Vec<Todo>,
    next_id: u64,
    last_created_at: Option<DateTime<Utc>>,
    failing: HashSet<GatewayOp>,
    calls: Vec<GatewayOp>,
}

impl MemoryTable {
    fn next_id(&mut self) -> TodoId {
        self.next_id += 1;
        TodoId::new(format!("local-{}", self.next_id))
    }

    /// Wall clock, bumped so that consecutive inserts never share a timestamp
    fn next_created_at(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let created_at = match self.last_created_at {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_created_at = Some(created_at);
        created_at
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    table: Rc<RefCell<MemoryTable>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `op` call fail with a network error
    pub fn fail(&self, op: GatewayOp) {
        self.table.borrow_mut().failing.insert(op);
    }

    pub fn recover(&self, op: GatewayOp) {
        self.table.borrow_mut().failing.remove(&op);
    }

    /// Every call received so far, in order (including failed ones)
    pub fn calls(&self) -> Vec<GatewayOp> {
        self.table.borrow().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.table.borrow().calls.len()
    }

    /// Stored rows in insertion order
    pub fn rows(&self) -> Vec<Todo> {
        self.table.borrow().rows.clone()
    }

    fn begin(&self, op: GatewayOp) -> GatewayResult<()> {
        let mut table = self.table.borrow_mut();
        table.calls.push(op);
        if table.failing.contains(&op) {
            return Err(GatewayError::Network(format!("simulated {:?} failure", op)));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl Gateway for MemoryGateway {
    async fn insert(&self, record: &NewTodo) -> GatewayResult<Todo> {
        self.begin(GatewayOp::Insert)?;
        let mut table = self.table.borrow_mut();
        let todo = Todo {
            id: table.next_id(),
            title: record.title.clone(),
            completed: record.completed,
            created_at: table.next_created_at(),
            priority: record.priority,
            category: record.category.clone(),
            user_id: None,
        };
        table.rows.push(todo.clone());
        Ok(todo)
    }

    async fn select_all_newest_first(&self) -> GatewayResult<Vec<Todo>> {
        self.begin(GatewayOp::Select)?;
        let mut rows = self.table.borrow().rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn update_by_id(&self, id: &TodoId, patch: &TodoPatch) -> GatewayResult<()> {
        self.begin(GatewayOp::Update)?;
        if let Some(row) = self.table.borrow_mut().rows.iter_mut().find(|t| &t.id == id) {
            patch.apply_to(row);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &TodoId) -> GatewayResult<()> {
        self.begin(GatewayOp::Delete)?;
        self.table.borrow_mut().rows.retain(|t| &t.id != id);
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[TodoId]) -> GatewayResult<()> {
        self.begin(GatewayOp::DeleteMany)?;
        let ids: HashSet<&TodoId> = ids.iter().collect();
        self.table.borrow_mut().rows.retain(|t| !ids.contains(&t.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;

    fn draft(title: &str) -> NewTodo {
        NewTodo::new(title, Priority::Medium, "기타").unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_increasing_timestamps() {
        let gateway = MemoryGateway::new();
        let first = gateway.insert(&draft("first")).await.unwrap();
        let second = gateway.insert(&draft("second")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.created_at > first.created_at);
        assert!(!first.completed);
    }

    #[tokio::test]
    async fn test_select_is_newest_first() {
        let gateway = MemoryGateway::new();
        gateway.insert(&draft("old")).await.unwrap();
        gateway.insert(&draft("new")).await.unwrap();

        let rows = gateway.select_all_newest_first().await.unwrap();
        let titles: Vec<&str> = rows.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "old"]);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let gateway = MemoryGateway::new();
        let a = gateway.insert(&draft("a")).await.unwrap();
        let b = gateway.insert(&draft("b")).await.unwrap();
        let c = gateway.insert(&draft("c")).await.unwrap();

        gateway.update_by_id(&a.id, &TodoPatch::completed(true)).await.unwrap();
        assert!(gateway.rows()[0].completed);

        gateway.delete_by_id(&a.id).await.unwrap();
        gateway.delete_by_ids(&[b.id.clone(), c.id.clone()]).await.unwrap();
        assert!(gateway.rows().is_empty());
    }

    #[tokio::test]
    async fn test_failure_injection_records_call() {
        let gateway = MemoryGateway::new();
        gateway.fail(GatewayOp::Insert);

        let err = gateway.insert(&draft("x")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Network(_)));
        assert_eq!(gateway.calls(), vec![GatewayOp::Insert]);
        assert!(gateway.rows().is_empty());

        gateway.recover(GatewayOp::Insert);
        assert!(gateway.insert(&draft("x")).await.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_table() {
        let gateway = MemoryGateway::new();
        let other = gateway.clone();
        gateway.insert(&draft("shared")).await.unwrap();
        assert_eq!(other.rows().len(), 1);
    }
}
