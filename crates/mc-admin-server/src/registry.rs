//! In-memory task and node registries
//!
//! Volatile placeholder stores. Both are shared through
//! `Arc<RwLock<_>>` in the router state; lookups that miss return
//! `AdminError::NotFound` and leave the store untouched.

use mc_admin_core::{AdminError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Unique identifier for a task
pub type TaskId = String;

/// Unique identifier for a node
pub type NodeId = String;

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Created,
    Running,
    Stopped,
}

/// Task registry entry
#[derive(Debug, Clone, Serialize)]
pub struct TaskEntry {
    pub task_id: TaskId,
    pub status: TaskStatus,
    pub config: Value,
}

/// Outcome of a task state change
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskState {
    pub task_id: TaskId,
    pub status: TaskStatus,
}

/// Listing of known task ids, in creation order
#[derive(Debug, Clone, Serialize)]
pub struct TaskList {
    pub tasks: Vec<TaskId>,
}

/// Registry of submitted tasks
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: HashMap<TaskId, TaskEntry>,
    order: Vec<TaskId>,
}

impl TaskRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a task configuration under the next sequential id
    pub fn create(&mut self, config: Value) -> TaskState {
        let task_id = format!("task_{}", self.order.len() + 1);
        let entry = TaskEntry {
            task_id: task_id.clone(),
            status: TaskStatus::Running,
            config,
        };

        self.tasks.insert(task_id.clone(), entry);
        self.order.push(task_id.clone());

        TaskState {
            task_id,
            status: TaskStatus::Created,
        }
    }

    /// Get a task entry
    pub fn get(&self, task_id: &str) -> Result<&TaskEntry> {
        self.tasks
            .get(task_id)
            .ok_or_else(|| AdminError::NotFound(format!("task {}", task_id)))
    }

    /// Mark a task as stopped
    pub fn stop(&mut self, task_id: &str) -> Result<TaskState> {
        let entry = self
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| AdminError::NotFound(format!("task {}", task_id)))?;
        entry.status = TaskStatus::Stopped;

        Ok(TaskState {
            task_id: entry.task_id.clone(),
            status: entry.status,
        })
    }

    /// List all task ids
    pub fn list(&self) -> TaskList {
        TaskList {
            tasks: self.order.clone(),
        }
    }

    /// Number of registered tasks
    pub fn count(&self) -> usize {
        self.order.len()
    }
}

/// Node availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Active,
    Offline,
    Draining,
}

/// Node registry entry
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NodeEntry {
    pub status: NodeStatus,
    pub load: f64,
}

/// Outcome of draining a node
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NodeState {
    pub node_id: NodeId,
    pub status: NodeStatus,
}

/// Registry of worker nodes
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: BTreeMap<NodeId, NodeEntry>,
}

impl NodeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the stock three nodes
    pub fn seeded() -> Self {
        let mut registry = Self::new();
        registry.insert("node_1", NodeStatus::Active, 0.3);
        registry.insert("node_2", NodeStatus::Active, 0.8);
        registry.insert("node_3", NodeStatus::Offline, 0.0);
        registry
    }

    /// Add or replace a node
    pub fn insert(&mut self, node_id: impl Into<NodeId>, status: NodeStatus, load: f64) {
        self.nodes.insert(node_id.into(), NodeEntry { status, load });
    }

    /// Get a node entry
    pub fn get(&self, node_id: &str) -> Result<&NodeEntry> {
        self.nodes
            .get(node_id)
            .ok_or_else(|| AdminError::NotFound(format!("node {}", node_id)))
    }

    /// Stop routing new work to a node
    pub fn drain(&mut self, node_id: &str) -> Result<NodeState> {
        let entry = self
            .nodes
            .get_mut(node_id)
            .ok_or_else(|| AdminError::NotFound(format!("node {}", node_id)))?;
        entry.status = NodeStatus::Draining;

        Ok(NodeState {
            node_id: node_id.to_string(),
            status: NodeStatus::Draining,
        })
    }

    /// All nodes keyed by id
    pub fn list(&self) -> &BTreeMap<NodeId, NodeEntry> {
        &self.nodes
    }
}
