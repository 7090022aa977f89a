// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Facet;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($name) }
        }
    };
}

// ============================================================================
// FILTER EVENTS
// ============================================================================

/// Emitted for every single facet value toggle.
/// A facet clear produces one of these per removed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetValueToggled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub facet: Facet,
    pub value: String,
    pub selected: bool,
}

impl FacetValueToggled {
    pub fn new(facet: Facet, value: String, selected: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            facet,
            value,
            selected,
        }
    }
}

impl_domain_event!(FacetValueToggled);

/// Emitted when the free-text query is replaced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQueryChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub query: String,
}

impl SearchQueryChanged {
    pub fn new(query: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            query,
        }
    }
}

impl_domain_event!(SearchQueryChanged);

/// Emitted when all filters return to the default state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltersCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl FiltersCleared {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for FiltersCleared {
    fn default() -> Self {
        Self::new()
    }
}

impl_domain_event!(FiltersCleared);

// ============================================================================
// SELECTION EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionItemAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub item_id: String,
    pub selection_size: usize,
}

impl SelectionItemAdded {
    pub fn new(item_id: String, selection_size: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            item_id,
            selection_size,
        }
    }
}

impl_domain_event!(SelectionItemAdded);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionItemRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub item_id: String,
    pub selection_size: usize,
}

impl SelectionItemRemoved {
    pub fn new(item_id: String, selection_size: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            item_id,
            selection_size,
        }
    }
}

impl_domain_event!(SelectionItemRemoved);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub removed_count: usize,
}

impl SelectionCleared {
    pub fn new(removed_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            removed_count,
        }
    }
}

impl_domain_event!(SelectionCleared);

// ============================================================================
// VIEW & SUBMISSION EVENTS
// ============================================================================

/// Emitted on every transition of the two-view machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub from: String,
    pub to: String,
}

impl ViewChanged {
    pub fn new(from: String, to: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            from,
            to,
        }
    }
}

impl_domain_event!(ViewChanged);

/// Emitted when the request submission moves between idle / submitting /
/// succeeded / failed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionStatusChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub status: String,
    pub item_count: usize,
}

impl SubmissionStatusChanged {
    pub fn new(status: String, item_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            status,
            item_count,
        }
    }
}

impl_domain_event!(SubmissionStatusChanged);
