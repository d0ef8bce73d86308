//! Event logging system for displaying recent simulation events.

use std::collections::VecDeque;

/// A logged event for display in the UI.
#[derive(Debug, Clone)]
pub struct LoggedEvent {
    /// Simulation time when the event occurred
    pub time: f32,
    /// Human-readable description of the event
    pub description: String,
    /// Category hint for UI coloring
    pub kind: EventKind,
}

/// Categories of notable simulation events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A child was born
    Birth,
    /// Entities were removed by the cleanup sweep
    Death,
    /// A carnivore killed a herbivore
    Predation,
    /// A herbivore ate a food deposit
    Forage,
    /// A new plant sprouted
    Growth,
}

/// Event log that tracks recent simulation events
#[derive(Debug, Clone)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(100)
    }
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Adds a new event to the log
    pub fn log(&mut self, time: f32, description: String, kind: EventKind) {
        self.events.push_front(LoggedEvent {
            time,
            description,
            kind,
        });

        // Keep only the most recent events
        while self.events.len() > self.max_events {
            self.events.pop_back();
        }
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }

    /// Clears all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
