//! Bakery UI - toast notifications for terminal interfaces
//!
//! This library provides the toast notification primitive of the Bakery UI
//! component set: a notification record, a lifecycle controller that drives
//! it from visible to dismissed (manual close, timed auto-dismiss or
//! programmatic dismiss), a positioning policy, and a ratatui widget that
//! renders the result.
//!
//! # Modules
//!
//! * [`notification`] - Notification record, lifecycle controller and signals
//! * [`positioning`] - Screen-corner placement of toasts
//! * [`config`] - Application configuration management
//! * [`logger`] - File logging setup
//! * [`icons`] - Icon themes for toast glyphs
//! * [`ui`] - Toast widget and the terminal demo

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error type for parsing notification attributes
pub mod error;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Notification lifecycle management
pub mod notification;

/// Positioning policy mapping placements to screen anchors
pub mod positioning;

/// Terminal user interface components and rendering
pub mod ui;

pub use error::{Error, Result};
pub use notification::{
    create_notification, Kind, LifecycleController, LifecycleState, Notification, NotificationId, NotificationOptions,
    Position, Signal,
};
