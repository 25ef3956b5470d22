//! Toast notification lifecycle.
//!
//! A notification is an ephemeral, positioned, dismissible message. Each one
//! is created through [`create_notification`] and driven by its own
//! [`LifecycleController`]; there is no shared registry.
//!
//! # Components
//!
//! - [`kind`] - `Kind` and `Position` enums
//! - [`options`] - `NotificationOptions` with the component defaults
//! - [`model`] - the immutable-once-created `Notification` record
//! - [`lifecycle`] - `LifecycleController`, the Visible -> Dismissed state machine
//! - [`signal`] - `closed` / `action` signals delivered over a Tokio channel
//!
//! # Usage
//!
//! ```ignore
//! use bakery_ui::notification::{create_notification, Kind, NotificationOptions, Signal};
//!
//! let (toast, mut signals) = create_notification(
//!     Kind::Success,
//!     "Order placed",
//!     NotificationOptions::new().action_label("View"),
//! );
//!
//! toast.request_action();
//! while let Some(signal) = signals.recv().await {
//!     if let Signal::Closed(_) = signal {
//!         break;
//!     }
//! }
//! ```

pub mod kind;
pub mod lifecycle;
pub mod model;
pub mod options;
pub mod signal;
mod timer;

pub use kind::{Kind, Position};
pub use lifecycle::{create_notification, LifecycleController, LifecycleState};
pub use model::{Notification, NotificationId};
pub use options::NotificationOptions;
pub use signal::{Signal, SignalReceiver, SignalSender};
