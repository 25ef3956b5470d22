//! Constants used throughout the crate
//!
//! This module centralizes default values, layout sizes and UI text so the
//! library, the config layer and the demo binary agree on them.

// Notification defaults
/// Auto-dismiss delay applied when the caller does not pick one
pub const DEFAULT_DURATION_MS: u64 = 5_000;
/// Upper bound accepted by config validation (one hour)
pub const MAX_DURATION_MS: u64 = 3_600_000;

// UI Layout Constants
/// Cells kept between a toast and the anchored screen edges
pub const TOAST_EDGE_MARGIN: u16 = 1;
/// Minimum toast width in columns
pub const TOAST_MIN_WIDTH: u16 = 20;
/// Maximum toast width in columns
pub const TOAST_MAX_WIDTH: u16 = 80;
/// Default toast width in columns
pub const TOAST_DEFAULT_WIDTH: u16 = 40;

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CLOSE_HINT: &str = "close";
pub const DEMO_TITLE: &str = "Bakery UI toasts";
pub const DEMO_HELP: &str =
    "1-4 show toast | p placement | x close | a action | d dismiss all | t icons | q quit";

// Demo toast content
pub const DEMO_SUCCESS_TITLE: &str = "Order placed";
pub const DEMO_SUCCESS_MESSAGE: &str = "Your sourdough will be ready at 8am.";
pub const DEMO_ERROR_TITLE: &str = "Oven offline";
pub const DEMO_ERROR_MESSAGE: &str = "The bake could not be scheduled. Try again later.";
pub const DEMO_WARNING_TITLE: &str = "Low on flour";
pub const DEMO_WARNING_MESSAGE: &str = "Only two bags of rye left in stock.";
pub const DEMO_INFO_MESSAGE: &str = "Croissants are fresh out of the oven.";
pub const DEMO_ACTION_LABEL: &str = "View";
