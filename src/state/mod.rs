//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `auth` owns the single process-wide
//! signed-in-user value, `checkout` owns the per-view payment confirmation
//! state machine, and `catalog` holds pure aggregation over fetched data.
//! Signal mutation only happens through the operations these modules
//! expose; views treat the state as read-only.

pub mod auth;
pub mod catalog;
pub mod checkout;
