//! Drag session tracking and the reconciliation policy

pub mod gesture;
pub mod policy;
pub mod session;

pub use self::gesture::{ActivationConstraint, GestureEvent, PointerPosition, PointerTracker};
pub use self::policy::{Reconciliation, plan, reconcile};
pub use self::session::DragSession;
