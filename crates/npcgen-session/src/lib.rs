//! Incremental NPC editing session with batched undo history.
//!
//! A [`NpcSession`] owns the ordered list of career levels for the NPC
//! being built. Levels are added in batches (one user action each) and
//! batches can be undone either from the end or at an arbitrary position.
//! The NPC itself is always recomputed from the current list.

pub mod error;
pub mod history;
pub mod request;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use history::{Batch, History};
pub use request::CareerRequest;
pub use session::NpcSession;
