//! Career data model and stat aggregation engine for NPC generation.
//!
//! An NPC is described by an ordered list of career levels. Each level
//! bumps a set of characteristics and skills by a per-level increment and
//! grants talents. The [`engine`] folds such a list into cumulative totals,
//! [`lookup`] resolves career names into levels, and [`render`] produces
//! the formatted listings used when exporting a finished NPC.

pub mod career;
pub mod config;
pub mod engine;
pub mod error;
pub mod lookup;
pub mod npc;
pub mod render;
pub mod validate;

pub use career::{CareerLevel, CareerRow, LevelId};
pub use config::RulesConfig;
pub use engine::build_npc;
pub use error::{NpcError, NpcResult};
pub use lookup::{CareerLookup, CareerTable};
pub use npc::{Characteristic, Npc};
pub use render::NpcSummary;
pub use validate::{ValidationIssue, validate_careers};
