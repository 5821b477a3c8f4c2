//! NPC editing session.
//!
//! `NpcSession` holds the authoritative ordered list of career levels for
//! one NPC and the batch history used for undo. Every query rebuilds the
//! NPC from that list with the aggregation engine.

use tracing::debug;

use npcgen_core::{
    CareerLevel, CareerLookup, CareerRow, LevelId, Npc, NpcSummary, RulesConfig,
    ValidationIssue, build_npc, validate_careers,
};

use crate::error::{SessionError, SessionResult};
use crate::history::{Batch, History};
use crate::request::CareerRequest;

/// An in-progress NPC and its edit history.
pub struct NpcSession {
    lookup: Box<dyn CareerLookup>,
    rules: RulesConfig,
    name: String,
    race: String,
    career_levels: Vec<CareerLevel>,
    history: History,
    next_id: u64,
}

impl NpcSession {
    /// Create an empty session backed by a career data source.
    pub fn new(lookup: impl CareerLookup + 'static, rules: RulesConfig) -> Self {
        Self {
            lookup: Box::new(lookup),
            rules,
            name: String::new(),
            race: String::new(),
            career_levels: Vec::new(),
            history: History::new(),
            next_id: 1,
        }
    }

    /// NPC name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// NPC race.
    pub fn race(&self) -> &str {
        &self.race
    }

    /// Rules used for aggregation.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Career levels in application order.
    pub fn career_levels(&self) -> &[CareerLevel] {
        &self.career_levels
    }

    /// Batch history, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Start a new NPC, discarding all levels and history.
    ///
    /// Fails without touching the session if `name` is blank.
    pub fn start_new_npc(&mut self, name: &str, race: &str) -> SessionResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::Validation("name is required".to_string()));
        }

        self.name = name.to_string();
        self.race = race.trim().to_string();
        self.career_levels.clear();
        self.history.clear();

        debug!(name = %self.name, race = %self.race, "started new NPC");
        Ok(())
    }

    /// Resolve `requests` through the career data and append the resulting
    /// levels as a single undoable batch.
    ///
    /// A request the data source knows nothing about becomes one level with
    /// no bonuses. Returns the added levels in order; an empty request list
    /// adds nothing and records no batch.
    pub fn add_career_batch(&mut self, requests: &[CareerRequest]) -> Vec<CareerLevel> {
        let mut added = Vec::new();
        for request in requests {
            let mut rows = self
                .lookup
                .lookup_career_levels(&request.career, request.level);
            if rows.is_empty() {
                debug!(career = %request.career, level = request.level, "no career data, adding stub level");
                rows.push(CareerRow::new(request.career.clone(), request.level));
            }
            for row in rows {
                let id = self.allocate_id();
                added.push(CareerLevel::new(id, row));
            }
        }

        if added.is_empty() {
            return added;
        }

        self.career_levels.extend(added.iter().cloned());
        self.history
            .push(Batch::new(added.iter().map(CareerLevel::id).collect()));

        debug!(
            levels = added.len(),
            batches = self.history.len(),
            "added career batch"
        );
        added
    }

    /// Parse `"Engineer:2, Smith"` style input and add it as one batch.
    pub fn add_careers_str(&mut self, input: &str) -> Vec<CareerLevel> {
        let requests = CareerRequest::parse_list(input);
        self.add_career_batch(&requests)
    }

    /// Replace the talents of a level with the user's picks.
    ///
    /// Returns the finalized level, or `None` if no level has that id.
    pub fn finalize_talents<I, S>(&mut self, id: LevelId, talents: I) -> Option<&CareerLevel>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slot = self.career_levels.iter_mut().find(|l| l.id() == id)?;
        *slot = slot.clone().with_talents(talents);
        debug!(level = %id, talents = slot.talents().len(), "finalized talents");
        Some(&*slot)
    }

    /// Undo the most recent batch and return the levels it removed.
    ///
    /// Returns an empty list if there is nothing to undo.
    pub fn undo_last_batch(&mut self) -> Vec<CareerLevel> {
        let Some(batch) = self.history.pop() else {
            return Vec::new();
        };

        let start = self.career_levels.len().saturating_sub(batch.len());
        let removed = self.career_levels.split_off(start);
        debug!(levels = removed.len(), "undid last batch");
        removed
    }

    /// Undo the batch at `index` in the history, wherever it is.
    ///
    /// Levels from other batches keep their relative order. Levels of the
    /// batch that are already gone are skipped. Returns an empty list if
    /// `index` is out of range.
    pub fn undo_batch_at(&mut self, index: usize) -> Vec<CareerLevel> {
        let Some(batch) = self.history.remove(index) else {
            return Vec::new();
        };

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.career_levels)
            .into_iter()
            .partition(|level| batch.contains(level.id()));
        self.career_levels = kept;

        debug!(index, levels = removed.len(), "undid batch");
        removed
    }

    /// Current levels belonging to the batch at `index`.
    pub fn batch_levels(&self, index: usize) -> Vec<&CareerLevel> {
        let Some(batch) = self.history.get(index) else {
            return Vec::new();
        };
        self.career_levels
            .iter()
            .filter(|level| batch.contains(level.id()))
            .collect()
    }

    /// Rebuild the NPC from the current career levels.
    pub fn current_npc(&self) -> Npc {
        build_npc(&self.name, &self.race, &self.career_levels, &self.rules)
    }

    /// Display-ready summary of the current NPC.
    pub fn summary(&self) -> NpcSummary {
        NpcSummary::from_npc(&self.current_npc())
    }

    /// Advisory issues with the current career levels.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        validate_careers(&self.career_levels)
    }

    fn allocate_id(&mut self) -> LevelId {
        let id = LevelId(self.next_id);
        self.next_id += 1;
        id
    }
}
