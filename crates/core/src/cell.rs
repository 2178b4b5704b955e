#![forbid(unsafe_code)]

use crate::error::TopologyError;
use crate::ids::LineId;
use crate::line::Line;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Single-writer home for one line. Readers take immutable snapshots; a
/// writer works on a private copy that replaces the shared one only when the
/// mutation succeeds.
#[derive(Debug)]
pub struct LineCell {
    current: RwLock<Arc<Line>>,
}

impl LineCell {
    pub fn new(line: Line) -> Self {
        Self {
            current: RwLock::new(Arc::new(line)),
        }
    }

    pub fn id(&self) -> LineId {
        self.snapshot().id()
    }

    pub fn snapshot(&self) -> Arc<Line> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Runs `mutation` against a copy of the line while holding the write
    /// lock. On error the published line is left untouched.
    pub fn mutate<T>(
        &self,
        mutation: impl FnOnce(&mut Line) -> Result<T, TopologyError>,
    ) -> Result<(T, Arc<Line>), TopologyError> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut draft = Line::clone(&guard);
        let value = mutation(&mut draft)?;
        let published = Arc::new(draft);
        *guard = Arc::clone(&published);
        Ok((value, published))
    }
}

/// Independent cells per line; holding one line's write lock never blocks
/// another line.
#[derive(Debug, Default)]
pub struct LineRegistry {
    cells: Mutex<HashMap<LineId, Arc<LineCell>>>,
}

impl LineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `line`, replacing any cell previously held for its id.
    pub fn register(&self, line: Line) -> Arc<LineCell> {
        let cell = Arc::new(LineCell::new(line));
        let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        cells.insert(cell.id(), Arc::clone(&cell));
        cell
    }

    pub fn get(&self, id: LineId) -> Option<Arc<LineCell>> {
        let cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        cells.get(&id).cloned()
    }

    pub fn remove(&self, id: LineId) -> Option<Arc<LineCell>> {
        let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        cells.remove(&id)
    }

    pub fn len(&self) -> usize {
        let cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
