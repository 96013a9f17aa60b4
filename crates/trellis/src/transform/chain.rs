//! Sequential composition of transformations.

use std::fmt;

use crate::table::TempTable;

use super::TableTransformation;

/// Applies a sequence of transformations left to right.
///
/// `Chain` over `[A, B]` is cell-for-cell equivalent to applying A and
/// then B, provenance included.
#[derive(Default)]
pub struct Chain {
    stages: Vec<Box<dyn TableTransformation>>,
}

impl Chain {
    /// An empty chain; transforming with it returns a copy of the input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage.
    pub fn then(mut self, stage: impl TableTransformation + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True when no stage was added.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("stages", &self.stages.len())
            .finish()
    }
}

impl TableTransformation for Chain {
    fn transform(&self, input: &TempTable) -> TempTable {
        let mut current = input.clone();
        for stage in &self.stages {
            current = stage.transform(&current);
        }
        current
    }
}
