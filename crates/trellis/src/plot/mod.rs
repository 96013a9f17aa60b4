//! Plot identity and the backend seam.
//!
//! A [`Plot`] owns everything backend-agnostic: its counter-assigned ID,
//! title, nickname, the table it is fed from, and an optional
//! transformation applied before rendering. Producing actual image bytes
//! is delegated to a [`PlotBackend`], which degrades to "no image
//! available" rather than erroring into the table core.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::table::{HardTable, TempTable};
use crate::transform::TableTransformation;

/// Matches titles that were auto-derived from a table ID.
static DERIVED_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Table \d+$").unwrap());

static PLOT_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_plot_id() -> u64 {
    PLOT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Resets the plot ID counter so that the next constructed plot receives
/// ID 1.
///
/// Destructive, intended for test isolation only. Not safe to call
/// concurrently with plot construction.
pub fn reset_plot_id_counter() {
    PLOT_COUNTER.store(1, Ordering::SeqCst);
}

/// Target image kinds a backend may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    /// Raster image.
    Png,
    /// Vector document.
    Pdf,
    /// Character-art rendering.
    Dumb,
    /// Color character-art rendering.
    Caca,
}

impl ImageFormat {
    /// The file extension conventionally used for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pdf => "pdf",
            Self::Dumb | Self::Caca => "txt",
        }
    }
}

/// A representation of a table as a picture.
pub struct Plot {
    id: u64,
    title: String,
    nickname: String,
    table: HardTable,
    transformation: Option<Box<dyn TableTransformation>>,
}

impl Plot {
    /// Creates a plot fed by `table`.
    ///
    /// When the table's title was auto-derived ("Table N"), the plot
    /// takes "Plot N" as its own default title. The check is a narrow
    /// full-string pattern match: any other title, including ones that
    /// merely contain the pattern, is kept untouched.
    pub fn new(table: &HardTable) -> Self {
        let mut title = table.title();
        if DERIVED_TITLE.is_match(&title) {
            title = title.replacen("Table", "Plot", 1);
        }
        Self {
            id: next_plot_id(),
            title,
            nickname: String::new(),
            table: table.clone(),
            transformation: None,
        }
    }

    /// Applies `transformation` to the table before rendering.
    pub fn with_transformation(mut self, transformation: impl TableTransformation + 'static) -> Self {
        self.transformation = Some(Box::new(transformation));
        self
    }

    /// The plot's process-unique ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The plot's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// A short alias for the plot; empty when unset.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Sets the nickname.
    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    /// The table this plot is fed from.
    pub fn table(&self) -> &HardTable {
        &self.table
    }

    /// The finalized snapshot this plot renders: the table is
    /// materialized, the transformation is applied when present, and the
    /// snapshot's ID is rebased to the plot's.
    pub fn data(&self) -> TempTable {
        let mut data = self.table.materialize();
        if let Some(transformation) = &self.transformation {
            data = transformation.transform(&data);
        }
        data.rebase_id(self.id);
        data
    }

    /// Renders this plot through a backend. `None` means no image is
    /// available.
    pub fn render(&self, backend: &dyn PlotBackend, format: ImageFormat) -> Option<Vec<u8>> {
        backend.render(self, &self.data(), format)
    }
}

impl fmt::Debug for Plot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plot")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("nickname", &self.nickname)
            .field("table", &self.table.id())
            .finish_non_exhaustive()
    }
}

/// Produces image bytes for a finalized snapshot.
///
/// A backend that cannot produce an image (missing external tool,
/// unsupported format) returns `None` rather than erroring into the
/// table core.
pub trait PlotBackend {
    /// Renders `data` for `plot` in the requested format.
    fn render(&self, plot: &Plot, data: &TempTable, format: ImageFormat) -> Option<Vec<u8>>;
}
