//! The caller-owned fragmentation token.

use anyhow::{Result as AnyResult, bail};

use crate::chapter9::LogicalLayout;

/// Progress of a paginated layout.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FragmentPhase {
    #[default]
    NotStarted,
    InProgress,
    Complete,
}

/// Opaque state threaded between fragment requests for one container.
///
/// Start with [`FragmentState::new`] and feed each returned state into the next
/// request. The natural layout is computed on the first request and kept here,
/// so every fragment slices the same geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentState {
    pub(crate) phase: FragmentPhase,
    pub(crate) session: Option<Box<Session>>,
    pub(crate) consumed: f32,
    pub(crate) fragments: usize,
}

impl FragmentState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub const fn phase(&self) -> FragmentPhase {
        self.phase
    }

    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self.phase, FragmentPhase::Complete)
    }

    /// Block extent consumed by all fragments so far.
    #[inline]
    pub const fn consumed_total(&self) -> f32 {
        self.consumed
    }

    /// Number of fragments produced so far.
    #[inline]
    pub const fn fragment_count(&self) -> usize {
        self.fragments
    }

    pub(crate) fn session_mut(&mut self, item_count: usize) -> AnyResult<&mut Session> {
        let Some(session) = self.session.as_deref_mut() else {
            bail!("fragment state has no layout session");
        };
        if session.item_count != item_count {
            bail!(
                "fragment state belongs to a container with {} items, got {item_count}",
                session.item_count
            );
        }
        Ok(session)
    }
}

/// Natural layout plus the walk position inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub layout: LogicalLayout,
    pub item_count: usize,
    /// Next line to place (row containers).
    pub next_line: usize,
    /// One cursor per line (column containers).
    pub cursors: Vec<LineCursor>,
}

impl Session {
    pub fn new(layout: LogicalLayout, item_count: usize) -> Self {
        let cursors = vec![LineCursor::default(); layout.lines.len()];
        Self {
            layout,
            item_count,
            next_line: 0,
            cursors,
        }
    }
}

/// Position within one line of a column container.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineCursor {
    pub next_item: usize,
    /// Main-axis distance from the natural layout's main-start to the current
    /// fragment's start, for this line.
    pub shift: f32,
    pub partial: Option<PartialItem>,
}

/// A nested flex container split across fragments.
#[derive(Clone, Debug, PartialEq)]
pub struct PartialItem {
    pub nested: FragmentState,
    /// Content extent already placed in earlier fragments.
    pub done: f32,
}
