//! Drag gesture reducer.
//!
//! Tracks the index where a drag started and turns the drop target into a
//! `(source, dest)` pair for `reorder_entries`. Visual drag state stays in the
//! UI layer.

/// In-flight drag state for one list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragGesture {
    dragged: Option<usize>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the index of the entry being dragged.
    pub fn start(&mut self, index: usize) {
        self.dragged = Some(index);
    }

    /// Index of the entry being dragged, if any.
    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    /// Finishes the drag on `index`.
    ///
    /// Returns `None` when no drag is active or the entry was dropped on
    /// itself. The gesture is reset either way.
    pub fn drop_on(&mut self, index: usize) -> Option<(usize, usize)> {
        let source = self.dragged.take()?;
        if source == index {
            return None;
        }
        Some((source, index))
    }

    /// Abandons the drag without producing a reorder.
    pub fn cancel(&mut self) {
        self.dragged = None;
    }
}
