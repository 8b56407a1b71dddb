//! Type definitions for the picker's UI state.

/// Direction to cycle through scripts in the picker.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CycleDirection {
    Up,
    Down,
}

/// State for the UI viewport.
///
/// Tracks the visible portion of the script list when there are more
/// scripts than can fit on screen.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

impl ViewportState {
    /// Viewport for a terminal of the given size, leaving room for the
    /// header and filter lines.
    #[must_use]
    pub fn for_terminal(width: u16, height: u16) -> Self {
        Self {
            offset: 0,
            height: height.saturating_sub(2),
            width,
        }
    }
}

/// Complete UI state for the picker.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UiState {
    /// Position of the highlighted choice among the filtered choices
    pub selected_index: usize,
    /// Viewport state for scrolling
    pub viewport: ViewportState,
    /// Current filter/search text
    pub filter_text: String,
}

impl UiState {
    /// Fresh state with `filter_text` already typed in.
    #[must_use]
    pub fn seeded(filter_text: &str, viewport: ViewportState) -> Self {
        Self {
            selected_index: 0,
            viewport,
            filter_text: filter_text.to_string(),
        }
    }

    /// Copy of this state with a different filter, selection back at the top.
    #[must_use]
    pub fn with_filter(&self, filter_text: String) -> Self {
        Self {
            selected_index: 0,
            viewport: ViewportState {
                offset: 0,
                ..self.viewport.clone()
            },
            filter_text,
        }
    }
}
