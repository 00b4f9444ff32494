//! Application state (Model in TEA pattern)

use gelato_core::Flavor;

/// Grid column count, shared by rendering and vertical navigation
pub const GRID_COLUMNS: usize = 3;

/// Screen lifecycle phase
///
/// Single-shot: `Loading` is entered once, on activation, and neither
/// terminal phase ever transitions back to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuPhase {
    /// Initial, before activation
    #[default]
    Idle,

    /// Load task in flight; loading indicator visible
    Loading,

    /// Load finished; menu installed (possibly empty)
    Populated,

    /// Load failed; menu empty, failure noted in the footer
    Failed,
}

/// Complete application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current screen phase
    pub phase: MenuPhase,

    /// Validated menu, replaced wholesale when a load completes
    pub flavors: Vec<Flavor>,

    /// Active grid selection; `None` before population or when empty
    pub selected: Option<usize>,

    /// Flavor currently shown in the detail pane
    pub detail: Option<Flavor>,

    /// Failure reason shown in the menu area while `Failed`
    pub load_error: Option<String>,

    /// Frame counter for the loading gauge animation
    pub animation_frame: u64,

    /// Set when the user asked to quit
    should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the event loop should exit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Ask the event loop to exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // ─────────────────────────────────────────────────────────
    // Loading indicator
    // ─────────────────────────────────────────────────────────

    /// Advance the loading animation (call on each tick)
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Indeterminate progress ratio (0.0 to 1.0), bouncing left-right-left
    pub fn indeterminate_ratio(&self) -> f64 {
        let cycle_length = 300;
        let position = self.animation_frame % cycle_length;

        let half = cycle_length / 2;
        if position < half {
            position as f64 / half as f64
        } else {
            (cycle_length - position) as f64 / half as f64
        }
    }

    /// Whether the loading indicator is visible
    pub fn is_loading(&self) -> bool {
        self.phase == MenuPhase::Loading
    }

    // ─────────────────────────────────────────────────────────
    // Menu lifecycle
    // ─────────────────────────────────────────────────────────

    /// Enter `Loading`: clear any stale content, show the indicator
    pub fn begin_loading(&mut self) {
        self.phase = MenuPhase::Loading;
        self.flavors.clear();
        self.selected = None;
        self.detail = None;
        self.load_error = None;
        self.animation_frame = 0;
    }

    /// Install a loaded menu, discarding any stale selection
    ///
    /// Returns the auto-selected index (always 0) when the new list is
    /// non-empty; the caller emits the selection-changed message for it.
    pub fn set_flavors(&mut self, flavors: Vec<Flavor>) -> Option<usize> {
        self.flavors = flavors;
        self.phase = MenuPhase::Populated;
        self.load_error = None;
        self.detail = None;
        self.selected = if self.flavors.is_empty() { None } else { Some(0) };
        self.selected
    }

    /// Record a failed load; the menu stays empty
    pub fn set_load_error(&mut self, error: impl Into<String>) {
        self.phase = MenuPhase::Failed;
        self.flavors.clear();
        self.selected = None;
        self.detail = None;
        self.load_error = Some(error.into());
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    /// Move the selection and refresh the detail pane
    ///
    /// Out-of-range indices are ignored; the selection is always either
    /// `None` or a valid index into the current menu.
    pub fn select(&mut self, index: usize) {
        if let Some(flavor) = self.flavors.get(index) {
            self.selected = Some(index);
            self.detail = Some(flavor.clone());
        }
    }

    /// Currently selected flavor, if any
    pub fn selected_flavor(&self) -> Option<&Flavor> {
        self.selected.and_then(|i| self.flavors.get(i))
    }

    /// Index right of the selection, wrapping past the end
    pub fn next_index(&self) -> Option<usize> {
        let current = self.selected?;
        if self.flavors.is_empty() {
            return None;
        }
        Some((current + 1) % self.flavors.len())
    }

    /// Index left of the selection, wrapping past the start
    pub fn previous_index(&self) -> Option<usize> {
        let current = self.selected?;
        let len = self.flavors.len();
        if len == 0 {
            return None;
        }
        Some((current + len - 1) % len)
    }

    /// Index one grid row up, if that cell exists
    pub fn index_above(&self) -> Option<usize> {
        self.selected?.checked_sub(GRID_COLUMNS)
    }

    /// Index one grid row down, if that cell exists
    pub fn index_below(&self) -> Option<usize> {
        let below = self.selected? + GRID_COLUMNS;
        (below < self.flavors.len()).then_some(below)
    }

    /// First index, if the menu is non-empty
    pub fn first_index(&self) -> Option<usize> {
        (!self.flavors.is_empty()).then_some(0)
    }

    /// Last index, if the menu is non-empty
    pub fn last_index(&self) -> Option<usize> {
        self.flavors.len().checked_sub(1)
    }
}
