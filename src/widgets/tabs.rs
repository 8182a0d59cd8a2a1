/// Tab group state (rendering-agnostic)
///
/// Tracks the active tab button and the content pane it activated. No tab
/// is active until the first activation; afterwards exactly one button is
/// active at a time. A button whose declared target matches no pane
/// activates the button highlight but no pane.
#[derive(Debug, Clone, Default)]
pub struct TabsState {
    active_button: Option<usize>,
    active_pane: Option<String>,
}

impl TabsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a tab button, resolving its declared `target` against the
    /// available pane keys
    ///
    /// Deactivates everything first, then activates the button and the one
    /// pane whose key equals `target`. Returns true if a pane matched;
    /// false leaves no pane active (the caller may warn).
    pub fn activate(&mut self, button: usize, target: &str, pane_keys: &[String]) -> bool {
        self.active_button = Some(button);
        self.active_pane = pane_keys.iter().find(|key| key.as_str() == target).cloned();
        self.active_pane.is_some()
    }

    /// Key of the active content pane, if the last activation matched one
    pub fn active_pane(&self) -> Option<&str> {
        self.active_pane.as_deref()
    }

    pub fn is_button_active(&self, index: usize) -> bool {
        self.active_button == Some(index)
    }

    /// Button index a forward keyboard cycle should activate next
    pub fn next_index(&self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        Some(match self.active_button {
            Some(i) => (i + 1) % count,
            None => 0,
        })
    }

    /// Button index a backward keyboard cycle should activate next
    pub fn prev_index(&self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        Some(match self.active_button {
            Some(i) => (i + count - 1) % count,
            None => 0,
        })
    }
}
