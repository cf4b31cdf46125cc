//! Selection state of a single tab level.
//!
//! Transitions consume the state and return the next one; the component
//! applies them through its own signal, so nothing outside the owning
//! `TabList` can change which tab is selected.

/// What the selection logic needs to know about a tab
pub trait TabEntry {
    fn name(&self) -> &str;

    fn is_default(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderState {
    Selected,
    Unselected,
}

impl HeaderState {
    pub fn css_class(self) -> &'static str {
        match self {
            HeaderState::Selected => "selected",
            HeaderState::Unselected => "unselected",
        }
    }

    pub fn is_selected(self) -> bool {
        self == HeaderState::Selected
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabHeader {
    pub name: String,
    pub state: HeaderState,
}

/// Output of [`TabListState::render`]: the header strip and the tab whose
/// content fills the body.
#[derive(Debug)]
pub struct RenderedTabs<'a, T> {
    pub headers: Vec<TabHeader>,
    pub body: Option<&'a T>,
}

/// How a tab's body is shown. A pane is mounted the first time its tab is
/// selected and stays mounted (hidden) while other tabs are selected, so
/// whatever it renders, nested tab lists included, keeps its state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pane {
    pub mounted: bool,
    pub visible: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabListState {
    selected: Option<String>,
    /// Names whose body has been shown at least once, in first-shown order
    visited: Vec<String>,
}

impl TabListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    fn has_visited(&self, name: &str) -> bool {
        self.visited.iter().any(|v| v == name)
    }

    pub fn pane(&self, name: &str) -> Pane {
        Pane {
            mounted: self.has_visited(name),
            visible: self.selected.as_deref() == Some(name),
        }
    }

    /// Pick the default tab when nothing is selected yet: the first tab
    /// marked default, otherwise the first tab.
    pub fn on_first_display<T: TabEntry>(self, tabs: &[T]) -> Self {
        if self.selected.is_some() {
            return self;
        }
        match default_name(tabs) {
            Some(name) => self.select(name),
            None => self,
        }
    }

    /// Reconcile with a new set of tabs. A missing selection, or one naming
    /// a tab that is gone, falls back to the default rule; a selection that
    /// still exists is kept. Panes of tabs no longer listed are forgotten,
    /// so a tab that comes back mounts only when selected again.
    pub fn on_children_changed<T: TabEntry>(mut self, tabs: &[T]) -> Self {
        self.visited.retain(|v| contains(tabs, v));
        let kept = match self.selected.take() {
            Some(current) if tabs.is_empty() || contains(tabs, &current) => Some(current),
            _ => None,
        };
        match kept.or_else(|| default_name(tabs)) {
            Some(name) => self.select(name),
            None => self,
        }
    }

    /// Select `name` without checking that such a tab exists
    pub fn select(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.has_visited(&name) {
            self.visited.push(name.clone());
        }
        self.selected = Some(name);
        self
    }

    pub fn render<'a, T: TabEntry>(&self, tabs: &'a [T]) -> RenderedTabs<'a, T> {
        let selected = self.selected.as_deref();
        let headers = tabs
            .iter()
            .map(|t| TabHeader {
                name: t.name().to_string(),
                state: if Some(t.name()) == selected {
                    HeaderState::Selected
                } else {
                    HeaderState::Unselected
                },
            })
            .collect();
        let body = tabs.iter().find(|t| self.pane(t.name()).visible);

        RenderedTabs { headers, body }
    }
}

fn contains<T: TabEntry>(tabs: &[T], name: &str) -> bool {
    tabs.iter().any(|t| t.name() == name)
}

fn default_name<T: TabEntry>(tabs: &[T]) -> Option<String> {
    tabs.iter()
        .find(|t| t.is_default())
        .or_else(|| tabs.first())
        .map(|t| t.name().to_string())
}
