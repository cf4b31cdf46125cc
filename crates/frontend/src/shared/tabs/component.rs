//! Nestable tab container.
//!
//! A `Tab`'s content may itself render a `TabList`; nesting needs nothing
//! beyond composition. Each `TabList` keeps its own selection.

use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

use super::state::{TabEntry, TabHeader, TabListState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    fn modifier(self) -> &'static str {
        match self {
            Orientation::Horizontal => "tabs--horizontal",
            Orientation::Vertical => "tabs--vertical",
        }
    }
}

/// A named content slot. Rebuilt from data on every render; only `name`
/// links it to the container's selection.
#[derive(Clone)]
pub struct Tab {
    pub name: String,
    pub default: bool,
    pub content: ViewFn,
}

impl Tab {
    pub fn new<F, V>(name: impl Into<String>, content: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        Self {
            name: name.into(),
            default: false,
            content: ViewFn::from(content),
        }
    }

    /// Mark as the tab selected on first display
    pub fn selected_by_default(mut self) -> Self {
        self.default = true;
        self
    }
}

impl TabEntry for Tab {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_default(&self) -> bool {
        self.default
    }
}

#[component]
pub fn TabList(
    #[prop(into)] tabs: Signal<Vec<Tab>>,
    #[prop(optional)] orientation: Orientation,
) -> impl IntoView {
    let state = RwSignal::new(tabs.with_untracked(|t| TabListState::new().on_first_display(t)));

    Effect::new(move |_| {
        tabs.with(|t| {
            let current = state.get_untracked();
            let next = current.clone().on_children_changed(t);
            if next != current {
                state.set(next);
            }
        });
    });

    let headers = Memo::new(move |_| tabs.with(|t| state.with(|s| s.render(t).headers)));
    let select = move |name: String| state.update(|s| *s = std::mem::take(s).select(name));

    view! {
        <div class=format!("tabs {}", orientation.modifier())>
            <div class="tabs__header">
                <For
                    each=move || headers.get()
                    key=|h| (h.name.clone(), h.state)
                    children=move |header: TabHeader| {
                        let TabHeader { name, state: header_state } = header;
                        let label = name.clone();
                        view! {
                            <span class=format!("tabs__item {}", header_state.css_class())>
                                <Button
                                    appearance=if header_state.is_selected() {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                    size=ButtonSize::Small
                                    on_click=move |_| select(name.clone())
                                >
                                    {label}
                                </Button>
                            </span>
                        }
                    }
                />
            </div>

            <div class="tabs__body">
                <For
                    each=move || tabs.get()
                    key=|tab| tab.name.clone()
                    children=move |tab: Tab| {
                        let pane = {
                            let name = tab.name.clone();
                            Memo::new(move |_| state.with(|s| s.pane(&name)))
                        };
                        // separate memo: toggling visibility must not re-run the content
                        let mounted = Memo::new(move |_| pane.get().mounted);
                        let content = tab.content;
                        view! {
                            <div
                                class="tabs__pane"
                                style=move || if pane.get().visible { "" } else { "display: none;" }
                            >
                                {move || mounted.get().then(|| content.run())}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
