//! Archetype Selector Component
//!
//! Dropdown for switching which predefined menu table the demo app shows.

use dioxus::prelude::*;

use crate::config::MenuArchetype;

/// Menu archetype dropdown
#[component]
pub fn ArchetypeSelector(
    /// Currently selected archetype
    selected: Signal<MenuArchetype>,
    /// Callback when selection changes
    on_change: EventHandler<MenuArchetype>,
    #[props(default = false)]
    disabled: bool,
) -> Element {
    let current = selected();

    rsx! {
        select {
            class: "bg-brown-900 text-gold-300 border border-gold-800/30 rounded-md px-3 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-gold-500",
            aria_label: "Application type",
            disabled: disabled,
            value: "{current.slug()}",
            onchange: move |evt| {
                if let Some(archetype) = MenuArchetype::from_slug(&evt.value()) {
                    on_change.call(archetype);
                }
            },
            for archetype in MenuArchetype::ALL {
                option {
                    key: "{archetype.slug()}",
                    value: "{archetype.slug()}",
                    selected: archetype == current,
                    "{archetype.display_name()}"
                }
            }
        }
    }
}
