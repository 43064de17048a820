use dioxus::prelude::*;

use crate::app::components::{ArchetypeSelector, HamburgerMenu, NavLinkProps};
use crate::config::{MenuArchetype, DEFAULT_APP_NAME};
use crate::domain::models::SfsUser;

/// Top bar hosting the sidebar trigger, brand and archetype switch.
/// Entries are rendered through the router `Link` so navigation stays client-side.
#[component]
pub fn Navbar(
    archetype: Signal<MenuArchetype>,
    current_path: String,
    #[props(default)] user: Option<SfsUser>,
    on_logout: EventHandler<()>,
    on_archetype_change: EventHandler<MenuArchetype>,
) -> Element {
    let selected = archetype();

    rsx! {
        nav {
            class: "w-full h-[60px] flex items-center justify-between px-6 bg-brown-900 border-b border-gold-800/30 shadow-gold",
            div { class: "flex items-center gap-3 min-w-0",
                HamburgerMenu {
                    menu_sections: selected.sections().to_vec(),
                    current_path,
                    user,
                    on_logout,
                    app_subtitle: selected.display_name().to_string(),
                    link: move |props: NavLinkProps| {
                        let onclick = props.onclick;
                        rsx! {
                            Link {
                                to: props.href,
                                onclick: move |_| onclick.call(()),
                                {props.children}
                            }
                        }
                    },
                }
                span { class: "text-gold-shine text-lg font-extrabold truncate", "{DEFAULT_APP_NAME}" }
            }
            ArchetypeSelector { selected: archetype, on_change: on_archetype_change }
        }
    }
}
