use dioxus::prelude::*;

use crate::app::layouts::Navbar;
use crate::config::{MenuArchetype, INSTALL_INSTRUCTIONS, SFS_COLORS};
use crate::domain::models::{menu_items, MenuItem, SfsUser};

fn demo_user() -> SfsUser {
    SfsUser::new("Demo User").with_email("demo@smartflow.systems")
}

/// Entry of the archetype table whose href is exactly `path`
fn find_entry(archetype: MenuArchetype, path: &str) -> Option<&'static MenuItem> {
    menu_items(archetype.sections()).find(|item| item.href == path)
}

/// Glass panel from the theme stylesheet; `featured` adds the flowing border
#[component]
fn Panel(title: String, #[props(default)] featured: bool, children: Element) -> Element {
    let surface = if featured { "sfs-flow-card" } else { "glass-card" };

    rsx! {
        section { class: "{surface} p-6 mb-6",
            h3 { class: "text-gold-gradient text-xl font-bold mb-3", "{title}" }
            div { class: "text-gold-100", {children} }
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    // Every menu href lands here
    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("SFS navigation demo initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const THEME_CSS: Asset = asset!("/assets/dist/sfs-complete-theme.css");

    let mut archetype = use_signal(|| MenuArchetype::Crm);
    let mut user = use_signal(|| Some(demo_user()));
    use_context_provider(|| archetype);
    use_context_provider(|| user);

    let current_path = use_route::<Route>().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        div { class: "min-h-screen bg-black-900 text-gold-100 font-sans",
            Navbar {
                archetype,
                current_path,
                user: user(),
                on_logout: move |_| {
                    tracing::info!("Demo user signed out");
                    user.set(None);
                },
                on_archetype_change: move |next: MenuArchetype| archetype.set(next),
            }
            main { class: "p-6 max-w-4xl mx-auto",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    let archetype = use_context::<Signal<MenuArchetype>>();
    let mut user = use_context::<Signal<Option<SfsUser>>>();

    rsx! {
        Panel { title: format!("{} workspace", archetype().display_name()), featured: true,
            p { class: "mb-4",
                "Open the menu to browse the {archetype().display_name()} navigation table."
            }
            div { class: "flex gap-3",
                for (name, hex) in [("gold", SFS_COLORS.gold), ("gold2", SFS_COLORS.gold2), ("brown", SFS_COLORS.brown)] {
                    span { key: "{name}", class: "badge", style: "border-color: {hex}", "{name} {hex}" }
                }
            }
            if user().is_none() {
                div { class: "mt-6",
                    button {
                        class: "btn-gold",
                        onclick: move |_| user.set(Some(demo_user())),
                        "Sign back in"
                    }
                }
            }
        }
        Panel { title: "Installation",
            pre { class: "text-xs whitespace-pre-wrap", "{INSTALL_INSTRUCTIONS}" }
        }
    }
}

#[component]
fn Page(segments: Vec<String>) -> Element {
    let archetype = use_context::<Signal<MenuArchetype>>();
    let path = format!("/{}", segments.join("/"));

    match find_entry(archetype(), &path) {
        Some(item) => rsx! {
            Panel { title: item.label.clone(),
                p { "You are on {item.href}." }
            }
        },
        None => rsx! {
            Panel { title: "Not in this menu",
                p { class: "mb-4", "{path} is not part of the {archetype().display_name()} table." }
                Link { class: "btn-ghost", to: Route::Home {}, "Back home" }
            }
        },
    }
}
