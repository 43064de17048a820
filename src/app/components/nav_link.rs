//! Link primitive used by the sidebar for every navigation entry.
//!
//! The sidebar has no opinion about routing. Hosts pass a render callback
//! (`link`) that receives [`NavLinkProps`] and returns their own link element,
//! e.g. a router `Link`. Without one, [`DefaultLink`] renders a bare anchor.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NavLinkProps {
    /// Target path of the entry
    pub href: String,
    /// Must be invoked on activation so the panel closes
    pub onclick: EventHandler<()>,
    pub children: Element,
}

/// Host-supplied link renderer
pub type LinkRenderer = Callback<NavLinkProps, Element>;

/// Plain `<a href>` fallback
#[component]
pub fn DefaultLink(props: NavLinkProps) -> Element {
    let onclick = props.onclick;

    rsx! {
        a {
            href: "{props.href}",
            onclick: move |_| onclick.call(()),
            {props.children}
        }
    }
}

/// Render `props` through the host renderer, or the bare anchor
pub fn render_nav_link(link: Option<LinkRenderer>, props: NavLinkProps) -> Element {
    match link {
        Some(renderer) => renderer.call(props),
        None => {
            let NavLinkProps { href, onclick, children } = props;
            rsx! {
                DefaultLink { href, onclick, {children} }
            }
        }
    }
}
