use dioxus::prelude::*;

use crate::domain::models::{IconShape, MenuIcon};

/// Inline SVG for a registry icon
#[component]
pub fn Icon(icon: MenuIcon, #[props(default)] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            "data-icon": icon.name(),
            for shape in icon.shapes().iter() {
                {render_shape(shape)}
            }
        }
    }
}

fn render_shape(shape: &IconShape) -> Element {
    match *shape {
        IconShape::Path(d) => rsx! { path { d } },
        IconShape::Circle { cx, cy, r } => rsx! {
            circle { cx: "{cx}", cy: "{cy}", r: "{r}" }
        },
        IconShape::Rect { x, y, width, height, rx } => rsx! {
            rect {
                x: "{x}",
                y: "{y}",
                width: "{width}",
                height: "{height}",
                rx: "{rx}",
            }
        },
        IconShape::Line { x1, y1, x2, y2 } => rsx! {
            line { x1: "{x1}", y1: "{y1}", x2: "{x2}", y2: "{y2}" }
        },
        IconShape::Polyline(points) => rsx! { polyline { points } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(icon: MenuIcon) -> String {
        dioxus_ssr::render_element(rsx! {
            Icon { icon, class: "h-5 w-5" }
        })
    }

    #[test]
    fn test_icon_renders_svg_with_name() {
        let html = render(MenuIcon::Search);
        assert!(html.contains("<svg"));
        assert!(html.contains("data-icon=\"Search\""));
        assert!(html.contains("class=\"h-5 w-5\""));
        assert!(html.contains("<circle"));
        assert!(html.contains("m21 21-4.3-4.3"));
    }

    #[test]
    fn test_rect_and_line_shapes() {
        let html = render(MenuIcon::Calendar);
        assert!(html.contains("<rect"));
        assert!(html.contains("<line"));

        let html = render(MenuIcon::Menu);
        assert_eq!(html.matches("<line").count(), 3);
    }
}
