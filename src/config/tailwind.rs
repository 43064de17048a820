//! Tailwind theme extension consumed by the host styling pipeline.
//!
//! The sidebar's class names (`bg-brown-900`, `text-gold-300`, ...) only
//! resolve when the host merges this object into `theme.extend`.

use serde_json::{json, Value};

pub const TAILWIND_PLUGINS: [&str; 2] = ["tailwindcss-animate", "@tailwindcss/typography"];

fn shadcn_pair(name: &str) -> Value {
    json!({
        "DEFAULT": format!("var(--{name})"),
        "foreground": format!("var(--{name}-foreground)"),
    })
}

/// The `theme.extend` object
pub fn tailwind_theme_extension() -> Value {
    json!({
        "borderRadius": {
            "lg": "var(--radius)",
            "md": "calc(var(--radius) - 2px)",
            "sm": "calc(var(--radius) - 4px)",
        },
        "colors": {
            "brown": { "900": "#4B2E2E" },
            "black": { "900": "#0A0A0A" },
            "gold": {
                "100": "#FFF7CC",
                "300": "#FFE58A",
                "500": "#FFD700",
                "600": "#E6C200",
                "700": "#B58E00",
                "800": "#7A5A00",
            },
            "background": "var(--background)",
            "foreground": "var(--foreground)",
            "card": shadcn_pair("card"),
            "popover": shadcn_pair("popover"),
            "primary": shadcn_pair("primary"),
            "secondary": shadcn_pair("secondary"),
            "muted": shadcn_pair("muted"),
            "accent": shadcn_pair("accent"),
            "destructive": shadcn_pair("destructive"),
            "border": "var(--border)",
            "input": "var(--input)",
            "ring": "var(--ring)",
            "chart": {
                "1": "var(--chart-1)",
                "2": "var(--chart-2)",
                "3": "var(--chart-3)",
                "4": "var(--chart-4)",
                "5": "var(--chart-5)",
            },
            "sidebar": {
                "DEFAULT": "var(--sidebar-background)",
                "foreground": "var(--sidebar-foreground)",
                "primary": "var(--sidebar-primary)",
                "primary-foreground": "var(--sidebar-primary-foreground)",
                "accent": "var(--sidebar-accent)",
                "accent-foreground": "var(--sidebar-accent-foreground)",
                "border": "var(--sidebar-border)",
                "ring": "var(--sidebar-ring)",
            },
        },
        "boxShadow": {
            "gold": "0 0 18px 0 rgba(255,215,0,.35)",
        },
        "backgroundImage": {
            "gold-gradient": "linear-gradient(90deg,#7a5a00 0%,#b58e00 16%,#ffd700 33%,#fff1a6 45%,#e6c200 55%,#b58e00 72%,#7a5a00 100%)",
        },
        "fontFamily": {
            "sans": ["var(--font-sans)"],
            "serif": ["var(--font-serif)"],
            "mono": ["var(--font-mono)"],
        },
        "keyframes": {
            "accordion-down": {
                "from": { "height": "0" },
                "to": { "height": "var(--radix-accordion-content-height)" },
            },
            "accordion-up": {
                "from": { "height": "var(--radix-accordion-content-height)" },
                "to": { "height": "0" },
            },
            "gold-pan": {
                "0%": { "backgroundPosition": "0% 0%" },
                "100%": { "backgroundPosition": "200% 0%" },
            },
            "loading": {
                "0%": { "backgroundPosition": "200% 0" },
                "100%": { "backgroundPosition": "-200% 0" },
            },
        },
        "animation": {
            "accordion-down": "accordion-down 0.2s ease-out",
            "accordion-up": "accordion-up 0.2s ease-out",
            "gold-pan": "gold-pan 3.2s linear infinite",
            "loading": "loading 1.5s infinite",
        },
    })
}

/// Complete preset: class-based dark mode, the extension, plugin names
pub fn tailwind_config() -> Value {
    json!({
        "darkMode": ["class"],
        "theme": { "extend": tailwind_theme_extension() },
        "plugins": TAILWIND_PLUGINS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tokens::SFS_COLORS;

    #[test]
    fn test_gold_scale_matches_tokens() {
        let theme = tailwind_theme_extension();
        assert_eq!(theme["colors"]["gold"]["500"], SFS_COLORS.gold);
        assert_eq!(theme["colors"]["gold"]["600"], SFS_COLORS.gold2);
        assert_eq!(theme["colors"]["brown"]["900"], "#4B2E2E");
    }

    #[test]
    fn test_shadcn_pairs() {
        let theme = tailwind_theme_extension();
        for name in ["card", "popover", "primary", "secondary", "muted", "accent", "destructive"] {
            assert_eq!(theme["colors"][name]["DEFAULT"], format!("var(--{name})"));
            assert_eq!(
                theme["colors"][name]["foreground"],
                format!("var(--{name}-foreground)")
            );
        }
    }

    #[test]
    fn test_every_animation_has_keyframes() {
        let theme = tailwind_theme_extension();
        let animations = theme["animation"].as_object().unwrap();
        let keyframes = theme["keyframes"].as_object().unwrap();
        assert_eq!(animations.len(), 4);
        for (name, value) in animations {
            assert!(keyframes.contains_key(name), "missing keyframes for {name}");
            assert!(value.as_str().unwrap().starts_with(name.as_str()));
        }
    }

    #[test]
    fn test_config_wraps_extension() {
        let config = tailwind_config();
        assert_eq!(config["darkMode"], json!(["class"]));
        assert_eq!(config["theme"]["extend"], tailwind_theme_extension());
        assert_eq!(
            config["plugins"],
            json!(["tailwindcss-animate", "@tailwindcss/typography"])
        );
    }
}
