//! SFS design tokens
//!
//! Dark black/brown base with metallic gold accents. The same values back the
//! CSS variables in `assets/css/tokens.css`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SfsColors {
    pub black: &'static str,
    pub brown: &'static str,
    pub gold: &'static str,
    pub gold2: &'static str,
    pub beige: &'static str,
    pub white: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SfsGradients {
    pub gold: &'static str,
    pub gold_horizontal: &'static str,
}

pub const SFS_COLORS: SfsColors = SfsColors {
    black: "#0D0D0D",
    brown: "#3B2F2F",
    gold: "#FFD700",
    gold2: "#E6C200",
    beige: "#F5F5DC",
    white: "#FFFFFF",
};

pub const SFS_GRADIENTS: SfsGradients = SfsGradients {
    gold: "linear-gradient(135deg, #FFD700, #E6C200)",
    gold_horizontal: "linear-gradient(90deg, #FFD700 0%, #E6C200 100%)",
};

/// Stylesheet entry points shipped with the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssImports {
    pub theme: &'static str,
    pub tailwind_preset: &'static str,
}

pub const CSS_IMPORTS: CssImports = CssImports {
    theme: "assets/dist/sfs-complete-theme.css",
    tailwind_preset: "tailwind.smartflow.preset.json",
};

pub const INSTALL_INSTRUCTIONS: &str = r#"
SmartFlow Design System Installation:

1. Link the bundled theme in your root layout:
   document::Link { rel: "stylesheet", href: asset!("/assets/dist/sfs-complete-theme.css") }

2. Export the Tailwind preset and reference it from tailwind.config.js:
   sfs-export tailwind --pretty > tailwind.smartflow.preset.json
   module.exports = { presets: [require('./tailwind.smartflow.preset.json')] }

3. Render the sidebar:
   HamburgerMenu { menu_sections: crm_menu_sections().to_vec(), current_path: route.to_string() }

4. Use design system classes:
   - Cards: .glass-card, .sfs-glass-card, .sfs-flow-card
   - Buttons: .btn-gold, .btn-ghost
   - Typography: .text-gold-gradient, .text-gold
   - Badges: .badge
"#;

/// Colors and gradients as one JSON document
pub fn tokens_json() -> serde_json::Value {
    serde_json::json!({
        "colors": SFS_COLORS,
        "gradients": SFS_GRADIENTS,
        "cssImports": CSS_IMPORTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradients_built_from_gold_tokens() {
        assert!(SFS_GRADIENTS.gold.contains(SFS_COLORS.gold));
        assert!(SFS_GRADIENTS.gold.contains(SFS_COLORS.gold2));
        assert!(SFS_GRADIENTS.gold_horizontal.starts_with("linear-gradient(90deg"));
    }

    #[test]
    fn test_tokens_json_shape() {
        let json = tokens_json();
        assert_eq!(json["colors"]["gold"], "#FFD700");
        assert_eq!(json["colors"]["gold2"], "#E6C200");
        assert_eq!(
            json["gradients"]["goldHorizontal"],
            "linear-gradient(90deg, #FFD700 0%, #E6C200 100%)"
        );
        assert_eq!(json["cssImports"]["tailwindPreset"], CSS_IMPORTS.tailwind_preset);
    }
}
