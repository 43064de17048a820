//! Icon registry
//!
//! Menu tables reference icons by value. Each variant resolves to the SVG
//! primitives of the matching Lucide glyph (24x24 viewbox, stroke-based), so
//! hosts can reuse the same set for their own entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::MenuError;

/// One SVG primitive of an icon glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconShape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32, rx: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Polyline(&'static str),
}

use IconShape::{Circle, Line, Path, Polyline, Rect};

/// Named drawable symbols available to menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuIcon {
    LayoutDashboard,
    GitBranch,
    Users,
    CheckSquare,
    User,
    Settings,
    Shield,
    BarChart3,
    HelpCircle,
    FileText,
    MessageCircle,
    Phone,
    Home,
    ShoppingCart,
    Package,
    DollarSign,
    Calendar,
    Mail,
    Bell,
    Search,
    Filter,
    Download,
    Upload,
    Share2,
    Heart,
    Star,
    Bookmark,
    Archive,
    Trash2,
    Edit,
    Eye,
    Clock,
    TrendingUp,
    Activity,
    Database,
    Server,
    Code,
    Terminal,
    Globe,
    Zap,
    // Sidebar chrome
    Menu,
    X,
    LogOut,
}

impl MenuIcon {
    /// Icons exported for custom menu configurations
    pub const REGISTRY: [MenuIcon; 40] = [
        MenuIcon::LayoutDashboard,
        MenuIcon::GitBranch,
        MenuIcon::Users,
        MenuIcon::CheckSquare,
        MenuIcon::User,
        MenuIcon::Settings,
        MenuIcon::Shield,
        MenuIcon::BarChart3,
        MenuIcon::HelpCircle,
        MenuIcon::FileText,
        MenuIcon::MessageCircle,
        MenuIcon::Phone,
        MenuIcon::Home,
        MenuIcon::ShoppingCart,
        MenuIcon::Package,
        MenuIcon::DollarSign,
        MenuIcon::Calendar,
        MenuIcon::Mail,
        MenuIcon::Bell,
        MenuIcon::Search,
        MenuIcon::Filter,
        MenuIcon::Download,
        MenuIcon::Upload,
        MenuIcon::Share2,
        MenuIcon::Heart,
        MenuIcon::Star,
        MenuIcon::Bookmark,
        MenuIcon::Archive,
        MenuIcon::Trash2,
        MenuIcon::Edit,
        MenuIcon::Eye,
        MenuIcon::Clock,
        MenuIcon::TrendingUp,
        MenuIcon::Activity,
        MenuIcon::Database,
        MenuIcon::Server,
        MenuIcon::Code,
        MenuIcon::Terminal,
        MenuIcon::Globe,
        MenuIcon::Zap,
    ];

    /// Icons drawn by the sidebar itself (trigger, close, sign out)
    pub const CHROME: [MenuIcon; 3] = [MenuIcon::Menu, MenuIcon::X, MenuIcon::LogOut];

    /// Registry name, identical to the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            MenuIcon::LayoutDashboard => "LayoutDashboard",
            MenuIcon::GitBranch => "GitBranch",
            MenuIcon::Users => "Users",
            MenuIcon::CheckSquare => "CheckSquare",
            MenuIcon::User => "User",
            MenuIcon::Settings => "Settings",
            MenuIcon::Shield => "Shield",
            MenuIcon::BarChart3 => "BarChart3",
            MenuIcon::HelpCircle => "HelpCircle",
            MenuIcon::FileText => "FileText",
            MenuIcon::MessageCircle => "MessageCircle",
            MenuIcon::Phone => "Phone",
            MenuIcon::Home => "Home",
            MenuIcon::ShoppingCart => "ShoppingCart",
            MenuIcon::Package => "Package",
            MenuIcon::DollarSign => "DollarSign",
            MenuIcon::Calendar => "Calendar",
            MenuIcon::Mail => "Mail",
            MenuIcon::Bell => "Bell",
            MenuIcon::Search => "Search",
            MenuIcon::Filter => "Filter",
            MenuIcon::Download => "Download",
            MenuIcon::Upload => "Upload",
            MenuIcon::Share2 => "Share2",
            MenuIcon::Heart => "Heart",
            MenuIcon::Star => "Star",
            MenuIcon::Bookmark => "Bookmark",
            MenuIcon::Archive => "Archive",
            MenuIcon::Trash2 => "Trash2",
            MenuIcon::Edit => "Edit",
            MenuIcon::Eye => "Eye",
            MenuIcon::Clock => "Clock",
            MenuIcon::TrendingUp => "TrendingUp",
            MenuIcon::Activity => "Activity",
            MenuIcon::Database => "Database",
            MenuIcon::Server => "Server",
            MenuIcon::Code => "Code",
            MenuIcon::Terminal => "Terminal",
            MenuIcon::Globe => "Globe",
            MenuIcon::Zap => "Zap",
            MenuIcon::Menu => "Menu",
            MenuIcon::X => "X",
            MenuIcon::LogOut => "LogOut",
        }
    }

    /// Look up an icon by registry name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::REGISTRY
            .iter()
            .chain(Self::CHROME.iter())
            .copied()
            .find(|icon| icon.name() == name)
    }

    /// SVG primitives making up the glyph
    pub fn shapes(&self) -> &'static [IconShape] {
        match self {
            MenuIcon::LayoutDashboard => &[
                Rect { x: 3.0, y: 3.0, width: 7.0, height: 9.0, rx: 1.0 },
                Rect { x: 14.0, y: 3.0, width: 7.0, height: 5.0, rx: 1.0 },
                Rect { x: 14.0, y: 12.0, width: 7.0, height: 9.0, rx: 1.0 },
                Rect { x: 3.0, y: 16.0, width: 7.0, height: 5.0, rx: 1.0 },
            ],
            MenuIcon::GitBranch => &[
                Line { x1: 6.0, y1: 3.0, x2: 6.0, y2: 15.0 },
                Circle { cx: 18.0, cy: 6.0, r: 3.0 },
                Circle { cx: 6.0, cy: 18.0, r: 3.0 },
                Path("M18 9a9 9 0 0 1-9 9"),
            ],
            MenuIcon::Users => &[
                Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
                Circle { cx: 9.0, cy: 7.0, r: 4.0 },
                Path("M22 21v-2a4 4 0 0 0-3-3.87"),
                Path("M16 3.13a4 4 0 0 1 0 7.75"),
            ],
            MenuIcon::CheckSquare => &[
                Path("m9 11 3 3L22 4"),
                Path("M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11"),
            ],
            MenuIcon::User => &[
                Path("M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"),
                Circle { cx: 12.0, cy: 7.0, r: 4.0 },
            ],
            MenuIcon::Settings => &[
                Path("M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"),
                Circle { cx: 12.0, cy: 12.0, r: 3.0 },
            ],
            MenuIcon::Shield => &[Path(
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            )],
            MenuIcon::BarChart3 => &[
                Path("M3 3v18h18"),
                Path("M18 17V9"),
                Path("M13 17V5"),
                Path("M8 17v-3"),
            ],
            MenuIcon::HelpCircle => &[
                Circle { cx: 12.0, cy: 12.0, r: 10.0 },
                Path("M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"),
                Path("M12 17h.01"),
            ],
            MenuIcon::FileText => &[
                Path("M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"),
                Path("M14 2v4a2 2 0 0 0 2 2h4"),
                Path("M10 9H8"),
                Path("M16 13H8"),
                Path("M16 17H8"),
            ],
            MenuIcon::MessageCircle => &[Path("M7.9 20A9 9 0 1 0 4 16.1L2 22Z")],
            MenuIcon::Phone => &[Path(
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            )],
            MenuIcon::Home => &[
                Path("m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
                Polyline("9 22 9 12 15 12 15 22"),
            ],
            MenuIcon::ShoppingCart => &[
                Circle { cx: 8.0, cy: 21.0, r: 1.0 },
                Circle { cx: 19.0, cy: 21.0, r: 1.0 },
                Path("M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"),
            ],
            MenuIcon::Package => &[
                Path("m7.5 4.27 9 5.15"),
                Path("M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z"),
                Path("m3.3 7 8.7 5 8.7-5"),
                Path("M12 22V12"),
            ],
            MenuIcon::DollarSign => &[
                Line { x1: 12.0, y1: 2.0, x2: 12.0, y2: 22.0 },
                Path("M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"),
            ],
            MenuIcon::Calendar => &[
                Rect { x: 3.0, y: 4.0, width: 18.0, height: 18.0, rx: 2.0 },
                Line { x1: 16.0, y1: 2.0, x2: 16.0, y2: 6.0 },
                Line { x1: 8.0, y1: 2.0, x2: 8.0, y2: 6.0 },
                Line { x1: 3.0, y1: 10.0, x2: 21.0, y2: 10.0 },
            ],
            MenuIcon::Mail => &[
                Rect { x: 2.0, y: 4.0, width: 20.0, height: 16.0, rx: 2.0 },
                Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            MenuIcon::Bell => &[
                Path("M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"),
                Path("M10.3 21a1.94 1.94 0 0 0 3.4 0"),
            ],
            MenuIcon::Search => &[
                Circle { cx: 11.0, cy: 11.0, r: 8.0 },
                Path("m21 21-4.3-4.3"),
            ],
            MenuIcon::Filter => &[Path("M22 3H2l8 9.46V19l4 2v-8.54L22 3z")],
            MenuIcon::Download => &[
                Path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
                Polyline("7 10 12 15 17 10"),
                Line { x1: 12.0, y1: 15.0, x2: 12.0, y2: 3.0 },
            ],
            MenuIcon::Upload => &[
                Path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
                Polyline("17 8 12 3 7 8"),
                Line { x1: 12.0, y1: 3.0, x2: 12.0, y2: 15.0 },
            ],
            MenuIcon::Share2 => &[
                Circle { cx: 18.0, cy: 5.0, r: 3.0 },
                Circle { cx: 6.0, cy: 12.0, r: 3.0 },
                Circle { cx: 18.0, cy: 19.0, r: 3.0 },
                Line { x1: 8.59, y1: 13.51, x2: 15.42, y2: 17.49 },
                Line { x1: 15.41, y1: 6.51, x2: 8.59, y2: 10.49 },
            ],
            MenuIcon::Heart => &[Path(
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            )],
            MenuIcon::Star => &[Path(
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            )],
            MenuIcon::Bookmark => &[Path("m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z")],
            MenuIcon::Archive => &[
                Rect { x: 2.0, y: 3.0, width: 20.0, height: 5.0, rx: 1.0 },
                Path("M4 8v11a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8"),
                Path("M10 12h4"),
            ],
            MenuIcon::Trash2 => &[
                Path("M3 6h18"),
                Path("M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6"),
                Path("M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"),
                Line { x1: 10.0, y1: 11.0, x2: 10.0, y2: 17.0 },
                Line { x1: 14.0, y1: 11.0, x2: 14.0, y2: 17.0 },
            ],
            MenuIcon::Edit => &[
                Path("M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"),
                Path("M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"),
            ],
            MenuIcon::Eye => &[
                Path("M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"),
                Circle { cx: 12.0, cy: 12.0, r: 3.0 },
            ],
            MenuIcon::Clock => &[
                Circle { cx: 12.0, cy: 12.0, r: 10.0 },
                Polyline("12 6 12 12 16 14"),
            ],
            MenuIcon::TrendingUp => &[
                Polyline("22 7 13.5 15.5 8.5 10.5 2 17"),
                Polyline("16 7 22 7 22 13"),
            ],
            MenuIcon::Activity => &[Path("M22 12h-4l-3 9L9 3l-3 9H2")],
            MenuIcon::Database => &[
                Path("M3 5a9 3 0 1 0 18 0a9 3 0 1 0 -18 0"),
                Path("M3 5V19A9 3 0 0 0 21 19V5"),
                Path("M3 12A9 3 0 0 0 21 12"),
            ],
            MenuIcon::Server => &[
                Rect { x: 2.0, y: 2.0, width: 20.0, height: 8.0, rx: 2.0 },
                Rect { x: 2.0, y: 14.0, width: 20.0, height: 8.0, rx: 2.0 },
                Line { x1: 6.0, y1: 6.0, x2: 6.01, y2: 6.0 },
                Line { x1: 6.0, y1: 18.0, x2: 6.01, y2: 18.0 },
            ],
            MenuIcon::Code => &[
                Polyline("16 18 22 12 16 6"),
                Polyline("8 6 2 12 8 18"),
            ],
            MenuIcon::Terminal => &[
                Polyline("4 17 10 11 4 5"),
                Line { x1: 12.0, y1: 19.0, x2: 20.0, y2: 19.0 },
            ],
            MenuIcon::Globe => &[
                Circle { cx: 12.0, cy: 12.0, r: 10.0 },
                Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
                Path("M2 12h20"),
            ],
            MenuIcon::Zap => &[Path("M13 2 3 14h9l-1 8 10-12h-9l1-8z")],
            MenuIcon::Menu => &[
                Line { x1: 4.0, y1: 12.0, x2: 20.0, y2: 12.0 },
                Line { x1: 4.0, y1: 6.0, x2: 20.0, y2: 6.0 },
                Line { x1: 4.0, y1: 18.0, x2: 20.0, y2: 18.0 },
            ],
            MenuIcon::X => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
            MenuIcon::LogOut => &[
                Path("M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"),
                Polyline("16 17 21 12 16 7"),
                Line { x1: 21.0, y1: 12.0, x2: 9.0, y2: 12.0 },
            ],
        }
    }
}

impl fmt::Display for MenuIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MenuIcon {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| MenuError::UnknownIcon(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_names_are_unique() {
        let names: HashSet<_> = MenuIcon::REGISTRY.iter().map(|icon| icon.name()).collect();
        assert_eq!(names.len(), MenuIcon::REGISTRY.len());
    }

    #[test]
    fn test_from_name_covers_registry_and_chrome() {
        for icon in MenuIcon::REGISTRY.iter().chain(MenuIcon::CHROME.iter()) {
            assert_eq!(MenuIcon::from_name(icon.name()), Some(*icon));
        }
        assert_eq!(MenuIcon::from_name("Sparkles"), None);
    }

    #[test]
    fn test_from_str_unknown_icon() {
        assert_eq!("BarChart3".parse::<MenuIcon>().unwrap(), MenuIcon::BarChart3);
        let err = "layoutdashboard".parse::<MenuIcon>().unwrap_err();
        assert!(matches!(err, MenuError::UnknownIcon(name) if name == "layoutdashboard"));
    }

    #[test]
    fn test_serde_uses_registry_name() {
        let json = serde_json::to_string(&MenuIcon::Share2).unwrap();
        assert_eq!(json, "\"Share2\"");
        let icon: MenuIcon = serde_json::from_str("\"LogOut\"").unwrap();
        assert_eq!(icon, MenuIcon::LogOut);
    }

    #[test]
    fn test_every_icon_has_shapes() {
        for icon in MenuIcon::REGISTRY.iter().chain(MenuIcon::CHROME.iter()) {
            assert!(!icon.shapes().is_empty(), "{} has no shapes", icon);
        }
    }

    #[test]
    fn test_chrome_icons_not_in_registry() {
        for icon in MenuIcon::CHROME {
            assert!(!MenuIcon::REGISTRY.contains(&icon));
        }
    }
}
