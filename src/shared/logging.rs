//! Structured logging for the navigation sidebar
//!
//! Provides consistent, contextual events across the component and the demo
//! app. Uses tracing with structured fields so hosts can filter by operation.

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    MenuToggle,
    Navigation,
    Logout,
    MenuValidation,
    ThemeExport,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::MenuToggle => "menu_toggle",
            LogOperation::Navigation => "navigation",
            LogOperation::Logout => "logout",
            LogOperation::MenuValidation => "menu_validation",
            LogOperation::ThemeExport => "theme_export",
        }
    }
}

/// Log a visibility change of the sidebar panel
pub fn log_menu_toggled(is_open: bool) {
    tracing::debug!(
        operation = LogOperation::MenuToggle.as_str(),
        is_open = is_open,
        "Sidebar visibility changed"
    );
}

/// Log activation of a navigation entry
pub fn log_navigation(item_id: &str, href: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        item_id = item_id,
        href = href,
        "Navigation entry activated"
    );
}

/// Log the sign out action
pub fn log_logout() {
    tracing::info!(
        operation = LogOperation::Logout.as_str(),
        "Sign out requested from sidebar"
    );
}

/// Log a duplicated render key in a host table
pub fn log_key_collision(section: &str, item_id: &str) {
    tracing::warn!(
        operation = LogOperation::MenuValidation.as_str(),
        section = section,
        item_id = item_id,
        "Duplicate menu item id, render keys will collide"
    );
}

/// Log a JSON export from the CLI
pub fn log_export(target: &str, bytes: usize) {
    tracing::info!(
        operation = LogOperation::ThemeExport.as_str(),
        target = target,
        bytes = bytes,
        "Export written to stdout"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::MenuToggle.as_str(), "menu_toggle");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Logout.as_str(), "logout");
        assert_eq!(LogOperation::MenuValidation.as_str(), "menu_validation");
        assert_eq!(LogOperation::ThemeExport.as_str(), "theme_export");
    }
}
