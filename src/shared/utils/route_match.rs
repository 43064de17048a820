//! Active-route matching for sidebar entries.

/// Canonical landing route; highlighted when the app root is shown.
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ROOT_PATH: &str = "/";

/// Whether the entry pointing at `href` is active for `current_path`.
///
/// Rules, first match wins:
/// 1. `/dashboard` is active on `/` and `/dashboard`
/// 2. `/` is active only on `/`
/// 3. exact match
/// 4. `current_path` is nested below `href` (segment boundary required)
pub fn is_active(current_path: &str, href: &str) -> bool {
    if href == DASHBOARD_PATH && (current_path == ROOT_PATH || current_path == DASHBOARD_PATH) {
        return true;
    }
    if href == ROOT_PATH && current_path == ROOT_PATH {
        return true;
    }
    if current_path == href {
        return true;
    }

    // "/leads/123" is under "/leads", "/leadsbackup" is not
    current_path
        .strip_prefix(href)
        .is_some_and(|rest| rest.starts_with('/'))
}
