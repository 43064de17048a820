//! Opt-in checks for host-supplied menu tables.
//!
//! The sidebar never rejects a table; these helpers exist for hosts that load
//! tables at runtime and for the render-time key-collision warning.

use std::collections::HashSet;

use crate::domain::models::MenuSection;
use crate::shared::errors::{MenuError, Result};

/// Check a table, reporting the first violation found in render order
pub fn validate_menu(sections: &[MenuSection]) -> Result<()> {
    let mut titles = HashSet::new();

    for section in sections {
        if !titles.insert(section.title.as_str()) {
            return Err(MenuError::DuplicateSectionTitle(section.title.clone()));
        }

        let mut ids = HashSet::new();
        for item in &section.items {
            if item.href.is_empty() {
                return Err(MenuError::EmptyHref {
                    section: section.title.clone(),
                    item_id: item.id.clone(),
                });
            }
            if !ids.insert(item.id.as_str()) {
                return Err(MenuError::DuplicateItemId {
                    section: section.title.clone(),
                    item_id: item.id.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Every (section title, item id) pair whose id repeats inside its section
pub fn find_key_collisions(sections: &[MenuSection]) -> Vec<(String, String)> {
    let mut collisions = Vec::new();

    for section in sections {
        let mut seen = HashSet::new();
        for item in &section.items {
            if !seen.insert(item.id.as_str()) {
                collisions.push((section.title.clone(), item.id.clone()));
            }
        }
    }

    collisions
}

/// Deserialize a custom table from JSON and validate it
pub fn parse_menu_json(json: &str) -> Result<Vec<MenuSection>> {
    let sections: Vec<MenuSection> = serde_json::from_str(json)?;
    validate_menu(&sections)?;
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{MenuIcon, MenuItem};

    fn section(title: &str, items: &[(&str, &str)]) -> MenuSection {
        MenuSection::new(
            title,
            items
                .iter()
                .map(|(id, href)| MenuItem::new(*id, *id, *href, MenuIcon::Home))
                .collect(),
        )
    }

    #[test]
    fn test_valid_table() {
        let sections = vec![
            section("Main", &[("home", "/"), ("dashboard", "/dashboard")]),
            section("Help", &[("help", "/help")]),
        ];
        assert!(validate_menu(&sections).is_ok());
    }

    #[test]
    fn test_empty_table_is_valid() {
        assert!(validate_menu(&[]).is_ok());
        assert!(find_key_collisions(&[]).is_empty());
    }

    #[test]
    fn test_same_id_in_different_sections_is_allowed() {
        let sections = vec![
            section("Main", &[("users", "/users")]),
            section("Admin", &[("users", "/admin/users")]),
        ];
        assert!(validate_menu(&sections).is_ok());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let sections = vec![section("Main", &[("leads", "/leads"), ("leads", "/leads/new")])];
        let err = validate_menu(&sections).unwrap_err();
        assert!(matches!(
            err,
            MenuError::DuplicateItemId { ref section, ref item_id } if section == "Main" && item_id == "leads"
        ));
    }

    #[test]
    fn test_empty_href_rejected() {
        let sections = vec![section("Main", &[("broken", "")])];
        assert!(matches!(
            validate_menu(&sections),
            Err(MenuError::EmptyHref { .. })
        ));
    }

    #[test]
    fn test_duplicate_section_title_rejected() {
        let sections = vec![
            section("Main", &[("a", "/a")]),
            section("Main", &[("b", "/b")]),
        ];
        assert!(matches!(
            validate_menu(&sections),
            Err(MenuError::DuplicateSectionTitle(title)) if title == "Main"
        ));
    }

    #[test]
    fn test_find_key_collisions_reports_all() {
        let sections = vec![
            section("Main", &[("a", "/a"), ("a", "/a2"), ("b", "/b"), ("a", "/a3")]),
            section("Other", &[("c", "/c"), ("c", "/c2")]),
        ];
        let collisions = find_key_collisions(&sections);
        assert_eq!(
            collisions,
            vec![
                ("Main".to_string(), "a".to_string()),
                ("Main".to_string(), "a".to_string()),
                ("Other".to_string(), "c".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_menu_json() {
        let json = r#"[
            { "title": "Main", "items": [
                { "id": "queries", "label": "Queries", "href": "/queries", "icon": "Search" }
            ] }
        ]"#;
        let sections = parse_menu_json(json).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].items[0].icon, MenuIcon::Search);
    }

    #[test]
    fn test_parse_menu_json_rejects_unknown_icon_and_bad_table() {
        let unknown_icon = r#"[{ "title": "Main", "items": [
            { "id": "x", "label": "X", "href": "/x", "icon": "Sparkles" }
        ] }]"#;
        assert!(matches!(
            parse_menu_json(unknown_icon),
            Err(MenuError::SerializationError(_))
        ));

        let empty_href = r#"[{ "title": "Main", "items": [
            { "id": "x", "label": "X", "href": "", "icon": "Home" }
        ] }]"#;
        assert!(matches!(
            parse_menu_json(empty_href),
            Err(MenuError::EmptyHref { .. })
        ));
    }
}
