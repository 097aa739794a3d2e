use katabasis_lib::models::icon::IconId;
use katabasis_lib::models::notification::SeverityLevel;
use katabasis_lib::models::sidebar::{SidebarItem, SETTINGS_ITEM, SIDEBAR_ITEMS};
use katabasis_lib::utils::acronym::acronym;
use katabasis_lib::utils::icon::icon_asset_url;
use regex::Regex;
use std::collections::HashSet;

#[test]
fn test_every_icon_has_a_stable_path() {
    for icon in IconId::ALL {
        let path = icon.path();
        assert!(!path.is_empty(), "{:?} has an empty path", icon);
        assert!(path.starts_with('M'), "{:?} path should start with a moveto", icon);
        assert_eq!(path, icon.path());
    }
}

#[test]
fn test_icon_paths_are_pairwise_distinct() {
    let paths: HashSet<&str> = IconId::ALL.iter().map(|i| i.path()).collect();
    assert_eq!(paths.len(), IconId::ALL.len());
}

#[test]
fn test_severity_colours_are_hex() {
    let hex = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
    for level in SeverityLevel::ALL {
        assert!(hex.is_match(level.colour()), "{} -> {}", level, level.colour());
    }
}

#[test]
fn test_severity_colours_are_pairwise_distinct() {
    let colours: HashSet<&str> = SeverityLevel::ALL.iter().map(|l| l.colour()).collect();
    assert_eq!(colours.len(), 3);
}

#[test]
fn test_acronym_examples() {
    assert_eq!(acronym("Home"), "H");
    assert_eq!(acronym("Collections"), "C");
    assert_eq!(acronym(""), "");
    assert_eq!(acronym("  "), "");
    assert_eq!(acronym("lethal company modpack"), "LCM");
}

#[test]
fn test_icon_asset_url() {
    assert_eq!(
        icon_asset_url("abc123"),
        "https://gcdn.thunderstore.io/live/repository/icons/abc123.png"
    );
}

#[test]
fn test_sidebar_tables() {
    assert_eq!(
        SIDEBAR_ITEMS,
        [
            SidebarItem {
                display: "Home",
                url: "/",
                icon: IconId::Home
            },
            SidebarItem {
                display: "Collections",
                url: "/collections",
                icon: IconId::Library
            },
        ]
    );
    assert_eq!(
        SETTINGS_ITEM,
        SidebarItem {
            display: "Settings",
            url: "/settings",
            icon: IconId::Settings
        }
    );
}

#[test]
fn test_sidebar_acronyms() {
    let badges: Vec<String> = SIDEBAR_ITEMS.iter().map(|i| acronym(i.display)).collect();
    assert_eq!(badges, ["H", "C"]);
}
