//! # Navigation Table
//!
//! The fixed set of pages the nav bar links to. Matching is an exact string
//! comparison on the path: `/services/extra` does not activate `/services`.

/// A single navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
}

pub const HOME_PATH: &str = "/";
pub const SERVICES_PATH: &str = "/services";
pub const ABOUT_PATH: &str = "/about";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        icon: "⌂",
        path: HOME_PATH,
    },
    NavItem {
        label: "Services",
        icon: "⚙",
        path: SERVICES_PATH,
    },
    NavItem {
        label: "About",
        icon: "☺",
        path: ABOUT_PATH,
    },
];

/// Index of the entry whose path equals `current_path`, if any.
pub fn active_index(items: &[NavItem], current_path: &str) -> Option<usize> {
    items.iter().position(|item| item.path == current_path)
}

/// Which page a path renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Writer,
    About,
    NotFound,
}

impl Page {
    pub fn for_path(path: &str) -> Self {
        match path {
            HOME_PATH => Page::Home,
            SERVICES_PATH => Page::Writer,
            ABOUT_PATH => Page::About,
            _ => Page::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_target_activates_only_itself() {
        for (i, item) in NAV_ITEMS.iter().enumerate() {
            assert_eq!(active_index(NAV_ITEMS, item.path), Some(i));
        }
    }

    #[test]
    fn test_other_paths_activate_nothing() {
        for path in ["", "/home", "/services/", "/services/writer", "/About", "about", "//"] {
            assert_eq!(active_index(NAV_ITEMS, path), None, "path {path:?}");
        }
    }

    #[test]
    fn test_paths_are_unique() {
        for (i, a) in NAV_ITEMS.iter().enumerate() {
            for b in &NAV_ITEMS[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_page_for_path() {
        assert_eq!(Page::for_path("/"), Page::Home);
        assert_eq!(Page::for_path("/services"), Page::Writer);
        assert_eq!(Page::for_path("/about"), Page::About);
        assert_eq!(Page::for_path("/missing"), Page::NotFound);
    }
}
