use serde::Serialize;

pub const BRAND: &str = "SeiyuuHub";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Site header shown on every screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navbar {
    pub brand: &'static str,
    pub brand_href: &'static str,
    pub links: Vec<NavLink>,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            brand: BRAND,
            brand_href: "/",
            links: vec![
                NavLink {
                    label: "Home",
                    href: "/",
                },
                NavLink {
                    label: "Create",
                    href: "/create",
                },
                NavLink {
                    label: "Seiyuu List",
                    href: "/seiyuu",
                },
            ],
        }
    }
}
