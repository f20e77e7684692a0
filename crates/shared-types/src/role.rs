use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard role carried by a session.
///
/// - `Employee`: personal task board.
/// - `Manager`: team overview and revenue figures.
/// - `Inventory`: stock levels and product management.
///
/// The set is closed: there is no fallback role, an unknown string is not a role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Manager,
    Inventory,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Employee, Role::Manager, Role::Inventory];

    /// Parse a stored role string. Matching is exact and lowercase only.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "employee" => Some(Role::Employee),
            "manager" => Some(Role::Manager),
            "inventory" => Some(Role::Inventory),
            _ => None,
        }
    }

    /// Lowercase string used in storage and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Manager => "manager",
            Role::Inventory => "inventory",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Manager => "Manager",
            Role::Inventory => "Inventory",
        }
    }

    /// Two-letter avatar initials.
    pub fn initials(&self) -> &'static str {
        match self {
            Role::Employee => "EM",
            Role::Manager => "MA",
            Role::Inventory => "IN",
        }
    }

    /// The dashboard a freshly signed-in user of this role lands on.
    pub fn home(&self) -> Page {
        match self {
            Role::Employee => Page::Employee,
            Role::Manager => Page::Manager,
            Role::Inventory => Page::Inventory,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry points of the dashboard shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Employee,
    Manager,
    Inventory,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Login, Page::Employee, Page::Manager, Page::Inventory];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Login => "/",
            Page::Employee => "/employee",
            Page::Manager => "/manager",
            Page::Inventory => "/inventory",
        }
    }

    /// Resolve a path to a page. A single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path {
            "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };
        Page::ALL.into_iter().find(|page| page.path() == trimmed)
    }

    /// The role a session must hold to reach this page. `None` means public.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Page::Login => None,
            Page::Employee => Some(Role::Employee),
            Page::Manager => Some(Role::Manager),
            Page::Inventory => Some(Role::Inventory),
        }
    }
}
