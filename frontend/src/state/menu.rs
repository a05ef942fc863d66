/// Navigation entries of the dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    Dashboard,
    Attendance,
    Announcements,
    Assignments,
    Meetings,
    Roadmap,
    Discussion,
    Users,
    Divisions,
    Roles,
    AppVersions,
    Profile,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 12] = [
        MenuEntry::Dashboard,
        MenuEntry::Attendance,
        MenuEntry::Announcements,
        MenuEntry::Assignments,
        MenuEntry::Meetings,
        MenuEntry::Roadmap,
        MenuEntry::Discussion,
        MenuEntry::Users,
        MenuEntry::Divisions,
        MenuEntry::Roles,
        MenuEntry::AppVersions,
        MenuEntry::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Dashboard => "Dashboard",
            MenuEntry::Attendance => "Attendance",
            MenuEntry::Announcements => "Announcements",
            MenuEntry::Assignments => "Assignments",
            MenuEntry::Meetings => "Meetings",
            MenuEntry::Roadmap => "Roadmap",
            MenuEntry::Discussion => "Discussion",
            MenuEntry::Users => "Users",
            MenuEntry::Divisions => "Divisions",
            MenuEntry::Roles => "Roles",
            MenuEntry::AppVersions => "App Versions",
            MenuEntry::Profile => "Profile",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            MenuEntry::Dashboard => "/dashboard",
            MenuEntry::Attendance => "/attendance",
            MenuEntry::Announcements => "/announcements",
            MenuEntry::Assignments => "/assignments",
            MenuEntry::Meetings => "/meetings",
            MenuEntry::Roadmap => "/roadmaps",
            MenuEntry::Discussion => "/discussion",
            MenuEntry::Users => "/users",
            MenuEntry::Divisions => "/divisions",
            MenuEntry::Roles => "/roles",
            MenuEntry::AppVersions => "/app-versions",
            MenuEntry::Profile => "/profile",
        }
    }
}

const HEAD_ENTRIES: &[MenuEntry] = &[
    MenuEntry::Dashboard,
    MenuEntry::Attendance,
    MenuEntry::Announcements,
    MenuEntry::Assignments,
    MenuEntry::Meetings,
    MenuEntry::Roadmap,
    MenuEntry::Discussion,
    MenuEntry::Users,
    MenuEntry::Profile,
];

const STAFF_ENTRIES: &[MenuEntry] = &[
    MenuEntry::Dashboard,
    MenuEntry::Attendance,
    MenuEntry::Assignments,
    MenuEntry::Meetings,
    MenuEntry::Roadmap,
    MenuEntry::Discussion,
    MenuEntry::Profile,
];

const STUDENT_ENTRIES: &[MenuEntry] = &[
    MenuEntry::Roadmap,
    MenuEntry::Discussion,
    MenuEntry::Meetings,
    MenuEntry::Profile,
];

const FALLBACK_ENTRIES: &[MenuEntry] = &[MenuEntry::Dashboard, MenuEntry::Profile];

/// Menu entries visible to a role, in sidebar order. Unknown or missing
/// roles get the dashboard and their profile only.
pub fn allowed_menu(role_id: Option<i64>) -> Vec<MenuEntry> {
    let allowed: &[MenuEntry] = match role_id {
        Some(1) => &MenuEntry::ALL,
        Some(2) => {
            return MenuEntry::ALL
                .into_iter()
                .filter(|entry| *entry != MenuEntry::AppVersions)
                .collect()
        }
        Some(3) => HEAD_ENTRIES,
        Some(4..=7) => STAFF_ENTRIES,
        Some(8) => STUDENT_ENTRIES,
        _ => FALLBACK_ENTRIES,
    };
    MenuEntry::ALL
        .into_iter()
        .filter(|entry| allowed.contains(entry))
        .collect()
}

pub fn can_access(role_id: Option<i64>, entry: MenuEntry) -> bool {
    allowed_menu(role_id).contains(&entry)
}

/// Where a signed-in user lands after login or after opening a page their
/// role may not see.
pub fn landing_path(role_id: Option<i64>) -> &'static str {
    allowed_menu(role_id)
        .first()
        .map(|entry| entry.path())
        .unwrap_or("/profile")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(entries: Vec<MenuEntry>) -> HashSet<MenuEntry> {
        entries.into_iter().collect()
    }

    #[test]
    fn super_admin_sees_everything() {
        assert_eq!(allowed_menu(Some(1)), MenuEntry::ALL.to_vec());
    }

    #[test]
    fn admin_sees_everything_but_app_versions() {
        let menu = allowed_menu(Some(2));
        assert_eq!(menu.len(), MenuEntry::ALL.len() - 1);
        assert!(!menu.contains(&MenuEntry::AppVersions));
    }

    #[test]
    fn student_menu_is_exact() {
        assert_eq!(
            as_set(allowed_menu(Some(8))),
            as_set(vec![
                MenuEntry::Roadmap,
                MenuEntry::Discussion,
                MenuEntry::Meetings,
                MenuEntry::Profile
            ])
        );
    }

    #[test]
    fn staff_roles_share_a_menu() {
        let mentor = allowed_menu(Some(4));
        for role in 5..=7 {
            assert_eq!(allowed_menu(Some(role)), mentor);
        }
        assert!(!mentor.contains(&MenuEntry::Users));
        assert!(can_access(Some(3), MenuEntry::Users));
    }

    #[test]
    fn unknown_roles_get_the_fallback() {
        let fallback = vec![MenuEntry::Dashboard, MenuEntry::Profile];
        assert_eq!(allowed_menu(Some(99)), fallback);
        assert_eq!(allowed_menu(Some(0)), fallback);
        assert_eq!(allowed_menu(None), fallback);
    }

    #[test]
    fn landing_is_the_first_visible_entry() {
        assert_eq!(landing_path(Some(1)), "/dashboard");
        assert_eq!(landing_path(Some(8)), "/meetings");
        assert_eq!(landing_path(None), "/dashboard");
    }

    #[test]
    fn entries_keep_sidebar_order() {
        assert_eq!(
            allowed_menu(Some(8)),
            vec![
                MenuEntry::Meetings,
                MenuEntry::Roadmap,
                MenuEntry::Discussion,
                MenuEntry::Profile
            ]
        );
    }
}
