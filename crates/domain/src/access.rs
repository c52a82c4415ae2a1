//! Role access registry: pure lookups from a role identifier to its
//! capabilities, default screen and display metadata.
//!
//! All functions accept the raw role string carried by the user profile.
//! An unknown role never produces an error; it resolves to the documented
//! empty result instead.

use std::str::FromStr;

use crate::{AppModule, Capability, Role, RoleDisplay};

/// Placeholder shown for role strings the registry does not know.
const UNKNOWN_ROLE_DISPLAY: RoleDisplay = RoleDisplay {
    label: "Team Member",
    icon: "user",
};

/// Returns the capability flags held by the given role identifier.
///
/// Unknown roles hold no capabilities.
#[must_use]
pub fn capabilities_for(role: &str) -> &'static [Capability] {
    match Role::from_str(role) {
        Ok(role) => role.capabilities(),
        Err(_) => &[],
    }
}

/// Returns the initial dashboard route for the given role identifier.
///
/// Used once at login to pick the first screen. Unknown roles have no route.
#[must_use]
pub fn dashboard_route_for(role: &str) -> Option<&'static str> {
    Role::from_str(role).ok().map(|role| role.dashboard_route())
}

/// Returns the label and icon for the given role identifier, falling back to
/// a generic placeholder for unknown roles.
#[must_use]
pub fn display_info_for(role: &str) -> RoleDisplay {
    Role::from_str(role)
        .map(|role| role.display())
        .unwrap_or(UNKNOWN_ROLE_DISPLAY)
}

/// Returns whether the given role identifier may open the module.
///
/// True when the role holds any of the module's required capabilities;
/// `FullAccess` unlocks every module. Unknown roles access nothing.
#[must_use]
pub fn module_accessible(role: &str, module: AppModule) -> bool {
    module
        .required_capabilities()
        .iter()
        .any(|required| capabilities_for(role).contains(required))
        || capabilities_for(role).contains(&Capability::FullAccess)
}

/// Returns every module the given role identifier may open.
#[must_use]
pub fn accessible_modules(role: &str) -> Vec<AppModule> {
    AppModule::all()
        .iter()
        .copied()
        .filter(|module| module_accessible(role, *module))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{AppModule, Role};

    use super::{
        accessible_modules, capabilities_for, dashboard_route_for, display_info_for,
        module_accessible, UNKNOWN_ROLE_DISPLAY,
    };

    #[test]
    fn every_defined_role_has_a_nonempty_dashboard_route() {
        for role in Role::all() {
            let route = dashboard_route_for(role.as_str());
            assert!(route.is_some_and(|route| !route.is_empty()));
        }
    }

    #[test]
    fn unknown_role_has_no_dashboard_route() {
        assert_eq!(dashboard_route_for("unknown_role"), None);
    }

    #[test]
    fn worker_dashboard_route_matches_navigation_name() {
        assert_eq!(dashboard_route_for("worker"), Some("WorkerDashboard"));
    }

    #[test]
    fn admin_accesses_every_module() {
        for module in AppModule::all() {
            assert!(module_accessible("admin", *module));
        }
    }

    #[test]
    fn admin_accesses_budget_financials() {
        assert!(module_accessible("admin", AppModule::BudgetFinancials));
    }

    #[test]
    fn worker_cannot_access_budget_financials() {
        assert!(!module_accessible("worker", AppModule::BudgetFinancials));
    }

    #[test]
    fn worker_accesses_attendance() {
        assert!(module_accessible("worker", AppModule::Attendance));
    }

    #[test]
    fn unknown_role_accesses_no_modules() {
        assert!(accessible_modules("unknown_role").is_empty());
        assert!(capabilities_for("unknown_role").is_empty());
    }

    #[test]
    fn unknown_role_gets_placeholder_display() {
        let display = display_info_for("unknown_role");
        assert_eq!(display.label, UNKNOWN_ROLE_DISPLAY.label);
        assert_eq!(display.icon, UNKNOWN_ROLE_DISPLAY.icon);
    }

    #[test]
    fn subcontractor_reaches_invoices_but_not_vendors() {
        assert!(module_accessible("subcontractor", AppModule::Invoices));
        assert!(!module_accessible("subcontractor", AppModule::Vendors));
    }

    proptest! {
        #[test]
        fn arbitrary_unknown_role_strings_resolve_to_empty_defaults(
            value in "[a-z_]{1,24}".prop_filter(
                "must not collide with a defined role",
                |value| Role::all().iter().all(|role| role.as_str() != value),
            )
        ) {
            prop_assert!(dashboard_route_for(&value).is_none());
            prop_assert!(capabilities_for(&value).is_empty());
            prop_assert!(accessible_modules(&value).is_empty());
            prop_assert_eq!(display_info_for(&value).label, UNKNOWN_ROLE_DISPLAY.label);
        }
    }
}
