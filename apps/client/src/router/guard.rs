use crate::router::routes::Route;
use crate::session::SessionView;

/// Outcome of an admission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Allow,
    Redirect { to: String },
}

/// Admission control for one route transition.
///
/// A pure function of (route metadata, session view); the rules are ordered
/// and the first match wins:
///
/// 1. auth required, no session      -> login, carrying the intended path
/// 2. admin-only, role not admin     -> the admin-users screen
/// 3. elevated, role not admin/op    -> dashboard
/// 4. login/register while logged in -> dashboard
/// 5. otherwise                      -> allow
pub fn evaluate(route: &Route, full_path: &str, session: &SessionView) -> Admission {
    if route.meta.requires_auth && !session.authenticated {
        return Admission::Redirect {
            to: format!("/login?redirect={full_path}"),
        };
    }

    if route.meta.requires_admin_only && !session.is_administrator() {
        return Admission::Redirect {
            to: "/admin/users".to_string(),
        };
    }

    if route.meta.requires_elevated && !session.is_operator_or_administrator() {
        return Admission::Redirect {
            to: "/dashboard".to_string(),
        };
    }

    if (route.name == "login" || route.name == "register") && session.authenticated {
        return Admission::Redirect {
            to: "/dashboard".to_string(),
        };
    }

    Admission::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::routes::resolve;
    use crate::session::Role;

    fn check(path: &str, session: SessionView) -> Admission {
        let m = resolve(path);
        evaluate(m.route, &m.full_path, &session)
    }

    #[test]
    fn test_anonymous_on_protected_route_goes_to_login_with_return_target() {
        assert_eq!(
            check("/history", SessionView::ANONYMOUS),
            Admission::Redirect {
                to: "/login?redirect=/history".to_string()
            }
        );
    }

    #[test]
    fn test_anonymous_on_public_route_is_allowed() {
        assert_eq!(check("/evaluation", SessionView::ANONYMOUS), Admission::Allow);
        assert_eq!(check("/", SessionView::ANONYMOUS), Admission::Allow);
    }

    #[test]
    fn test_operator_denied_on_admin_only_lands_on_admin_users() {
        assert_eq!(
            check("/admin", SessionView::authenticated_as(Role::Operator)),
            Admission::Redirect {
                to: "/admin/users".to_string()
            }
        );
    }

    #[test]
    fn test_administrator_passes_admin_only() {
        assert_eq!(
            check("/admin", SessionView::authenticated_as(Role::Administrator)),
            Admission::Allow
        );
    }

    #[test]
    fn test_student_denied_on_elevated_lands_on_dashboard() {
        assert_eq!(
            check("/admin/users", SessionView::authenticated_as(Role::Student)),
            Admission::Redirect {
                to: "/dashboard".to_string()
            }
        );
    }

    #[test]
    fn test_operator_passes_elevated() {
        assert_eq!(
            check("/admin/ofertas", SessionView::authenticated_as(Role::Operator)),
            Admission::Allow
        );
    }

    #[test]
    fn test_authenticated_user_bounced_off_login_and_register() {
        let student = SessionView::authenticated_as(Role::Student);
        assert_eq!(
            check("/login", student),
            Admission::Redirect {
                to: "/dashboard".to_string()
            }
        );
        assert_eq!(
            check("/register", student),
            Admission::Redirect {
                to: "/dashboard".to_string()
            }
        );
    }

    #[test]
    fn test_auth_rule_applies_before_role_rules() {
        // Anonymous user on an admin route is sent to login, not to the
        // admin fallback: rule 1 fires first.
        assert_eq!(
            check("/admin", SessionView::ANONYMOUS),
            Admission::Redirect {
                to: "/login?redirect=/admin".to_string()
            }
        );
    }

    #[test]
    fn test_student_on_own_pages_is_allowed() {
        let student = SessionView::authenticated_as(Role::Student);
        assert_eq!(check("/dashboard", student), Admission::Allow);
        assert_eq!(check("/mis-recomendaciones", student), Admission::Allow);
    }
}
