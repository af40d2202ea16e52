use std::collections::BTreeMap;

/// Admission requirements of a route. Static configuration, not state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMeta {
    pub requires_auth: bool,
    /// Administrator or operator.
    pub requires_elevated: bool,
    /// Strict gate: administrator only, operators are bounced.
    pub requires_admin_only: bool,
}

#[derive(Debug)]
pub struct Route {
    pub name: &'static str,
    /// Literal segments, `:param` captures, or `*` for the catch-all.
    pub pattern: &'static str,
    /// Alias routes short-circuit to this target before the guard runs.
    pub redirect: Option<&'static str>,
    pub meta: RouteMeta,
}

const PUBLIC: RouteMeta = RouteMeta {
    requires_auth: false,
    requires_elevated: false,
    requires_admin_only: false,
};

const AUTHED: RouteMeta = RouteMeta {
    requires_auth: true,
    requires_elevated: false,
    requires_admin_only: false,
};

const ELEVATED: RouteMeta = RouteMeta {
    requires_auth: true,
    requires_elevated: true,
    requires_admin_only: false,
};

const ADMIN_ONLY: RouteMeta = RouteMeta {
    requires_auth: true,
    requires_elevated: true,
    requires_admin_only: true,
};

macro_rules! route {
    ($name:literal, $pattern:literal, $meta:expr) => {
        Route {
            name: $name,
            pattern: $pattern,
            redirect: None,
            meta: $meta,
        }
    };
}

macro_rules! alias {
    ($pattern:literal => $target:literal) => {
        Route {
            name: "",
            pattern: $pattern,
            redirect: Some($target),
            meta: PUBLIC,
        }
    };
}

/// The canonical route table. Order matters only for the catch-all, which
/// must stay last.
pub static ROUTES: &[Route] = &[
    route!("landing", "/", PUBLIC),
    route!("login", "/login", PUBLIC),
    route!("register", "/register", PUBLIC),
    route!("dashboard", "/dashboard", AUTHED),
    // Anonymous one-shot evaluation is deliberately public.
    route!("evaluation", "/evaluation", PUBLIC),
    route!("history", "/history", AUTHED),
    route!("mi-perfil", "/mi-perfil", AUTHED),
    route!("subir-cv", "/subir-cv", AUTHED),
    route!("mis-recomendaciones", "/mis-recomendaciones", AUTHED),
    alias!("/recommendations" => "/mis-recomendaciones"),
    route!("configuracion-cuenta", "/configuracion-cuenta", AUTHED),
    route!("admin", "/admin", ADMIN_ONLY),
    route!("admin-users", "/admin/users", ELEVATED),
    route!("admin-users-detail", "/admin/users/:id", ELEVATED),
    route!("admin-profiles", "/admin/profiles", ELEVATED),
    route!("admin-profiles-new", "/admin/profiles/new", ELEVATED),
    route!("admin-profiles-edit", "/admin/profiles/:id/edit", ELEVATED),
    route!("admin-reports", "/admin/reports", ELEVATED),
    route!("admin-ofertas", "/admin/ofertas", ELEVATED),
    route!("admin-ofertas-new", "/admin/ofertas/new", ELEVATED),
    route!("admin-ofertas-edit", "/admin/ofertas/edit/:id", ELEVATED),
    alias!("*" => "/"),
];

/// A resolved route: the matched table entry plus extracted `:param`
/// captures and query-string pairs.
#[derive(Debug)]
pub struct RouteMatch {
    pub route: &'static Route,
    pub params: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
    /// The full path as navigated, including the query string.
    pub full_path: String,
}

/// Resolves a path against the table. Always succeeds: the trailing
/// catch-all matches anything.
pub fn resolve(path: &str) -> RouteMatch {
    let (raw_path, raw_query) = match path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path, None),
    };
    let segments: Vec<&str> = raw_path.split('/').filter(|s| !s.is_empty()).collect();

    for route in ROUTES {
        if let Some(params) = match_pattern(route.pattern, &segments) {
            return RouteMatch {
                route,
                params,
                query: parse_query(raw_query),
                full_path: path.to_string(),
            };
        }
    }
    unreachable!("route table must end with a catch-all");
}

fn match_pattern(pattern: &str, segments: &[&str]) -> Option<BTreeMap<String, String>> {
    if pattern == "*" {
        return Some(BTreeMap::new());
    }
    let pattern_segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    if pattern_segments.len() != segments.len() {
        return None;
    }
    let mut params = BTreeMap::new();
    for (expected, actual) in pattern_segments.iter().zip(segments) {
        if let Some(name) = expected.strip_prefix(':') {
            params.insert(name.to_string(), (*actual).to_string());
        } else if expected != actual {
            return None;
        }
    }
    Some(params)
}

fn parse_query(raw: Option<&str>) -> BTreeMap<String, String> {
    let mut query = BTreeMap::new();
    if let Some(raw) = raw {
        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            match pair.split_once('=') {
                Some((k, v)) => query.insert(k.to_string(), v.to_string()),
                None => query.insert(pair.to_string(), String::new()),
            };
        }
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_literal_route() {
        let m = resolve("/dashboard");
        assert_eq!(m.route.name, "dashboard");
        assert!(m.route.meta.requires_auth);
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_resolve_param_capture() {
        let m = resolve("/admin/users/42");
        assert_eq!(m.route.name, "admin-users-detail");
        assert_eq!(m.params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_nested_param_pattern() {
        let m = resolve("/admin/profiles/7f3a/edit");
        assert_eq!(m.route.name, "admin-profiles-edit");
        assert_eq!(m.params.get("id").map(String::as_str), Some("7f3a"));
    }

    #[test]
    fn test_profiles_new_is_its_own_route() {
        assert_eq!(resolve("/admin/profiles/new").route.name, "admin-profiles-new");
    }

    #[test]
    fn test_alias_redirect() {
        let m = resolve("/recommendations");
        assert_eq!(m.route.redirect, Some("/mis-recomendaciones"));
    }

    #[test]
    fn test_catch_all_redirects_to_landing() {
        let m = resolve("/no/such/page");
        assert_eq!(m.route.redirect, Some("/"));
    }

    #[test]
    fn test_query_string_parsed_and_preserved() {
        let m = resolve("/login?redirect=/history");
        assert_eq!(m.route.name, "login");
        assert_eq!(m.query.get("redirect").map(String::as_str), Some("/history"));
        assert_eq!(m.full_path, "/login?redirect=/history");
    }

    #[test]
    fn test_admin_root_is_strict() {
        let m = resolve("/admin");
        assert!(m.route.meta.requires_admin_only);
    }
}
