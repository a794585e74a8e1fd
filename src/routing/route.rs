/// A node in the static route tree. Immutable after startup.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    /// Navigation target name. Layout-only parents are unnamed.
    pub name: Option<String>,
    pub requires_auth: bool,
    pub children: Vec<Route>,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            requires_auth: false,
            children: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }
}

/// A route flattened out of the tree: full path plus the effective
/// authentication requirement (its own flag or any ancestor's).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub name: String,
    pub path: String,
    pub requires_auth: bool,
}

/// The route tree declared at startup.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Find a named route anywhere in the tree.
    pub fn resolve(&self, name: &str) -> Option<ResolvedRoute> {
        Self::walk(&self.routes, "", false, name)
    }

    fn walk(
        routes: &[Route],
        parent_path: &str,
        inherited_auth: bool,
        name: &str,
    ) -> Option<ResolvedRoute> {
        for route in routes {
            let path = join_paths(parent_path, &route.path);
            let requires_auth = inherited_auth || route.requires_auth;

            if route.name.as_deref() == Some(name) {
                return Some(ResolvedRoute {
                    name: name.to_string(),
                    path,
                    requires_auth,
                });
            }

            if let Some(found) = Self::walk(&route.children, &path, requires_auth, name) {
                return Some(found);
            }
        }
        None
    }
}

/// Join a child path onto its parent's. Absolute child paths win; an
/// empty child path is the parent's default child.
fn join_paths(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        child.to_string()
    } else if child.is_empty() {
        if parent.is_empty() {
            "/".to_string()
        } else {
            parent.to_string()
        }
    } else {
        format!("{}/{}", parent.trim_end_matches('/'), child)
    }
}
