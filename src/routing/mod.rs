//! Static route table and navigation intents.
//!
//! DESIGN
//! ======
//! Routes are `Copy` constants declared once; nothing mutates them at
//! runtime. `RouteName` stands in for the view a route renders, and the app
//! shell maps each name to its page component.


pub mod guard;

/// Closed set of views the app can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Predict,
    History,
    Profile,
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: RouteName,
    /// Navigation must be approved by a live session check.
    pub requires_auth: bool,
}

pub const HOME: RouteDescriptor = RouteDescriptor { path: "/", name: RouteName::Home, requires_auth: false };
pub const LOGIN: RouteDescriptor = RouteDescriptor { path: "/login", name: RouteName::Login, requires_auth: false };
pub const PREDICT: RouteDescriptor = RouteDescriptor { path: "/predict", name: RouteName::Predict, requires_auth: true };
pub const HISTORY: RouteDescriptor = RouteDescriptor { path: "/history", name: RouteName::History, requires_auth: true };
pub const PROFILE: RouteDescriptor = RouteDescriptor { path: "/profile", name: RouteName::Profile, requires_auth: true };

/// Ordered, immutable list of route descriptors.
#[derive(Clone, Copy, Debug)]
pub struct RouteTable {
    routes: &'static [RouteDescriptor],
}

/// Application route table.
pub static ROUTES: RouteTable = RouteTable::new(&[HOME, LOGIN, PREDICT, HISTORY, PROFILE]);

impl RouteTable {
    #[must_use]
    pub const fn new(routes: &'static [RouteDescriptor]) -> Self {
        Self { routes }
    }

    #[must_use]
    pub fn routes(&self) -> &'static [RouteDescriptor] {
        self.routes
    }

    /// Find the route for an exact path. A single trailing slash is ignored.
    /// Unknown paths return `None` and fall through to the router's fallback.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteDescriptor> {
        let normalized = match path {
            "" | "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };
        self.routes.iter().copied().find(|r| r.path == normalized)
    }

    #[must_use]
    pub fn by_name(&self, name: RouteName) -> Option<RouteDescriptor> {
        self.routes.iter().copied().find(|r| r.name == name)
    }
}

/// A pending move between routes, consumed by a single guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    pub destination: RouteDescriptor,
    /// Route the user is leaving; `None` on the first navigation of a page load.
    pub origin: Option<RouteDescriptor>,
}

impl NavigationIntent {
    #[must_use]
    pub fn new(destination: RouteDescriptor, origin: Option<RouteDescriptor>) -> Self {
        Self { destination, origin }
    }
}
