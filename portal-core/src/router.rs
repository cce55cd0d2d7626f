//! Hash router with role-gated navigation guards
//!
//! Routes are addressed by `#/`-style hash tokens. The guard policy runs in
//! strict order: authentication first, then role. A guard failure is not
//! an error; it re-enters the router at a public route, so every
//! completed transition leaves exactly one view active. The redirect
//! targets (`#/login`, `#/`) are public, which is what keeps the
//! re-entry from looping.

use crate::auth::Session;
use crate::notify::{NoticeLevel, Notifier};
use shared::models::Role;
use std::collections::HashMap;

/// View identifiers, one per page of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    VerifyEmail,
    Profile,
    Requests,
    Employees,
    Accounts,
    Departments,
}

/// Routes that require an authenticated session
pub const PROTECTED_ROUTES: &[Route] = &[
    Route::Profile,
    Route::Requests,
    Route::Employees,
    Route::Accounts,
    Route::Departments,
];

/// Routes that additionally require the Admin role
pub const ADMIN_ROUTES: &[Route] = &[Route::Employees, Route::Accounts, Route::Departments];

impl Route {
    /// Resolve a hash token. Unknown or empty tokens fall back to
    /// [`Route::Home`]; there is no not-found state.
    pub fn parse(hash: &str) -> Self {
        match hash {
            "" | "#/" => Self::Home,
            "#/login" => Self::Login,
            "#/register" => Self::Register,
            "#/verify-email" => Self::VerifyEmail,
            "#/profile" => Self::Profile,
            "#/requests" => Self::Requests,
            "#/employees" => Self::Employees,
            "#/accounts" => Self::Accounts,
            "#/departments" => Self::Departments,
            _ => Self::Home,
        }
    }

    /// The hash token for this route
    pub fn hash(&self) -> &'static str {
        match self {
            Self::Home => "#/",
            Self::Login => "#/login",
            Self::Register => "#/register",
            Self::VerifyEmail => "#/verify-email",
            Self::Profile => "#/profile",
            Self::Requests => "#/requests",
            Self::Employees => "#/employees",
            Self::Accounts => "#/accounts",
            Self::Departments => "#/departments",
        }
    }

    /// Exact membership check, no partial matches
    pub fn is_protected(&self) -> bool {
        PROTECTED_ROUTES.contains(self)
    }

    pub fn is_admin_only(&self) -> bool {
        ADMIN_ROUTES.contains(self)
    }
}

/// Guard verdict for one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The requested route was activated
    Allowed,
    /// No session; redirected to the login view
    LoginRequired,
    /// Session missing the Admin role; redirected home with a denial notice
    AdminRequired,
}

/// Result of a completed navigation. `active` is the view left active
/// after any internal redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub requested: Route,
    pub active: Route,
    pub guard: GuardDecision,
}

type RenderFn = Box<dyn FnMut()>;

/// The router: route resolution, guard policy, view activation
pub struct Router {
    callbacks: HashMap<Route, RenderFn>,
    notifier: Notifier,
    active: Option<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::with_notifier(Notifier::new())
    }

    pub fn with_notifier(notifier: Notifier) -> Self {
        Self {
            callbacks: HashMap::new(),
            notifier,
            active: None,
        }
    }

    /// Register the render callback invoked (with no arguments) after the
    /// route activates. One callback per route; a later registration
    /// replaces the earlier one.
    pub fn on_render(&mut self, route: Route, callback: impl FnMut() + 'static) {
        self.callbacks.insert(route, Box::new(callback));
    }

    /// The currently active view, `None` before the first navigation
    pub fn active(&self) -> Option<Route> {
        self.active
    }

    /// Run one navigation through the guard policy.
    ///
    /// Guard failures re-enter this same transition logic at the redirect
    /// target and report the original request in the returned
    /// [`Transition`].
    pub fn navigate(&mut self, hash: &str, session: Option<&Session>) -> Transition {
        let requested = Route::parse(hash);

        if requested.is_protected() && session.is_none() {
            tracing::debug!(route = ?requested, "Login required, redirecting");
            let inner = self.navigate(Route::Login.hash(), session);
            return Transition {
                requested,
                active: inner.active,
                guard: GuardDecision::LoginRequired,
            };
        }

        let is_admin = matches!(session, Some(s) if s.role == Role::Admin);
        if requested.is_admin_only() && !is_admin {
            tracing::debug!(route = ?requested, "Admin required, redirecting");
            self.notifier
                .push(NoticeLevel::Danger, "Access Denied: Admin only");
            let inner = self.navigate(Route::Home.hash(), session);
            return Transition {
                requested,
                active: inner.active,
                guard: GuardDecision::AdminRequired,
            };
        }

        // Activation deactivates whatever was active before; exactly one
        // view is active once the transition completes.
        self.active = Some(requested);
        if let Some(callback) = self.callbacks.get_mut(&requested) {
            callback();
        }
        Transition {
            requested,
            active: requested,
            guard: GuardDecision::Allowed,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notice;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session(role: Role) -> Session {
        Session {
            email: "someone@example.com".to_string(),
            first_name: "Some".to_string(),
            last_name: "One".to_string(),
            role,
        }
    }

    #[test]
    fn test_parse_fallback_to_home() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse("#/nope"), Route::Home);
        assert_eq!(Route::parse("#/login"), Route::Login);
        assert_eq!(Route::parse("#/verify-email"), Route::VerifyEmail);
    }

    #[test]
    fn test_hash_roundtrip() {
        for route in [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::VerifyEmail,
            Route::Profile,
            Route::Requests,
            Route::Employees,
            Route::Accounts,
            Route::Departments,
        ] {
            assert_eq!(Route::parse(route.hash()), route);
        }
    }

    #[test]
    fn test_classification() {
        assert!(Route::Profile.is_protected());
        assert!(!Route::Profile.is_admin_only());
        assert!(Route::Employees.is_protected());
        assert!(Route::Employees.is_admin_only());
        assert!(!Route::Login.is_protected());
        assert!(!Route::Home.is_protected());
    }

    #[test]
    fn test_protected_without_session_redirects_to_login() {
        let mut router = Router::new();
        for route in PROTECTED_ROUTES {
            let transition = router.navigate(route.hash(), None);
            assert_eq!(transition.requested, *route);
            assert_eq!(transition.active, Route::Login);
            assert_eq!(transition.guard, GuardDecision::LoginRequired);
            assert_eq!(router.active(), Some(Route::Login));
        }
    }

    #[test]
    fn test_admin_route_denied_for_user_with_one_notice() {
        let notices = Rc::new(RefCell::new(Vec::<Notice>::new()));
        let sink = Rc::clone(&notices);
        let mut router =
            Router::with_notifier(Notifier::with_sink(move |n| sink.borrow_mut().push(n)));

        let user = session(Role::User);
        for route in ADMIN_ROUTES {
            notices.borrow_mut().clear();
            let transition = router.navigate(route.hash(), Some(&user));
            assert_eq!(transition.active, Route::Home);
            assert_eq!(transition.guard, GuardDecision::AdminRequired);
            assert_eq!(router.active(), Some(Route::Home));

            let notices = notices.borrow();
            assert_eq!(notices.len(), 1);
            assert_eq!(notices[0].level, NoticeLevel::Danger);
            assert_eq!(notices[0].message, "Access Denied: Admin only");
        }
    }

    #[test]
    fn test_admin_session_reaches_admin_routes() {
        let mut router = Router::new();
        let admin = session(Role::Admin);
        for route in ADMIN_ROUTES {
            let transition = router.navigate(route.hash(), Some(&admin));
            assert_eq!(transition.guard, GuardDecision::Allowed);
            assert_eq!(transition.active, *route);
        }
    }

    #[test]
    fn test_callback_runs_on_activation_only() {
        let rendered = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&rendered);

        let mut router = Router::new();
        router.on_render(Route::Profile, move || *counter.borrow_mut() += 1);

        // Guarded off: callback must not run
        router.navigate("#/profile", None);
        assert_eq!(*rendered.borrow(), 0);

        let user = session(Role::User);
        router.navigate("#/profile", Some(&user));
        assert_eq!(*rendered.borrow(), 1);
    }
}
