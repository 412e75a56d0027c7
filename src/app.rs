//! Root application component with routing and the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router only hands every path to [`RoutedPage`]; which page renders and
//! whether it needs a session both come from `ROUTES`. Each resolved route is
//! wrapped in [`Guarded`], so every navigation mounts a fresh guard check.
//! The guard itself is built by the entry point and handed in as a prop; this
//! module never constructs an oracle.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    history::HistoryPage, home::HomePage, login::LoginPage, predict::PredictPage, profile::ProfilePage,
};
use crate::routing::guard::{GuardDecision, RouteGuard};
use crate::routing::{NavigationIntent, ROUTES, RouteDescriptor, RouteName};
use crate::session::supabase::SupabaseAuth;

/// Guard shared with every route through context.
pub type AppGuard = Arc<RouteGuard<SupabaseAuth>>;

/// Most recent route the guard let through; origin of the next navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LastRoute(pub Option<RouteDescriptor>);

/// Root application component.
#[component]
pub fn App(guard: AppGuard) -> impl IntoView {
    provide_meta_context();

    provide_context(guard);
    provide_context(RwSignal::new(LastRoute::default()));

    view! {
        <Title text="Health Risk Predictor"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RoutedPage/>
                <Route path=WildcardSegment("any") view=RoutedPage/>
            </Routes>
        </Router>
    }
}

/// Resolves the current path against `ROUTES` and renders its guarded page.
#[component]
fn RoutedPage() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| ROUTES.resolve(&location.pathname.get()));

    move || match route.get() {
        Some(route) => view! { <Guarded route=route>{move || page(route.name)}</Guarded> }.into_any(),
        None => "Page not found.".into_any(),
    }
}

fn page(name: RouteName) -> AnyView {
    match name {
        RouteName::Home => view! { <HomePage/> }.into_any(),
        RouteName::Login => view! { <LoginPage/> }.into_any(),
        RouteName::Predict => view! { <PredictPage/> }.into_any(),
        RouteName::History => view! { <HistoryPage/> }.into_any(),
        RouteName::Profile => view! { <ProfilePage/> }.into_any(),
    }
}

/// Runs the guard for `route` and renders `children` only once it proceeds.
/// A redirect replaces the current history entry with the login route.
#[component]
pub fn Guarded(route: RouteDescriptor, children: ChildrenFn) -> impl IntoView {
    let guard = expect_context::<AppGuard>();
    let last_route = expect_context::<RwSignal<LastRoute>>();
    let navigate = use_navigate();

    let decision = LocalResource::new(move || {
        let guard = guard.clone();
        let intent = NavigationIntent::new(route, last_route.get_untracked().0);
        async move { guard.check(&intent).await }
    });

    Effect::new(move || {
        let Some(followup) = decision.get().map(GuardDecision::followup) else {
            return;
        };
        if followup.render {
            last_route.set(LastRoute(Some(route)));
        }
        if let Some(path) = followup.redirect_to {
            navigate(path, NavigateOptions { replace: followup.replace, ..Default::default() });
        }
    });

    view! {
        <Suspense fallback=|| view! { <p class="guard-pending">"Checking session..."</p> }>
            {move || {
                decision
                    .get()
                    .filter(|d| d.followup().render)
                    .map(|_| children())
            }}
        </Suspense>
    }
}
