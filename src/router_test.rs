use super::*;

fn standard_router() -> Router {
    Router::new(Arc::new(RouteTable::standard()))
}

fn hrefs(fragment: &Fragment) -> Vec<&'static str> {
    fragment.links.iter().map(|link| link.href).collect()
}

#[test]
fn registered_paths_resolve_to_views_with_all_links() {
    let router = standard_router();
    for path in ["/", "/about", "/sth"] {
        let fragment = router.resolve(path).render().expect("registered path should match");
        assert_eq!(hrefs(&fragment), ["/", "/about", "/sth"], "{path}");
    }
}

#[test]
fn resolve_maps_paths_to_headings() {
    let router = standard_router();
    assert_eq!(router.resolve("/"), Resolution::Matched(View::Home));
    assert_eq!(router.resolve("/about").render().unwrap().heading, "Sth");
    assert_eq!(router.resolve("/sth").render().unwrap().heading, "Sth");
    assert_eq!(router.resolve("/").render().unwrap().heading, "Home");
}

#[test]
fn unknown_path_is_no_match() {
    let router = standard_router();
    assert_eq!(router.resolve("/unknown"), Resolution::NoMatch);
    assert!(router.resolve("/unknown").render().is_none());
}

#[test]
fn matching_is_exact() {
    let router = standard_router();
    for path in ["", "/about/", "/About", "/sth?x=1", "//", "/sthx"] {
        assert_eq!(router.resolve(path), Resolution::NoMatch, "{path:?}");
    }
}

#[test]
fn router_starts_idle() {
    assert_eq!(standard_router().state(), &RouterState::Idle);
}

#[test]
fn navigate_records_unmatched_path_and_renders_nothing() {
    let mut router = standard_router();
    assert!(router.navigate("/nope").is_none());
    assert_eq!(router.state(), &RouterState::Resolved("/nope".into()));
}

#[test]
fn navigation_sequence_follows_route_table() {
    let mut router = standard_router();
    let steps = [("/", "Home"), ("/about", "Sth"), ("/sth", "Sth"), ("/", "Home")];

    for (path, heading) in steps {
        let fragment = router.navigate(path).expect("page should render");
        assert_eq!(fragment.heading, heading, "{path}");
        assert_eq!(hrefs(&fragment), ["/", "/about", "/sth"]);
        assert_eq!(router.state(), &RouterState::Resolved(path.into()));
    }
}

#[test]
fn custom_table_is_used_instead_of_standard() {
    let table = RouteTable::new(vec![Route { path: "/only", view: View::About }]);
    let router = Router::new(Arc::new(table));
    assert_eq!(router.resolve("/only"), Resolution::Matched(View::About));
    assert_eq!(router.resolve("/"), Resolution::NoMatch);
}

#[test]
fn lookup_returns_first_registered_match() {
    let table = RouteTable::new(vec![
        Route { path: "/", view: View::Sth },
        Route { path: "/", view: View::Home },
    ]);
    assert_eq!(table.lookup("/"), Some(View::Sth));
}
