use trie_router::{HttpMethod, ReadOnlyError, Router, RouterError};

#[test]
fn router_when_static_route_registered_then_returns_match() {
    let router: Router<&str> = Router::new(None);
    let key = router
        .add(HttpMethod::Get, "/hello", "hello")
        .expect("static route should register");
    router.seal();

    let found = router
        .find(HttpMethod::Get, "/hello")
        .expect("static route should match");

    assert_eq!(found.key, key);
    assert_eq!(found.handler, "hello");
    assert_eq!(found.pattern, "/hello");
    assert!(found.params.is_empty());
    assert!(found.middlewares.is_empty());
}

#[test]
fn router_when_root_route_registered_then_scores_zero() {
    let router: Router<&str> = Router::new(None);
    router
        .add(HttpMethod::Get, "/", "root")
        .expect("root route should register");
    router.seal();

    let found = router
        .find(HttpMethod::Get, "/")
        .expect("root route should match");

    assert_eq!(found.handler, "root");
    assert_eq!(found.priority, 0);
}

#[test]
fn router_when_similar_static_routes_registered_then_only_exact_text_matches() {
    let router: Router<&str> = Router::new(None);
    for route in ["/hi", "/contact", "/co", "/c", "/a", "/ab", "/doc/", "/doc/go_faq.html", "/doc/go1.html"] {
        router
            .add(HttpMethod::Get, route, route)
            .expect("route should register");
    }
    router.seal();

    for (path, expected) in [
        ("/a", Some("/a")),
        ("/hi", Some("/hi")),
        ("/contact", Some("/contact")),
        ("/co", Some("/co")),
        ("/con", None),
        ("/cona", None),
        ("/no", None),
        ("/ab", Some("/ab")),
        ("/doc", Some("/doc/")),
        ("/doc/go1.html", Some("/doc/go1.html")),
        ("/", None),
    ] {
        let result = router.find(HttpMethod::Get, path).ok().map(|m| m.handler);
        assert_eq!(result, expected, "unexpected result for {path}");
    }
}

#[test]
fn router_when_multiple_methods_share_path_then_each_resolves_to_its_route() {
    let router: Router<&str> = Router::new(None);
    let get_key = router
        .add(HttpMethod::Get, "/status", "get")
        .expect("GET route should register");
    let post_key = router
        .add(HttpMethod::Post, "/status", "post")
        .expect("POST route should register");
    assert_ne!(get_key, post_key);
    router.seal();

    let found = router
        .find(HttpMethod::Get, "/status")
        .expect("GET /status should match");
    assert_eq!(found.key, get_key);

    let found = router
        .find(HttpMethod::Post, "/status")
        .expect("POST /status should match");
    assert_eq!(found.key, post_key);
}

#[test]
fn router_when_path_is_absent_then_returns_not_found() {
    let router: Router<&str> = Router::new(None);
    router.add(HttpMethod::Get, "/user", "user").expect("route should register");
    router.add(HttpMethod::Get, "/user/:id", "show").expect("route should register");
    router.seal();

    let err = router.find(HttpMethod::Get, "/other");
    match err.expect_err("expected route not found") {
        RouterError::ReadOnly(ReadOnlyError::RouteNotFound { method, path }) => {
            assert_eq!(method, HttpMethod::Get);
            assert_eq!(path, "/other");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_method_is_not_registered_then_returns_method_not_allowed() {
    let router: Router<&str> = Router::new(None);
    router.add(HttpMethod::Get, "/status", "get").expect("route should register");
    router.add(HttpMethod::Delete, "/status", "delete").expect("route should register");
    router.seal();

    let err = router.find(HttpMethod::Post, "/status");
    match err.expect_err("expected method not allowed") {
        RouterError::ReadOnly(ReadOnlyError::MethodNotAllowed {
            method,
            path,
            allowed,
        }) => {
            assert_eq!(method, HttpMethod::Post);
            assert_eq!(path, "/status");
            assert_eq!(allowed, vec![HttpMethod::Get, HttpMethod::Delete]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_other_candidate_serves_method_then_method_not_allowed_is_not_reported() {
    let router: Router<&str> = Router::new(None);
    router.add(HttpMethod::Get, "/user/:id", "show").expect("route should register");
    router.add(HttpMethod::Post, "/user/edit", "edit").expect("route should register");
    router.seal();

    let found = router
        .find(HttpMethod::Get, "/user/edit")
        .expect("param route should serve GET");
    assert_eq!(found.handler, "show");
    assert_eq!(found.params.get("id"), Some("edit"));

    let found = router
        .find(HttpMethod::Post, "/user/edit")
        .expect("static route should serve POST");
    assert_eq!(found.handler, "edit");

    let err = router.find(HttpMethod::Post, "/user/7");
    match err.expect_err("expected method not allowed") {
        RouterError::ReadOnly(ReadOnlyError::MethodNotAllowed { allowed, .. }) => {
            assert_eq!(allowed, vec![HttpMethod::Get]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_request_path_is_malformed_then_returns_not_found() {
    let router: Router<&str> = Router::new(None);
    router.add(HttpMethod::Get, "/hello", "hello").expect("route should register");
    router.seal();

    for path in ["", "hello", "/hel lo"] {
        match router.find(HttpMethod::Get, path).expect_err("expected miss") {
            RouterError::ReadOnly(ReadOnlyError::RouteNotFound { .. }) => {}
            other => panic!("unexpected error for {path:?}: {other:?}"),
        }
    }
}

#[test]
fn router_when_lookup_fails_then_error_message_names_method_and_path() {
    let router: Router<&str> = Router::new(None);
    router.add(HttpMethod::Get, "/status", "get").expect("route should register");
    router.seal();

    let err = router.find(HttpMethod::Patch, "/status").expect_err("lookup should fail");
    let message = err.to_string();
    assert!(message.contains("PATCH"), "{message}");
    assert!(message.contains("/status"), "{message}");
}
