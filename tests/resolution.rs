//! Route resolution against the built-in tables.

use view_router::config::{parse_config, Preset};
use view_router::lifecycle::build_router;
use view_router::routing::{ParamValue, RouteMatch};

mod common;

const ADMIN_NAMES: &[&str] = &["Home", "GetUser", "DelUser", "InsUser", "EdiUser"];

#[test]
fn test_root_resolves_home_on_both_tables() {
    for preset in [Preset::Site, Preset::Admin] {
        let route = common::preset_router(preset).resolve("/");
        assert_eq!(route.view.id(), "Home");
        assert!(!route.view.is_lazy());
        assert_eq!(route.name.as_deref(), Some("Home"));
        assert_eq!(route.redirected_from, None);
    }
}

#[test]
fn test_site_unknown_redirects_home() {
    let router = common::preset_router(Preset::Site);

    match router.match_path("/unknown/thing") {
        RouteMatch::Redirect { to, .. } => assert_eq!(to, "/"),
        other => panic!("expected redirect, got {:?}", other),
    }

    let route = router.resolve("/unknown/thing");
    assert_eq!(route.view.id(), "Home");
    assert_eq!(route.path, "/");
    assert_eq!(route.redirected_from.as_deref(), Some("/unknown/thing"));
}

#[test]
fn test_admin_lazy_view() {
    let route = common::preset_router(Preset::Admin).resolve("/GetUser");
    assert_eq!(route.view.id(), "GetUser");
    assert!(route.view.is_lazy());
    assert!(!route.view.is_loaded());
}

#[test]
fn test_admin_unknown_renders_not_found() {
    let router = common::preset_router(Preset::Admin);

    for path in ["/nope", "/GetUser/1", "/getuser", "/a/b/c"] {
        let route = router.resolve(path);
        assert_eq!(route.view.id(), "NotFound", "path {}", path);
        assert_eq!(route.redirected_from, None);
        assert_eq!(route.path, path);
    }

    let route = router.resolve("/a/b/c");
    assert_eq!(
        route.params.get("pathMatch"),
        Some(&ParamValue::Many(vec!["a".into(), "b".into(), "c".into()]))
    );
}

#[test]
fn test_fallback_policies_differ() {
    let site = common::preset_router(Preset::Site).resolve("/missing");
    let admin = common::preset_router(Preset::Admin).resolve("/missing");

    assert_eq!(site.view.id(), "Home");
    assert!(site.redirected_from.is_some());
    assert_eq!(admin.view.id(), "NotFound");
    assert!(admin.redirected_from.is_none());
}

#[test]
fn test_named_routes_resolve_to_literal_paths() {
    let router = common::preset_router(Preset::Admin);
    for name in ADMIN_NAMES {
        let path = router.path_for(name).unwrap();
        let expected = if *name == "Home" { "/".to_string() } else { format!("/{}", name) };
        assert_eq!(path, expected);
        assert_eq!(router.resolve_named(name).unwrap().view.id(), *name);
    }
}

#[test]
fn test_names_unique_per_table() {
    let router = common::preset_router(Preset::Admin);
    let mut names: Vec<_> = router.routes().iter().filter_map(|r| r.name()).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn test_resolution_is_idempotent() {
    for preset in [Preset::Site, Preset::Admin] {
        let router = common::preset_router(preset);
        for path in ["/", "/GetUser", "/unknown/thing", "/EdiUser?id=3#form"] {
            assert_eq!(router.resolve(path), router.resolve(path));
        }
    }
}

#[test]
fn test_query_and_hash_carried() {
    let route = common::preset_router(Preset::Admin).resolve("/EdiUser?id=3#form");
    assert_eq!(route.view.id(), "EdiUser");
    assert_eq!(route.query, vec![("id".to_string(), "3".to_string())]);
    assert_eq!(route.hash.as_deref(), Some("form"));
    assert_eq!(route.full_path(), "/EdiUser?id=3#form");
}

#[test]
fn test_config_files_match_builtin_tables() {
    let site = parse_config(include_str!("../config/site.toml")).unwrap();
    let admin = parse_config(include_str!("../config/admin.toml")).unwrap();

    assert_eq!(site.routes, view_router::apps::site::routes());
    assert_eq!(admin.routes, view_router::apps::admin::routes());

    let router = build_router(&admin).unwrap();
    assert_eq!(router.resolve("/nope").view.id(), "NotFound");
}

#[test]
fn test_relaxed_matching_from_config() {
    let config = parse_config(
        r#"
        [app]
        preset = "admin"

        [matching]
        case_sensitive = false
        strict = false
        "#,
    )
    .unwrap();

    let router = build_router(&config).unwrap();
    assert_eq!(router.resolve("/getuser/").view.id(), "GetUser");
}

#[test]
fn test_json_output_shape() {
    let route = common::preset_router(Preset::Admin).resolve("/GetUser");
    let value = serde_json::to_value(&route).unwrap();
    assert_eq!(value["view"]["id"], "GetUser");
    assert_eq!(value["view"]["lazy"], true);
    assert_eq!(value["path"], "/GetUser");
}
