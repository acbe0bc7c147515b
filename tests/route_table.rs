//! Behaviour of the built-in route table through the public API.

use runepage_router::routing::builtin::route_configs;
use runepage_router::{AppConfig, Navigator, Params, RouteError, RouteTable};

fn builtin() -> RouteTable {
    RouteTable::from_config(&route_configs()).unwrap()
}

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_root_resolves_to_main() {
    let table = builtin();
    let m = table.resolve("/").unwrap();
    assert_eq!(m.name, "Main");
    assert_eq!(m.component.as_str(), "Main");
    assert!(m.params.is_empty());
}

#[test]
fn test_champ_binds_parameter() {
    let table = builtin();
    let m = table.resolve("/champ/Ashe").unwrap();
    assert_eq!(m.name, "Champ");
    assert_eq!(m.params, params(&[("champ", "Ashe")]));
}

#[test]
fn test_rune_page_mounts_edit() {
    let table = builtin();
    let m = table.resolve("/page/abc123").unwrap();
    assert_eq!(m.name, "RunePage");
    assert_eq!(m.component.as_str(), "Edit");
    assert_eq!(m.params, params(&[("uid", "abc123")]));
}

#[test]
fn test_static_routes() {
    let table = builtin();
    for (path, name) in [
        ("/login", "Login"),
        ("/pages", "Pages"),
        ("/settings", "Settings"),
    ] {
        assert_eq!(table.resolve(path).unwrap().name, name, "path {path}");
    }
}

#[test]
fn test_unknown_path_is_no_match() {
    let table = builtin();
    for path in ["/does/not/exist", "/champ", "/champ/Ashe/runes", "/pages/", "/LOGIN"] {
        assert_eq!(
            table.resolve(path),
            Err(RouteError::NoMatch { path: path.into() }),
            "path {path}"
        );
    }
}

#[test]
fn test_share_requires_ident() {
    assert_eq!(
        builtin().reverse("Share", &Params::new()),
        Err(RouteError::MissingParameter {
            route: "Share".into(),
            param: "ident".into()
        })
    );
}

#[test]
fn test_unknown_route_name() {
    assert_eq!(
        builtin().reverse("Nope", &Params::new()),
        Err(RouteError::UnknownRouteName {
            name: "Nope".into()
        })
    );
}

#[test]
fn test_reverse_then_resolve_round_trips() {
    let table = builtin();
    let cases = [
        ("Main", params(&[])),
        ("Login", params(&[])),
        ("Champ", params(&[("champ", "Kai'Sa")])),
        ("RunePage", params(&[("uid", "1234567890")])),
        ("Pages", params(&[])),
        ("Settings", params(&[])),
        ("Share", params(&[("ident", "aB3xY")])),
    ];
    assert_eq!(cases.len(), table.len());

    for (name, p) in cases {
        let path = table.reverse(name, &p).unwrap();
        let m = table.resolve(&path).unwrap();
        assert_eq!(m.name, name);
        assert_eq!(m.params, p);
    }
}

#[test]
fn test_overlapping_routes_follow_declaration_order() {
    let param_first = RouteTable::builder()
        .route("/page/:uid", "RunePage", "Edit")
        .route("/page/new", "NewPage", "Edit")
        .build()
        .unwrap();
    assert_eq!(param_first.resolve("/page/new").unwrap().name, "RunePage");

    let literal_first = RouteTable::builder()
        .route("/page/new", "NewPage", "Edit")
        .route("/page/:uid", "RunePage", "Edit")
        .build()
        .unwrap();
    assert_eq!(literal_first.resolve("/page/new").unwrap().name, "NewPage");
    assert_eq!(literal_first.resolve("/page/abc").unwrap().name, "RunePage");
}

#[test]
fn test_table_is_shareable_across_threads() {
    let navigator = std::sync::Arc::new(Navigator::from_config(&AppConfig::default()).unwrap());

    let handles: Vec<_> = ["Ashe", "Jinx", "Lux", "Zed"]
        .into_iter()
        .map(|champ| {
            let navigator = navigator.clone();
            std::thread::spawn(move || {
                let path = format!("/champ/{champ}");
                let mount = navigator.navigate(&path).unwrap();
                assert_eq!(mount.params.get("champ").map(String::as_str), Some(champ));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
