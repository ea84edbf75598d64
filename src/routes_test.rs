use super::*;

#[test]
fn pkg_dir_joins_site_root() {
    assert_eq!(pkg_dir(Path::new("target/site"), "pkg"), PathBuf::from("target/site/pkg"));
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn base_routes_builds() {
    let _router: Router = base_routes();
}
