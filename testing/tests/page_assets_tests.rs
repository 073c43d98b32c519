//! Tests of page asset registration alongside a built context

#![allow(clippy::unwrap_used)] // Tests can unwrap

use backoffice_core::{LegacyContextConfig, PageAssets};
use backoffice_testing::{IdentityMediaResolver, carts_request, test_builder};
use std::sync::Arc;

#[tokio::test]
async fn test_controller_assets_follow_override_folder() {
    let controller = test_builder(LegacyContextConfig::new("/srv/shop"))
        .build(&carts_request())
        .await
        .unwrap();
    let mut assets = PageAssets::new(Arc::new(IdentityMediaResolver));

    assets.add_css("/admin-dev/themes/default/css/admin-theme.css", "all", None, true);
    assets.add_css(
        &format!("/override/{}carts.css", controller.override_folder()),
        "all",
        None,
        true,
    );
    assets.add_js("/admin-dev/themes/default/js/admin.js?v=8.1.0", true);
    assets.add_js("/admin-dev/themes/default/js/admin.js?v=8.1.1", true);

    let css: Vec<&str> = assets.css_files().keys().map(String::as_str).collect();
    assert_eq!(
        css,
        vec![
            "/admin-dev/themes/default/css/admin-theme.css",
            "/override/carts_controller/carts.css",
        ]
    );
    assert_eq!(
        assets.js_files(),
        ["/admin-dev/themes/default/js/admin.js?v=8.1.0"]
    );
}

#[test]
fn test_assets_serialize_without_resolver() {
    let mut assets = PageAssets::new(Arc::new(IdentityMediaResolver));
    assets.add_css("/print.css", "print", None, false);

    let json = serde_json::to_value(&assets).unwrap();
    assert_eq!(json["css_files"]["/print.css"], "print");
    assert!(json.get("resolver").is_none());
}
