//! End-to-end tests of the legacy controller context builder

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use backoffice_core::messages::{CONF_MESSAGES, ROOT_CATEGORY_ERROR};
use backoffice_core::{
    CONTROLLER_QUERY_PARAMETER, ContextError, ControllerKind, ControllerSlot, DEFAULT_CONTROLLER,
    LegacyContextConfig, LegacyControllerContextBuilder, RequestParameters, SaltedTokenGenerator,
    ShopConstraint, ShopLinkType, TabLookupError, TokenGenerator,
};
use backoffice_testing::helpers::{CARTS_TAB_ID, TEST_EMPLOYEE_ID, TEST_SHOP_NAME};
use backoffice_testing::properties::any_controller_name;
use backoffice_testing::{
    EchoTranslator, InMemoryTabRepository, RecordingStateManager, carts_request, environment_with,
    init_tracing, routed_request, test_builder, test_tabs,
};
use proptest::prelude::*;
use std::sync::Arc;

fn locked_carts_config() -> LegacyContextConfig {
    LegacyContextConfig::new("coreDir")
        .with_locked_controllers(["AdminCartsController"])
        .with_cookie_key("cookie-key")
}

#[tokio::test]
async fn test_carts_controller_context() {
    init_tracing();
    let builder = test_builder(locked_carts_config());
    let mut state = RecordingStateManager::new();

    builder
        .build_legacy_context(&carts_request(), &mut state)
        .await
        .unwrap();

    let controller = state.last().expect("controller registered");
    assert_eq!(controller.controller_name(), "AdminCartsController");
    assert_eq!(controller.php_self(), "AdminCartsController");
    assert_eq!(controller.kind(), ControllerKind::Admin);
    assert_eq!(controller.class_name(), Some("Cart"));
    assert_eq!(controller.id(), CARTS_TAB_ID);
    assert_eq!(controller.multishop_context(), ShopConstraint::ALL_SHOPS);
    assert_eq!(controller.shop_link_type(), ShopLinkType::Shop);
    assert_eq!(controller.override_folder(), "carts_controller/");
    assert_eq!(controller.tpl_folder(), "carts_controller/");
    assert_eq!(controller.admin_webpath(), None);
    assert_eq!(controller.conf().len(), CONF_MESSAGES.len());
}

#[tokio::test]
async fn test_unlocked_controller_accepts_any_scope() {
    let builder = test_builder(locked_carts_config());

    let controller = builder
        .build(&routed_request("AdminOrdersController"))
        .await
        .unwrap();

    assert_eq!(controller.class_name(), Some("Order"));
    assert_eq!(
        controller.multishop_context(),
        ShopConstraint::SHOP | ShopConstraint::SHOP_GROUP | ShopConstraint::ALL_SHOPS
    );
    assert_eq!(controller.shop_link_type(), ShopLinkType::SingleShop);
    assert_eq!(controller.override_folder(), "orders_controller/");
}

#[tokio::test]
async fn test_multistore_unconstrains_shop_link() {
    let builder = test_builder(locked_carts_config().with_multistore(true));

    let orders = builder
        .build(&routed_request("AdminOrdersController"))
        .await
        .unwrap();
    let threads = builder
        .build(&routed_request("AdminCustomerThreadsController"))
        .await
        .unwrap();

    assert_eq!(orders.shop_link_type(), ShopLinkType::Unconstrained);
    assert_eq!(threads.shop_link_type(), ShopLinkType::Shop);
    assert_eq!(threads.class_name(), Some("CustomerThread"));
}

#[tokio::test]
async fn test_controller_from_query_parameter() {
    let builder = test_builder(locked_carts_config());
    let request = RequestParameters::from_query_pairs([
        (CONTROLLER_QUERY_PARAMETER, "AdminProductsController"),
        ("token", "ignored"),
    ]);

    let controller = builder.build(&request).await.unwrap();

    assert_eq!(controller.controller_name(), "AdminProductsController");
    assert_eq!(controller.class_name(), Some("Product"));
    assert_eq!(controller.id(), 13);
}

#[tokio::test]
async fn test_default_controller_without_routing_information() {
    let builder = test_builder(locked_carts_config());

    let controller = builder.build(&RequestParameters::new()).await.unwrap();

    assert_eq!(controller.controller_name(), DEFAULT_CONTROLLER);
    assert_eq!(controller.class_name(), None);
    assert_eq!(controller.id(), -1);
    assert!(!controller.has_tab());
}

#[tokio::test]
async fn test_unknown_tab_uses_sentinel() {
    let builder = test_builder(locked_carts_config());

    let controller = builder
        .build(&routed_request("AdminFooBarsController"))
        .await
        .unwrap();

    assert_eq!(controller.id(), -1);
    assert_eq!(controller.class_name(), Some("FooBar"));
}

#[tokio::test]
async fn test_class_name_overrides() {
    let builder = test_builder(locked_carts_config());

    for (controller, class_name) in [
        ("AdminAccessController", "Profile"),
        ("AdminImagesController", "ImageType"),
        ("AdminReturnController", "OrderReturn"),
    ] {
        let context = builder.build(&routed_request(controller)).await.unwrap();
        assert_eq!(context.class_name(), Some(class_name), "{controller}");
    }
}

#[tokio::test]
async fn test_tab_registry_failure_aborts_build() {
    let config = locked_carts_config();
    let tabs = test_tabs();
    let builder = LegacyControllerContextBuilder::new(
        environment_with(&config, tabs.clone(), EchoTranslator::new()),
        config,
    );
    let mut slot = ControllerSlot::default();

    tabs.fail_with("connection refused");
    let err = builder
        .build_legacy_context(&carts_request(), &mut slot)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ContextError::TabRegistry {
            controller: "AdminCartsController".to_string(),
            source: TabLookupError::Backend("connection refused".to_string()),
        }
    );
    assert!(err.is_collaborator_failure());
    assert!(slot.controller().is_none());

    tabs.recover();
    builder
        .build_legacy_context(&carts_request(), &mut slot)
        .await
        .unwrap();
    assert!(slot.controller().is_some());
}

#[tokio::test]
async fn test_translation_failure_aborts_build() {
    let config = locked_carts_config();
    let builder = LegacyControllerContextBuilder::new(
        environment_with(&config, test_tabs(), EchoTranslator::failing()),
        config,
    );
    let mut state = RecordingStateManager::new();

    let err = builder
        .build_legacy_context(&carts_request(), &mut state)
        .await
        .unwrap_err();

    assert!(matches!(err, ContextError::Translation(_)));
    assert!(state.controllers().is_empty());
}

#[tokio::test]
async fn test_admin_token_seed() {
    let config = locked_carts_config();
    let builder = test_builder(config.clone());

    let controller = builder.build(&carts_request()).await.unwrap();

    let expected = SaltedTokenGenerator::new(config.cookie_key)
        .admin_token(&format!("AdminCartsController{CARTS_TAB_ID}{TEST_EMPLOYEE_ID}"))
        .unwrap();
    assert_eq!(controller.token(), Some(expected.as_str()));
    assert_eq!(expected.len(), 64);
}

#[tokio::test]
async fn test_token_uses_sentinel_tab_id() {
    let config = locked_carts_config();
    let builder = test_builder(config.clone());

    let controller = builder
        .build(&routed_request("AdminFooBarsController"))
        .await
        .unwrap();

    let expected = SaltedTokenGenerator::new(config.cookie_key)
        .admin_token(&format!("AdminFooBarsController-1{TEST_EMPLOYEE_ID}"));
    assert_eq!(controller.token(), expected.as_deref());
}

#[tokio::test]
async fn test_message_tables() {
    let builder = test_builder(locked_carts_config());

    let controller = builder.build(&carts_request()).await.unwrap();

    assert_eq!(controller.conf()[&1], "Successful deletion");
    assert_eq!(
        controller.conf()[&32],
        "Successfully signed in to PrestaShop Addons."
    );
    let error = &controller.error()[&ROOT_CATEGORY_ERROR];
    assert!(error.contains(TEST_SHOP_NAME));
    assert!(!error.contains("%shop%"));
    assert_eq!(controller.error().len(), 1);
}

#[cfg(unix)]
#[tokio::test]
async fn test_admin_webpath_relative_to_core_dir() {
    let config = LegacyContextConfig::new("/var/www/Shop").with_admin_dir("/var/www/shop/admin-dev");
    let builder = test_builder(config);

    let controller = builder.build(&carts_request()).await.unwrap();

    assert_eq!(controller.admin_webpath(), Some("admin-dev"));
}

#[tokio::test]
async fn test_builds_are_idempotent() {
    let builder = test_builder(locked_carts_config());

    let first = builder.build(&carts_request()).await.unwrap();
    let second = builder.build(&carts_request()).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_builds_share_one_builder() {
    let tabs = InMemoryTabRepository::new().with_tab("AdminCartsController", CARTS_TAB_ID);
    let config = locked_carts_config();
    let builder = Arc::new(LegacyControllerContextBuilder::new(
        environment_with(&config, tabs.clone(), EchoTranslator::new()),
        config,
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let builder = Arc::clone(&builder);
            tokio::spawn(async move { builder.build(&carts_request()).await })
        })
        .collect();

    for handle in handles {
        let controller = handle.await.unwrap().unwrap();
        assert_eq!(controller.id(), CARTS_TAB_ID);
    }
    assert_eq!(tabs.lookups(), 8);
}

#[tokio::test]
async fn test_context_serializes_for_templates() {
    let builder = test_builder(locked_carts_config());

    let controller = builder.build(&carts_request()).await.unwrap();
    let json = serde_json::to_value(&controller).unwrap();

    assert_eq!(json["controller_name"], "AdminCartsController");
    assert_eq!(json["kind"], "admin");
    assert_eq!(json["shop_link_type"], "shop");
    assert_eq!(json["id"], CARTS_TAB_ID);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_php_self_matches_controller_name(name in any_controller_name()) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let builder = test_builder(locked_carts_config());

        let controller = runtime
            .block_on(builder.build(&routed_request(&name)))
            .unwrap();

        prop_assert_eq!(controller.controller_name(), name.as_str());
        prop_assert_eq!(controller.php_self(), name.as_str());
        prop_assert!(controller.override_folder().ends_with('/'));
        prop_assert_eq!(controller.override_folder(), controller.tpl_folder());
    }
}
