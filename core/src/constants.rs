//! Constants shared by the context builder and its integrations.

/// Request attribute set by the router when a route is served by a legacy controller.
pub const LEGACY_CONTROLLER_ATTRIBUTE: &str = "_legacy_controller";

/// Query parameter carrying the controller name on legacy admin URLs.
pub const CONTROLLER_QUERY_PARAMETER: &str = "controller";

/// Controller name used when the request names no controller at all.
pub const DEFAULT_CONTROLLER: &str = "AdminController";

/// Lifetime of the back-office auth cookie, in seconds.
pub const AUTH_COOKIE_LIFETIME: u64 = 3600;

/// Controllers whose UI always stays tied to a single shop.
///
/// Carts and customer threads carry shop-scoped child records, so their
/// shop-link type is `"shop"` whatever the multistore state is.
pub const SHOP_BOUND_CONTROLLERS: [&str; 2] = ["AdminCartsController", "AdminCustomerThreadsController"];

/// Number of leading characters (`Admin`) dropped before building the override folder.
pub(crate) const CONTROLLER_PREFIX_LEN: usize = 5;
