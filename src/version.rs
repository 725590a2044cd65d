/// Test resources version baked in at build time from
/// `TEST_RESOURCES_VERSION`.
///
/// Without that variable this is a stand-in: the version of this crate,
/// which does not name a published test resources release. Build-tool
/// integrations should set the variable or pass an explicit version.
pub const CURRENT_VERSION: &str = match option_env!("TEST_RESOURCES_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Default version for synthesized support modules when the caller does
/// not override it.
pub fn current() -> &'static str {
    CURRENT_VERSION
}

/// Whether `current()` comes from `TEST_RESOURCES_VERSION` rather than
/// the crate version fallback.
pub fn is_configured() -> bool {
    option_env!("TEST_RESOURCES_VERSION").is_some()
}
