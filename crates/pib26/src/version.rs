//! Version information.

#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
