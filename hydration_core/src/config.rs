//! Configuration (`spec.md` §6, §10.3).

use oco_ref::Oco;

/// Call-site options forwarded to the external rendering platform.
///
/// None of these fields are read by this crate (`spec.md` §6:
/// "forwarded to the rendering platform and not interpreted by the
/// core"). The type exists only so callers building a request to the
/// platform have something typed to assemble, rather than an untyped map.
#[derive(Debug, Clone, Default)]
pub struct PlatformOptions {
    pub app_id: Option<Oco<'static, str>>,
    pub document: Option<Oco<'static, str>>,
    pub url: Option<Oco<'static, str>>,
}

/// The subset of configuration this crate actually interprets.
#[derive(Debug, Clone)]
pub struct SerializeConfig {
    /// Written as `ng-server-context` on every top-level bootstrapped host
    /// (`spec.md` §6). Sanitized on use; see [`crate::host_writer::sanitize_context`].
    pub server_context: Oco<'static, str>,
    /// The well-known transfer-state key the annotation table is written
    /// under (`spec.md` §6, e.g. `"nghData"`).
    pub transfer_state_key: Oco<'static, str>,
}

impl Default for SerializeConfig {
    fn default() -> Self {
        Self {
            server_context: "other".into(),
            transfer_state_key: "nghData".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_wire_contract() {
        let config = SerializeConfig::default();
        assert_eq!(config.server_context.as_ref(), "other");
        assert_eq!(config.transfer_state_key.as_ref(), "nghData");
    }
}
