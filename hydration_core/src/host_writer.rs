//! Host Annotation Writer (`spec.md` §4.7).

/// A host DOM element the writer can attach string attributes to.
///
/// The concrete element type belongs to the external rendering platform;
/// this crate only ever calls `set_attribute`.
pub trait HostElement {
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Strips `context` down to `[a-zA-Z0-9-]+`, falling back to `"other"` if
/// that leaves nothing (`spec.md` §6).
pub fn sanitize_context(context: &str) -> String {
    let sanitized: String = context
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if sanitized.is_empty() {
        "other".to_string()
    } else {
        sanitized
    }
}

/// Writes the two host-level attributes `spec.md` §4.7 and §6 specify.
pub struct HostAnnotationWriter;

impl HostAnnotationWriter {
    /// Sets `ngh="<key>"` on a component host, where `key` is the decimal
    /// index assigned by the [`crate::store::AnnotationStore`].
    pub fn write_ngh(host: &mut impl HostElement, key: usize) {
        host.set_attribute("ngh", &key.to_string());
    }

    /// Sets `ng-server-context="<tag>"` on a top-level bootstrapped host,
    /// sanitizing `context` first.
    pub fn write_server_context(host: &mut impl HostElement, context: &str) {
        host.set_attribute("ng-server-context", &sanitize_context(context));
    }
}
