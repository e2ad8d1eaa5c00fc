//! Environment lookup port.

/// Read access to the two places configuration can come from.
pub trait EnvironmentSource {
    /// Value captured when the binary was compiled.
    fn build_var(&self, name: &str) -> Option<String>;

    /// Value set in the running process environment.
    fn process_var(&self, name: &str) -> Option<String>;
}
