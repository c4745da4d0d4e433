/// Read access to environment variables
///
/// Implementations can read the OS environment, a fixed map, or any other
/// key/value source. Reads must not mutate the source.
pub trait EnvironmentSource: Send + Sync {
    /// Value of `key`, or `None` when it is not set
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key`, or `default` when it is not set
    fn var_or(&self, key: &str, default: &str) -> String {
        self.var(key).unwrap_or_else(|| default.to_string())
    }
}

impl<T: EnvironmentSource + ?Sized> EnvironmentSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
