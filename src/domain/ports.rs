/// Read-only lookup of named configuration values.
///
/// The process environment is one implementation; tests and embedding callers
/// inject their own so nothing has to mutate real process state.
pub trait ConfigSource: Send + Sync {
    fn lookup(&self, name: &str) -> Option<String>;

    /// Label used in logs and reports.
    fn source_name(&self) -> &str;
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }

    fn source_name(&self) -> &str {
        (**self).source_name()
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for Box<S> {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }

    fn source_name(&self) -> &str {
        (**self).source_name()
    }
}
