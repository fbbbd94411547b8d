use crate::domain::ports::ConfigSource;

/// Consults sources in order. The first non-empty value wins, so an empty
/// variable in an earlier layer does not hide a later one.
#[derive(Default)]
pub struct LayeredSource {
    layers: Vec<Box<dyn ConfigSource>>,
}

impl LayeredSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.layers.push(Box::new(source));
        self
    }

    pub fn push<S: ConfigSource + 'static>(&mut self, source: S) {
        self.layers.push(Box::new(source));
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Value plus the name of the layer that supplied it.
    pub fn lookup_with_origin(&self, name: &str) -> Option<(String, &str)> {
        self.layers.iter().find_map(|layer| {
            layer
                .lookup(name)
                .filter(|v| !v.is_empty())
                .map(|v| (v, layer.source_name()))
        })
    }

    pub fn origin_of(&self, name: &str) -> Option<&str> {
        self.lookup_with_origin(name).map(|(_, origin)| origin)
    }
}

impl ConfigSource for LayeredSource {
    fn lookup(&self, name: &str) -> Option<String> {
        self.lookup_with_origin(name).map(|(value, _)| value)
    }

    fn source_name(&self) -> &str {
        "layered"
    }
}
