// Adapters layer: concrete ConfigSource implementations (process env, in-memory, TOML file, layering).

pub mod env;
pub mod layered;
pub mod memory;
pub mod toml_file;

pub use env::EnvSource;
pub use layered::LayeredSource;
pub use memory::MapSource;
pub use toml_file::TomlFileSource;
