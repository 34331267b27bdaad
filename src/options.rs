use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub ignore_file: Option<PathBuf>,
    pub raw: bool,
}
impl Default for MapOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("codebase_map.md"),
            ignore_file: None,
            raw: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct MapBuilder {
    options: MapOptions,
}
impl MapBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: MapOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn ignore_file(mut self, path: Option<PathBuf>) -> Self {
        self.options.ignore_file = path;
        self
    }
    pub fn raw(mut self, yes: bool) -> Self {
        self.options.raw = yes;
        self
    }
    pub fn build(self) -> MapOptions {
        self.options
    }
}
