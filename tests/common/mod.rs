//! Mock node types shared by the integration tests.

#![allow(dead_code)]

use restext::{EnumMask, Field, Persistable, ResourceId, RestextError, Result};

/// A leaf node with three scalar fields: `gpu` (unsigned), `logLevel`
/// (enum, legacy alias `lvl`) and `debug` (bool).
pub struct ConfigNode {
    id: ResourceId,
    gpu: Field<u32>,
    log_level: Field<EnumMask>,
    debug: Field<bool>,
}

impl ConfigNode {
    pub fn new() -> Self {
        Self {
            id: ResourceId::allocate(),
            gpu: Field::new(u32::MAX, "gpu", &[]),
            log_level: Field::new(EnumMask(6), "logLevel", &["lvl"]),
            debug: Field::new(false, "debug", &[]),
        }
    }

    pub fn gpu(&self) -> u32 {
        *self.gpu.get()
    }

    pub fn set_gpu(&mut self, value: u32) {
        self.gpu.set(value);
    }

    pub fn log_level(&self) -> EnumMask {
        *self.log_level.get()
    }

    pub fn set_log_level(&mut self, value: EnumMask) {
        self.log_level.set(value);
    }

    pub fn debug(&self) -> bool {
        *self.debug.get()
    }

    pub fn set_debug(&mut self, value: bool) {
        self.debug.set(value);
    }
}

impl Persistable for ConfigNode {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn type_tag(&self) -> &str {
        "cfg"
    }

    fn keys(&self) -> Vec<String> {
        vec!["gpu".into(), "logLevel".into(), "debug".into()]
    }

    fn get_field(&self, key: &str) -> Result<String> {
        match key {
            "gpu" => Ok(self.gpu.encode()),
            "logLevel" => Ok(self.log_level.encode()),
            "debug" => Ok(self.debug.encode()),
            other => Err(RestextError::UnknownKey(other.into())),
        }
    }

    fn set_field(&mut self, key: &str, text: &str) -> Result<()> {
        if let Some(res) = self.gpu.try_assign(key, text) {
            return res;
        }
        if let Some(res) = self.log_level.try_assign(key, text) {
            return res;
        }
        if let Some(res) = self.debug.try_assign(key, text) {
            return res;
        }
        Err(RestextError::UnknownKey(key.into()))
    }

    fn is_subresource(&self, _key: &str) -> bool {
        false
    }

    fn subresource(&self, key: &str) -> Result<&dyn Persistable> {
        Err(RestextError::InvalidSubresource(key.into()))
    }

    fn subresource_mut(&mut self, key: &str) -> Result<&mut dyn Persistable> {
        Err(RestextError::InvalidSubresource(key.into()))
    }
}

/// A parent node owning one `ConfigNode` under the `entries` key.
///
/// The key is always declared; writing fails while no child exists, and the
/// reader's fetch-or-create access constructs one on demand.
pub struct ProjectNode {
    id: ResourceId,
    name: Field<String>,
    entries: Vec<ConfigNode>,
}

impl ProjectNode {
    pub fn new() -> Self {
        Self {
            id: ResourceId::allocate(),
            name: Field::new(String::from("demo"), "name", &[]),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.get()
    }

    pub fn set_name(&mut self, value: String) {
        self.name.set(value);
    }

    pub fn push_entry(&mut self, entry: ConfigNode) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ConfigNode] {
        &self.entries
    }
}

impl Persistable for ProjectNode {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn type_tag(&self) -> &str {
        "proj"
    }

    fn keys(&self) -> Vec<String> {
        vec!["name".into(), "entries".into()]
    }

    fn get_field(&self, key: &str) -> Result<String> {
        match key {
            "name" => Ok(self.name.encode()),
            other => Err(RestextError::UnknownKey(other.into())),
        }
    }

    fn set_field(&mut self, key: &str, text: &str) -> Result<()> {
        if let Some(res) = self.name.try_assign(key, text) {
            return res;
        }
        Err(RestextError::UnknownKey(key.into()))
    }

    fn is_subresource(&self, key: &str) -> bool {
        key == "entries"
    }

    fn subresource(&self, key: &str) -> Result<&dyn Persistable> {
        if key == "entries" {
            if let Some(first) = self.entries.first() {
                return Ok(first);
            }
        }
        Err(RestextError::InvalidSubresource(key.into()))
    }

    fn subresource_mut(&mut self, key: &str) -> Result<&mut dyn Persistable> {
        if key != "entries" {
            return Err(RestextError::InvalidSubresource(key.into()));
        }
        if self.entries.is_empty() {
            self.entries.push(ConfigNode::new());
        }
        match self.entries.first_mut() {
            Some(first) => Ok(first),
            None => Err(RestextError::InvalidSubresource(key.into())),
        }
    }
}

/// A list-backed parent exposing one key per element (`item0`, `item1`, …)
/// derived from its current length. Reading a longer document grows the
/// list through `subresource_mut`.
pub struct ManifestNode {
    id: ResourceId,
    items: Vec<ConfigNode>,
}

impl ManifestNode {
    pub fn new() -> Self {
        Self {
            id: ResourceId::allocate(),
            items: Vec::new(),
        }
    }

    pub fn push_item(&mut self, item: ConfigNode) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[ConfigNode] {
        &self.items
    }

    fn index_of(key: &str) -> Option<usize> {
        key.strip_prefix("item")?.parse().ok()
    }
}

impl Persistable for ManifestNode {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn type_tag(&self) -> &str {
        "mani"
    }

    fn keys(&self) -> Vec<String> {
        (0..self.items.len()).map(|i| format!("item{i}")).collect()
    }

    fn get_field(&self, key: &str) -> Result<String> {
        Err(RestextError::UnknownKey(key.into()))
    }

    fn set_field(&mut self, key: &str, _text: &str) -> Result<()> {
        Err(RestextError::UnknownKey(key.into()))
    }

    fn is_subresource(&self, key: &str) -> bool {
        Self::index_of(key).is_some()
    }

    fn subresource(&self, key: &str) -> Result<&dyn Persistable> {
        let index = Self::index_of(key)
            .ok_or_else(|| RestextError::InvalidSubresource(key.into()))?;
        match self.items.get(index) {
            Some(item) => Ok(item),
            None => Err(RestextError::InvalidSubresource(key.into())),
        }
    }

    fn subresource_mut(&mut self, key: &str) -> Result<&mut dyn Persistable> {
        let index = Self::index_of(key)
            .ok_or_else(|| RestextError::InvalidSubresource(key.into()))?;
        while self.items.len() <= index {
            self.items.push(ConfigNode::new());
        }
        match self.items.get_mut(index) {
            Some(item) => Ok(item),
            None => Err(RestextError::InvalidSubresource(key.into())),
        }
    }
}
