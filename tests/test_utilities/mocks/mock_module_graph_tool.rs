use gomoderator::prelude::*;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ModuleGraphTool simulating two go.mod files in memory
///
/// The core graph never changes. Plugin edits update the plugin graph,
/// except for modules marked as pinned (ignore requirement edits) or
/// immovable (ignore every edit).
#[derive(Clone)]
pub struct MockModuleGraphTool {
    core_dir: PathBuf,
    core: BTreeMap<String, String>,
    plugin: Arc<Mutex<BTreeMap<String, String>>>,
    extra_plugin_records: Vec<String>,
    pinned: HashSet<String>,
    immovable: HashSet<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockModuleGraphTool {
    pub fn new(core_dir: impl Into<PathBuf>) -> Self {
        Self {
            core_dir: core_dir.into(),
            core: BTreeMap::new(),
            plugin: Arc::new(Mutex::new(BTreeMap::new())),
            extra_plugin_records: Vec::new(),
            pinned: HashSet::new(),
            immovable: HashSet::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_core_module(mut self, module: &str, version: &str) -> Self {
        self.core.insert(module.to_string(), version.to_string());
        self
    }

    pub fn with_plugin_module(self, module: &str, version: &str) -> Self {
        self.plugin
            .lock()
            .unwrap()
            .insert(module.to_string(), version.to_string());
        self
    }

    /// Appends a raw line to every plugin listing
    pub fn with_plugin_record(mut self, record: &str) -> Self {
        self.extra_plugin_records.push(record.to_string());
        self
    }

    /// A requirement edit for `module` is accepted but has no effect
    pub fn pinned(mut self, module: &str) -> Self {
        self.pinned.insert(module.to_string());
        self
    }

    /// No edit ever moves `module`
    pub fn immovable(mut self, module: &str) -> Self {
        self.immovable.insert(module.to_string());
        self
    }

    pub fn plugin_version(&self, module: &str) -> Option<String> {
        self.plugin.lock().unwrap().get(module).cloned()
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutation_calls(&self) -> Vec<String> {
        self.get_calls()
            .into_iter()
            .filter(|call| !call.starts_with("list"))
            .collect()
    }

    fn listing(main_module: &str, modules: &BTreeMap<String, String>, extra: &[String]) -> String {
        let mut lines = vec![main_module.to_string()];
        lines.extend(modules.iter().map(|(m, v)| format!("{} {}", m, v)));
        lines.extend(extra.iter().cloned());
        lines.join("\n") + "\n"
    }

    fn edit(&self, module: &str, version: &str, honor_pins: bool) {
        if self.immovable.contains(module) || (honor_pins && self.pinned.contains(module)) {
            return;
        }
        self.plugin
            .lock()
            .unwrap()
            .insert(module.to_string(), version.to_string());
    }
}

impl ModuleGraphTool for MockModuleGraphTool {
    fn list_modules(&self, project_dir: &Path) -> Result<String> {
        if project_dir == self.core_dir {
            self.calls.lock().unwrap().push("list core".to_string());
            Ok(Self::listing("example.com/core", &self.core, &[]))
        } else {
            self.calls.lock().unwrap().push("list plugin".to_string());
            let plugin = self.plugin.lock().unwrap().clone();
            Ok(Self::listing(
                "example.com/plugin",
                &plugin,
                &self.extra_plugin_records,
            ))
        }
    }

    fn require(&self, _project_dir: &Path, module: &str, version: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("go mod edit -require={}@{}", module, version));
        self.edit(module, version, true);
        Ok(())
    }

    fn upgrade(&self, _project_dir: &Path, module: &str, version: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("go get {}@{}", module, version));
        self.edit(module, version, false);
        Ok(())
    }
}
