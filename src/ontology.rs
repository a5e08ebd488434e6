use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::Result;

use crate::data::loader::load_ontology;
use crate::data::model::OntologyEntry;
use crate::error::LabelError;

/// Default location of the ontology file, relative to the working directory.
pub const DEFAULT_ONTOLOGY_PATH: &str = "data/ontology.json";

static SHARED: OnceLock<Ontology> = OnceLock::new();

// ---------------------------------------------------------------------------
// Ontology – id → name index over the reference table
// ---------------------------------------------------------------------------

/// The ontology table, indexed by label id.
///
/// Built once and read-only afterwards; every lookup is a hash probe rather
/// than a scan of the file.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    entries: Vec<OntologyEntry>,
    by_id: HashMap<String, usize>,
}

impl Ontology {
    /// Index `entries` by id.  On duplicate ids the first entry wins.
    pub fn from_entries(entries: Vec<OntologyEntry>) -> Self {
        let mut by_id = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if by_id.contains_key(&entry.id) {
                log::warn!("duplicate ontology id {}, keeping first entry", entry.id);
                continue;
            }
            by_id.insert(entry.id.clone(), i);
        }
        Ontology { entries, by_id }
    }

    /// Read and index an ontology JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_entries(load_ontology(path)?))
    }

    /// Process-wide ontology, loaded from `path` on the first call.
    ///
    /// Later calls return the same table and ignore `path`.
    pub fn shared(path: &Path) -> Result<&'static Ontology> {
        if let Some(ontology) = SHARED.get() {
            return Ok(ontology);
        }
        let loaded = Self::load(path)?;
        log::info!("ontology loaded: {} entries", loaded.len());
        Ok(SHARED.get_or_init(|| loaded))
    }

    /// Name of the label with identifier `id`.
    pub fn lookup(&self, id: &str) -> Result<&str, LabelError> {
        self.by_id
            .get(id)
            .map(|&i| self.entries[i].name.as_str())
            .ok_or_else(|| LabelError::UnknownLabelId(id.to_string()))
    }

    /// Reverse search: id of the first entry named `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.id.as_str())
    }

    pub fn entries(&self) -> &[OntologyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
