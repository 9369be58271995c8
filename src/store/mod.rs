//! Store Module
//!
//! The indexed employee store.
//!
//! ## Responsibilities
//! - Keep the primary, department and factor indices consistent
//! - Serialize access: many concurrent readers, one writer
//! - Cascade removals (including cursor removals) into every index
//! - Save/restore through the line format, delegating to each record
//!
//! ## Index Layout
//! ```text
//!   employees:   BTreeMap<id, Record>                 (ascending id)
//!   departments: BTreeMap<department, Vec<Record>>    (insertion order)
//!   factors:     BTreeMap<factor, Vec<Manager>>       (insertion order)
//! ```

mod cursor;
mod indices;

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::record::{RecordRef, RecordRegistry};

pub use cursor::Cursor;

use indices::Indices;

/// Concurrent indexed store of employees
///
/// ## Concurrency Model: Multiple-Reader / Single-Writer
///
/// - One `RwLock` guards all three indices as a unit
/// - **Writes** (add/remove/cursor removal): exclusive; primary, department
///   and factor index are updated in that order inside one critical section
/// - **Reads** (get/budgets/departments/top managers/save): shared
/// - `restore_from` adds line by line, each under its own write lock, so
///   readers may observe a partially restored store
pub struct Store {
    /// Store configuration
    config: Config,

    /// Kinds that `restore_from` can construct
    registry: RecordRegistry,

    /// Primary, department and factor indices
    indices: RwLock<Indices>,
}

impl Store {
    /// Create an empty store with default config and the built-in kinds
    pub fn new() -> Self {
        Self::from_parts(Config::default(), RecordRegistry::with_builtin_kinds())
    }

    /// Create an empty store with the given config and the built-in kinds
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_registry(config, RecordRegistry::with_builtin_kinds())
    }

    /// Create an empty store restoring through a custom registry
    pub fn with_registry(config: Config, registry: RecordRegistry) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, registry))
    }

    fn from_parts(config: Config, registry: RecordRegistry) -> Self {
        Self {
            config,
            registry,
            indices: RwLock::new(Indices::default()),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add an employee to every index
    ///
    /// Fails with `DuplicateKey` if the id is taken; the check and the
    /// insert happen under the same write lock.
    pub fn add(&self, record: RecordRef) -> Result<()> {
        let id = record.id();
        self.indices.write().insert(RecordRef::clone(&record))?;
        debug!(id, department = record.department(), kind = record.kind(), "employee added");
        Ok(())
    }

    /// Remove an employee from every index
    ///
    /// Fails with `NotFound` (touching nothing) if the id is absent.
    pub fn remove(&self, id: u64) -> Result<RecordRef> {
        let removed = self.indices.write().remove(id)?;
        debug!(id, department = removed.department(), "employee removed");
        Ok(removed)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Look up an employee by id
    pub fn get(&self, id: u64) -> Option<RecordRef> {
        self.indices.read().get(id)
    }

    /// Whether an employee with this id is stored
    pub fn contains(&self, id: u64) -> bool {
        self.indices.read().contains(id)
    }

    /// Number of employees
    pub fn len(&self) -> usize {
        self.indices.read().len()
    }

    /// Whether the store holds no employees
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor over the live store in ascending id order
    pub fn iter(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Snapshot of every employee in ascending id order
    pub fn employees(&self) -> Vec<RecordRef> {
        self.indices.read().employees().cloned().collect()
    }

    /// Sum of salaries in a department (0 for an unknown department)
    pub fn department_budget(&self, department: &str) -> i64 {
        self.indices.read().department_budget(department)
    }

    /// Sorted snapshot of department names
    pub fn departments(&self) -> Vec<String> {
        self.indices.read().departments()
    }

    /// Snapshot of a department's employees in insertion order
    pub fn department_members(&self, department: &str) -> Vec<RecordRef> {
        self.indices.read().department_members(department)
    }

    /// Managers sharing the highest factor store-wide, in insertion order
    pub fn managers_with_most_factor(&self) -> Vec<RecordRef> {
        self.indices.read().managers_with_most_factor()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write every employee as one line, ascending id, then flush
    ///
    /// Holds the read lock for the whole write. Returns the line count.
    pub fn save_to<W: Write>(&self, mut writer: W) -> Result<usize> {
        let indices = self.indices.read();
        let mut saved = 0;
        for record in indices.employees() {
            let line = record.to_line()?;
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
            saved += 1;
        }
        writer.flush()?;
        info!(saved, "store saved");
        Ok(saved)
    }

    /// Add one employee per non-blank line
    ///
    /// The first line that fails to parse or collides with an existing id
    /// aborts the restore. Employees added earlier in the same call are
    /// kept; there is no rollback. Returns the number added.
    pub fn restore_from<R: BufRead>(&self, reader: R) -> Result<usize> {
        let mut restored = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let line_no = index + 1;
            let result = self
                .registry
                .parse(&line)
                .map_err(|err| err.at_line(line_no))
                .and_then(|record| self.add(record));

            if let Err(err) = result {
                warn!(line = line_no, restored, error = %err, "restore aborted");
                return Err(err);
            }
            restored += 1;
        }
        info!(restored, "store restored");
        Ok(restored)
    }

    /// Save to `Config::data_file`, replacing its contents
    pub fn save(&self) -> Result<usize> {
        let path = &self.config.data_file;
        if self.config.create_parent_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        let saved = self.save_to(&mut writer)?;
        let file = writer
            .into_inner()
            .map_err(|err| RosterError::Io(err.into_error()))?;

        if self.config.sync_on_save {
            file.sync_all()?;
        }
        Ok(saved)
    }

    /// Restore from `Config::data_file`
    pub fn restore(&self) -> Result<usize> {
        let file = File::open(&self.config.data_file)?;
        self.restore_from(BufReader::new(file))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &RecordRegistry {
        &self.registry
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
