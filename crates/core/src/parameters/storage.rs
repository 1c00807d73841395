//! Parameter Storage
//!
//! A small fixed-capacity key/value store for runtime tunables. Values are
//! registered once with a default and flags, then read or overwritten by
//! name. Nothing is persisted; the dirty flag only tells the owner that
//! values changed since it last looked.

use super::error::ParameterError;
use bitflags::bitflags;
use heapless::{FnvIndexMap, String};

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters (power of two, required by the index map)
pub const MAX_PARAMS: usize = 8;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Fixed at registration; `set` is rejected
        const READ_ONLY = 0b00000001;
    }
}

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamValue {
    /// Unsigned integer (periods in ms, counts)
    Uint32(u32),
    /// Boolean switch
    Bool(bool),
}

impl ParamValue {
    /// Whether `other` holds the same variant
    pub fn same_type(&self, other: &ParamValue) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            ParamValue::Uint32(v) => Some(*v),
            ParamValue::Bool(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ParamEntry {
    value: ParamValue,
    flags: ParamFlags,
}

type ParamName = String<PARAM_NAME_LEN>;

fn param_name(name: &str) -> Result<ParamName, ParameterError> {
    let mut key = ParamName::new();
    key.push_str(name)
        .map_err(|_| ParameterError::InvalidConfig)?;
    Ok(key)
}

/// Parameter store for configuration management
#[derive(Debug, Default)]
pub struct ParameterStore {
    entries: FnvIndexMap<ParamName, ParamEntry, MAX_PARAMS>,
    dirty: bool,
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = param_name(name).ok()?;
        self.entries.get(&key).map(|entry| &entry.value)
    }

    /// Set parameter value
    ///
    /// The parameter must exist, be writable, and keep its type.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = param_name(name)?;
        let entry = self
            .entries
            .get_mut(&key)
            .ok_or(ParameterError::InvalidConfig)?;

        if entry.flags.contains(ParamFlags::READ_ONLY) {
            return Err(ParameterError::ReadOnly);
        }
        if !entry.value.same_type(&value) {
            return Err(ParameterError::TypeMismatch);
        }

        entry.value = value;
        self.dirty = true;
        Ok(())
    }

    /// Register a new parameter with default value and flags
    ///
    /// If the parameter already exists, this is a no-op (idempotent).
    pub fn register(
        &mut self,
        name: &str,
        default_value: ParamValue,
        flags: ParamFlags,
    ) -> Result<(), ParameterError> {
        let key = param_name(name)?;
        if self.entries.contains_key(&key) {
            return Ok(());
        }

        self.entries
            .insert(
                key,
                ParamEntry {
                    value: default_value,
                    flags,
                },
            )
            .map_err(|_| ParameterError::StoreFull)?;
        self.dirty = true;
        Ok(())
    }

    /// Whether `name` is registered read-only
    pub fn is_read_only(&self, name: &str) -> bool {
        param_name(name)
            .ok()
            .and_then(|key| self.entries.get(&key))
            .is_some_and(|entry| entry.flags.contains(ParamFlags::READ_ONLY))
    }

    /// Registered parameter names, in registration order
    pub fn iter_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|name| name.as_str())
    }

    /// Number of registered parameters
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Check if store has changes not yet picked up
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear dirty flag
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut store = ParameterStore::new();
        store
            .register("MON_HOLD_MS", ParamValue::Uint32(250), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("MON_HOLD_MS"), Some(&ParamValue::Uint32(250)));
        assert_eq!(store.get("MISSING"), None);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_register_idempotent() {
        let mut store = ParameterStore::new();
        store
            .register("P", ParamValue::Uint32(1), ParamFlags::empty())
            .unwrap();
        store
            .register("P", ParamValue::Uint32(2), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("P"), Some(&ParamValue::Uint32(1)));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_set_rules() {
        let mut store = ParameterStore::new();
        store
            .register("RW", ParamValue::Uint32(1), ParamFlags::empty())
            .unwrap();
        store
            .register("RO", ParamValue::Uint32(4), ParamFlags::READ_ONLY)
            .unwrap();
        store.clear_dirty();

        assert_eq!(store.set("RW", ParamValue::Uint32(9)), Ok(()));
        assert!(store.is_dirty());
        assert_eq!(store.get("RW"), Some(&ParamValue::Uint32(9)));

        assert_eq!(
            store.set("RO", ParamValue::Uint32(5)),
            Err(ParameterError::ReadOnly)
        );
        assert!(store.is_read_only("RO"));
        assert_eq!(
            store.set("RW", ParamValue::Bool(true)),
            Err(ParameterError::TypeMismatch)
        );
        assert_eq!(
            store.set("NOPE", ParamValue::Uint32(0)),
            Err(ParameterError::InvalidConfig)
        );
    }

    #[test]
    fn test_name_too_long() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.register(
                "THIS_NAME_IS_TOO_LONG",
                ParamValue::Bool(false),
                ParamFlags::empty()
            ),
            Err(ParameterError::InvalidConfig)
        );
    }

    #[test]
    fn test_store_full() {
        let mut store = ParameterStore::new();
        let names = ["A", "B", "C", "D", "E", "F", "G", "H"];
        for name in names {
            store
                .register(name, ParamValue::Uint32(0), ParamFlags::empty())
                .unwrap();
        }
        assert_eq!(
            store.register("I", ParamValue::Uint32(0), ParamFlags::empty()),
            Err(ParameterError::StoreFull)
        );
        assert_eq!(store.iter_names().count(), MAX_PARAMS);
    }
}
