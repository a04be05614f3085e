//! # Icon registration
//!
//! Textures are stitched into a single atlas by the host. Anything that draws
//! icons implements [`IconRegister`] and is added to an [`IconRegistry`];
//! during the stitch pass the registry hands every register the atlas so it
//! can request its slots.
//!
//! ```rust
//! use mosaic_core::*;
//!
//! struct Arrows;
//!
//! impl IconRegister for Arrows {
//!     fn register_icons(&self, atlas: &mut dyn TextureAtlas) -> Result<(), AtlasError> {
//!         atlas.register_icon("arrow_up")?;
//!         atlas.register_icon("arrow_down")?;
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = IconRegistry::new();
//! registry.register(Arrows);
//!
//! let mut atlas = IconTable::with_capacity(16);
//! assert_eq!(registry.stitch(&mut atlas), Ok(2));
//! assert!(atlas.get("arrow_down").is_some());
//! ```

use std::collections::HashMap;

use slotmap::{SlotMap, new_key_type};

use crate::AtlasError;

/// Slot handed out by an atlas for one icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconHandle(pub u32);

/// Host texture atlas, seen from the side of icon requests.
pub trait TextureAtlas {
    fn register_icon(&mut self, name: &str) -> Result<IconHandle, AtlasError>;
}

/// Capability of components that own icons.
pub trait IconRegister {
    /// Icons only exist client side; registers that are not client components
    /// are skipped by the stitch pass.
    fn is_client_component(&self) -> bool {
        true
    }

    fn register_icons(&self, atlas: &mut dyn TextureAtlas) -> Result<(), AtlasError>;
}

new_key_type! {
    pub struct RegisterKey;
}

/// Registers invoked by the stitch pass, in registration order.
#[derive(Default)]
pub struct IconRegistry {
    registers: SlotMap<RegisterKey, Box<dyn IconRegister>>,
    order: Vec<RegisterKey>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, register: impl IconRegister + 'static) -> RegisterKey {
        let key = self.registers.insert(Box::new(register));
        self.order.push(key);
        key
    }

    pub fn unregister(&mut self, key: RegisterKey) -> bool {
        if self.registers.remove(key).is_none() {
            return false;
        }
        self.order.retain(|k| *k != key);
        true
    }

    pub fn len(&self) -> usize {
        self.registers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    /// Runs every client register against `atlas`.
    ///
    /// Returns how many icons were requested, or the first error; registers
    /// after a failing one are not run.
    pub fn stitch(&self, atlas: &mut dyn TextureAtlas) -> Result<usize, AtlasError> {
        let mut counting = CountingAtlas {
            inner: atlas,
            count: 0,
        };
        for key in &self.order {
            let Some(register) = self.registers.get(*key) else {
                continue;
            };
            if !register.is_client_component() {
                log::debug!("stitch: skipping non-client register {key:?}");
                continue;
            }
            let before = counting.count;
            if let Err(e) = register.register_icons(&mut counting) {
                log::warn!("stitch aborted by register {key:?}: {e}");
                return Err(e);
            }
            log::debug!(
                "stitch: register {key:?} requested {} icons",
                counting.count - before
            );
        }
        Ok(counting.count)
    }
}

struct CountingAtlas<'a> {
    inner: &'a mut dyn TextureAtlas,
    count: usize,
}

impl TextureAtlas for CountingAtlas<'_> {
    fn register_icon(&mut self, name: &str) -> Result<IconHandle, AtlasError> {
        let handle = self.inner.register_icon(name)?;
        self.count += 1;
        Ok(handle)
    }
}

/// Name-to-slot table with a fixed number of slots.
///
/// Hosts that stitch elsewhere can use it to collect the requested names
/// before building the real atlas.
#[derive(Debug, Clone)]
pub struct IconTable {
    capacity: usize,
    slots: HashMap<String, IconHandle>,
    names: Vec<String>,
}

impl IconTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            slots: HashMap::new(),
            names: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<IconHandle> {
        self.slots.get(name).copied()
    }

    /// Names in slot order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl TextureAtlas for IconTable {
    fn register_icon(&mut self, name: &str) -> Result<IconHandle, AtlasError> {
        if name.is_empty() {
            return Err(AtlasError::EmptyName);
        }
        if self.slots.contains_key(name) {
            return Err(AtlasError::Duplicate(name.to_string()));
        }
        if self.names.len() >= self.capacity {
            return Err(AtlasError::Full {
                capacity: self.capacity,
            });
        }
        let handle = IconHandle(self.names.len() as u32);
        self.slots.insert(name.to_string(), handle);
        self.names.push(name.to_string());
        Ok(handle)
    }
}
