//! Core types for the generation domain

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::generation::FamilyScheme;
use crate::generation::rules::device_key;

/// Identity of one device, derived from its definition filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub family: String,
    pub device: String,
}

impl DeviceDescriptor {
    pub fn from_file_name(file_name: &str, scheme: &dyn FamilyScheme) -> Self {
        Self {
            family: scheme.family_key(file_name).to_string(),
            device: device_key(file_name),
        }
    }
}

/// Devices accumulated per family key during discovery
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyGroups {
    groups: BTreeMap<String, Vec<String>>,
}

impl FamilyGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group definition filenames with the given scheme
    pub fn from_file_names<I, S>(file_names: I, scheme: &dyn FamilyScheme) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups = Self::new();
        for name in file_names {
            groups.insert(DeviceDescriptor::from_file_name(name.as_ref(), scheme));
        }
        groups
    }

    pub fn insert(&mut self, descriptor: DeviceDescriptor) {
        self.groups
            .entry(descriptor.family)
            .or_default()
            .push(descriptor.device);
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn family_keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Sort every family's devices and hand the groups over for rendering
    pub fn finalize(self) -> Vec<FamilyGroup> {
        self.groups
            .into_iter()
            .map(|(family, devices)| FamilyGroup::new(family, devices))
            .collect()
    }
}

/// A family with its devices in lexicographic order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyGroup {
    pub family: String,
    pub devices: Vec<String>,
}

impl FamilyGroup {
    pub fn new(family: impl Into<String>, mut devices: Vec<String>) -> Self {
        devices.sort();
        Self {
            family: family.into(),
            devices,
        }
    }
}

/// Rendered text of one family crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyArtifacts {
    pub manifest: String,
    pub readme: String,
    pub source_module: String,
}

/// Generated file ready to be written
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}
