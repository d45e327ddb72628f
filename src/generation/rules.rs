//! Naming rules for families and devices, and the derived text blocks built from them

use std::path::Path;

use crate::generation::FamilyScheme;

/// Groups devices by a fixed number of leading filename characters.
///
/// `stm32f401.yaml` and `stm32f411.yaml` both land in `stm32f4`. Names shorter than the
/// prefix become their own, shorter, family key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixFamilyScheme {
    len: usize,
}

impl PrefixFamilyScheme {
    pub const DEFAULT_LEN: usize = 7;

    pub fn new(len: usize) -> Self {
        Self { len }
    }

    pub fn prefix_len(&self) -> usize {
        self.len
    }
}

impl Default for PrefixFamilyScheme {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEN)
    }
}

impl FamilyScheme for PrefixFamilyScheme {
    fn family_key<'a>(&self, file_name: &'a str) -> &'a str {
        match file_name.char_indices().nth(self.len) {
            Some((end, _)) => &file_name[..end],
            None => file_name,
        }
    }
}

/// Device key: the filename without its last extension, lower-cased
pub fn device_key(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| file_name.to_lowercase())
}

/// Crate (and output directory) name for a family key
pub fn crate_name(family: &str) -> String {
    family.to_lowercase()
}

/// Device name as shown in readme bullets.
///
/// Upper-cased, except that `x` placeholder bits in part numbers stay lower-case.
pub fn display_device_name(device: &str) -> String {
    device.to_uppercase().replace('X', "x")
}

/// One empty feature declaration per device
pub fn features_block(devices: &[String]) -> String {
    devices
        .iter()
        .map(|device| format!("{device} = []"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One feature-gated module declaration per device
pub fn modules_block(devices: &[String]) -> String {
    devices
        .iter()
        .map(|device| format!("#[cfg(feature = \"{device}\")]\npub mod {device};\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markdown bullet list of supported devices
pub fn device_list(devices: &[String]) -> String {
    devices
        .iter()
        .map(|device| format!("* {}", display_device_name(device)))
        .collect::<Vec<_>>()
        .join("\n")
}
