//! Checks a directory of generated icons against the placeholder set.
//!
//! Every placeholder is meant to be swapped for a real image of the same
//! dimensions, normally a PNG. The report produced here says, per icon, how
//! far along that replacement is.

use crate::placeholder::{PlaceholderIcon, ICON_SIZES};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fmt,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::warn;

/// State of a single icon file
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IconStatus {
    /// No file at the expected path
    Missing,

    /// Byte-for-byte the generated placeholder text
    Placeholder,

    /// A decodable image with the expected square dimensions
    Replaced,

    /// A decodable image whose dimensions differ from the icon size
    WrongSize { width: u32, height: u32 },

    /// Unreadable, or neither the placeholder nor a decodable image
    Unrecognized { reason: String },
}

impl IconStatus {
    /// Whether this state needs attention
    pub fn is_problem(&self) -> bool {
        matches!(
            self,
            IconStatus::Missing | IconStatus::WrongSize { .. } | IconStatus::Unrecognized { .. }
        )
    }
}

impl fmt::Display for IconStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconStatus::Missing => write!(f, "missing"),
            IconStatus::Placeholder => write!(f, "placeholder"),
            IconStatus::Replaced => write!(f, "replaced"),
            IconStatus::WrongSize { width, height } => {
                write!(f, "wrong size ({width}x{height})")
            }
            IconStatus::Unrecognized { reason } => write!(f, "unrecognized ({reason})"),
        }
    }
}

/// Result of checking one icon
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IconCheck {
    pub file_name: String,
    pub size: u32,
    #[serde(flatten)]
    pub status: IconStatus,
}

/// Result of checking every icon in a directory, ordered by size
#[derive(Serialize, Debug, Clone)]
pub struct VerifyReport {
    pub directory: PathBuf,
    pub icons: Vec<IconCheck>,
}

impl VerifyReport {
    /// True when no icon is missing, mis-sized or unreadable
    pub fn is_healthy(&self) -> bool {
        !self.icons.iter().any(|icon| icon.status.is_problem())
    }
}

/// Check the default icon sizes inside `dir`
pub fn verify_directory(dir: &Path) -> Result<VerifyReport> {
    let metadata = std::fs::metadata(dir)
        .with_context(|| format!("Failed to open directory {}", dir.display()))?;
    if !metadata.is_dir() {
        anyhow::bail!("{} is not a directory", dir.display());
    }

    let mut icons = Vec::with_capacity(ICON_SIZES.len());

    for size in ICON_SIZES {
        let icon = PlaceholderIcon::new(size);
        let status = check_icon(&icon, &dir.join(icon.file_name()));

        if status.is_problem() {
            warn!(file = %icon.file_name(), %status, "icon needs attention");
        }

        icons.push(IconCheck {
            file_name: icon.file_name(),
            size,
            status,
        });
    }

    Ok(VerifyReport {
        directory: dir.to_path_buf(),
        icons,
    })
}

/// Classify the file at `path` against the expected `icon`.
///
/// Anything at `path` that cannot be read or fully decoded is reported as
/// unrecognized rather than failing the whole check.
pub fn check_icon(icon: &PlaceholderIcon, path: &Path) -> IconStatus {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return IconStatus::Missing,
        Err(err) => {
            return IconStatus::Unrecognized {
                reason: err.to_string(),
            }
        }
    };

    if bytes == icon.contents().as_bytes() {
        return IconStatus::Placeholder;
    }

    match image::load_from_memory(&bytes) {
        Ok(image) if image.width() == icon.size && image.height() == icon.size => {
            IconStatus::Replaced
        }
        Ok(image) => IconStatus::WrongSize {
            width: image.width(),
            height: image.height(),
        },
        Err(err) => IconStatus::Unrecognized {
            reason: err.to_string(),
        },
    }
}
