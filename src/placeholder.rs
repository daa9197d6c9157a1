use anyhow::{Context, Result};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::info;

/// Icon sizes written by default, in generation order
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// First line of every placeholder file
pub const PLACEHOLDER_MARKER: &str = "# Placeholder icon file - replace with actual PNG";

/// Options for a generation pass
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            sizes: ICON_SIZES.to_vec(),
        }
    }
}

/// A square placeholder icon of a single size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderIcon {
    pub size: u32,
}

impl PlaceholderIcon {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// File name for this icon, e.g. `icon48.png`
    pub fn file_name(&self) -> String {
        format!("icon{}.png", self.size)
    }

    /// Dimensions annotation, e.g. `48x48`
    pub fn dimensions(&self) -> String {
        format!("{size}x{size}", size = self.size)
    }

    /// Full text written to the placeholder file
    pub fn contents(&self) -> String {
        format!("{PLACEHOLDER_MARKER}\n# Size: {}\n", self.dimensions())
    }
}

/// Create or truncate `path` and write the placeholder text for `icon`
pub fn write_placeholder(icon: &PlaceholderIcon, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create placeholder file {}", path.display()))?;

    file.write_all(icon.contents().as_bytes())
        .with_context(|| format!("Failed to write placeholder file {}", path.display()))?;

    Ok(())
}

/// Write one placeholder per configured size, stopping at the first failure.
///
/// Returns the written paths in the order they were produced.
pub fn generate_placeholders(options: &GeneratorOptions) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(options.sizes.len());

    for &size in &options.sizes {
        let icon = PlaceholderIcon::new(size);
        let path = options.output.join(icon.file_name());
        write_placeholder(&icon, &path)?;
        info!(path = %path.display(), size, "wrote placeholder");
        written.push(path);
    }

    Ok(written)
}
