use crate::impose::{validate_geometry, validate_page_count};
use crate::layout::{DEFAULT_SIGNATURE_SIZE, validate_signature_size};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One imposition job: what to impose, on what, and how it is bound
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JobConfig {
    pub name: String,

    // Binding
    pub binding: BindingType,
    /// Logical pages (ignored by step-and-repeat)
    pub page_count: usize,
    /// Pages per signature (perfect binding only)
    pub signature_size: usize,

    // Geometry, inches
    pub page_size: Dimensions,
    pub sheet_size: Dimensions,
    pub margins: Margins,
    pub gutters: Gutters,

    // Printer's marks drawn on proofs
    pub marks: PrinterMarks,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            name: "Untitled".to_string(),
            binding: BindingType::StepAndRepeat,
            page_count: 1,
            signature_size: DEFAULT_SIGNATURE_SIZE,
            page_size: Dimensions::new(3.5, 2.0),
            sheet_size: SheetPreset::Press12x18.dimensions(),
            margins: Margins::uniform(0.5),
            gutters: Gutters::uniform(0.125),
            marks: PrinterMarks::default(),
        }
    }
}

impl JobConfig {
    /// Start from the defaults with a binding and page count
    pub fn new(name: impl Into<String>, binding: BindingType, page_count: usize) -> Self {
        Self {
            name: name.into(),
            binding,
            page_count,
            ..Self::default()
        }
    }

    /// Use a named sheet in the given orientation
    pub fn with_sheet(mut self, preset: SheetPreset, orientation: Orientation) -> Self {
        self.sheet_size = preset.dimensions_with_orientation(orientation);
        self
    }

    /// Load a job from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config: Self = serde_json::from_slice(&bytes)?;
        log::debug!("Loaded job '{}' ({:?})", config.name, config.binding);
        Ok(config)
    }

    /// Save the job as pretty JSON
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Check the job the same way its planner will, without planning it
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ImposeError::Config("Job name must not be empty".to_string()));
        }

        if self.binding.requires_folding() {
            validate_page_count(self.page_count)?;
        }
        if self.binding == BindingType::PerfectBinding {
            validate_signature_size(self.signature_size)?;
        }

        validate_geometry(&self.page_size, &self.sheet_size, &self.margins, &self.gutters)
    }
}
