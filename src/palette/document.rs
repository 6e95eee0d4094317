//! Theme documents
//!
//! A [`ThemeDocument`] is what the editor works on and what gets exported:
//! a named palette whose tokens can be edited one at a time, saved as JSON,
//! and loaded back with every color re-validated.

use crate::color::HexColor;
use crate::core::error::{Result, ThemeError};
use crate::palette::extended::ExtendedColor;
use crate::palette::generator::generate_palette;
use crate::palette::scheme::{ColorScheme, ThemeMode};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// An editable theme: two schemes plus the extended tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDocument {
    /// Display name
    pub name: String,
    /// Seed the values were last generated from
    pub seed: HexColor,
    pub light: ColorScheme,
    pub dark: ColorScheme,
    pub extended: Vec<ExtendedColor>,
}

impl ThemeDocument {
    /// Generate a new document from a seed (invalid seeds fall back to the default)
    pub fn from_seed(name: impl Into<String>, seed: &str) -> Self {
        let palette = generate_palette(seed);
        Self {
            name: name.into(),
            seed: palette.seed,
            light: palette.light,
            dark: palette.dark,
            extended: palette.extended,
        }
    }

    /// Replace every generated value from a new seed
    ///
    /// Manual edits are discarded; nothing is merged with the previous values.
    pub fn regenerate(&mut self, seed: &str) {
        let palette = generate_palette(seed);
        info!("Regenerated '{}' from seed {}", self.name, palette.seed);
        self.seed = palette.seed;
        self.light = palette.light;
        self.dark = palette.dark;
        self.extended = palette.extended;
    }

    pub fn scheme(&self, mode: ThemeMode) -> &ColorScheme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    pub fn scheme_mut(&mut self, mode: ThemeMode) -> &mut ColorScheme {
        match mode {
            ThemeMode::Light => &mut self.light,
            ThemeMode::Dark => &mut self.dark,
        }
    }

    pub fn extended_color(&self, name: &str) -> Option<&ExtendedColor> {
        self.extended.iter().find(|c| c.name == name)
    }

    /// Set one extended token; its fallback is left as generated
    pub fn set_extended(&mut self, name: &str, value: &str) -> Result<()> {
        let color = HexColor::parse(value)?;
        let token = self
            .extended
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| ThemeError::UnknownToken(name.to_string()))?;
        token.color = color;
        Ok(())
    }

    /// Set a scheme role or, if no role has that name, an extended token
    pub fn set_token(&mut self, mode: ThemeMode, name: &str, value: &str) -> Result<()> {
        if ColorScheme::has_role(name) {
            debug!("Setting {} role {} = {}", mode, name, value);
            self.scheme_mut(mode).set(name, value)
        } else {
            debug!("Setting extended token {} = {}", name, value);
            self.set_extended(name, value)
        }
    }

    /// Check document-level invariants that serde cannot express
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for token in &self.extended {
            if !seen.insert(token.name.as_str()) {
                return Err(ThemeError::DuplicateToken(token.name.clone()));
            }
        }
        Ok(())
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Parse and validate a document
    pub fn from_json(json: &str) -> Result<Self> {
        let document: ThemeDocument = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Write the document as JSON
    pub fn save<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_json(pretty)?;
        fs::write(path, content).map_err(|e| ThemeError::io(path, e))?;
        info!("Saved theme '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// Read and validate a JSON document
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ThemeError::io(path, e))?;
        let document = Self::from_json(&content)?;
        debug!(
            "Loaded theme '{}' ({} extended tokens) from {}",
            document.name,
            document.extended.len(),
            path.display()
        );
        Ok(document)
    }
}
