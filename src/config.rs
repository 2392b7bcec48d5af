use crate::error::Result;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// The predefined rejection-reason strings offered to the administrator.
///
/// Configuration data, not derived from submissions. The defaults are the
/// five reasons shipped with the mobile client; deployments may override them
/// with a JSON array file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RejectionReasons(Vec<String>);

impl Default for RejectionReasons {
    fn default() -> Self {
        Self(vec![
            "Image floue ou illisible".to_string(),
            "Montant incorrect".to_string(),
            "Reçu déjà soumis".to_string(),
            "Informations manquantes".to_string(),
            "Document non valide".to_string(),
        ])
    }
}

impl RejectionReasons {
    /// Loads reasons from a JSON array of strings.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let reasons = serde_json::from_reader(file)?;
        Ok(Self(reasons))
    }

    pub fn contains(&self, reason: &str) -> bool {
        self.0.iter().any(|r| r == reason)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
