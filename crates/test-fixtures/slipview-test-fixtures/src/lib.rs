//! Shared fixtures for slipview integration tests: named image galleries
//! and canned gesture traces, addressed through `fixtures/manifest.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Manifest {
    galleries: BTreeMap<String, String>,
    gestures: BTreeMap<String, String>,
}

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures manifest should parse")
});

/// Resolve a manifest entry and deserialize the JSON file it points at.
fn fixture_json<T: DeserializeOwned>(
    kind: &str,
    entries: &BTreeMap<String, String>,
    name: &str,
) -> Result<T> {
    let Some(rel) = entries.get(name) else {
        bail!("unknown {kind} fixture '{name}'");
    };
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../../fixtures")
        .join(rel);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

/// Named, ordered image collections used to build carousels in tests.
pub mod galleries {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.galleries.keys().cloned().collect()
    }

    pub fn images(name: &str) -> Result<Vec<String>> {
        fixture_json("gallery", &MANIFEST.galleries, name)
    }
}

/// Canned gesture traces, stored as `Inputs`-shaped command batches.
/// Deserialization into the core type happens at the call site so this
/// crate stays independent of slipview-core.
pub mod gestures {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.gestures.keys().cloned().collect()
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        fixture_json("gesture", &MANIFEST.gestures, name)
    }
}
