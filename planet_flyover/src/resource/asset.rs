//! Asset requests and loaders.
//!
//! Assets (cube map faces, HDR environments, building models) are optional
//! decoration. A loader reports each request through a completion callback;
//! a failed load is logged and the scene is built without the asset.
//! Payloads are kept as raw bytes; decoding belongs to the renderer.

use std::path::{Path, PathBuf};
use crate::error::{Error, Result};

const SOURCE: &str = "planet::Assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Texture,
    /// Six faces in +x, -x, +y, -y, +z, -z order
    CubeTexture,
    HdrEnvironment,
    Model,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetRequest {
    pub name: String,
    pub kind: AssetKind,
    /// Paths relative to the loader's base directory
    pub paths: Vec<PathBuf>,
}

impl AssetRequest {
    pub fn texture(name: &str, path: impl Into<PathBuf>) -> Self {
        Self { name: name.to_string(), kind: AssetKind::Texture, paths: vec![path.into()] }
    }

    pub fn cube_texture(name: &str, faces: &[String]) -> Self {
        Self {
            name: name.to_string(),
            kind: AssetKind::CubeTexture,
            paths: faces.iter().map(PathBuf::from).collect(),
        }
    }

    pub fn hdr_environment(name: &str, path: impl Into<PathBuf>) -> Self {
        Self { name: name.to_string(), kind: AssetKind::HdrEnvironment, paths: vec![path.into()] }
    }

    pub fn model(name: &str, path: impl Into<PathBuf>) -> Self {
        Self { name: name.to_string(), kind: AssetKind::Model, paths: vec![path.into()] }
    }
}

/// A successfully loaded asset: one payload per requested path.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedAsset {
    pub name: String,
    pub kind: AssetKind,
    pub payloads: Vec<Vec<u8>>,
}

impl LoadedAsset {
    pub fn byte_len(&self) -> usize {
        self.payloads.iter().map(Vec::len).sum()
    }
}

pub type AssetResult = Result<LoadedAsset>;

/// Source of asset bytes.
///
/// `on_complete` must be invoked exactly once per `load` call, with either
/// the loaded asset or the reason it failed.
pub trait AssetLoader {
    fn load(&mut self, request: &AssetRequest, on_complete: &mut dyn FnMut(AssetResult));
}

/// Reads asset files from a base directory, synchronously.
pub struct FileAssetLoader {
    base_dir: PathBuf,
}

impl FileAssetLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn read(&self, request: &AssetRequest) -> AssetResult {
        if request.paths.is_empty() {
            return Err(Error::AssetLoadFailed(format!("{}: no paths given", request.name)));
        }

        let mut payloads = Vec::with_capacity(request.paths.len());
        for path in &request.paths {
            let full = self.base_dir.join(path);
            let bytes = std::fs::read(&full).map_err(|e| {
                Error::AssetLoadFailed(format!("{}: {}: {}", request.name, full.display(), e))
            })?;
            if bytes.is_empty() {
                return Err(Error::AssetLoadFailed(format!(
                    "{}: {}: file is empty", request.name, full.display()
                )));
            }
            payloads.push(bytes);
        }

        Ok(LoadedAsset { name: request.name.clone(), kind: request.kind, payloads })
    }
}

impl AssetLoader for FileAssetLoader {
    fn load(&mut self, request: &AssetRequest, on_complete: &mut dyn FnMut(AssetResult)) {
        crate::flyover_debug!(SOURCE, "Loading {:?} '{}' ({} file(s))",
            request.kind, request.name, request.paths.len());
        on_complete(self.read(request));
    }
}

/// Load an asset, logging and swallowing any failure.
///
/// Returns `None` when the loader failed or never called back.
pub fn load_or_warn(loader: &mut dyn AssetLoader, request: &AssetRequest) -> Option<LoadedAsset> {
    let mut outcome = None;
    loader.load(request, &mut |result| outcome = Some(result));

    match outcome {
        Some(Ok(asset)) => {
            crate::flyover_info!(SOURCE, "Loaded {:?} '{}' ({} bytes)",
                asset.kind, asset.name, asset.byte_len());
            Some(asset)
        }
        Some(Err(e)) => {
            crate::flyover_warn!(SOURCE, "{}; continuing without it", e);
            None
        }
        None => {
            crate::flyover_warn!(SOURCE, "Loader never completed '{}'; continuing without it",
                request.name);
            None
        }
    }
}

#[cfg(test)]
#[path = "asset_tests.rs"]
mod tests;
