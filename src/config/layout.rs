//! Filesystem layout of a TOGA checkout.
//!
//! Two directories matter: the *root* (where the setup tool and the
//! pipeline's inputs live) and the *working directory* (where the `cesar`
//! wrapper and the CESAR clone are placed). They are usually the same.

use std::path::{Path, PathBuf};

use super::schema::SetupConfig;

/// Python requirements descriptor, relative to the root.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Directory holding the trained models, relative to the root.
pub const MODELS_DIR: &str = "models";

/// Standard-error (single-exon) model file name.
pub const SE_MODEL: &str = "se_model.dat";

/// Maximum-entropy (multi-exon) model file name.
pub const ME_MODEL: &str = "me_model.dat";

/// Model training entry point, relative to the root.
pub const TRAIN_SCRIPT: &str = "train_model.py";

/// Name of the generated CESAR wrapper, relative to the working directory.
pub const WRAPPER_NAME: &str = "cesar";

/// Name of the binary the CESAR build produces inside its checkout.
pub const CESAR_BINARY_NAME: &str = "cesar";

/// Directory holding the native C sources, relative to the root.
pub const MODULES_DIR: &str = "modules";

/// Resolved directories for one setup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    work_dir: PathBuf,
}

impl Layout {
    /// Create a layout from explicit directories.
    pub fn new(root: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            work_dir: work_dir.into(),
        }
    }

    /// Layout where root and working directory coincide.
    pub fn single(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self::new(dir.clone(), dir)
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the requirements descriptor.
    pub fn requirements(&self) -> PathBuf {
        self.root.join(REQUIREMENTS_FILE)
    }

    /// Model artifacts, either of which satisfies the model stage.
    pub fn model_candidates(&self) -> [PathBuf; 2] {
        let models = self.root.join(MODELS_DIR);
        [models.join(SE_MODEL), models.join(ME_MODEL)]
    }

    /// Path to the training entry point.
    pub fn train_script(&self) -> PathBuf {
        self.root.join(TRAIN_SCRIPT)
    }

    /// Path of the generated CESAR wrapper.
    pub fn wrapper(&self) -> PathBuf {
        self.work_dir.join(WRAPPER_NAME)
    }

    /// Directory the CESAR repository is cloned into.
    pub fn cesar_checkout(&self, config: &SetupConfig) -> PathBuf {
        self.work_dir.join(&config.cesar_dir)
    }

    /// Directory holding the native C sources and their outputs.
    pub fn modules_dir(&self) -> PathBuf {
        self.root.join(MODULES_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_relative_paths() {
        let layout = Layout::new("/opt/toga", "/home/me");
        assert_eq!(
            layout.requirements(),
            PathBuf::from("/opt/toga/requirements.txt")
        );
        assert_eq!(
            layout.train_script(),
            PathBuf::from("/opt/toga/train_model.py")
        );
        assert_eq!(layout.modules_dir(), PathBuf::from("/opt/toga/modules"));
    }

    #[test]
    fn model_candidates_are_se_then_me() {
        let layout = Layout::single("/t");
        let [se, me] = layout.model_candidates();
        assert_eq!(se, PathBuf::from("/t/models/se_model.dat"));
        assert_eq!(me, PathBuf::from("/t/models/me_model.dat"));
    }

    #[test]
    fn cesar_paths_are_in_work_dir() {
        let layout = Layout::new("/opt/toga", "/home/me");
        assert_eq!(layout.wrapper(), PathBuf::from("/home/me/cesar"));
        assert_eq!(
            layout.cesar_checkout(&SetupConfig::default()),
            PathBuf::from("/home/me/CESAR2.0")
        );
    }
}
