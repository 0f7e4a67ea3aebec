use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Écrit `bytes` dans `path` de manière atomique (fichier temporaire + rename).
///
/// En cas d'erreur, la cible éventuelle reste intacte.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> anyhow::Result<()> {
    let path = path.as_ref();
    stage(path, bytes)?.persist(path)
}

/// Écrit plusieurs fichiers : tous sont préparés en temporaire avant le
/// premier rename, donc un échec de préparation ne laisse aucune sortie.
pub fn write_all_atomic(outputs: &[(PathBuf, Vec<u8>)]) -> anyhow::Result<()> {
    let staged = outputs
        .iter()
        .map(|(path, bytes)| stage(path, bytes).map(|tmp| (path, tmp)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    for (path, tmp) in staged {
        tmp.persist(path)?;
    }
    Ok(())
}

struct Staged(NamedTempFile);

impl Staged {
    fn persist(self, path: &Path) -> anyhow::Result<()> {
        self.0
            .persist(path)
            .with_context(|| format!("atomic rename to {}", path.display()))?;
        Ok(())
    }
}

fn stage(path: &Path, bytes: &[u8]) -> anyhow::Result<Staged> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("creating temp file for {}", path.display()))?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    Ok(Staged(tmp))
}
