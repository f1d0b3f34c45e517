//! Localizadores de fuentes.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use gen_core::SourceLocator;

/// Recorrido real del filesystem.
///
/// Devuelve rutas relativas con `/`, ordenadas lexicográficamente para que
/// el orden de procesamiento sea estable entre corridas y plataformas.
pub struct WalkdirLocator;

impl SourceLocator for WalkdirLocator {
    fn scan(&self, root: &Path, suffix: &str) -> io::Result<Vec<String>> {
        let mut found = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry.path().strip_prefix(root).unwrap_or_else(|_| entry.path());
            let rel_str = rel.components()
                             .map(|c| c.as_os_str().to_string_lossy())
                             .collect::<Vec<_>>()
                             .join("/");
            if rel_str.ends_with(suffix) {
                found.push(rel_str);
            }
        }
        found.sort();
        log::debug!("scan {}: {} coincidencia(s) con {}", root.display(), found.len(), suffix);
        Ok(found)
    }
}

/// Localizador fijo para tests y embedding: ignora el filesystem y devuelve
/// una lista preparada (ordenada aquí para honrar el contrato del trait).
pub struct StaticLocator {
    paths: Vec<String>,
}

impl StaticLocator {
    pub fn new(paths: Vec<String>) -> Self {
        let mut paths = paths;
        paths.sort();
        Self { paths }
    }
}

impl SourceLocator for StaticLocator {
    fn scan(&self, _root: &Path, suffix: &str) -> io::Result<Vec<String>> {
        Ok(self.paths.iter().filter(|p| p.ends_with(suffix)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn walkdir_filtra_por_sufijo_y_ordena() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("b/c")).unwrap();
        fs::write(dir.path().join("b/c/z.xml.kts"), "x").unwrap();
        fs::write(dir.path().join("a.xml.kts"), "x").unwrap();
        fs::write(dir.path().join("ignorado.txt"), "x").unwrap();

        let found = WalkdirLocator.scan(dir.path(), ".xml.kts").expect("scan");
        assert_eq!(found, vec!["a.xml.kts".to_string(), "b/c/z.xml.kts".to_string()]);
    }

    #[test]
    fn static_respeta_sufijo() {
        let loc = StaticLocator::new(vec!["z.xml.kts".into(), "a.xml.kts".into(), "no.txt".into()]);
        let found = loc.scan(Path::new("/ignorada"), ".xml.kts").expect("scan");
        assert_eq!(found, vec!["a.xml.kts".to_string(), "z.xml.kts".to_string()]);
    }
}
