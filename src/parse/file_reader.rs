use std::path::Path;

/// File access used by report parsing and discovery.
///
/// [`FsFileReader`] is the real filesystem; tests can supply an in-memory reader.
pub trait FileReader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;

    fn exists(&self, path: &Path) -> bool;
}

pub struct FsFileReader;

impl FileReader for FsFileReader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
