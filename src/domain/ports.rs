use crate::utils::error::Result;
use std::path::Path;

/// Line-oriented backing store for the persisted record set.
pub trait RecordStorage {
    /// Raw bytes of each line, without the terminator. Lines are not
    /// required to be valid UTF-8; that is checked per line on load.
    fn read_lines(&self) -> Result<Vec<Vec<u8>>>;
    fn write_lines(&self, lines: &[String]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> &Path;
    fn capacity(&self) -> usize;
}
