// crates/friends-core/src/loader/common_io.rs
use crate::error::{FriendsError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn open_stream(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| FriendsError::NotFound(format!("{}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}
