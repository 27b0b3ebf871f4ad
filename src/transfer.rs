//! Moving files into the output tree

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const COPY_BUFFER_SIZE: usize = 256 * 1024;

/// Move `source` into `dest_dir`, keeping its filename
///
/// `dest_dir` and any missing parents are created first; an existing
/// directory is fine. An existing file at the target is never replaced.
/// Returns the final path of the moved file.
pub fn move_into(source: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let move_err = |source_err: io::Error| Error::Move {
        origin: source.to_path_buf(),
        destination: dest_dir.to_path_buf(),
        source: source_err,
    };

    let filename = source.file_name().ok_or_else(|| {
        move_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source has no file name",
        ))
    })?;

    fs::create_dir_all(dest_dir).map_err(move_err)?;

    let dest = dest_dir.join(filename);
    if dest.exists() {
        return Err(move_err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", dest.display()),
        )));
    }

    relocate(source, &dest).map_err(move_err)?;
    Ok(dest)
}

/// Rename, falling back to copy + delete only when the rename crosses devices
fn relocate(source: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!(?source, ?dest, error = %e, "Rename crosses devices, falling back to copy");
            copy_and_remove(source, dest)
        }
        Err(e) => Err(e),
    }
}

fn copy_and_remove(source: &Path, dest: &Path) -> io::Result<()> {
    copy_file(source, dest)?;

    // Preserve modification time
    if let Ok(metadata) = fs::metadata(source)
        && let Ok(mtime) = metadata.modified()
    {
        let _ = filetime::set_file_mtime(dest, filetime::FileTime::from_system_time(mtime));
    }

    fs::remove_file(source)
}

/// Copy file with buffered I/O
///
/// `dest` must not exist. A partly written `dest` is removed on failure.
fn copy_file(source: &Path, dest: &Path) -> io::Result<()> {
    let src_file = File::open(source)?;
    let dest_file = File::options().write(true).create_new(true).open(dest)?;

    let copied = copy_contents(src_file, dest_file);
    if copied.is_err() {
        let _ = fs::remove_file(dest);
    }
    copied
}

fn copy_contents(src_file: File, dest_file: File) -> io::Result<()> {
    let mut reader = BufReader::with_capacity(COPY_BUFFER_SIZE, src_file);
    let mut writer = BufWriter::with_capacity(COPY_BUFFER_SIZE, dest_file);

    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        writer.write_all(&buffer[..bytes_read])?;
    }

    writer.flush()?;
    Ok(())
}
