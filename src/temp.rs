//! Temporary fixture files
//!
//! Every call writes one file into a fresh directory allocated from the
//! [`TestContext`], so the file disappears together with the test. A failed
//! write aborts the test.

use std::fs::OpenOptions;
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};

use crate::context::{Failure, TestContext};
use crate::error::Result;
use crate::frame::FixtureFrame;
use crate::io::to_csv_string;

/// Write `content` to `test.csv` in a fresh ephemeral directory
#[track_caller]
pub fn create_temp_csv<C, T>(ctx: &C, content: T) -> PathBuf
where
    C: TestContext + ?Sized,
    T: AsRef<[u8]>,
{
    create_temp_file(ctx, content, ".csv")
}

/// Write `content` to `test<extension>` in a fresh ephemeral directory
#[track_caller]
pub fn create_temp_file<C, T>(ctx: &C, content: T, extension: &str) -> PathBuf
where
    C: TestContext + ?Sized,
    T: AsRef<[u8]>,
{
    let location = Location::caller();
    let file_name = format!("test{}", extension);

    match write_fixture(ctx, &file_name, content.as_ref()) {
        Ok(path) => path,
        Err(err) => ctx.abort(Failure::new(
            format!("failed to create fixture file {}: {}", file_name, err),
            location,
        )),
    }
}

/// Render `frame` as CSV and write it to `test.csv`
#[track_caller]
pub fn create_temp_fixture_csv<C>(ctx: &C, frame: &FixtureFrame) -> PathBuf
where
    C: TestContext + ?Sized,
{
    let location = Location::caller();
    match to_csv_string(frame) {
        Ok(text) => create_temp_csv(ctx, text),
        Err(err) => ctx.abort(Failure::new(
            format!("failed to render fixture frame: {}", err),
            location,
        )),
    }
}

/// Write a header line and comma-joined rows to `test.csv`
#[track_caller]
pub fn create_temp_csv_rows<C>(ctx: &C, headers: &[&str], rows: &[Vec<String>]) -> PathBuf
where
    C: TestContext + ?Sized,
{
    let mut content = headers.join(",");
    content.push('\n');
    for row in rows {
        content.push_str(&row.join(","));
        content.push('\n');
    }
    create_temp_csv(ctx, content)
}

fn write_fixture<C>(ctx: &C, file_name: &str, content: &[u8]) -> Result<PathBuf>
where
    C: TestContext + ?Sized,
{
    let path = ctx.temp_dir()?.join(file_name);

    let mut file = open_new(&path)?;
    file.write_all(content)?;
    file.sync_all()?;

    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}

#[cfg(unix)]
fn open_new(path: &Path) -> std::io::Result<std::fs::File> {
    use std::fs::Permissions;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o644)
        .open(path)?;
    // The process umask may have narrowed the mode
    file.set_permissions(Permissions::from_mode(0o644))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_new(path: &Path) -> std::io::Result<std::fs::File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}
