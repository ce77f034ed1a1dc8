use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::fs as async_fs;
use tracing::debug;

/// Copy `source` into `destination`, returning the path written.
///
/// Files land at `destination/<file name>` and overwrite what is there, keeping the
/// source modification time. Symlinks are recreated, not followed. Directories are
/// only copied when `recursive` is set.
pub async fn copy_into(source: &Path, destination: &Path, recursive: bool) -> io::Result<PathBuf> {
    let name = source.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", source.display()),
        )
    })?;
    let target = destination.join(name);

    let metadata = async_fs::symlink_metadata(source).await?;
    if metadata.is_dir() {
        if !recursive {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is a directory (not copied)", source.display()),
            ));
        }
        debug!("Copying directory tree {:?} -> {:?}", source, target);
        copy_dir_all(source.to_path_buf(), target.clone()).await?;
    } else if metadata.is_symlink() {
        debug!("Recreating symlink {:?} -> {:?}", source, target);
        copy_symlink(source, &target).await?;
    } else {
        debug!("Copying file {:?} -> {:?}", source, target);
        copy_file(source, &target, metadata.modified()?).await?;
    }

    Ok(target)
}

/// Recursively copy a directory, hidden entries included
fn copy_dir_all(
    src: PathBuf,
    dst: PathBuf,
) -> std::pin::Pin<Box<dyn Future<Output = io::Result<()>> + Send>> {
    Box::pin(async move {
        async_fs::create_dir_all(&dst).await?;

        let mut read_dir = async_fs::read_dir(&src).await?;
        let mut entry_count = 0;

        while let Some(entry) = read_dir.next_entry().await? {
            let path = entry.path();
            let target = dst.join(entry.file_name());
            let metadata = async_fs::symlink_metadata(&path).await?;
            entry_count += 1;

            if metadata.is_symlink() {
                copy_symlink(&path, &target).await?;
            } else if metadata.is_dir() {
                copy_dir_all(path, target).await?;
            } else {
                copy_file(&path, &target, metadata.modified()?).await?;
            }
        }

        debug!("Copied {} entries from {:?}", entry_count, src);
        Ok(())
    })
}

async fn copy_file(src: &Path, dst: &Path, modified: SystemTime) -> io::Result<()> {
    // fs::copy would write through a symlink left at the target by an earlier run
    if async_fs::symlink_metadata(dst)
        .await
        .is_ok_and(|m| m.is_symlink())
    {
        async_fs::remove_file(dst).await?;
    }

    async_fs::copy(src, dst).await?;

    // Unchanged inputs must not look newer to make. The owner can set times through a
    // read-only handle on unix, which also covers read-only copies.
    let mut options = async_fs::OpenOptions::new();
    if cfg!(unix) {
        options.read(true);
    } else {
        options.write(true);
    }
    let file = options.open(dst).await?;
    file.into_std().await.set_modified(modified)
}

async fn copy_symlink(src: &Path, dst: &Path) -> io::Result<()> {
    let link = async_fs::read_link(src).await?;

    if let Ok(existing) = async_fs::symlink_metadata(dst).await {
        if existing.is_dir() {
            async_fs::remove_dir_all(dst).await?;
        } else {
            async_fs::remove_file(dst).await?;
        }
    }

    create_symlink(&link, dst).await
}

#[cfg(unix)]
async fn create_symlink(link: &Path, dst: &Path) -> io::Result<()> {
    async_fs::symlink(link, dst).await
}

#[cfg(not(unix))]
async fn create_symlink(link: &Path, dst: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("cannot recreate symlink {} -> {}", dst.display(), link.display()),
    ))
}
