//! Small file helpers shared by registry/metadata/config writers.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{LifecycleError, Result};

/// Прочитать JSON-файл. `Ok(None)` если файла нет.
pub(crate) fn read_json_opt<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path).map_err(|e| LifecycleError::io(path, e))?;
    let v = serde_json::from_slice(&bytes).map_err(|e| LifecycleError::json(path, e))?;
    Ok(Some(v))
}

/// Записать pretty JSON (2 пробела) атомарно через tmp+rename.
pub(crate) fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut data = serde_json::to_vec_pretty(value).map_err(|e| LifecycleError::json(path, e))?;
    data.push(b'\n');

    let tmp = path.with_extension("json.tmp");
    let res = write_tmp(&tmp, &data)
        .map_err(|e| LifecycleError::io(&tmp, e))
        .and_then(|()| fs::rename(&tmp, path).map_err(|e| LifecycleError::io(path, e)));
    if res.is_err() {
        // недописанный tmp не оставляем
        let _ = fs::remove_file(&tmp);
    }
    res
}

fn write_tmp(tmp: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(tmp)?;
    f.write_all(data)?;
    f.sync_all()
}

/// Удалить дерево каталогов. `Ok(false)` если его не было.
pub(crate) fn remove_tree_if_exists(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_dir_all(path).map_err(|e| LifecycleError::io(path, e))?;
    Ok(true)
}

/// Удалить файл. `Ok(false)` если его не было.
pub(crate) fn remove_file_if_exists(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| LifecycleError::io(path, e))?;
    Ok(true)
}

/// Создать родительский каталог `path`, если его ещё нет.
pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| LifecycleError::io(parent, e))?;
        }
    }
    Ok(())
}
