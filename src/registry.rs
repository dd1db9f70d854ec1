//! Version registry (`versions.json`).
//!
//! Формат: JSON-массив меток, новейшая первой:
//! [
//!   "0.4.x",
//!   "0.3.x"
//! ]
//!
//! Замечания:
//! - Отсутствие файла != пустой реестр: remove предупреждает, reset удаляет файл целиком.
//! - Метки хранятся как есть (файл пишет и генератор сайта), валидация только на входе CLI.
//! - Запись атомарная через tmp+rename.

use std::path::Path;

use crate::error::Result;
use crate::fsio::{read_json_opt, remove_file_if_exists, write_json_atomic};
use crate::label::VersionLabel;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionRegistry {
    versions: Vec<String>,
}

impl VersionRegistry {
    pub fn new(versions: Vec<String>) -> Self {
        Self { versions }
    }

    /// Загрузить реестр; `Ok(None)` если файла нет.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        Ok(read_json_opt::<Vec<String>>(path)?.map(Self::new))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_atomic(path, &self.versions)
    }

    /// Удалить файл реестра; `Ok(false)` если его не было.
    pub fn delete(path: &Path) -> Result<bool> {
        remove_file_if_exists(path)
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn contains(&self, label: &VersionLabel) -> bool {
        self.versions.iter().any(|v| v == label.as_str())
    }

    /// Добавить метку в начало (новейшая первой). Дубликаты не добавляются.
    pub fn prepend(&mut self, label: &VersionLabel) -> bool {
        if self.contains(label) {
            return false;
        }
        self.versions.insert(0, label.to_string());
        true
    }

    /// Убрать все вхождения метки. Возвращает true, если что-то удалено.
    pub fn remove(&mut self, label: &VersionLabel) -> bool {
        let before = self.versions.len();
        self.versions.retain(|v| v != label.as_str());
        self.versions.len() != before
    }
}
