//! Spreadsheet export of a run's companies plus a statistics summary.
//!
//! Each export writes one workbook, `recherche_<keyword>_<timestamp>.xlsx`,
//! with an `Entreprises_Trouvees` sheet (`Nom`, `Site`, `Téléphone`, `Email`)
//! and a `Statistiques` sheet (`Métrique`, `Valeur`).

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use prospecta_core::CompanyRecord;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::error::ExportError;

pub const RECORDS_SHEET: &str = "Entreprises_Trouvees";
pub const STATISTICS_SHEET: &str = "Statistiques";

const RECORD_HEADER: [&str; 4] = ["Nom", "Site", "Téléphone", "Email"];
const STATISTICS_HEADER: [&str; 2] = ["Métrique", "Valeur"];

/// Summary counts over a result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStatistics {
    pub keyword: String,
    pub total: usize,
    pub with_website: usize,
    pub with_phone: usize,
    pub with_email: usize,
    pub searched_at: DateTime<Local>,
}

impl ExportStatistics {
    #[must_use]
    pub fn from_records(
        records: &[CompanyRecord],
        keyword: &str,
        searched_at: DateTime<Local>,
    ) -> Self {
        let count = |has: fn(&CompanyRecord) -> bool| records.iter().filter(|r| has(r)).count();
        Self {
            keyword: keyword.to_string(),
            total: records.len(),
            with_website: count(|r| !r.website.trim().is_empty()),
            with_phone: count(|r| r.phone.as_deref().is_some_and(|p| !p.is_empty())),
            with_email: count(|r| r.email.as_deref().is_some_and(|e| !e.is_empty())),
            searched_at,
        }
    }

    /// `(Métrique, Valeur)` rows in export order.
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Mot-clé recherché", self.keyword.clone()),
            ("Total entreprises", self.total.to_string()),
            ("Avec site web", self.with_website.to_string()),
            ("Avec téléphone", self.with_phone.to_string()),
            ("Avec email", self.with_email.to_string()),
            (
                "Date recherche",
                self.searched_at.format("%Y-%m-%d %H:%M").to_string(),
            ),
        ]
    }
}

/// Writes `records` to a workbook in `dir` and returns its path. Failures
/// are logged and yield `None`.
pub fn export(records: &[CompanyRecord], keyword: &str, dir: &Path) -> Option<PathBuf> {
    match try_export(records, keyword, dir, Local::now()) {
        Ok(path) => {
            tracing::info!(path = %path.display(), count = records.len(), "results exported");
            Some(path)
        }
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "export failed");
            None
        }
    }
}

/// Fallible form of [`export`] with an explicit timestamp.
///
/// # Errors
///
/// - [`ExportError::CreateDir`] if `dir` cannot be created.
/// - [`ExportError::Xlsx`] if the workbook cannot be built or saved.
pub fn try_export(
    records: &[CompanyRecord],
    keyword: &str,
    dir: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(format!("{}.xlsx", file_stem(keyword, now)));
    let xlsx_error = |source: XlsxError| ExportError::Xlsx {
        path: path.clone(),
        source,
    };

    let stats = ExportStatistics::from_records(records, keyword, now);
    let mut workbook = build_workbook(records, &stats).map_err(xlsx_error)?;
    workbook.save(&path).map_err(xlsx_error)?;
    Ok(path)
}

/// `recherche_<keyword>_<YYYYMMDD_HHMMSS>`, with whitespace runs in the
/// keyword turned into `_` and path separators dropped.
#[must_use]
pub fn file_stem(keyword: &str, now: DateTime<Local>) -> String {
    let safe_keyword = keyword
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .replace(['/', '\\'], "");
    format!("recherche_{safe_keyword}_{}", now.format("%Y%m%d_%H%M%S"))
}

fn build_workbook(
    records: &[CompanyRecord],
    stats: &ExportStatistics,
) -> Result<Workbook, XlsxError> {
    let bold = Format::new().set_bold();
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet().set_name(RECORDS_SHEET)?;
    write_header(sheet, &RECORD_HEADER, &bold)?;
    for (row, record) in (1u32..).zip(records) {
        let cells = [
            Some(record.name.as_str()),
            Some(record.website.as_str()),
            record.phone.as_deref(),
            record.email.as_deref(),
        ];
        // Missing values stay as blank cells.
        for (col, value) in (0u16..).zip(cells) {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                sheet.write_string(row, col, value)?;
            }
        }
    }

    let sheet = workbook.add_worksheet().set_name(STATISTICS_SHEET)?;
    write_header(sheet, &STATISTICS_HEADER, &bold)?;
    for (row, (metric, value)) in (1u32..).zip(stats.rows()) {
        sheet.write_string(row, 0, metric)?;
        sheet.write_string(row, 1, value.as_str())?;
    }

    Ok(workbook)
}

fn write_header(
    sheet: &mut Worksheet,
    labels: &[&str],
    format: &Format,
) -> Result<(), XlsxError> {
    for (col, label) in (0u16..).zip(labels) {
        sheet.write_string_with_format(0, col, *label, format)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
