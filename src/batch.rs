use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::config::OutputConfig;
use crate::models::{BatchInfo, BatchSummary, NormalizedRow, RawRow};
use crate::normalize::normalize;
use crate::sql::render::render_batch;

/// Split `total` rows into consecutive batches of at most `size` rows.
pub fn plan_batches(total: usize, size: usize) -> Vec<BatchInfo> {
    if size == 0 {
        return Vec::new();
    }

    (0..total.div_ceil(size))
        .map(|i| {
            let start = i * size;
            let end = (start + size).min(total);
            BatchInfo {
                number: i + 1,
                first_record: start + 1,
                last_record: end,
            }
        })
        .collect()
}

/// Output file name for a 1-based batch number.
pub fn batch_file_name(prefix: &str, number: usize) -> String {
    format!("{prefix}{number}.sql")
}

/// Where a batch file goes; bare file name when writing to the working directory.
pub fn batch_path(out_dir: &Path, file_name: String) -> PathBuf {
    if out_dir == Path::new(".") || out_dir.as_os_str().is_empty() {
        PathBuf::from(file_name)
    } else {
        out_dir.join(file_name)
    }
}

/// Normalize, render and write every batch into `out_dir`.
///
/// Batches are independent; each file only depends on its own rows.
pub fn write_batches(
    rows: &[RawRow],
    output: &OutputConfig,
    out_dir: &Path,
    progress: Option<&ProgressBar>,
) -> Result<Vec<BatchSummary>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut summaries = Vec::new();

    for batch in plan_batches(rows.len(), output.batch_size) {
        let normalized: Vec<NormalizedRow> = rows[batch.range()].iter().map(normalize).collect();
        let sql = render_batch(&batch, &normalized, output);

        let file = batch_path(out_dir, batch_file_name(&output.file_prefix, batch.number));
        std::fs::write(&file, sql).with_context(|| format!("writing {}", file.display()))?;

        let summary = BatchSummary {
            batch,
            members: normalized.len(),
            spouses: normalized.iter().filter(|n| n.spouse.is_some()).count(),
            children: normalized.iter().map(|n| n.children.len()).sum(),
            file,
        };
        debug!(
            batch = summary.batch.number,
            rows = batch.len(),
            spouses = summary.spouses,
            children = summary.children,
            "rendered batch"
        );
        info!(
            "wrote {} (records {}-{})",
            summary.file.display(),
            batch.first_record,
            batch.last_record
        );

        if let Some(pb) = progress {
            pb.inc(1);
        }
        summaries.push(summary);
    }

    Ok(summaries)
}
