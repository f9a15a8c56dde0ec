use crate::analyzers::aggregate::summarize;
use crate::analyzers::classify::classify_all;
use crate::analyzers::types::{BagIndex, BagIndexEntry, BagReport, SummaryRow};
use crate::limits::ShotLimits;
use crate::output::{append_record, write_json};
use crate::parser::read_shot_log;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Classifies and summarizes one shot log.
#[tracing::instrument(skip(limits))]
pub fn analyze_log(bag: &str, path: &str, limits: &ShotLimits) -> Result<BagReport> {
    let shots = read_shot_log(path)?;
    let classified = classify_all(&shots, limits)?;
    let clubs = summarize(&classified);

    info!(shots = shots.len(), clubs = clubs.len(), "Bag analyzed");

    Ok(BagReport {
        bag: bag.to_string(),
        generated_at: chrono::Utc::now(),
        shot_count: shots.len(),
        clubs,
    })
}

/// Analyzes every `*.csv` shot log in `base_dir` as its own bag.
///
/// Writes `bags/<bag>.json` per bag, rewrites `summary.csv` with every
/// club/shape row, and finishes with a `bags.json` index, all under
/// `output_dir`.
#[tracing::instrument(skip(limits))]
pub fn analyze_bags(base_dir: &str, output_dir: &str, limits: &ShotLimits) -> Result<BagIndex> {
    fs::create_dir_all(output_dir)?;
    let output_dir = Path::new(output_dir);
    let reports_dir = output_dir.join("bags");
    let summary_csv = output_dir.join("summary.csv");
    if summary_csv.exists() {
        fs::remove_file(&summary_csv)?;
    }
    let summary_csv = summary_csv.to_string_lossy();

    let mut index_entries = Vec::new();

    for (bag, path) in load_bag_logs(base_dir)? {
        let report = analyze_log(&bag, &path.to_string_lossy(), limits)?;

        write_json(&reports_dir.join(format!("{}.json", bag)), &report)?;

        for summary in &report.clubs {
            for row in SummaryRow::rows(&bag, summary) {
                append_record(&summary_csv, &row)?;
            }
        }

        index_entries.push(BagIndexEntry {
            bag: bag.clone(),
            shot_count: report.shot_count,
            club_count: report.clubs.len(),
            good_or_soft_fraction: report.good_or_soft_fraction(),
        });
    }

    let index = BagIndex {
        generated_at: chrono::Utc::now(),
        bags: index_entries,
    };
    write_json(&output_dir.join("bags.json"), &index)?;

    info!(bags = index.bags.len(), "Bag index written");
    Ok(index)
}

/// `(bag name, path)` for each CSV in `base_dir`, sorted by name.
fn load_bag_logs(base_dir: &str) -> Result<Vec<(String, PathBuf)>> {
    let mut logs = Vec::new();

    for entry in fs::read_dir(base_dir)? {
        let entry = entry?;
        let path = entry.path();

        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if !is_csv {
            debug!(path = %path.display(), "Skipping non-CSV entry");
            continue;
        }

        if let Some(bag) = path.file_stem().and_then(|s| s.to_str()) {
            logs.push((bag.to_string(), path.clone()));
        }
    }

    logs.sort();
    Ok(logs)
}
