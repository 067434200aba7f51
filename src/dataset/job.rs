use crate::app_config::Job;
use crate::dataset::{DatasetError, read_dataset, write_dataset};
use crate::domain::TimeWindow;
use crate::extensions::path_ext::FileName;
use crate::sampler::PointSampler;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

const INDEX_PLACEHOLDER: &str = "{index}";

/// Totals of a finished job.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobReport {
    pub files: usize,
    pub points: usize,
    pub bytes: usize,
}

/// Generates and writes every file of `job` in order, holding one batch in memory at a time.
///
/// Stops at the first failing file; files written before it are kept.
#[instrument(skip_all, fields(job = job.name()))]
pub async fn run_job<R: Rng + ?Sized>(job: &Job, time_window: TimeWindow, rng: &mut R) -> Result<JobReport, DatasetError> {
    let sampler = PointSampler::new(job.center(), job.radius(), time_window);
    let files = job.files();
    info!(
        "🌍 Running job '{}', {} {} file(s) of {} point(s) within {} m of ({}, {})...",
        job.name(),
        files,
        job.format(),
        job.points_per_file(),
        job.radius().meters(),
        sampler.center().latitude,
        sampler.center().longitude
    );

    let mut report = JobReport::default();
    for index in 0..files {
        let path = file_path(job.path(), index, files);
        let points = sampler.generate_dataset(job.points_per_file(), rng);
        let summary = write_dataset(points, &path, job.format()).await?;
        if job.verify() {
            verify(&path, summary.points()).await?;
        }

        info!("📁 [{}/{}] Wrote '{}', {}", index + 1, files, path.string_file_name(), summary);
        report.files += 1;
        report.points += summary.points();
        report.bytes += summary.bytes();
    }

    info!(
        "🌍 Running job '{}'... OK, {} file(s), {} point(s), {} byte(s)",
        job.name(),
        report.files,
        report.points,
        report.bytes
    );
    Ok(report)
}

#[instrument]
async fn verify(path: &Path, expected: usize) -> Result<(), DatasetError> {
    let found = read_dataset(path).await?.len();
    if found != expected {
        return Err(DatasetError::Mismatch {
            path: path.to_path_buf(),
            expected,
            found,
        });
    }
    Ok(())
}

/// Resolves the output path of file `index`.
///
/// `{index}` in the template is replaced by the index. Without a placeholder, a single file uses the template as is and
/// multiple files get the index appended to the file stem.
fn file_path(template: &str, index: usize, files: usize) -> PathBuf {
    if template.contains(INDEX_PLACEHOLDER) {
        return PathBuf::from(template.replace(INDEX_PLACEHOLDER, &index.to_string()));
    }

    let path = Path::new(template);
    if files == 1 {
        return path.to_path_buf();
    }

    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let file_name = match path.extension() {
        Some(extension) => format!("{}{}.{}", stem, index, extension.to_string_lossy()),
        None => format!("{}{}", stem, index),
    };
    path.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::JobBuilder;
    use crate::domain::OutputFormat;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;
    use std::env::temp_dir;

    #[rstest]
    #[case("data/points{index}.json", 7, 100, "data/points7.json")]
    #[case("points4.json", 0, 1, "points4.json")]
    #[case("points.json", 3, 5, "points3.json")]
    #[case("data/points", 2, 5, "data/points2")]
    #[case("out/{index}/{index}.json", 1, 2, "out/1/1.json")]
    fn resolves_file_paths(#[case] template: &str, #[case] index: usize, #[case] files: usize, #[case] expected: &str) {
        assert_eq!(file_path(template, index, files), PathBuf::from(expected));
    }

    #[test_log::test(tokio::test)]
    async fn writes_every_file_of_a_job() -> Result<(), DatasetError> {
        let directory = temp_dir().join(format!("geogen-{}-job", std::process::id()));
        let template = directory.join("points{index}.json");
        let job = JobBuilder::new()
            .path(template.to_string_lossy().into_owned())
            .files(3)
            .points_per_file(20)
            .format(OutputFormat::Envelope)
            .verify(true)
            .build();
        let mut rng = StdRng::seed_from_u64(11);

        let report = run_job(&job, TimeWindow::default(), &mut rng).await?;

        assert_eq!(report.files, 3);
        assert_eq!(report.points, 60);
        for index in 0..3 {
            let points = read_dataset(&directory.join(format!("points{}.json", index))).await?;
            assert_eq!(points.len(), 20);
        }
        Ok(())
    }

    #[test_log::test(tokio::test)]
    async fn verify_detects_a_truncated_file() -> Result<(), DatasetError> {
        let path = temp_dir().join(format!("geogen-{}-job-truncated.json", std::process::id()));
        std::fs::write(&path, "[]").unwrap();

        let result = verify(&path, 5).await;

        assert!(matches!(result, Err(DatasetError::Mismatch { expected: 5, found: 0, .. })));
        Ok(())
    }

    #[test_log::test(tokio::test)]
    async fn stops_at_the_first_failing_file() {
        let blocker = temp_dir().join(format!("geogen-{}-job-blocker", std::process::id()));
        std::fs::write(&blocker, "not a directory").unwrap();
        let job = JobBuilder::new()
            .path(blocker.join("points{index}.json").to_string_lossy().into_owned())
            .files(2)
            .build();

        let result = run_job(&job, TimeWindow::default(), &mut StdRng::seed_from_u64(1)).await;

        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }
}
