use std::path::PathBuf;

use image::imageops::{self, FilterType};

use crate::config::{BatchConfig, CropJob};
use crate::crop::{CropRect, FAVICON_SIZES, PRIMARY_SIZE};
use crate::error::{FavicropError, Result};

pub mod config;
pub mod crop;
pub mod error;
pub mod image_utils;

#[cfg(test)]
mod tests;

/// One file written by [`process`].
#[derive(Debug)]
pub struct WrittenFile {
    pub size: u32,
    pub path: PathBuf,
}

/// Everything [`process`] wrote for one source: the six size-suffixed files
/// plus the primary favicon at the output path itself.
#[derive(Debug)]
pub struct ProcessReport {
    pub input: PathBuf,
    pub sized: Vec<WrittenFile>,
    pub primary: PathBuf,
}

/// Outcome of one manifest job inside a batch.
#[derive(Debug)]
pub enum JobStatus {
    Completed(ProcessReport),
    /// The input file did not exist, [`process`] was never called
    SkippedMissing,
    Failed(FavicropError),
}

#[derive(Debug)]
pub struct JobResult {
    pub job: CropJob,
    pub status: JobStatus,
}

/// Per-job outcomes for a whole manifest run, in manifest order.
#[derive(Debug)]
pub struct BatchSummary {
    pub results: Vec<JobResult>,
}

impl BatchSummary {
    pub fn completed(&self) -> usize {
        self.count(|s| matches!(s, JobStatus::Completed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, JobStatus::SkippedMissing))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, JobStatus::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&JobStatus) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.status)).count()
    }
}

/// Crop away `fraction` of every edge, keeping the center of the image.
pub fn center_crop(image: &image::RgbaImage, fraction: f64) -> Result<image::RgbaImage> {
    let rect = CropRect::centered(image.width(), image.height(), fraction)?;
    Ok(imageops::crop_imm(image, rect.left, rect.top, rect.width(), rect.height()).to_image())
}

/// Generate the full favicon set for one source image.
///
/// Decodes `job.input`, center-crops it by `job.crop_fraction`, then writes
/// a Lanczos-resampled PNG for every size in [`FAVICON_SIZES`] at the
/// derived `_{size}x{size}` paths, and one more at [`PRIMARY_SIZE`] at
/// `job.output` verbatim.
///
/// Writes are not transactional: on error the files already written stay
/// on disk and the rest are abandoned.
pub fn process(job: &CropJob) -> Result<ProcessReport> {
    if !job.input.exists() {
        return Err(FavicropError::MissingInput(job.input.clone()));
    }

    let image = image_utils::read_image(&job.input)?;
    let cropped = center_crop(&image, job.crop_fraction)?;

    let mut sized = Vec::with_capacity(FAVICON_SIZES.len());
    for size in FAVICON_SIZES {
        let resized = imageops::resize(&cropped, size, size, FilterType::Lanczos3);
        let path = crop::sized_path(&job.output, size);
        image_utils::write_png(&resized, &path)?;
        sized.push(WrittenFile { size, path });
    }

    let primary = imageops::resize(&cropped, PRIMARY_SIZE, PRIMARY_SIZE, FilterType::Lanczos3);
    image_utils::write_png(&primary, &job.output)?;

    Ok(ProcessReport {
        input: job.input.clone(),
        sized,
        primary: job.output.clone(),
    })
}

/// Run every manifest job in order, one at a time.
///
/// A missing input is recorded as skipped without calling [`process`]; any
/// other failure is recorded against its job. Neither stops the batch.
pub fn run_batch(config: &BatchConfig) -> BatchSummary {
    let results = config
        .jobs
        .iter()
        .map(|job| {
            let status = if !job.input.exists() {
                JobStatus::SkippedMissing
            } else {
                match process(job) {
                    Ok(report) => JobStatus::Completed(report),
                    Err(err) => JobStatus::Failed(err),
                }
            };
            JobResult {
                job: job.clone(),
                status,
            }
        })
        .collect();

    BatchSummary { results }
}
