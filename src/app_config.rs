use crate::domain::{GeoLocation, OutputFormat, Radius, TimeWindow};
use config::{Config, ConfigError};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::num::NonZeroUsize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    core: Core,
    #[serde(default)]
    timestamps: Timestamps,
    #[serde(default)]
    jobs: Vec<Job>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(
                config::Environment::with_prefix("GEOGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Core {
    seed: Option<u64>,
}

impl Core {
    /// Fixed RNG seed; the generator is seeded from the OS when absent.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[derive(Debug, Default)]
pub struct Timestamps {
    time_window: TimeWindow,
}

impl Timestamps {
    pub fn time_window(&self) -> TimeWindow {
        self.time_window
    }
}

impl<'de> Deserialize<'de> for Timestamps {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            start_ms: u64,
            #[serde(with = "humantime_serde")]
            window: Duration,
        }

        let inner = Inner::deserialize(deserializer)?;
        let time_window = TimeWindow::new(inner.start_ms, inner.window).ok_or_else(|| {
            Error::custom(format!(
                "invalid timestamp window: {} ms from {} ends past the largest representable timestamp",
                inner.window.as_millis(),
                inner.start_ms
            ))
        })?;

        Ok(Timestamps { time_window })
    }
}

/// One output policy: how many files, how many points each, and where they go.
#[derive(Debug, Deserialize)]
pub struct Job {
    name: String,
    center: GeoLocation,
    radius_m: Radius,
    files: NonZeroUsize,
    points_per_file: usize,
    path: String,
    format: OutputFormat,
    #[serde(default)]
    verify: bool,
}

impl Job {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn center(&self) -> GeoLocation {
        self.center
    }

    pub fn radius(&self) -> Radius {
        self.radius_m
    }

    pub fn files(&self) -> usize {
        self.files.get()
    }

    pub fn points_per_file(&self) -> usize {
        self.points_per_file
    }

    /// Output path template, `{index}` is replaced by the file index.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Whether every written file is read back and its point count checked.
    pub fn verify(&self) -> bool {
        self.verify
    }
}

#[cfg(test)]
pub struct JobBuilder {
    job: Job,
}

#[cfg(test)]
impl JobBuilder {
    pub fn new() -> Self {
        JobBuilder {
            job: Job {
                name: "test".to_string(),
                center: GeoLocation::new(52.52, 13.405),
                radius_m: Radius::from_meters(10_000.0).unwrap(),
                files: NonZeroUsize::MIN,
                points_per_file: 5,
                path: "points.json".to_string(),
                format: OutputFormat::Flat,
                verify: false,
            },
        }
    }

    pub fn path(mut self, path: String) -> Self {
        self.job.path = path;
        self
    }

    pub fn files(mut self, files: usize) -> Self {
        self.job.files = NonZeroUsize::new(files).unwrap();
        self
    }

    pub fn points_per_file(mut self, points_per_file: usize) -> Self {
        self.job.points_per_file = points_per_file;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.job.format = format;
        self
    }

    pub fn verify(mut self, verify: bool) -> Self {
        self.job.verify = verify;
        self
    }

    pub fn build(self) -> Job {
        self.job
    }
}
