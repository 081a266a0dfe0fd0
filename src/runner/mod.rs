//! Benchmark orchestration
//!
//! Runs the four stages in strict order: register a throwaway account, log
//! in, build the directory chain, then warm up and time the breadcrumb
//! lookup of the deepest directory. Every stage consumes the previous
//! stage's output; nothing is shared or retried.

use crate::{
    client::ApiClient,
    defaults::PROGRESS_INTERVAL,
    error::{AppError, Result},
    models::{BenchmarkReport, Config, Credentials},
    stats::LatencySummary,
};

/// Deterministic name for the i-th directory in the chain (1-based)
fn directory_name(index: u32) -> String {
    format!("dir-{:04}", index)
}

/// Sequential benchmark driver
pub struct BenchmarkRunner {
    client: ApiClient,
    config: Config,
}

impl BenchmarkRunner {
    /// Create a runner for the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(&config.base_url, config.timeout)?;
        Ok(Self { client, config })
    }

    /// Execute the full benchmark and produce a report
    pub async fn run(&self) -> Result<BenchmarkReport> {
        let credentials = Credentials::generate();

        println!("registering user: {}", credentials.username);
        self.client.register(&credentials).await?;

        println!("logging in");
        let token = self
            .client
            .login(&credentials.username, &credentials.password)
            .await?;

        println!("creating directory chain depth={}", self.config.depth);
        let deepest_uuid = self
            .build_chain(&token, self.config.depth)
            .await?
            .ok_or_else(|| {
                AppError::config("depth must be at least 1 to measure a breadcrumb")
            })?;

        println!("warming up breadcrumb");
        self.client.breadcrumb_timed(&token, &deepest_uuid).await?;

        println!("measuring breadcrumb for uuid={}", deepest_uuid);
        let summary = self
            .measure_breadcrumb(&token, &deepest_uuid, self.config.repeats)
            .await?;

        Ok(BenchmarkReport::new(
            deepest_uuid,
            self.config.depth,
            self.config.repeats,
            summary,
        ))
    }

    /// Create `depth` nested directories, each the child of the previous
    ///
    /// Returns the UUID of the deepest directory, or `None` when depth is 0.
    pub async fn build_chain(&self, token: &str, depth: u32) -> Result<Option<String>> {
        let mut parent: Option<String> = None;

        for i in 1..=depth {
            let name = directory_name(i);
            let uuid = self
                .client
                .create_directory(token, &name, parent.as_deref())
                .await?;

            if i % PROGRESS_INTERVAL == 0 || i == depth {
                println!("created {}/{} directories: {}", i, depth, uuid);
            }
            parent = Some(uuid);
        }

        Ok(parent)
    }

    /// Time `repeats` breadcrumb calls and reduce them to summary statistics
    ///
    /// The caller is expected to have issued a warm-up call already; every
    /// call here contributes a sample.
    pub async fn measure_breadcrumb(
        &self,
        token: &str,
        uuid: &str,
        repeats: u32,
    ) -> Result<LatencySummary> {
        let mut samples_ms = Vec::with_capacity(repeats as usize);

        for _ in 0..repeats {
            let (elapsed, _body) = self.client.breadcrumb_timed(token, uuid).await?;
            samples_ms.push(elapsed.as_secs_f64() * 1000.0);
        }

        LatencySummary::from_samples(&samples_ms)
    }
}
