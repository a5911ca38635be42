//! whoip library: IP geolocation from the command line
//!
//! This library parses the `whoip` command line, looks up every requested IPv4
//! address against a remote geolocation API concurrently, and renders the
//! answers as a table, JSON, CSV or `key: value` lines.
//!
//! # Example
//!
//! ```no_run
//! use whoip::{execute, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let mut stdout = std::io::stdout();
//! execute(["8.8.8.8", "-format=json"], &config, &mut stdout).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are spawned on the Tokio runtime, so `execute` and `lookup_all`
//! must be called from within one.

pub mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod geoip;
pub mod initialization;

// Re-export public API
pub use app::{parse_args, validate, Action, Invocation, Options, Target};
pub use config::{ColorMode, Config, LogFormat, LogLevel};
pub use error_handling::{ArgumentError, LookupError, ValidationError, WhoipError};
pub use export::{OutputFormat, RenderContext};
pub use geoip::{ApiClient, GeoLookup, GeoRecord};
pub use run::{execute, execute_with, lookup_all, render_records};

// Internal run module (contains the dispatch and output logic)
mod run {
    use std::io::Write;
    use std::sync::Arc;

    use futures::future::join_all;
    use log::{debug, info, warn};

    use crate::app::{parse_args, validate, write_usage, write_version, Action, Target};
    use crate::config::Config;
    use crate::error_handling::{LookupError, WhoipError};
    use crate::export::{OutputFormat, RenderContext};
    use crate::geoip::{GeoLookup, GeoRecord};
    use crate::initialization::{init_api_client, init_semaphore};

    /// Looks up every target concurrently and returns the records in input order.
    ///
    /// One task is spawned per target. All tasks run to completion before this
    /// returns, even when some of them fail. With `max_concurrency` set, at most
    /// that many lookups are in flight at once.
    ///
    /// # Errors
    ///
    /// Every failed lookup is logged; the first failure in input order is
    /// returned and no records are.
    pub async fn lookup_all<L: GeoLookup>(
        targets: &[Target],
        lookup: Arc<L>,
        max_concurrency: Option<usize>,
    ) -> Result<Vec<GeoRecord>, LookupError> {
        let semaphore = max_concurrency.map(init_semaphore);
        debug!(
            "Dispatching {} lookup(s) (bound: {})",
            targets.len(),
            max_concurrency.map_or_else(|| "none".to_string(), |n| n.to_string())
        );

        let tasks: Vec<_> = targets
            .iter()
            .cloned()
            .map(|target| {
                let lookup = Arc::clone(&lookup);
                let semaphore = semaphore.as_ref().map(Arc::clone);
                tokio::spawn(async move {
                    let _permit = match semaphore {
                        Some(semaphore) => match semaphore.acquire_owned().await {
                            Ok(permit) => Some(permit),
                            Err(e) => {
                                return Err(LookupError::Task {
                                    target: target.to_string(),
                                    message: e.to_string(),
                                })
                            }
                        },
                        None => None,
                    };
                    lookup.lookup(&target).await
                })
            })
            .collect();

        // Barrier: nothing is returned until every task has finished
        let results = join_all(tasks).await;

        let mut records = Vec::with_capacity(results.len());
        let mut first_error = None;
        for (target, result) in targets.iter().zip(results) {
            let outcome = match result {
                Ok(outcome) => outcome,
                Err(join_error) => Err(LookupError::Task {
                    target: target.to_string(),
                    message: join_error.to_string(),
                }),
            };
            match outcome {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("Lookup failed for {target} ({}): {e}", e.error_type());
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => {
                info!("Resolved {} record(s)", records.len());
                Ok(records)
            }
        }
    }

    /// Writes each record rendered in `format`, one block per record.
    pub fn render_records<W: Write>(
        records: &[GeoRecord],
        format: OutputFormat,
        ctx: &RenderContext,
        out: &mut W,
    ) -> std::io::Result<()> {
        for record in records {
            writeln!(out, "{}", format.render(record, ctx))?;
        }
        out.flush()
    }

    /// Runs one invocation against the API configured in `config`.
    ///
    /// `args` are the command-line tokens after the program name.
    pub async fn execute<I, S, W>(args: I, config: &Config, out: &mut W) -> Result<(), WhoipError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        match validate(parse_args(args)?)? {
            Action::Lookup(invocation) => {
                let client = Arc::new(init_api_client(config)?);
                run_invocation(&invocation.targets, invocation.format, client, config, out).await
            }
            other => write_action(&other, out),
        }
    }

    /// Like `execute`, but with a caller-supplied lookup implementation.
    ///
    /// Only `max_concurrency` is read from `config`.
    pub async fn execute_with<I, S, W, L>(
        args: I,
        lookup: Arc<L>,
        config: &Config,
        out: &mut W,
    ) -> Result<(), WhoipError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
        L: GeoLookup,
    {
        match validate(parse_args(args)?)? {
            Action::Lookup(invocation) => {
                run_invocation(&invocation.targets, invocation.format, lookup, config, out).await
            }
            other => write_action(&other, out),
        }
    }

    async fn run_invocation<L: GeoLookup, W: Write>(
        targets: &[Target],
        format: OutputFormat,
        lookup: Arc<L>,
        config: &Config,
        out: &mut W,
    ) -> Result<(), WhoipError> {
        let records = lookup_all(targets, lookup, config.max_concurrency).await?;
        let ctx = RenderContext::current();
        render_records(&records, format, &ctx, out)?;
        Ok(())
    }

    fn write_action<W: Write>(action: &Action, out: &mut W) -> Result<(), WhoipError> {
        match action {
            Action::Help => write_usage(out)?,
            Action::Version => write_version(out)?,
            Action::Lookup(_) => {}
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;
        use std::future::Future;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Mutex;
        use std::time::Duration;

        use serde_json::json;

        /// In-process lookup with per-target latency and canned answers.
        #[derive(Default)]
        struct FakeLookup {
            delays_ms: HashMap<String, u64>,
            failing: Vec<String>,
            in_flight: AtomicUsize,
            peak_in_flight: AtomicUsize,
            completed: Mutex<Vec<String>>,
        }

        impl GeoLookup for FakeLookup {
            fn lookup(
                &self,
                target: &Target,
            ) -> impl Future<Output = Result<GeoRecord, LookupError>> + Send {
                let query = target.addr().to_string();
                let delay = self.delays_ms.get(&query).copied().unwrap_or(0);
                let fail = self.failing.contains(&query);
                let raw = target.to_string();
                async move {
                    let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    self.in_flight.fetch_sub(1, Ordering::SeqCst);
                    self.completed.lock().unwrap().push(query.clone());
                    if fail {
                        return Err(LookupError::Task {
                            target: raw,
                            message: "simulated failure".into(),
                        });
                    }
                    Ok(serde_json::from_value(json!({"status": "success", "query": query}))
                        .unwrap())
                }
            }
        }

        fn targets(tokens: &[&str]) -> Vec<Target> {
            tokens.iter().map(|t| t.parse().unwrap()).collect()
        }

        fn queries(records: &[GeoRecord]) -> Vec<&str> {
            records.iter().map(GeoRecord::query).collect()
        }

        #[tokio::test]
        async fn test_records_follow_input_order_despite_latency() {
            let fake = Arc::new(FakeLookup {
                delays_ms: HashMap::from([("1.1.1.1".into(), 150), ("2.2.2.2".into(), 10)]),
                ..Default::default()
            });
            let records = lookup_all(&targets(&["1.1.1.1", "2.2.2.2"]), Arc::clone(&fake), None)
                .await
                .unwrap();

            assert_eq!(queries(&records), ["1.1.1.1", "2.2.2.2"]);
            // The slow lookup finished last, so results were reordered
            assert_eq!(*fake.completed.lock().unwrap(), ["2.2.2.2", "1.1.1.1"]);
        }

        #[tokio::test]
        async fn test_unbounded_dispatch_runs_all_at_once() {
            let fake = Arc::new(FakeLookup {
                delays_ms: ["1.0.0.1", "1.0.0.2", "1.0.0.3", "1.0.0.4"]
                    .iter()
                    .map(|ip| (ip.to_string(), 50))
                    .collect(),
                ..Default::default()
            });
            lookup_all(
                &targets(&["1.0.0.1", "1.0.0.2", "1.0.0.3", "1.0.0.4"]),
                Arc::clone(&fake),
                None,
            )
            .await
            .unwrap();
            assert_eq!(fake.peak_in_flight.load(Ordering::SeqCst), 4);
        }

        #[tokio::test]
        async fn test_concurrency_bound_is_respected() {
            let fake = Arc::new(FakeLookup {
                delays_ms: ["1.0.0.1", "1.0.0.2", "1.0.0.3", "1.0.0.4", "1.0.0.5"]
                    .iter()
                    .map(|ip| (ip.to_string(), 30))
                    .collect(),
                ..Default::default()
            });
            let records = lookup_all(
                &targets(&["1.0.0.1", "1.0.0.2", "1.0.0.3", "1.0.0.4", "1.0.0.5"]),
                Arc::clone(&fake),
                Some(2),
            )
            .await
            .unwrap();
            assert_eq!(records.len(), 5);
            assert!(fake.peak_in_flight.load(Ordering::SeqCst) <= 2);
        }

        #[tokio::test]
        async fn test_oversized_bound_does_not_panic() {
            let fake = Arc::new(FakeLookup::default());
            let records = lookup_all(
                &targets(&["127.0.0.1", "1.1.1.1"]),
                Arc::clone(&fake),
                Some(usize::MAX),
            )
            .await
            .unwrap();
            assert_eq!(queries(&records), ["127.0.0.1", "1.1.1.1"]);
        }

        #[tokio::test]
        async fn test_failure_waits_for_all_and_reports_first_in_order() {
            let fake = Arc::new(FakeLookup {
                delays_ms: HashMap::from([("3.3.3.3".into(), 80)]),
                failing: vec!["2.2.2.2".into(), "3.3.3.3".into()],
                ..Default::default()
            });
            let err = lookup_all(
                &targets(&["1.1.1.1", "2.2.2.2:8080", "3.3.3.3"]),
                Arc::clone(&fake),
                None,
            )
            .await
            .unwrap_err();

            assert_eq!(err.target(), "2.2.2.2:8080");
            assert_eq!(fake.completed.lock().unwrap().len(), 3);
        }

        #[tokio::test]
        async fn test_execute_with_renders_in_order() {
            colored::control::set_override(false);
            let fake = Arc::new(FakeLookup {
                delays_ms: HashMap::from([("8.8.8.8".into(), 60)]),
                ..Default::default()
            });
            let mut out = Vec::new();
            execute_with(
                ["8.8.8.8", "1.1.1.1", "-format=newline"],
                fake,
                &Config::default(),
                &mut out,
            )
            .await
            .unwrap();

            assert_eq!(
                String::from_utf8(out).unwrap(),
                "status: success\nquery: 8.8.8.8\nstatus: success\nquery: 1.1.1.1\n"
            );
        }

        #[tokio::test]
        async fn test_execute_with_help_skips_lookups() {
            let fake = Arc::new(FakeLookup::default());
            let mut out = Vec::new();
            execute_with(
                ["8.8.8.8", "-help"],
                Arc::clone(&fake),
                &Config::default(),
                &mut out,
            )
            .await
            .unwrap();

            assert!(String::from_utf8(out).unwrap().starts_with("Usage: whoip"));
            assert!(fake.completed.lock().unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_execute_with_argument_error_skips_lookups() {
            let fake = Arc::new(FakeLookup::default());
            let mut out = Vec::new();
            let err = execute_with(
                ["8.8.8.8", "999.1.1.1"],
                Arc::clone(&fake),
                &Config::default(),
                &mut out,
            )
            .await
            .unwrap_err();

            assert!(matches!(
                err,
                WhoipError::Argument(crate::ArgumentError::InvalidTarget(ref t)) if t == "999.1.1.1"
            ));
            assert!(out.is_empty());
            assert!(fake.completed.lock().unwrap().is_empty());
        }
    }
}
