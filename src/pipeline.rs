//! Stage orchestration.
//!
//! A [`Pipeline`] composes the loader, reconciler, inference engine and
//! lint rules over a [`DocumentStore`]. Each stage fully consumes its input
//! before the next starts, and the catalog is moved from stage to stage.
//!
//! # Example
//!
//! ```
//! use exercat::config::ExercatConfig;
//! use exercat::pipeline::{Pipeline, WriteMode};
//! use exercat::store::{DocumentStore, MemoryStore};
//! use std::path::Path;
//!
//! let mut store = MemoryStore::new()
//!     .with_document("data/exercises-catalog.json", r#"{"exercises": {}}"#)
//!     .with_document("data/exercises.json", r#"{"exercises": []}"#)
//!     .with_document(
//!         "data/exercise-relationships.json",
//!         r#"{"relationships": {"push-up": {"progressions": [{"exerciseId": "diamond-push-up"}]}}}"#,
//!     );
//!
//! let config = ExercatConfig::default();
//! let result = Pipeline::new(&config, &mut store).build(WriteMode::Write).unwrap();
//!
//! assert!(result.is_success());
//! assert!(result.catalog.contains("diamond-push-up"));
//! assert!(store.exists(Path::new("data/exercises-catalog.json")));
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use crate::catalog::{content_digest, render_catalog, Catalog, RelationshipGraph};
use crate::config::ExercatConfig;
use crate::error::{CatalogError, Result};
use crate::infer::InferenceEngine;
use crate::lint::{self, LintDiagnostic};
use crate::loader::{
    load_relationship_source, load_source, source_name, ExerciseSource, LoadIssue, SourceShape,
};
use crate::reconcile::{missing_ids, reconcile, MergeStats, ReconcileReport, Reconciliation};
use crate::store::DocumentStore;

/// A pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Reconcile,
    Infer,
    Validate,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Load => "Loading sources",
            Stage::Reconcile => "Reconciling",
            Stage::Infer => "Inferring missing exercises",
            Stage::Validate => "Validating relationships",
            Stage::Write => "Writing catalog",
        };
        f.write_str(label)
    }
}

/// Progress events emitted while the pipeline runs.
#[derive(Debug)]
pub enum PipelineProgress<'a> {
    /// A stage is about to start.
    StageStarting(Stage),
    /// A stage finished.
    StageFinished { stage: Stage, summary: String },
    /// A record was dropped while loading.
    Issue(&'a LoadIssue),
}

/// What to do with the rendered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write the catalog if its content changed.
    #[default]
    Write,
    /// Render and digest, but leave the store untouched.
    DryRun,
    /// Compare against the stored document without writing.
    Check,
}

/// Outcome of the write stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    /// The document was created or replaced.
    Written,
    /// The stored document already had identical content.
    Unchanged,
    /// Dry run; nothing written.
    Skipped,
    /// Check mode: the stored document is current.
    UpToDate,
    /// Check mode: the stored document differs or is absent.
    Stale,
}

/// Normalized inputs, before reconciliation.
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    /// Exercise sources in precedence order.
    pub sources: Vec<ExerciseSource>,
    /// The relationship graph.
    pub graph: RelationshipGraph,
    /// Records dropped across all sources.
    pub issues: Vec<LoadIssue>,
}

/// Result of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// The final catalog.
    pub catalog: Catalog,
    /// Coverage analysis of the reconciled sources (before inference).
    pub report: ReconcileReport,
    /// Records dropped while loading.
    pub issues: Vec<LoadIssue>,
    /// Inference counts; `None` when inference did not run.
    pub inferred: Option<MergeStats>,
    /// Lint diagnostics for the final catalog; empty when validation did not run.
    pub diagnostics: Vec<LintDiagnostic>,
    /// Target document path.
    pub output: PathBuf,
    /// SHA-256 of the rendered catalog.
    pub digest: String,
    /// What happened to the target document.
    pub status: OutputStatus,
}

impl PipelineResult {
    /// Relationship references still undefined after inference.
    pub fn dangling(&self) -> usize {
        lint::dangling_count(&self.diagnostics)
    }

    /// Whether the run succeeded: no dangling references and, in check
    /// mode, an up-to-date document.
    pub fn is_success(&self) -> bool {
        self.dangling() == 0 && self.status != OutputStatus::Stale
    }

    /// The failure to report for remaining dangling references, if any.
    pub fn failure(&self) -> Option<CatalogError> {
        match self.dangling() {
            0 => None,
            count => Some(CatalogError::ReconciliationFailure { count }),
        }
    }
}

struct Plan<'p> {
    infer: bool,
    output: &'p Path,
    mode: WriteMode,
}

/// Runs the stages against a document store.
pub struct Pipeline<'a, S: DocumentStore + ?Sized> {
    config: &'a ExercatConfig,
    store: &'a mut S,
}

impl<'a, S: DocumentStore + ?Sized> Pipeline<'a, S> {
    /// Create a pipeline over `store` using the paths in `config`.
    pub fn new(config: &'a ExercatConfig, store: &'a mut S) -> Self {
        Self { config, store }
    }

    /// Load every configured source and the relationship document.
    ///
    /// # Errors
    ///
    /// Fails on the first missing or malformed document.
    pub fn load(&self) -> Result<LoadedInputs> {
        let mut sources = Vec::with_capacity(self.config.sources.len());
        let mut issues = Vec::new();

        for source in &self.config.sources {
            tracing::debug!("Loading source '{}' from {}", source.name, source.path.display());
            let loaded = load_source(&*self.store, source)?;
            issues.extend(loaded.issues);
            sources.push(loaded.value);
        }

        let relationships = load_relationship_source(&*self.store, &self.config.relationships)?;
        issues.extend(relationships.issues);

        Ok(LoadedInputs {
            sources,
            graph: relationships.value,
            issues,
        })
    }

    /// Load and reconcile without inferring or writing.
    pub fn analyze(&self) -> Result<(Reconciliation, Vec<LoadIssue>)> {
        let inputs = self.load()?;
        Ok((reconcile(&inputs.sources, &inputs.graph), inputs.issues))
    }

    /// Full pipeline: load, reconcile, infer, validate, write to `output`.
    pub fn build(&mut self, mode: WriteMode) -> Result<PipelineResult> {
        self.build_with_progress(mode, |_| {})
    }

    /// [`build`](Self::build) with a progress callback.
    pub fn build_with_progress<F>(&mut self, mode: WriteMode, on_progress: F) -> Result<PipelineResult>
    where
        F: FnMut(PipelineProgress<'_>),
    {
        let config = self.config;
        let plan = Plan {
            infer: true,
            output: &config.output,
            mode,
        };
        self.run_loaded(plan, on_progress, |pipeline| pipeline.load())
    }

    /// Load and reconcile, then write the merged catalog without inference
    /// to `consolidated_output`.
    pub fn consolidate(&mut self, mode: WriteMode) -> Result<PipelineResult> {
        self.consolidate_with_progress(mode, |_| {})
    }

    /// [`consolidate`](Self::consolidate) with a progress callback.
    pub fn consolidate_with_progress<F>(
        &mut self,
        mode: WriteMode,
        on_progress: F,
    ) -> Result<PipelineResult>
    where
        F: FnMut(PipelineProgress<'_>),
    {
        let config = self.config;
        let plan = Plan {
            infer: false,
            output: &config.consolidated_output,
            mode,
        };
        self.run_loaded(plan, on_progress, |pipeline| pipeline.load())
    }

    /// Complete the existing catalog at `output` against the relationships
    /// and write it back.
    pub fn generate(&mut self, mode: WriteMode) -> Result<PipelineResult> {
        self.generate_with_progress(mode, |_| {})
    }

    /// [`generate`](Self::generate) with a progress callback.
    pub fn generate_with_progress<F>(&mut self, mode: WriteMode, on_progress: F) -> Result<PipelineResult>
    where
        F: FnMut(PipelineProgress<'_>),
    {
        let config = self.config;
        let plan = Plan {
            infer: true,
            output: &config.output,
            mode,
        };
        self.run_loaded(plan, on_progress, |pipeline| pipeline.load_existing_catalog())
    }

    fn load_existing_catalog(&self) -> Result<LoadedInputs> {
        let output = &self.config.output;
        let source = crate::config::SourceConfig {
            name: source_name(output),
            path: output.clone(),
            shape: SourceShape::Mapping,
        };
        let catalog = load_source(&*self.store, &source)?;
        let relationships = load_relationship_source(&*self.store, &self.config.relationships)?;

        let mut issues = catalog.issues;
        issues.extend(relationships.issues);

        Ok(LoadedInputs {
            sources: vec![catalog.value],
            graph: relationships.value,
            issues,
        })
    }

    fn run_loaded<F, L>(&mut self, plan: Plan<'_>, mut on_progress: F, load: L) -> Result<PipelineResult>
    where
        F: FnMut(PipelineProgress<'_>),
        L: FnOnce(&Self) -> Result<LoadedInputs>,
    {
        on_progress(PipelineProgress::StageStarting(Stage::Load));
        let inputs = load(&*self)?;
        for issue in &inputs.issues {
            tracing::warn!("{}", issue);
            on_progress(PipelineProgress::Issue(issue));
        }
        on_progress(PipelineProgress::StageFinished {
            stage: Stage::Load,
            summary: format!(
                "Loaded {} source(s) and {} relationship entr{}",
                inputs.sources.len(),
                inputs.graph.len(),
                if inputs.graph.len() == 1 { "y" } else { "ies" }
            ),
        });

        on_progress(PipelineProgress::StageStarting(Stage::Reconcile));
        let Reconciliation {
            mut catalog,
            missing,
            report,
        } = reconcile(&inputs.sources, &inputs.graph);
        on_progress(PipelineProgress::StageFinished {
            stage: Stage::Reconcile,
            summary: format!(
                "Merged {} exercise(s), {} referenced but missing",
                catalog.len(),
                missing.len()
            ),
        });

        let mut inferred = None;
        let mut diagnostics = Vec::new();

        if plan.infer {
            on_progress(PipelineProgress::StageStarting(Stage::Infer));
            let stats = InferenceEngine::new().fill(&mut catalog, &missing);
            on_progress(PipelineProgress::StageFinished {
                stage: Stage::Infer,
                summary: format!("Inferred {} exercise(s)", stats.added),
            });
            inferred = Some(stats);

            on_progress(PipelineProgress::StageStarting(Stage::Validate));
            let remaining = missing_ids(&catalog, &inputs.graph);
            if !remaining.is_empty() {
                tracing::warn!(
                    "{} referenced id(s) still undefined after inference",
                    remaining.len()
                );
            }
            diagnostics = lint::lint(&catalog, &inputs.graph);
            on_progress(PipelineProgress::StageFinished {
                stage: Stage::Validate,
                summary: format!("{} diagnostic(s)", diagnostics.len()),
            });
        }

        on_progress(PipelineProgress::StageStarting(Stage::Write));
        let content = render_catalog(&catalog)?;
        let digest = content_digest(&content);
        let status = self.persist(plan.output, &content, plan.mode)?;
        on_progress(PipelineProgress::StageFinished {
            stage: Stage::Write,
            summary: format!("{} ({})", plan.output.display(), status_label(status)),
        });

        Ok(PipelineResult {
            catalog,
            report,
            issues: inputs.issues,
            inferred,
            diagnostics,
            output: plan.output.to_path_buf(),
            digest,
            status,
        })
    }

    fn persist(&mut self, output: &Path, content: &str, mode: WriteMode) -> Result<OutputStatus> {
        let current = if self.store.exists(output) {
            Some(self.store.read(output)?)
        } else {
            None
        };
        let unchanged = current.as_deref() == Some(content);

        let status = match mode {
            WriteMode::Check if unchanged => OutputStatus::UpToDate,
            WriteMode::Check => OutputStatus::Stale,
            WriteMode::DryRun => OutputStatus::Skipped,
            WriteMode::Write if unchanged => OutputStatus::Unchanged,
            WriteMode::Write => {
                self.store.write(output, content)?;
                tracing::info!("Wrote {}", output.display());
                OutputStatus::Written
            }
        };

        Ok(status)
    }
}

fn status_label(status: OutputStatus) -> &'static str {
    match status {
        OutputStatus::Written => "written",
        OutputStatus::Unchanged => "unchanged",
        OutputStatus::Skipped => "dry run",
        OutputStatus::UpToDate => "up to date",
        OutputStatus::Stale => "out of date",
    }
}
