use crate::config::IndexConfig;
use crate::document::{RecordType, SearchRecord};
use crate::error::Result;
use crate::extract;
use crate::loader::Site;
use crate::writer::{write_index, WriteSummary};
use scraper::Html;
use tracing::{debug, info};

/// Which extractor a stage runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    Qa,
    ArgCards {
        page_url: &'static str,
        kind: RecordType,
    },
    Essay {
        page_url: &'static str,
        kind: RecordType,
    },
    Terms,
    Toc,
}

impl Extractor {
    pub fn extract(&self, doc: &Html) -> Vec<SearchRecord> {
        match *self {
            Extractor::Qa => extract::extract_qa(doc),
            Extractor::ArgCards { page_url, kind } => extract::extract_arg_cards(doc, page_url, kind),
            Extractor::Essay { page_url, kind } => extract::extract_essay(doc, page_url, kind),
            Extractor::Terms => extract::extract_terms(doc),
            Extractor::Toc => extract::extract_toc(doc),
        }
    }
}

/// One page file and the extractor run against it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub file: &'static str,
    /// Plural noun used in progress lines ("12 terms").
    pub noun: &'static str,
    pub extractor: Extractor,
}

/// The default run, in output order.
pub const STAGES: [Stage; 5] = [
    Stage {
        file: "qa.html",
        noun: "Q&A cards",
        extractor: Extractor::Qa,
    },
    Stage {
        file: "argumentit.html",
        noun: "arguments",
        extractor: Extractor::ArgCards {
            page_url: "argumentit",
            kind: RecordType::ARGUMENT,
        },
    },
    Stage {
        file: "kielen-valta.html",
        noun: "language patterns",
        extractor: Extractor::ArgCards {
            page_url: "kielen-valta",
            kind: RecordType::LANGUAGE,
        },
    },
    Stage {
        file: "kannustinketju.html",
        noun: "sections",
        extractor: Extractor::Essay {
            page_url: "kannustinketju",
            kind: RecordType::INCENTIVE,
        },
    },
    Stage {
        file: "sanakirja.html",
        noun: "terms",
        extractor: Extractor::Terms,
    },
];

/// Table of contents; appended after [`STAGES`] when enabled.
pub const TOC_STAGE: Stage = Stage {
    file: "sisallys.html",
    noun: "chapters",
    extractor: Extractor::Toc,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Indexed(usize),
    /// Page file not found.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    pub stage: Stage,
    pub status: StageStatus,
}

/// Records gathered by a run, plus what each stage did
#[derive(Debug, Clone, Default)]
pub struct IndexReport {
    pub records: Vec<SearchRecord>,
    pub stages: Vec<StageOutcome>,
}

impl IndexReport {
    pub fn skipped(&self) -> impl Iterator<Item = &Stage> {
        self.stages
            .iter()
            .filter(|o| o.status == StageStatus::Skipped)
            .map(|o| &o.stage)
    }
}

/// Runs the stages against a site directory and writes the index
pub struct Indexer {
    site: Site,
    config: IndexConfig,
}

impl Indexer {
    pub fn new(config: IndexConfig) -> Self {
        Self {
            site: Site::new(&config.site_dir),
            config,
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Stages for this configuration, in run order
    pub fn stages(&self) -> Vec<Stage> {
        let mut stages = STAGES.to_vec();
        if self.config.include_toc {
            stages.push(TOC_STAGE);
        }
        stages
    }

    /// Run a single stage; `None` when its page is absent
    pub fn run_stage(&self, stage: &Stage) -> Result<Option<Vec<SearchRecord>>> {
        info!("Indexing {}", stage.file);
        let Some(doc) = self.site.load(stage.file)? else {
            return Ok(None);
        };

        let mut records = stage.extractor.extract(&doc);
        if self.config.excerpt_len != crate::text::DEFAULT_EXCERPT_LEN {
            records = records
                .into_iter()
                .map(|r| r.with_excerpt_len(self.config.excerpt_len))
                .collect();
        }
        debug!("{} {} from {}", records.len(), stage.noun, stage.file);
        Ok(Some(records))
    }

    /// Extract every stage without writing anything
    pub fn collect(&self) -> Result<IndexReport> {
        let mut report = IndexReport::default();

        for stage in self.stages() {
            let status = match self.run_stage(&stage)? {
                Some(records) => {
                    let count = records.len();
                    report.records.extend(records);
                    StageStatus::Indexed(count)
                }
                None => StageStatus::Skipped,
            };
            report.stages.push(StageOutcome { stage, status });
        }

        Ok(report)
    }

    /// Overwrite the configured output file with the collected records
    pub fn write(&self, report: &IndexReport) -> Result<WriteSummary> {
        write_index(&self.config.output, &report.records, self.config.indent)
    }

    /// Full run: collect, then write
    pub fn build(&self) -> Result<(IndexReport, WriteSummary)> {
        let report = self.collect()?;
        let summary = self.write(&report)?;
        Ok((report, summary))
    }
}
