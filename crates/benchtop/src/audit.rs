//! Classification audit: how every element of a curriculum resolves.
//!
//! Authors tune element wording around the ordered keyword table, so the
//! audit reports the keyword that decided each class alongside the title the
//! learner will see.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::curriculum::{Curriculum, CurriculumSource};
use crate::error::{BenchtopError, Result};
use crate::probe::{ProbeClass, ProbeClassifier, ProbeRequest, ProbeResolver};

/// One audited element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRow {
    pub category_id: String,
    pub module_id: String,
    pub element_id: String,
    /// Element type the element resolved with.
    pub element_type: String,
    pub label: Option<String>,
    /// Classified class; empty when an override replaced classification.
    pub class: Option<ProbeClass>,
    /// Keyword that decided the class; empty for generic and overrides.
    pub matched_keyword: Option<String>,
    /// Title the learner sees.
    pub title: String,
    pub has_override: bool,
}

/// Audit of a whole curriculum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<CurriculumSource>,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<AuditRow>,
    /// Element count per classified class.
    pub class_counts: BTreeMap<ProbeClass, usize>,
    /// Number of elements with an author override.
    pub override_count: usize,
}

/// Export format for audit reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuditFormat {
    #[default]
    Tsv,
    Csv,
    Json,
}

impl AuditFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            AuditFormat::Tsv => "tsv",
            AuditFormat::Csv => "csv",
            AuditFormat::Json => "json",
        }
    }
}

impl FromStr for AuditFormat {
    type Err = BenchtopError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(AuditFormat::Tsv),
            "csv" => Ok(AuditFormat::Csv),
            "json" => Ok(AuditFormat::Json),
            _ => Err(BenchtopError::UnsupportedFormat(format!(
                "{}. Use tsv, csv, or json.",
                s
            ))),
        }
    }
}

impl fmt::Display for AuditFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

const HEADER: [&str; 9] = [
    "category_id",
    "module_id",
    "element_id",
    "element_type",
    "label",
    "class",
    "matched_keyword",
    "title",
    "has_override",
];

impl AuditReport {
    /// Audit every element, classifying with `classifier`.
    ///
    /// Elements without a `kind` resolve as `"node"`.
    pub fn build(curriculum: &Curriculum, classifier: &ProbeClassifier) -> Self {
        Self::build_with_element_type(curriculum, classifier, "node")
    }

    /// Audit every element, using `default_element_type` for elements without a `kind`.
    pub fn build_with_element_type(
        curriculum: &Curriculum,
        classifier: &ProbeClassifier,
        default_element_type: &str,
    ) -> Self {
        let resolver = ProbeResolver::new(classifier);
        let mut rows = Vec::with_capacity(curriculum.element_count());
        let mut class_counts = BTreeMap::new();
        let mut override_count = 0;

        for (category, module, element) in curriculum.elements() {
            let element_type = element.kind.as_deref().unwrap_or(default_element_type);
            let request = ProbeRequest::new(element_type)
                .with_category(category)
                .with_module(module)
                .with_element(element);
            let bundle = resolver.resolve(&request);

            let has_override = element.probe.is_some();
            let matched_keyword = if has_override {
                override_count += 1;
                None
            } else {
                classifier
                    .explain(&request.classification_basis())
                    .map(|m| m.keyword.to_string())
            };

            if let Some(class) = bundle.meta.class.filter(|_| !has_override) {
                *class_counts.entry(class).or_insert(0) += 1;
            }

            rows.push(AuditRow {
                category_id: category.id.clone(),
                module_id: module.id.clone(),
                element_id: element.id.clone(),
                element_type: element_type.to_string(),
                label: element.label.clone(),
                class: if has_override { None } else { bundle.meta.class },
                matched_keyword,
                title: bundle.title,
                has_override,
            });
        }

        Self {
            source: curriculum.source.clone(),
            generated_at: Utc::now(),
            rows,
            class_counts,
            override_count,
        }
    }

    /// Rows assigned to a class.
    pub fn rows_for(&self, class: ProbeClass) -> impl Iterator<Item = &AuditRow> {
        self.rows.iter().filter(move |r| r.class == Some(class))
    }

    /// Write the report in the given format.
    pub fn write_to<W: Write>(&self, writer: W, format: AuditFormat) -> Result<()> {
        match format {
            AuditFormat::Json => {
                serde_json::to_writer_pretty(writer, self)?;
                Ok(())
            }
            AuditFormat::Tsv => self.write_delimited(writer, b'\t'),
            AuditFormat::Csv => self.write_delimited(writer, b','),
        }
    }

    fn write_delimited<W: Write>(&self, writer: W, delimiter: u8) -> Result<()> {
        let mut out = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);

        out.write_record(HEADER)?;
        for row in &self.rows {
            out.write_record([
                row.category_id.as_str(),
                row.module_id.as_str(),
                row.element_id.as_str(),
                row.element_type.as_str(),
                row.label.as_deref().unwrap_or(""),
                row.class.map(|c| c.as_str()).unwrap_or(""),
                row.matched_keyword.as_deref().unwrap_or(""),
                row.title.as_str(),
                if row.has_override { "true" } else { "false" },
            ])?;
        }
        out.flush().map_err(|e| BenchtopError::Io {
            path: "<audit output>".into(),
            source: e,
        })?;
        Ok(())
    }

    /// Save the report to a file.
    pub fn save(&self, path: impl AsRef<Path>, format: AuditFormat) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| BenchtopError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.write_to(BufWriter::new(file), format)
    }
}
