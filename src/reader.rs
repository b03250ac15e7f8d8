//! Folder ingestion and the end-to-end indexing pipeline.

use std::path::{Path, PathBuf};

use crate::config::ReportConfig;
use crate::engine::importance::{self, ImportanceAggregator};
use crate::engine::render::{self, HtmlRenderer};
use crate::engine::sort::{self, SortPolicy};
use crate::engine::tokenizer::Tokenizer;
use crate::engine::vectorizer::CorpusVectorizer;
use crate::index::{Corpus, WordIndex};
use crate::types::{IndexError, IndexResult};

/// Reads documents into a word index and corpus, scores them and writes the
/// report.
///
/// Scores can be merged once, after every document has been ingested.
pub struct DocumentReader {
    config: ReportConfig,
    tokenizer: Tokenizer,
    index: WordIndex,
    corpus: Corpus,
    scored: bool,
}

impl DocumentReader {
    pub fn new(config: ReportConfig) -> Self {
        let index = WordIndex::with_policy(config.occurrences);
        Self {
            config,
            tokenizer: Tokenizer::new(),
            index,
            corpus: Corpus::new(),
            scored: false,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn into_index(self) -> WordIndex {
        self.index
    }

    /// Index every word of one document and add its lowercased text to the corpus.
    pub fn ingest(&mut self, path: &str, text: &str) {
        if self.scored {
            log::warn!("Ingesting {} after scoring; its words stay unscored", path);
        }

        let mut inserted = 0;
        for (word, sentence) in self.tokenizer.word_sentence_pairs(text) {
            self.index.insert(&word, &sentence, path);
            inserted += 1;
        }
        self.corpus.add_document(path, &text.to_lowercase());

        log::debug!("Ingested {}: {} word occurrences", path, inserted);
    }

    /// Read and ingest a single file.
    pub fn read_document(&mut self, path: &Path) -> IndexResult<()> {
        let text = std::fs::read_to_string(path)?;
        self.ingest(&path.to_string_lossy(), &text);
        Ok(())
    }

    /// Ingest every file with the configured extension in `dir`, in file-name
    /// order. Returns the number of documents read.
    pub fn read_folder(&mut self, dir: &Path) -> IndexResult<usize> {
        let extension = self.config.extension().to_string();
        let mut paths: Vec<PathBuf> = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) == Some(extension.as_str()) {
                paths.push(path);
            } else {
                log::debug!("Skipping {}", path.display());
            }
        }
        paths.sort();

        for path in &paths {
            self.read_document(path)?;
        }

        log::info!(
            "Read {} documents from {}: {} distinct words",
            paths.len(),
            dir.display(),
            self.index.len()
        );
        Ok(paths.len())
    }

    /// Score the corpus with the default vectorizer and merge the scores.
    pub fn compute_importance(&mut self) -> IndexResult<usize> {
        self.compute_importance_with(&ImportanceAggregator::new())
    }

    /// Score the corpus with `aggregator` and merge the scores into the index.
    /// Returns the number of words that received a score.
    pub fn compute_importance_with<V: CorpusVectorizer>(
        &mut self,
        aggregator: &ImportanceAggregator<V>,
    ) -> IndexResult<usize> {
        if self.scored {
            return Err(IndexError::AlreadyScored);
        }
        let snapshot = self.corpus.snapshot();
        let scores = aggregator.compute(&snapshot)?;
        let merged = importance::merge(&mut self.index, &scores);
        self.scored = true;
        Ok(merged)
    }

    /// Sort by `sort_order`, falling back to the configured order.
    pub fn sort(&mut self, sort_order: Option<&str>) -> Option<SortPolicy> {
        let order = sort_order.or(self.config.sort_order.as_deref());
        sort::sort_by_name(&mut self.index, order)
    }

    pub fn render_html(&self) -> String {
        HtmlRenderer::new()
            .with_title(self.config.title.clone())
            .with_splice(self.config.splice)
            .render(&self.index)
    }

    /// Sort, then write the HTML report to `path`.
    pub fn write_html(&mut self, path: &Path, sort_order: Option<&str>) -> IndexResult<()> {
        self.sort(sort_order);
        std::fs::write(path, self.render_html())?;
        log::info!("Wrote HTML report to {}", path.display());
        Ok(())
    }

    /// Sort, then write the index as JSON to `path`.
    pub fn write_json(&mut self, path: &Path, sort_order: Option<&str>) -> IndexResult<()> {
        self.sort(sort_order);
        std::fs::write(path, render::to_json(&self.index)?)?;
        log::info!("Wrote JSON index to {}", path.display());
        Ok(())
    }
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}
