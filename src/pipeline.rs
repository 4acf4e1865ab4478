/*!
 * The translation pipeline orchestrator.
 *
 * Sequences the core stages deterministically around the external
 * translation call:
 *
 * `Normalize → DetectLanguage → ApplyGlossaryPlaceholders →
 * ProtectTechnicalTokens → CallExternalTranslator →
 * UnprotectTechnicalTokens → RestoreGlossaryPlaceholders`
 *
 * If the external call fails, the pipeline falls back to treating the
 * protected, placeholder-laden text as the translation result and proceeds
 * with the restore stages, so the final answer still reconstructs every
 * glossary term even though no real translation occurred for the remainder.
 */

use std::sync::Arc;

use anyhow::Result;
use log::{debug, info, warn};

use crate::glossary::{TermIndex, restore_placeholders};
use crate::language::{Language, detect_language};
use crate::normalizer::TextNormalizer;
use crate::protection::TokenProtector;
use crate::providers::Translator;

/// Final result of one pipeline run
#[derive(Debug, Clone, serde::Serialize)]
pub struct TranslationOutcome {
    /// The final text with all glossary terms in their prescribed forms
    pub translated_text: String,
    /// The source language picked by the detection heuristic
    pub detected_source: Language,
}

/// Orchestrator over the term index, token protector and external translator.
///
/// The index is shared and read-only; everything else a run touches is
/// request-local, so one pipeline value serves concurrent requests.
pub struct TranslationPipeline {
    index: Arc<TermIndex>,
    translator: Arc<dyn Translator>,
    normalizer: TextNormalizer,
    protector: TokenProtector,
}

impl TranslationPipeline {
    /// Create a pipeline over a pre-built term index and a translator
    pub fn new(index: Arc<TermIndex>, translator: Arc<dyn Translator>) -> Self {
        Self {
            index,
            translator,
            normalizer: TextNormalizer::new(),
            protector: TokenProtector::new(),
        }
    }

    /// Run the full pipeline on one text.
    ///
    /// Translator failures never surface to the caller; they are logged and
    /// the fallback path reconstructs glossary terms from the untranslated
    /// remainder.
    pub async fn run(&self, text: &str) -> Result<TranslationOutcome> {
        let normalized = self.normalizer.normalize(text);
        debug!("Pipeline: normalized input ({} chars)", normalized.chars().count());

        let detected = detect_language(&normalized);
        let target = detected.counterpart();
        info!("Pipeline: detected source language {}", detected.name());

        let application = self.index.apply_placeholders(&normalized, detected);
        if application.had_hits {
            debug!(
                "Pipeline: {} glossary placeholders applied",
                application.placeholders.len()
            );
        }

        let protected = self.protector.protect(&application.text);

        let translated = if protected.trim().is_empty() {
            debug!("Pipeline: nothing left to translate, skipping external call");
            protected.clone()
        } else {
            match self.translator.translate(&protected, detected, target).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(
                        "Pipeline: external translation failed, falling back to protected text: {}",
                        e
                    );
                    protected.clone()
                }
            }
        };

        let unfenced = self.protector.unprotect(&translated);
        let restored = restore_placeholders(&unfenced, &application.placeholders);

        Ok(TranslationOutcome {
            translated_text: restored,
            detected_source: detected,
        })
    }
}
