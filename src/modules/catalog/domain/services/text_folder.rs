use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Step applied to text before it is compared
///
/// Each step is composable and testable in isolation.
pub trait FoldTransformation: Send + Sync {
    fn transform(&self, text: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Canonical Unicode composition (NFC)
///
/// Precomposed and decomposed spellings of the same character become the
/// same code point sequence.
#[derive(Debug, Clone)]
pub struct CanonicalComposition;

impl FoldTransformation for CanonicalComposition {
    fn transform(&self, text: &str) -> String {
        if is_nfc(text) {
            text.to_string()
        } else {
            text.nfc().collect()
        }
    }

    fn name(&self) -> &'static str {
        "CanonicalComposition"
    }
}

/// Simple case folding via Unicode lowercase mapping
#[derive(Debug, Clone)]
pub struct CaseFold;

impl FoldTransformation for CaseFold {
    fn transform(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "CaseFold"
    }
}

/// Folds text through a pipeline of transformations
///
/// Search applies the same folder to the term and to every field value, so a
/// match does not depend on how carefully the caller pre-folded its input.
pub struct TextFolder {
    transformations: Vec<Box<dyn FoldTransformation>>,
}

impl TextFolder {
    /// Create a new empty folder
    pub fn new() -> Self {
        Self {
            transformations: Vec::new(),
        }
    }

    /// NFC, lowercase, then NFC again
    ///
    /// Lowercasing can leave a composed sequence that is no longer in NFC,
    /// hence the second composition. The result is idempotent.
    pub fn search_pipeline() -> Self {
        Self::new()
            .with_canonical_composition()
            .with_case_fold()
            .with_canonical_composition()
    }

    pub fn with_canonical_composition(mut self) -> Self {
        self.transformations.push(Box::new(CanonicalComposition));
        self
    }

    pub fn with_case_fold(mut self) -> Self {
        self.transformations.push(Box::new(CaseFold));
        self
    }

    /// Apply all transformations to the text
    pub fn fold(&self, text: &str) -> String {
        let mut result = text.to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("After {}: '{}'", transformation.name(), result);
        }

        result
    }

    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }
}

impl Default for TextFolder {
    fn default() -> Self {
        Self::search_pipeline()
    }
}
