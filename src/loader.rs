use crate::locale::Locale;
use crate::models::Question;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const RESOURCE_EXTENSION: &str = "txt";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Path of the default-language resource, `<dir>/<resource>.txt`.
pub fn default_resource_path(dir: &Path, resource: &str) -> PathBuf {
    dir.join(format!("{}.{}", resource, RESOURCE_EXTENSION))
}

/// Path of a language variant, `<dir>/<resource>_<lang>.txt`.
pub fn variant_resource_path(dir: &Path, resource: &str, locale: Locale) -> PathBuf {
    dir.join(format!("{}_{}.{}", resource, locale.code(), RESOURCE_EXTENSION))
}

/// Picks the variant for `locale` when one exists, otherwise the default resource.
pub fn resolve_resource_path(dir: &Path, resource: &str, locale: Locale) -> PathBuf {
    if !locale.is_default() {
        let variant = variant_resource_path(dir, resource, locale);
        if variant.is_file() {
            return variant;
        }
        tracing::debug!(
            resource,
            locale = %locale,
            "no language variant, falling back to default resource"
        );
    }
    default_resource_path(dir, resource)
}

pub fn parse_questions(content: &str) -> Vec<Question> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Question::new)
        .collect()
}

pub fn try_load_questions(path: &Path) -> Result<Vec<Question>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_questions(&content))
}

/// Loads the question pool for a layer resource. Read failures are logged and
/// produce an empty pool so the session screen stays usable.
pub fn load_questions(dir: &Path, resource: &str, locale: Locale) -> Vec<Question> {
    let path = resolve_resource_path(dir, resource, locale);
    match try_load_questions(&path) {
        Ok(questions) => {
            tracing::info!(
                path = %path.display(),
                count = questions.len(),
                "loaded question pool"
            );
            questions
        }
        Err(e) => {
            tracing::warn!(error = %e, "question pool unavailable");
            Vec::new()
        }
    }
}

/// [`load_questions`] on the blocking pool.
pub async fn load_questions_async(dir: PathBuf, resource: String, locale: Locale) -> Vec<Question> {
    match tokio::task::spawn_blocking(move || load_questions(&dir, &resource, locale)).await {
        Ok(questions) => questions,
        Err(e) => {
            tracing::warn!(error = %e, "question loader task failed");
            Vec::new()
        }
    }
}
