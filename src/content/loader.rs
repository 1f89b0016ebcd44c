//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::ContentRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// RON options with IMPLICIT_SOME so optional fields read naturally.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a RON file wrapped in DataFile<T>.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let data: DataFile<T> = ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Load a single RON struct (not wrapped in DataFile).
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Load all content from assets/data/*.ron into a ContentRegistry.
/// Returns errors for any files that fail to load; the level and arena are
/// required, questions and phrases degrade gracefully.
pub fn load_all_content(base_path: &Path) -> Result<ContentRegistry, Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let level = match load_single_file::<LevelDef>(&base_path.join("level.ron")) {
        Ok(level) => Some(level),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let arena = match load_single_file::<ArenaDef>(&base_path.join("boss_arena.ron")) {
        Ok(arena) => Some(arena),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let mut registry = ContentRegistry::default();

    match load_data_file::<QuestionDef>(&base_path.join("questions.ron")) {
        Ok(questions) => {
            for question in questions {
                registry.questions.insert(question.topic_id, question);
            }
        }
        Err(e) => errors.push(e),
    }

    match load_data_file::<PhraseDef>(&base_path.join("phrases.ron")) {
        Ok(phrases) => registry.phrases = phrases,
        Err(e) => errors.push(e),
    }

    // Level and arena are required; bail out with everything we collected.
    let (Some(level), Some(arena)) = (level, arena) else {
        return Err(errors);
    };
    registry.level = level;
    registry.arena = arena;

    if errors.is_empty() {
        Ok(registry)
    } else {
        Err(errors)
    }
}
