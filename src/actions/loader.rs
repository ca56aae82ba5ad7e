//! Load the movement catalog from the external sequences resource
//!
//! The resource is a plain text file: `context =` lines open a section,
//! `frame:action` lines add a legal transition to the open section, and `#`
//! starts a comment. The loader turns it into an eager [`MovementCatalog`];
//! a missing or malformed file is fatal at startup, never mid-match.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::actions::catalog::{ActionId, MovementCatalog};

/// Errors that can occur when loading the sequences resource
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A transition line appeared before any `context =` section
    #[error("line {line}: transition outside of a context section")]
    TransitionOutsideSection { line: usize },
    /// A section named an animation context this build does not know
    #[error("line {line}: unknown animation context '{name}'")]
    UnknownContext { line: usize, name: String },
    /// A transition named an action this build does not know
    #[error("line {line}: unknown action '{name}'")]
    UnknownAction { line: usize, name: String },
    /// File I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Parse a sequences resource from a string
pub fn load_from_str(source: &str) -> Result<MovementCatalog, CatalogError> {
    let mut entries: Vec<(ActionId, Vec<ActionId>)> = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let text = raw.split('#').next().unwrap_or("").trim();

        if text.is_empty() {
            continue;
        }

        if let Some(lhs) = text.split('=').next().filter(|_| text.contains('=')) {
            let name = lhs.trim();
            let context = ActionId::parse(name).ok_or_else(|| CatalogError::UnknownContext {
                line,
                name: name.to_string(),
            })?;
            entries.push((context, Vec::new()));
            continue;
        }

        if let Some((_, rhs)) = text.split_once(':') {
            let name = rhs.trim();
            let action = ActionId::parse(name).ok_or_else(|| CatalogError::UnknownAction {
                line,
                name: name.to_string(),
            })?;
            let (_, actions) = entries
                .last_mut()
                .ok_or(CatalogError::TransitionOutsideSection { line })?;
            actions.push(action);
        }
        // Anything else (frame timing lines, section markers) belongs to the
        // external animation loader and is skipped here.
    }

    let catalog = MovementCatalog::from_entries(entries);
    info!(contexts = catalog.context_count(), "movement catalog loaded");
    Ok(catalog)
}

/// Load a sequences resource from a file on disk
pub fn load_from_file(path: &Path) -> Result<MovementCatalog, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# stock sequences
static =
0:jump
1:punch

walk = 12
0:jump  # mid-walk hop

jump =
0:second-jump
";

    #[test]
    fn test_parse_sections_and_transitions() {
        let catalog = load_from_str(SAMPLE).unwrap();
        let from_static = catalog.legal_actions(ActionId::Static);
        assert!(from_static.contains(&ActionId::Jump));
        assert!(from_static.contains(&ActionId::Punch));
        // implicit walk on grounded contexts
        assert!(from_static.contains(&ActionId::Walk));

        let from_jump = catalog.legal_actions(ActionId::Jump);
        assert_eq!(from_jump, vec![ActionId::SecondJump]);
    }

    #[test]
    fn test_comment_only_lines_ignored() {
        let catalog = load_from_str("# nothing here\n\n# still nothing\n").unwrap();
        assert_eq!(catalog.context_count(), 0);
    }

    #[test]
    fn test_transition_before_section_is_an_error() {
        let err = load_from_str("0:jump\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::TransitionOutsideSection { line: 1 }
        ));
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        let err = load_from_str("static =\n0:levitate\n").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownAction { line: 2, .. }));
    }

    #[test]
    fn test_unknown_context_is_an_error() {
        let err = load_from_str("moonwalk =\n").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownContext { line: 1, .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_from_file(Path::new("/nonexistent/sequences.cfg")).unwrap_err();
        assert!(matches!(err, CatalogError::IoError(_)));
    }
}
