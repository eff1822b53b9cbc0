//! Global actions - not tied to the file storage slice
//!
//! These actions affect the application as a whole.

/// Global actions that affect the entire application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Leave the interactive shell
    Quit,
}
