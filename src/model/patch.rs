use std::collections::HashMap;

/// How much of a file's changes are included in a custom patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatchStatus {
    Whole,
    Part,
    #[default]
    Unselected,
}

/// Answers the patch status of one file within a given commit reference.
pub trait PatchStatusLookup {
    fn file_status(&self, file_name: &str, reference: &str) -> PatchStatus;
}

impl<F> PatchStatusLookup for F
where
    F: Fn(&str, &str) -> PatchStatus,
{
    fn file_status(&self, file_name: &str, reference: &str) -> PatchStatus {
        self(file_name, reference)
    }
}

/// Per-reference record of which files have been added to a custom patch.
/// Files that were never recorded are `Unselected`.
#[derive(Debug, Clone, Default)]
pub struct PatchSelection {
    by_reference: HashMap<String, HashMap<String, PatchStatus>>,
}

impl PatchSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, file_name: &str, reference: &str, status: PatchStatus) {
        let files = self.by_reference.entry(reference.to_string()).or_default();
        if status == PatchStatus::Unselected {
            files.remove(file_name);
        } else {
            files.insert(file_name.to_string(), status);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_reference.values().all(HashMap::is_empty)
    }
}

impl PatchStatusLookup for PatchSelection {
    fn file_status(&self, file_name: &str, reference: &str) -> PatchStatus {
        self.by_reference
            .get(reference)
            .and_then(|files| files.get(file_name))
            .copied()
            .unwrap_or_default()
    }
}
