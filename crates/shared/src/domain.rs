/// Where the search keyword comes from. Exactly one source is active at a
/// time (radio semantics in the GUI, `--keyword` presence in the CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordSource {
    Sheet,
    Custom,
}

impl KeywordSource {
    pub fn use_custom(self) -> bool {
        matches!(self, KeywordSource::Custom)
    }

    pub fn label(self) -> &'static str {
        match self {
            KeywordSource::Sheet => "spreadsheet keyword",
            KeywordSource::Custom => "custom keyword",
        }
    }
}
