#[derive(Debug, Clone)]
pub struct FileItem {
    pub name: String,
    pub selected: bool,
    pub proposed: Option<String>,
    pub status: ProcessingStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStatus {
    Pending,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigInputMode {
    InputFolder,
    OutputFolder,
    Year,
    Suffix,
    Files,
}

impl ConfigInputMode {
    pub fn next(self) -> Self {
        match self {
            ConfigInputMode::InputFolder => ConfigInputMode::OutputFolder,
            ConfigInputMode::OutputFolder => ConfigInputMode::Year,
            ConfigInputMode::Year => ConfigInputMode::Suffix,
            ConfigInputMode::Suffix => ConfigInputMode::Files,
            ConfigInputMode::Files => ConfigInputMode::InputFolder,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            ConfigInputMode::InputFolder => ConfigInputMode::Files,
            ConfigInputMode::OutputFolder => ConfigInputMode::InputFolder,
            ConfigInputMode::Year => ConfigInputMode::OutputFolder,
            ConfigInputMode::Suffix => ConfigInputMode::Year,
            ConfigInputMode::Files => ConfigInputMode::Suffix,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedbackLevel {
    Info,
    Warning,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub level: FeedbackLevel,
    pub text: String,
}
