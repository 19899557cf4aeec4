use std::fmt;
use std::str::FromStr;

/// Preference key under which the selected model is stored.
pub const SELECTED_MODEL_KEY: &str = "selected-ai-model";
pub const DEFAULT_MODEL: &str = "gpt-o3";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AiModelId(String);

impl AiModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AiModelId {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

impl fmt::Display for AiModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolTab {
    #[default]
    Text,
    Image,
    Audio,
}

impl ToolTab {
    pub const ALL: [ToolTab; 3] = [ToolTab::Text, ToolTab::Image, ToolTab::Audio];

    pub fn label(self) -> &'static str {
        match self {
            ToolTab::Text => "Text Generation",
            ToolTab::Image => "Image Analysis",
            ToolTab::Audio => "Audio Transcription",
        }
    }
}

impl FromStr for ToolTab {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ToolTab::Text),
            "image" => Ok(ToolTab::Image),
            "audio" => Ok(ToolTab::Audio),
            other => Err(format!("unknown tool tab '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AiToolsState {
    pub active_tool: ToolTab,
    pub selected_model: AiModelId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiToolsView {
    pub tools: Vec<(ToolTab, bool)>,
    pub active_tool: ToolTab,
    pub selected_model: AiModelId,
}

impl AiToolsState {
    pub fn view(&self) -> AiToolsView {
        AiToolsView {
            tools: ToolTab::ALL
                .iter()
                .map(|tool| (*tool, *tool == self.active_tool))
                .collect(),
            active_tool: self.active_tool,
            selected_model: self.selected_model.clone(),
        }
    }
}
