use serde::Serialize;

/// One element of the configuration screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigEntry {
    #[serde(rename_all = "camelCase")]
    Info { name: String, text: String },
    #[serde(rename = "TEXTINPUT", rename_all = "camelCase")]
    TextInput {
        name: String,
        display_name: String,
        help_text: String,
        placeholder: String,
        is_dynamic: bool,
    },
    #[serde(rename_all = "camelCase")]
    SelectSingle {
        name: String,
        display_name: String,
        help_text: String,
        is_dynamic: bool,
        options: Vec<SelectOption>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub config_params: Vec<ConfigEntry>,
    pub date_range_required: bool,
    /// Absent once every step is filled in
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_stepped_config: bool,
}

/// Builds the configuration screen entry by entry
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
    date_range_required: bool,
    stepped: bool,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(mut self, name: &str, text: &str) -> Self {
        self.entries.push(ConfigEntry::Info {
            name: name.to_string(),
            text: text.to_string(),
        });
        self
    }

    pub fn text_input(
        mut self,
        name: &str,
        display_name: &str,
        help_text: &str,
        placeholder: &str,
    ) -> Self {
        self.entries.push(ConfigEntry::TextInput {
            name: name.to_string(),
            display_name: display_name.to_string(),
            help_text: help_text.to_string(),
            placeholder: placeholder.to_string(),
            is_dynamic: true,
        });
        self
    }

    pub fn select_single(
        mut self,
        name: &str,
        display_name: &str,
        help_text: &str,
        is_dynamic: bool,
        options: Vec<SelectOption>,
    ) -> Self {
        self.entries.push(ConfigEntry::SelectSingle {
            name: name.to_string(),
            display_name: display_name.to_string(),
            help_text: help_text.to_string(),
            is_dynamic,
            options,
        });
        self
    }

    pub fn date_range_required(mut self, required: bool) -> Self {
        self.date_range_required = required;
        self
    }

    pub fn stepped(mut self, stepped: bool) -> Self {
        self.stepped = stepped;
        self
    }

    pub fn build(self) -> ConfigResponse {
        ConfigResponse {
            config_params: self.entries,
            date_range_required: self.date_range_required,
            is_stepped_config: self.stepped,
        }
    }
}
