//! Log entry model and message text resolution

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::MessageResult;
use crate::format::format_template;
use crate::localization::{scoped_key, LocalizationSource};
use crate::markup::strip_color_tags;
use crate::models::{CallStack, EntryKind, ErrorRecord, MessageLevel};

/// An individual entry of the message log
///
/// The entry stores either a literal message or a localization key with
/// optional positional arguments. The readable text is derived on demand by
/// [`display_text`](LogEntry::display_text) and
/// [`log_text`](LogEntry::log_text), so a string table that changes at
/// runtime is picked up by later reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Literal message text; authoritative when no localization key is set
    pub message: String,
    /// Module-local name of the localized template to resolve instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localization_key: Option<String>,
    /// Positional arguments formatted into the localized template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localization_args: Option<Vec<Value>>,
    /// What kind of entry this is
    pub kind: EntryKind,
    /// Severity/verbosity of the message
    pub level: MessageLevel,
    /// When the message was written
    pub timestamp: DateTime<Utc>,
    /// Function that wrote the message
    pub function_name: String,
    /// Module the writing function belongs to
    pub module_name: String,
    /// File from which the message was written
    pub file: String,
    /// Line on which the message was written
    pub line: u32,
    /// Labels applied by the writer, in application order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Additional metadata provided by the writer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    /// Runspace the message was written from
    pub runspace: Uuid,
    /// Computer the message was generated on
    pub computer_name: String,
    /// User that ran the writing code
    pub username: String,
    /// The object the message concerns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Value>,
    /// Call chain at the time of writing
    #[serde(default, skip_serializing_if = "CallStack::is_empty")]
    pub call_stack: CallStack,
    /// Error payload, when the entry accompanies a failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorRecord>,
}

impl LogEntry {
    /// Entry with a literal message; context fields start empty
    pub fn new(
        message: impl Into<String>,
        kind: EntryKind,
        level: MessageLevel,
        function_name: impl Into<String>,
        module_name: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            localization_key: None,
            localization_args: None,
            kind,
            level,
            timestamp: Utc::now(),
            function_name: function_name.into(),
            module_name: module_name.into(),
            file: String::new(),
            line: 0,
            tags: Vec::new(),
            data: None,
            runspace: Uuid::nil(),
            computer_name: String::new(),
            username: String::new(),
            target: None,
            call_stack: CallStack::default(),
            error: None,
        }
    }

    /// Entry resolved from a localized template instead of a literal message
    pub fn localized(
        key: impl Into<String>,
        kind: EntryKind,
        level: MessageLevel,
        function_name: impl Into<String>,
        module_name: impl Into<String>,
    ) -> Self {
        let mut entry = Self::new("", kind, level, function_name, module_name);
        entry.localization_key = Some(key.into());
        entry
    }

    /// Set the positional template arguments
    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.localization_args = Some(args);
        self
    }

    /// Append one tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Append several tags, keeping their order
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Attach one metadata value, creating the data map if needed
    pub fn with_data(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.get_or_insert_with(Map::new).insert(key.into(), value);
        self
    }

    /// Set the object the message concerns
    pub fn with_target(mut self, target: Value) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the call-site file and line
    pub fn with_source(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self
    }

    /// Set the computer and user the message originated from
    pub fn with_identity(
        mut self,
        computer_name: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        self.computer_name = computer_name.into();
        self.username = username.into();
        self
    }

    /// Set the runspace the message was written from
    pub fn with_runspace(mut self, runspace: Uuid) -> Self {
        self.runspace = runspace;
        self
    }

    /// Attach the call chain captured at write time
    pub fn with_call_stack(mut self, call_stack: impl Into<CallStack>) -> Self {
        self.call_stack = call_stack.into();
        self
    }

    /// Attach an error payload
    pub fn with_error(mut self, error: ErrorRecord) -> Self {
        self.error = Some(error);
        self
    }

    /// Human-facing message text.
    ///
    /// The literal message comes back unchanged, markup included. When a
    /// localization key is set, the display template is resolved through
    /// `strings` and, when arguments are present, formatted positionally.
    /// Lookup and formatting failures propagate to the caller.
    pub fn display_text(&self, strings: &dyn LocalizationSource) -> MessageResult<String> {
        match self.template_key() {
            None => Ok(self.message.clone()),
            Some(key) => self.apply_args(strings.display_string(&key)?),
        }
    }

    /// Durable log text.
    ///
    /// Same resolution as [`display_text`](LogEntry::display_text) against
    /// the log-variant templates, with color markup stripped from the result
    /// of every branch.
    pub fn log_text(&self, strings: &dyn LocalizationSource) -> MessageResult<String> {
        let text = match self.template_key() {
            None => self.message.clone(),
            Some(key) => self.apply_args(strings.log_string(&key)?)?,
        };
        Ok(strip_color_tags(&text))
    }

    /// Scoped lookup key, when a non-empty localization key is set
    fn template_key(&self) -> Option<String> {
        self.localization_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .map(|key| scoped_key(&self.module_name, key))
    }

    /// An absent or empty argument list leaves the template verbatim
    fn apply_args(&self, template: String) -> MessageResult<String> {
        match self.localization_args.as_deref() {
            None | Some([]) => Ok(template),
            Some(args) => format_template(&template, args),
        }
    }
}
