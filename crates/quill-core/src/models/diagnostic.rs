//! Call-chain snapshots and structured error payloads

use serde::{Deserialize, Serialize};

/// One frame of the call chain at the time a message was written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackFrame {
    /// Function the frame belongs to
    pub function: String,
    /// Script file, when the code came from one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Line within the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl StackFrame {
    /// Frame without file information (interactive input, compiled code)
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            file: None,
            line: None,
        }
    }

    /// Frame with full source position
    pub fn at(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: Some(file.into()),
            line: Some(line),
        }
    }
}

impl std::fmt::Display for StackFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "at {}, {}: line {}", self.function, file, line),
            (Some(file), None) => write!(f, "at {}, {}", self.function, file),
            _ => write!(f, "at {}, <No file>", self.function),
        }
    }
}

/// Snapshot of the call chain, innermost frame first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallStack(pub Vec<StackFrame>);

impl CallStack {
    /// Whether the snapshot holds any frames
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The captured frames, innermost first
    pub fn frames(&self) -> &[StackFrame] {
        &self.0
    }
}

impl From<Vec<StackFrame>> for CallStack {
    fn from(frames: Vec<StackFrame>) -> Self {
        CallStack(frames)
    }
}

impl std::fmt::Display for CallStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, frame) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", frame)?;
        }
        Ok(())
    }
}

/// Structured error payload attached to failure entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Human-readable description of the failure
    pub message: String,
    /// Name of the underlying exception or error type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception_type: Option<String>,
    /// Error category assigned by the host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// The object the failure concerned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<serde_json::Value>,
    /// Rendered script stack trace, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

impl ErrorRecord {
    /// Record carrying only a description
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exception_type: None,
            category: None,
            target: None,
            stack_trace: None,
        }
    }

    /// Set the exception type name
    pub fn with_exception_type(mut self, exception_type: impl Into<String>) -> Self {
        self.exception_type = Some(exception_type.into());
        self
    }

    /// Set the host error category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the failing target
    pub fn with_target(mut self, target: serde_json::Value) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the rendered stack trace
    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }
}
