use std::sync::Mutex;

/// Output message captured by MockOutput for testing
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum OutputMessage {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
    Debug(String),
    Group(String),
    EndGroup,
    KeyValue(String, String),
    Raw(String),
}

/// Trait for log output operations to enable testing with mocks
pub trait Output: Send + Sync {
    /// Print a success message
    fn success(&self, message: &str);

    /// Print an info message
    fn info(&self, message: &str);

    /// Report a warning
    fn warning(&self, message: &str);

    /// Report an error
    fn error(&self, message: &str);

    /// Print a debug message
    fn debug(&self, message: &str);

    /// Open a collapsible group
    fn group(&self, title: &str);

    /// Close the current group
    fn end_group(&self);

    /// Print a key-value pair
    fn key_value(&self, key: &str, value: &str);

    /// Print text as-is
    fn raw(&self, text: &str);
}

/// Output for the GitHub Actions runner log
pub struct WorkflowOutput;

impl Output for WorkflowOutput {
    fn success(&self, message: &str) {
        crate::output::success(message);
    }

    fn info(&self, message: &str) {
        crate::output::info(message);
    }

    fn warning(&self, message: &str) {
        crate::output::warning(message);
    }

    fn error(&self, message: &str) {
        crate::output::error(message);
    }

    fn debug(&self, message: &str) {
        crate::output::debug(message);
    }

    fn group(&self, title: &str) {
        crate::output::group(title);
    }

    fn end_group(&self) {
        crate::output::end_group();
    }

    fn key_value(&self, key: &str, value: &str) {
        crate::output::key_value(key, value);
    }

    fn raw(&self, text: &str) {
        crate::output::raw(text);
    }
}

/// Mock output implementation for testing (captures output)
#[allow(dead_code)]
pub struct MockOutput {
    messages: Mutex<Vec<OutputMessage>>,
}

#[allow(dead_code)]
impl MockOutput {
    /// Create new mock output
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Get all captured messages
    pub fn get_messages(&self) -> Vec<OutputMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// Check if a specific message was output
    pub fn contains_message(&self, message: &OutputMessage) -> bool {
        self.messages.lock().unwrap().contains(message)
    }

    /// Get all warning messages
    pub fn get_warnings(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| {
                if let OutputMessage::Warning(msg) = m {
                    Some(msg.clone())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Get all error messages
    pub fn get_errors(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| {
                if let OutputMessage::Error(msg) = m {
                    Some(msg.clone())
                } else {
                    None
                }
            })
            .collect()
    }

    fn push(&self, message: OutputMessage) {
        self.messages.lock().unwrap().push(message);
    }
}

impl Default for MockOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for MockOutput {
    fn success(&self, message: &str) {
        self.push(OutputMessage::Success(message.to_string()));
    }

    fn info(&self, message: &str) {
        self.push(OutputMessage::Info(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.push(OutputMessage::Warning(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(OutputMessage::Error(message.to_string()));
    }

    fn debug(&self, message: &str) {
        self.push(OutputMessage::Debug(message.to_string()));
    }

    fn group(&self, title: &str) {
        self.push(OutputMessage::Group(title.to_string()));
    }

    fn end_group(&self) {
        self.push(OutputMessage::EndGroup);
    }

    fn key_value(&self, key: &str, value: &str) {
        self.push(OutputMessage::KeyValue(key.to_string(), value.to_string()));
    }

    fn raw(&self, text: &str) {
        self.push(OutputMessage::Raw(text.to_string()));
    }
}
