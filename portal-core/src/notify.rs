//! User-facing notifications
//!
//! Every user-visible outcome is a toast-style notice. The core keeps
//! the severity split and pushes notices into whatever sink the
//! presentation layer registers; without a sink they only reach the log.

/// Notice severity, matching the success/danger toast styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Danger,
}

/// A single user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Notice dispatcher with an optional presentation sink
pub struct Notifier {
    sink: Option<Box<dyn FnMut(Notice)>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self { sink: None }
    }

    /// Create a notifier that forwards every notice to `sink`
    pub fn with_sink(sink: impl FnMut(Notice) + 'static) -> Self {
        Self {
            sink: Some(Box::new(sink)),
        }
    }

    /// Emit a notice
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        let notice = Notice {
            level,
            message: message.into(),
        };
        match notice.level {
            NoticeLevel::Success => tracing::debug!(message = %notice.message, "notice"),
            NoticeLevel::Danger => tracing::warn!(message = %notice.message, "notice"),
        }
        if let Some(sink) = self.sink.as_mut() {
            sink(notice);
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_sink_receives_notices() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut notifier = Notifier::with_sink(move |notice| sink.borrow_mut().push(notice));

        notifier.push(NoticeLevel::Success, "Account added");
        notifier.push(NoticeLevel::Danger, "Email already in use");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].level, NoticeLevel::Success);
        assert_eq!(seen[1].message, "Email already in use");
    }

    #[test]
    fn test_sinkless_notifier_is_silent() {
        let mut notifier = Notifier::new();
        notifier.push(NoticeLevel::Danger, "dropped");
    }
}
