//! Yes/no confirmation overlay state.

/// A confirmation dialog about some `subject`.
///
/// Open while it holds a subject. Confirming is `take()`, dismissing is
/// `cancel()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog<T> {
    subject: Option<T>,
}

impl<T> ConfirmDialog<T> {
    pub fn new() -> Self {
        Self { subject: None }
    }

    /// Ask about `subject`, replacing any previous question.
    pub fn open(&mut self, subject: T) {
        self.subject = Some(subject);
    }

    pub fn cancel(&mut self) {
        self.subject = None;
    }

    pub fn is_open(&self) -> bool {
        self.subject.is_some()
    }

    pub fn subject(&self) -> Option<&T> {
        self.subject.as_ref()
    }

    /// Close the dialog, handing back what it was asking about.
    pub fn take(&mut self) -> Option<T> {
        self.subject.take()
    }
}

impl<T> Default for ConfirmDialog<T> {
    fn default() -> Self {
        Self::new()
    }
}
