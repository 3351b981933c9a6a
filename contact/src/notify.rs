//! Toast notifications.
//!
//! A small bounded queue. The browser host renders whatever is in it and
//! dismisses each toast once its duration has elapsed.

/// Identifies one toast for later dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Assigned by [`Toasts::push`]; zero until then.
    pub id: ToastId,
    /// Bold first line
    pub title: String,
    /// Body text
    pub description: String,
    /// How long the host keeps it on screen.
    pub duration_ms: u64,
}

impl Toast {
    /// Build a toast that has not been queued yet.
    pub fn new(title: impl Into<String>, description: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            id: ToastId(0),
            title: title.into(),
            description: description.into(),
            duration_ms,
        }
    }

    /// The single generic notice raised for every failed submission.
    pub fn submission_failed(duration_ms: u64) -> Self {
        Self::new("Error", "Something went wrong", duration_ms)
    }
}

/// Bounded toast queue, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toasts {
    items: Vec<Toast>,
    limit: usize,
    next_id: u64,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::with_limit(1)
    }
}

impl Toasts {
    /// Queue that shows at most `limit` toasts at once (at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit: limit.max(1),
            next_id: 1,
        }
    }

    /// Queue `toast`, evicting the oldest entries past the limit.
    pub fn push(&mut self, mut toast: Toast) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        toast.id = id;
        self.items.push(toast);
        if self.items.len() > self.limit {
            let overflow = self.items.len() - self.limit;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove the toast with `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Visible toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    /// Number of visible toasts.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when nothing is shown.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
