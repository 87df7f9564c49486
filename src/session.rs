/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub sender: Sender,
    pub text: String,
}

/// Chat history for one interactive session. Entries are only ever appended
/// in (user, assistant) pairs, so the transcript always alternates and holds
/// exactly two entries per successful exchange. Failed exchanges never touch
/// it; the UI reports those separately.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_exchange(&mut self, query: &str, reply: &str) {
        self.entries.push(TranscriptEntry {
            sender: Sender::User,
            text: query.to_string(),
        });
        self.entries.push(TranscriptEntry {
            sender: Sender::Assistant,
            text: reply.to_string(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last `n` exchanges (2n entries), oldest first.
    pub fn last_exchanges(&self, n: usize) -> &[TranscriptEntry] {
        let wanted = n.saturating_mul(2);
        let start = self.entries.len().saturating_sub(wanted);
        &self.entries[start..]
    }
}
