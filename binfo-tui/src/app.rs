use std::sync::Arc;

use binfo_core::Agent;

/// One answered question in the transcript.
pub(crate) struct Exchange {
    pub question: String,
    pub answer: String,
}

pub(crate) struct App {
    pub agent: Arc<Agent>,

    /// Current content of the input line.
    pub input: String,
    /// Answered questions, oldest first.
    pub transcript: Vec<Exchange>,
    /// Lines scrolled up from the bottom of the transcript.
    pub scroll: u16,

    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(agent: Arc<Agent>) -> Self {
        Self {
            agent,
            input: String::new(),
            transcript: Vec::new(),
            scroll: 0,
            is_loading: false,
            error_message: None,
        }
    }

    pub(crate) fn push_exchange(&mut self, question: String, answer: String) {
        self.transcript.push(Exchange { question, answer });
        // Snap back to the latest exchange
        self.scroll = 0;
    }

    pub(crate) fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub(crate) fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
