//! Per-session chat history

use serde::Serialize;
use std::collections::VecDeque;

use super::KnowledgeBase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Bot => "Bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// Bounded chat history; the oldest question/answer pairs are dropped first
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    messages: VecDeque<ChatMessage>,
    max_messages: usize,
}

impl ChatTranscript {
    pub fn new(max_messages: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            max_messages,
        }
    }

    /// Ask the bot a question, recording both sides of the exchange.
    ///
    /// Blank queries are ignored and return `None`.
    pub fn ask(&mut self, kb: &KnowledgeBase, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let answer = kb.answer(query).to_string();
        self.messages.push_back(ChatMessage {
            speaker: Speaker::User,
            text: query.to_string(),
        });
        self.messages.push_back(ChatMessage {
            speaker: Speaker::Bot,
            text: answer.clone(),
        });
        self.trim();
        Some(answer)
    }

    /// Drop whole exchanges until under the cap; the latest one always stays
    fn trim(&mut self) {
        let limit = self.max_messages.max(2);
        while self.messages.len() > limit {
            self.messages.pop_front();
            self.messages.pop_front();
        }
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
