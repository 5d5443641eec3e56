use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;
use rand::{Rng, RngCore};
use thiserror::Error;
use tokio::sync::Mutex;
use crate::core::scheduler::KeyedTasks;
use crate::models::{MatchSummary, Message, Profile};

/// Canned replies the other side picks from
pub const SCRIPTED_REPLIES: [&str; 8] = [
    "That sounds great!",
    "I'm not sure, can I let you know later?",
    "Yes, definitely!",
    "I'd love to!",
    "Let me think about it 🤔",
    "Perfect!",
    "👍 Cool",
    "See you then!",
];

/// Errors from the messaging inbox
#[derive(Debug, Error, PartialEq)]
pub enum ConversationError {
    #[error("Conversation not found: {0}")]
    UnknownConversation(String),

    #[error("Message text is empty")]
    EmptyMessage,
}

/// Reply timing and probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplySettings {
    /// A reply is scheduled when a uniform draw exceeds this
    pub gate_threshold: f64,
    pub min_delay: Duration,
    /// Exclusive upper bound
    pub max_delay: Duration,
}

impl Default for ReplySettings {
    fn default() -> Self {
        Self {
            gate_threshold: 0.3,
            min_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(3000),
        }
    }
}

/// One thread of the inbox
#[derive(Debug, Clone)]
pub struct Thread {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub online: bool,
    pub unread: bool,
    pub typing: bool,
    pub messages: Vec<Message>,
}

impl Thread {
    pub fn new(id: impl Into<String>, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: image_url.into(),
            online: false,
            unread: false,
            typing: false,
            messages: Vec::new(),
        }
    }

    pub fn for_profile(profile: &Profile) -> Self {
        Self::new(profile.id.clone(), profile.name.clone(), profile.image_url.clone())
    }

    pub fn summary(&self) -> MatchSummary {
        let last = self.messages.last();
        MatchSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            online: self.online,
            unread: self.unread,
            last_message: last.map(|m| m.text.clone()),
            last_message_at: last.map(|m| m.time),
            typing: self.typing,
        }
    }
}

/// Snapshot of an open conversation
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationView {
    pub id: String,
    pub messages: Vec<Message>,
    pub typing: bool,
}

/// What happened to an outgoing message
#[derive(Debug, Clone, PartialEq)]
pub struct SendReceipt {
    pub message: Message,
    /// Delay before the reply lands, if one was scheduled by this send
    pub reply_in: Option<Duration>,
}

struct Inbox {
    order: Vec<String>,
    threads: HashMap<String, Thread>,
    replies: KeyedTasks<String>,
    rng: Box<dyn RngCore + Send>,
}

impl Inbox {
    fn thread(&self, id: &str) -> Result<&Thread, ConversationError> {
        self.threads
            .get(id)
            .ok_or_else(|| ConversationError::UnknownConversation(id.to_string()))
    }

    fn thread_mut(&mut self, id: &str) -> Result<&mut Thread, ConversationError> {
        self.threads
            .get_mut(id)
            .ok_or_else(|| ConversationError::UnknownConversation(id.to_string()))
    }
}

/// In-memory inbox that fakes the other side of each conversation
///
/// Sends append immediately. A reply gate decides whether the match answers;
/// if so the thread shows a typing flag until a timer appends a scripted
/// reply. At most one reply timer is outstanding per thread and leaving a
/// thread cancels it. Cheap to clone; clones share the same inbox.
#[derive(Clone)]
pub struct ConversationSimulator {
    inbox: Arc<Mutex<Inbox>>,
    settings: ReplySettings,
}

impl ConversationSimulator {
    pub fn new(settings: ReplySettings, rng: impl RngCore + Send + 'static) -> Self {
        Self {
            inbox: Arc::new(Mutex::new(Inbox {
                order: Vec::new(),
                threads: HashMap::new(),
                replies: KeyedTasks::new(),
                rng: Box::new(rng),
            })),
            settings,
        }
    }

    pub fn settings(&self) -> &ReplySettings {
        &self.settings
    }

    /// Add a thread unless one with the same id exists. Returns true if added.
    pub async fn add_thread(&self, thread: Thread) -> bool {
        let mut inbox = self.inbox.lock().await;
        if inbox.threads.contains_key(&thread.id) {
            return false;
        }
        tracing::info!("Opened conversation thread {} with {}", thread.id, thread.name);
        inbox.order.push(thread.id.clone());
        inbox.threads.insert(thread.id.clone(), thread);
        true
    }

    /// Inbox rows in the order threads were added
    pub async fn summaries(&self) -> Vec<MatchSummary> {
        let inbox = self.inbox.lock().await;
        inbox
            .order
            .iter()
            .filter_map(|id| inbox.threads.get(id))
            .map(Thread::summary)
            .collect()
    }

    /// Snapshot without side effects
    pub async fn view(&self, id: &str) -> Result<ConversationView, ConversationError> {
        let inbox = self.inbox.lock().await;
        let thread = inbox.thread(id)?;
        Ok(ConversationView {
            id: thread.id.clone(),
            messages: thread.messages.clone(),
            typing: thread.typing,
        })
    }

    /// Open a thread, clearing its unread flag
    pub async fn open(&self, id: &str) -> Result<ConversationView, ConversationError> {
        let mut inbox = self.inbox.lock().await;
        let thread = inbox.thread_mut(id)?;
        thread.unread = false;
        Ok(ConversationView {
            id: thread.id.clone(),
            messages: thread.messages.clone(),
            typing: thread.typing,
        })
    }

    pub async fn is_typing(&self, id: &str) -> Result<bool, ConversationError> {
        let inbox = self.inbox.lock().await;
        Ok(inbox.thread(id)?.typing)
    }

    pub async fn reply_pending(&self, id: &str) -> bool {
        self.inbox.lock().await.replies.is_pending(&id.to_string())
    }

    /// Append an outgoing message and maybe schedule a reply
    pub async fn send(&self, id: &str, text: &str) -> Result<SendReceipt, ConversationError> {
        if text.trim().is_empty() {
            return Err(ConversationError::EmptyMessage);
        }

        let mut guard = self.inbox.lock().await;
        let inbox = &mut *guard;

        let message = Message::outgoing(text);
        inbox.thread_mut(id)?.messages.push(message.clone());
        tracing::debug!("Appended message to conversation {}", id);

        let key = id.to_string();
        if inbox.replies.is_pending(&key) {
            tracing::debug!("Reply already pending for {}, not scheduling another", id);
            return Ok(SendReceipt { message, reply_in: None });
        }

        let draw: f64 = inbox.rng.gen();
        if draw <= self.settings.gate_threshold {
            tracing::debug!("Reply gate closed for {} ({:.3})", id, draw);
            return Ok(SendReceipt { message, reply_in: None });
        }

        let delay = self.draw_delay(&mut *inbox.rng);
        inbox.thread_mut(id)?.typing = true;

        let generation = inbox.replies.reserve(key.clone());
        let handle = tokio::spawn(deliver_reply(Arc::downgrade(&self.inbox), key.clone(), generation, delay));
        inbox.replies.attach(&key, generation, handle.abort_handle());

        tracing::info!("Scheduled reply for {} in {}ms", id, delay.as_millis());
        Ok(SendReceipt { message, reply_in: Some(delay) })
    }

    /// Leave a thread, cancelling its pending reply
    pub async fn leave(&self, id: &str) -> Result<bool, ConversationError> {
        let mut guard = self.inbox.lock().await;
        let inbox = &mut *guard;
        inbox.thread(id)?;

        let cancelled = inbox.replies.cancel(&id.to_string());
        if cancelled {
            inbox.thread_mut(id)?.typing = false;
            tracing::info!("Cancelled pending reply for {}", id);
        }
        Ok(cancelled)
    }

    /// Cancel every pending reply
    pub async fn shutdown(&self) {
        let mut guard = self.inbox.lock().await;
        let inbox = &mut *guard;
        inbox.replies.cancel_all();
        for thread in inbox.threads.values_mut() {
            thread.typing = false;
        }
    }

    fn draw_delay(&self, rng: &mut (dyn RngCore + Send)) -> Duration {
        let min = self.settings.min_delay.as_millis() as u64;
        let max = self.settings.max_delay.as_millis() as u64;
        if max <= min {
            return self.settings.min_delay;
        }
        Duration::from_millis(rng.gen_range(min..max))
    }
}

/// Timer body for one scheduled reply. Holds the inbox weakly so dropping the
/// last simulator handle drops the inbox, whose scheduler aborts this task.
async fn deliver_reply(inbox: Weak<Mutex<Inbox>>, id: String, generation: u64, delay: Duration) {
    tokio::time::sleep(delay).await;

    let Some(inbox) = inbox.upgrade() else {
        return;
    };
    let mut guard = inbox.lock().await;
    let inbox = &mut *guard;
    if !inbox.replies.complete(&id, generation) {
        return;
    }

    let text = SCRIPTED_REPLIES[inbox.rng.gen_range(0..SCRIPTED_REPLIES.len())];
    let Some(thread) = inbox.threads.get_mut(&id) else {
        return;
    };

    for message in thread.messages.iter_mut().filter(|m| m.sent) {
        message.read = Some(true);
    }
    thread.messages.push(Message::incoming(text));
    thread.typing = false;
    thread.unread = true;

    tracing::info!("Delivered reply in conversation {}", id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn with_gate(gate_threshold: f64) -> ConversationSimulator {
        ConversationSimulator::new(
            ReplySettings { gate_threshold, ..ReplySettings::default() },
            ChaCha8Rng::seed_from_u64(11),
        )
    }

    fn always_reply() -> ConversationSimulator {
        with_gate(0.0)
    }

    fn never_reply() -> ConversationSimulator {
        with_gate(1.0)
    }

    #[tokio::test]
    async fn test_whitespace_is_rejected() {
        let sim = always_reply();
        sim.add_thread(Thread::new("1", "Alex", "")).await;

        assert_eq!(sim.send("1", "   ").await.unwrap_err(), ConversationError::EmptyMessage);
        assert!(sim.view("1").await.unwrap().messages.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_thread() {
        let sim = always_reply();
        assert_eq!(
            sim.send("404", "hi").await.unwrap_err(),
            ConversationError::UnknownConversation("404".to_string())
        );
        assert!(sim.leave("404").await.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_thread_not_added() {
        let sim = never_reply();
        assert!(sim.add_thread(Thread::new("1", "Alex", "")).await);
        assert!(!sim.add_thread(Thread::new("1", "Alex again", "")).await);
        assert_eq!(sim.summaries().await.len(), 1);
    }

    #[tokio::test]
    async fn test_closed_gate_sends_without_typing() {
        let sim = never_reply();
        sim.add_thread(Thread::new("1", "Alex", "")).await;

        let receipt = sim.send("1", "hi").await.unwrap();
        assert_eq!(receipt.reply_in, None);
        assert!(!sim.is_typing("1").await.unwrap());
        assert!(!sim.reply_pending("1").await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_clears_unread_after_reply() {
        let sim = always_reply();
        sim.add_thread(Thread::new("1", "Alex", "")).await;

        let delay = sim.send("1", "hi").await.unwrap().reply_in.unwrap();
        tokio::time::sleep(delay + Duration::from_millis(1)).await;

        let summary = &sim.summaries().await[0];
        assert!(summary.unread);
        assert!(!summary.typing);

        sim.open("1").await.unwrap();
        assert!(!sim.summaries().await[0].unread);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_simulator_releases_pending_reply() {
        let sim = always_reply();
        sim.add_thread(Thread::new("1", "Alex", "")).await;
        sim.send("1", "hi").await.unwrap();
        assert!(sim.reply_pending("1").await);

        let inbox = Arc::downgrade(&sim.inbox);
        drop(sim);
        assert!(inbox.upgrade().is_none());

        tokio::time::sleep(Duration::from_millis(3001)).await;
        assert!(inbox.upgrade().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_lands_while_a_clone_survives() {
        let sim = always_reply();
        sim.add_thread(Thread::new("1", "Alex", "")).await;
        let other = sim.clone();

        let delay = sim.send("1", "hi").await.unwrap().reply_in.unwrap();
        drop(sim);
        tokio::time::sleep(delay + Duration::from_millis(1)).await;

        assert_eq!(other.view("1").await.unwrap().messages.len(), 2);
    }

    #[test]
    fn test_delay_falls_back_to_min() {
        let sim = ConversationSimulator::new(
            ReplySettings {
                gate_threshold: 0.0,
                min_delay: Duration::from_millis(500),
                max_delay: Duration::from_millis(500),
            },
            StepRng::new(0, 0),
        );
        let mut rng = StepRng::new(7, 1);
        assert_eq!(sim.draw_delay(&mut rng), Duration::from_millis(500));
    }
}
