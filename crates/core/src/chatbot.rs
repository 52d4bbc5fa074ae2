//! Keyword-matched studio assistant.
//!
//! [`respond`] is a pure function: the lower-cased input is tested against an
//! ordered list of keyword groups and the first group that matches picks the
//! canned reply. [`ChatSession`] adds the message history and the short
//! "typing" pause before the reply is appended.

use std::time::Duration;

use chrono::Utc;
use serde::Serialize;

use crate::types::DbId;

/// Pause before the assistant's reply is appended.
pub const REPLY_DELAY: Duration = Duration::from_millis(800);

/// First message of every session.
pub const GREETING: &str =
    "Hello! Welcome to G-Limit Studio. 👋 How can we help you capture your special moments today?";

pub const SERVICES_REPLY: &str = "We offer a wide range of professional photography services including portraits, events, weddings, commercial photography, and creative shoots. Each service is tailored to capture your unique story with artistic excellence. With 10+ years of experience and 500+ satisfied clients, we ensure the highest standards of professional quality.";

pub const BOOKING_REPLY: &str = "Booking a session is easy! Contact us to discuss your vision, and we'll schedule a time that works best for you. Every project begins with understanding your story and creating a collaborative experience. We're committed to making your session comfortable and memorable.";

pub const PRICING_REPLY: &str = "Our pricing varies based on the type of session, duration, and deliverables. We offer flexible packages designed to suit different needs and budgets. Contact us for a detailed, personalized quote. Your satisfaction is our priority, and we're committed to exceeding your expectations.";

pub const PORTFOLIO_REPLY: &str = "We've preserved over 50,000 moments for 500+ clients! Our portfolio showcases diverse photography styles across portraits, events, weddings, and commercial work. Each image reflects our artistic vision and professional quality. We'd love to show you examples relevant to your needs!";

pub const CONTACT_REPLY: &str = "You can reach us through our website contact form, by phone, or by visiting The G-Limit Studio in person. We're here to answer all your questions and help bring your creative vision to life. Let us know how we can help!";

pub const LOCATION_REPLY: &str = "The G-Limit Studio is our thoughtfully designed creative space that empowers creativity, precision, and artistic freedom. Visit us to experience our professional equipment, production capabilities, and inspiring creative environment with natural light and versatile backdrops.";

pub const ABOUT_REPLY: &str = "Founded with a passion for capturing life's most meaningful moments, our studio has grown into a trusted destination for professional photography. Every project begins with a simple belief: moments deserve to be preserved with care, intention, and beauty. We don't just take photos—we craft visual stories meant to last generations. Our values include Artistic Excellence, Professional Quality, Personal Connection, and Client Commitment. We believe in creating meaningful, beautiful images that last generations.";

pub const EXPERIENCE_REPLY: &str = "With 10+ Years of Creative excellence, we've built 500+ Trusted partnerships and preserved 50K+ Moments preserved. Our experience speaks to our commitment to excellence and our clients' trust in us.";

pub const HELLO_REPLY: &str = "Hello! Welcome to G-Limit Studio. 👋 How can we help you today? Feel free to ask about our services, pricing, or use the quick replies below!";

pub const THANKS_REPLY: &str = "You're welcome! If you have any other questions about our photography services or would like to book a session, just let us know. We're here to help!";

pub const FALLBACK_REPLY: &str = "Thank you for your message! I'd be happy to help you with information about our photography services, pricing, booking, or anything else. You can also use the quick reply buttons below for common questions!";

/// Keyword groups in match order. Earlier groups win.
const RULES: &[(&[&str], &str)] = &[
    (&["service", "offer"], SERVICES_REPLY),
    (&["book", "appointment", "schedule", "session"], BOOKING_REPLY),
    (&["price", "pricing", "cost"], PRICING_REPLY),
    (&["portfolio", "work", "examples", "photos"], PORTFOLIO_REPLY),
    (&["contact", "reach", "phone", "email"], CONTACT_REPLY),
    (&["location", "where", "address", "studio"], LOCATION_REPLY),
    (&["about", "who", "values"], ABOUT_REPLY),
    (&["experience", "years"], EXPERIENCE_REPLY),
    (&["hello", "hi", "hey"], HELLO_REPLY),
    (&["thank"], THANKS_REPLY),
];

/// Pick the canned reply for a visitor message.
///
/// Matching is by substring on the lower-cased input, so "Prices?" and
/// "what does it COST" both hit the pricing group.
pub fn respond(input: &str) -> &'static str {
    let message = input.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}

/// A one-tap suggestion shown under the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickReply {
    pub label: &'static str,
    pub message: &'static str,
}

pub const QUICK_REPLIES: &[QuickReply] = &[
    QuickReply { label: "Our Services", message: "What services do you offer?" },
    QuickReply { label: "Pricing Info", message: "What are your pricing options?" },
    QuickReply { label: "Book Session", message: "How can I book a photography session?" },
    QuickReply { label: "Portfolio", message: "Can I see your portfolio?" },
    QuickReply { label: "Studio Location", message: "Where is your studio located?" },
    QuickReply { label: "Contact Info", message: "How can I contact you?" },
];

/// The widget is hidden on every admin page.
pub fn should_render(path: &str) -> bool {
    !path.starts_with("/admin")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: DbId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: chrono::DateTime<Utc>,
}

/// Conversation state of one chatbot widget.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: DbId,
    reply_delay: Duration,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::with_reply_delay(REPLY_DELAY)
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session with a custom typing pause (zero in tests).
    pub fn with_reply_delay(reply_delay: Duration) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            next_id: 1,
            reply_delay,
        };
        session.push(GREETING.to_string(), Sender::Bot);
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append the visitor's message, wait, then append the reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub async fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.push(text.to_string(), Sender::User);
        tokio::time::sleep(self.reply_delay).await;
        self.push(respond(text).to_string(), Sender::Bot);
        self.messages.last()
    }

    /// Send the message behind a quick reply button.
    pub async fn send_quick_reply(&mut self, reply: &QuickReply) -> Option<&ChatMessage> {
        self.send(reply.message).await
    }

    fn push(&mut self, text: String, sender: Sender) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
        });
        self.next_id += 1;
    }
}
