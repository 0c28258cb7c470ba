//! Test doubles shared by the integration suites: an in-memory
//! transport standing in for the Table API, a recording notification
//! sink, and a news panel backed by a Vec.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Days, Utc};
use loudia_client::{
    ClientError, ClientResult, HttpClient, NewsPanel, Notification, NotificationSink,
    ReservationForm,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};

/// Canned transport response
pub enum Behavior {
    /// Success with the given JSON body
    Ok(serde_json::Value),
    /// Non-success HTTP status
    Status(u16),
}

impl Behavior {
    fn respond<T: DeserializeOwned>(&self) -> ClientResult<T> {
        match self {
            Behavior::Ok(value) => serde_json::from_value(value.clone()).map_err(ClientError::from),
            Behavior::Status(code) => Err(ClientError::Status(
                StatusCode::from_u16(*code).expect("valid status code"),
            )),
        }
    }
}

/// In-memory transport that records every request it sees.
pub struct MockTransport {
    get_behavior: Behavior,
    post_behavior: Behavior,
    pub gets: Mutex<Vec<String>>,
    pub posts: Mutex<Vec<(String, serde_json::Value)>>,
}

impl MockTransport {
    pub fn new(get_behavior: Behavior, post_behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            get_behavior,
            post_behavior,
            gets: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
        })
    }

    /// Transport for submit tests; GET is never expected
    pub fn posting(behavior: Behavior) -> Arc<Self> {
        Self::new(Behavior::Status(404), behavior)
    }

    /// Transport for news tests; POST is never expected
    pub fn getting(behavior: Behavior) -> Arc<Self> {
        Self::new(behavior, Behavior::Status(404))
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpClient for MockTransport {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.gets.lock().unwrap().push(path.to_string());
        self.get_behavior.respond()
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body).expect("serializable body");
        self.posts.lock().unwrap().push((path.to_string(), body));
        self.post_behavior.respond()
    }
}

/// What the recording sink saw happen on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Render(u64, Notification),
    BeginExit(u64),
    Remove(u64),
}

/// Sink that records banner events instead of drawing them.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Replay the event log to find the banners currently on screen.
    pub fn visible(&self) -> Vec<(u64, Notification)> {
        let mut visible: Vec<(u64, Notification)> = Vec::new();
        for event in self.events() {
            match event {
                SinkEvent::Render(id, notification) => visible.push((id, notification)),
                SinkEvent::Remove(id) => visible.retain(|(v, _)| *v != id),
                SinkEvent::BeginExit(_) => {}
            }
        }
        visible
    }
}

impl NotificationSink for RecordingSink {
    fn render(&self, id: u64, notification: &Notification) {
        self.events
            .lock()
            .unwrap()
            .push(SinkEvent::Render(id, notification.clone()));
    }

    fn begin_exit(&self, id: u64) {
        self.events.lock().unwrap().push(SinkEvent::BeginExit(id));
    }

    fn remove(&self, id: u64) {
        self.events.lock().unwrap().push(SinkEvent::Remove(id));
    }
}

/// News panel backed by a Vec of (date, title, content) rows.
#[derive(Debug, Default)]
pub struct VecPanel {
    pub cleared: bool,
    pub entries: Vec<(String, String, String)>,
}

impl VecPanel {
    /// Panel pre-rendered with one static entry, like the page's HTML.
    pub fn with_static_entry() -> Self {
        Self {
            cleared: false,
            entries: vec![(
                "2026.04.01".to_string(),
                "春の営業について".to_string(),
                "通常通り営業いたします。".to_string(),
            )],
        }
    }
}

impl NewsPanel for VecPanel {
    fn clear(&mut self) {
        self.cleared = true;
        self.entries.clear();
    }

    fn push(&mut self, display_date: &str, title: &str, content: &str) {
        self.entries.push((
            display_date.to_string(),
            title.to_string(),
            content.to_string(),
        ));
    }
}

/// A form that passes validation, dated three days out.
pub fn valid_form() -> ReservationForm {
    let date = Utc::now()
        .date_naive()
        .checked_add_days(Days::new(3))
        .expect("date in range");

    ReservationForm {
        name: "Taro".to_string(),
        phone: "090-1234-5678".to_string(),
        email: "taro@example.com".to_string(),
        guests: "2".to_string(),
        date: date.to_string(),
        time: "18:00".to_string(),
        message: String::new(),
    }
}
