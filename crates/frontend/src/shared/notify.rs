//! Leveled, auto-expiring user notices (the toast stack).
//!
//! Every remote failure must surface exactly one notice; pages push here
//! instead of rendering their own error text.

use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "notice notice--success",
            NoticeLevel::Info => "notice notice--info",
            NoticeLevel::Warning => "notice notice--warning",
            NoticeLevel::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct NotifyService {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn notices(&self) -> ReadSignal<Vec<Notice>> {
        self.notices.read_only()
    }

    pub fn push(&self, level: NoticeLevel, text: impl Into<String>) {
        let id = self.next_id.with_value(|id| *id);
        self.next_id.update_value(|id| *id += 1);
        let text = text.into();
        if level == NoticeLevel::Error {
            log::warn!("notice: {}", text);
        }
        self.notices.update(|notices| {
            notices.push(Notice { id, level, text });
        });

        let notices = self.notices;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            notices.update(|list| list.retain(|notice| notice.id != id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeLevel::Success, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(NoticeLevel::Info, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.push(NoticeLevel::Warning, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeLevel::Error, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|notice| notice.id != id));
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notify() -> NotifyService {
    use_context::<NotifyService>().expect("NotifyService not found in component tree")
}

/// Fixed-position notice stack, mounted once in the shell.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let notify = use_notify();
    let notices = notify.notices();

    view! {
        <div class="notice-stack">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=notice.level.css_class()
                            on:click=move |_| notify.dismiss(id)
                        >
                            {notice.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
