use leptos::prelude::*;

use contracts::domain::common::EntityId;

/// Route-like page identifier. Router components stay out of the picture;
/// navigation is a plain signal swap.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    CleanerList,
    MyJobs,
    Applications,
    BookCleaner { cleaner_id: EntityId },
    Courses,
    CoursePlayer {
        slug: String,
        lesson_id: Option<EntityId>,
    },
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::CleanerList => "Find Cleaners",
            Page::MyJobs => "My Jobs",
            Page::Applications => "Applications",
            Page::BookCleaner { .. } => "Book a Cleaner",
            Page::Courses => "Courses",
            Page::CoursePlayer { .. } => "Course",
        }
    }
}

/// App-wide navigation state, provided once at the root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::CleanerList),
        }
    }

    pub fn page(&self) -> ReadSignal<Page> {
        self.page.read_only()
    }

    pub fn navigate(&self, page: Page) {
        self.page.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}
