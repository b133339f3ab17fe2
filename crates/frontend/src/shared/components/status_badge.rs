use leptos::prelude::*;

use contracts::enums::{BookingStatus, JobStatus};

fn job_badge_class(status: &JobStatus) -> &'static str {
    match status {
        JobStatus::Open => "badge badge--open",
        JobStatus::Taken => "badge badge--taken",
        JobStatus::Unknown(_) => "badge badge--muted",
    }
}

fn booking_badge_class(status: &BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "badge badge--pending",
        BookingStatus::Accepted | BookingStatus::Confirmed => "badge badge--accepted",
        BookingStatus::Rejected => "badge badge--rejected",
        BookingStatus::Completed => "badge badge--completed",
        BookingStatus::Unknown(_) => "badge badge--muted",
    }
}

#[component]
pub fn JobStatusBadge(status: JobStatus) -> impl IntoView {
    view! {
        <span class=job_badge_class(&status)>{status.display_name().to_string()}</span>
    }
}

#[component]
pub fn BookingStatusBadge(status: BookingStatus) -> impl IntoView {
    view! {
        <span class=booking_badge_class(&status)>{status.display_name().to_string()}</span>
    }
}
