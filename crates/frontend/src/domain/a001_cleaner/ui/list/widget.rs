use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a001_cleaner::Cleaner;
use contracts::enums::ExperienceBucket;
use contracts::shared::list_filter::{self, FilterCriteria};

use crate::domain::a001_cleaner::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::components::ListTopBar;
use crate::shared::date_utils::format_rate;
use crate::system::auth::storage;

/// Cleaner directory with the client-side filter pipeline: the full list
/// is fetched once, keyword / location / experience narrowing and sorting
/// run locally on every criteria change.
#[component]
pub fn CleanerListPage() -> impl IntoView {
    let ctx = use_app_context();

    let (all_items, set_all_items) = signal(Vec::<Cleaner>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let criteria = RwSignal::new(FilterCriteria::default());

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_cleaners().await {
                Ok(items) => {
                    set_all_items.set(items);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };
    load();

    // Re-runs only when the fetched array or the criteria change; the
    // pipeline never mutates its input.
    let visible = Memo::new(move |_| {
        list_filter::apply(&all_items.get(), &criteria.get(), |c: &Cleaner| {
            c.display_name()
        })
    });

    let toggle_bucket = move |bucket: ExperienceBucket, checked: bool| {
        criteria.update(|c| {
            if checked {
                if !c.experience.contains(&bucket) {
                    c.experience.push(bucket);
                }
            } else {
                c.experience.retain(|b| *b != bucket);
            }
        });
    };

    let book = move |cleaner: Cleaner| {
        // Handoff for the wizard page; id in the route stays the source
        // of truth, the cached record only saves a refetch.
        storage::save_selected_cleaner(&cleaner);
        ctx.navigate(Page::BookCleaner {
            cleaner_id: cleaner.id,
        });
    };

    view! {
        <div class="page cleaner-list">
            <aside class="filter-panel">
                <div class="filter-panel__group">
                    <label class="filter-panel__label">"Search by keyword"</label>
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Name or service"
                        prop:value=move || criteria.get().keyword
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            criteria.update(|c| c.keyword = value);
                        }
                    />
                </div>

                <div class="filter-panel__group">
                    <label class="filter-panel__label">"Location"</label>
                    <input
                        class="form-input"
                        type="text"
                        placeholder="City or postcode"
                        prop:value=move || criteria.get().location
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            criteria.update(|c| c.location = value);
                        }
                    />
                </div>

                <div class="filter-panel__group">
                    <label class="filter-panel__label">"Experience"</label>
                    {ExperienceBucket::all()
                        .into_iter()
                        .map(|bucket| {
                            view! {
                                <label class="filter-panel__checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            criteria.get().experience.contains(&bucket)
                                        }
                                        on:change=move |ev| {
                                            toggle_bucket(bucket, event_target_checked(&ev));
                                        }
                                    />
                                    {bucket.display_name()}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </aside>

            <section class="cleaner-list__results">
                <ListTopBar
                    criteria=criteria
                    visible_count=Signal::derive(move || visible.get().len())
                    noun="cleaners".to_string()
                />

                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <Show when=move || is_loading.get()>
                    <div class="loading">"Loading cleaners..."</div>
                </Show>

                <div class="card-grid">
                    {move || visible.get().into_iter().map(|cleaner| {
                        let for_book = cleaner.clone();
                        view! {
                            <div class="card cleaner-card">
                                <div class="cleaner-card__header">
                                    {cleaner.avatar_url().map(|url| view! {
                                        <img class="cleaner-card__avatar" src=url.to_string() />
                                    })}
                                    <h3 class="cleaner-card__name">
                                        {cleaner.display_name()}
                                        <Show when={
                                            let verified = cleaner.is_verified;
                                            move || verified
                                        }>
                                            <span class="badge badge--verified">"Verified"</span>
                                        </Show>
                                    </h3>
                                </div>
                                <div class="cleaner-card__meta">
                                    <span>{cleaner.experience_bucket().display_name()}</span>
                                    <span>{cleaner.rating_label()}</span>
                                    <span>{format_rate(cleaner.hourly_rate)}</span>
                                    <span>{cleaner.location.clone().unwrap_or_default()}</span>
                                </div>
                                <div class="cleaner-card__services">
                                    {cleaner.services.iter().map(|s| view! {
                                        <span class="tag">{s.clone()}</span>
                                    }).collect_view()}
                                </div>
                                <div class="cleaner-card__actions">
                                    <button
                                        class="btn btn--primary"
                                        on:click=move |_| book(for_book.clone())
                                    >
                                        "Book Now"
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <Show when=move || !is_loading.get() && visible.get().is_empty()>
                    <div class="empty-state">"No cleaners match the current filters."</div>
                </Show>
            </section>
        </div>
    }
}
