//! Catalog Page
//!
//! Debounced search, category filter and pagination over the full catalog
//! or the active search's results.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::{BrowseState, Debouncer, PageView};

use crate::components::{CategoryFilter, PaginationBar, RecipeCard, SearchBar};
use crate::context::use_app_context;
use crate::models::Recipe;
use crate::store::AppStateStoreFields;

/// Search results tagged with the query they answer.
type SearchResult = (String, Option<Vec<Recipe>>);

#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let pagination = ctx.pagination();
    let quiet_ms = u32::try_from(ctx.config().search_debounce_ms).unwrap_or(u32::MAX);

    let browse = RwSignal::new(BrowseState::new());
    let debouncer = StoredValue::new(Debouncer::<String>::new());
    let catalog = RwSignal::new(Vec::<Recipe>::new());
    let catalog_loading = RwSignal::new(true);
    let search = RwSignal::new(None::<SearchResult>);

    let (cached, fresh) = ctx.queries().revalidate_all_recipes();
    if let Some(recipes) = cached {
        catalog.set(recipes);
        catalog_loading.set(false);
    }
    spawn_local(async move {
        let recipes = fresh.await;
        catalog.try_set(recipes);
        catalog_loading.try_set(false);
    });

    if store.categories().with_untracked(Vec::is_empty) {
        spawn_local(async move {
            let categories = ctx.queries().categories().await;
            *store.categories().write() = categories;
        });
    }

    // Run the search whenever the committed query changes
    let committed = Memo::new(move |_| browse.with(|state| state.query().to_string()));
    Effect::new(move |_| {
        let query = committed.get();
        if query.is_empty() {
            return;
        }
        let (cached, fresh) = ctx.queries().revalidate_search(&query);
        if let Some(found) = cached {
            search.set(Some((query.clone(), found)));
        }
        spawn_local(async move {
            let found = fresh.await;
            // Drop results for a query the user has already moved past
            if committed.try_get_untracked().as_deref() == Some(query.as_str()) {
                search.try_set(Some((query, found)));
            }
        });
    });

    let on_input = move |text: String| {
        browse.update(|state| state.set_draft(text.clone()));
        let Some(ticket) = debouncer.try_update_value(|pending| pending.push(text)) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(quiet_ms).await;
            let due = debouncer
                .try_update_value(|pending| pending.fire(ticket))
                .flatten();
            if let Some(text) = due {
                tracing::debug!(query = %text, "search committed");
                browse.try_update(|state| state.commit_query(&text));
            }
        });
    };

    let on_clear = move || {
        debouncer.update_value(|pending| pending.cancel());
        browse.update(|state| {
            state.clear_query();
        });
    };

    let on_category = move |category: String| {
        browse.update(|state| {
            state.set_category(category);
        });
    };

    let page_view = Memo::new(move |_| {
        browse.with(|state| {
            catalog.with(|recipes| {
                search.with(|result| {
                    let matches = result
                        .as_ref()
                        .filter(|(query, _)| query == state.query())
                        .and_then(|(_, found)| found.as_deref());
                    state.apply(recipes, matches, &pagination)
                })
            })
        })
    });

    let loading = Memo::new(move |_| {
        let catalog_ready = !catalog_loading.get();
        browse.with(|state| {
            search.with(|result| {
                state.is_loading(catalog_ready, result.as_ref().map(|(answered, _)| answered.as_str()))
            })
        })
    });

    let on_page = move |page: usize| {
        let total = page_view.with_untracked(|view| view.total_matches);
        browse.update(|state| state.set_page(page, total, &pagination));
    };

    let draft = Signal::derive(move || browse.with(|state| state.draft().to_string()));
    let category = Signal::derive(move || browse.with(|state| state.category().to_string()));

    view! {
        <div class="catalog-page">
            <div class="catalog-controls">
                <SearchBar value=draft on_input=on_input on_clear=on_clear />
                <CategoryFilter selected=category on_change=on_category />
            </div>

            {move || {
                if loading.get() {
                    view! { <div class="loading">"Loading recipes..."</div> }.into_any()
                } else if page_view.with(PageView::is_empty) {
                    view! { <p class="empty-state">"No recipes found for your search."</p> }.into_any()
                } else {
                    view! {
                        <div class="recipe-grid">
                            <For
                                each=move || page_view.get().items
                                key=|recipe| recipe.id.clone()
                                children=|recipe| view! { <RecipeCard recipe=recipe /> }
                            />
                        </div>
                        <PaginationBar pages=page_view on_select=on_page />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
