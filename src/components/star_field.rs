use std::sync::Arc;

use leptos::prelude::*;

use crate::stars::{Star, StarCache, DEFAULT_STAR_COUNT};

/// Stars for `count`, regenerated only when the count actually changes.
///
/// The memo alone would reshuffle whenever the signal notifies, even with an
/// unchanged value, so it reads through a `StarCache`.
pub fn star_memo(count: Signal<usize>) -> Memo<Arc<[Star]>> {
    let cache = StoredValue::new(StarCache::default());
    Memo::new(move |_| {
        let count = count.get();
        cache
            .try_update_value(|cache| cache.stars(count, &mut rand::rng()))
            .unwrap_or_default()
    })
}

#[component]
pub fn StarField(
    /// Number of stars to scatter over the container
    #[prop(into, default = DEFAULT_STAR_COUNT.into())]
    count: Signal<usize>,
) -> impl IntoView {
    let stars = star_memo(count);

    view! {
        <div class="star-field" aria-hidden="true">
            {move || {
                stars
                    .get()
                    .iter()
                    .map(|star| view! { <div class="star" style=star.style()></div> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
