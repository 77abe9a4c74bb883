//! Single dining review card.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use leptos::prelude::*;

use super::Image;
use crate::types::Review as ReviewData;

/// Test id carried by every photo image inside a review.
pub const PHOTO_TEST_ID: &str = "review-photo";

/// Render a review. Each optional field is emitted only when present; photos
/// render one image apiece.
#[component]
pub fn Review(review: ReviewData, #[prop(into, optional)] test_id: Option<String>) -> impl IntoView {
    let ReviewData { id, date, rating, meal, notes, photos } = review;

    view! {
        <div class="review" id=id data-testid=test_id>
            {date.map(|date| view! { <h2>{date}</h2> })}
            {rating.map(|rating| view! { <h3>{rating.to_string()}</h3> })}
            {meal.map(|meal| view! { <p>{meal}</p> })}
            {notes.map(|notes| view! { <p>{notes}</p> })}
            {photos
                .into_iter()
                .map(|photo| {
                    view! {
                        <figure class="review__photo">
                            <Image
                                src=photo.url
                                alt=photo.alt
                                width=photo.width
                                height=photo.height
                                test_id=PHOTO_TEST_ID
                            />
                            {photo.description.map(|d| view! { <figcaption>{d}</figcaption> })}
                        </figure>
                    }
                })
                .collect_view()}
        </div>
    }
}
