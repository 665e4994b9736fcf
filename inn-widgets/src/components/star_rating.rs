//! Clickable star icons writing into the `score` field.

use crate::form_field::FormField;
use crate::star_rating::{Rating, StarRating, StarRatingWidget};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StarRatingInputProps {
    /// Field receiving the selected rating
    pub field: Signal<String>,
    /// Rating already on record (edit form)
    #[props(!optional)]
    pub initial: Option<Rating>,
}

/// Star rating with hover preview.
#[component]
pub fn StarRatingInput(props: StarRatingInputProps) -> Element {
    let field = props.field;
    let initial = props.initial;
    let mut widget = use_signal(move || match initial {
        Some(rating) => StarRatingWidget::with_initial(rating, field),
        None => StarRatingWidget::new(StarRating::default(), field),
    });

    let icons: Vec<(usize, Rating, String)> = {
        let widget = widget.read();
        let state = widget.state();
        state
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| (index, *value, state.class_for(index)))
            .collect()
    };
    let score = widget.read().field().value();

    rsx! {
        div {
            class: "star-rating",
            style: "font-size: 24px; cursor: pointer;",
            for (index, value, class) in icons {
                span {
                    key: "{index}",
                    class: "{class}",
                    "data-value": "{value}",
                    onclick: move |_| widget.write().click(index),
                    onmouseenter: move |_| widget.write().hover(index),
                    onmouseleave: move |_| widget.write().leave(),
                    "★"
                }
            }
            input {
                r#type: "hidden",
                id: "star-rating-value",
                name: "score",
                value: "{score}",
            }
        }
    }
}
