//! Star rating state: one selected icon, one transient hovered icon.

use crate::error::{Result, WidgetError};
use crate::form_field::FormField;
use serde::Serialize;
use std::fmt;

/// Highest rating a guest can give.
pub const MAX_RATING: u8 = 5;

/// CSS class of the selected icon.
pub const SELECTED_CLASS: &str = "selected";

/// CSS class of the icon under the pointer.
pub const HOVER_CLASS: &str = "hover";

/// A rating in `1..=MAX_RATING`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self> {
        if (1..=MAX_RATING).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(WidgetError::RatingOutOfRange {
                value,
                max: MAX_RATING,
            })
        }
    }

    /// Read a rating back from a form field value.
    pub fn from_field(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(WidgetError::RatingMissing);
        }
        match raw.parse::<u8>() {
            Ok(value) => Rating::new(value),
            Err(_) => Err(WidgetError::RatingMissing),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every rating from 1 to `MAX_RATING`, in icon order.
    pub fn all() -> Vec<Rating> {
        (1..=MAX_RATING).map(Rating).collect()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selection over an ordered set of rating icons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarRating {
    values: Vec<Rating>,
    selected: Option<usize>,
    hovered: Option<usize>,
}

impl Default for StarRating {
    fn default() -> Self {
        Self::new(Rating::all())
    }
}

impl StarRating {
    pub fn new(values: Vec<Rating>) -> Self {
        Self {
            values,
            selected: None,
            hovered: None,
        }
    }

    /// Start with the icon carrying `value` selected (edit form).
    /// Unknown values leave nothing selected.
    pub fn with_selected_value(mut self, value: Rating) -> Self {
        self.selected = self.values.iter().position(|v| *v == value);
        self
    }

    /// Select icon `index`. Returns the value to write, or `None` when
    /// the index is out of range.
    pub fn click(&mut self, index: usize) -> Option<Rating> {
        let value = *self.values.get(index)?;
        self.selected = Some(index);
        Some(value)
    }

    pub fn hover(&mut self, index: usize) {
        if index < self.values.len() {
            self.hovered = Some(index);
        }
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn values(&self) -> &[Rating] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn selected(&self) -> Option<Rating> {
        self.selected.map(|i| self.values[i])
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    /// Space-separated marker classes for icon `index`.
    pub fn class_for(&self, index: usize) -> String {
        let mut classes = Vec::with_capacity(2);
        if self.is_selected(index) {
            classes.push(SELECTED_CLASS);
        }
        if self.is_hovered(index) {
            classes.push(HOVER_CLASS);
        }
        classes.join(" ")
    }
}

/// Star rating bound to the field that receives the selected value.
#[derive(Debug, Clone)]
pub struct StarRatingWidget<F: FormField> {
    state: StarRating,
    field: F,
}

impl<F: FormField> StarRatingWidget<F> {
    pub fn new(state: StarRating, field: F) -> Self {
        Self { state, field }
    }

    /// Widget for an existing rating (edit form). The preset icon is
    /// selected and its value written into `field`.
    pub fn with_initial(initial: Rating, mut field: F) -> Self {
        let state = StarRating::default().with_selected_value(initial);
        if let Some(rating) = state.selected() {
            field.set_value(&rating.to_string());
        }
        Self { state, field }
    }

    pub fn click(&mut self, index: usize) {
        match self.state.click(index) {
            Some(rating) => {
                self.field.set_value(&rating.to_string());
                log::debug!("Rating selected: {}", rating);
            }
            None => log::warn!("Ignoring click on missing rating icon {}", index),
        }
    }

    pub fn hover(&mut self, index: usize) {
        self.state.hover(index);
    }

    pub fn leave(&mut self) {
        self.state.leave();
    }

    pub fn state(&self) -> &StarRating {
        &self.state
    }

    pub fn field(&self) -> &F {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_field::MemoryField;

    fn widget() -> StarRatingWidget<MemoryField> {
        StarRatingWidget::new(StarRating::default(), MemoryField::new("score"))
    }

    fn selected_count(state: &StarRating) -> usize {
        (0..state.len()).filter(|i| state.is_selected(*i)).count()
    }

    #[test]
    fn test_click_moves_selection() {
        let mut w = widget();
        w.click(1);
        w.click(3);
        assert_eq!(w.state().selected_index(), Some(3));
        assert_eq!(selected_count(w.state()), 1);
        assert_eq!(w.field().value(), "4");
    }

    #[test]
    fn test_click_is_idempotent() {
        let mut w = widget();
        w.click(2);
        let before = w.state().clone();
        w.click(2);
        assert_eq!(w.state(), &before);
        assert_eq!(selected_count(w.state()), 1);
        assert_eq!(w.field().value(), "3");
    }

    #[test]
    fn test_hover_marks_only_one_icon() {
        let mut w = widget();
        w.hover(0);
        w.hover(4);
        assert!(w.state().is_hovered(4));
        assert!(!w.state().is_hovered(0));
        assert_eq!(w.field().value(), "");

        w.leave();
        assert_eq!(w.state().hovered_index(), None);
        assert_eq!(w.field().value(), "");
    }

    #[test]
    fn test_hover_does_not_touch_selection_or_field() {
        let mut w = widget();
        w.click(1);
        w.hover(4);
        w.leave();
        assert_eq!(w.state().selected(), Some(Rating::new(2).unwrap()));
        assert_eq!(w.field().value(), "2");
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut w = widget();
        w.click(0);
        w.click(9);
        w.hover(9);
        assert_eq!(w.state().selected_index(), Some(0));
        assert_eq!(w.state().hovered_index(), None);
        assert_eq!(w.field().value(), "1");
    }

    #[test]
    fn test_class_for() {
        let mut state = StarRating::default();
        state.click(2);
        state.hover(2);
        state.hover(1);
        assert_eq!(state.class_for(2), "selected");
        assert_eq!(state.class_for(1), "hover");
        assert_eq!(state.class_for(0), "");
        state.hover(2);
        assert_eq!(state.class_for(2), "selected hover");
    }

    #[test]
    fn test_with_selected_value() {
        let state = StarRating::default().with_selected_value(Rating::new(4).unwrap());
        assert_eq!(state.selected_index(), Some(3));

        let custom = StarRating::new(vec![Rating::new(1).unwrap(), Rating::new(5).unwrap()]);
        let state = custom.with_selected_value(Rating::new(3).unwrap());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_with_initial_writes_field() {
        let four = Rating::new(4).unwrap();
        let w = StarRatingWidget::with_initial(four, MemoryField::new("score"));
        assert_eq!(w.state().selected(), Some(four));
        assert_eq!(w.field().value(), "4");
        assert_eq!(Rating::from_field(&w.field().value()).unwrap(), four);
    }

    #[test]
    fn test_with_initial_then_click() {
        let mut w = StarRatingWidget::with_initial(Rating::new(2).unwrap(), MemoryField::new("score"));
        w.click(4);
        assert_eq!(w.state().selected_index(), Some(4));
        assert_eq!(w.field().value(), "5");
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert_eq!(Rating::all().len(), MAX_RATING as usize);
    }

    #[test]
    fn test_rating_from_field() {
        assert_eq!(Rating::from_field("3").unwrap().value(), 3);
        assert!(matches!(Rating::from_field(""), Err(WidgetError::RatingMissing)));
        assert!(matches!(Rating::from_field("abc"), Err(WidgetError::RatingMissing)));
        assert!(matches!(
            Rating::from_field("7"),
            Err(WidgetError::RatingOutOfRange { value: 7, max: 5 })
        ));
    }
}
