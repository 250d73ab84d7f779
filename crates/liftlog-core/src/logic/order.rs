//! Order maintenance for days and planned exercises.
//!
//! `order` is a cached 1-based rank. Every structural edit goes through one
//! of these helpers, which re-derive each item's rank from its position
//! before the owning routine's `days` array is written back.

use uuid::Uuid;

use crate::types::{DayTemplate, PlannedExercise};

/// An item with a dense 1-based rank inside its parent.
pub trait Ranked {
    fn id(&self) -> Uuid;
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

impl Ranked for DayTemplate {
    fn id(&self) -> Uuid {
        self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

impl Ranked for PlannedExercise {
    fn id(&self) -> Uuid {
        self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

/// Copy of `items` sorted by stored rank; equal ranks keep their position.
pub fn sort_by_order<T: Ranked + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| item.order());
    sorted
}

/// Assign ranks 1..=n following the current sequence.
pub fn renumber<T: Ranked>(mut items: Vec<T>) -> Vec<T> {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as u32 + 1);
    }
    items
}

/// Sort by stored rank, then close any gaps.
pub fn normalize_order<T: Ranked + Clone>(items: &[T]) -> Vec<T> {
    renumber(sort_by_order(items))
}

/// Insert `item` at `index` (clamped to the end) of the rank-sorted sequence.
pub fn insert_at<T: Ranked + Clone>(items: &[T], index: usize, item: T) -> Vec<T> {
    let mut sorted = sort_by_order(items);
    let index = index.min(sorted.len());
    sorted.insert(index, item);
    renumber(sorted)
}

/// Append `item` after the last ranked item.
pub fn push<T: Ranked + Clone>(items: &[T], item: T) -> Vec<T> {
    insert_at(items, items.len(), item)
}

/// Remove the item with `id`; the remaining items are renumbered.
pub fn remove<T: Ranked + Clone>(items: &[T], id: Uuid) -> Vec<T> {
    let remaining: Vec<T> = sort_by_order(items)
        .into_iter()
        .filter(|item| item.id() != id)
        .collect();
    renumber(remaining)
}

/// Remove the item at position `index` of the rank-sorted sequence.
pub fn remove_at<T: Ranked + Clone>(items: &[T], index: usize) -> Vec<T> {
    let mut sorted = sort_by_order(items);
    if index < sorted.len() {
        sorted.remove(index);
    }
    renumber(sorted)
}

/// Move the item at position `from` to position `to` (both 0-based in rank
/// order). Out-of-range `from` leaves the sequence unchanged apart from
/// renumbering; `to` is clamped to the end.
pub fn move_item<T: Ranked + Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut sorted = sort_by_order(items);
    if from < sorted.len() {
        let item = sorted.remove(from);
        let to = to.min(sorted.len());
        sorted.insert(to, item);
    }
    renumber(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(name: &str, order: u32) -> DayTemplate {
        let mut day = DayTemplate::new(name);
        day.order = order;
        day
    }

    fn names(days: &[DayTemplate]) -> Vec<(&str, u32)> {
        days.iter().map(|day| (day.name.as_str(), day.order)).collect()
    }

    #[test]
    fn test_normalize_closes_gaps() {
        let days = vec![day("Legs", 9), day("Push", 2), day("Pull", 5)];
        let normalized = normalize_order(&days);
        assert_eq!(names(&normalized), vec![("Push", 1), ("Pull", 2), ("Legs", 3)]);
    }

    #[test]
    fn test_insert_and_push() {
        let days = vec![day("Push", 1), day("Legs", 2)];
        let days = insert_at(&days, 1, day("Pull", 0));
        assert_eq!(names(&days), vec![("Push", 1), ("Pull", 2), ("Legs", 3)]);

        let days = push(&days, day("Arms", 0));
        assert_eq!(days.last().map(|d| (d.name.as_str(), d.order)), Some(("Arms", 4)));
    }

    #[test]
    fn test_remove_renumbers() {
        let days = vec![day("Push", 1), day("Pull", 2), day("Legs", 3)];
        let pull = days[1].id;
        let days = remove(&days, pull);
        assert_eq!(names(&days), vec![("Push", 1), ("Legs", 2)]);

        let days = remove_at(&days, 0);
        assert_eq!(names(&days), vec![("Legs", 1)]);
        assert_eq!(names(&remove_at(&days, 5)), vec![("Legs", 1)]);
    }

    #[test]
    fn test_move_item() {
        let days = vec![day("Push", 1), day("Pull", 2), day("Legs", 3)];
        let moved = move_item(&days, 2, 0);
        assert_eq!(names(&moved), vec![("Legs", 1), ("Push", 2), ("Pull", 3)]);

        let unchanged = move_item(&days, 7, 0);
        assert_eq!(names(&unchanged), names(&days));
    }

    #[test]
    fn test_planned_exercises_are_ranked_too() {
        let mut first = PlannedExercise::new(Uuid::new_v4(), 3, "5");
        first.order = 4;
        let mut second = PlannedExercise::new(Uuid::new_v4(), 3, "5");
        second.order = 1;

        let normalized = normalize_order(&[first.clone(), second.clone()]);
        assert_eq!(normalized[0].id, second.id);
        assert_eq!(normalized[1].order, 2);
    }
}
