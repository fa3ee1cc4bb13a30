//! Completion state and display ordering for lists and todos.
//!
//! Lists arrive from the database sorted by name and todos in insertion
//! order. For display, both are partitioned so that incomplete entries come
//! first and complete ones last, keeping the incoming order inside each
//! group.

/// Anything that can be shown as done or not done.
pub trait Completion {
    fn is_complete(&self) -> bool;
}

/// A list is complete once it has at least one todo and none remain.
///
/// An empty list is never complete.
pub fn is_list_complete(todos_count: i64, todos_remaining: i64) -> bool {
    todos_count > 0 && todos_remaining == 0
}

/// Render the `"<remaining> / <total>"` label shown next to a list.
pub fn remaining_to_total_label(todos_count: i64, todos_remaining: i64) -> String {
    format!("{todos_remaining} / {todos_count}")
}

/// CSS class applied to a complete list or completed todo.
pub fn completion_class<T: Completion>(item: &T) -> Option<&'static str> {
    item.is_complete().then_some("complete")
}

/// Order lists for display: incomplete first, complete last.
pub fn sort_lists<T: Completion>(lists: Vec<T>) -> Vec<T> {
    incomplete_first(lists)
}

/// Order the todos of one list for display: incomplete first, completed last.
pub fn sort_todos<T: Completion>(todos: Vec<T>) -> Vec<T> {
    incomplete_first(todos)
}

/// Stable partition on completion state.
fn incomplete_first<T: Completion>(items: Vec<T>) -> Vec<T> {
    let (mut ordered, complete): (Vec<T>, Vec<T>) =
        items.into_iter().partition(|item| !item.is_complete());
    ordered.extend(complete);
    ordered
}
