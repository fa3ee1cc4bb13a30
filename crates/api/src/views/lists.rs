//! Pages for the collection of lists: index, new-list form, edit form.

use todos_core::completion::completion_class;
use todos_db::models::todo_list::TodoList;

use super::escape;

/// The index of all lists. `lists` must already be in display order.
pub fn index(lists: &[TodoList]) -> String {
    let items: String = lists
        .iter()
        .map(|list| {
            format!(
                "<li{}>\n<a href=\"/lists/{}\">\n<h2>{}</h2>\n<p>{}</p>\n</a>\n</li>\n",
                class_attr(completion_class(list)),
                list.id,
                escape(&list.name),
                list.remaining_to_total_label()
            )
        })
        .collect();

    format!(
        "<ul id=\"lists\">\n{items}</ul>\n\
         <p><a class=\"add\" href=\"/lists/new\">New List</a></p>"
    )
}

/// Form for creating a list, pre-filled with `list_name` after a failed submit.
pub fn new_list(list_name: &str) -> String {
    format!(
        "<form action=\"/lists\" method=\"post\">\n\
         <dl>\n\
         <dt><label for=\"list_name\">Enter the name for your new list:</label></dt>\n\
         <dd><input name=\"list_name\" id=\"list_name\" placeholder=\"List Name\" type=\"text\" value=\"{}\"></dd>\n\
         </dl>\n\
         <fieldset class=\"actions\">\n\
         <input type=\"submit\" value=\"Save\">\n\
         <a href=\"/lists\">Cancel</a>\n\
         </fieldset>\n\
         </form>",
        escape(list_name)
    )
}

/// Rename form for `list`, with the delete button.
///
/// `list_name` is the value shown in the input: the current name on first
/// render, the rejected submission when re-rendering after an error.
pub fn edit_list(list: &TodoList, list_name: &str) -> String {
    format!(
        "<h2>Editing &#39;{name}&#39;</h2>\n\
         <form action=\"/lists/{id}\" method=\"post\">\n\
         <dl>\n\
         <dt><label for=\"list_name\">Enter the new name for the list:</label></dt>\n\
         <dd><input name=\"list_name\" id=\"list_name\" placeholder=\"List Name\" type=\"text\" value=\"{value}\"></dd>\n\
         </dl>\n\
         <fieldset class=\"actions\">\n\
         <input type=\"submit\" value=\"Save\">\n\
         <a href=\"/lists/{id}\">Cancel</a>\n\
         </fieldset>\n\
         </form>\n\
         <form action=\"/lists/{id}/delete\" method=\"post\" class=\"delete\">\n\
         <button type=\"submit\">Delete List</button>\n\
         </form>",
        name = escape(&list.name),
        id = list.id,
        value = escape(list_name),
    )
}

pub(super) fn class_attr(class: Option<&str>) -> String {
    class
        .map(|class| format!(" class=\"{class}\""))
        .unwrap_or_default()
}
