//! The page for a single list and its todos.

use todos_core::completion::{completion_class, Completion};
use todos_db::models::todo::Todo;
use todos_db::models::todo_list::TodoList;

use super::escape;
use super::lists::class_attr;

/// Render `list` with `todos` (already in display order) and the add-todo
/// form, pre-filled with `new_todo` after a failed submit.
pub fn show(list: &TodoList, todos: &[Todo], new_todo: &str) -> String {
    let id = list.id;
    let items: String = todos.iter().map(|todo| todo_item(id, todo)).collect();

    format!(
        "<section id=\"todos\"{class}>\n\
         <header>\n\
         <h2>{name}</h2>\n\
         <ul>\n\
         <li>\n\
         <form action=\"/lists/{id}/complete_all\" method=\"post\">\n\
         <button class=\"check\" type=\"submit\">Complete All</button>\n\
         </form>\n\
         </li>\n\
         <li><a class=\"edit\" href=\"/lists/{id}/edit\">Edit List</a></li>\n\
         </ul>\n\
         </header>\n\
         <ul>\n{items}</ul>\n\
         </section>\n\
         <form action=\"/lists/{id}/todos\" method=\"post\">\n\
         <dl>\n\
         <dt><label for=\"todo\">Enter a new todo item:</label></dt>\n\
         <dd><input name=\"todo\" id=\"todo\" placeholder=\"Something to do\" type=\"text\" value=\"{new_todo}\"></dd>\n\
         </dl>\n\
         <fieldset class=\"actions\">\n\
         <input type=\"submit\" value=\"Add\">\n\
         </fieldset>\n\
         </form>\n\
         <p><a class=\"list\" href=\"/lists\">All Lists</a></p>",
        class = class_attr(completion_class(list)),
        name = escape(&list.name),
        new_todo = escape(new_todo),
    )
}

/// One todo row: a toggle form that flips its status, and a delete form.
fn todo_item(list_id: i64, todo: &Todo) -> String {
    let toggle_to = !todo.is_complete();
    format!(
        "<li{class}>\n\
         <form action=\"/lists/{list_id}/todos/{todo_id}\" method=\"post\" class=\"check\">\n\
         <input type=\"hidden\" name=\"completed\" value=\"{toggle_to}\">\n\
         <button type=\"submit\">Complete</button>\n\
         </form>\n\
         <h3>{name}</h3>\n\
         <form action=\"/lists/{list_id}/todos/{todo_id}/delete\" method=\"post\" class=\"delete\">\n\
         <button type=\"submit\">Delete</button>\n\
         </form>\n\
         </li>\n",
        class = class_attr(completion_class(todo)),
        todo_id = todo.id,
        name = escape(&todo.name),
    )
}
