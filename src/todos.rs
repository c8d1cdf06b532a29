//! Pre-trip checklist operations

use crate::models::{new_id, TodoCategory, TodoItem, TodosState};

/// Append a new entry. Blank text is ignored. Returns the new id.
pub fn add_todo(todos: &mut TodosState, category: TodoCategory, text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let id = new_id("todo");
    todos.list_mut(category).push(TodoItem {
        id: id.clone(),
        text: text.to_string(),
        completed: false,
    });
    Some(id)
}

pub fn toggle_todo(todos: &mut TodosState, category: TodoCategory, id: &str) -> bool {
    match todos.list_mut(category).iter_mut().find(|t| t.id == id) {
        Some(todo) => {
            todo.completed = !todo.completed;
            true
        }
        None => false,
    }
}

pub fn remove_todo(todos: &mut TodosState, category: TodoCategory, id: &str) -> bool {
    let list = todos.list_mut(category);
    let before = list.len();
    list.retain(|t| t.id != id);
    list.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_appends() {
        let mut todos = TodosState::default();
        let id = add_todo(&mut todos, TodoCategory::CarryOn, "  Passport ").unwrap();
        assert!(id.starts_with("todo-"));
        let list = todos.list(TodoCategory::CarryOn);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].text, "Passport");
        assert!(!list[0].completed);
        assert!(todos.tasks.is_empty());
    }

    #[test]
    fn test_add_blank_is_ignored() {
        let mut todos = TodosState::default();
        assert_eq!(add_todo(&mut todos, TodoCategory::Tasks, "   "), None);
        assert!(todos.tasks.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut todos = TodosState::default();
        let id = add_todo(&mut todos, TodoCategory::Tasks, "Offline maps").unwrap();
        assert!(toggle_todo(&mut todos, TodoCategory::Tasks, &id));
        assert!(todos.tasks[0].completed);
        assert!(toggle_todo(&mut todos, TodoCategory::Tasks, &id));
        assert!(!todos.tasks[0].completed);
    }

    #[test]
    fn test_toggle_only_looks_in_category() {
        let mut todos = TodosState::default();
        let id = add_todo(&mut todos, TodoCategory::Checked, "Clothes").unwrap();
        assert!(!toggle_todo(&mut todos, TodoCategory::Tasks, &id));
        assert!(!todos.checked[0].completed);
    }

    #[test]
    fn test_remove() {
        let mut todos = TodosState::default();
        let keep = add_todo(&mut todos, TodoCategory::Tasks, "A").unwrap();
        let drop = add_todo(&mut todos, TodoCategory::Tasks, "B").unwrap();
        assert!(remove_todo(&mut todos, TodoCategory::Tasks, &drop));
        assert!(!remove_todo(&mut todos, TodoCategory::Tasks, &drop));
        assert_eq!(todos.tasks.len(), 1);
        assert_eq!(todos.tasks[0].id, keep);
    }
}
