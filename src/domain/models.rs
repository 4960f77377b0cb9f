use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item.
///
/// The `id` is generated at creation and never changes; `text` and
/// `completed` are updated through [`TodoList`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
        }
    }
}

/// Ordered collection of todos.
///
/// Order is creation order. Deletion removes one element and preserves the
/// relative order of the rest; no other operation reorders the collection.
///
/// Every transition returns whether the collection changed, so callers can
/// persist actual mutations only. None of the transitions can fail: an
/// operation naming an unknown id is a silent no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_todos(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.todos.get(index)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Appends a new pending todo with a fresh id.
    ///
    /// Whitespace-only text is rejected as a no-op. Accepted text is stored
    /// exactly as submitted, without trimming.
    pub fn add(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.todos.push(Todo::new(text));
        true
    }

    /// Flips the completion flag on the matching todo.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    /// Replaces the text of the matching todo.
    ///
    /// Unlike [`TodoList::add`], no validation is applied: empty text is
    /// accepted here.
    pub fn edit(&mut self, id: Uuid, new_text: &str) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.text = new_text.to_string();
                true
            }
            None => false,
        }
    }

    /// Removes the matching todo. Idempotent.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        self.todos.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_pending_todo() {
        let mut list = TodoList::new();

        assert!(list.add("buy milk"));

        assert_eq!(list.len(), 1);
        let todo = &list.todos()[0];
        assert_eq!(todo.text, "buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_add_rejects_empty_and_whitespace_text() {
        let mut list = TodoList::new();

        assert!(!list.add(""));
        assert!(!list.add("   "));
        assert!(!list.add("\t\n"));

        assert!(list.is_empty());
    }

    #[test]
    fn test_add_stores_text_untrimmed() {
        let mut list = TodoList::new();

        assert!(list.add("  padded  "));

        assert_eq!(list.todos()[0].text, "  padded  ");
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let mut list = TodoList::new();
        for _ in 0..50 {
            list.add("task");
        }

        let mut ids: Vec<_> = list.todos().iter().map(|todo| todo.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_toggle_flips_completion() {
        let mut list = TodoList::new();
        list.add("task");
        let id = list.todos()[0].id;

        assert!(list.toggle(id));
        assert!(list.todos()[0].completed);
    }

    #[test]
    fn test_toggle_twice_restores_original_state() {
        let mut list = TodoList::new();
        list.add("task");
        let id = list.todos()[0].id;

        assert!(list.toggle(id));
        assert!(list.toggle(id));

        assert!(!list.todos()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = TodoList::new();
        list.add("task");

        assert!(!list.toggle(Uuid::new_v4()));
        assert!(!list.todos()[0].completed);
    }

    #[test]
    fn test_edit_replaces_text() {
        let mut list = TodoList::new();
        list.add("task");
        let id = list.todos()[0].id;

        assert!(list.edit(id, "renamed"));

        assert_eq!(list.todos()[0].text, "renamed");
        assert_eq!(list.todos()[0].id, id);
    }

    #[test]
    fn test_edit_accepts_empty_text() {
        let mut list = TodoList::new();
        list.add("task");
        let id = list.todos()[0].id;

        assert!(list.edit(id, ""));
        assert_eq!(list.todos()[0].text, "");
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut list = TodoList::new();
        list.add("task");

        assert!(!list.edit(Uuid::new_v4(), "renamed"));
        assert_eq!(list.todos()[0].text, "task");
    }

    #[test]
    fn test_delete_removes_exactly_one_and_is_idempotent() {
        let mut list = TodoList::new();
        list.add("first");
        list.add("second");
        let id = list.todos()[0].id;

        assert!(list.delete(id));
        assert_eq!(list.len(), 1);

        // Second delete of the same id is a no-op.
        assert!(!list.delete(id));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        list.add("c");
        let middle = list.todos()[1].id;

        assert!(list.delete(middle));

        let texts: Vec<_> = list.todos().iter().map(|todo| todo.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn test_operations_never_create_unknown_ids() {
        let mut list = TodoList::new();
        let mut added = Vec::new();

        list.add("a");
        added.push(list.todos()[0].id);
        list.add("b");
        added.push(list.todos()[1].id);
        list.toggle(added[0]);
        list.edit(added[1], "b2");
        list.toggle(Uuid::new_v4());
        list.delete(added[0]);
        list.add("c");
        added.push(list.todos()[1].id);
        list.edit(Uuid::new_v4(), "ghost");

        for todo in list.todos() {
            assert!(added.contains(&todo.id));
        }
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_toggle_delete_scenario() {
        let mut list = TodoList::new();

        list.add("a");
        list.add("b");
        let id_a = list.todos()[0].id;
        let id_b = list.todos()[1].id;

        assert!(list.toggle(id_a));
        assert!(list.delete(id_b));

        assert_eq!(list.len(), 1);
        assert_eq!(list.todos()[0].text, "a");
        assert!(list.todos()[0].completed);
    }

    #[test]
    fn test_serde_round_trip_preserves_collection() {
        let mut list = TodoList::new();
        list.add("first");
        list.add("second");
        list.toggle(list.todos()[1].id);

        let json = serde_json::to_string(&list).unwrap();
        let restored: TodoList = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, list);
    }

    #[test]
    fn test_serialized_form_is_array_of_records() {
        let mut list = TodoList::new();
        list.add("task");

        let json = serde_json::to_string(&list).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].get("id").unwrap().is_string());
        assert_eq!(records[0].get("text").unwrap(), "task");
        assert_eq!(records[0].get("completed").unwrap(), false);
    }
}
