//! The topic tree shown in the sidebar.

use serde::Serialize;

use crate::catalog::normalize_key;

#[derive(Debug, Serialize)]
pub struct Topic {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub subtopics: &'static [&'static str],
}

pub const TOPICS: &[Topic] = &[
    Topic {
        id: "arrays",
        name: "Arrays",
        icon: "📊",
        subtopics: &["1D Arrays", "2D Arrays", "Array Operations", "Sliding Window"],
    },
    Topic {
        id: "linked-list",
        name: "Linked List",
        icon: "🔗",
        subtopics: &["Singly Linked", "Doubly Linked", "Circular Linked"],
    },
    Topic {
        id: "stack",
        name: "Stack",
        icon: "📚",
        subtopics: &["Stack Operations", "Applications", "Monotonic Stack"],
    },
    Topic {
        id: "queue",
        name: "Queue",
        icon: "🚶",
        subtopics: &["Queue Operations", "Circular Queue", "Priority Queue", "Deque"],
    },
    Topic {
        id: "trees",
        name: "Trees",
        icon: "🌳",
        subtopics: &["Binary Tree", "BST", "AVL Tree", "Traversals"],
    },
    Topic {
        id: "graphs",
        name: "Graphs",
        icon: "🕸️",
        subtopics: &["BFS", "DFS", "Shortest Path", "Spanning Tree"],
    },
    Topic {
        id: "sorting",
        name: "Sorting",
        icon: "📈",
        subtopics: &["Bubble Sort", "Quick Sort", "Merge Sort", "Heap Sort"],
    },
    Topic {
        id: "searching",
        name: "Searching",
        icon: "🔍",
        subtopics: &["Linear Search", "Binary Search", "Ternary Search"],
    },
    Topic {
        id: "recursion",
        name: "Recursion",
        icon: "🔄",
        subtopics: &["Base Cases", "Backtracking", "Memoization"],
    },
    Topic {
        id: "dp",
        name: "Dynamic Programming",
        icon: "🧩",
        subtopics: &["1D DP", "2D DP", "State Optimization", "Classic Problems"],
    },
    Topic {
        id: "hashing",
        name: "Hashing",
        icon: "🔐",
        subtopics: &["Hash Tables", "Hash Functions", "Collision Handling"],
    },
    Topic {
        id: "heap",
        name: "Heap",
        icon: "⛰️",
        subtopics: &["Min Heap", "Max Heap", "Heapify", "Heap Sort"],
    },
];

/// Find a sidebar topic by id or display name, ignoring case and spacing.
pub fn resolve_topic(name: &str) -> Option<&'static Topic> {
    let key = normalize_key(name);
    TOPICS
        .iter()
        .find(|t| t.id == key || normalize_key(t.name) == key)
}

/// Human-readable title for whatever the user selected or typed.
///
/// Sidebar topics and subtopics keep their own capitalization; anything
/// else is echoed back trimmed.
pub fn display_title(name: &str) -> String {
    if let Some(topic) = resolve_topic(name) {
        return topic.name.to_string();
    }
    let key = normalize_key(name);
    TOPICS
        .iter()
        .flat_map(|t| t.subtopics.iter())
        .find(|sub| normalize_key(sub) == key)
        .map(|sub| sub.to_string())
        .unwrap_or_else(|| name.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_by_id_or_name() {
        assert_eq!(resolve_topic("dp").map(|t| t.name), Some("Dynamic Programming"));
        assert_eq!(resolve_topic("Dynamic  Programming").map(|t| t.id), Some("dp"));
        assert_eq!(resolve_topic("LINKED LIST").map(|t| t.id), Some("linked-list"));
        assert!(resolve_topic("tries").is_none());
    }

    #[test]
    fn titles_prefer_known_spelling() {
        assert_eq!(display_title("stack"), "Stack");
        assert_eq!(display_title("binary search"), "Binary Search");
        assert_eq!(display_title("  skip lists "), "skip lists");
    }

    #[test]
    fn topic_ids_are_unique() {
        let mut ids: Vec<&str> = TOPICS.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TOPICS.len());
    }
}
