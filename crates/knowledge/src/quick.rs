//! Canned replies for a few common questions.

const STACK_COMPLEXITY: &str = "All stack operations (push, pop, peek, isEmpty) have **O(1)** time complexity. This is because we only work with the top element!";

const STACK_VS_QUEUE: &str = "## Stack vs Queue

| Feature | Stack | Queue |
|---------|-------|-------|
| Order | LIFO (Last In, First Out) | FIFO (First In, First Out) |
| Insertion | Top (push) | Rear (enqueue) |
| Deletion | Top (pop) | Front (dequeue) |
| Example | Undo button, Browser back | Print queue, BFS |
| Visual | 📚 Stack of books | 🚶 Line at counter |";

const QUICK_SORT_SPEED: &str = "## Why Quick Sort is Fast

1. **Divide & Conquer**: Splits array into smaller parts
2. **In-place**: Uses O(log n) extra space
3. **Cache Friendly**: Works with contiguous memory
4. **Average Case**: O(n log n) with good pivot selection

However, worst case is O(n²) when pivot is always min/max. Use randomized pivot to avoid this!";

struct QuickAnswer {
    /// Every needle must appear in the lowercased question.
    needles: &'static [&'static str],
    reply: &'static str,
}

const QUICK_ANSWERS: &[QuickAnswer] = &[
    QuickAnswer {
        needles: &["time complexity", "stack"],
        reply: STACK_COMPLEXITY,
    },
    QuickAnswer {
        needles: &["difference", "stack", "queue"],
        reply: STACK_VS_QUEUE,
    },
    QuickAnswer {
        needles: &["why", "quick sort", "fast"],
        reply: QUICK_SORT_SPEED,
    },
];

/// Canned reply for `question`, if one of the known triggers matches.
pub fn quick_answer(question: &str) -> Option<&'static str> {
    let q = question.to_lowercase();
    QUICK_ANSWERS
        .iter()
        .find(|qa| qa.needles.iter().all(|n| q.contains(n)))
        .map(|qa| qa.reply)
}
