//! Property-based tests for the persisted task layout.
//!
//! Uses proptest to verify:
//! 1. Any valid task sequence survives encode → decode unchanged.
//! 2. Arbitrary text never causes a panic in `decode_tasks` (returns `Err`
//!    or a valid list).
//! 3. Truncated encodings of non-empty lists are rejected.

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use termtodo_model::codec::{decode_tasks, encode_tasks};
use termtodo_model::{Task, TaskId};
use uuid::Uuid;

/// Strategy for generating arbitrary `TaskId` values.
fn arb_task_id() -> impl Strategy<Value = TaskId> {
    any::<u128>().prop_map(|n| TaskId::from_uuid(Uuid::from_u128(n)))
}

/// Strategy for timestamps between 1970 and 2100 with nanosecond precision.
fn arb_created_at() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800, 0u32..1_000_000_000).prop_map(|(secs, nanos)| {
        DateTime::<Utc>::from_timestamp(secs, nanos).unwrap_or_default()
    })
}

/// Strategy for trimmed, non-empty task text (may include markup and unicode).
fn arb_text() -> impl Strategy<Value = String> {
    "[^\\s][^\\n]{0,120}".prop_filter_map("must stay non-empty after trim", |s| {
        let t = s.trim().to_string();
        (!t.is_empty()).then_some(t)
    })
}

/// Strategy for arbitrary `Task` values.
fn arb_task() -> impl Strategy<Value = Task> {
    (arb_task_id(), arb_text(), any::<bool>(), arb_created_at()).prop_map(
        |(id, text, completed, created_at)| Task {
            id,
            text,
            completed,
            created_at,
        },
    )
}

proptest! {
    #[test]
    fn task_list_round_trips(tasks in prop::collection::vec(arb_task(), 0..32)) {
        let encoded = encode_tasks(&tasks).unwrap();
        let decoded = decode_tasks(&encoded).unwrap();
        prop_assert_eq!(tasks, decoded);
    }

    #[test]
    fn arbitrary_text_never_panics(input in ".{0,512}") {
        let _ = decode_tasks(&input);
    }

    #[test]
    fn truncated_encoding_is_rejected(
        tasks in prop::collection::vec(arb_task(), 1..8),
        cut in 1usize..16,
    ) {
        let encoded = encode_tasks(&tasks).unwrap();
        let end = encoded.len().saturating_sub(cut);
        // Only cut on a char boundary; JSON output here is ASCII-safe at the tail.
        if encoded.is_char_boundary(end) {
            prop_assert!(decode_tasks(&encoded[..end]).is_err());
        }
    }
}
