//! Diesel schema for comment persistence.

diesel::table! {
    /// Comment records, cascading away with their task.
    task_comments (id) {
        /// Store-assigned comment identifier.
        id -> Int4,
        /// Owning task identifier (`ON DELETE CASCADE`).
        task_item_id -> Int4,
        /// Comment text.
        text -> Text,
        /// Attribution identity from the caller.
        created_by_user_id -> Int4,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
