//! Diesel schema for history persistence.

diesel::table! {
    /// Append-only field change records, cascading away with their task.
    task_histories (id) {
        /// Store-assigned row identifier.
        id -> Int4,
        /// Owning task identifier (`ON DELETE CASCADE`).
        task_item_id -> Int4,
        /// Tracked field label.
        #[max_length = 100]
        field_name -> Varchar,
        /// Prior value (empty string when the field was unset).
        old_value -> Text,
        /// New value.
        new_value -> Text,
        /// Attribution identity from the caller.
        changed_by_user_id -> Int4,
        /// Change timestamp.
        changed_at -> Timestamptz,
    }
}
