//! Diesel schema for task persistence.

diesel::table! {
    /// Task records scoped to a project (`ON DELETE CASCADE`).
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int4,
        /// Owning project identifier.
        project_id -> Int4,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Optional due date; mandatory on the create path, nullable for
        /// rows written by earlier deployments.
        due_date -> Nullable<Timestamptz>,
        /// Canonical lifecycle status label.
        #[max_length = 50]
        status -> Varchar,
        /// Canonical priority label, immutable after creation.
        #[max_length = 50]
        priority -> Varchar,
    }
}
