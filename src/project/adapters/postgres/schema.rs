//! Diesel schema for project persistence.

diesel::table! {
    /// Project records, the ownership root of the cascade chain.
    projects (id) {
        /// Store-assigned project identifier.
        id -> Int4,
        /// Non-empty project name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
    }
}
