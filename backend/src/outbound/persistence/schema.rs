//! Diesel table definitions for the branch document store.

diesel::table! {
    branches (id) {
        id -> Text,
        document -> Jsonb,
        updated_at -> Timestamptz,
    }
}
