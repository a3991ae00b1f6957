//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. Regenerate
//! with `diesel print-schema` when the migrations change.

diesel::table! {
    /// Cooperative members, one row per registration.
    members (id) {
        id -> Int4,
        #[max_length = 120]
        name -> Varchar,
        /// Stored lowercase; unique index `members_email_key`.
        #[max_length = 120]
        email -> Varchar,
        #[max_length = 32]
        phone -> Varchar,
        address -> Nullable<Text>,
        dob -> Nullable<Date>,
        #[max_length = 120]
        occupation -> Nullable<Varchar>,
        #[max_length = 32]
        membership_type -> Varchar,
        /// Relative path under the static-asset root.
        #[max_length = 256]
        photo -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Scheduled cooperative activities.
    activities (id) {
        id -> Int4,
        #[max_length = 200]
        title -> Varchar,
        description -> Text,
        date -> Date,
        #[max_length = 200]
        location -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Published news articles.
    news (id) {
        id -> Int4,
        #[max_length = 200]
        title -> Varchar,
        body -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Back-office user accounts; unique index `users_username_key`.
    users (id) {
        id -> Int4,
        #[max_length = 50]
        username -> Varchar,
        #[max_length = 255]
        password_hash -> Varchar,
        #[max_length = 20]
        role -> Varchar,
        created_at -> Timestamptz,
    }
}
