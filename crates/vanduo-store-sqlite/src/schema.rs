//! SQL schema for the Vanduo SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS customers (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    surname       TEXT NOT NULL,
    personal_code TEXT NOT NULL,
    email         TEXT NOT NULL,
    phone         TEXT,
    created_at    TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS customers_personal_code_idx ON customers(personal_code);
CREATE INDEX IF NOT EXISTS customers_email_idx         ON customers(email);
CREATE INDEX IF NOT EXISTS customers_surname_idx       ON customers(surname);
CREATE INDEX IF NOT EXISTS customers_phone_idx         ON customers(phone);

-- Rows are inserted and deleted, never updated.
-- `value` is stored in canonical (normalised) form.
CREATE TABLE IF NOT EXISTS identifiers (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    customer_id     INTEGER NOT NULL REFERENCES customers(id) ON DELETE CASCADE,
    identifier_type TEXT NOT NULL
        CHECK (identifier_type IN ('personal_code', 'contract_number', 'object_number')),
    value           TEXT NOT NULL,
    created_at      TEXT NOT NULL,
    UNIQUE (identifier_type, value)
);

CREATE INDEX IF NOT EXISTS identifiers_customer_idx ON identifiers(customer_id);

PRAGMA user_version = 1;
";
