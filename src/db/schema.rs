/// Applied in full on every open. Every statement is IF NOT EXISTS, so
/// re-running never alters or drops existing rows. There is no migration
/// layer; schema changes are not supported.
pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS transactions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    date        TEXT NOT NULL,
    amount      TEXT NOT NULL,
    description TEXT NOT NULL,
    category    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS budgets (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    category TEXT NOT NULL,
    amount   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS goals (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    name   TEXT NOT NULL,
    target TEXT NOT NULL
);
"#;
