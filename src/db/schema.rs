pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS transactions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    tx_date     TEXT NOT NULL,
    tx_time     TEXT NOT NULL,
    description TEXT NOT NULL CHECK (description != ''),
    vendor      TEXT NOT NULL CHECK (vendor != ''),
    amount      TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(tx_date, tx_time);
"#;

pub(crate) const INSERT_TRANSACTION: &str =
    "INSERT INTO transactions (tx_date, tx_time, description, vendor, amount)
     VALUES (?1, ?2, ?3, ?4, ?5)";

pub(crate) const SELECT_ALL: &str = "SELECT tx_date, tx_time, description, vendor, amount
     FROM transactions
     ORDER BY tx_date DESC, tx_time DESC, id DESC";
