pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS jokes (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    content TEXT NOT NULL,
    topic TEXT NOT NULL,
    joke_type TEXT NOT NULL,
    category TEXT,
    model_used TEXT NOT NULL,
    tokens_used INTEGER NOT NULL DEFAULT 0,
    cost_usd REAL NOT NULL DEFAULT 0.0,
    user_rating INTEGER CHECK (user_rating IS NULL OR user_rating BETWEEN 1 AND 5),
    favorited INTEGER NOT NULL DEFAULT 0,
    shared INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_jokes_user ON jokes(user_id);
CREATE INDEX IF NOT EXISTS idx_jokes_user_created ON jokes(user_id, created_at);
";
