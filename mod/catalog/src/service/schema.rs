pub const DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS reviews (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        restaurant_id INTEGER NOT NULL REFERENCES restaurants(id),
        reviewer_name TEXT NOT NULL,
        rating INTEGER NOT NULL,
        review_text TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_reviews_restaurant ON reviews (restaurant_id)",
    "CREATE TABLE IF NOT EXISTS favorites (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        client_id INTEGER NOT NULL REFERENCES clients(id),
        restaurant_id INTEGER NOT NULL REFERENCES restaurants(id),
        created_at TEXT NOT NULL,
        UNIQUE (client_id, restaurant_id)
    )",
    "CREATE INDEX IF NOT EXISTS idx_favorites_client ON favorites (client_id)",
];
