//! Roll log database schema.

/// SQL to create the roll log table. Idempotent, applied at startup.
pub const CREATE_ROLL_LOGS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS roll_logs (
    id         BIGSERIAL PRIMARY KEY,
    dice_count INTEGER NOT NULL,
    results    JSONB NOT NULL,
    rolled_at  TIMESTAMPTZ NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_roll_logs_rolled_at
    ON roll_logs (rolled_at);
";
