// Single source of truth for all default values.

// --- Catalog ---
pub const DEFAULT_CATALOG_PATH: &str = "data/processed_database.json";
pub const DEFAULT_ALLOW_EMPTY_CATALOG: bool = false;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "data/analytics.db";
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_MMAP_SIZE: u64 = 268_435_456; // 256 MB
pub const DEFAULT_CACHE_SIZE: i64 = -64_000; // 64 MB (negative = KB)
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Selection ---
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_FALLBACK_K: usize = 8;
pub const DEFAULT_CITE_K: usize = 3;

// --- Analytics ---
pub const DEFAULT_TOP_LIMIT: usize = 5;
pub const DEFAULT_TOP_INTERVENTIONS_LIMIT: usize = 10;
pub const DEFAULT_DAILY_WINDOW_DAYS: u32 = 7;
pub const DEFAULT_COMMON_QUERIES_LIMIT: usize = 10;

// --- Generation ---
pub const DEFAULT_GENERATION_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_GENERATION_MODEL: &str = "llama3.1:8b";
pub const DEFAULT_TEMPERATURE: f64 = 0.1;
pub const DEFAULT_TOP_P: f64 = 0.9;
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_HEALTH_CHECK_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SYSTEM_PROMPT_PATH: &str = "prompts/system_prompt.txt";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
