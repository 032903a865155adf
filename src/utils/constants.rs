
pub const DEFAULT_OWNER: &str = "fleetdm";
pub const DEFAULT_REPO: &str = "fleet";
pub const DEFAULT_LABELS: [&str; 3] = ["#g-mdm", ":release", "bug"];

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const ISSUES_PER_PAGE: u32 = 100;

pub const SHEETS_API_URL: &str = "https://sheets.googleapis.com";
pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const DEFAULT_RANGE: &str = "Sheet1!A2:B2";
pub const DEFAULT_SHEET_ID: i64 = 0;
pub const NEW_ROW_INDEX: i64 = 1;
pub const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

pub const DEFAULT_CREDENTIAL_FILES: [&str; 2] = ["credentials.json", "key.json"];
pub const CREDENTIALS_ENV: &str = "GOOGLE_SERVICE_ACCOUNT_KEY";

pub const DEFAULT_TIMEZONE: &str = "America/Chicago";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

pub const USER_AGENT: &str = concat!("issue-tally/", env!("CARGO_PKG_VERSION"));
