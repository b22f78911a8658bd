pub const DEFAULT_PORT: u16 = 3030;
pub const API_PREFIX: &str = "/api/v1";
