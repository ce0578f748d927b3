pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const PROMOTION_COMPANY_NAME: &str = "Công ty ABC";

pub const REQUIRED_STORE_NAME_ERROR: &str = "Vui lòng nhập tên cửa hàng";
pub const REQUIRED_PHONE_ERROR: &str = "Vui lòng nhập số điện thoại";
pub const INVALID_PHONE_ERROR: &str = "SĐT không hợp lệ (10 số, đầu 03-09)";

pub const MAX_MESSAGE_WORDS: usize = 30;
