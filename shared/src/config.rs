/// OTP send endpoint of the local auth API
pub const SEND_OTP_URL: &str = "http://localhost:5000/api/auth/otp/send";

/// Delivery method placed in the request body
pub const OTP_METHOD: &str = "sms";
