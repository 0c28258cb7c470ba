//! Fixed user-facing messages
//!
//! The exact strings the website shows in its notification banner.

/// Shown when any required reservation field is empty
pub const REQUIRED_FIELDS: &str = "必須項目をすべて入力してください。";

/// Shown when the email address fails the shape check
pub const INVALID_EMAIL: &str = "正しいメールアドレスを入力してください。";

/// Shown when the phone number contains anything but digits and hyphens
pub const INVALID_PHONE: &str = "正しい電話番号を入力してください。";

/// Shown after the reservation was accepted by the API
pub const RESERVATION_ACCEPTED: &str = "ご予約を承りました。確認のメールをお送りいたします。";

/// Shown when the reservation could not be submitted
pub const RESERVATION_FAILED: &str = "予約の送信中にエラーが発生しました。お電話でのご予約をお願いいたします。";
