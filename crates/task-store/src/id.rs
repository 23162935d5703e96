//! Id Generation
//!
//! Task ids are `<epoch millis, base36>-<random v4 uuid, hex>`.

use uuid::Uuid;

/// Current time in epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Fresh task id, unique with overwhelming probability
pub fn generate_id() -> String {
    format!("{}-{}", to_base36(now_millis().max(0) as u64), Uuid::new_v4().simple())
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}
