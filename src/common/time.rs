//! Time utilities.
//!
//! Server time is used only for connection bookkeeping (when a client
//! connected). Message timestamps are client-supplied and never touch
//! the server clock.

use chrono::{DateTime, FixedOffset, Utc};

/// Get current Unix timestamp in JST (milliseconds)
pub fn get_jst_timestamp() -> i64 {
    let jst_offset = FixedOffset::east_opt(9 * 3600).unwrap(); // JST is UTC+9
    let now_utc = Utc::now();
    let now_jst: DateTime<FixedOffset> = now_utc.with_timezone(&jst_offset);
    now_jst.timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_jst_timestamp_returns_positive_value() {
        // テスト項目: get_jst_timestamp が正の値を返す
        // given (前提条件):

        // when (操作):
        let timestamp = get_jst_timestamp();

        // then (期待する結果):
        assert!(timestamp > 0);
    }

    #[test]
    fn test_get_jst_timestamp_is_monotonic_enough() {
        // テスト項目: 連続呼び出しで時刻が巻き戻らない
        // given (前提条件):
        let timestamp1 = get_jst_timestamp();

        // when (操作):
        std::thread::sleep(std::time::Duration::from_millis(10));
        let timestamp2 = get_jst_timestamp();

        // then (期待する結果):
        assert!(timestamp2 >= timestamp1);
    }
}
