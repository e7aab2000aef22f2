#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

/// Browser timer sleep. Zero returns immediately, so simulated delays can be
/// switched off where no event loop is running.
pub(crate) async fn sleep_ms(ms: u32) {
    if ms > 0 {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

/// Lower-case hex of `n` random bytes. Falls back to a clock-derived value
/// if the platform RNG is unavailable.
pub(crate) fn random_hex(n: usize) -> String {
    random_bytes(n).iter().map(|b| format!("{b:02x}")).collect()
}

/// `n` bytes from the platform RNG, or clock-derived bytes if it is unavailable.
fn random_bytes(n: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n];
    if let Err(e) = getrandom::getrandom(&mut buf) {
        log::warn!("platform RNG unavailable, using clock seed: {e}");
        fill_from_clock(&mut buf, now_ms());
    }
    buf
}

fn fill_from_clock(buf: &mut [u8], now_ms: i64) {
    let seed = now_ms.to_le_bytes();
    for (i, b) in buf.iter_mut().enumerate() {
        *b = seed[i % seed.len()].wrapping_add((i as u8).wrapping_mul(31));
    }
}

/// Base36 rendering of random bytes, the alphabet IPFS-style mock hashes use.
pub(crate) fn random_base36(n: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    random_bytes(n)
        .iter()
        .map(|b| ALPHABET[(*b as usize) % ALPHABET.len()] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_hex_length_and_alphabet() {
        let s = random_hex(8);
        assert_eq!(s.len(), 16);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_zero_sleep_returns_immediately() {
        futures::executor::block_on(sleep_ms(0));
    }

    #[test]
    fn test_host_clock_is_epoch_millis() {
        assert!(now_ms() > 1_600_000_000_000);
    }

    #[test]
    fn test_clock_fallback_varies_across_bytes() {
        let mut buf = [0u8; 11];
        fill_from_clock(&mut buf, 1_700_000_000_000);
        assert!(buf.iter().any(|b| *b != buf[0]));
    }

    #[test]
    fn test_random_base36_alphabet() {
        let s = random_base36(12);
        assert_eq!(s.len(), 12);
        assert!(s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
