//! Hashid-style integer-to-string encoding for slug generation.
//!
//! Encodes one or more non-negative integers into a compact alphanumeric
//! string: the classic hashids scheme with its default alphabet and no salt.
//! The encoding is deterministic, so equal seeds always yield equal slugs;
//! uniqueness is the store's job, not the encoder's. Nothing in the service
//! ever decodes a slug, so only the encode direction is implemented.

/// Full encoding alphabet before the separator set is carved out.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Characters reserved to join multi-number encodings; removed from the
/// working alphabet so a separator can never be mistaken for a digit.
const SEPARATORS: &[u8] = b"cfhistuCFHISTU";

/// One character in `GUARD_DIV` is reserved as a guard for minimum-length
/// padding. No minimum length is used here, but the reservation still has to
/// happen for the output to match the standard scheme.
const GUARD_DIV: usize = 12;

/// Encodes `numbers` into a slug.
///
/// An empty input encodes to an empty string. Output consists solely of
/// ASCII alphanumeric characters.
pub fn encode(numbers: &[u64]) -> String {
    if numbers.is_empty() {
        return String::new();
    }

    let mut working: Vec<u8> = ALPHABET
        .iter()
        .copied()
        .filter(|c| !SEPARATORS.contains(c))
        .collect();
    let guard_count = working.len().div_ceil(GUARD_DIV);
    let mut alphabet = working.split_off(guard_count);

    let seed: u64 = numbers
        .iter()
        .enumerate()
        .map(|(i, &n)| n % (i as u64 + 100))
        .sum();
    let lottery = alphabet[(seed % alphabet.len() as u64) as usize];

    let mut out = vec![lottery];
    for (i, &n) in numbers.iter().enumerate() {
        let mut salt = Vec::with_capacity(alphabet.len());
        salt.push(lottery);
        salt.extend_from_slice(&alphabet[..alphabet.len() - 1]);
        consistent_shuffle(&mut alphabet, &salt);

        let encoded = to_base(n, &alphabet);
        if i + 1 < numbers.len() {
            let sep = (n % (u64::from(encoded[0]) + i as u64)) % SEPARATORS.len() as u64;
            out.extend_from_slice(&encoded);
            out.push(SEPARATORS[sep as usize]);
        } else {
            out.extend_from_slice(&encoded);
        }
    }

    out.into_iter().map(char::from).collect()
}

/// Salt-fed Fisher-Yates shuffle; the same salt always produces the same
/// permutation.
fn consistent_shuffle(chars: &mut [u8], salt: &[u8]) {
    if salt.is_empty() {
        return;
    }

    let mut v = 0usize;
    let mut p = 0usize;
    let mut i = chars.len() - 1;
    while i > 0 {
        v %= salt.len();
        let int = salt[v] as usize;
        p += int;
        let j = (int + v + p) % i;
        chars.swap(i, j);
        i -= 1;
        v += 1;
    }
}

/// Base-N digit expansion over `alphabet`, most significant digit first.
fn to_base(mut n: u64, alphabet: &[u8]) -> Vec<u8> {
    let base = alphabet.len() as u64;
    let mut digits = Vec::new();
    loop {
        digits.push(alphabet[(n % base) as usize]);
        n /= base;
        if n == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}
