//! Policy-driven password generation.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::service::restriction::{
    LOWER_PASSWORD_CHARS, NUMERIC_PASSWORD_CHARS, Restriction, UPPER_PASSWORD_CHARS,
};

const ABSOLUTE_MINIMUM_LENGTH: u32 = 8;

const DEFAULT_MAXIMUM_LENGTH: u32 = 16;

/// Characters usable in a login password. Vowels are left out so the result
/// never spells anything.
const LOGIN_PASSWORD_CHARS: &str = "1234567890bcdfghjklmnpqrstvwxzBCDFGHJKLMNPQRSTVWXYZ";

/// Generate a password satisfying `restriction`.
pub fn from_restriction(restriction: &Restriction, start_special: bool) -> String {
    generate(
        restriction.min_upper,
        restriction.min_lower,
        restriction.min_numeric,
        restriction.min_special,
        restriction.min_length,
        restriction.max_length,
        &restriction.special,
        start_special,
    )
}

/// Generate a password with the default characteristics, used when no policy
/// is selected or the named policy does not exist.
pub fn generate_default() -> String {
    generate(
        0,
        0,
        0,
        0,
        ABSOLUTE_MINIMUM_LENGTH,
        DEFAULT_MAXIMUM_LENGTH,
        "",
        false,
    )
}

/// Generate a password from explicit per-class minimums and length bounds.
///
/// The result contains at least the requested number of characters from each
/// class, padded to the chosen length from the union of all permitted
/// characters, then shuffled. With `start_special` the password leads with a
/// character from `special_chars`; the leading special consumes one of the
/// required specials and one unit of length.
#[allow(clippy::too_many_arguments)]
pub fn generate(
    upper_count: u32,
    lower_count: u32,
    numeric_count: u32,
    special_count: u32,
    min_length: u32,
    max_length: u32,
    special_chars: &str,
    start_special: bool,
) -> String {
    let lead_special = start_special && special_count > 0 && !special_chars.is_empty();

    let mut special_count = special_count;
    let mut min_length = min_length;
    let mut max_length = max_length;
    if lead_special {
        special_count -= 1;
        min_length = min_length.saturating_sub(1);
        max_length = max_length.saturating_sub(1);
    }

    let class_total = upper_count + lower_count + numeric_count + special_count;
    let true_min = min_length.max(class_total);

    let mut rng = rand::rng();
    let length = if max_length <= true_min {
        true_min
    } else {
        rng.random_range(true_min..=max_length)
    };

    let mut pool: Vec<char> = Vec::with_capacity(length as usize);
    push_random_chars(&mut pool, upper_count, UPPER_PASSWORD_CHARS, &mut rng);
    push_random_chars(&mut pool, lower_count, LOWER_PASSWORD_CHARS, &mut rng);
    push_random_chars(&mut pool, numeric_count, NUMERIC_PASSWORD_CHARS, &mut rng);
    if !special_chars.is_empty() {
        push_random_chars(&mut pool, special_count, special_chars, &mut rng);
    }

    let mut union = String::with_capacity(
        UPPER_PASSWORD_CHARS.len()
            + LOWER_PASSWORD_CHARS.len()
            + NUMERIC_PASSWORD_CHARS.len()
            + special_chars.len(),
    );
    union.push_str(UPPER_PASSWORD_CHARS);
    union.push_str(LOWER_PASSWORD_CHARS);
    union.push_str(NUMERIC_PASSWORD_CHARS);
    union.push_str(special_chars);
    push_random_chars(&mut pool, length - class_total, &union, &mut rng);

    pool.shuffle(&mut rng);

    let mut password = String::with_capacity(pool.len() + 1);
    if lead_special {
        let specials: Vec<char> = special_chars.chars().collect();
        password.push(specials[rng.random_range(0..specials.len())]);
    }
    password.extend(pool);
    password
}

/// An eight character password from the reduced charset, used when creating
/// application users.
pub fn random_login_password() -> String {
    let chars: Vec<char> = LOGIN_PASSWORD_CHARS.chars().collect();
    let mut rng = rand::rng();
    (0..ABSOLUTE_MINIMUM_LENGTH)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}

fn push_random_chars(pool: &mut Vec<char>, count: u32, charset: &str, rng: &mut impl Rng) {
    let chars: Vec<char> = charset.chars().collect();
    if chars.is_empty() {
        return;
    }
    for _ in 0..count {
        pool.push(chars[rng.random_range(0..chars.len())]);
    }
}
