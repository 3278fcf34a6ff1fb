// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Generated identifiers: entity ids, booking references and reward codes.

use uuid::Uuid;

/// Prefix of every booking reference code.
pub const REFERENCE_PREFIX: &str = "BK";

/// Characters a reward code is drawn from.
pub const REWARD_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in a reward code.
pub const REWARD_CODE_LENGTH: usize = 6;

const REFERENCE_MIN: u32 = 100_000;
const REFERENCE_SPAN: u32 = 900_000;

/// Generates a new entity identifier (UUID v4, simple form).
#[must_use]
pub fn new_entity_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Generates a booking reference: `BK` followed by six digits.
///
/// References are not guaranteed unique. The 900,000 value space keeps
/// collisions unlikely at the expected booking volume.
#[must_use]
pub fn generate_reference_code() -> String {
    reference_code_from(rand::random::<u32>())
}

/// Builds a booking reference from a random value.
#[must_use]
pub fn reference_code_from(entropy: u32) -> String {
    format!("{REFERENCE_PREFIX}{}", REFERENCE_MIN + entropy % REFERENCE_SPAN)
}

/// Generates a reward code of [`REWARD_CODE_LENGTH`] characters.
#[must_use]
pub fn generate_reward_code() -> String {
    reward_code_from(std::iter::repeat_with(rand::random::<u32>))
}

/// Builds a reward code, one character per random value.
///
/// Stops early if `entropy` yields fewer than [`REWARD_CODE_LENGTH`] values.
#[must_use]
pub fn reward_code_from<I>(entropy: I) -> String
where
    I: IntoIterator<Item = u32>,
{
    entropy
        .into_iter()
        .take(REWARD_CODE_LENGTH)
        .map(|value| {
            let index: usize = value as usize % REWARD_CODE_ALPHABET.len();
            char::from(REWARD_CODE_ALPHABET[index])
        })
        .collect()
}
