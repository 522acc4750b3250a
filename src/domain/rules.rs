//! Fixed rules of the show format.

/// Cost of buying a vowel, in dollars.
pub const VOWEL_COST: u32 = 250;

/// Default number of rounds per game.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 3;

pub const MIN_TEAMS: usize = 2;
pub const MAX_TEAMS: usize = 6;

pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

pub const CONSONANTS: [char; 21] = [
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'X',
    'Y', 'Z',
];

pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter.to_ascii_uppercase())
}

pub fn is_consonant(letter: char) -> bool {
    letter.is_ascii_alphabetic() && !is_vowel(letter)
}
